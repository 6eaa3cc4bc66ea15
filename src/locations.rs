/// A point in the KMA forecast grid, identified by its grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub name: &'static str,
    pub nx: u32,
    pub ny: u32,
}

/// A named regional group of grid points
pub struct LocationGroup {
    pub group: &'static str,
    pub locations: &'static [Location],
}

const SEOUL: [Location; 23] = [
    Location { name: "Seoul Jung-gu (City Hall)", nx: 60, ny: 127 },
    Location { name: "Seoul Gangnam-gu", nx: 61, ny: 126 },
    Location { name: "Seoul Gangdong-gu", nx: 62, ny: 126 },
    Location { name: "Seoul Gangbuk-gu", nx: 61, ny: 128 },
    Location { name: "Seoul Gangseo-gu", nx: 58, ny: 126 },
    Location { name: "Seoul Gwanak-gu", nx: 59, ny: 125 },
    Location { name: "Seoul Gwangjin-gu", nx: 62, ny: 126 },
    Location { name: "Seoul Nowon-gu", nx: 61, ny: 129 },
    Location { name: "Seoul Dobong-gu", nx: 61, ny: 129 },
    Location { name: "Seoul Dongdaemun-gu", nx: 61, ny: 127 },
    Location { name: "Seoul Dongjak-gu", nx: 59, ny: 125 },
    Location { name: "Seoul Mapo-gu", nx: 59, ny: 127 },
    Location { name: "Seoul Seodaemun-gu", nx: 59, ny: 127 },
    Location { name: "Seoul Seocho-gu", nx: 61, ny: 125 },
    Location { name: "Seoul Seongdong-gu", nx: 61, ny: 127 },
    Location { name: "Seoul Seongbuk-gu", nx: 61, ny: 127 },
    Location { name: "Seoul Songpa-gu", nx: 62, ny: 126 },
    Location { name: "Seoul Yangcheon-gu", nx: 58, ny: 126 },
    Location { name: "Seoul Yeongdeungpo-gu", nx: 58, ny: 126 },
    Location { name: "Seoul Yongsan-gu", nx: 60, ny: 126 },
    Location { name: "Seoul Eunpyeong-gu", nx: 59, ny: 127 },
    Location { name: "Seoul Jongno-gu", nx: 60, ny: 127 },
    Location { name: "Seoul Jungnang-gu", nx: 62, ny: 128 },
];

const BUSAN: [Location; 15] = [
    Location { name: "Busan Jung-gu", nx: 97, ny: 74 },
    Location { name: "Busan Seo-gu", nx: 97, ny: 74 },
    Location { name: "Busan Dong-gu", nx: 98, ny: 75 },
    Location { name: "Busan Yeongdo-gu", nx: 98, ny: 74 },
    Location { name: "Busan Busanjin-gu", nx: 97, ny: 75 },
    Location { name: "Busan Dongnae-gu", nx: 98, ny: 76 },
    Location { name: "Busan Nam-gu", nx: 98, ny: 75 },
    Location { name: "Busan Buk-gu", nx: 96, ny: 76 },
    Location { name: "Busan Haeundae-gu", nx: 99, ny: 75 },
    Location { name: "Busan Saha-gu", nx: 96, ny: 74 },
    Location { name: "Busan Geumjeong-gu", nx: 98, ny: 77 },
    Location { name: "Busan Gangseo-gu", nx: 96, ny: 76 },
    Location { name: "Busan Yeonje-gu", nx: 98, ny: 76 },
    Location { name: "Busan Suyeong-gu", nx: 99, ny: 75 },
    Location { name: "Busan Sasang-gu", nx: 96, ny: 75 },
];

const GYEONGGI: [Location; 30] = [
    Location { name: "Gyeonggi Suwon", nx: 61, ny: 121 },
    Location { name: "Gyeonggi Seongnam", nx: 63, ny: 124 },
    Location { name: "Gyeonggi Yongin", nx: 64, ny: 119 },
    Location { name: "Gyeonggi Anyang", nx: 59, ny: 123 },
    Location { name: "Gyeonggi Ansan", nx: 58, ny: 121 },
    Location { name: "Gyeonggi Goyang", nx: 57, ny: 128 },
    Location { name: "Gyeonggi Gwacheon", nx: 60, ny: 124 },
    Location { name: "Gyeonggi Gwangmyeong", nx: 58, ny: 125 },
    Location { name: "Gyeonggi Gwangju", nx: 65, ny: 123 },
    Location { name: "Gyeonggi Guri", nx: 62, ny: 127 },
    Location { name: "Gyeonggi Gunpo", nx: 59, ny: 122 },
    Location { name: "Gyeonggi Gimpo", nx: 55, ny: 128 },
    Location { name: "Gyeonggi Namyangju", nx: 64, ny: 128 },
    Location { name: "Gyeonggi Dongducheon", nx: 61, ny: 134 },
    Location { name: "Gyeonggi Bucheon", nx: 56, ny: 125 },
    Location { name: "Gyeonggi Siheung", nx: 57, ny: 123 },
    Location { name: "Gyeonggi Anseong", nx: 65, ny: 115 },
    Location { name: "Gyeonggi Yangju", nx: 61, ny: 131 },
    Location { name: "Gyeonggi Yangpyeong", nx: 69, ny: 125 },
    Location { name: "Gyeonggi Yeoju", nx: 71, ny: 121 },
    Location { name: "Gyeonggi Yeoncheon", nx: 61, ny: 138 },
    Location { name: "Gyeonggi Osan", nx: 62, ny: 118 },
    Location { name: "Gyeonggi Uiwang", nx: 60, ny: 122 },
    Location { name: "Gyeonggi Uijeongbu", nx: 61, ny: 130 },
    Location { name: "Gyeonggi Icheon", nx: 68, ny: 121 },
    Location { name: "Gyeonggi Paju", nx: 56, ny: 131 },
    Location { name: "Gyeonggi Pyeongtaek", nx: 62, ny: 114 },
    Location { name: "Gyeonggi Pocheon", nx: 64, ny: 134 },
    Location { name: "Gyeonggi Hanam", nx: 64, ny: 126 },
    Location { name: "Gyeonggi Hwaseong", nx: 57, ny: 119 },
];

const DAEGU: [Location; 8] = [
    Location { name: "Daegu Jung-gu", nx: 89, ny: 90 },
    Location { name: "Daegu Dong-gu", nx: 90, ny: 91 },
    Location { name: "Daegu Seo-gu", nx: 88, ny: 90 },
    Location { name: "Daegu Nam-gu", nx: 89, ny: 90 },
    Location { name: "Daegu Buk-gu", nx: 89, ny: 91 },
    Location { name: "Daegu Suseong-gu", nx: 89, ny: 90 },
    Location { name: "Daegu Dalseo-gu", nx: 88, ny: 90 },
    Location { name: "Daegu Dalseong-gun", nx: 86, ny: 88 },
];

const INCHEON: [Location; 9] = [
    Location { name: "Incheon Jung-gu", nx: 55, ny: 124 },
    Location { name: "Incheon Dong-gu", nx: 55, ny: 124 },
    Location { name: "Incheon Michuhol-gu", nx: 55, ny: 124 },
    Location { name: "Incheon Yeonsu-gu", nx: 55, ny: 123 },
    Location { name: "Incheon Namdong-gu", nx: 56, ny: 124 },
    Location { name: "Incheon Bupyeong-gu", nx: 55, ny: 125 },
    Location { name: "Incheon Gyeyang-gu", nx: 56, ny: 126 },
    Location { name: "Incheon Seo-gu", nx: 55, ny: 126 },
    Location { name: "Incheon Ganghwa-gun", nx: 51, ny: 130 },
];

const JEJU: [Location; 2] = [
    Location { name: "Jeju Jeju-si", nx: 53, ny: 38 },
    Location { name: "Jeju Seogwipo-si", nx: 52, ny: 33 },
];

pub const LOCATION_GROUPS: [LocationGroup; 6] = [
    LocationGroup { group: "Seoul", locations: &SEOUL },
    LocationGroup { group: "Busan", locations: &BUSAN },
    LocationGroup { group: "Gyeonggi", locations: &GYEONGGI },
    LocationGroup { group: "Daegu", locations: &DAEGU },
    LocationGroup { group: "Incheon", locations: &INCHEON },
    LocationGroup { group: "Jeju", locations: &JEJU },
];

/// Finds a location by name. An exact match wins, otherwise the first
/// case-insensitive substring match over the groups in table order.
///
/// # Arguments
///
/// * 'name' - full or partial location name
pub fn find(name: &str) -> Option<&'static Location> {
    for group in LOCATION_GROUPS.iter() {
        if let Some(location) = group.locations.iter().find(|l| l.name == name) {
            return Some(location);
        }
    }

    let needle = name.to_lowercase();
    for group in LOCATION_GROUPS.iter() {
        if let Some(location) = group.locations.iter()
            .find(|l| l.name.to_lowercase().contains(&needle)) {
            return Some(location);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_exact_name() {
        let location = find("Seoul Jung-gu (City Hall)").unwrap();
        assert_eq!(location.nx, 60);
        assert_eq!(location.ny, 127);
    }

    #[test]
    fn finds_partial_name_case_insensitively() {
        let location = find("haeundae").unwrap();
        assert_eq!(location.name, "Busan Haeundae-gu");
        assert_eq!((location.nx, location.ny), (99, 75));
    }

    #[test]
    fn exact_match_wins_over_substring() {
        // "Busan Jung-gu" is a substring of nothing earlier, but "Jung-gu"
        // alone appears in several groups; exact lookup must not fuzz
        let location = find("Daegu Jung-gu").unwrap();
        assert_eq!((location.nx, location.ny), (89, 90));
    }

    #[test]
    fn unknown_name_yields_none() {
        assert!(find("Atlantis").is_none());
    }

    #[test]
    fn table_has_all_groups() {
        let total: usize = LOCATION_GROUPS.iter().map(|g| g.locations.len()).sum();
        assert_eq!(total, 87);
    }
}
