use chrono::{DateTime, Local, TimeDelta, Timelike};

/// Issue times at which KMA publishes a new village forecast cycle,
/// ordered over the day
const ISSUE_TIMES: [(u32, &str); 8] = [
    (2, "0200"),
    (5, "0500"),
    (8, "0800"),
    (11, "1100"),
    (14, "1400"),
    (17, "1700"),
    (20, "2000"),
    (23, "2300"),
];

/// Request parameters identifying one forecast issue cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseParams {
    pub base_date: String,
    pub base_time: String,
}

/// Selects the forecast cycle to request given the current wall-clock time.
///
/// The latest issue time with an hour not later than the current hour wins.
/// Before the first issue time of the day (hours 00-01) there is no cycle
/// published yet for the current date, so the previous day's last cycle
/// is used instead.
///
/// # Arguments
///
/// * 'now' - the current local date and time
pub fn base_params(now: DateTime<Local>) -> BaseParams {
    let hour = now.hour();

    for (issue_hour, issue_time) in ISSUE_TIMES.iter().rev() {
        if *issue_hour <= hour {
            return BaseParams {
                base_date: now.format("%Y%m%d").to_string(),
                base_time: issue_time.to_string(),
            };
        }
    }

    let previous_day = now - TimeDelta::days(1);
    BaseParams {
        base_date: previous_day.format("%Y%m%d").to_string(),
        base_time: ISSUE_TIMES[ISSUE_TIMES.len() - 1].1.to_string(),
    }
}

/// Returns the forecast date for a day offset from now, on the form YYYYMMDD
///
/// # Arguments
///
/// * 'now' - the current local date and time
/// * 'offset' - number of days ahead, 0 for today
pub fn offset_date(now: DateTime<Local>, offset: i64) -> String {
    (now + TimeDelta::days(offset)).format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn before_second_cycle_selects_first() {
        let base = base_params(local(2024, 1, 15, 4, 59));
        assert_eq!(base.base_date, "20240115");
        assert_eq!(base.base_time, "0200");
    }

    #[test]
    fn on_the_hour_selects_new_cycle() {
        let base = base_params(local(2024, 1, 15, 5, 0));
        assert_eq!(base.base_date, "20240115");
        assert_eq!(base.base_time, "0500");
    }

    #[test]
    fn before_first_cycle_falls_back_to_previous_day() {
        let base = base_params(local(2024, 1, 15, 1, 0));
        assert_eq!(base.base_date, "20240114");
        assert_eq!(base.base_time, "2300");
    }

    #[test]
    fn fallback_crosses_month_boundary() {
        let base = base_params(local(2024, 3, 1, 0, 30));
        assert_eq!(base.base_date, "20240229");
        assert_eq!(base.base_time, "2300");
    }

    #[test]
    fn late_evening_selects_last_cycle() {
        let base = base_params(local(2024, 1, 15, 23, 59));
        assert_eq!(base.base_date, "20240115");
        assert_eq!(base.base_time, "2300");
    }

    #[test]
    fn offset_dates() {
        let now = local(2024, 1, 31, 12, 0);
        assert_eq!(offset_date(now, 0), "20240131");
        assert_eq!(offset_date(now, 1), "20240201");
        assert_eq!(offset_date(now, 2), "20240202");
    }
}
