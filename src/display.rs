use chrono::{Datelike, NaiveDate, Weekday};
use crate::models::forecast::TimeSlot;

/// Width in characters of a full chart bar
const BAR_WIDTH: usize = 30;

/// Translates a KMA category code to a display label. Unknown codes pass
/// through unchanged.
///
/// # Arguments
///
/// * 'code' - the category code, e.g. "TMP"
pub fn category_name(code: &str) -> &str {
    match code {
        "POP" => "Precip chance",
        "PTY" => "Precip type",
        "REH" => "Humidity",
        "SKY" => "Sky",
        "TMP" => "Temperature",
        "TMN" => "Min temp",
        "TMX" => "Max temp",
        "UUU" => "Wind (E-W)",
        "VVV" => "Wind (N-S)",
        "WAV" => "Wave height",
        "VEC" => "Wind direction",
        "WSD" => "Wind speed",
        other => other,
    }
}

/// Translates a SKY code value to display text, unknown values pass through
///
/// # Arguments
///
/// * 'value' - the SKY code value
pub fn interpret_sky(value: &str) -> &str {
    match value {
        "1" => "Clear",
        "3" => "Mostly cloudy",
        "4" => "Overcast",
        other => other,
    }
}

/// Translates a PTY code value to display text, unknown values pass through
///
/// # Arguments
///
/// * 'value' - the PTY code value
pub fn interpret_pty(value: &str) -> &str {
    match value {
        "0" => "None",
        "1" => "Rain",
        "2" => "Rain/snow",
        "3" => "Snow",
        "4" => "Showers",
        other => other,
    }
}

/// Chooses a weather glyph for a slot. Precipitation type takes precedence
/// over sky state, as in the upstream category definitions.
///
/// # Arguments
///
/// * 'sky' - the SKY code value
/// * 'pty' - the PTY code value
pub fn weather_icon(sky: &str, pty: &str) -> &'static str {
    if pty != "0" {
        match pty {
            "1" | "4" => "🌧",
            "2" => "🌨",
            "3" => "❄",
            _ => "🌈",
        }
    } else {
        match sky {
            "1" => "☀",
            "3" => "⛅",
            "4" => "☁",
            _ => "🌈",
        }
    }
}

/// Formats a compact date YYYYMMDD as YYYY.MM.DD, short input yields an
/// empty string
///
/// # Arguments
///
/// * 'date' - date on the form YYYYMMDD
pub fn format_display_date(date: &str) -> String {
    if date.len() < 8 || !date.is_ascii() {
        return String::new();
    }
    format!("{}.{}.{}", &date[0..4], &date[4..6], &date[6..8])
}

/// Formats a compact time HHMM as HH:MM, short input yields an empty string
///
/// # Arguments
///
/// * 'time' - time on the form HHMM
pub fn format_display_time(time: &str) -> String {
    if time.len() < 4 || !time.is_ascii() {
        return String::new();
    }
    format!("{}:{}", &time[0..2], &time[2..4])
}

/// Returns the weekday abbreviation for a compact date, or an empty string
/// when the date does not parse
///
/// # Arguments
///
/// * 'date' - date on the form YYYYMMDD
pub fn day_of_week(date: &str) -> &'static str {
    match NaiveDate::parse_from_str(date, "%Y%m%d") {
        Ok(d) => match d.weekday() {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        },
        Err(_) => "",
    }
}

/// Returns the label for a day offset relative to today
///
/// # Arguments
///
/// * 'offset' - number of days ahead, 0 for today
pub fn day_label(offset: i64) -> &'static str {
    match offset {
        0 => "Today",
        1 => "Tomorrow",
        2 => "In two days",
        _ => "",
    }
}

/// Builds the heading line above the forecast cards
///
/// # Arguments
///
/// * 'location_name' - name of the selected location
/// * 'offset' - day offset the forecast is rendered for
/// * 'date' - forecast date on the form YYYYMMDD
pub fn banner(location_name: &str, offset: i64, date: &str) -> String {
    format!("{} weather {} ({}, {})",
            location_name, day_label(offset),
            format_display_date(date), day_of_week(date))
}

/// Renders one card row per slot with time, glyph, temperature, condition
/// text, precipitation chance and humidity. Slots lacking any of SKY, PTY
/// or TMP are skipped. Absent POP and REH default to "0".
///
/// # Arguments
///
/// * 'slots' - the forecast slots to render
pub fn render_cards(slots: &[TimeSlot]) -> String {
    let mut out = String::new();

    for slot in slots {
        let (sky, pty, tmp) = match (slot.value("SKY"), slot.value("PTY"), slot.value("TMP")) {
            (Some(sky), Some(pty), Some(tmp)) => (sky, pty, tmp),
            _ => continue,
        };

        let condition = if pty != "0" { interpret_pty(pty) } else { interpret_sky(sky) };

        out += &format!("{}  {}  {:>4}°C  {:<13}  precip {:>3}%  humidity {:>3}%\n",
                        format_display_time(&slot.time),
                        weather_icon(sky, pty),
                        tmp,
                        condition,
                        slot.value_or("POP", "0"),
                        slot.value_or("REH", "0"));
    }

    out
}

/// Renders an ASCII bar chart of the temperature over the slots. Slots
/// without a numeric TMP value are skipped. Bars are scaled between the
/// lowest and highest temperature present.
///
/// # Arguments
///
/// * 'slots' - the forecast slots to chart
pub fn render_temp_chart(slots: &[TimeSlot]) -> String {
    let values: Vec<(&TimeSlot, f64)> = slots.iter()
        .filter_map(|s| s.value("TMP").and_then(|v| v.parse::<f64>().ok()).map(|t| (s, t)))
        .collect();

    if values.is_empty() {
        return String::new();
    }

    let min = values.iter().map(|(_, t)| *t).fold(f64::INFINITY, f64::min);
    let max = values.iter().map(|(_, t)| *t).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let mut out = String::from("Temperature (°C)\n");
    for (slot, temp) in values {
        let width = if span > 0.0 {
            1 + ((temp - min) / span * (BAR_WIDTH - 1) as f64).round() as usize
        } else {
            BAR_WIDTH / 2
        };
        out += &format!("{} {:<bar$} {:>5.1}\n",
                        format_display_time(&slot.time),
                        "█".repeat(width), temp, bar = BAR_WIDTH);
    }

    out
}

/// Renders an ASCII bar chart of the precipitation probability over the
/// slots. Slots without a numeric POP value are skipped. Bars are scaled
/// against the fixed 0-100 range.
///
/// # Arguments
///
/// * 'slots' - the forecast slots to chart
pub fn render_pop_chart(slots: &[TimeSlot]) -> String {
    let values: Vec<(&TimeSlot, f64)> = slots.iter()
        .filter_map(|s| s.value("POP").and_then(|v| v.parse::<f64>().ok()).map(|p| (s, p)))
        .collect();

    if values.is_empty() {
        return String::new();
    }

    let mut out = String::from("Precipitation chance (%)\n");
    for (slot, pop) in values {
        let width = (pop.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f64).round() as usize;
        out += &format!("{} {:<bar$} {:>3}\n",
                        format_display_time(&slot.time),
                        "█".repeat(width), pop as u32, bar = BAR_WIDTH);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn slot(date: &str, time: &str, items: &[(&str, &str)]) -> TimeSlot {
        TimeSlot {
            date: date.to_string(),
            time: time.to_string(),
            items: items.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<String, String>>(),
        }
    }

    #[test]
    fn category_names() {
        assert_eq!(category_name("TMP"), "Temperature");
        assert_eq!(category_name("POP"), "Precip chance");
        assert_eq!(category_name("XYZ"), "XYZ");
    }

    #[test]
    fn sky_and_pty_interpretation() {
        assert_eq!(interpret_sky("1"), "Clear");
        assert_eq!(interpret_sky("4"), "Overcast");
        assert_eq!(interpret_sky("9"), "9");
        assert_eq!(interpret_pty("0"), "None");
        assert_eq!(interpret_pty("2"), "Rain/snow");
        assert_eq!(interpret_pty("8"), "8");
    }

    #[test]
    fn precipitation_takes_precedence_for_icons() {
        assert_eq!(weather_icon("1", "1"), "🌧");
        assert_eq!(weather_icon("1", "3"), "❄");
        assert_eq!(weather_icon("1", "0"), "☀");
        assert_eq!(weather_icon("4", "0"), "☁");
        assert_eq!(weather_icon("7", "0"), "🌈");
    }

    #[test]
    fn date_and_time_formatting() {
        assert_eq!(format_display_date("20240101"), "2024.01.01");
        assert_eq!(format_display_date("2024"), "");
        assert_eq!(format_display_date(""), "");
        assert_eq!(format_display_time("0600"), "06:00");
        assert_eq!(format_display_time("06"), "");
    }

    #[test]
    fn weekday_resolution() {
        assert_eq!(day_of_week("20240101"), "Mon");
        assert_eq!(day_of_week("20240106"), "Sat");
        assert_eq!(day_of_week("garbage"), "");
    }

    #[test]
    fn banner_layout() {
        let heading = banner("Seoul Jung-gu (City Hall)", 0, "20240101");
        assert_eq!(heading, "Seoul Jung-gu (City Hall) weather Today (2024.01.01, Mon)");
    }

    #[test]
    fn cards_skip_slots_missing_required_categories() {
        let slots = vec![
            slot("20240101", "0600", &[("SKY", "1"), ("PTY", "0"), ("TMP", "5"), ("POP", "10"), ("REH", "60")]),
            slot("20240101", "0700", &[("SKY", "1"), ("TMP", "6")]),
        ];

        let cards = render_cards(&slots);
        assert_eq!(cards.lines().count(), 1);
        assert!(cards.contains("06:00"));
        assert!(cards.contains("Clear"));
        assert!(cards.contains("precip  10%"));
        assert!(!cards.contains("07:00"));
    }

    #[test]
    fn cards_default_absent_pop_and_reh() {
        let slots = vec![
            slot("20240101", "0900", &[("SKY", "4"), ("PTY", "1"), ("TMP", "3")]),
        ];

        let cards = render_cards(&slots);
        assert!(cards.contains("precip   0%"));
        assert!(cards.contains("humidity   0%"));
        assert!(cards.contains("Rain"));
    }

    #[test]
    fn temp_chart_scales_between_extremes() {
        let slots = vec![
            slot("20240101", "0600", &[("TMP", "0")]),
            slot("20240101", "0900", &[("TMP", "10")]),
            slot("20240101", "1200", &[("SKY", "1")]),
        ];

        let chart = render_temp_chart(&slots);
        assert!(chart.starts_with("Temperature"));
        assert_eq!(chart.lines().count(), 3);
        assert!(!chart.contains("12:00"));

        let bars: Vec<usize> = chart.lines().skip(1)
            .map(|l| l.matches('█').count())
            .collect();
        assert!(bars[0] < bars[1]);
    }

    #[test]
    fn pop_chart_uses_fixed_scale() {
        let slots = vec![
            slot("20240101", "0600", &[("POP", "0")]),
            slot("20240101", "0900", &[("POP", "100")]),
        ];

        let chart = render_pop_chart(&slots);
        let bars: Vec<usize> = chart.lines().skip(1)
            .map(|l| l.matches('█').count())
            .collect();
        assert_eq!(bars, vec![0, 30]);
    }

    #[test]
    fn charts_of_empty_input_are_empty() {
        assert_eq!(render_temp_chart(&[]), "");
        assert_eq!(render_pop_chart(&[]), "");
    }
}
