use std::collections::BTreeMap;
use crate::models::forecast::TimeSlot;
use crate::models::kma_forecast::ForecastRecord;

/// Groups the flat forecast records into one TimeSlot per (date, time) pair.
///
/// The records arrive as one unit per category, many units sharing the same
/// date and time. A single pass accumulates them into a map keyed by
/// (date, time), merging category/value pairs of same-key records. Since
/// both parts of the key are fixed-width digit strings the map order is
/// already date major, time minor, which is the required output order.
///
/// Empty input yields empty output.
///
/// # Arguments
///
/// * 'records' - flat forecast records as returned by the API
pub fn group_records(records: &[ForecastRecord]) -> Vec<TimeSlot> {
    let mut grouped: BTreeMap<(String, String), TimeSlot> = BTreeMap::new();

    for record in records {
        let slot = grouped
            .entry((record.fcst_date.clone(), record.fcst_time.clone()))
            .or_insert_with(|| TimeSlot {
                date: record.fcst_date.clone(),
                time: record.fcst_time.clone(),
                items: BTreeMap::new(),
            });
        slot.items.insert(record.category.clone(), record.fcst_value.clone());
    }

    grouped.into_values().collect()
}

/// Keeps only the slots for the given forecast date. Day switching is done
/// here on the client side, no new request is needed per day offset.
///
/// # Arguments
///
/// * 'slots' - grouped forecast slots
/// * 'date' - forecast date on the form YYYYMMDD
pub fn filter_by_date(slots: Vec<TimeSlot>, date: &str) -> Vec<TimeSlot> {
    slots.into_iter().filter(|s| s.date == date).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(date: &str, time: &str, category: &str, value: &str) -> ForecastRecord {
        ForecastRecord {
            fcst_date: date.to_string(),
            fcst_time: time.to_string(),
            category: category.to_string(),
            fcst_value: value.to_string(),
        }
    }

    #[test]
    fn groups_same_slot_records_into_one() {
        let records = vec![
            record("20240101", "0600", "TMP", "5"),
            record("20240101", "0600", "SKY", "1"),
        ];

        let slots = group_records(&records);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].date, "20240101");
        assert_eq!(slots[0].time, "0600");
        assert_eq!(slots[0].value("TMP"), Some("5"));
        assert_eq!(slots[0].value("SKY"), Some("1"));
    }

    #[test]
    fn output_is_date_major_time_minor() {
        let records = vec![
            record("20240102", "0000", "TMP", "1"),
            record("20240101", "2300", "TMP", "2"),
            record("20240101", "0600", "TMP", "3"),
            record("20240102", "0900", "TMP", "4"),
        ];

        let slots = group_records(&records);
        let keys: Vec<(&str, &str)> = slots.iter()
            .map(|s| (s.date.as_str(), s.time.as_str()))
            .collect();
        assert_eq!(keys, vec![
            ("20240101", "0600"),
            ("20240101", "2300"),
            ("20240102", "0000"),
            ("20240102", "0900"),
        ]);
    }

    #[test]
    fn each_input_pair_yields_exactly_one_slot() {
        let records = vec![
            record("20240101", "0600", "TMP", "5"),
            record("20240101", "0600", "SKY", "1"),
            record("20240101", "0700", "TMP", "6"),
            record("20240102", "0600", "TMP", "7"),
            record("20240102", "0600", "POP", "30"),
        ];

        let slots = group_records(&records);

        let input_pairs: HashSet<(&str, &str)> = records.iter()
            .map(|r| (r.fcst_date.as_str(), r.fcst_time.as_str()))
            .collect();
        let output_pairs: HashSet<(&str, &str)> = slots.iter()
            .map(|s| (s.date.as_str(), s.time.as_str()))
            .collect();
        assert_eq!(input_pairs, output_pairs);

        // no record dropped or duplicated
        let total_items: usize = slots.iter().map(|s| s.items.len()).sum();
        assert_eq!(total_items, records.len());
    }

    #[test]
    fn grouping_is_idempotent() {
        let records = vec![
            record("20240101", "0600", "TMP", "5"),
            record("20240101", "0900", "SKY", "4"),
            record("20240102", "0600", "TMP", "2"),
        ];

        assert_eq!(group_records(&records), group_records(&records));
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let a = vec![
            record("20240101", "0600", "TMP", "5"),
            record("20240101", "0600", "SKY", "1"),
            record("20240101", "0900", "TMP", "7"),
        ];
        let mut b = a.clone();
        b.reverse();

        assert_eq!(group_records(&a), group_records(&b));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(group_records(&[]).is_empty());
    }

    #[test]
    fn filters_on_forecast_date() {
        let records = vec![
            record("20240101", "0600", "TMP", "5"),
            record("20240102", "0600", "TMP", "6"),
            record("20240102", "0900", "TMP", "7"),
        ];

        let slots = filter_by_date(group_records(&records), "20240102");
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|s| s.date == "20240102"));

        let none = filter_by_date(group_records(&records), "20240103");
        assert!(none.is_empty());
    }
}
