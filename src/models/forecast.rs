use std::collections::BTreeMap;

/// One forecast snapshot, i.e. all category values the API reported for a
/// single (date, time) pair. Date is on the form YYYYMMDD and time on the
/// form HHMM. Categories are not necessarily exhaustive, absent ones are
/// simply not present in the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub date: String,
    pub time: String,
    pub items: BTreeMap<String, String>,
}

impl TimeSlot {
    /// Returns the value for a category, if the API reported one
    ///
    /// # Arguments
    ///
    /// * 'category' - the category code, e.g. "TMP"
    pub fn value(&self, category: &str) -> Option<&str> {
        self.items.get(category).map(|v| v.as_str())
    }

    /// Returns the value for a category, or a default when absent
    ///
    /// # Arguments
    ///
    /// * 'category' - the category code
    /// * 'default' - value to substitute when the category is absent
    pub fn value_or<'a>(&'a self, category: &str, default: &'a str) -> &'a str {
        self.value(category).unwrap_or(default)
    }
}
