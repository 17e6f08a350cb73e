//! Configuration access port trait.

use chrono::NaiveDate;

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;

    /// Reads a `YYYY-MM-DD` value. `Some(Err)` means the key is present but
    /// malformed.
    fn get_date(&self, section: &str, key: &str) -> Option<Result<NaiveDate, String>> {
        self.get_string(section, key)
            .filter(|s| !s.trim().is_empty())
            .map(|s| crate::domain::action::parse_date(&s))
    }
}
