
use chrono::{Datelike, NaiveDate};

/// Get the current local date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Get the number of months between two dates.
/// Only the year and month fields count, the days
/// are irrelevant. The result is negative when the
/// other date lies in an earlier month.
pub trait CountMonths {
    fn count_months(&self, other: &Self) -> i64;
}

/// Implement difference months for NaiveDate.
impl CountMonths for NaiveDate {
    fn count_months(&self, other: &Self) -> i64 {
        let years = (other.year() - self.year()) as i64;
        let months = other.month() as i64 - self.month() as i64;
        years * 12 + months
    }
}
