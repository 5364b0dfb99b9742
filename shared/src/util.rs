//! Small date utilities shared by server and client

use chrono::{Datelike, NaiveDate};

/// Inclusive day span of a leave period.
///
/// A one-day leave (start == end) counts as 1.
pub fn leave_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Number of calendar days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid month");
    (next - first).num_days() as u32
}

/// First day of the month the given date falls in.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("valid month")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_leave_days_inclusive() {
        assert_eq!(leave_days(d("2023-05-10"), d("2023-05-12")), 3);
        assert_eq!(leave_days(d("2023-05-10"), d("2023-05-10")), 1);
        // spans a month boundary
        assert_eq!(leave_days(d("2023-05-30"), d("2023-06-02")), 4);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn test_month_start() {
        assert_eq!(month_start(d("2023-05-17")), d("2023-05-01"));
        assert_eq!(month_start(d("2023-05-01")), d("2023-05-01"));
    }
}
