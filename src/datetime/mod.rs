//! # Date/Time Helpers
//!
//! Day-boundary and relative-day helpers for UTC datetimes, built on
//! `chrono`.
//!
//! ## Examples
//!
//! ```
//! use chrono::{TimeZone, Timelike, Utc};
//! use web_toolbelt_rs::datetime::DateTimeToolbelt;
//!
//! let noon = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 45).unwrap();
//! assert_eq!(noon.start_of_day().hour(), 0);
//! assert_eq!(noon.end_of_day().second(), 59);
//! ```

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

/// Extension trait adding day helpers to UTC datetimes.
pub trait DateTimeToolbelt {
    /// Returns midnight (00:00:00.000) of the same date.
    fn start_of_day(&self) -> Self;

    /// Returns the last representable millisecond (23:59:59.999) of the same
    /// date.
    fn end_of_day(&self) -> Self;

    /// Checks if the date is today, compared in UTC.
    fn is_today(&self) -> bool;

    /// Checks if the date is tomorrow, compared in UTC.
    fn is_tomorrow(&self) -> bool;

    /// Checks if the date is yesterday, compared in UTC.
    fn is_yesterday(&self) -> bool;
}

impl DateTimeToolbelt for DateTime<Utc> {
    fn start_of_day(&self) -> Self {
        Utc.from_utc_datetime(&self.date_naive().and_time(NaiveTime::MIN))
    }

    fn end_of_day(&self) -> Self {
        let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
            .expect("23:59:59.999 is a valid wall-clock time");
        Utc.from_utc_datetime(&self.date_naive().and_time(end))
    }

    fn is_today(&self) -> bool {
        self.date_naive() == Utc::now().date_naive()
    }

    fn is_tomorrow(&self) -> bool {
        self.date_naive() == Utc::now().date_naive() + Duration::days(1)
    }

    fn is_yesterday(&self) -> bool {
        self.date_naive() == Utc::now().date_naive() - Duration::days(1)
    }
}
