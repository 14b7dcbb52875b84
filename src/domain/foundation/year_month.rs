//! Month-granularity date value object.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Wire format accepted for every month field.
pub const YEAR_MONTH_FORMAT: &str = "YYYY-MM";

/// A calendar month, stored as the first day of that month.
///
/// Parsing is strict: four year digits, a dash, two month digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Creates a month from its parts. Returns `None` for an out-of-range month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Parses a `YYYY-MM` string, attributing failures to `field`.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let invalid = || {
            ValidationError::invalid_format(field, format!("expected {}", YEAR_MONTH_FORMAT))
        };

        let bytes = raw.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(invalid());
        }
        let digits_ok = bytes[..4].iter().chain(&bytes[5..]).all(u8::is_ascii_digit);
        if !digits_ok {
            return Err(invalid());
        }

        let year: i32 = raw[..4].parse().map_err(|_| invalid())?;
        let month: u32 = raw[5..].parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }

    /// Truncates any date to its month.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Number of months from `self` through `end`, both inclusive.
    ///
    /// Zero or negative when `end` precedes `self`.
    pub fn months_through(&self, end: &YearMonth) -> i64 {
        let years = i64::from(end.year() - self.year());
        let months = i64::from(end.month()) - i64::from(self.month());
        years * 12 + months + 1
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("date", s)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_year_and_month() {
        let ym = YearMonth::parse("start_date", "2025-07").unwrap();
        assert_eq!(ym.year(), 2025);
        assert_eq!(ym.month(), 7);
        assert_eq!(ym.first_day(), NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    }

    #[test]
    fn rejects_malformed_strings() {
        for raw in [
            "", "2025", "2025-7", "2025-13", "2025-00", "25-07", "2025/07", "2025-07-01",
            " 2025-07", "+025-07", "2025-0a", "July 2025",
        ] {
            assert!(
                YearMonth::parse("start_date", raw).is_err(),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_error_names_the_field() {
        let err = YearMonth::parse("end_date", "nope").unwrap_err();
        assert_eq!(err.field(), "end_date");
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(YearMonth::new(2025, 3).unwrap().to_string(), "2025-03");
        assert_eq!(YearMonth::new(987, 11).unwrap().to_string(), "0987-11");
    }

    #[test]
    fn from_date_truncates_to_first_of_month() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(YearMonth::from_date(date), YearMonth::new(2024, 2).unwrap());
    }

    #[test]
    fn months_through_is_inclusive() {
        let march = YearMonth::new(2025, 3).unwrap();
        let may = YearMonth::new(2025, 5).unwrap();
        assert_eq!(march.months_through(&may), 3);
        assert_eq!(march.months_through(&march), 1);
    }

    #[test]
    fn months_through_crosses_years() {
        let nov = YearMonth::new(2024, 11).unwrap();
        let feb = YearMonth::new(2025, 2).unwrap();
        assert_eq!(nov.months_through(&feb), 4);
    }

    #[test]
    fn serializes_as_wire_format() {
        let ym = YearMonth::new(2025, 12).unwrap();
        assert_eq!(serde_json::to_string(&ym).unwrap(), "\"2025-12\"");
        let back: YearMonth = serde_json::from_str("\"2025-12\"").unwrap();
        assert_eq!(back, ym);
        assert!(serde_json::from_str::<YearMonth>("\"2025-12-01\"").is_err());
    }

    proptest! {
        #[test]
        fn valid_months_parse_and_display_identically(year in 0i32..=9999, month in 1u32..=12) {
            let raw = format!("{:04}-{:02}", year, month);
            let parsed = YearMonth::parse("from", &raw).unwrap();
            prop_assert_eq!(parsed.to_string(), raw);
        }

        #[test]
        fn wrong_length_is_always_rejected(raw in "\\PC{0,6}|\\PC{8,20}") {
            prop_assume!(raw.len() != 7);
            prop_assert!(YearMonth::parse("from", &raw).is_err());
        }

        #[test]
        fn month_outside_calendar_is_rejected(year in 0i32..=9999, month in 13u32..=99) {
            let raw = format!("{:04}-{:02}", year, month);
            prop_assert!(YearMonth::parse("to", &raw).is_err());
        }

        #[test]
        fn non_digit_characters_are_rejected(raw in "[0-9]{4}-[0-9][^0-9]|[0-9]{3}[^0-9]-[0-9]{2}") {
            prop_assert!(YearMonth::parse("to", &raw).is_err());
        }
    }
}
