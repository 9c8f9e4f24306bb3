use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, MAX_DAY, MAX_MONTH, MIN_DAY, MIN_ORDINAL_DAY,
    MONTH_DAY_SEPARATOR, SENTINEL,
};
use crate::leap::{days_in_month, is_leap_year};
use crate::prelude::*;
use crate::{DateError, resolve};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16, NonZeroU64};
use std::str::FromStr;

/// A positive Gregorian year. The proleptic rules apply to every year;
/// there is no special-casing of historical calendar reforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Year(NonZeroU64);

impl Year {
    /// Creates a new Year, validating that it's positive
    ///
    /// # Errors
    /// Returns `DateError::InvalidArgument` if the value is zero or negative.
    pub fn new(value: i64) -> Result<Self, DateError> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or_else(|| DateError::invalid("Year::new", "year", value))
    }

    /// Returns the year value as u64
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }

    /// Common or leap, according to the Gregorian rule
    #[inline]
    pub const fn kind(self) -> YearKind {
        if self.is_leap() {
            YearKind::Leap
        } else {
            YearKind::Common
        }
    }
}

impl TryFrom<u64> for Year {
    type Error = DateError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or_else(|| DateError::invalid("Year::try_from", "year", value))
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u64 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a year has 365 or 366 days.
///
/// A resolution without a year is always `Common`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearKind {
    #[default]
    #[display(fmt = "common")]
    Common,
    #[display(fmt = "leap")]
    Leap,
}

impl YearKind {
    /// Largest valid ordinal day, which is also the number of days in the year
    #[inline]
    pub const fn max_ordinal_day(self) -> u16 {
        match self {
            Self::Common => DAYS_IN_COMMON_YEAR,
            Self::Leap => DAYS_IN_LEAP_YEAR,
        }
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidArgument` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        NonZeroU8::new(value)
            .filter(|m| m.get() <= MAX_MONTH)
            .map(Self)
            .ok_or_else(|| DateError::invalid("Month::new", "month", value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to be valid for the month it was built against
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of `month` in a year of `kind`
    ///
    /// # Errors
    /// Returns `DateError::InvalidArgument` if the value is 0 or past the end of the month.
    pub fn new(value: u8, month: Month, kind: YearKind) -> Result<Self, DateError> {
        let max_day = days_in_month(kind, month);
        NonZeroU8::new(value)
            .filter(|d| d.get() <= max_day)
            .map(Self)
            .ok_or_else(|| {
                DateError::invalid(
                    "Day::new",
                    "day",
                    format_args!("{value} for month {month} of a {kind} year"),
                )
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without month context, so just check the widest range
        NonZeroU8::new(value)
            .filter(|d| (MIN_DAY..=MAX_DAY).contains(&d.get()))
            .map(Self)
            .ok_or_else(|| DateError::invalid("Day::try_from", "day", value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The 1-based rank of a day within its year, checked against the year's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct OrdinalDay(NonZeroU16);

impl OrdinalDay {
    /// Creates a new OrdinalDay in `1..=kind.max_ordinal_day()`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value falls outside the year.
    pub fn new(value: i64, kind: YearKind) -> Result<Self, DateError> {
        let max = kind.max_ordinal_day();
        u16::try_from(value)
            .ok()
            .filter(|d| (MIN_ORDINAL_DAY..=max).contains(d))
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or_else(|| DateError::OutOfRange {
                routine: "OrdinalDay::new",
                value: value.to_string(),
                max,
            })
    }

    /// Returns the ordinal day as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for OrdinalDay {
    type Error = DateError;

    /// Context-free conversion: accepts anything a leap year could hold.
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value), YearKind::Leap)
    }
}

impl From<OrdinalDay> for u16 {
    fn from(day: OrdinalDay) -> Self {
        day.0.get()
    }
}

impl fmt::Display for OrdinalDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month and day within a year, as produced by resolving an ordinal day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}-{:02}", "month.get()", "day.get()")]
pub struct CalendarDate {
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// Creates a date, checking `day` against the length of `month` in a year of `kind`
    ///
    /// # Errors
    /// Returns `DateError::InvalidArgument` if the day does not exist in that month.
    pub fn new(month: Month, day: u8, kind: YearKind) -> Result<Self, DateError> {
        let day = Day::new(day, month, kind)?;
        Ok(Self { month, day })
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day within the month (1..=31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the validated [`Month`]
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the validated [`Day`]
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `(month, day)` as plain integers
    pub const fn to_parts(&self) -> (i16, i16) {
        (self.month.get() as i16, self.day.get() as i16)
    }

    /// Ordinal day of this date in a year of `kind`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidArgument` if the date does not exist in such a year
    /// (February 29th in a common year).
    pub fn ordinal_day(&self, kind: YearKind) -> Result<OrdinalDay, DateError> {
        resolve::ordinal_day_of(self.month, self.day.get(), kind)
    }
}

impl From<CalendarDate> for (u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.month(), date.day())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses `MM-DD`. Without a year February 29th is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || DateError::invalid("CalendarDate::from_str", "date", trimmed);
        let (month, day) = trimmed
            .split_once(MONTH_DAY_SEPARATOR)
            .ok_or_else(invalid)?;
        let month = month.trim().parse::<u8>().map_err(|_| invalid())?;
        let day = day.trim().parse::<u8>().map_err(|_| invalid())?;
        Self::new(Month::new(month)?, day, YearKind::Leap)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Flattens a resolution into `(month, day)`, reporting `(SENTINEL, SENTINEL)` on failure
/// so a failed call can never be mistaken for a partial result.
pub fn month_day_or_sentinel(result: &Result<CalendarDate, DateError>) -> (i16, i16) {
    result
        .as_ref()
        .map_or((SENTINEL, SENTINEL), CalendarDate::to_parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_year_new_valid() {
        assert_eq!(Year::new(1).unwrap().get(), 1);
        assert_eq!(Year::new(2004).unwrap().get(), 2004);
        assert_eq!(Year::new(i64::MAX).unwrap().get(), i64::MAX as u64);
    }

    #[test]
    fn test_year_new_rejects_non_positive() {
        for value in [0, -1, -2004, i64::MIN] {
            let err = Year::new(value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "year {value}");
        }
    }

    #[test]
    fn test_year_kind() {
        assert_eq!(Year::new(2004).unwrap().kind(), YearKind::Leap);
        assert_eq!(Year::new(2000).unwrap().kind(), YearKind::Leap);
        assert_eq!(Year::new(1900).unwrap().kind(), YearKind::Common);
        assert_eq!(Year::new(2023).unwrap().kind(), YearKind::Common);
    }

    #[test]
    fn test_year_conversions() {
        let year: Year = 2024_u64.try_into().unwrap();
        assert_eq!(u64::from(year), 2024);
        assert_eq!(year.to_string(), "2024");

        let result: Result<Year, _> = 0_u64.try_into();
        assert!(result.is_err());
        let result: Result<Year, _> = (-3_i64).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");
        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_year_kind_defaults_to_common() {
        assert_eq!(YearKind::default(), YearKind::Common);
        assert_eq!(YearKind::Common.max_ordinal_day(), 365);
        assert_eq!(YearKind::Leap.max_ordinal_day(), 366);
        assert_eq!(YearKind::Leap.to_string(), "leap");
        assert_eq!(serde_json::to_string(&YearKind::Common).unwrap(), r#""common""#);
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert_eq!(Month::new(m).unwrap().get(), m);
        }
        for m in [0, 13, 255] {
            assert!(Month::new(m).is_err(), "Month {m} should be invalid");
        }
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "8");
        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_checks_month_length() {
        let jan = Month::new(1).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(31, jan, YearKind::Common).is_ok());
        assert!(Day::new(32, jan, YearKind::Common).is_err());
        assert!(Day::new(0, jan, YearKind::Common).is_err());

        assert!(Day::new(28, feb, YearKind::Common).is_ok());
        assert!(Day::new(29, feb, YearKind::Common).is_err());
        assert!(Day::new(29, feb, YearKind::Leap).is_ok());
        assert!(Day::new(30, feb, YearKind::Leap).is_err());

        assert!(Day::new(30, apr, YearKind::Leap).is_ok());
        assert!(Day::new(31, apr, YearKind::Leap).is_err());
    }

    #[test]
    fn test_day_error_mentions_context() {
        let feb = Month::new(2).unwrap();
        let err = Day::new(29, feb, YearKind::Common).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Day::new: invalid argument `day`: 29 for month 2 of a common year"
        );
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);
        assert!(Day::try_from(0).is_err());
        assert!(Day::try_from(32).is_err());
    }

    #[test]
    fn test_ordinal_day_range_depends_on_kind() {
        assert_eq!(OrdinalDay::new(1, YearKind::Common).unwrap().get(), 1);
        assert_eq!(OrdinalDay::new(365, YearKind::Common).unwrap().get(), 365);
        assert_eq!(OrdinalDay::new(366, YearKind::Leap).unwrap().get(), 366);

        let err = OrdinalDay::new(366, YearKind::Common).unwrap_err();
        assert_eq!(
            err,
            DateError::OutOfRange {
                routine: "OrdinalDay::new",
                value:   "366".to_owned(),
                max:     365,
            }
        );
        for value in [0, -5, 367, i64::from(u16::MAX) + 1] {
            let err = OrdinalDay::new(value, YearKind::Leap).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange, "ordinal day {value}");
        }
    }

    #[test]
    fn test_ordinal_day_serde() {
        let day = OrdinalDay::new(60, YearKind::Common).unwrap();
        assert_eq!(serde_json::to_string(&day).unwrap(), "60");
        let parsed: OrdinalDay = serde_json::from_str("366").unwrap();
        assert_eq!(parsed.get(), 366);
        let result: Result<OrdinalDay, _> = serde_json::from_str("367");
        assert!(result.is_err());
    }

    #[test]
    fn test_calendar_date_display_and_parse() {
        let date = CalendarDate::new(Month::new(3).unwrap(), 1, YearKind::Common).unwrap();
        assert_eq!(date.to_string(), "03-01");
        assert_eq!("03-01".parse::<CalendarDate>().unwrap(), date);
        assert_eq!(" 3 - 1 ".parse::<CalendarDate>().unwrap(), date);

        // Without a year, February 29th exists
        let leap_day = "02-29".parse::<CalendarDate>().unwrap();
        assert_eq!((leap_day.month(), leap_day.day()), (2, 29));

        for bad in ["", "0301", "13-01", "02-30", "aa-01", "03-xx", "03-01-2004"] {
            let result = bad.parse::<CalendarDate>();
            assert_eq!(
                result.unwrap_err().kind(),
                ErrorKind::InvalidArgument,
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_calendar_date_serde() {
        let date = "12-31".parse::<CalendarDate>().unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""12-31""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""04-31""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_calendar_date_ordering_is_lexicographic() {
        let jan31 = "01-31".parse::<CalendarDate>().unwrap();
        let feb01 = "02-01".parse::<CalendarDate>().unwrap();
        let feb28 = "02-28".parse::<CalendarDate>().unwrap();
        assert!(jan31 < feb01);
        assert!(feb01 < feb28);
    }

    #[test]
    fn test_month_day_or_sentinel() {
        let ok = "02-29".parse::<CalendarDate>();
        assert_eq!(month_day_or_sentinel(&ok), (2, 29));

        let failed = "02-30".parse::<CalendarDate>();
        assert_eq!(month_day_or_sentinel(&failed), (SENTINEL, SENTINEL));
        assert_eq!(month_day_or_sentinel(&failed), (-1, -1));
    }
}
