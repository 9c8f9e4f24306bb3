//! Ordinal day to calendar date resolution.
//!
//! The month containing an ordinal day is found by a range lookup over the
//! cumulative day table: month `m` owns the half-open interval
//! `(cumulative[m - 1], cumulative[m]]`, so a day equal to a month's running
//! total is that month's last day, never the next month's first.

use crate::consts::{DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, JANUARY, MAX_MONTH};
use crate::leap::year_kind;
use crate::validate::{is_integer_like, is_numeric, strstr};
use crate::{CalendarDate, DateError, Month, OrdinalDay, Year, YearKind};

const RESOLVE: &str = "resolve_date_of_year";
const RESOLVE_STR: &str = "resolve_date_of_year_str";
const DATE_TO_ORDINAL: &str = "date_to_ordinal";

/// Month lengths for a year of `kind`; index 0 is the accumulator seed.
pub fn days_per_month(kind: YearKind) -> [u8; 13] {
    let mut days = DAYS_IN_MONTH;
    if kind == YearKind::Leap {
        days[FEBRUARY as usize] = FEBRUARY_DAYS_LEAP;
    }
    days
}

/// Days elapsed from the start of the year through the end of each month.
/// Entry 0 is 0 and entry 12 is the length of the year.
pub fn cumulative_days(kind: YearKind) -> [u16; 13] {
    let mut cumulative = [0_u16; 13];
    let mut total = 0;
    for (slot, days) in cumulative.iter_mut().zip(days_per_month(kind)) {
        total += u16::from(days);
        *slot = total;
    }
    cumulative
}

/// Resolves an ordinal day to the month and day it falls on.
///
/// Without a year the day is resolved in a common year, so day 366 can only
/// be reached by naming a leap year.
///
/// # Errors
/// - `DateError::InvalidArgument` if `year` is given but not positive.
/// - `DateError::OutOfRange` if `ordinal_day` is outside `1..=365` (or `1..=366` in a leap year).
/// - `DateError::InternalInconsistency` if no month contains the day; this is a defect,
///   not a bad input.
pub fn resolve_date_of_year(
    ordinal_day: i64,
    year: Option<i64>,
) -> Result<CalendarDate, DateError> {
    let year = year
        .map(|y| Year::new(y).map_err(|_| DateError::invalid(RESOLVE, "year", y)))
        .transpose()?;
    let kind = year_kind(year);
    let ordinal = OrdinalDay::new(ordinal_day, kind).map_err(|err| err.with_routine(RESOLVE))?;
    resolve_ordinal_day(ordinal, kind)
}

/// Resolves an already-validated ordinal day in a year of `kind`.
///
/// # Errors
/// Returns `DateError::OutOfRange` if `ordinal` is 366 and `kind` is common,
/// or `DateError::InternalInconsistency` if no month contains the day.
pub fn resolve_ordinal_day(ordinal: OrdinalDay, kind: YearKind) -> Result<CalendarDate, DateError> {
    let max = kind.max_ordinal_day();
    if ordinal.get() > max {
        return Err(DateError::OutOfRange {
            routine: RESOLVE,
            value: ordinal.get().to_string(),
            max,
        });
    }
    locate(&cumulative_days(kind), ordinal.get(), kind)
}

fn locate(cumulative: &[u16; 13], ordinal: u16, kind: YearKind) -> Result<CalendarDate, DateError> {
    let inconsistent = || DateError::InternalInconsistency {
        routine: RESOLVE,
        value:   ordinal,
    };

    let (month, elapsed) = cumulative
        .windows(2)
        .zip(JANUARY..=MAX_MONTH)
        .find(|(bounds, _)| bounds[0] < ordinal && ordinal <= bounds[1])
        .map(|(bounds, month)| (month, bounds[0]))
        .ok_or_else(inconsistent)?;

    let day = u8::try_from(ordinal - elapsed).map_err(|_| inconsistent())?;
    let month = Month::new(month).map_err(|_| inconsistent())?;
    CalendarDate::new(month, day, kind).map_err(|_| inconsistent())
}

/// Resolves an ordinal day given as text, as read from a form or a data file.
///
/// The ordinal day may be written as an integer or as a number with no
/// fractional part (`"60"`, `"60.0"`). The year must be an integer that fits
/// in an `i64`; a larger year is rejected as invalid rather than resolved.
///
/// Numbers too large to represent (`"99999999999999999999"`, `"1e400"`) are
/// out of range like any other ordinal day past the end of the year, and the
/// error reports them as written.
///
/// # Errors
/// - `DateError::MissingArgument` if an argument is blank.
/// - `DateError::InvalidArgument` if the ordinal day is not numeric or has a
///   fractional part, or the year is not a positive integer within `i64`.
/// - Anything [`resolve_date_of_year`] returns.
pub fn resolve_date_of_year_str(
    ordinal_day: &str,
    year: Option<&str>,
) -> Result<CalendarDate, DateError> {
    let text = ordinal_day.trim();
    let ordinal_day = parse_ordinal_day(text)?;
    let year = year.map(parse_year).transpose()?;
    resolve_date_of_year(ordinal_day, year).map_err(|err| match err {
        DateError::OutOfRange { max, .. } => DateError::OutOfRange {
            routine: RESOLVE_STR,
            value: strstr(text),
            max,
        },
        other => other,
    })
}

fn parse_ordinal_day(trimmed: &str) -> Result<i64, DateError> {
    if trimmed.is_empty() {
        return Err(DateError::MissingArgument {
            routine:  RESOLVE_STR,
            argument: "ordinal_day",
        });
    }
    let saturated = if trimmed.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    };
    if is_integer_like(trimmed) {
        // Saturate on overflow, the range check rejects it either way
        return Ok(trimmed.parse::<i64>().unwrap_or(saturated));
    }
    match trimmed.parse::<f64>() {
        // A literal like "1e400" overflows to infinity; spelled-out "inf" has no digits
        Ok(value) if value.is_infinite() && trimmed.bytes().any(|b| b.is_ascii_digit()) => {
            Ok(saturated)
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(value) if is_numeric(trimmed) && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(DateError::invalid(RESOLVE_STR, "ordinal_day", trimmed)),
    }
}

fn parse_year(s: &str) -> Result<i64, DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::MissingArgument {
            routine:  RESOLVE_STR,
            argument: "year",
        });
    }
    if !is_integer_like(trimmed) {
        return Err(DateError::invalid(RESOLVE_STR, "year", trimmed));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| DateError::invalid(RESOLVE_STR, "year", trimmed))
}

/// Ordinal day of `day` in `month`, the inverse of [`resolve_ordinal_day`].
///
/// Errors keep the routine of the constructor that rejected the input.
pub(crate) fn ordinal_day_of(
    month: Month,
    day: u8,
    kind: YearKind,
) -> Result<OrdinalDay, DateError> {
    let date = CalendarDate::new(month, day, kind)?;
    let elapsed = cumulative_days(kind)[usize::from(month.get()) - 1];
    OrdinalDay::new(i64::from(elapsed) + i64::from(date.day()), kind)
}

/// Ordinal day of a month and day, in `year` or in a common year when no year is given.
///
/// # Errors
/// Returns `DateError::InvalidArgument` if the year is not positive, the month is
/// outside 1..=12, or the day does not exist in that month.
pub fn date_to_ordinal(month: u8, day: u8, year: Option<i64>) -> Result<u16, DateError> {
    let retag = |err: DateError| err.with_routine(DATE_TO_ORDINAL);
    let year = year.map(Year::new).transpose().map_err(retag)?;
    let month = Month::new(month).map_err(retag)?;
    let ordinal = ordinal_day_of(month, day, year_kind(year)).map_err(retag)?;
    Ok(ordinal.get())
}
