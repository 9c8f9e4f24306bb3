use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};
use crate::{DateError, Month, Year, YearKind};

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
pub const fn is_leap_year(year: u64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Decides whether `year` is a Gregorian leap year.
///
/// # Errors
/// Returns `DateError::InvalidArgument` if `year` is not positive.
pub fn is_leap(year: i64) -> Result<bool, DateError> {
    let year = Year::new(year).map_err(|_| DateError::invalid("is_leap", "year", year))?;
    Ok(year.is_leap())
}

/// Kind of year to resolve against. Without a year the result is always
/// [`YearKind::Common`], whatever year the caller may have in mind.
pub const fn year_kind(year: Option<Year>) -> YearKind {
    match year {
        Some(year) => year.kind(),
        None => YearKind::Common,
    }
}

/// Length of `month` in a year of `kind`. Taking a [`Month`] keeps the table lookup in bounds.
pub const fn days_in_month(kind: YearKind, month: Month) -> u8 {
    if month.get() == FEBRUARY && matches!(kind, YearKind::Leap) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

pub const fn days_in_year(kind: YearKind) -> u16 {
    kind.max_ordinal_day()
}
