//! Resolve Gregorian ordinal days (day-of-year numbers) to calendar dates.
//!
//! The crate works from cumulative day tables rather than a calendar library:
//! the month holding an ordinal day is found by a range lookup over the running
//! total of month lengths, with February lengthened in leap years.
//!
//! ```
//! use ordinal_date::{ErrorKind, resolve_date_of_year};
//!
//! let date = resolve_date_of_year(60, None)?;
//! assert_eq!((date.month(), date.day()), (3, 1));
//!
//! let date = resolve_date_of_year(60, Some(2004))?;
//! assert_eq!((date.month(), date.day()), (2, 29));
//!
//! // Day 366 exists only in a named leap year
//! let err = resolve_date_of_year(366, None).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfRange);
//! # Ok::<(), ordinal_date::DateError>(())
//! ```

mod consts;
mod error;
mod leap;
mod prelude;
mod resolve;
mod types;
pub mod validate;

pub use consts::*;
pub use error::{DateError, ErrorKind};
pub use leap::{days_in_month, days_in_year, is_leap, is_leap_year, year_kind};
pub use resolve::{
    cumulative_days, date_to_ordinal, days_per_month, resolve_date_of_year,
    resolve_date_of_year_str, resolve_ordinal_day,
};
pub use types::{CalendarDate, Day, Month, OrdinalDay, Year, YearKind, month_day_or_sentinel};
