/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Largest day number any month can hold
pub const MAX_DAY: u8 = 31;

/// First valid ordinal day (January 1st)
pub const MIN_ORDINAL_DAY: u16 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common (non-leap) year, also the largest ordinal day without a year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in each month of a common year.
/// Index 0 is the accumulator seed for cumulative sums, not a month.
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // accumulator seed (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Value reported for month and day when resolution fails
pub const SENTINEL: i16 = -1;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u64 = 400;

/// Separator between month and day when a calendar date is rendered as text
pub const MONTH_DAY_SEPARATOR: char = '-';
