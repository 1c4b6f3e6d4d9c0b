//! Holds the primitive aliases shared by both calendars.

/// The default primitive that holds all the years (of both calendars).
///
/// Gregorian years use astronomical numbering (year 0 is 1 BC) and Jalaali years are only
/// meaningful from [`crate::JALAALI_YEAR_MIN`] to [`crate::JALAALI_YEAR_MAX`].
pub type IYear = i32;

/// The unsigned primitive that holds a validated month (1 to 12).
pub type UMonth = u8;

/// The signed primitive for months that are not validated yet and may need normalization.
pub type IMonth = i32;

/// The unsigned primitive that holds a validated day of a month (1 to 31).
pub type UMonthDay = u8;

/// The signed primitive for days of a month that are not validated yet.
pub type IMonthDay = i32;

/// Day of a year (1 to 366).
pub type UOrdinal = u16;

/// A Julian Day Number, the calendar-independent count of days.
///
/// JDN 2451545 is the Gregorian 1st of January, 2000.
pub type Jdn = i64;

/// Counts consecutive days for addition and subtraction operations.
pub type IDayDiff = i64;
