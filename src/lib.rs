#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_main, no_std)]

#[macro_use]
mod r#macro;

mod calendar;
mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
mod julian;
pub mod primitive;
mod traits;
pub mod utility;

use core::fmt::{self, Display};

#[cfg(feature = "c")]
use jalaali_proc::fn_attr;

#[cfg(feature = "py")]
use jalaali_proc::py_attr;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

pub use calendar::{
    BREAKS, GREGORIAN_YEAR_OFFSET, JALAALI_YEAR_MAX, JALAALI_YEAR_MIN, JalCal, jal_cal,
};
pub use error::{Error, Result};
pub use julian::{DAYS_IN_ERA, GregorianDate, MARCH_ERA_EPOCH_JDN, UNIX_EPOCH_JDN, d2g, g2d};
pub use traits::{GregorianComponents, SECONDS_PER_DAY};
pub use utility::{div, modulo};

use primitive::{IDayDiff, IMonth, IMonthDay, IYear, Jdn, UMonth, UMonthDay, UOrdinal};

#[cfg(feature = "py")]
#[pymodule]
fn jalaali(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(to_jalaali, m)?)?;
    m.add_function(wrap_pyfunction!(to_gregorian, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_jalaali_date, m)?)?;
    m.add_function(wrap_pyfunction!(is_leap_jalaali_year, m)?)?;
    m.add_function(wrap_pyfunction!(jalaali_month_length, m)?)?;
    m.add_function(wrap_pyfunction!(jalaali_year_length, m)?)?;
    m.add_function(wrap_pyfunction!(j2d, m)?)?;
    m.add_function(wrap_pyfunction!(d2j, m)?)?;
    m.add_function(wrap_pyfunction!(calendar::jal_cal, m)?)?;
    m.add_function(wrap_pyfunction!(julian::g2d, m)?)?;
    m.add_function(wrap_pyfunction!(julian::d2g, m)?)?;
    m.add_class::<JalaaliDate>()?;
    m.add_class::<GregorianDate>()?;
    m.add_class::<JalCal>()?;
    Ok(())
}

#[cfg(all(not(test), not(feature = "std")))] // std brings its own
#[panic_handler]
fn panic_handler(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

/// Days in the first half of the year (6 months of 31 days).
pub const FIRST_HALF_MAX_DOY: UOrdinal = 186;

/// Days of month in months up to and including the sixth (last month before new half).
pub const FIRST_HALF_MAX_DOM: UMonthDay = 31;

/// Days of month in months of the second half, except for Esfand in non-leap years.
pub const SECOND_HALF_MAX_DOM: UMonthDay = 30;

/// The JDN of the 1st of Farvardin of [`JALAALI_YEAR_MIN`], the first convertible day.
pub const JALAALI_FIRST_JDN: Jdn = 1_925_675;

/// The JDN of the 29th of Esfand of [`JALAALI_YEAR_MAX`] (not leap), the last convertible day.
pub const JALAALI_LAST_JDN: Jdn = 3_108_694;

/// Days from the start of the year to the start of month `jm`, without branching on the half.
const fn days_before_month(jm: i64) -> i64 {
    (jm - 1) * FIRST_HALF_MAX_DOM as i64 - div(jm, 7) * (jm - 7)
}

/// A date of the Jalaali calendar.
///
/// Ordering follows the calendar since fields are compared from the year down. The [`Default`]
/// value is zeroed and not a valid date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JalaaliDate {
    pub jy: IYear,
    pub jm: UMonth,
    pub jd: UMonthDay,
}

impl JalaaliDate {
    /// Create a date if it is valid (see [`is_valid_jalaali_date`]).
    pub fn new(jy: IYear, jm: UMonth, jd: UMonthDay) -> Option<Self> {
        is_valid_jalaali_date(jy, jm as IMonth, jd as IMonthDay).then_some(Self { jy, jm, jd })
    }

    /// Convert any date-like value to this calendar (see [`GregorianComponents`]).
    pub fn from_date<T: GregorianComponents + ?Sized>(value: &T) -> Result<Self> {
        value.to_jalaali()
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", py_attr(pymethods, staticmethod))]
impl JalaaliDate {
    /// Convert a Gregorian year, month and day (see [`to_jalaali`]).
    pub fn from_components(gy: IYear, gm: IMonth, gd: IMonthDay) -> Result<Self> {
        to_jalaali(gy, gm, gd)
    }

    /// The date of a Julian Day Number (see [`d2j`]).
    pub fn from_jdn(jdn: Jdn) -> Result<Self> {
        d2j(jdn)
    }
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl JalaaliDate {
    /// The Julian Day Number of this date (see [`j2d`]).
    pub fn jdn(&self) -> Result<Jdn> {
        j2d(self.jy, self.jm as IMonth, self.jd as IMonthDay)
    }

    /// Convert to the Gregorian calendar (see [`to_gregorian`]).
    pub fn to_gregorian(&self) -> Result<GregorianDate> {
        Ok(d2g(self.jdn()?))
    }

    /// Is the year of this date leap (see [`is_leap_jalaali_year`]).
    pub fn is_leap_year(&self) -> Result<bool> {
        is_leap_jalaali_year(self.jy)
    }

    /// What day of the year it is (1 to 366).
    pub fn ordinal(&self) -> UOrdinal {
        (days_before_month(self.jm as i64) + self.jd as i64) as UOrdinal
    }

    /// The date `days` after this one, or before it for a negative count.
    pub fn add_days(&self, days: IDayDiff) -> Result<Self> {
        d2j(self.jdn()?.saturating_add(days))
    }
}

impl Display for JalaaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.jy, self.jm, self.jd)
    }
}

/// Convert a Jalaali date to its Julian Day Number.
///
/// The month and day are not validated; day 32 of Farvardin is the 1st of Ordibehesht.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn j2d(jy: IYear, jm: IMonth, jd: IMonthDay) -> Result<Jdn> {
    let JalCal { gy, march, .. } = jal_cal(jy)?;
    Ok(g2d(gy, 3, march) + days_before_month(jm as i64) + jd as i64 - 1)
}

/// Convert a Julian Day Number to a Jalaali date (reverse of [`j2d`]).
///
/// Fails for days before [`JALAALI_FIRST_JDN`] or after [`JALAALI_LAST_JDN`] with the uncovered
/// year they would fall in.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn d2j(jdn: Jdn) -> Result<JalaaliDate> {
    if jdn < JALAALI_FIRST_JDN {
        return Err(Error::OutOfRangeYear {
            year: JALAALI_YEAR_MIN - 1,
        });
    }
    if jdn > JALAALI_LAST_JDN {
        return Err(Error::OutOfRangeYear {
            year: JALAALI_YEAR_MAX + 1,
        });
    }

    // the Jalaali year starting in the Gregorian year of jdn, the one before if jdn is earlier
    // in that Gregorian year than the new year; the last covered year ends in the first months
    // of a Gregorian year that starts the uncovered one
    let mut jy = (d2g(jdn).gy - GREGORIAN_YEAR_OFFSET).min(JALAALI_YEAR_MAX);
    let cal = jal_cal(jy)?;
    let mut k = jdn - g2d(cal.gy, 3, cal.march);

    if k < 0 {
        jy -= 1;
        log_trace!("JDN {} is before the new year, rolled back to {}", jdn, jy);
        k += FIRST_HALF_MAX_DOY as i64 - 7;
        if cal.leap == 1 {
            // the previous year was leap
            k += 1;
        }
    } else if k < FIRST_HALF_MAX_DOY as i64 {
        return Ok(JalaaliDate {
            jy,
            jm: (1 + div(k, FIRST_HALF_MAX_DOM as i64)) as UMonth,
            jd: (modulo(k, FIRST_HALF_MAX_DOM as i64) + 1) as UMonthDay,
        });
    } else {
        k -= FIRST_HALF_MAX_DOY as i64;
    }

    Ok(JalaaliDate {
        jy,
        jm: (7 + div(k, SECOND_HALF_MAX_DOM as i64)) as UMonth,
        jd: (modulo(k, SECOND_HALF_MAX_DOM as i64) + 1) as UMonthDay,
    })
}

/// Convert a Gregorian date to the Jalaali calendar.
///
/// The components are normalized like [`g2d`] does. See [`JalaaliDate::from_date`] for
/// date-like values.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn to_jalaali(gy: IYear, gm: IMonth, gd: IMonthDay) -> Result<JalaaliDate> {
    d2j(g2d(gy, gm, gd))
}

/// Convert a Jalaali date to the Gregorian calendar.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn to_gregorian(jy: IYear, jm: IMonth, jd: IMonthDay) -> Result<GregorianDate> {
    Ok(d2g(j2d(jy, jm, jd)?))
}

/// Check whether a Jalaali date exists, false for years outside of the break table.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn is_valid_jalaali_date(jy: IYear, jm: IMonth, jd: IMonthDay) -> bool {
    Error::check_year(jy).is_ok()
        && (1..=12).contains(&jm)
        && jd >= 1
        && jalaali_month_length(jy, jm).is_ok_and(|max| jd <= max as IMonthDay)
}

/// Is the Jalaali year leap (366 days instead of 365).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn is_leap_jalaali_year(jy: IYear) -> Result<bool> {
    Ok(jal_cal(jy)?.is_leap())
}

/// The number of days in month `jm` of the Jalaali year `jy`.
///
/// Months up to 6 have 31 days and the rest 30, except the 12th (Esfand) which has 29 days in
/// non-leap years. Months are not validated: anything before 1 counts as the first half and
/// anything after 12 as Esfand.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn jalaali_month_length(jy: IYear, jm: IMonth) -> Result<UMonthDay> {
    Error::check_year(jy)?;
    Ok(match jm {
        ..=6 => FIRST_HALF_MAX_DOM,
        7..=11 => SECOND_HALF_MAX_DOM,
        _ if is_leap_jalaali_year(jy)? => SECOND_HALF_MAX_DOM,
        _ => SECOND_HALF_MAX_DOM - 1,
    })
}

/// The number of days in the Jalaali year `jy` (365 or 366).
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn jalaali_year_length(jy: IYear) -> Result<UOrdinal> {
    Ok(if is_leap_jalaali_year(jy)? { 366 } else { 365 })
}
