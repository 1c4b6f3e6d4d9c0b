//! Proleptic Gregorian dates and their Julian Day Numbers.
//!
//! Both directions are closed-form and count in 400-year eras of [`DAYS_IN_ERA`] days starting
//! from the 1st of March, so that the leap day is the last day of each counted year.

use core::fmt::{self, Display};

#[cfg(feature = "c")]
use jalaali_proc::fn_attr;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    Error, JalaaliDate,
    primitive::{IMonth, IMonthDay, IYear, Jdn, UMonth, UMonthDay},
    utility::{div, modulo},
};

/// Days in 400 Gregorian years.
pub const DAYS_IN_ERA: Jdn = 146_097;

/// The JDN of the 1st of March, year 0 (1 BC), where the era counting starts.
pub const MARCH_ERA_EPOCH_JDN: Jdn = 1_721_120;

/// The JDN of the Gregorian 1st of January, 1970.
pub const UNIX_EPOCH_JDN: Jdn = 2_440_588;

/// A date of the proleptic Gregorian calendar.
///
/// Years are astronomical: year 0 is 1 BC, -1 is 2 BC and so on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianDate {
    pub gy: IYear,
    pub gm: UMonth,
    pub gd: UMonthDay,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pymethods)]
impl GregorianDate {
    /// The Julian Day Number of this date (see [`g2d`]).
    pub fn jdn(&self) -> Jdn {
        g2d(self.gy, self.gm as IMonth, self.gd as IMonthDay)
    }

    /// Convert to the Jalaali calendar (see [`crate::to_jalaali`]).
    pub fn to_jalaali(&self) -> Result<JalaaliDate, Error> {
        crate::d2j(self.jdn())
    }
}

impl Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.gy, self.gm, self.gd)
    }
}

/// Convert a proleptic Gregorian date to its Julian Day Number.
///
/// Nothing is validated: a month past 12 or before 1 rolls into the adjacent years and a day
/// past the end of the month (or before its start) rolls into the adjacent months, so
/// `g2d(2000, 13, 1) == g2d(2001, 1, 1)` and `g2d(2000, 3, 0) == g2d(2000, 2, 29)`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn g2d(gy: IYear, gm: IMonth, gd: IMonthDay) -> Jdn {
    // months counted from March, January and February belong to the previous year
    let shifted_m = gm as i64 - 3;
    let y = gy as i64 + div(shifted_m, 12);
    let m = modulo(shifted_m, 12);

    let era = div(y, 400);
    let yoe = y - era * 400;
    let doy = div(153 * m + 2, 5) + gd as i64 - 1;
    let doe = yoe * 365 + div(yoe, 4) - div(yoe, 100) + doy;

    era * DAYS_IN_ERA + doe + MARCH_ERA_EPOCH_JDN
}

/// Convert a Julian Day Number to the proleptic Gregorian date (reverse of [`g2d`]).
///
/// Every JDN has a date; years beyond the range of [`IYear`] wrap.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
#[cfg_attr(feature = "py", pyfunction)]
pub fn d2g(jdn: Jdn) -> GregorianDate {
    let z = jdn.wrapping_sub(MARCH_ERA_EPOCH_JDN);
    let era = div(z, DAYS_IN_ERA);
    let doe = modulo(z, DAYS_IN_ERA); // 0..=146096
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // 0..=399
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // 0..=365
    let m = (5 * doy + 2) / 153; // 0..=11, from March
    let gd = doy - (153 * m + 2) / 5 + 1;
    let gm = if m < 10 { m + 3 } else { m - 9 };
    let gy = yoe + era * 400 + if gm <= 2 { 1 } else { 0 };

    GregorianDate {
        gy: gy as IYear,
        gm: gm as UMonth,
        gd: gd as UMonthDay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn gregorian(gy: IYear, gm: UMonth, gd: UMonthDay) -> GregorianDate {
        GregorianDate { gy, gm, gd }
    }

    fn is_leap(gy: IYear) -> bool {
        (gy % 4 == 0 && gy % 100 != 0) || gy % 400 == 0
    }

    fn month_length(gy: IYear, gm: UMonth) -> UMonthDay {
        match gm {
            2 if is_leap(gy) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    #[test]
    fn test_known_jdns() {
        assert_eq!(g2d(2000, 1, 1), 2_451_545);
        assert_eq!(g2d(1970, 1, 1), UNIX_EPOCH_JDN);
        assert_eq!(g2d(0, 3, 1), MARCH_ERA_EPOCH_JDN);
        // start of the Julian period, proleptic Gregorian
        assert_eq!(g2d(-4713, 11, 24), 0);
        assert_eq!(g2d(-100_100, 3, 1), -34_839_655);
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(d2g(2_451_545), gregorian(2000, 1, 1));
        assert_eq!(d2g(0), gregorian(-4713, 11, 24));
        assert_eq!(d2g(-1), gregorian(-4713, 11, 23));
        assert_eq!(d2g(2_451_604), gregorian(2000, 2, 29));
    }

    #[test]
    fn test_normalizes_out_of_range_components() {
        assert_eq!(g2d(2000, 13, 1), g2d(2001, 1, 1));
        assert_eq!(g2d(2000, 0, 1), g2d(1999, 12, 1));
        assert_eq!(g2d(2000, -10, 1), g2d(1999, 2, 1));
        assert_eq!(g2d(2000, 3, 0), g2d(2000, 2, 29));
        assert_eq!(g2d(1900, 3, 0), g2d(1900, 2, 28));
        assert_eq!(g2d(2000, 1, 32), g2d(2000, 2, 1));
    }

    #[test]
    fn test_round_trip_and_monotonic_over_centuries() {
        let mut previous = g2d(-801, 12, 31);
        for gy in -800..=2800 {
            for gm in 1..=12 {
                for gd in 1..=month_length(gy, gm) {
                    let jdn = g2d(gy, gm as IMonth, gd as IMonthDay);
                    assert_eq!(jdn, previous + 1, "{}-{}-{} is not the next day", gy, gm, gd);
                    assert_eq!(d2g(jdn), gregorian(gy, gm, gd));
                    previous = jdn;
                }
            }
        }
    }

    #[test]
    fn test_round_trip_far_from_present() {
        for jdn in (-40_000_000..40_000_000).step_by(9_973) {
            let date = d2g(jdn);
            assert_eq!(date.jdn(), jdn, "{} via {}", jdn, date);
        }
    }

    #[test]
    fn test_extreme_jdns_have_a_date() {
        for jdn in [Jdn::MIN, Jdn::MIN + 1, Jdn::MAX] {
            let date = d2g(jdn);
            assert!((1..=12).contains(&date.gm));
            assert!((1..=31).contains(&date.gd));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(gregorian(1979, 3, 21).to_string(), "1979-03-21");
        assert_eq!(gregorian(-5, 12, 1).to_string(), "-5-12-01");
    }
}
