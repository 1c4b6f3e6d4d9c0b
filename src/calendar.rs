//! The Jalaali leap rule: where each year starts and whether it is leap.
//!
//! Leap years are not a plain modulo rule. Between consecutive [`BREAKS`] the calendar follows
//! 33-year sub-cycles of 8 leap years, and the break years themselves encode the occasional 29
//! or 37-year sub-cycles needed to keep the new year on the vernal equinox. See
//! <http://www.astro.uni.torun.pl/~kb/Papers/EMP/PersianC-EMP.htm>.

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    error::{Error, Result},
    primitive::{IMonthDay, IYear},
    utility::{div, modulo},
};

/// Jalaali years starting a new run of the 33-year rule.
///
/// The last entry is the first year that is no longer covered.
pub const BREAKS: [IYear; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// The earliest Jalaali year covered by [`BREAKS`].
pub const JALAALI_YEAR_MIN: IYear = BREAKS[0];

/// The last Jalaali year covered by [`BREAKS`].
pub const JALAALI_YEAR_MAX: IYear = BREAKS[BREAKS.len() - 1] - 1;

/// Gregorian year in which Jalaali year 0 begins (`gy = jy + 621`).
pub const GREGORIAN_YEAR_OFFSET: IYear = 621;

/// Where a Jalaali year sits in the leap cycle and where it starts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "c", repr(C))]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyclass(get_all))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JalCal {
    /// Years passed since the last leap year (0 to 4), 0 if this year is leap.
    pub leap: u8,
    /// The Gregorian year in which this Jalaali year begins.
    pub gy: IYear,
    /// The day of March (Gregorian) of the 1st of Farvardin.
    pub march: IMonthDay,
}

impl JalCal {
    /// Is the year leap (366 days instead of 365).
    pub const fn is_leap(&self) -> bool {
        self.leap == 0
    }
}

/// Find the leap phase and the Gregorian start of the Jalaali year `jy`.
///
/// Fails with [`Error::OutOfRangeYear`] outside [`JALAALI_YEAR_MIN`] to [`JALAALI_YEAR_MAX`]
/// instead of extrapolating the break table.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "py", pyfunction)]
pub fn jal_cal(jy: IYear) -> Result<JalCal> {
    if let Err(e) = Error::check_year(jy) {
        log_debug!("rejected by the break table: {}", e);
        return Err(e);
    }

    let year = jy as i64;
    let gy = year + GREGORIAN_YEAR_OFFSET as i64;
    let mut leap_j = -14;
    let mut jp = BREAKS[0] as i64;
    let mut jump = 0;

    // limiting breaks of the year, counting leap days of every fully passed run
    for &jm in &BREAKS[1..] {
        let jm = jm as i64;
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_j += div(jump, 33) * 8 + div(modulo(jump, 33), 4);
        jp = jm;
    }
    let mut n = year - jp;

    // leap days from AD 621 to the start of the year
    leap_j += div(n, 33) * 8 + div(modulo(n, 33) + 3, 4);
    if modulo(jump, 33) == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // and the same in the Gregorian calendar, up to gy
    let leap_g = div(gy, 4) - div((div(gy, 100) + 1) * 3, 4) - 150;

    let march = 20 + leap_j - leap_g;

    // years since the last leap year
    if jump - n < 6 {
        n = n - jump + div(jump + 4, 33) * 33;
    }
    let leap = match modulo(n + 1, 33) - 1 {
        -1 => 4,
        r => modulo(r, 4),
    };

    Ok(JalCal {
        leap: leap as u8,
        gy: gy as IYear,
        march: march as IMonthDay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Persian Wikipedia's list of leap years from 1210 to 1500.
    const LEAPS_1210_TO_1500: [IYear; 71] = [
        1210, 1214, 1218, 1222, 1226, 1230, 1234, 1238, 1243, 1247, 1251, 1255, 1259, 1263, 1267,
        1271, 1276, 1280, 1284, 1288, 1292, 1296, 1300, 1304, 1309, 1313, 1317, 1321, 1325, 1329,
        1333, 1337, 1342, 1346, 1350, 1354, 1358, 1362, 1366, 1370, 1375, 1379, 1383, 1387, 1391,
        1395, 1399, 1403, 1408, 1412, 1416, 1420, 1424, 1428, 1432, 1436, 1441, 1445, 1449, 1453,
        1457, 1461, 1465, 1469, 1474, 1478, 1482, 1486, 1490, 1494, 1498,
    ];

    const fn cal(leap: u8, gy: IYear, march: IMonthDay) -> JalCal {
        JalCal { leap, gy, march }
    }

    #[test]
    fn test_breaks_are_ascending() {
        assert!(BREAKS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(JALAALI_YEAR_MIN, -61);
        assert_eq!(JALAALI_YEAR_MAX, 3177);
    }

    #[test]
    fn test_known_years() {
        assert_eq!(jal_cal(1358), Ok(cal(0, 1979, 21)));
        assert_eq!(jal_cal(1403), Ok(cal(0, 2024, 20)));
        assert_eq!(jal_cal(1404), Ok(cal(1, 2025, 21)));
        assert_eq!(jal_cal(-61), Ok(cal(0, 560, 20)));
        assert_eq!(jal_cal(3177), Ok(cal(4, 3798, 20)));
    }

    #[test]
    fn test_phase_runs_to_four_before_a_five_year_gap() {
        let phases = (1403..=1409)
            .map(|jy| jal_cal(jy).map(|c| c.leap))
            .collect::<core::result::Result<Vec<_>, _>>();
        assert_eq!(phases, Ok(vec![0, 1, 2, 3, 4, 0, 1]));
    }

    #[test]
    fn test_break_years_start_a_leap_run() {
        for jy in [9, 38, 199, 1111, 2060, 2097] {
            assert!(jal_cal(jy).is_ok_and(|c| c.is_leap()), "{} is not leap", jy);
        }
    }

    #[test]
    fn test_leap_aligns_with_wikipedia_list_of_33() {
        for jy in 1210..=1500 {
            let is_leap = jal_cal(jy).is_ok_and(|c| c.is_leap());
            let in_list = LEAPS_1210_TO_1500.binary_search(&jy).is_ok();
            assert_eq!(
                is_leap, in_list,
                "year {} is miscalculated (guessed as leap: {}, is actually leap: {})",
                jy, is_leap, in_list
            );
        }
    }

    #[test]
    fn test_new_year_stays_near_the_equinox() {
        for jy in JALAALI_YEAR_MIN..=JALAALI_YEAR_MAX {
            let c = jal_cal(jy).unwrap();
            assert_eq!(c.gy, jy + GREGORIAN_YEAR_OFFSET);
            assert!((20..=22).contains(&c.march), "{} starts on March {}", jy, c.march);
            assert!(c.leap <= 4);
        }
    }

    #[test]
    fn test_rejects_uncovered_years() {
        assert_eq!(jal_cal(-62), Err(Error::OutOfRangeYear { year: -62 }));
        assert_eq!(jal_cal(3178), Err(Error::OutOfRangeYear { year: 3178 }));
        assert_eq!(jal_cal(IYear::MIN), Err(Error::OutOfRangeYear { year: IYear::MIN }));
        assert_eq!(jal_cal(IYear::MAX), Err(Error::OutOfRangeYear { year: IYear::MAX }));
    }
}
