//! Holds all the FFI related code when the respective configurations are in place.
//!
//! Total functions ([`crate::g2d`], [`crate::d2g`] and [`crate::is_valid_jalaali_date`]) are
//! exported to C as they are. The fallible ones return a `Result` which is not FFI-safe, so C
//! gets the `jalaali_` prefixed wrappers below returning a [`Checked`] instead. Python and
//! WebAssembly call the Rust functions directly and get an error conversion to their own
//! exception types.

#[cfg(feature = "c")]
use crate::{
    GregorianDate, JalCal, JalaaliDate,
    primitive::{IMonth, IMonthDay, IYear, Jdn, UMonthDay, UOrdinal},
};

/// A result and whether it is valid, the C counterpart of `Result<T, crate::Error>`.
///
/// When [`Self::valid`] is false the result is the zeroed [`Default`] of `T` and must not be
/// read.
#[cfg(feature = "c")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Checked<T> {
    /// Whether the operation succeeded.
    pub valid: bool,
    /// The outcome of the operation.
    pub result: T,
}

#[cfg(feature = "c")]
impl<T: Default> From<Result<T, crate::Error>> for Checked<T> {
    fn from(value: Result<T, crate::Error>) -> Self {
        match value {
            Ok(result) => Self {
                valid: true,
                result,
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(feature = "c")]
c_fallible! {
    /// See [`crate::jal_cal`].
    fn jalaali_jal_cal(jy: IYear) -> JalCal = crate::jal_cal;

    /// See [`crate::j2d`].
    fn jalaali_j2d(jy: IYear, jm: IMonth, jd: IMonthDay) -> Jdn = crate::j2d;

    /// See [`crate::d2j`].
    fn jalaali_d2j(jdn: Jdn) -> JalaaliDate = crate::d2j;

    /// See [`crate::to_jalaali`].
    fn jalaali_to_jalaali(gy: IYear, gm: IMonth, gd: IMonthDay) -> JalaaliDate = crate::to_jalaali;

    /// See [`crate::to_gregorian`].
    fn jalaali_to_gregorian(jy: IYear, jm: IMonth, jd: IMonthDay) -> GregorianDate = crate::to_gregorian;

    /// See [`crate::is_leap_jalaali_year`].
    fn jalaali_is_leap_jalaali_year(jy: IYear) -> bool = crate::is_leap_jalaali_year;

    /// See [`crate::jalaali_month_length`].
    fn jalaali_jalaali_month_length(jy: IYear, jm: IMonth) -> UMonthDay = crate::jalaali_month_length;

    /// See [`crate::jalaali_year_length`].
    fn jalaali_jalaali_year_length(jy: IYear) -> UOrdinal = crate::jalaali_year_length;
}

#[cfg(feature = "py")]
impl From<crate::Error> for pyo3::PyErr {
    fn from(value: crate::Error) -> Self {
        pyo3::exceptions::PyValueError::new_err(value.to_string())
    }
}

#[cfg(feature = "wasm")]
impl From<crate::Error> for wasm_bindgen::JsValue {
    fn from(value: crate::Error) -> Self {
        wasm_bindgen::JsValue::from_str(&value.to_string())
    }
}

#[cfg(all(test, feature = "c"))]
mod tests {
    use super::*;

    #[test]
    fn test_checked_from_ok() {
        let checked = jalaali_to_gregorian(1358, 1, 1);
        assert!(checked.valid);
        assert_eq!(checked.result, GregorianDate { gy: 1979, gm: 3, gd: 21 });
    }

    #[test]
    fn test_checked_from_err_is_zeroed() {
        let checked = jalaali_jal_cal(3178);
        assert_eq!(checked, Checked::default());
        assert!(!checked.valid);
    }

    #[test]
    fn test_checked_forwards_every_wrapper() {
        assert_eq!(jalaali_j2d(1403, 12, 30).result, jalaali_j2d(1404, 1, 1).result - 1);
        assert_eq!(
            jalaali_d2j(2_443_954).result,
            JalaaliDate { jy: 1358, jm: 1, jd: 1 }
        );
        assert!(jalaali_to_jalaali(1979, 3, 21).valid);
        assert!(jalaali_is_leap_jalaali_year(1403).result);
        assert_eq!(jalaali_jalaali_month_length(1404, 12).result, 29);
        assert_eq!(jalaali_jalaali_year_length(1403).result, 366);
        assert!(!jalaali_jalaali_year_length(-62).valid);
    }
}
