//! Error type of the fallible conversions.

use crate::{JALAALI_YEAR_MAX, JALAALI_YEAR_MIN, primitive::IYear};

/// Result alias for every operation that consults the Jalaali break table.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// Returned when a Jalaali year has no coverage in the break table.
    #[error(
        "invalid Jalaali year {year} (must be {min} to {max})",
        min = JALAALI_YEAR_MIN,
        max = JALAALI_YEAR_MAX
    )]
    OutOfRangeYear {
        /// The rejected year.
        year: IYear,
    },
}

impl Error {
    /// Fail with [`Error::OutOfRangeYear`] unless `year` is covered by the break table.
    pub const fn check_year(year: IYear) -> Result<IYear> {
        if year < JALAALI_YEAR_MIN || year > JALAALI_YEAR_MAX {
            Err(Self::OutOfRangeYear { year })
        } else {
            Ok(year)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_out_of_range_year() {
        let e = Error::OutOfRangeYear { year: 3178 };
        assert_eq!(e.to_string(), "invalid Jalaali year 3178 (must be -61 to 3177)");
    }

    #[test]
    fn check_year_bounds() {
        assert_eq!(Error::check_year(-61), Ok(-61));
        assert_eq!(Error::check_year(3177), Ok(3177));
        assert_eq!(Error::check_year(-62), Err(Error::OutOfRangeYear { year: -62 }));
        assert_eq!(Error::check_year(3178), Err(Error::OutOfRangeYear { year: 3178 }));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<Error>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Error>();
    }
}
