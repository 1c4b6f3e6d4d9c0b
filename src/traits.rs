//! Holds traits and their implementation for Rust usage.

use crate::{
    GregorianDate, JalaaliDate,
    error::Result,
    julian::{UNIX_EPOCH_JDN, d2g},
    primitive::{IMonth, IMonthDay, IYear, Jdn},
};

/// Seconds in a day (leap seconds are not counted).
pub const SECONDS_PER_DAY: u64 = 86_400;

/// A date-like value that can be broken down into Gregorian year, month and day.
///
/// This is the typed replacement of passing "some date" around: anything that knows its own
/// Gregorian components can be converted with [`JalaaliDate::from_date`].
pub trait GregorianComponents {
    /// The Gregorian year, month and day of this value.
    ///
    /// The components do not need to be normalized (see [`crate::g2d`]).
    fn gregorian_components(&self) -> (IYear, IMonth, IMonthDay);

    /// Convert this value to the Jalaali calendar (see [`crate::to_jalaali`]).
    fn to_jalaali(&self) -> Result<JalaaliDate> {
        let (gy, gm, gd) = self.gregorian_components();
        crate::to_jalaali(gy, gm, gd)
    }
}

impl GregorianComponents for GregorianDate {
    fn gregorian_components(&self) -> (IYear, IMonth, IMonthDay) {
        (self.gy, self.gm as IMonth, self.gd as IMonthDay)
    }
}

impl GregorianComponents for (IYear, IMonth, IMonthDay) {
    fn gregorian_components(&self) -> (IYear, IMonth, IMonthDay) {
        *self
    }
}

/// The time passed since the Unix Epoch (UTC), truncated to whole days.
impl GregorianComponents for core::time::Duration {
    fn gregorian_components(&self) -> (IYear, IMonth, IMonthDay) {
        let days = (self.as_secs() / SECONDS_PER_DAY) as Jdn;
        d2g(UNIX_EPOCH_JDN + days).gregorian_components()
    }
}

/// The UTC date of this instant, before or after the Unix Epoch.
#[cfg(feature = "std")]
impl GregorianComponents for std::time::SystemTime {
    fn gregorian_components(&self) -> (IYear, IMonth, IMonthDay) {
        let days = match self.duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => (d.as_secs() / SECONDS_PER_DAY) as Jdn,
            Err(e) => {
                // any part of a day before the epoch is already on a previous date
                let d = e.duration();
                let secs = d.as_secs() + if d.subsec_nanos() > 0 { 1 } else { 0 };
                -(secs.div_ceil(SECONDS_PER_DAY) as Jdn)
            }
        };
        d2g(UNIX_EPOCH_JDN + days).gregorian_components()
    }
}
