//! Private macros specific to this crate.

/// Log through the `log` facade at debug level when the `logging` feature is enabled.
///
/// Without the feature, the arguments are still type checked so both builds see the same code.
macro_rules! log_debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        ::log::debug!($($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = ::core::format_args!($($arg)+);
    }};
}

/// Log at trace level, see [`log_debug`].
macro_rules! log_trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        ::log::trace!($($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = ::core::format_args!($($arg)+);
    }};
}

/// Export fallible functions to C as `extern "C"` wrappers returning a [`crate::ffi::Checked`].
///
/// Each entry names the exported symbol, its signature with the plain result type and the Rust
/// function it forwards to:
///
/// ```rust,ignore
/// c_fallible! {
///     /// Docs of the exported symbol.
///     fn jalaali_j2d(jy: IYear, jm: IMonth, jd: IMonthDay) -> Jdn = crate::j2d;
/// }
/// ```
#[cfg(feature = "c")]
macro_rules! c_fallible {
    ($(
        $(#[$meta:meta])*
        fn $ident:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty = $target:path;
    )*) => {
        $(
            $(#[$meta])*
            #[unsafe(no_mangle)]
            pub extern "C" fn $ident($($arg: $ty),*) -> Checked<$ret> {
                $target($($arg),*).into()
            }
        )*
    };
}
