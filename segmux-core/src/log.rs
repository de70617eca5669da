//! Logging shims
//!
//! Expand to `defmt` calls when the `defmt` feature is enabled and to nothing
//! otherwise, so call sites need no `cfg` of their own.

macro_rules! debug {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)+);
    );
}

macro_rules! warning {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)+);
    );
}

pub(crate) use debug;
pub(crate) use warning;
