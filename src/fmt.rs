//! Logging shims. Expand to `defmt` calls with the `defmt` feature, to nothing otherwise.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        {
            defmt::debug!($($arg)*);
        }
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        {
            defmt::trace!($($arg)*);
        }
    }};
}
