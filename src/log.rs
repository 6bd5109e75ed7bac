//! Internal event macros.
//!
//! Algorithms report through these instead of calling `tracing` directly so the
//! crate builds without the `tracing` feature. With the feature disabled every
//! macro expands to an empty block and its arguments are not evaluated.

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}
