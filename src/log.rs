//! Logging shim for layout diagnostics.
//!
//! With the `tracing` feature the `debug!`/`info!`/`warn!` macros come straight
//! from `tracing`, so structured fields (`cell = %id, font_pt = size.0`) work as
//! usual. Without it they expand to nothing and the layout code pays nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, info, warn};
