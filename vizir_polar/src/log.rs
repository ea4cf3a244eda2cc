// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export `tracing` macros; without it they expand to
//! nothing. Call them as `log::debug!` / `log::warn!`.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

// The no-op fallbacks get distinct names: a local `warn` macro would clash with the built-in
// `#[warn]` attribute when imported by name.
#[cfg(not(feature = "tracing"))]
macro_rules! noop_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! noop_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {noop_debug as debug, noop_warn as warn};

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_structured_fields() {
        let n = 3;
        super::debug!(n, value = 1.5, "debug message");
        super::warn!(inner = 2.0, outer = 1.0, "warn message");
        assert_eq!(n, 3);
    }
}
