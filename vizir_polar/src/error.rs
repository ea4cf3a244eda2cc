// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported by a layout pass.

use alloc::string::String;

use thiserror::Error;

/// A configuration problem that stops geometry production for a chart.
///
/// Soft conditions (no rows, no series, inverted radii) are not errors; they produce empty
/// or literal geometry instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Margins exceed the declared chart size.
    #[error("viewport has negative size: {width} x {height}")]
    NegativeViewport {
        /// Resolved viewport width.
        width: f64,
        /// Resolved viewport height.
        height: f64,
    },
    /// A configuration value is, or resolved to, NaN or infinity.
    #[error("`{field}` is not a finite number")]
    NonFinite {
        /// Name of the offending configuration field.
        field: &'static str,
    },
    /// A length string is neither a number nor a percentage.
    #[error("invalid length `{input}`: expected a number or a percentage like \"50%\"")]
    InvalidLength {
        /// The rejected input.
        input: String,
    },
}

impl LayoutError {
    pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { field })
        }
    }
}
