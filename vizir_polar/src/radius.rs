// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inner/outer radius resolution.

use crate::{LayoutError, PolarLength, Viewport, log};

/// A resolved `(inner, outer)` radius pair in chart coordinate units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRadii {
    /// Inner radius.
    pub inner: f64,
    /// Outer radius.
    pub outer: f64,
}

impl ResolvedRadii {
    /// Returns `true` if `outer < inner`.
    pub fn is_inverted(&self) -> bool {
        self.outer < self.inner
    }

    /// The radial scale range, `(inner, outer)`.
    pub fn range(&self) -> (f64, f64) {
        (self.inner, self.outer)
    }
}

/// The length percentages of a radius are taken against: half the shorter viewport side.
pub fn reference_radius(viewport: &Viewport) -> f64 {
    viewport.width.min(viewport.height) / 2.0
}

/// Resolves `inner` and `outer` against [`reference_radius`].
///
/// Ordering is not validated: an inverted pair is returned as given, and geometry drawn from it
/// will be inverted too.
pub fn resolve_radii(
    inner: PolarLength,
    outer: PolarLength,
    viewport: &Viewport,
) -> Result<ResolvedRadii, LayoutError> {
    let reference = reference_radius(viewport);
    let radii = ResolvedRadii {
        inner: LayoutError::check_finite("inner_radius", inner.resolve(reference))?,
        outer: LayoutError::check_finite("outer_radius", outer.resolve(reference))?,
    };
    if radii.is_inverted() {
        log::warn!(
            inner = radii.inner,
            outer = radii.outer,
            "outer radius is smaller than inner radius"
        );
    }
    Ok(radii)
}
