// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Center resolution.

use kurbo::Point;

use crate::{LayoutError, PolarLength, Viewport};

/// Resolves the chart center against `viewport`.
///
/// - an absent coordinate falls back to the viewport center,
/// - an absolute coordinate is used as-is (it is *not* offset by the viewport origin),
/// - a percentage is taken along the viewport width (`cx`) or height (`cy`), starting from the
///   viewport origin.
///
/// Centers outside the viewport are allowed.
pub fn resolve_center(
    cx: Option<PolarLength>,
    cy: Option<PolarLength>,
    viewport: &Viewport,
) -> Result<Point, LayoutError> {
    let x = resolve_coord(cx, viewport.x, viewport.width);
    let y = resolve_coord(cy, viewport.y, viewport.height);
    Ok(Point::new(
        LayoutError::check_finite("cx", x)?,
        LayoutError::check_finite("cy", y)?,
    ))
}

fn resolve_coord(value: Option<PolarLength>, origin: f64, extent: f64) -> f64 {
    match value {
        None => origin + 0.5 * extent,
        Some(PolarLength::Absolute(v)) => v,
        Some(p @ PolarLength::Percent(_)) => origin + p.resolve(extent),
    }
}
