// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number and SVG path formatting.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;

use kurbo::Point;

/// Formats a number for a chart label (axis ticks, radius ticks, vertex values).
///
/// Uses the shortest round-trip form without a trailing `.0`, and prints negative zero as `0`.
///
/// ```
/// assert_eq!(vizir_polar::format_value(-0.0), "0");
/// assert_eq!(vizir_polar::format_value(12.5), "12.5");
/// ```
pub fn format_value(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    alloc::format!("{v}")
}

/// Writes `M x0,y0 L x1,y1 … Z` for a closed polyline.
///
/// Coordinates are written with `f64`'s `Display`; no rounding is applied. An empty point list
/// writes nothing.
pub(crate) fn closed_svg_path(points: impl IntoIterator<Item = Point>) -> String {
    let mut out = String::new();
    for (i, p) in points.into_iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{cmd} {},{}", p.x, p.y);
    }
    if !out.is_empty() {
        out.push_str(" Z");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_drop_trailing_zero_fraction() {
        assert_eq!(format_value(120.0), "120");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(2.5), "2.5");
    }

    #[test]
    fn path_is_closed_with_z() {
        let d = closed_svg_path([
            Point::new(300.0, 100.0),
            Point::new(400.5, 250.0),
            Point::new(200.0, 250.0),
        ]);
        assert_eq!(d, "M 300,100 L 400.5,250 L 200,250 Z");
        assert_eq!(closed_svg_path(core::iter::empty()), "");
    }
}
