// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar to cartesian conversion.

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Converts `(radius, angle)` around `center` into a scene point.
///
/// `angle_degrees` is measured from 3 o'clock, counter-clockwise as seen on screen. Since scene
/// y grows downward, the sine term is subtracted.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let theta = angle_degrees.to_radians();
    Point::new(
        center.x + radius * theta.cos(),
        center.y - radius * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "x {a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-9, "y {a:?} != {b:?}");
    }

    #[test]
    fn quarter_turns() {
        let c = Point::new(300.0, 250.0);
        assert_close(polar_to_cartesian(c, 100.0, 0.0), Point::new(400.0, 250.0));
        assert_close(polar_to_cartesian(c, 100.0, 90.0), Point::new(300.0, 150.0));
        assert_close(polar_to_cartesian(c, 100.0, 180.0), Point::new(200.0, 250.0));
        assert_close(polar_to_cartesian(c, 100.0, -90.0), Point::new(300.0, 350.0));
    }

    #[test]
    fn zero_radius_is_the_center() {
        let c = Point::new(12.0, 34.0);
        assert_close(polar_to_cartesian(c, 0.0, 123.0), c);
    }
}
