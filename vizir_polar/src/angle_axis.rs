// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle axis layout.
//!
//! Categorical axes (one per data row) are spread over the arc from the chart's start angle to
//! its end angle. With `N` rows the step is `(end - start) / N`, so a full turn places the last
//! axis one step short of the first and the polygon closes back onto it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::format_value;
use crate::{DataRow, DataValue};

/// Direction in which categories advance along the arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleAxisOrient {
    /// Advance from the start angle towards the end angle.
    #[default]
    Forward,
    /// Advance away from the end angle: the step keeps its size but flips its sign.
    Reversed,
}

/// Angle axis element: label source and orientation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AngleAxisSpec {
    /// Row key whose value labels each tick. Without one, ticks are labelled by index.
    pub label_key: Option<String>,
    /// Category direction.
    pub orient: AngleAxisOrient,
}

impl AngleAxisSpec {
    /// Creates an angle axis spec labelled by the values under `label_key`.
    pub fn new(label_key: impl Into<String>) -> Self {
        Self {
            label_key: Some(label_key.into()),
            orient: AngleAxisOrient::Forward,
        }
    }

    /// Sets the category direction.
    pub fn with_orient(mut self, orient: AngleAxisOrient) -> Self {
        self.orient = orient;
        self
    }

    fn label(&self, index: usize, row: &DataRow) -> String {
        let value = self.label_key.as_deref().and_then(|key| row.get(key));
        match value {
            Some(DataValue::Text(s)) => s.clone(),
            Some(DataValue::Number(v)) => format_value(*v),
            None => alloc::format!("{index}"),
        }
    }
}

/// One categorical position on the angle axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Row index.
    pub index: usize,
    /// Angle in degrees.
    pub angle: f64,
    /// Tick label.
    pub label: String,
}

/// Returns `count` angles (degrees) evenly distributed from `start_angle` towards `end_angle`.
///
/// `angle[i] = start + i * (end - start) / count`; the sign of the step carries the direction.
/// Zero axes yield no angles.
pub fn angles(count: usize, start_angle: f64, end_angle: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = (end_angle - start_angle) / count as f64;
    (0..count).map(|i| start_angle + step * i as f64).collect()
}

/// Lays out one tick per row.
pub fn angle_ticks(
    rows: &[DataRow],
    start_angle: f64,
    end_angle: f64,
    axis: &AngleAxisSpec,
) -> Vec<AxisTick> {
    let end_angle = match axis.orient {
        AngleAxisOrient::Forward => end_angle,
        AngleAxisOrient::Reversed => 2.0 * start_angle - end_angle,
    };
    angles(rows.len(), start_angle, end_angle)
        .into_iter()
        .zip(rows)
        .enumerate()
        .map(|(index, (angle, row))| AxisTick {
            index,
            angle,
            label: axis.label(index, row),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_even(angles: &[f64], start: f64, end: f64) {
        let step = (end - start) / angles.len() as f64;
        assert_eq!(angles[0], start);
        for pair in angles.windows(2) {
            assert!(
                (pair[1] - pair[0] - step).abs() < 1e-9,
                "uneven step in {angles:?}"
            );
        }
    }

    #[test]
    fn evenly_spaced_for_many_counts_and_arcs() {
        for n in 1..=12 {
            for (start, end) in [(90.0, -270.0), (0.0, 360.0), (45.0, 135.0), (-30.0, -300.0)] {
                let a = angles(n, start, end);
                assert_eq!(a.len(), n);
                assert_even(&a, start, end);
            }
        }
    }

    #[test]
    fn full_clockwise_turn_from_twelve_o_clock() {
        assert_eq!(angles(4, 90.0, -270.0), alloc::vec![90.0, 0.0, -90.0, -180.0]);
    }

    #[test]
    fn zero_axes_is_empty() {
        assert!(angles(0, 90.0, -270.0).is_empty());
        assert!(angle_ticks(&[], 90.0, -270.0, &AngleAxisSpec::default()).is_empty());
    }

    #[test]
    fn ticks_take_labels_from_the_label_key() {
        let rows = [
            DataRow::new().with("subject", "Math"),
            DataRow::new().with("subject", 7),
            DataRow::new(),
        ];
        let ticks = angle_ticks(&rows, 90.0, -270.0, &AngleAxisSpec::new("subject"));
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Math", "7", "2"]);
        assert_eq!(ticks[1].index, 1);
        assert_eq!(ticks[1].angle, -30.0);
    }

    #[test]
    fn reversed_orient_flips_the_step() {
        let rows = [DataRow::new(), DataRow::new(), DataRow::new(), DataRow::new()];
        let forward = angle_ticks(&rows, 90.0, -270.0, &AngleAxisSpec::default());
        let reversed = angle_ticks(
            &rows,
            90.0,
            -270.0,
            &AngleAxisSpec::default().with_orient(AngleAxisOrient::Reversed),
        );
        let f: Vec<f64> = forward.iter().map(|t| t.angle).collect();
        let r: Vec<f64> = reversed.iter().map(|t| t.angle).collect();
        assert_eq!(f, [90.0, 0.0, -90.0, -180.0]);
        assert_eq!(r, [90.0, 180.0, 270.0, 360.0]);
    }
}
