// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series polygon generation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Brush;

use crate::format::closed_svg_path;
use crate::style::StrokeStyle;
use crate::{DataRow, RadiusAxis, SeriesDescriptor, polar_to_cartesian, z_order};

/// One vertex of a series polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarPoint {
    /// Row (axis) index.
    pub index: usize,
    /// Axis angle in degrees.
    pub angle: f64,
    /// Radius the value mapped to.
    pub radius: f64,
    /// The value read from the row; `None` if it was missing or not a finite number.
    pub value: Option<f64>,
    /// Scene position.
    pub point: Point,
}

/// A closed polygon for one series: exactly one vertex per data row.
///
/// The vertex list does not repeat the first vertex; paths built from it end with an explicit
/// close command instead.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarPolygon {
    /// Position of the series in the input series list.
    pub series_index: usize,
    /// The series' data key.
    pub data_key: String,
    /// The series' display name.
    pub name: String,
    /// Vertices in row order.
    pub points: Vec<RadarPoint>,
    /// Fill paint.
    pub fill: Brush,
    /// Fill opacity.
    pub fill_opacity: f64,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Whether vertex dots were requested.
    pub dot: bool,
    /// Whether vertex labels were requested.
    pub label: bool,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RadarPolygon {
    /// Returns `true` if the polygon has no vertices (no data rows).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertex positions in row order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(|p| p.point)
    }

    /// The polygon as a closed path. Empty if there are no vertices.
    pub fn bez_path(&self) -> BezPath {
        closed_bez_path(self.vertices())
    }

    /// The polygon as an SVG path: `M x0,y0 L x1,y1 … Z`. Empty if there are no vertices.
    pub fn svg_path(&self) -> String {
        closed_svg_path(self.vertices())
    }
}

/// Builds the polygon for `series` (at position `series_index` in the series list).
///
/// Vertex `i` combines `angles[i]` with the radius of row `i`'s value under `axis`. Rows whose
/// value is missing or non-numeric are placed at the inner radius. The result depends only on
/// the arguments; call again whenever any of them changes.
pub fn build_polygon(
    series: &SeriesDescriptor,
    series_index: usize,
    rows: &[DataRow],
    angles: &[f64],
    axis: &RadiusAxis,
    center: Point,
) -> RadarPolygon {
    let inner = axis.scale.range().0;
    let points = rows
        .iter()
        .zip(angles)
        .enumerate()
        .map(|(index, (row, &angle))| {
            let value = row.number(&series.data_key);
            let radius = value.map_or(inner, |v| axis.radius(v));
            RadarPoint {
                index,
                angle,
                radius,
                value,
                point: polar_to_cartesian(center, radius, angle),
            }
        })
        .collect();

    RadarPolygon {
        series_index,
        data_key: series.data_key.clone(),
        name: series.display_name().into(),
        points,
        fill: series.fill.clone(),
        fill_opacity: series.fill_opacity,
        stroke: series.stroke.clone(),
        dot: series.dot,
        label: series.label,
        z_index: z_order::SERIES_FILL,
    }
}

pub(crate) fn closed_bez_path(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut p = BezPath::new();
    for (i, pt) in points.into_iter().enumerate() {
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    if !p.elements().is_empty() {
        p.close_path();
    }
    p
}
