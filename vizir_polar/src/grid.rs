// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar grid generation: concentric rings and radial spokes.
//!
//! Rings are either “web” polygons (one vertex per axis angle) or circles; spokes run from the
//! center to the outer radius along each axis angle.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Line, Point, Shape};

use crate::format::closed_svg_path;
use crate::polygon::closed_bez_path;
use crate::style::GridStyle;
use crate::{RadiusTick, ResolvedRadii, polar_to_cartesian, z_order};

/// Upper bound on the number of evenly spaced rings produced by [`GridRings::Count`].
pub const MAX_GRID_RINGS: usize = 10_000;

/// How ring radii are chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum GridRings {
    /// `n` rings evenly spaced out to the outer radius, plus a ring on the inner radius when
    /// it is positive. `n` is capped at [`MAX_GRID_RINGS`].
    Count(usize),
    /// Rings at exactly these radii.
    Radii(Vec<f64>),
    /// One ring per radius axis tick.
    RadiusTicks,
}

/// Ring shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridType {
    /// Straight-edged rings through the axis angles.
    #[default]
    Polygon,
    /// Circular rings.
    Circle,
}

/// Grid element: which rings and spokes to produce.
#[derive(Clone, Debug, PartialEq)]
pub struct PolarGridSpec {
    /// Ring radii policy.
    pub rings: GridRings,
    /// Ring shape.
    pub grid_type: GridType,
    /// Whether to produce spokes.
    pub spokes: bool,
    /// Stroke style passed through to the renderer.
    pub style: GridStyle,
}

impl Default for PolarGridSpec {
    fn default() -> Self {
        Self {
            rings: GridRings::Count(5),
            grid_type: GridType::Polygon,
            spokes: true,
            style: GridStyle::default(),
        }
    }
}

impl PolarGridSpec {
    /// Creates a grid spec with five polygon rings and spokes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ring policy.
    pub fn with_rings(mut self, rings: GridRings) -> Self {
        self.rings = rings;
        self
    }

    /// Sets the ring shape.
    pub fn with_grid_type(mut self, grid_type: GridType) -> Self {
        self.grid_type = grid_type;
        self
    }

    /// Enables or disables spokes.
    pub fn with_spokes(mut self, spokes: bool) -> Self {
        self.spokes = spokes;
        self
    }

    /// Sets the grid style.
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    fn ring_radii(&self, radii: ResolvedRadii, ticks: &[RadiusTick]) -> Vec<f64> {
        match &self.rings {
            GridRings::Count(0) => Vec::new(),
            GridRings::Count(n) => {
                let n = (*n).min(MAX_GRID_RINGS);
                let step = (radii.outer - radii.inner) / n as f64;
                let first = (radii.inner > 0.0).then_some(radii.inner);
                first
                    .into_iter()
                    .chain((1..=n).map(|k| radii.inner + step * k as f64))
                    .collect()
            }
            GridRings::Radii(r) => r.clone(),
            GridRings::RadiusTicks => ticks.iter().map(|t| t.radius).collect(),
        }
    }

    /// Builds the grid around `center`.
    pub fn build(
        &self,
        center: Point,
        radii: ResolvedRadii,
        angles: &[f64],
        ticks: &[RadiusTick],
    ) -> PolarGrid {
        let rings = self
            .ring_radii(radii, ticks)
            .into_iter()
            .map(|radius| GridRing {
                radius,
                shape: match self.grid_type {
                    GridType::Polygon => GridShape::Polygon(
                        angles
                            .iter()
                            .map(|&a| polar_to_cartesian(center, radius, a))
                            .collect(),
                    ),
                    GridType::Circle => GridShape::Circle(Circle::new(center, radius)),
                },
            })
            .collect();

        let spokes = if self.spokes {
            angles
                .iter()
                .enumerate()
                .map(|(index, &angle)| GridSpoke {
                    index,
                    angle,
                    start: center,
                    end: polar_to_cartesian(center, radii.outer, angle),
                })
                .collect()
        } else {
            Vec::new()
        };

        PolarGrid {
            rings,
            spokes,
            style: self.style.clone(),
            z_index: z_order::GRID_LINES,
        }
    }
}

/// Geometry of a single ring.
#[derive(Clone, Debug, PartialEq)]
pub enum GridShape {
    /// Closed polygon, one vertex per axis angle (first vertex not repeated).
    Polygon(Vec<Point>),
    /// Circle.
    Circle(Circle),
}

/// A concentric grid ring.
#[derive(Clone, Debug, PartialEq)]
pub struct GridRing {
    /// Ring radius.
    pub radius: f64,
    /// Ring geometry.
    pub shape: GridShape,
}

impl GridRing {
    /// The ring as a closed path.
    ///
    /// `tolerance` is the flattening tolerance used for circular rings.
    pub fn bez_path(&self, tolerance: f64) -> BezPath {
        match &self.shape {
            GridShape::Polygon(points) => closed_bez_path(points.iter().copied()),
            GridShape::Circle(c) => c.path_elements(tolerance).collect(),
        }
    }

    /// The ring as an SVG path. Polygon rings use `M … L … Z`; circles use two arcs.
    pub fn svg_path(&self) -> String {
        match &self.shape {
            GridShape::Polygon(points) => closed_svg_path(points.iter().copied()),
            GridShape::Circle(c) => {
                let (cx, cy, r) = (c.center.x, c.center.y, c.radius);
                alloc::format!(
                    "M {},{} A {r},{r} 0 1,0 {},{} A {r},{r} 0 1,0 {},{} Z",
                    cx - r,
                    cy,
                    cx + r,
                    cy,
                    cx - r,
                    cy
                )
            }
        }
    }
}

/// A radial spoke along one axis angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpoke {
    /// Axis index.
    pub index: usize,
    /// Axis angle in degrees.
    pub angle: f64,
    /// Start point (the center).
    pub start: Point,
    /// End point (on the outer radius).
    pub end: Point,
}

impl GridSpoke {
    /// The spoke as a line segment.
    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }
}

/// Grid geometry for one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PolarGrid {
    /// Rings, innermost first.
    pub rings: Vec<GridRing>,
    /// Spokes, one per axis.
    pub spokes: Vec<GridSpoke>,
    /// Stroke style.
    pub style: GridStyle,
    /// Rendering order hint.
    pub z_index: i32,
}
