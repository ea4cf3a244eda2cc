// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar (radar) chart geometry for `VizIR`.
//!
//! This crate turns a declarative radar chart description into plain geometry:
//! - **Resolution**: the viewport, center and radii are resolved from absolute or
//!   percentage-relative configuration ([`PolarLength`]).
//! - **Axes**: categorical axes are spread evenly over an angular arc, and series values are
//!   mapped onto radii by a linear scale.
//! - **Shapes**: every series becomes a closed [`RadarPolygon`]; the grid becomes concentric
//!   rings plus spokes ([`PolarGrid`]).
//!
//! Drawing the geometry is left to a renderer; polygons and rings expose both a
//! [`kurbo::BezPath`] and an SVG path string.
//!
//! ```
//! use vizir_polar::{DataRow, RadarChart, RadarChartSpec, SeriesDescriptor};
//!
//! let spec = RadarChartSpec::new(600.0, 500.0).with_outer_radius(150.0);
//! let chart = RadarChart::new(spec);
//! let rows = [
//!     DataRow::new().with("subject", "Math").with("score", 120.0),
//!     DataRow::new().with("subject", "Physics").with("score", 85.0),
//!     DataRow::new().with("subject", "History").with("score", 99.0),
//! ];
//! let layout = chart
//!     .layout(&rows, &[SeriesDescriptor::new("score")])
//!     .unwrap();
//! assert_eq!(layout.polygons[0].points.len(), 3);
//! assert_eq!(layout.context.axis_ticks.len(), 3);
//! ```
//!
//! Every call to [`RadarChart::layout`] recomputes the full geometry from its inputs; nothing
//! is carried over between passes.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod angle_axis;
mod center;
mod chart;
mod context;
mod data;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod grid;
mod length;
mod log;
mod polar;
mod polygon;
#[cfg(test)]
mod radar_tests;
mod radius;
mod radius_axis;
mod scale;
mod series;
mod style;
mod viewport;
mod z_order;

pub use angle_axis::{AngleAxisOrient, AngleAxisSpec, AxisTick, angle_ticks, angles};
pub use center::resolve_center;
pub use chart::{RadarChart, RadarChartSpec, RadarLayout};
pub use context::{CartesianAxisMap, LayoutContext};
pub use data::{DataRow, DataValue};
pub use error::LayoutError;
pub use format::format_value;
pub use grid::{
    GridRing, GridRings, GridShape, GridSpoke, GridType, MAX_GRID_RINGS, PolarGrid, PolarGridSpec,
};
pub use length::PolarLength;
pub use polar::polar_to_cartesian;
pub use polygon::{RadarPoint, RadarPolygon, build_polygon};
pub use radius::{ResolvedRadii, reference_radius, resolve_radii};
pub use radius_axis::{RadiusAxis, RadiusAxisSpec, RadiusTick, infer_domain};
pub use scale::{MAX_TICKS, ScaleLinear, nice_ticks};
pub use series::SeriesDescriptor;
pub use style::{GridStyle, StrokeStyle};
pub use viewport::{ClipId, ClipIdAllocator, Margin, Viewport};
pub use z_order::*;
