// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-pass layout snapshot.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::{AxisTick, ClipId, RadiusTick, ResolvedRadii, Viewport};

/// Placeholder for cartesian axis maps.
///
/// Radar charts have no cartesian axes, so this type has no values and the corresponding
/// [`LayoutContext`] fields are always `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartesianAxisMap {}

/// Everything resolved for one layout pass, shared read-only by every consumer of that pass.
///
/// A new context is built on every pass; none of it is reused across passes.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutContext {
    /// Declared chart width.
    pub width: f64,
    /// Declared chart height.
    pub height: f64,
    /// Viewport after margins.
    pub viewport: Viewport,
    /// The chart instance's clip region.
    pub clip_id: ClipId,
    /// Resolved center.
    pub center: Point,
    /// Resolved inner/outer radii.
    pub radii: ResolvedRadii,
    /// One angle per data row, in degrees.
    pub angles: Vec<f64>,
    /// One tick per data row.
    pub axis_ticks: Vec<AxisTick>,
    /// Radius axis ticks.
    pub radius_ticks: Vec<RadiusTick>,
    /// Always `None` for radar charts.
    pub x_axis_map: Option<CartesianAxisMap>,
    /// Always `None` for radar charts.
    pub y_axis_map: Option<CartesianAxisMap>,
}

impl LayoutContext {
    /// Inner radius.
    pub fn inner_radius(&self) -> f64 {
        self.radii.inner
    }

    /// Outer radius.
    pub fn outer_radius(&self) -> f64 {
        self.radii.outer
    }
}
