// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar chart composition.
//!
//! A [`RadarChartSpec`] is the whole configuration tree: chart geometry plus the optional angle
//! axis, radius axis and grid elements. A [`RadarChart`] pairs a spec with the clip-region id
//! minted for that chart instance and runs layout passes over caller-supplied rows and series.
//!
//! A pass resolves, in order: viewport → center and radii → angle and radius axes → per-vertex
//! positions → polygons and grid.

extern crate alloc;

use alloc::vec::Vec;

use crate::{
    AngleAxisSpec, ClipId, ClipIdAllocator, DataRow, GridRings, LayoutContext, LayoutError, Margin,
    PolarGrid, PolarGridSpec, PolarLength, RadarPolygon, RadiusAxis, RadiusAxisSpec,
    SeriesDescriptor, Viewport, angle_ticks, build_polygon, infer_domain, log, resolve_center,
    resolve_radii,
};

/// Declarative radar chart configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarChartSpec {
    /// Declared chart width.
    pub width: f64,
    /// Declared chart height.
    pub height: f64,
    /// Margins around the viewport.
    pub margin: Margin,
    /// Center x; `None` centers horizontally in the viewport.
    pub cx: Option<PolarLength>,
    /// Center y; `None` centers vertically in the viewport.
    pub cy: Option<PolarLength>,
    /// Inner radius.
    pub inner_radius: PolarLength,
    /// Outer radius.
    pub outer_radius: PolarLength,
    /// Angle (degrees) of the first axis.
    pub start_angle: f64,
    /// Angle (degrees) the axes advance towards.
    pub end_angle: f64,
    /// Angle axis element.
    pub angle_axis: AngleAxisSpec,
    /// Radius axis element.
    pub radius_axis: RadiusAxisSpec,
    /// Optional grid element.
    pub grid: Option<PolarGridSpec>,
}

impl RadarChartSpec {
    /// Creates a spec for a `width` x `height` chart.
    ///
    /// Defaults: 5px margins, centered, `inner_radius = 0`, `outer_radius = 80%`, and a full
    /// clockwise turn starting at 12 o'clock (`start_angle = 90`, `end_angle = -270`). No grid.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
            cx: Some(PolarLength::Percent(50.0)),
            cy: Some(PolarLength::Percent(50.0)),
            inner_radius: PolarLength::Absolute(0.0),
            outer_radius: PolarLength::Percent(80.0),
            start_angle: 90.0,
            end_angle: -270.0,
            angle_axis: AngleAxisSpec::default(),
            radius_axis: RadiusAxisSpec::default(),
            grid: None,
        }
    }

    /// Sets the margins.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the center.
    pub fn with_center(mut self, cx: impl Into<PolarLength>, cy: impl Into<PolarLength>) -> Self {
        self.cx = Some(cx.into());
        self.cy = Some(cy.into());
        self
    }

    /// Clears the center, falling back to the viewport center.
    pub fn without_center(mut self) -> Self {
        self.cx = None;
        self.cy = None;
        self
    }

    /// Sets the inner radius.
    pub fn with_inner_radius(mut self, r: impl Into<PolarLength>) -> Self {
        self.inner_radius = r.into();
        self
    }

    /// Sets the outer radius.
    pub fn with_outer_radius(mut self, r: impl Into<PolarLength>) -> Self {
        self.outer_radius = r.into();
        self
    }

    /// Sets the angular range in degrees.
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Sets the angle axis element.
    pub fn with_angle_axis(mut self, axis: AngleAxisSpec) -> Self {
        self.angle_axis = axis;
        self
    }

    /// Sets the radius axis element.
    pub fn with_radius_axis(mut self, axis: RadiusAxisSpec) -> Self {
        self.radius_axis = axis;
        self
    }

    /// Enables the grid.
    pub fn with_grid(mut self, grid: PolarGridSpec) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Disables the grid.
    pub fn without_grid(mut self) -> Self {
        self.grid = None;
        self
    }
}

/// Output of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarLayout {
    /// Resolved shared state for the pass.
    pub context: LayoutContext,
    /// One polygon per series, in series order.
    pub polygons: Vec<RadarPolygon>,
    /// Grid geometry, if the spec requested a grid.
    pub grid: Option<PolarGrid>,
}

/// A radar chart instance: a spec plus the clip-region id it was given at construction.
#[derive(Debug)]
pub struct RadarChart {
    spec: RadarChartSpec,
    clip_id: ClipId,
}

impl RadarChart {
    /// Creates a chart whose clip id comes from [`ClipIdAllocator::global`].
    pub fn new(spec: RadarChartSpec) -> Self {
        Self::with_allocator(spec, ClipIdAllocator::global())
    }

    /// Creates a chart whose clip id comes from `ids`.
    pub fn with_allocator(spec: RadarChartSpec, ids: &ClipIdAllocator) -> Self {
        Self {
            spec,
            clip_id: ids.allocate(),
        }
    }

    /// The current configuration.
    pub fn spec(&self) -> &RadarChartSpec {
        &self.spec
    }

    /// Replaces the configuration. The clip id is kept.
    pub fn set_spec(&mut self, spec: RadarChartSpec) {
        self.spec = spec;
    }

    /// The clip id of this chart instance.
    pub fn clip_id(&self) -> ClipId {
        self.clip_id
    }

    /// Resolves the shared layout state for `rows` and `series`.
    ///
    /// The radius axis domain is inferred from every series' values.
    pub fn context(
        &self,
        rows: &[DataRow],
        series: &[SeriesDescriptor],
    ) -> Result<(LayoutContext, RadiusAxis), LayoutError> {
        let spec = &self.spec;
        let viewport = Viewport::resolve(spec.width, spec.height, spec.margin)?;
        let center = resolve_center(spec.cx, spec.cy, &viewport)?;
        let radii = resolve_radii(spec.inner_radius, spec.outer_radius, &viewport)?;
        let start_angle = LayoutError::check_finite("start_angle", spec.start_angle)?;
        let end_angle = LayoutError::check_finite("end_angle", spec.end_angle)?;
        if let Some((d0, d1)) = spec.radius_axis.domain {
            LayoutError::check_finite("radius_axis.domain", d0)?;
            LayoutError::check_finite("radius_axis.domain", d1)?;
        }
        LayoutError::check_finite("radius_axis.angle", spec.radius_axis.angle)?;
        if let Some(GridRings::Radii(list)) = spec.grid.as_ref().map(|g| &g.rings) {
            for &r in list {
                LayoutError::check_finite("grid.rings", r)?;
            }
        }

        let axis_ticks = angle_ticks(rows, start_angle, end_angle, &spec.angle_axis);
        let angles = axis_ticks.iter().map(|t| t.angle).collect();
        let radius_axis = RadiusAxis::build(
            &spec.radius_axis,
            infer_domain(rows, series),
            radii,
            center,
        );

        let context = LayoutContext {
            width: spec.width,
            height: spec.height,
            viewport,
            clip_id: self.clip_id,
            center,
            radii,
            angles,
            axis_ticks,
            radius_ticks: radius_axis.ticks.clone(),
            x_axis_map: None,
            y_axis_map: None,
        };
        Ok((context, radius_axis))
    }

    /// Runs a full layout pass.
    ///
    /// Everything is recomputed from the current spec, `rows` and `series`; nothing is cached
    /// from earlier passes. Zero rows or zero series produce empty geometry rather than an
    /// error.
    pub fn layout(
        &self,
        rows: &[DataRow],
        series: &[SeriesDescriptor],
    ) -> Result<RadarLayout, LayoutError> {
        let (context, radius_axis) = self.context(rows, series)?;
        if rows.is_empty() || series.is_empty() {
            log::debug!(
                rows = rows.len(),
                series = series.len(),
                "radar chart has nothing to draw"
            );
        }

        let polygons = series
            .iter()
            .enumerate()
            .map(|(i, s)| build_polygon(s, i, rows, &context.angles, &radius_axis, context.center))
            .collect();

        let grid = self.spec.grid.as_ref().map(|g| {
            g.build(
                context.center,
                context.radii,
                &context.angles,
                &context.radius_ticks,
            )
        });

        log::debug!(
            clip = self.clip_id.0,
            cx = context.center.x,
            cy = context.center.y,
            inner = context.radii.inner,
            outer = context.radii.outer,
            axes = context.angles.len(),
            "radar layout pass"
        );

        Ok(RadarLayout {
            context,
            polygons,
            grid,
        })
    }
}
