// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radius axis layout: the value → radius scale shared by every series, and its ticks.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::scale::{ScaleLinear, nice_domain};
use crate::{DataRow, ResolvedRadii, SeriesDescriptor, polar_to_cartesian};

/// Radius axis element: domain policy, tick count, and placement angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusAxisSpec {
    /// Explicit `(min, max)` domain. Overrides the data-driven domain.
    pub domain: Option<(f64, f64)>,
    /// Extend the data-driven domain to include zero.
    pub zero_baseline: bool,
    /// Round the domain outward to “nice” tick values.
    pub nice: bool,
    /// Number of ticks (evenly spaced) or approximate tick count (when `nice`).
    pub tick_count: usize,
    /// Angle (degrees) along which tick positions are placed.
    pub angle: f64,
}

impl Default for RadiusAxisSpec {
    fn default() -> Self {
        Self {
            domain: None,
            zero_baseline: false,
            nice: false,
            tick_count: 5,
            angle: 0.0,
        }
    }
}

impl RadiusAxisSpec {
    /// Creates a radius axis spec with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit domain.
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some((min, max));
        self
    }

    /// Includes zero in the data-driven domain.
    pub fn with_zero_baseline(mut self, zero_baseline: bool) -> Self {
        self.zero_baseline = zero_baseline;
        self
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Sets the tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the angle along which ticks are placed.
    pub fn with_angle(mut self, angle_degrees: f64) -> Self {
        self.angle = angle_degrees;
        self
    }

    /// Returns the effective domain for `data_domain` (the inferred data extent, if any).
    ///
    /// Without data and without an explicit domain this is `(0, 0)`, which maps every value to
    /// the inner radius.
    pub fn resolved_domain(&self, data_domain: Option<(f64, f64)>) -> (f64, f64) {
        let domain = match self.domain {
            Some(d) => d,
            None => {
                let (min, max) = data_domain.unwrap_or((0.0, 0.0));
                if self.zero_baseline {
                    (min.min(0.0), max.max(0.0))
                } else {
                    (min, max)
                }
            }
        };
        if !self.nice || domain.0 == domain.1 {
            return domain;
        }
        if domain.0 > domain.1 {
            let (lo, hi) = nice_domain((domain.1, domain.0), self.tick_count);
            (hi, lo)
        } else {
            nice_domain(domain, self.tick_count)
        }
    }
}

/// A tick on the radius axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusTick {
    /// Domain value.
    pub value: f64,
    /// Radius the value maps to.
    pub radius: f64,
    /// Tick position along the axis angle.
    pub point: Point,
}

/// A resolved radius axis: the value scale plus its ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusAxis {
    /// Scale from series values to radii; its range is `(inner, outer)`.
    pub scale: ScaleLinear,
    /// Ticks, ordered by value.
    pub ticks: Vec<RadiusTick>,
}

impl RadiusAxis {
    /// Builds the radius axis for `radii` around `center`.
    pub fn build(
        spec: &RadiusAxisSpec,
        data_domain: Option<(f64, f64)>,
        radii: ResolvedRadii,
        center: Point,
    ) -> Self {
        let scale = ScaleLinear::new(spec.resolved_domain(data_domain), radii.range());
        let values = if spec.nice && !scale.is_degenerate() {
            scale.nice_ticks(spec.tick_count)
        } else {
            scale.even_ticks(spec.tick_count)
        };
        let ticks = values
            .into_iter()
            .map(|value| {
                let radius = scale.map(value);
                RadiusTick {
                    value,
                    radius,
                    point: polar_to_cartesian(center, radius, spec.angle),
                }
            })
            .collect();
        Self { scale, ticks }
    }

    /// Maps a series value to its radius.
    pub fn radius(&self, value: f64) -> f64 {
        self.scale.map(value)
    }
}

/// Infers `(min, max)` over every series' values across every row.
///
/// Missing, text and non-finite values are skipped. Returns `None` if no usable value exists.
pub fn infer_domain(rows: &[DataRow], series: &[SeriesDescriptor]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        for s in series {
            let Some(v) = row.number(&s.data_key) else {
                continue;
            };
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}
