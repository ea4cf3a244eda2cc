// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series descriptors.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

use peniko::Brush;

use crate::RadarPolygon;
use crate::style::StrokeStyle;

/// One overlaid series: which row key to read, and how the renderer should paint it.
///
/// Only [`SeriesDescriptor::data_key`] affects geometry. The visual attributes are copied onto
/// the resulting [`RadarPolygon`] for the renderer.
#[derive(Clone)]
pub struct SeriesDescriptor {
    /// Row key whose value becomes this series' radius at each axis.
    pub data_key: String,
    /// Display name for legends/tooltips. Defaults to the data key.
    pub name: Option<String>,
    /// Fill paint.
    pub fill: Brush,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Whether the renderer should draw a dot on each vertex.
    pub dot: bool,
    /// Whether the renderer should label each vertex with its value.
    pub label: bool,
    /// Optional click handler, invoked by the renderer through [`SeriesDescriptor::click`].
    pub on_click: Option<Arc<dyn Fn(&RadarPolygon)>>,
}

impl core::fmt::Debug for SeriesDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SeriesDescriptor")
            .field("data_key", &self.data_key)
            .field("name", &self.name)
            .field("fill", &self.fill)
            .field("fill_opacity", &self.fill_opacity)
            .field("stroke", &self.stroke)
            .field("dot", &self.dot)
            .field("label", &self.label)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl SeriesDescriptor {
    /// Creates a series reading `data_key`, with a default fill, full opacity, no stroke, and
    /// no dots or labels.
    pub fn new(data_key: impl Into<String>) -> Self {
        Self {
            data_key: data_key.into(),
            name: None,
            fill: Brush::default(),
            fill_opacity: 1.0,
            stroke: None,
            dot: false,
            label: false,
            on_click: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the fill opacity, clamped to `[0, 1]`.
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity.clamp(0.0, 1.0);
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Disables the outline stroke.
    pub fn without_stroke(mut self) -> Self {
        self.stroke = None;
        self
    }

    /// Enables or disables vertex dots.
    pub fn with_dot(mut self, dot: bool) -> Self {
        self.dot = dot;
        self
    }

    /// Enables or disables vertex value labels.
    pub fn with_label(mut self, label: bool) -> Self {
        self.label = label;
        self
    }

    /// Sets the click handler.
    pub fn with_on_click(mut self, f: impl Fn(&RadarPolygon) + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    /// The display name, falling back to the data key.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.data_key)
    }

    /// Invokes the click handler (if any) with the polygon built for this series.
    ///
    /// Returns `true` if a handler ran.
    pub fn click(&self, polygon: &RadarPolygon) -> bool {
        match &self.on_click {
            Some(f) => {
                f(polygon);
                true
            }
            None => false,
        }
    }
}
