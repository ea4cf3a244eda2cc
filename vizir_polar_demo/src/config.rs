// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML chart files.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;
use vizir_polar::{
    AngleAxisOrient, AngleAxisSpec, DataRow, GridRings, GridType, Margin, PolarGridSpec,
    PolarLength, RadarChartSpec, RadiusAxisSpec, SeriesDescriptor, StrokeStyle,
};

/// The chart used when no `--config` is given.
pub(crate) const DEFAULT_CHART: &str = r##"# Two students scored across nine subjects.
width = 600
height = 500
outer_radius = 150
label_key = "subject"

[radius_axis]
domain = [0, 150]
angle = 90

[grid]
rings = 5

[[series]]
data_key = "A"
name = "Mike"
fill = "#8884d8"
fill_opacity = 0.6
stroke = "#8884d8"
dot = true

[[series]]
data_key = "B"
name = "Lily"
fill = "#82ca9d"
fill_opacity = 0.6
stroke = "#82ca9d"

[[rows]]
subject = "Math"
A = 120
B = 110

[[rows]]
subject = "Chinese"
A = 98
B = 130

[[rows]]
subject = "English"
A = 86
B = 130

[[rows]]
subject = "Geography"
A = 99
B = 100

[[rows]]
subject = "Physics"
A = 85
B = 90

[[rows]]
subject = "History"
A = 65
B = 85

[[rows]]
subject = "Biology"
A = 72
B = 96

[[rows]]
subject = "Chemistry"
A = 104
B = 80

[[rows]]
subject = "Art"
A = 60
B = 140
"##;

/// A chart file: geometry, axes, grid, series and rows.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ChartFile {
    width: f64,
    height: f64,
    #[serde(default)]
    margin: Margin,
    cx: Option<PolarLength>,
    cy: Option<PolarLength>,
    inner_radius: Option<PolarLength>,
    outer_radius: Option<PolarLength>,
    start_angle: Option<f64>,
    end_angle: Option<f64>,
    label_key: Option<String>,
    #[serde(default)]
    orient: AngleAxisOrient,
    #[serde(default)]
    radius_axis: RadiusAxisFile,
    grid: Option<GridFile>,
    #[serde(default)]
    series: Vec<SeriesFile>,
    #[serde(default)]
    pub(crate) rows: Vec<DataRow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RadiusAxisFile {
    domain: Option<[f64; 2]>,
    #[serde(default)]
    zero_baseline: bool,
    #[serde(default)]
    nice: bool,
    tick_count: Option<usize>,
    angle: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RingsFile {
    Count(usize),
    Radii(Vec<f64>),
    Named(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridFile {
    rings: Option<RingsFile>,
    #[serde(rename = "type", default)]
    grid_type: GridType,
    spokes: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeriesFile {
    data_key: String,
    name: Option<String>,
    fill: Option<String>,
    fill_opacity: Option<f64>,
    stroke: Option<String>,
    stroke_width: Option<f64>,
    #[serde(default)]
    dot: bool,
    #[serde(default)]
    label: bool,
}

impl ChartFile {
    pub(crate) fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub(crate) fn chart_spec(&self) -> Result<RadarChartSpec> {
        let mut spec = RadarChartSpec::new(self.width, self.height).with_margin(self.margin);
        if let Some(cx) = self.cx {
            spec.cx = Some(cx);
        }
        if let Some(cy) = self.cy {
            spec.cy = Some(cy);
        }
        if let Some(r) = self.inner_radius {
            spec = spec.with_inner_radius(r);
        }
        if let Some(r) = self.outer_radius {
            spec = spec.with_outer_radius(r);
        }
        let start_angle = self.start_angle.unwrap_or(spec.start_angle);
        let end_angle = self.end_angle.unwrap_or(spec.end_angle);
        spec = spec.with_angles(start_angle, end_angle);
        spec.angle_axis = AngleAxisSpec {
            label_key: self.label_key.clone(),
            orient: self.orient,
        };
        spec = spec.with_radius_axis(self.radius_axis.spec());
        if let Some(grid) = &self.grid {
            spec = spec.with_grid(grid.spec()?);
        }
        Ok(spec)
    }

    pub(crate) fn series(&self) -> Result<Vec<SeriesDescriptor>> {
        self.series.iter().map(SeriesFile::descriptor).collect()
    }
}

impl RadiusAxisFile {
    fn spec(&self) -> RadiusAxisSpec {
        let defaults = RadiusAxisSpec::default();
        RadiusAxisSpec {
            domain: self.domain.map(|[min, max]| (min, max)),
            zero_baseline: self.zero_baseline,
            nice: self.nice,
            tick_count: self.tick_count.unwrap_or(defaults.tick_count),
            angle: self.angle.unwrap_or(defaults.angle),
        }
    }
}

impl GridFile {
    fn spec(&self) -> Result<PolarGridSpec> {
        let rings = match &self.rings {
            None => GridRings::Count(5),
            Some(RingsFile::Count(n)) => GridRings::Count(*n),
            Some(RingsFile::Radii(r)) => GridRings::Radii(r.clone()),
            Some(RingsFile::Named(name)) if name == "ticks" => GridRings::RadiusTicks,
            Some(RingsFile::Named(name)) => {
                return Err(anyhow!(
                    "unknown grid rings `{name}` (expected a count, a list of radii, or \"ticks\")"
                ));
            }
        };
        Ok(PolarGridSpec::new()
            .with_rings(rings)
            .with_grid_type(self.grid_type)
            .with_spokes(self.spokes.unwrap_or(true)))
    }
}

impl SeriesFile {
    fn descriptor(&self) -> Result<SeriesDescriptor> {
        let mut s = SeriesDescriptor::new(&self.data_key)
            .with_dot(self.dot)
            .with_label(self.label);
        if let Some(name) = &self.name {
            s = s.with_name(name);
        }
        if let Some(fill) = &self.fill {
            s = s.with_fill(color(fill)?);
        }
        if let Some(opacity) = self.fill_opacity {
            s = s.with_fill_opacity(opacity);
        }
        if let Some(stroke) = &self.stroke {
            s = s.with_stroke(StrokeStyle::solid(
                color(stroke)?,
                self.stroke_width.unwrap_or(1.0),
            ));
        }
        Ok(s)
    }
}

fn color(s: &str) -> Result<Color> {
    let parsed = parse_color(s).map_err(|e| anyhow!("invalid color `{s}`: {e}"))?;
    Ok(parsed.to_alpha_color::<Srgb>())
}
