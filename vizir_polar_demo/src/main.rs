// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar chart demo for `vizir_polar`.
//!
//! Lays out a chart described by a TOML file (or the built-in two-series example) and writes it
//! as SVG. Set `RUST_LOG=vizir_polar=debug` to trace layout passes.

mod config;
mod svg;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vizir_polar::RadarChart;

use crate::config::{ChartFile, DEFAULT_CHART};

#[derive(Parser, Debug)]
#[command(name = "vizir_polar_demo")]
#[command(author, version, about = "Lay out a radar chart and write it as SVG")]
struct Args {
    /// Chart file (TOML). Uses the built-in example when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output path; `-` writes to stdout.
    #[arg(short, long, default_value = "radar.svg")]
    output: PathBuf,

    /// Print the built-in chart file and exit.
    #[arg(long)]
    list_default: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vizir_polar_demo=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.list_default {
        print!("{DEFAULT_CHART}");
        return Ok(());
    }

    let file = match &args.config {
        Some(path) => ChartFile::load(path)?,
        None => ChartFile::parse(DEFAULT_CHART).context("parsing built-in chart")?,
    };
    let series = file.series()?;
    let chart = RadarChart::new(file.chart_spec()?);
    let layout = chart
        .layout(&file.rows, &series)
        .context("laying out radar chart")?;
    tracing::info!(
        rows = file.rows.len(),
        series = series.len(),
        clip = %layout.context.clip_id,
        "laid out radar chart"
    );

    let svg = svg::render(&layout);
    if args.output.as_os_str() == "-" {
        print!("{svg}");
    } else {
        std::fs::write(&args.output, svg)
            .with_context(|| format!("writing {}", args.output.display()))?;
        tracing::info!(path = %args.output.display(), "wrote SVG");
    }
    Ok(())
}
