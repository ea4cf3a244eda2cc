// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order for radar chart geometry.
//!
//! Polygons and grid shapes carry a `z_index` so renderers can paint them in a consistent
//! order. Sort by `(z_index, series index)` for a deterministic tie-break.

/// Grid rings and spokes, drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series polygons.
pub const SERIES_FILL: i32 = 0;
/// Series vertex dots, drawn above fills.
pub const SERIES_POINTS: i32 = 20;

/// Chart labels: angle axis labels, radius axis tick labels and vertex value labels.
pub const AXIS_LABELS: i32 = 40;
