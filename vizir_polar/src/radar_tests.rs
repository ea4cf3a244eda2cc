// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::Point;

use crate::{
    AngleAxisSpec, ClipIdAllocator, DataRow, GridRings, GridShape, Margin, PolarGridSpec,
    PolarLength, RadarChart, RadarChartSpec, RadarLayout, RadarPolygon, RadiusAxisSpec,
    SeriesDescriptor, Viewport, resolve_center,
};

/// Nine subjects scored by two students.
fn nine_rows() -> Vec<DataRow> {
    [
        ("Math", 120, 110),
        ("Chinese", 98, 130),
        ("English", 86, 130),
        ("Geography", 99, 100),
        ("Physics", 85, 90),
        ("History", 65, 85),
        ("Biology", 72, 96),
        ("Chemistry", 104, 80),
        ("Art", 60, 140),
    ]
    .into_iter()
    .map(|(subject, a, b)| {
        DataRow::new()
            .with("subject", subject)
            .with("A", a)
            .with("B", b)
    })
    .collect()
}

fn two_series() -> Vec<SeriesDescriptor> {
    alloc::vec![
        SeriesDescriptor::new("A").with_name("Mike"),
        SeriesDescriptor::new("B").with_name("Lily"),
    ]
}

fn fixture_spec() -> RadarChartSpec {
    RadarChartSpec::new(600.0, 500.0)
        .with_center(300.0, 250.0)
        .with_outer_radius(150.0)
        .with_angle_axis(AngleAxisSpec::new("subject"))
        .with_radius_axis(RadiusAxisSpec::new().with_domain(0.0, 150.0))
}

fn layout(spec: RadarChartSpec) -> RadarLayout {
    RadarChart::with_allocator(spec, &ClipIdAllocator::new())
        .layout(&nine_rows(), &two_series())
        .unwrap()
}

fn distance(a: Point, b: Point) -> f64 {
    (a - b).hypot()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn axis_ticks_match_rows_and_are_evenly_spaced() {
    let out = layout(fixture_spec());
    let ticks = &out.context.axis_ticks;
    assert_eq!(ticks.len(), 9);
    assert_eq!(ticks[0].angle, 90.0);
    assert_eq!(ticks[0].label, "Math");
    assert_eq!(ticks[8].label, "Art");
    for pair in ticks.windows(2) {
        assert_close(pair[1].angle - pair[0].angle, -40.0);
    }
}

#[test]
fn two_series_share_angles_but_not_radii() {
    let out = layout(fixture_spec());
    let [a, b] = &out.polygons[..] else {
        panic!("expected two polygons");
    };
    assert_eq!(a.name, "Mike");
    assert_eq!(b.name, "Lily");
    assert_eq!(a.points.len(), 9);
    assert_eq!(b.points.len(), 9);

    let center = Point::new(300.0, 250.0);
    assert_eq!(out.context.center, center);
    for (pa, pb) in a.points.iter().zip(&b.points) {
        assert_eq!(pa.angle, pb.angle);
        assert_close(distance(pa.point, center), pa.radius);
        assert_close(distance(pb.point, center), pb.radius);
    }

    // Domain 0..150 onto 0..150 px: radius equals value.
    assert_close(a.points[0].radius, 120.0);
    assert_close(b.points[0].radius, 110.0);
    assert_close(b.points[8].radius, 140.0);
    // Math sits straight above the center.
    assert_close(a.points[0].point.x, 300.0);
    assert_close(a.points[0].point.y, 130.0);
}

#[test]
fn polygons_have_one_distinct_angle_per_row_and_close() {
    let out = layout(fixture_spec());
    for poly in &out.polygons {
        let mut angles: Vec<f64> = poly.points.iter().map(|p| p.angle).collect();
        angles.sort_by(f64::total_cmp);
        angles.dedup();
        assert_eq!(angles.len(), 9);

        let d = poly.svg_path();
        assert!(d.starts_with("M "), "{d}");
        assert!(d.ends_with(" Z"), "{d}");
        assert_eq!(d.matches(" L ").count(), 8);
    }
}

#[test]
fn center_percentages_resolve_against_width_and_height() {
    let vp = Viewport::resolve(600.0, 500.0, Margin::zero()).unwrap();
    let c = resolve_center(
        Some("10%".parse().unwrap()),
        Some("90%".parse().unwrap()),
        &vp,
    )
    .unwrap();
    assert_eq!(c, Point::new(60.0, 450.0));

    let chart = RadarChart::with_allocator(
        RadarChartSpec::new(600.0, 500.0)
            .with_margin(Margin::zero())
            .with_center(PolarLength::Percent(10.0), PolarLength::Percent(90.0)),
        &ClipIdAllocator::new(),
    );
    let out = chart.layout(&nine_rows(), &two_series()).unwrap();
    assert_eq!(out.context.center, Point::new(60.0, 450.0));
}

#[test]
fn changing_radii_or_center_between_passes_moves_the_geometry() {
    let mut chart = RadarChart::with_allocator(fixture_spec(), &ClipIdAllocator::new());
    let rows = nine_rows();
    let series = two_series();

    let first = chart.layout(&rows, &series).unwrap();
    assert_eq!(first.context.radii.range(), (0.0, 150.0));

    chart.set_spec(
        fixture_spec()
            .with_inner_radius(20.0)
            .with_outer_radius(100.0),
    );
    let second = chart.layout(&rows, &series).unwrap();
    assert_eq!(second.context.radii.range(), (20.0, 100.0));
    assert_ne!(first.polygons[0].points, second.polygons[0].points);
    // Math (120 of 150) now sits at 20 + 0.8 * 80.
    assert_close(second.polygons[0].points[0].radius, 84.0);

    chart.set_spec(fixture_spec().with_center(100.0, 100.0));
    let third = chart.layout(&rows, &series).unwrap();
    assert_eq!(third.context.center, Point::new(100.0, 100.0));
    for (p1, p3) in first.polygons[1].points.iter().zip(&third.polygons[1].points) {
        assert_close(p3.point.x - p1.point.x, -200.0);
        assert_close(p3.point.y - p1.point.y, -150.0);
    }

    // Same inputs again give the same geometry.
    chart.set_spec(fixture_spec());
    assert_eq!(chart.layout(&rows, &series).unwrap(), first);
}

#[test]
fn changing_data_between_passes_moves_the_geometry() {
    let chart = RadarChart::with_allocator(fixture_spec(), &ClipIdAllocator::new());
    let series = two_series();
    let mut rows = nine_rows();
    let before = chart.layout(&rows, &series).unwrap();
    rows[0].insert("A", 30);
    let after = chart.layout(&rows, &series).unwrap();
    assert_close(before.polygons[0].points[0].radius, 120.0);
    assert_close(after.polygons[0].points[0].radius, 30.0);
}

#[test]
fn zero_rows_yield_empty_geometry_without_error() {
    let chart = RadarChart::with_allocator(
        fixture_spec().with_grid(PolarGridSpec::new()),
        &ClipIdAllocator::new(),
    );
    let out = chart.layout(&[], &two_series()).unwrap();
    assert!(out.context.axis_ticks.is_empty());
    assert!(out.context.angles.is_empty());
    assert_eq!(out.polygons.len(), 2);
    assert!(out.polygons.iter().all(RadarPolygon::is_empty));
    let grid = out.grid.unwrap();
    assert!(grid.spokes.is_empty());

    let no_series = chart.layout(&nine_rows(), &[]).unwrap();
    assert!(no_series.polygons.is_empty());
    assert_eq!(no_series.context.axis_ticks.len(), 9);
}

#[test]
fn grid_has_a_spoke_per_axis_and_closed_rings() {
    let out = layout(fixture_spec().with_grid(PolarGridSpec::new().with_rings(GridRings::Count(3))));
    let grid = out.grid.unwrap();
    assert_eq!(grid.spokes.len(), 9);
    assert_eq!(grid.rings.len(), 3);
    for ring in &grid.rings {
        let GridShape::Polygon(points) = &ring.shape else {
            panic!("expected polygon ring");
        };
        assert_eq!(points.len(), 9);
        assert!(ring.svg_path().ends_with(" Z"));
    }
    assert_close(grid.rings[2].radius, 150.0);
    for spoke in &grid.spokes {
        assert_close(distance(spoke.end, spoke.start), 150.0);
    }
}

#[test]
fn grid_rings_can_follow_radius_ticks() {
    let out = layout(
        fixture_spec()
            .with_radius_axis(RadiusAxisSpec::new().with_domain(0.0, 150.0).with_tick_count(4))
            .with_grid(PolarGridSpec::new().with_rings(GridRings::RadiusTicks)),
    );
    let grid = out.grid.unwrap();
    assert_eq!(grid.rings.len(), 4);
    for (ring, expected) in grid.rings.iter().zip([0.0, 50.0, 100.0, 150.0]) {
        assert_close(ring.radius, expected);
    }
    let values: Vec<f64> = out.context.radius_ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, [0.0, 50.0, 100.0, 150.0]);
}

#[test]
fn inferred_domain_spans_all_series() {
    let out = layout(fixture_spec().with_radius_axis(RadiusAxisSpec::new()));
    // Values range 60..=140 across both series.
    let a = &out.polygons[0];
    let b = &out.polygons[1];
    assert_close(a.points[8].radius, 0.0);
    assert_close(b.points[8].radius, 150.0);
}

#[test]
fn click_handler_receives_the_series_polygon() {
    let clicked = Rc::new(Cell::new(usize::MAX));
    let seen = clicked.clone();
    let series = alloc::vec![
        SeriesDescriptor::new("A"),
        SeriesDescriptor::new("B").with_on_click(move |p| seen.set(p.series_index)),
    ];
    let chart = RadarChart::with_allocator(fixture_spec(), &ClipIdAllocator::new());
    let out = chart.layout(&nine_rows(), &series).unwrap();
    assert!(!series[0].click(&out.polygons[0]));
    assert!(series[1].click(&out.polygons[1]));
    assert_eq!(clicked.get(), 1);
}
