// File: crates/fieldplot-core/tests/geometry.rs
// Purpose: Validate the polygon-tracing primitives and planar transforms.

use std::f64::consts::PI;

use fieldplot_core::geometry::{
    arc_points, circle, diamond, rectangle, reflect, ring_sector, rotate, scale, square,
    translate,
};

fn assert_pts_eq(got: &[(f64, f64)], want: &[(f64, f64)]) {
    assert_eq!(got.len(), want.len(), "point counts differ");
    for (g, w) in got.iter().zip(want) {
        assert!(
            (g.0 - w.0).abs() < 1e-9 && (g.1 - w.1).abs() < 1e-9,
            "point {:?} != {:?}",
            g,
            w
        );
    }
}

#[test]
fn unit_square() {
    let want = vec![(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5), (-0.5, -0.5)];
    assert_pts_eq(&square(1.0, (0.0, 0.0)), &want);
}

#[test]
fn circle_points_are_equidistant() {
    for (x, y) in circle((0.0, 0.0), 1.0, 200) {
        let dist = (x * x + y * y).sqrt();
        assert!((dist - 1.0).abs() < 1e-3, "point off the unit circle: {dist}");
    }
}

#[test]
fn arc_with_too_few_samples_yields_the_endpoints() {
    for n in [0, 1] {
        let pts = arc_points((0.0, 0.0), 1.0, 0.0, PI / 2.0, n);
        assert_pts_eq(&pts, &[(1.0, 0.0), (0.0, 1.0)]);
    }
}

#[test]
fn unit_rectangle_matches_unit_square() {
    // All squares are rectangles.
    assert_pts_eq(
        &rectangle(-0.5, 0.5, -0.5, 0.5),
        &square(1.0, (0.0, 0.0)),
    );
}

#[test]
fn rectangle_normalizes_inverted_bounds() {
    assert_pts_eq(
        &rectangle(0.5, -0.5, 0.5, -0.5),
        &rectangle(-0.5, 0.5, -0.5, 0.5),
    );
}

#[test]
fn unit_diamond() {
    let want = vec![(-0.5, 0.0), (0.0, -0.5), (0.5, 0.0), (0.0, 0.5), (-0.5, 0.0)];
    assert_pts_eq(&diamond(1.0, 1.0, (0.0, 0.0)), &want);
}

#[test]
fn reflect_over_axes() {
    let pts = square(1.0, (1.0, 1.0));
    let over_x: Vec<_> = pts.iter().map(|&(x, y)| (x, -y)).collect();
    let over_y: Vec<_> = pts.iter().map(|&(x, y)| (-x, y)).collect();
    let over_both: Vec<_> = pts.iter().map(|&(x, y)| (-x, -y)).collect();
    assert_pts_eq(&reflect(&pts, true, false), &over_x);
    assert_pts_eq(&reflect(&pts, false, true), &over_y);
    assert_pts_eq(&reflect(&pts, true, true), &over_both);
}

#[test]
fn rotate_quarter_turns() {
    let pt = [(0.0, 1.0)];
    assert_pts_eq(&rotate(&pt, PI / 2.0), &[(-1.0, 0.0)]);
    assert_pts_eq(&rotate(&pt, -PI / 2.0), &[(1.0, 0.0)]);
}

#[test]
fn translate_moves_points() {
    let pt = [(0.0, 0.0)];
    assert_pts_eq(&translate(&pt, 1.0, 0.0), &[(1.0, 0.0)]);
    assert_pts_eq(&translate(&pt, 0.0, 1.0), &[(0.0, 1.0)]);
    assert_pts_eq(&translate(&pt, 1.0, 1.0), &[(1.0, 1.0)]);
}

#[test]
fn scale_doubles_unit_square() {
    let want = vec![(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)];
    assert_pts_eq(&scale(&square(1.0, (0.0, 0.0)), 2.0), &want);
}

#[test]
fn ring_sector_stays_between_radii() {
    let band = ring_sector((0.0, 0.0), 2.0, 1.0, 0.0, PI, 50);
    for &(x, y) in &band {
        let dist = (x * x + y * y).sqrt();
        assert!(
            dist > 1.0 - 1e-9 && dist < 2.0 + 1e-9,
            "band point outside radii: {dist}"
        );
    }
    // Closed polygon.
    assert_eq!(band.first(), band.last());
}
