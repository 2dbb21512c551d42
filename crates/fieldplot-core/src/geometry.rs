// File: crates/fieldplot-core/src/geometry.rs
// Summary: Polygon-tracing primitives and planar transforms for surface markings.

use std::f64::consts::PI;

/// A point in surface coordinates (feet, TV view: +x right, +y up).
pub type Pt = (f64, f64);

/// Sample count used when tracing a full circle. Arcs receive a
/// proportional share.
pub const ARC_SAMPLES: usize = 200;

/// Points along a circular arc. Angles are in radians, measured from the
/// +x axis; `start > end` traces the arc clockwise.
pub fn arc_points(center: Pt, r: f64, start: f64, end: f64, n: usize) -> Vec<Pt> {
    let n = n.max(2);
    let step = (end - start) / (n as f64 - 1.0);
    (0..n)
        .map(|i| {
            let theta = start + step * i as f64;
            (center.0 + r * theta.cos(), center.1 + r * theta.sin())
        })
        .collect()
}

/// A closed circle traced counterclockwise from the +x axis.
pub fn circle(center: Pt, r: f64, n: usize) -> Vec<Pt> {
    arc_points(center, r, 0.0, 2.0 * PI, n)
}

/// The closed bounding path of a rectangle. Inverted bounds are normalized.
pub fn rectangle(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Vec<Pt> {
    let (x_min, x_max) = if x_min <= x_max { (x_min, x_max) } else { (x_max, x_min) };
    let (y_min, y_max) = if y_min <= y_max { (y_min, y_max) } else { (y_max, y_min) };
    vec![
        (x_min, y_min),
        (x_max, y_min),
        (x_max, y_max),
        (x_min, y_max),
        (x_min, y_min),
    ]
}

/// The closed bounding path of an axis-aligned square about `center`.
pub fn square(side: f64, center: Pt) -> Vec<Pt> {
    let half = side / 2.0;
    rectangle(center.0 - half, center.0 + half, center.1 - half, center.1 + half)
}

/// The closed bounding path of a diamond (square rotated 45 degrees).
pub fn diamond(height: f64, width: f64, center: Pt) -> Vec<Pt> {
    let (cx, cy) = center;
    vec![
        (cx - width / 2.0, cy),
        (cx, cy - height / 2.0),
        (cx + width / 2.0, cy),
        (cx, cy + height / 2.0),
        (cx - width / 2.0, cy),
    ]
}

/// An annular band between `r_inner` and `r_outer` spanning `start..end`.
/// The outer edge is traced forward and the inner edge backward so the
/// resulting polygon fills as a band under the nonzero rule.
/// Contract: `r_inner < r_outer`.
pub fn ring_sector(center: Pt, r_outer: f64, r_inner: f64, start: f64, end: f64, n: usize) -> Vec<Pt> {
    debug_assert!(r_inner < r_outer, "ring_sector requires r_inner < r_outer");
    let mut pts = arc_points(center, r_outer, start, end, n);
    pts.extend(arc_points(center, r_inner, end, start, n));
    // Close back onto the first outer point.
    if let Some(&first) = pts.first() {
        pts.push(first);
    }
    pts
}

/// A full annulus (circle drawn with line thickness).
pub fn ring(center: Pt, r_outer: f64, r_inner: f64, n: usize) -> Vec<Pt> {
    ring_sector(center, r_outer, r_inner, 0.0, 2.0 * PI, n)
}

/// A rectangular band between an outer and an inner rectangle, both given
/// as (x_min, x_max, y_min, y_max). The inner edge is traced in reverse.
pub fn rect_band(outer: (f64, f64, f64, f64), inner: (f64, f64, f64, f64)) -> Vec<Pt> {
    let mut pts = rectangle(outer.0, outer.1, outer.2, outer.3);
    let mut hole = rectangle(inner.0, inner.1, inner.2, inner.3);
    hole.reverse();
    pts.extend(hole);
    pts.push(pts[0]);
    pts
}

/// Reflect points over the x and/or y axis.
pub fn reflect(pts: &[Pt], over_x: bool, over_y: bool) -> Vec<Pt> {
    pts.iter()
        .map(|&(x, y)| {
            let x = if over_y { -x } else { x };
            let y = if over_x { -y } else { y };
            (x, y)
        })
        .collect()
}

/// Rotate points counterclockwise about the origin by `theta` radians.
pub fn rotate(pts: &[Pt], theta: f64) -> Vec<Pt> {
    let (sin, cos) = theta.sin_cos();
    pts.iter()
        .map(|&(x, y)| (x * cos - y * sin, x * sin + y * cos))
        .collect()
}

/// Translate points by (dx, dy).
pub fn translate(pts: &[Pt], dx: f64, dy: f64) -> Vec<Pt> {
    pts.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
}

/// Scale points about the origin.
pub fn scale(pts: &[Pt], factor: f64) -> Vec<Pt> {
    pts.iter().map(|&(x, y)| (x * factor, y * factor)).collect()
}

/// Proportional sample count for an arc spanning `sweep` radians.
pub fn samples_for(sweep: f64) -> usize {
    let frac = (sweep.abs() / (2.0 * PI)).min(1.0);
    ((ARC_SAMPLES as f64 * frac).ceil() as usize).max(2)
}
