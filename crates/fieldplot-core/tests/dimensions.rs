// File: crates/fieldplot-core/tests/dimensions.rs
// Purpose: Spot-check rule-book constants in the dimension registries.

use fieldplot_core::{CourtDims, DiamondDims, GridironDims, RinkDims};

const EPS: f64 = 1e-9;

#[test]
fn nba_court_constants() {
    let d = CourtDims::nba();
    assert_eq!(d.court_length, 94.0);
    assert_eq!(d.court_width, 50.0);
    assert!((d.three_point_arc_radius - 23.75).abs() < EPS);
    assert_eq!(d.free_throw_lane_width, 16.0);
    assert!((d.line_thickness - 2.0 / 12.0).abs() < EPS);
    assert!((d.basket_center_x() - 41.75).abs() < EPS);
}

#[test]
fn wnba_arc_differs_from_nba() {
    let d = CourtDims::wnba();
    assert!((d.three_point_arc_radius - (22.0 + 1.75 / 12.0)).abs() < EPS);
    assert_eq!(d.free_throw_lane_width, CourtDims::nba().free_throw_lane_width);
}

#[test]
fn ncaa_court_lane_is_narrower() {
    let d = CourtDims::ncaa();
    assert_eq!(d.free_throw_lane_width, 12.0);
    assert!((d.three_point_arc_radius - (22.0 + 1.75 / 12.0)).abs() < EPS);
}

#[test]
fn nhl_rink_constants() {
    let d = RinkDims::nhl();
    assert_eq!(d.rink_length, 200.0);
    assert_eq!(d.rink_width, 85.0);
    assert_eq!(d.corner_radius, 28.0);
    assert!((d.goal_line_x() - 89.0).abs() < EPS);
    assert!((d.ozone_circle_x() - 69.0).abs() < EPS);
    assert!((d.nzone_spot_x() - 20.0).abs() < EPS);
    assert!((d.hashmark_ext_spacing - 71.0 / 12.0).abs() < EPS);
    assert!((d.faceoff_spot_gap_width - 3.0 / 12.0).abs() < EPS);
}

#[test]
fn ncaa_field_constants() {
    let d = GridironDims::ncaa();
    assert_eq!(d.field_length, 360.0);
    assert_eq!(d.field_width, 160.0);
    assert_eq!(d.yard_line_x(-50), -150.0);
    assert_eq!(d.yard_line_x(0), 0.0);
    assert!((d.goal_line_thickness - 8.0 / 12.0).abs() < EPS);
}

#[test]
fn mlb_diamond_constants() {
    let d = DiamondDims::mlb();
    assert!((d.home_to_2b_dist - 127.28125).abs() < EPS);
    assert_eq!(d.baseline_length, 90.0);

    // First base lies 90' up the line at 45 degrees.
    let (x, y) = d.first_base_center();
    assert!((x - 90.0 / 2.0_f64.sqrt()).abs() < 1e-6);
    assert!((y - d.home_to_2b_dist / 2.0).abs() < EPS);
}
