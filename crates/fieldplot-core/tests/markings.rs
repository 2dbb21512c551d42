// File: crates/fieldplot-core/tests/markings.rs
// Purpose: Pin marking geometry the builders derive from the registries.

use fieldplot_core::{FootballField, GridironDims, HockeyRink, RinkDims};

const EPS: f64 = 1e-9;

#[test]
fn endzone_hash_marks_keep_the_exterior_spacing() {
    let dims = RinkDims::nhl();
    let figure = HockeyRink::new(dims.clone()).draw();

    // 71" outer edge to outer edge, each mark one line-thickness wide.
    let ext = dims.hashmark_ext_spacing / 2.0;
    let int = ext - dims.minor_line_thickness;

    let mut marks = 0;
    for feature in figure.features_named("ozone_dzone_faceoff_circle") {
        for poly in feature.polygons.iter().filter(|p| p.len() == 5) {
            marks += 1;
            for &(x, _) in poly.iter() {
                let off = (x.abs() - dims.ozone_circle_x()).abs();
                assert!(
                    (off - int).abs() < EPS || (off - ext).abs() < EPS,
                    "hash mark edge at offset {off}"
                );
            }
        }
    }
    assert_eq!(marks, 16, "four hash marks per end-zone circle");
}

#[test]
fn faceoff_spot_stripe_leaves_the_ring_gap() {
    let dims = RinkDims::nhl();
    let figure = HockeyRink::new(dims.clone()).draw();

    // The stripe's chords sit one gap-width inside the ring interior.
    let ring_inner = dims.noncenter_faceoff_spot_radius - dims.minor_line_thickness;
    let half_stripe = ring_inner - dims.faceoff_spot_gap_width;

    let mut stripes = 0;
    for feature in figure.features_named("faceoff_spot_stripe") {
        for poly in &feature.polygons {
            stripes += 1;
            let min = poly.iter().map(|&(x, _)| x).fold(f64::INFINITY, f64::min);
            let max = poly.iter().map(|&(x, _)| x).fold(f64::NEG_INFINITY, f64::max);
            assert!(
                ((max - min) - 2.0 * half_stripe).abs() < EPS,
                "stripe width {}",
                max - min
            );
        }
    }
    assert_eq!(stripes, 8, "one stripe per non-center spot");
}

#[test]
fn yardage_numbers_hang_down_from_27_feet_in() {
    let dims = GridironDims::ncaa();
    let figure = FootballField::new(dims.clone()).draw();

    // Top edge 27' in from the sideline interior, glyphs extending toward
    // the sideline.
    let top_edge = -dims.half_width() + dims.number_dist;
    let center = top_edge - dims.number_height / 2.0;

    let lower: Vec<_> = figure.labels.iter().filter(|l| !l.flipped).collect();
    assert!(!lower.is_empty(), "near-side numbers expected");
    for label in lower {
        assert!(
            (label.y - center).abs() < EPS,
            "label {} centered at y {}",
            label.text,
            label.y
        );
    }
}
