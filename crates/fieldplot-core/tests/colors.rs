// File: crates/fieldplot-core/tests/colors.rs
// Purpose: Color table validation and per-feature override semantics.

use fieldplot_core::{
    BaseballField, BasketballCourt, ColorError, CourtDims, DiamondDims, FootballField,
    GridironDims, HockeyRink, RinkDims,
};

#[test]
fn unknown_key_errors_at_construction() {
    let err = BasketballCourt::with_colors(CourtDims::nba(), &[("scoreboard", "#ff0000")])
        .err()
        .expect("unknown key must be rejected");
    assert_eq!(err, ColorError::UnknownKey("scoreboard".to_string()));
}

#[test]
fn malformed_value_errors_at_construction() {
    for bad in ["red", "#12345", "#gggggg", ""] {
        let result = HockeyRink::with_colors(RinkDims::nhl(), &[("center_line", bad)]);
        assert!(
            matches!(result.err(), Some(ColorError::BadValue { .. })),
            "value {bad:?} must be rejected"
        );
    }
}

#[test]
fn override_changes_only_that_feature() {
    let standard = BasketballCourt::new(CourtDims::nba()).draw();
    let custom = BasketballCourt::with_colors(CourtDims::nba(), &[("three_point_line", "#ff00ff")])
        .expect("valid override")
        .draw();

    assert_eq!(standard.features.len(), custom.features.len());
    for (a, b) in standard.features.iter().zip(&custom.features) {
        assert_eq!(a.name, b.name);
        if a.name == "three_point_line" {
            assert_ne!(a.color, b.color, "override must change the three-point line");
        } else {
            assert_eq!(a.color, b.color, "feature {} must keep its color", a.name);
        }
    }
}

#[test]
fn eight_digit_hex_is_accepted() {
    // Alpha-carrying values are valid for translucent fills.
    let field = FootballField::with_colors(GridironDims::ncaa(), &[("yard_markings", "#ffffff80")])
        .expect("rrggbbaa accepted");
    let figure = field.draw();
    assert!(figure.features_named("yard_markings").count() > 0);
}

#[test]
fn every_default_key_is_overridable() {
    for &(key, _) in BaseballField::DEFAULT_COLORS {
        BaseballField::with_colors(DiamondDims::mlb(), &[(key, "#123456")])
            .unwrap_or_else(|e| panic!("default key {key} rejected: {e}"));
    }
}
