// File: crates/fieldplot-core/tests/smoke.rs
// Purpose: End-to-end render smoke test for every league preset.

use fieldplot_core::{
    BaseballField, BasketballCourt, CourtDims, DiamondDims, FootballField, GridironDims,
    HockeyRink, RenderOptions, RinkDims,
};

#[test]
fn render_all_leagues_png() {
    let opts = RenderOptions::default();
    let out_dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&out_dir).unwrap();

    let figures = [
        ("nba", BasketballCourt::new(CourtDims::nba()).draw()),
        ("wnba", BasketballCourt::new(CourtDims::wnba()).draw()),
        ("ncaa_bb", BasketballCourt::new(CourtDims::ncaa()).draw()),
        ("nhl", HockeyRink::new(RinkDims::nhl()).draw()),
        ("ncaa_fb", FootballField::new(GridironDims::ncaa()).draw()),
        ("mlb", BaseballField::new(DiamondDims::mlb()).draw()),
    ];

    for (league, figure) in figures {
        assert!(!figure.is_empty(), "{league}: figure has no features");

        let out = out_dir.join(format!("smoke_{league}.png"));
        figure
            .render_to_png(&opts, &out)
            .unwrap_or_else(|e| panic!("{league}: render failed: {e}"));
        let meta = std::fs::metadata(&out).expect("output exists");
        assert!(meta.len() > 0, "{league}: png should be non-empty");

        let bytes = figure.render_to_png_bytes(&opts).expect("render bytes");
        assert!(
            bytes.starts_with(&[137, 80, 78, 71]),
            "{league}: should be PNG header"
        );
    }
}

#[test]
fn figure_limits_cover_the_surface() {
    // The boards extend past the ice, so the limits must too.
    let rink = HockeyRink::new(RinkDims::nhl());
    let figure = rink.draw();
    let (x0, x1) = figure.x_lim();
    let (y0, y1) = figure.y_lim();
    assert!(x0 <= -100.0 && x1 >= 100.0);
    assert!(y0 <= -42.5 && y1 >= 42.5);
}
