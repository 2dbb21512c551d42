// File: crates/fieldplot-examples/src/bin/custom_colors.rs
// Summary: Renders an NBA court with overridden colors to PNG.

use anyhow::Result;
use fieldplot_core::{BasketballCourt, CourtDims, RenderOptions};

fn main() -> Result<()> {
    env_logger::init();

    // A dark hardwood scheme. Unrecognized keys or malformed hex values
    // here would fail construction with a ColorError.
    let court = BasketballCourt::with_colors(
        CourtDims::nba(),
        &[
            ("court_background", "#3b2a1d"),
            ("center_circle_fill", "#2a1e15"),
            ("paint", "#2a1e15"),
            ("three_point_line", "#e8e8e8"),
        ],
    )?;

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/custom_colors.png");
    court.draw().render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}
