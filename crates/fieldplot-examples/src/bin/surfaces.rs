// File: crates/fieldplot-examples/src/bin/surfaces.rs
// Summary: Renders every league preset to a PNG under target/out/.

use anyhow::Result;
use fieldplot_core::{
    BaseballField, BasketballCourt, CourtDims, DiamondDims, FootballField, GridironDims,
    HockeyRink, RenderOptions, RinkDims,
};

fn main() -> Result<()> {
    env_logger::init();

    let opts = RenderOptions::default();
    let out_dir = std::path::PathBuf::from("target/out");

    let figures = [
        ("nba_court.png", BasketballCourt::new(CourtDims::nba()).draw()),
        ("wnba_court.png", BasketballCourt::new(CourtDims::wnba()).draw()),
        ("ncaa_court.png", BasketballCourt::new(CourtDims::ncaa()).draw()),
        ("nhl_rink.png", HockeyRink::new(RinkDims::nhl()).draw()),
        ("ncaa_field.png", FootballField::new(GridironDims::ncaa()).draw()),
        ("mlb_field.png", BaseballField::new(DiamondDims::mlb()).draw()),
    ];

    for (name, figure) in figures {
        let out = out_dir.join(name);
        figure.render_to_png(&opts, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}
