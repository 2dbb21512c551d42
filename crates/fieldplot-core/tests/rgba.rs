// File: crates/fieldplot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and the background pixel.

use fieldplot_core::{BasketballCourt, CourtDims, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let court = BasketballCourt::new(CourtDims::nba());
    let figure = court.draw();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = figure.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel lies in the inset margin, so it carries the court
    // background (#d2ab6f) at full alpha.
    assert_eq!(&px[0..4], &[0xd2, 0xab, 0x6f, 255]);
}
