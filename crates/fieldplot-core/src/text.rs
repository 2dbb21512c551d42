// File: crates/fieldplot-core/src/text.rs
// Summary: Text shaper for surface markings using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Bold condensed faces resemble painted field numerals.
        ts.set_font_families(&["Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts.set_font_style(skia::FontStyle::bold());
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` centered on (cx, cy) in pixel space. `flipped` rotates
    /// the glyphs 180 degrees about the anchor for markings read from the
    /// far sideline.
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        cx: f32,
        cy: f32,
        size: f32,
        color: skia::Color,
        flipped: bool,
    ) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        if flipped {
            canvas.save();
            canvas.rotate(180.0, Some(skia::Point::new(cx, cy)));
        }
        p.paint(canvas, (cx - w / 2.0, cy - h / 2.0));
        if flipped {
            canvas.restore();
        }
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
