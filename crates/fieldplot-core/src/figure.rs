// File: crates/fieldplot-core/src/figure.rs
// Summary: Figure model and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use log::debug;
use skia_safe as skia;

use crate::feature::{Feature, Label};
use crate::text::TextShaper;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Text markings can be disabled for deterministic pixel comparisons.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
        }
    }
}

/// The computed diagram of one surface: features, labels, data limits, and
/// the background color. Returned by every facade's `draw()`; immutable
/// once built, rendering never mutates it.
pub struct Figure {
    pub features: Vec<Feature>,
    pub labels: Vec<Label>,
    pub background: skia::Color,
    x_lim: Option<(f64, f64)>,
    y_lim: Option<(f64, f64)>,
}

impl Figure {
    pub fn new(background: skia::Color) -> Self {
        Self {
            features: Vec::new(),
            labels: Vec::new(),
            background,
            x_lim: None,
            y_lim: None,
        }
    }

    /// Add a feature, folding its bounds into the figure's data limits.
    pub fn add_feature(&mut self, feature: Feature) {
        if feature.visible {
            if let Some((x0, x1, y0, y1)) = feature.bounds() {
                self.x_lim = Some(match self.x_lim {
                    None => (x0, x1),
                    Some((lo, hi)) => (lo.min(x0), hi.max(x1)),
                });
                self.y_lim = Some(match self.y_lim {
                    None => (y0, y1),
                    Some((lo, hi)) => (lo.min(y0), hi.max(y1)),
                });
            }
        }
        self.features.push(feature);
    }

    /// Add a feature together with its mirror over the y axis.
    pub fn add_mirrored(&mut self, feature: Feature) {
        self.add_feature(feature.mirrored());
        self.add_feature(feature);
    }

    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Data limits in the x direction (surface units).
    pub fn x_lim(&self) -> (f64, f64) {
        self.x_lim.unwrap_or((0.0, 1.0))
    }

    /// Data limits in the y direction (surface units).
    pub fn y_lim(&self) -> (f64, f64) {
        self.y_lim.unwrap_or((0.0, 1.0))
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// All features with the given name (symmetric features appear twice).
    pub fn features_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Feature> {
        self.features.iter().filter(move |f| f.name == name)
    }

    /// Render to raw RGBA8 pixels. Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back pixels");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    // ---- painting ----------------------------------------------------------

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(self.background);

        let plot_left = opts.insets.left as f64;
        let plot_right = (opts.width - opts.insets.right as i32) as f64;
        let plot_top = opts.insets.top as f64;
        let plot_bottom = (opts.height - opts.insets.bottom as i32) as f64;
        let plot_w = (plot_right - plot_left).max(1.0);
        let plot_h = (plot_bottom - plot_top).max(1.0);

        let (x0, x1) = self.x_lim();
        let (y0, y1) = self.y_lim();
        let span_x = (x1 - x0).max(1e-9);
        let span_y = (y1 - y0).max(1e-9);

        // Aspect-ratio lock: one uniform scale, diagram centered in the
        // plot rect. Surfaces must not distort.
        let s = (plot_w / span_x).min(plot_h / span_y);
        let cx_px = (plot_left + plot_right) / 2.0;
        let cy_px = (plot_top + plot_bottom) / 2.0;
        let wcx = (x0 + x1) / 2.0;
        let wcy = (y0 + y1) / 2.0;
        let sx = |x: f64| -> f32 { (cx_px + (x - wcx) * s) as f32 };
        let sy = |y: f64| -> f32 { (cy_px - (y - wcy) * s) as f32 };

        debug!(
            "painting figure: {} features, {} labels, scale {:.3} px/unit",
            self.features.len(),
            self.labels.len(),
            s
        );

        // Stable z-order: features with equal zorder keep insertion order.
        let mut order: Vec<usize> = (0..self.features.len()).collect();
        order.sort_by_key(|&i| self.features[i].zorder);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);

        for &i in &order {
            let feature = &self.features[i];
            if !feature.visible {
                continue;
            }
            let mut path = skia::Path::new();
            for polygon in &feature.polygons {
                let mut iter = polygon.iter();
                let Some(&(px, py)) = iter.next() else { continue };
                path.move_to((sx(px), sy(py)));
                for &(x, y) in iter {
                    path.line_to((sx(x), sy(y)));
                }
                path.close();
            }
            paint.set_color(feature.color);
            canvas.draw_path(&path, &paint);
        }

        if opts.draw_labels && !self.labels.is_empty() {
            let shaper = TextShaper::new();
            for label in &self.labels {
                let px_size = (label.size * s) as f32;
                shaper.draw_centered(
                    canvas,
                    &label.text,
                    sx(label.x),
                    sy(label.y),
                    px_size,
                    label.color,
                    label.flipped,
                );
            }
        }
    }
}
