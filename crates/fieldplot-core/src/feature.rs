// File: crates/fieldplot-core/src/feature.rs
// Summary: Computed drawables: named filled polygons and text labels.

use crate::geometry::{reflect, Pt};
use skia_safe as skia;

/// A drawable element of a surface: one or more closed polygons sharing a
/// feature name, fill color, and z-order. Polygons are in surface
/// coordinates; nothing here is pixel-aware.
#[derive(Clone, Debug)]
pub struct Feature {
    pub name: &'static str,
    pub polygons: Vec<Vec<Pt>>,
    pub color: skia::Color,
    pub zorder: i32,
    pub visible: bool,
}

impl Feature {
    pub fn new(name: &'static str, polygon: Vec<Pt>, color: skia::Color, zorder: i32) -> Self {
        Self { name, polygons: vec![polygon], color, zorder, visible: true }
    }

    pub fn with_polygons(
        name: &'static str,
        polygons: Vec<Vec<Pt>>,
        color: skia::Color,
        zorder: i32,
    ) -> Self {
        Self { name, polygons, color, zorder, visible: true }
    }

    /// Copy of this feature mirrored over the y axis (x negated). Used for
    /// the far half of symmetric surfaces.
    pub fn mirrored(&self) -> Self {
        let polygons = self.polygons.iter().map(|p| reflect(p, false, true)).collect();
        Self { polygons, ..self.clone() }
    }

    /// Copy of this feature mirrored over the x axis (y negated).
    pub fn mirrored_over_x(&self) -> Self {
        let polygons = self.polygons.iter().map(|p| reflect(p, true, false)).collect();
        Self { polygons, ..self.clone() }
    }

    /// Bounding box over all polygons, or None when the feature is empty.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for &(x, y) in self.polygons.iter().flatten() {
            bounds = Some(match bounds {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }
        bounds
    }
}

/// A text marking (e.g. football yardage numbers). `size` is the glyph
/// height in surface units; `flipped` rotates the text 180 degrees for
/// markings read from the far sideline.
#[derive(Clone, Debug)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: skia::Color,
    pub flipped: bool,
}

impl Label {
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        size: f64,
        color: skia::Color,
        flipped: bool,
    ) -> Self {
        Self { text: text.into(), x, y, size, color, flipped }
    }
}
