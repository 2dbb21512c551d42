// File: crates/fieldplot-core/src/color.rs
// Summary: Hex color parsing and the per-surface feature color table.

use skia_safe as skia;
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation failures raised while building a surface's color table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("unrecognized color key '{0}'")]
    UnknownKey(String),
    #[error("malformed color value '{value}' for key '{key}': expected #rrggbb or #rrggbbaa")]
    BadValue { key: String, value: String },
}

/// Parse a `#rrggbb` or `#rrggbbaa` hex string into a Skia color.
pub fn parse_hex(s: &str) -> Option<skia::Color> {
    let hex = s.strip_prefix('#')?;
    if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let r = byte(0)?;
    let g = byte(2)?;
    let b = byte(4)?;
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Some(skia::Color::from_argb(a, r, g, b))
}

/// Mapping from feature name to fill color for one surface.
///
/// Built from the surface's default table plus user overrides. Overrides
/// naming an unrecognized key, or carrying a malformed hex value, fail the
/// construction; lookups afterwards are infallible.
#[derive(Clone, Debug)]
pub struct ColorTable {
    colors: BTreeMap<&'static str, skia::Color>,
}

impl ColorTable {
    /// Build a table from defaults only.
    pub fn standard(defaults: &[(&'static str, &str)]) -> Self {
        // Default tables are library constants; a bad entry is a bug here,
        // not user error.
        let colors = defaults
            .iter()
            .map(|&(k, v)| (k, parse_hex(v).unwrap_or(skia::Color::BLACK)))
            .collect();
        Self { colors }
    }

    /// Build a table from defaults plus user overrides, validating every
    /// override key and value.
    pub fn with_overrides(
        defaults: &[(&'static str, &str)],
        overrides: &[(&str, &str)],
    ) -> Result<Self, ColorError> {
        let mut table = Self::standard(defaults);
        for &(key, value) in overrides {
            let canonical = defaults
                .iter()
                .map(|&(k, _)| k)
                .find(|&k| k == key)
                .ok_or_else(|| ColorError::UnknownKey(key.to_string()))?;
            let color = parse_hex(value).ok_or_else(|| ColorError::BadValue {
                key: key.to_string(),
                value: value.to_string(),
            })?;
            table.colors.insert(canonical, color);
        }
        Ok(table)
    }

    /// Color for a feature name. Unknown names resolve to black; surface
    /// builders only pass keys from their own default table.
    pub fn get(&self, key: &str) -> skia::Color {
        self.colors.get(key).copied().unwrap_or(skia::Color::BLACK)
    }

    /// All recognized keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.colors.keys().copied()
    }
}
