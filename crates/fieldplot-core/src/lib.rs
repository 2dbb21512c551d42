// File: crates/fieldplot-core/src/lib.rs
// Summary: Core library entry point; exports public API for surface construction and rendering.

pub mod types;
pub mod geometry;
pub mod color;
pub mod feature;
pub mod figure;
pub mod text;
pub mod surfaces;

pub use color::{ColorError, ColorTable};
pub use feature::{Feature, Label};
pub use figure::{Figure, RenderOptions};
pub use surfaces::baseball::{BaseballField, DiamondDims};
pub use surfaces::basketball::{BasketballCourt, CourtDims};
pub use surfaces::football::{FootballField, GridironDims};
pub use surfaces::hockey::{HockeyRink, RinkDims};
pub use text::TextShaper;
pub use types::Insets;
