// File: crates/fieldplot-core/src/surfaces/baseball.rs
// Summary: Baseball field dimension registry and figure builder (MLB default).

use std::f64::consts::FRAC_PI_4;

use log::debug;

use crate::color::{ColorError, ColorTable};
use crate::feature::Feature;
use crate::figure::Figure;
use crate::geometry::{diamond, Pt};

/// Rule-book dimensional constants for a baseball field, in feet.
///
/// The default is a regulation MLB diamond. The origin is the back tip of
/// home plate; +y runs out toward second base, +x toward first base.
#[derive(Clone, Debug)]
pub struct DiamondDims {
    /// Side length of home plate's square footprint (17").
    pub home_plate_side_length: f64,
    /// Side length of a square base bag (15").
    pub base_side_length: f64,
    /// Back tip of home plate to the center of second base (127' 3 3/8").
    pub home_to_2b_dist: f64,
    /// Length of a baseline between consecutive bases (90').
    pub baseline_length: f64,
}

impl DiamondDims {
    /// Regulation MLB diamond (rule book 2.02).
    pub fn mlb() -> Self {
        Self {
            home_plate_side_length: 17.0 / 12.0,
            base_side_length: 15.0 / 12.0,
            home_to_2b_dist: 127.0 + (3.0 / 12.0) + ((3.0 / 8.0) / 12.0),
            baseline_length: 90.0,
        }
    }

    /// Center of first base. Third base is its mirror over the y axis.
    pub fn first_base_center(&self) -> Pt {
        (self.baseline_length * FRAC_PI_4.cos(), self.home_to_2b_dist / 2.0)
    }

    /// Center of second base.
    pub fn second_base_center(&self) -> Pt {
        (0.0, self.home_to_2b_dist)
    }
}

impl Default for DiamondDims {
    fn default() -> Self { Self::mlb() }
}

/// Baseball field facade: dimension registry entry plus color table.
pub struct BaseballField {
    pub dims: DiamondDims,
    colors: ColorTable,
}

impl BaseballField {
    /// Recognized color keys with their standard values.
    pub const DEFAULT_COLORS: &'static [(&'static str, &'static str)] = &[
        ("field_background", "#9b7653"),
        ("home_plate", "#ffffff"),
        ("first_base", "#ffffff"),
        ("second_base", "#ffffff"),
        ("third_base", "#ffffff"),
    ];

    pub fn new(dims: DiamondDims) -> Self {
        Self { dims, colors: ColorTable::standard(Self::DEFAULT_COLORS) }
    }

    pub fn with_colors(dims: DiamondDims, overrides: &[(&str, &str)]) -> Result<Self, ColorError> {
        let colors = ColorTable::with_overrides(Self::DEFAULT_COLORS, overrides)?;
        Ok(Self { dims, colors })
    }

    pub fn colors(&self) -> &ColorTable { &self.colors }

    /// Compute the infield figure.
    pub fn draw(&self) -> Figure {
        let d = &self.dims;
        let c = &self.colors;
        debug!(
            "building baseball field figure (home to second {:.4}')",
            d.home_to_2b_dist
        );

        let mut fig = Figure::new(c.get("field_background"));

        fig.add_feature(Feature::new(
            "home_plate",
            home_plate(d.home_plate_side_length),
            c.get("home_plate"),
            10,
        ));

        // Bases sit diamond-wise in TV view; the bag's diagonal spans
        // side * sqrt(2).
        let diag = d.base_side_length * 2.0_f64.sqrt();
        let (fx, fy) = d.first_base_center();
        fig.add_feature(Feature::new(
            "first_base",
            diamond(diag, diag, (fx, fy)),
            c.get("first_base"),
            10,
        ));
        fig.add_feature(Feature::new(
            "second_base",
            diamond(diag, diag, d.second_base_center()),
            c.get("second_base"),
            10,
        ));
        fig.add_feature(Feature::new(
            "third_base",
            diamond(diag, diag, (-fx, fy)),
            c.get("third_base"),
            10,
        ));

        fig
    }
}

/// Home plate: a 17" square with two corners cut to a point at the origin.
/// The edge is 17" across, the adjacent sides 8.5", and the angled sides 12".
fn home_plate(side: f64) -> Vec<Pt> {
    let half = side / 2.0;
    // The angled sides are 1' long, so the shoulder sits sqrt(1 - half^2)
    // in front of the tip.
    let shoulder = (1.0 - half * half).sqrt();
    vec![
        (0.0, 0.0),
        (-half, shoulder),
        (-half, shoulder + half),
        (half, shoulder + half),
        (half, shoulder),
        (0.0, 0.0),
    ]
}
