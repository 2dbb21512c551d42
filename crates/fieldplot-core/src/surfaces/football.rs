// File: crates/fieldplot-core/src/surfaces/football.rs
// Summary: Football field dimension registry and figure builder (NCAA default).

use log::debug;

use crate::color::{ColorError, ColorTable};
use crate::feature::{Feature, Label};
use crate::figure::Figure;
use crate::geometry::{rectangle, reflect, Pt};

/// Rule-book dimensional constants for a football field, in feet.
///
/// The default is a regulation NCAA field. Origin at midfield in TV view;
/// x spans the field lengthwise, goal lines toward either end.
#[derive(Clone, Debug)]
pub struct GridironDims {
    /// Interior length including end zones (360' = 120 yd).
    pub field_length: f64,
    /// Interior width between sideline interiors (160').
    pub field_width: f64,
    /// Solid boundary along the end lines and sidelines (6').
    pub boundary_thickness: f64,
    /// Goal line interior to midfield (150' = 50 yd).
    pub goal_line_dist: f64,
    /// Goal line thickness, extending into the end zone (8").
    pub goal_line_thickness: f64,
    /// Thickness of yard lines and hash marks (4").
    pub line_thickness: f64,
    /// Sideline interior to the near end of a yard line (4").
    pub line_inset: f64,
    /// Midfield offset of the inbound hash marks (60' from each sideline).
    pub inbound_marker_y: f64,
    /// Length of the inbound hash marks on the 5-yard lines (10").
    pub inbound_marker_length: f64,
    /// Length of the 1-yard hash marks (2').
    pub minor_marker_length: f64,
    /// Midfield to the try line (141' = the 3-yard line).
    pub try_line_dist: f64,
    /// Half-length of the try line (1').
    pub try_line_half_length: f64,
    /// Height of the yardage numbers (6').
    pub number_height: f64,
    /// Sideline interior to the top of the yardage numbers (27'); the
    /// glyphs extend from there toward the sideline.
    pub number_dist: f64,
}

impl GridironDims {
    /// Regulation NCAA field (rule book Appendix D).
    pub fn ncaa() -> Self {
        Self {
            field_length: 360.0,
            field_width: 160.0,
            boundary_thickness: 6.0,
            goal_line_dist: 150.0,
            goal_line_thickness: 8.0 / 12.0,
            line_thickness: 4.0 / 12.0,
            line_inset: 4.0 / 12.0,
            inbound_marker_y: 20.0,
            inbound_marker_length: 10.0 / 12.0,
            minor_marker_length: 2.0,
            try_line_dist: 141.0,
            try_line_half_length: 1.0,
            number_height: 6.0,
            number_dist: 27.0,
        }
    }

    pub fn half_length(&self) -> f64 { self.field_length / 2.0 }
    pub fn half_width(&self) -> f64 { self.field_width / 2.0 }
    /// X coordinate of a yard line, where `yardage` counts from midfield
    /// (negative toward the left goal line). One yard is three feet.
    pub fn yard_line_x(&self, yardage: i32) -> f64 { 3.0 * yardage as f64 }
}

impl Default for GridironDims {
    fn default() -> Self { Self::ncaa() }
}

/// Football field facade: dimension registry entry plus color table.
pub struct FootballField {
    pub dims: GridironDims,
    colors: ColorTable,
}

impl FootballField {
    /// Recognized color keys with their standard values.
    pub const DEFAULT_COLORS: &'static [(&'static str, &'static str)] = &[
        ("plot_background", "#196f0c"),
        ("endline_sideline", "#ffffff"),
        ("goal_line", "#ffffff"),
        ("yard_markings", "#ffffff"),
        ("try_line", "#ffffff"),
        ("directional_arrows", "#ffffff"),
        ("field_numbers", "#ffffff"),
    ];

    pub fn new(dims: GridironDims) -> Self {
        Self { dims, colors: ColorTable::standard(Self::DEFAULT_COLORS) }
    }

    pub fn with_colors(dims: GridironDims, overrides: &[(&str, &str)]) -> Result<Self, ColorError> {
        let colors = ColorTable::with_overrides(Self::DEFAULT_COLORS, overrides)?;
        Ok(Self { dims, colors })
    }

    pub fn colors(&self) -> &ColorTable { &self.colors }

    /// Compute the full-field figure.
    pub fn draw(&self) -> Figure {
        let d = &self.dims;
        let c = &self.colors;
        let half_l = d.half_length();
        let half_w = d.half_width();
        let b = d.boundary_thickness;
        debug!("building football field figure ({}' x {}')", d.field_length, d.field_width);

        let mut fig = Figure::new(c.get("plot_background"));

        // Solid boundary: the band between the field interior and a
        // rectangle 6' outside it, traced as one left-half polygon.
        let boundary: Vec<Pt> = vec![
            (0.0, -half_w),
            (-half_l, -half_w),
            (-half_l, half_w),
            (0.0, half_w),
            (0.0, half_w + b),
            (-half_l - b, half_w + b),
            (-half_l - b, -half_w - b),
            (0.0, -half_w - b),
            (0.0, -half_w),
        ];
        fig.add_mirrored(Feature::new(
            "endline_sideline",
            boundary,
            c.get("endline_sideline"),
            10,
        ));

        // Goal lines, 8" thick into the end zone.
        fig.add_mirrored(Feature::new(
            "goal_line",
            rectangle(
                -d.goal_line_dist - d.goal_line_thickness,
                -d.goal_line_dist,
                -half_w,
                half_w,
            ),
            c.get("goal_line"),
            11,
        ));

        self.add_yard_markings(&mut fig);

        fig.add_mirrored(Feature::new(
            "try_line",
            rectangle(
                -d.try_line_dist - d.line_thickness / 2.0,
                -d.try_line_dist + d.line_thickness / 2.0,
                -d.try_line_half_length,
                d.try_line_half_length,
            ),
            c.get("try_line"),
            11,
        ));

        self.add_directional_arrows(&mut fig);
        self.add_field_numbers(&mut fig);

        fig
    }

    /// Yard lines at 5-yard intervals with inbound hash marks, plus the
    /// 2'-long markers at every intervening yard.
    fn add_yard_markings(&self, fig: &mut Figure) {
        let d = &self.dims;
        let half_w = d.half_width();
        let ht = d.line_thickness / 2.0;
        let mt = d.line_thickness;
        let ml = d.inbound_marker_length;
        let iy = d.inbound_marker_y;
        let y_lo = -half_w + d.line_inset;
        let y_hi = half_w - d.line_inset;

        // Full-width line with inbound markers 60' from each sideline.
        let five_yard_line = |x: f64| -> Vec<Pt> {
            vec![
                (x - ht, y_lo),
                (x - ht, -iy),
                (x - ht - ml, -iy),
                (x - ht - ml, -iy + mt),
                (x - ht, -iy + mt),
                (x - ht, iy - mt),
                (x - ht - ml, iy - mt),
                (x - ht - ml, iy),
                (x - ht, iy),
                (x - ht, y_hi),
                (x + ht, y_hi),
                (x + ht, iy),
                (x + ht + ml, iy),
                (x + ht + ml, iy - mt),
                (x + ht, iy - mt),
                (x + ht, -iy + mt),
                (x + ht + ml, -iy + mt),
                (x + ht, -iy),
                (x + ht + ml, -iy),
                (x + ht, y_lo),
                (x - ht, y_lo),
            ]
        };

        let mut polys: Vec<Vec<Pt>> = Vec::new();
        for yardage in -49..0_i32 {
            let x = d.yard_line_x(yardage);
            if yardage % 5 == 0 {
                polys.push(five_yard_line(x));
            } else {
                // 1-yard markers at the sidelines and at the hash lanes.
                let bottom = rectangle(x - ht, x + ht, y_lo, y_lo + d.minor_marker_length);
                let lower = rectangle(x - ht, x + ht, -iy - d.minor_marker_length, -iy);
                polys.push(reflect(&bottom, true, false));
                polys.push(reflect(&lower, true, false));
                polys.push(bottom);
                polys.push(lower);
            }
        }
        fig.add_mirrored(Feature::with_polygons(
            "yard_markings",
            polys,
            self.colors.get("yard_markings"),
            11,
        ));
        // The 50-yard line sits on the axis of symmetry; add it once.
        fig.add_feature(Feature::new(
            "yard_markings",
            five_yard_line(0.0),
            self.colors.get("yard_markings"),
            11,
        ));
    }

    /// Triangular arrows beside the numbers every 10 yards (not at the 50),
    /// pointing toward the nearer goal line.
    fn add_directional_arrows(&self, fig: &mut Figure) {
        let d = &self.dims;
        // Isoceles triangle: two 36" sides on an 18" base.
        let base: f64 = 18.0 / 12.0;
        let side = 36.0 / 12.0;
        let arrow_width = (side * side - (base / 2.0) * (base / 2.0)).sqrt();
        // Arrow tip sits 15" below the top of the numbers.
        let y_top = -(d.half_width() - d.number_dist) - (15.0 / 12.0);

        let mut polys: Vec<Vec<Pt>> = Vec::new();
        for yardage in [-40, -30, -20, -10] {
            let x = d.yard_line_x(yardage) - d.line_thickness / 2.0 - 5.5;
            let lower = vec![
                (x, y_top),
                (x, y_top - base),
                (x - arrow_width, y_top - base / 2.0),
                (x, y_top),
            ];
            polys.push(reflect(&lower, true, false));
            polys.push(lower);
        }
        fig.add_mirrored(Feature::with_polygons(
            "directional_arrows",
            polys,
            self.colors.get("directional_arrows"),
            11,
        ));
    }

    /// Yardage numbers every 10 yards, one digit per label. The far-side
    /// numbers are flipped to read from the opposite sideline, which also
    /// swaps the digit order.
    fn add_field_numbers(&self, fig: &mut Figure) {
        let d = &self.dims;
        let color = self.colors.get("field_numbers");
        let size = d.number_height;
        let y_bottom = -d.half_width() + d.number_dist - size / 2.0;
        let y_top = -y_bottom;
        let digit_off = 3.0 + (2.0 / 12.0);

        for yardage in [-40, -30, -20, -10, 0_i32] {
            let label = 50 + yardage;
            let tens = (label / 10).to_string();
            let ones = (label % 10).to_string();
            let sides: &[f64] = if yardage == 0 { &[1.0] } else { &[-1.0, 1.0] };
            for &side in sides {
                let xc = side * d.yard_line_x(yardage);
                fig.add_label(Label::new(&tens, xc - digit_off, y_bottom, size, color, false));
                fig.add_label(Label::new(&ones, xc + digit_off, y_bottom, size, color, false));
                fig.add_label(Label::new(&ones, xc - digit_off, y_top, size, color, true));
                fig.add_label(Label::new(&tens, xc + digit_off, y_top, size, color, true));
            }
        }
    }
}
