// File: crates/fieldplot-core/src/surfaces/basketball.rs
// Summary: Basketball court dimension registry and figure builder (NBA/WNBA/NCAA).

use std::f64::consts::PI;

use log::debug;

use crate::color::{ColorError, ColorTable};
use crate::feature::Feature;
use crate::figure::Figure;
use crate::geometry::{
    arc_points, circle, rect_band, rectangle, ring, ring_sector, samples_for,
};

/// Rule-book dimensional constants for a basketball court, in feet.
///
/// The default is a regulation NBA court; league presets adjust the
/// three-point geometry, lane width, and free-throw circle styling.
/// All coordinates place the origin at center court in TV view (+x toward
/// the right basket, +y toward the top sideline).
#[derive(Clone, Debug)]
pub struct CourtDims {
    /// Full court length (94').
    pub court_length: f64,
    /// Full court width (50').
    pub court_width: f64,
    /// Thickness of painted lines (2").
    pub line_thickness: f64,
    /// Baseline interior to basket ring center (5'3").
    pub basket_to_baseline_dist: f64,
    /// Basket ring center to backboard face (15").
    pub ring_center_to_backboard: f64,
    /// Full backboard face size (72").
    pub backboard_face_size: f64,
    /// Represented backboard thickness (4").
    pub backboard_thickness: f64,
    /// Court apron extension beyond the baseline (8').
    pub baseline_apron_extension: f64,
    /// Court apron extension beyond the sideline (5').
    pub sideline_apron_extension: f64,
    /// Outer radius of the center circle (6').
    pub center_circle_radius: f64,
    /// Sideline interior to the corner-three segment (3' NBA/WNBA).
    pub sideline_to_corner_three_dist: f64,
    /// Ring center to the outside of the three-point arc.
    pub three_point_arc_radius: f64,
    /// Free-throw line to the backboard face (15').
    pub free_throw_dist: f64,
    /// Free-throw lane width (16' NBA/WNBA, 12' NCAA).
    pub free_throw_lane_width: f64,
    /// Outer radius of the free-throw circle (6').
    pub free_throw_circle_radius: f64,
    /// Arc length the solid free-throw circle extends past the line
    /// toward the basket (12.29" NBA/WNBA, 0 where unused).
    pub free_throw_circle_extended_arc: f64,
    /// Arc length of one dash of the dashed lower circle (15.5").
    pub free_throw_dash_arc_length: f64,
    /// Dashes per side of the basket half of the free-throw circle.
    pub free_throw_circle_dashes: usize,
    /// Outer radius of the restricted arc (4'2" NBA/WNBA, 4' NCAA).
    pub restricted_arc_radius: f64,
    /// Basket ring interior radius (9").
    pub basket_ring_radius: f64,
    /// Width of the ring-to-backboard connection (7").
    pub ring_extension_width: f64,
    /// Baseline interior to the coaches box mark (28').
    pub coaches_box_x: f64,
    /// Length of the coaches box mark beyond the sideline (3').
    pub coaches_box_width: f64,
    /// Substitution area length, centered on the division line (8'2").
    pub substitution_area_length: f64,
}

impl CourtDims {
    /// Regulation NBA court.
    pub fn nba() -> Self {
        Self {
            court_length: 94.0,
            court_width: 50.0,
            line_thickness: 2.0 / 12.0,
            basket_to_baseline_dist: 5.0 + (3.0 / 12.0),
            ring_center_to_backboard: 15.0 / 12.0,
            backboard_face_size: 72.0 / 12.0,
            backboard_thickness: 4.0 / 12.0,
            baseline_apron_extension: 8.0,
            sideline_apron_extension: 5.0,
            center_circle_radius: 6.0,
            sideline_to_corner_three_dist: 3.0,
            three_point_arc_radius: 23.0 + (9.0 / 12.0),
            free_throw_dist: 15.0,
            free_throw_lane_width: 16.0,
            free_throw_circle_radius: 6.0,
            free_throw_circle_extended_arc: 12.29 / 12.0,
            free_throw_dash_arc_length: 15.5 / 12.0,
            free_throw_circle_dashes: 3,
            restricted_arc_radius: 4.0 + (2.0 / 12.0),
            basket_ring_radius: 9.0 / 12.0,
            ring_extension_width: 7.0 / 12.0,
            coaches_box_x: 28.0,
            coaches_box_width: 3.0,
            substitution_area_length: 8.0 + (2.0 / 12.0),
        }
    }

    /// Regulation WNBA court: NBA frame with the shorter 22'1.75" arc.
    pub fn wnba() -> Self {
        Self {
            three_point_arc_radius: 22.0 + (1.75 / 12.0),
            ..Self::nba()
        }
    }

    /// Regulation NCAA men's court: 22'1.75" arc meeting the corner at
    /// y = 21'7.875", 12' lane, plain free-throw circle.
    pub fn ncaa() -> Self {
        Self {
            three_point_arc_radius: 22.0 + (1.75 / 12.0),
            sideline_to_corner_three_dist: 25.0 - (21.0 + (7.875 / 12.0)),
            free_throw_lane_width: 12.0,
            free_throw_circle_extended_arc: 0.0,
            free_throw_circle_dashes: 0,
            restricted_arc_radius: 4.0,
            ..Self::nba()
        }
    }

    /// Half of the court length.
    pub fn half_length(&self) -> f64 { self.court_length / 2.0 }
    /// Half of the court width.
    pub fn half_width(&self) -> f64 { self.court_width / 2.0 }
    /// X coordinate of the right basket ring center.
    pub fn basket_center_x(&self) -> f64 { self.half_length() - self.basket_to_baseline_dist }
    /// X coordinate of the right backboard face.
    pub fn backboard_face_x(&self) -> f64 {
        self.basket_center_x() + self.ring_center_to_backboard
    }
    /// Free-throw lane length from the baseline interior.
    pub fn free_throw_lane_length(&self) -> f64 {
        self.half_length() - self.backboard_face_x() + self.free_throw_dist
    }
}

impl Default for CourtDims {
    fn default() -> Self { Self::nba() }
}

/// Basketball court facade: dimension registry entry plus color table.
pub struct BasketballCourt {
    pub dims: CourtDims,
    colors: ColorTable,
}

impl BasketballCourt {
    /// Recognized color keys with their standard values.
    pub const DEFAULT_COLORS: &'static [(&'static str, &'static str)] = &[
        ("court_background", "#d2ab6f"),
        ("offensive_halfcourt", "#d2ab6f"),
        ("defensive_halfcourt", "#d2ab6f"),
        ("center_circle_outline", "#000000"),
        ("center_circle_fill", "#d2ab6f"),
        ("division_line", "#000000"),
        ("end_line", "#000000"),
        ("side_line", "#000000"),
        ("coaches_box", "#000000"),
        ("substitution_area", "#000000"),
        ("court_apron", "#d2ab6f"),
        ("three_point_line", "#000000"),
        ("two_point_range", "#d2ab6f"),
        ("free_throw_lane_boundary", "#000000"),
        ("free_throw_circle_outline", "#000000"),
        ("paint", "#d2ab6f"),
        ("restricted_arc", "#000000"),
        ("backboard", "#000000"),
        ("basket_ring", "#000000"),
        ("net", "#ffffff"),
    ];

    pub fn new(dims: CourtDims) -> Self {
        Self { dims, colors: ColorTable::standard(Self::DEFAULT_COLORS) }
    }

    /// Construct with user color overrides; unknown keys and malformed
    /// values are rejected here, before any drawing happens.
    pub fn with_colors(dims: CourtDims, overrides: &[(&str, &str)]) -> Result<Self, ColorError> {
        let colors = ColorTable::with_overrides(Self::DEFAULT_COLORS, overrides)?;
        Ok(Self { dims, colors })
    }

    pub fn colors(&self) -> &ColorTable { &self.colors }

    /// Compute the full-court figure.
    pub fn draw(&self) -> Figure {
        let d = &self.dims;
        let c = &self.colors;
        let t = d.line_thickness;
        let half_l = d.half_length();
        let half_w = d.half_width();
        debug!("building basketball court figure ({}' x {}')", d.court_length, d.court_width);

        let mut fig = Figure::new(c.get("court_background"));

        // Halves of the playing surface.
        fig.add_feature(Feature::new(
            "offensive_halfcourt",
            rectangle(0.0, half_l, -half_w, half_w),
            c.get("offensive_halfcourt"),
            0,
        ));
        fig.add_feature(Feature::new(
            "defensive_halfcourt",
            rectangle(-half_l, 0.0, -half_w, half_w),
            c.get("defensive_halfcourt"),
            0,
        ));

        // Apron surrounding the playing lines.
        fig.add_feature(Feature::new(
            "court_apron",
            rect_band(
                (
                    -half_l - d.baseline_apron_extension,
                    half_l + d.baseline_apron_extension,
                    -half_w - d.sideline_apron_extension,
                    half_w + d.sideline_apron_extension,
                ),
                (-half_l, half_l, -half_w, half_w),
            ),
            c.get("court_apron"),
            1,
        ));

        // Center circle.
        let r = d.center_circle_radius;
        fig.add_feature(Feature::new(
            "center_circle_fill",
            circle((0.0, 0.0), r - t, samples_for(2.0 * PI)),
            c.get("center_circle_fill"),
            2,
        ));
        fig.add_feature(Feature::new(
            "center_circle_outline",
            ring((0.0, 0.0), r, r - t, samples_for(2.0 * PI)),
            c.get("center_circle_outline"),
            10,
        ));

        // Division line.
        fig.add_feature(Feature::new(
            "division_line",
            rectangle(-t / 2.0, t / 2.0, -half_w, half_w),
            c.get("division_line"),
            10,
        ));

        // Boundary lines.
        fig.add_mirrored(Feature::new(
            "end_line",
            rectangle(half_l - t, half_l, -half_w, half_w),
            c.get("end_line"),
            10,
        ));
        let side_line = Feature::new(
            "side_line",
            rectangle(-half_l, half_l, half_w - t, half_w),
            c.get("side_line"),
            10,
        );
        fig.add_feature(side_line.mirrored_over_x());
        fig.add_feature(side_line);

        // Coaches box marks extend outward from the sideline, 28' from
        // each baseline on both sides of the court.
        let cb_x = half_l - d.coaches_box_x;
        let coaches_box = Feature::new(
            "coaches_box",
            rectangle(cb_x - t, cb_x, half_w, half_w + d.coaches_box_width),
            c.get("coaches_box"),
            10,
        );
        fig.add_feature(coaches_box.mirrored_over_x().mirrored());
        fig.add_feature(coaches_box.mirrored_over_x());
        fig.add_mirrored(coaches_box);

        // Substitution area marks on the scorer's table side only.
        let sub = d.substitution_area_length / 2.0;
        fig.add_feature(Feature::with_polygons(
            "substitution_area",
            vec![
                rectangle(sub, sub + t, half_w, half_w + 2.0),
                rectangle(-sub - t, -sub, half_w, half_w + 2.0),
            ],
            c.get("substitution_area"),
            10,
        ));

        self.add_three_point(&mut fig);
        self.add_lane(&mut fig);
        self.add_free_throw_circle(&mut fig);
        self.add_goal(&mut fig);

        fig
    }

    /// Three-point line and the two-point range it encloses, built for the
    /// right basket and mirrored. The arc meets straight corner segments
    /// whose angle follows from asin(half-span / radius).
    fn add_three_point(&self, fig: &mut Figure) {
        let d = &self.dims;
        let t = d.line_thickness;
        let half_l = d.half_length();
        let center = (d.basket_center_x(), 0.0);

        let y_out = d.half_width() - d.sideline_to_corner_three_dist;
        let r_out = d.three_point_arc_radius;
        let a_out = (y_out / r_out).asin();

        let y_in = y_out - t;
        let r_in = r_out - t;
        let a_in = (y_in / r_in).asin();

        let n = samples_for(2.0 * a_out);

        let mut line = vec![(half_l, y_out)];
        line.extend(arc_points(center, r_out, PI - a_out, PI + a_out, n));
        line.push((half_l, -y_out));
        line.push((half_l, -y_in));
        line.extend(arc_points(center, r_in, PI + a_in, PI - a_in, n));
        line.push((half_l, y_in));
        line.push((half_l, y_out));
        fig.add_mirrored(Feature::new(
            "three_point_line",
            line,
            self.colors.get("three_point_line"),
            10,
        ));

        let mut range = vec![(half_l, -y_in)];
        range.extend(arc_points(center, r_in, PI + a_in, PI - a_in, n));
        range.push((half_l, y_in));
        range.push((half_l, -y_in));
        fig.add_mirrored(Feature::new(
            "two_point_range",
            range,
            self.colors.get("two_point_range"),
            2,
        ));
    }

    /// Free-throw lane boundary and the paint inside it.
    fn add_lane(&self, fig: &mut Figure) {
        let d = &self.dims;
        let t = d.line_thickness;
        let half_l = d.half_length();
        let lane_front_x = half_l - d.free_throw_lane_length();
        let half_lane = d.free_throw_lane_width / 2.0;

        fig.add_mirrored(Feature::new(
            "free_throw_lane_boundary",
            rect_band(
                (lane_front_x, half_l, -half_lane, half_lane),
                (lane_front_x + t, half_l, -half_lane + t, half_lane - t),
            ),
            self.colors.get("free_throw_lane_boundary"),
            10,
        ));

        fig.add_mirrored(Feature::new(
            "paint",
            rectangle(lane_front_x + t, half_l - t, -half_lane + t, half_lane - t),
            self.colors.get("paint"),
            2,
        ));
    }

    /// Free-throw circle: solid half away from the basket (optionally
    /// extended past the line), dashed half toward the basket where the
    /// league uses dashes.
    fn add_free_throw_circle(&self, fig: &mut Figure) {
        let d = &self.dims;
        let t = d.line_thickness;
        let r = d.free_throw_circle_radius;
        let cx = d.half_length() - d.free_throw_lane_length() + t / 2.0;
        let center = (cx, 0.0);
        let ext = d.free_throw_circle_extended_arc / r;

        let mut polygons = vec![ring_sector(
            center,
            r,
            r - t,
            PI / 2.0 - ext,
            3.0 * PI / 2.0 + ext,
            samples_for(PI + 2.0 * ext),
        )];

        // Dashes alternate gap/dash along the basket side, symmetric about
        // the lane axis.
        let da = d.free_throw_dash_arc_length / r;
        for k in 0..d.free_throw_circle_dashes {
            let off0 = ext + (2 * k + 1) as f64 * da;
            let off1 = ext + (2 * k + 2) as f64 * da;
            polygons.push(ring_sector(
                center,
                r,
                r - t,
                PI / 2.0 - off1,
                PI / 2.0 - off0,
                samples_for(da),
            ));
            polygons.push(ring_sector(
                center,
                r,
                r - t,
                3.0 * PI / 2.0 + off0,
                3.0 * PI / 2.0 + off1,
                samples_for(da),
            ));
        }

        fig.add_mirrored(Feature::with_polygons(
            "free_throw_circle_outline",
            polygons,
            self.colors.get("free_throw_circle_outline"),
            10,
        ));
    }

    /// Restricted arc, backboard, net, and basket ring for the right goal.
    fn add_goal(&self, fig: &mut Figure) {
        let d = &self.dims;
        let t = d.line_thickness;
        let basket = (d.basket_center_x(), 0.0);
        let bb_x = d.backboard_face_x();

        let r = d.restricted_arc_radius;
        fig.add_mirrored(Feature::with_polygons(
            "restricted_arc",
            vec![
                ring_sector(basket, r, r - t, PI / 2.0, 3.0 * PI / 2.0, samples_for(PI)),
                rectangle(basket.0, bb_x, r - t, r),
                rectangle(basket.0, bb_x, -r, -r + t),
            ],
            self.colors.get("restricted_arc"),
            10,
        ));

        let half_face = d.backboard_face_size / 2.0;
        fig.add_mirrored(Feature::new(
            "backboard",
            rectangle(bb_x, bb_x + d.backboard_thickness, -half_face, half_face),
            self.colors.get("backboard"),
            20,
        ));

        let ring_r = d.basket_ring_radius;
        fig.add_mirrored(Feature::new(
            "net",
            circle(basket, ring_r, samples_for(2.0 * PI)),
            self.colors.get("net"),
            20,
        ));

        let half_ext = d.ring_extension_width / 2.0;
        fig.add_mirrored(Feature::with_polygons(
            "basket_ring",
            vec![
                ring(basket, ring_r + t, ring_r, samples_for(2.0 * PI)),
                rectangle(basket.0 + ring_r, bb_x, -half_ext, half_ext),
            ],
            self.colors.get("basket_ring"),
            21,
        ));
    }
}
