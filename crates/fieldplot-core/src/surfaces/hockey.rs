// File: crates/fieldplot-core/src/surfaces/hockey.rs
// Summary: Hockey rink dimension registry and figure builder (NHL default).

use std::f64::consts::PI;

use log::debug;

use crate::color::{ColorError, ColorTable};
use crate::feature::Feature;
use crate::figure::Figure;
use crate::geometry::{arc_points, circle, rectangle, ring, ring_sector, samples_for, Pt};

/// Rule-book dimensional constants for a hockey rink, in feet.
///
/// The default is a regulation NHL rink. Origin at center ice in TV view;
/// the rink is longer than it is tall.
#[derive(Clone, Debug)]
pub struct RinkDims {
    /// Full rink length between the boards behind each goal (200').
    pub rink_length: f64,
    /// Full rink width between the side boards (85').
    pub rink_width: f64,
    /// Radius of the corner arcs (28').
    pub corner_radius: f64,
    /// Represented board thickness (2").
    pub board_thickness: f64,
    /// Neutral zone length between zone line interiors (50').
    pub nzone_length: f64,
    /// Thickness of the center and zone lines (12").
    pub major_line_thickness: f64,
    /// Thickness of goal lines and other markings (2").
    pub minor_line_thickness: f64,
    /// End boards to the goal line center (11').
    pub goal_line_dist: f64,
    /// Radius of all faceoff circles (15').
    pub faceoff_circle_radius: f64,
    /// Radius of the center-ice faceoff spot (6").
    pub center_faceoff_spot_radius: f64,
    /// Radius of non-center faceoff spots (1').
    pub noncenter_faceoff_spot_radius: f64,
    /// Gap between the spot's inner ring and its center stripe (3").
    pub faceoff_spot_gap_width: f64,
    /// Length of the hash marks outside the end-zone circles (2').
    pub hashmark_width: f64,
    /// Outer-edge to outer-edge spacing of those hash marks (71").
    pub hashmark_ext_spacing: f64,
    /// End boards to end-zone faceoff circle centers (31').
    pub ozone_circle_from_end: f64,
    /// Center-line offset of end-zone faceoff circle centers (20.5').
    pub ozone_circle_y: f64,
    /// Zone line interior to neutral-zone faceoff spots (5').
    pub zone_line_to_nzone_spot: f64,
    /// Center-line offset of neutral-zone faceoff spots (22').
    pub nzone_spot_y: f64,
    /// Radius of the referee crease (10').
    pub referee_crease_radius: f64,
    /// Radius of the goal crease arc (6').
    pub goal_crease_radius: f64,
    /// Half-width of the goal crease (4').
    pub goal_crease_half_width: f64,
    /// Goal line to the crease notch marks (4').
    pub goal_crease_notch_dist: f64,
    /// Length of the crease notch marks (5").
    pub goal_crease_notch_width: f64,
    /// Radius of the goal frame's rear corners (20").
    pub goal_frame_radius: f64,
    /// Half-width of the goal frame opening (3').
    pub goal_frame_half_width: f64,
    /// Depth of the goal frame behind the goal line (40").
    pub goal_frame_depth: f64,
}

impl RinkDims {
    /// Regulation NHL rink.
    pub fn nhl() -> Self {
        Self {
            rink_length: 200.0,
            rink_width: 85.0,
            corner_radius: 28.0,
            board_thickness: 2.0 / 12.0,
            nzone_length: 50.0,
            major_line_thickness: 1.0,
            minor_line_thickness: 2.0 / 12.0,
            goal_line_dist: 11.0,
            faceoff_circle_radius: 15.0,
            center_faceoff_spot_radius: 0.5,
            noncenter_faceoff_spot_radius: 1.0,
            faceoff_spot_gap_width: 3.0 / 12.0,
            hashmark_width: 2.0,
            hashmark_ext_spacing: 71.0 / 12.0,
            ozone_circle_from_end: 31.0,
            ozone_circle_y: 20.5,
            zone_line_to_nzone_spot: 5.0,
            nzone_spot_y: 22.0,
            referee_crease_radius: 10.0,
            goal_crease_radius: 6.0,
            goal_crease_half_width: 4.0,
            goal_crease_notch_dist: 4.0,
            goal_crease_notch_width: 5.0 / 12.0,
            goal_frame_radius: 20.0 / 12.0,
            goal_frame_half_width: 3.0,
            goal_frame_depth: 40.0 / 12.0,
        }
    }

    pub fn half_length(&self) -> f64 { self.rink_length / 2.0 }
    pub fn half_width(&self) -> f64 { self.rink_width / 2.0 }
    /// X coordinate of the right goal line center.
    pub fn goal_line_x(&self) -> f64 { self.half_length() - self.goal_line_dist }
    /// X coordinate of the right zone line interior edge.
    pub fn zone_line_x(&self) -> f64 { self.nzone_length / 2.0 }
    /// Center of the right end-zone faceoff circles (x).
    pub fn ozone_circle_x(&self) -> f64 { self.half_length() - self.ozone_circle_from_end }
    /// X coordinate of the right neutral-zone faceoff spots.
    pub fn nzone_spot_x(&self) -> f64 { self.nzone_length / 2.0 - self.zone_line_to_nzone_spot }
}

impl Default for RinkDims {
    fn default() -> Self { Self::nhl() }
}

/// Trace the rounded-rectangle ice boundary counterclockwise.
fn rounded_boundary(half_l: f64, half_w: f64, r: f64, n: usize) -> Vec<Pt> {
    let cx = half_l - r;
    let cy = half_w - r;
    let mut pts = vec![(-cx, -half_w)];
    pts.extend(arc_points((cx, -cy), r, -PI / 2.0, 0.0, n));
    pts.extend(arc_points((cx, cy), r, 0.0, PI / 2.0, n));
    pts.extend(arc_points((-cx, cy), r, PI / 2.0, PI, n));
    pts.extend(arc_points((-cx, -cy), r, PI, 3.0 * PI / 2.0, n));
    pts.push((-cx, -half_w));
    pts
}

/// Hockey rink facade: dimension registry entry plus color table.
pub struct HockeyRink {
    pub dims: RinkDims,
    colors: ColorTable,
}

impl HockeyRink {
    /// Recognized color keys with their standard values.
    pub const DEFAULT_COLORS: &'static [(&'static str, &'static str)] = &[
        ("plot_background", "#ffffff"),
        ("boards", "#000000"),
        ("ozone_ice", "#ffffff"),
        ("nzone_ice", "#ffffff"),
        ("dzone_ice", "#ffffff"),
        ("center_line", "#c8102e"),
        ("zone_line", "#0033a0"),
        ("goal_line", "#c8102e"),
        ("goalkeepers_restricted_area", "#c8102e"),
        ("goal_crease_outline", "#c8102e"),
        ("goal_crease_fill", "#41b6e6"),
        ("referee_crease", "#c8102e"),
        ("center_faceoff_spot", "#0033a0"),
        ("faceoff_spot_outer_ring", "#c8102e"),
        ("faceoff_spot_stripe", "#c8102e"),
        ("center_faceoff_circle", "#0033a0"),
        ("ozone_dzone_faceoff_circle", "#c8102e"),
        ("faceoff_line", "#c8102e"),
        ("goal_frame", "#c8102e"),
        ("goal_fill", "#a5acaf"),
    ];

    pub fn new(dims: RinkDims) -> Self {
        Self { dims, colors: ColorTable::standard(Self::DEFAULT_COLORS) }
    }

    pub fn with_colors(dims: RinkDims, overrides: &[(&str, &str)]) -> Result<Self, ColorError> {
        let colors = ColorTable::with_overrides(Self::DEFAULT_COLORS, overrides)?;
        Ok(Self { dims, colors })
    }

    pub fn colors(&self) -> &ColorTable { &self.colors }

    /// Compute the full-rink figure.
    pub fn draw(&self) -> Figure {
        let d = &self.dims;
        let c = &self.colors;
        let half_l = d.half_length();
        let half_w = d.half_width();
        let n = samples_for(PI / 2.0);
        debug!("building hockey rink figure ({}' x {}')", d.rink_length, d.rink_width);

        let mut fig = Figure::new(c.get("plot_background"));

        // Ice fills, split at the zone lines.
        let zx = d.zone_line_x();
        fig.add_feature(Feature::new(
            "nzone_ice",
            rectangle(-zx, zx, -half_w, half_w),
            c.get("nzone_ice"),
            0,
        ));
        let cx = half_l - d.corner_radius;
        let cy = half_w - d.corner_radius;
        let mut end_zone = vec![(zx, -half_w)];
        end_zone.extend(arc_points((cx, -cy), d.corner_radius, -PI / 2.0, 0.0, n));
        end_zone.extend(arc_points((cx, cy), d.corner_radius, 0.0, PI / 2.0, n));
        end_zone.push((zx, half_w));
        end_zone.push((zx, -half_w));
        let ozone = Feature::new("ozone_ice", end_zone, c.get("ozone_ice"), 0);
        let mut dzone = ozone.mirrored();
        dzone.name = "dzone_ice";
        dzone.color = c.get("dzone_ice");
        fig.add_feature(dzone);
        fig.add_feature(ozone);

        // Boards: a band between the ice boundary and its outward offset.
        // Drawn last (highest z) so markings tuck beneath them.
        let th = d.board_thickness;
        let mut boards = rounded_boundary(half_l, half_w, d.corner_radius, n);
        let mut outer = rounded_boundary(half_l + th, half_w + th, d.corner_radius + th, n);
        outer.reverse();
        boards.extend(outer);
        boards.push(boards[0]);
        fig.add_feature(Feature::new("boards", boards, c.get("boards"), 100));

        // Center and zone lines.
        let major = d.major_line_thickness;
        fig.add_feature(Feature::new(
            "center_line",
            rectangle(-major / 2.0, major / 2.0, -half_w, half_w),
            c.get("center_line"),
            11,
        ));
        fig.add_mirrored(Feature::new(
            "zone_line",
            rectangle(zx, zx + major, -half_w, half_w),
            c.get("zone_line"),
            11,
        ));

        self.add_goal_lines(&mut fig);
        self.add_faceoff_markings(&mut fig);
        self.add_creases(&mut fig);
        self.add_goals(&mut fig);

        fig
    }

    /// Goal lines clipped against the corner arcs: the line meets the
    /// boards inside the corner radius, so its ends follow the arc.
    fn add_goal_lines(&self, fig: &mut Figure) {
        let d = &self.dims;
        let t = d.minor_line_thickness;
        let half_w = d.half_width();
        let r = d.corner_radius;
        let cx = d.half_length() - r;
        let cy = half_w - r;
        let x1 = d.goal_line_x() - t / 2.0;
        let x2 = d.goal_line_x() + t / 2.0;

        let polygon = if x2 <= cx {
            // Entirely clear of the corner arc; a plain rectangle.
            rectangle(x1, x2, -half_w, half_w)
        } else {
            let theta1 = ((x1 - cx) / r).acos();
            let theta2 = ((x2 - cx) / r).acos();
            let n = samples_for(theta1 - theta2);
            let mut pts = arc_points((cx, cy), r, theta1, theta2, n);
            pts.extend(arc_points((cx, -cy), r, -theta2, -theta1, n));
            pts.push(pts[0]);
            pts
        };
        fig.add_mirrored(Feature::new("goal_line", polygon, self.colors.get("goal_line"), 10));
    }

    /// Faceoff spots, circles, hash marks, and L-shaped faceoff lines.
    fn add_faceoff_markings(&self, fig: &mut Figure) {
        let d = &self.dims;
        let c = &self.colors;
        let t = d.minor_line_thickness;
        let full = samples_for(2.0 * PI);

        // Center ice.
        fig.add_feature(Feature::new(
            "center_faceoff_spot",
            circle((0.0, 0.0), d.center_faceoff_spot_radius, full),
            c.get("center_faceoff_spot"),
            12,
        ));
        let fr = d.faceoff_circle_radius;
        fig.add_feature(Feature::new(
            "center_faceoff_circle",
            ring((0.0, 0.0), fr, fr - t, full),
            c.get("center_faceoff_circle"),
            12,
        ));

        // End-zone circles with hash marks outside the top and bottom.
        // The marks sit 71" apart measured outer edge to outer edge, one
        // pair either side of the circle's vertical bisector.
        let ox = d.ozone_circle_x();
        let oy = d.ozone_circle_y;
        let hash_ext = d.hashmark_ext_spacing / 2.0;
        let hash_int = hash_ext - t;
        let mut circle_polys = Vec::new();
        for center in [(ox, oy), (ox, -oy)] {
            circle_polys.push(ring(center, fr, fr - t, full));
            for side_x in [-1.0, 1.0] {
                for side_y in [-1.0, 1.0] {
                    let x_a = center.0 + side_x * hash_int;
                    let x_b = center.0 + side_x * hash_ext;
                    let hy = center.1 + side_y * fr;
                    let y_b = hy + side_y * d.hashmark_width;
                    circle_polys.push(rectangle(x_a, x_b, hy, y_b));
                }
            }
        }
        fig.add_mirrored(Feature::with_polygons(
            "ozone_dzone_faceoff_circle",
            circle_polys,
            c.get("ozone_dzone_faceoff_circle"),
            12,
        ));

        // Non-center spots: outer ring plus the painted center stripe.
        let sr = d.noncenter_faceoff_spot_radius;
        let sr_in = sr - t;
        let spot_centers = [
            (ox, oy),
            (ox, -oy),
            (d.nzone_spot_x(), d.nzone_spot_y),
            (d.nzone_spot_x(), -d.nzone_spot_y),
        ];
        let rings = spot_centers.iter().map(|&p| ring(p, sr, sr_in, full)).collect();
        fig.add_mirrored(Feature::with_polygons(
            "faceoff_spot_outer_ring",
            rings,
            c.get("faceoff_spot_outer_ring"),
            12,
        ));

        // Stripe: the inner circle truncated at vertical chords, leaving a
        // 3" gap between the stripe and the ring on either side.
        let h = sr_in - d.faceoff_spot_gap_width;
        let a = (h / sr_in).acos();
        let ns = samples_for(PI - 2.0 * a);
        let stripes = spot_centers
            .iter()
            .map(|&p| {
                let mut pts = arc_points(p, sr_in, a, PI - a, ns);
                pts.extend(arc_points(p, sr_in, PI + a, 2.0 * PI - a, ns));
                pts.push(pts[0]);
                pts
            })
            .collect();
        fig.add_mirrored(Feature::with_polygons(
            "faceoff_spot_stripe",
            stripes,
            c.get("faceoff_spot_stripe"),
            12,
        ));

        // L-shaped faceoff lines in the end zones, one per quadrant of
        // each circle.
        let dist_x = 2.0;
        let dist_y = 9.0 / 12.0;
        let len = 4.0;
        let width = 3.0;
        let base: Vec<Pt> = vec![
            (dist_x, dist_y),
            (dist_x + len, dist_y),
            (dist_x + len, dist_y + t),
            (dist_x + t, dist_y + t),
            (dist_x + t, dist_y + width),
            (dist_x, dist_y + width),
            (dist_x, dist_y),
        ];
        let mut l_polys = Vec::new();
        for center in [(ox, oy), (ox, -oy)] {
            for sx in [-1.0, 1.0] {
                for sy in [-1.0, 1.0] {
                    l_polys.push(
                        base.iter()
                            .map(|&(x, y)| (center.0 + sx * x, center.1 + sy * y))
                            .collect(),
                    );
                }
            }
        }
        fig.add_mirrored(Feature::with_polygons(
            "faceoff_line",
            l_polys,
            c.get("faceoff_line"),
            12,
        ));
    }

    /// Referee crease and the goal creases (outline band, fill, notches).
    fn add_creases(&self, fig: &mut Figure) {
        let d = &self.dims;
        let c = &self.colors;
        let t = d.minor_line_thickness;
        let half_w = d.half_width();

        let rr = d.referee_crease_radius;
        fig.add_feature(Feature::new(
            "referee_crease",
            ring_sector((0.0, -half_w), rr, rr - t, 0.0, PI, samples_for(PI)),
            c.get("referee_crease"),
            12,
        ));

        // Goal crease opens from the goal line toward center ice.
        let x0 = d.goal_line_x() - t / 2.0;
        let w = d.goal_crease_half_width;
        let r = d.goal_crease_radius;
        let a = (w / r).asin();
        let w_in = w - t;
        let r_in = r - t;
        let a_in = (w_in / r_in).asin();
        let n = samples_for(2.0 * a);
        let center = (x0, 0.0);

        let mut band = vec![(x0, w)];
        band.extend(arc_points(center, r, PI - a, PI + a, n));
        band.push((x0, -w));
        band.push((x0, -w_in));
        band.extend(arc_points(center, r_in, PI + a_in, PI - a_in, n));
        band.push((x0, w_in));
        band.push((x0, w));

        let nd = d.goal_crease_notch_dist;
        let nw = d.goal_crease_notch_width;
        let notch_top = rectangle(x0 - nd - t, x0 - nd, w_in - nw, w_in);
        let notch_bottom = rectangle(x0 - nd - t, x0 - nd, -w_in, -w_in + nw);
        fig.add_mirrored(Feature::with_polygons(
            "goal_crease_outline",
            vec![band, notch_top, notch_bottom],
            c.get("goal_crease_outline"),
            11,
        ));

        let mut fill = vec![(x0, w_in)];
        fill.extend(arc_points(center, r_in, PI - a_in, PI + a_in, n));
        fill.push((x0, -w_in));
        fill.push((x0, w_in));
        fig.add_mirrored(Feature::new("goal_crease_fill", fill, c.get("goal_crease_fill"), 5));
    }

    /// Goal frames behind each goal line, rear corners rounded.
    fn add_goals(&self, fig: &mut Figure) {
        let d = &self.dims;
        let c = &self.colors;
        let t = d.minor_line_thickness;
        let x0 = d.goal_line_x();
        let hw = d.goal_frame_half_width;
        let depth = d.goal_frame_depth;
        let rf = d.goal_frame_radius;
        let n = samples_for(PI / 2.0);

        let trace = |hw: f64, depth: f64, rf: f64| -> Vec<Pt> {
            let back = x0 + depth;
            let mut pts = vec![(x0, hw)];
            pts.extend(arc_points((back - rf, hw - rf), rf, PI / 2.0, 0.0, n));
            pts.extend(arc_points((back - rf, -(hw - rf)), rf, 0.0, -PI / 2.0, n));
            pts.push((x0, -hw));
            pts
        };

        let mut frame = trace(hw + t, depth + t, rf + t);
        let mut inner = trace(hw, depth, rf);
        inner.reverse();
        frame.extend(inner);
        frame.push(frame[0]);
        fig.add_mirrored(Feature::new("goal_frame", frame, c.get("goal_frame"), 11));

        let mut fill = trace(hw, depth, rf);
        fill.push(fill[0]);
        fig.add_mirrored(Feature::new("goal_fill", fill, c.get("goal_fill"), 5));

        // Goalkeeper's restricted area: the trapezoid behind the goal
        // line, 22' across at the line widening to 28' at the end boards.
        let half_l = d.half_length();
        let polys = vec![
            vec![
                (x0, 11.0),
                (half_l, 14.0),
                (half_l, 14.0 + t),
                (x0, 11.0 + t),
                (x0, 11.0),
            ],
            vec![
                (x0, -11.0 - t),
                (half_l, -14.0 - t),
                (half_l, -14.0),
                (x0, -11.0),
                (x0, -11.0 - t),
            ],
        ];
        fig.add_mirrored(Feature::with_polygons(
            "goalkeepers_restricted_area",
            polys,
            c.get("goalkeepers_restricted_area"),
            10,
        ));
    }
}
