//! Footprint builders for the six parametric shape families.
//!
//! Each builder validates its parameters and returns a [`Footprint`]: the
//! rectilinear outline loop(s) of the plan plus the rectangular wings that
//! tile it. Plan coordinates are `(x, y)` tuples in meters, with the
//! bounding box anchored at the origin.

use crate::error::{Result, ShapeError, require_less_than, require_positive};
use crate::geom::EPS;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in plan coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Closed containment check with a small tolerance.
    pub fn contains(&self, pt: (f64, f64)) -> bool {
        pt.0 >= self.x0 - EPS
            && pt.0 <= self.x1 + EPS
            && pt.1 >= self.y0 - EPS
            && pt.1 <= self.y1 + EPS
    }

    /// Corner loop in counter-clockwise order.
    pub fn corners(&self) -> Vec<(f64, f64)> {
        vec![
            (self.x0, self.y0),
            (self.x1, self.y0),
            (self.x1, self.y1),
            (self.x0, self.y1),
        ]
    }
}

/// Sides of a wing rectangle, in counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    South = 0,
    East = 1,
    North = 2,
    West = 3,
}

/// How the core boundary is placed at one side of a wing.
///
/// `Inset` pulls the core in by the perimeter zone depth (sides that carry
/// exterior edges); `Outset` pushes it out by the same depth across a fully
/// shared wing cut, so that the cores of adjacent wings tile exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreRule {
    Inset,
    Outset,
}

/// One rectangular lobe of a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wing {
    pub rect: Rect,
    /// Core placement at the [south, east, north, west] sides.
    pub core_rules: [CoreRule; 4],
}

impl Wing {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            core_rules: [CoreRule::Inset; 4],
        }
    }

    pub fn outset(mut self, side: Side) -> Self {
        self.core_rules[side as usize] = CoreRule::Outset;
        self
    }

    /// Core rectangle of this wing for the given perimeter zone depth.
    ///
    /// May be inverted (nonpositive width or height) when the wing is too
    /// small; callers must check before using it.
    pub fn core_rect(&self, depth: f64) -> Rect {
        let sign = |side: Side| match self.core_rules[side as usize] {
            CoreRule::Inset => depth,
            CoreRule::Outset => -depth,
        };
        Rect::new(
            self.rect.x0 + sign(Side::West),
            self.rect.y0 + sign(Side::South),
            self.rect.x1 - sign(Side::East),
            self.rect.y1 - sign(Side::North),
        )
    }
}

/// A validated 2D plan: outline loop(s) plus the wing decomposition.
///
/// The outer loop is counter-clockwise; the optional hole (Courtyard) is
/// clockwise, so the plate interior always lies to the left of every edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub shape: &'static str,
    pub outer: Vec<(f64, f64)>,
    pub hole: Option<Vec<(f64, f64)>>,
    pub wings: Vec<Wing>,
}

impl Footprint {
    pub fn loops(&self) -> Vec<&[(f64, f64)]> {
        let mut loops: Vec<&[(f64, f64)]> = vec![&self.outer];
        if let Some(hole) = &self.hole {
            loops.push(hole);
        }
        loops
    }

    /// All outline edges (outer loop first, then the hole loop).
    pub fn edges(&self) -> Vec<((f64, f64), (f64, f64))> {
        let mut edges = Vec::new();
        for lp in self.loops() {
            let n = lp.len();
            for i in 0..n {
                edges.push((lp[i], lp[(i + 1) % n]));
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.outer.len() + self.hole.as_ref().map_or(0, |h| h.len())
    }

    /// Plate area: shoelace over the outer loop minus the hole.
    pub fn area(&self) -> f64 {
        let mut area = signed_area(&self.outer);
        if let Some(hole) = &self.hole {
            // The hole loop is clockwise, so its signed area is negative.
            area += signed_area(hole);
        }
        area
    }

    /// Total outline length, hole included.
    pub fn perimeter_length(&self) -> f64 {
        self.edges()
            .iter()
            .map(|(p, q)| ((q.0 - p.0).powi(2) + (q.1 - p.1).powi(2)).sqrt())
            .sum()
    }

    /// Bounding box of the outer loop.
    pub fn bbox(&self) -> Rect {
        let xs: Vec<f64> = self.outer.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = self.outer.iter().map(|p| p.1).collect();
        Rect::new(
            crate::vecutils::min(&xs),
            crate::vecutils::min(&ys),
            crate::vecutils::max(&xs),
            crate::vecutils::max(&ys),
        )
    }
}

/// Signed shoelace area; positive for counter-clockwise loops.
fn signed_area(lp: &[(f64, f64)]) -> f64 {
    let n = lp.len();
    let mut twice = 0.0;
    for i in 0..n {
        let (x0, y0) = lp[i];
        let (x1, y1) = lp[(i + 1) % n];
        twice += x0 * y1 - x1 * y0;
    }
    twice / 2.0
}

/// A parametric shape family that can produce a footprint.
pub trait Shape {
    /// Shape family name, used in generated building names.
    fn shape_name(&self) -> &'static str;

    /// Validates the parameters and builds the footprint.
    fn footprint(&self) -> Result<Footprint>;
}

/// A plain length x width bar.
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Shape for Rectangle {
    fn shape_name(&self) -> &'static str {
        "rectangle"
    }

    fn footprint(&self) -> Result<Footprint> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)?;

        let rect = Rect::new(0., 0., self.length, self.width);
        Ok(Footprint {
            shape: self.shape_name(),
            outer: rect.corners(),
            hole: None,
            wings: vec![Wing::new(rect)],
        })
    }
}

/// A rectangle with a centered rectangular courtyard hole.
#[derive(Debug, Clone, Copy)]
pub struct Courtyard {
    pub length: f64,
    pub width: f64,
    pub courtyard_length: f64,
    pub courtyard_width: f64,
}

impl Shape for Courtyard {
    fn shape_name(&self) -> &'static str {
        "courtyard"
    }

    fn footprint(&self) -> Result<Footprint> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)?;
        require_positive("courtyard_length", self.courtyard_length)?;
        require_positive("courtyard_width", self.courtyard_width)?;
        require_less_than(
            "courtyard_length",
            self.courtyard_length,
            self.length,
            "must be strictly less than length",
        )?;
        require_less_than(
            "courtyard_width",
            self.courtyard_width,
            self.width,
            "must be strictly less than width",
        )?;

        let (length, width) = (self.length, self.width);
        let hxl = (length - self.courtyard_length) / 2.0;
        let hxr = (length + self.courtyard_length) / 2.0;
        let hb = (width - self.courtyard_width) / 2.0;
        let ht = (width + self.courtyard_width) / 2.0;

        // Hole loop is clockwise so the ring interior stays on the left.
        let hole = vec![(hxl, hb), (hxl, ht), (hxr, ht), (hxr, hb)];

        let wings = vec![
            Wing::new(Rect::new(0., 0., length, hb)),
            Wing::new(Rect::new(0., ht, length, width)),
            Wing::new(Rect::new(0., hb, hxl, ht))
                .outset(Side::South)
                .outset(Side::North),
            Wing::new(Rect::new(hxr, hb, length, ht))
                .outset(Side::South)
                .outset(Side::North),
        ];

        Ok(Footprint {
            shape: self.shape_name(),
            outer: Rect::new(0., 0., length, width).corners(),
            hole: Some(hole),
            wings,
        })
    }
}

/// Two overlapping bars: a lower bar of the full length and an upper end
/// rising along the west facade.
#[derive(Debug, Clone, Copy)]
pub struct LShape {
    pub length: f64,
    pub width: f64,
    pub lower_end_width: f64,
    pub upper_end_length: f64,
}

impl Shape for LShape {
    fn shape_name(&self) -> &'static str {
        "l_shape"
    }

    fn footprint(&self) -> Result<Footprint> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)?;
        require_positive("lower_end_width", self.lower_end_width)?;
        require_positive("upper_end_length", self.upper_end_length)?;
        require_less_than(
            "lower_end_width",
            self.lower_end_width,
            self.width,
            "must be strictly less than width",
        )?;
        require_less_than(
            "upper_end_length",
            self.upper_end_length,
            self.length,
            "must be strictly less than length",
        )?;

        let (length, width) = (self.length, self.width);
        let b = self.lower_end_width;
        let a = self.upper_end_length;

        let outer = vec![(0., 0.), (length, 0.), (length, b), (a, b), (a, width), (0., width)];
        let wings = vec![
            Wing::new(Rect::new(0., 0., length, b)),
            Wing::new(Rect::new(0., b, a, width)).outset(Side::South),
        ];

        Ok(Footprint {
            shape: self.shape_name(),
            outer,
            hole: None,
            wings,
        })
    }
}

/// A full-length bar along the north facade with a stem hanging below it.
///
/// The stem spans `x in [left_end_offset, left_end_offset + lower_end_length]`
/// and must sit strictly inside the bar so the outline keeps 8 edges.
#[derive(Debug, Clone, Copy)]
pub struct TShape {
    pub length: f64,
    pub width: f64,
    pub upper_end_width: f64,
    pub lower_end_length: f64,
    pub left_end_offset: f64,
}

impl Shape for TShape {
    fn shape_name(&self) -> &'static str {
        "t_shape"
    }

    fn footprint(&self) -> Result<Footprint> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)?;
        require_positive("upper_end_width", self.upper_end_width)?;
        require_positive("lower_end_length", self.lower_end_length)?;
        require_positive("left_end_offset", self.left_end_offset)?;
        require_less_than(
            "upper_end_width",
            self.upper_end_width,
            self.width,
            "must be strictly less than width",
        )?;
        require_less_than(
            "left_end_offset",
            self.left_end_offset + self.lower_end_length,
            self.length,
            "left_end_offset + lower_end_length must be strictly less than length",
        )?;

        let (length, width) = (self.length, self.width);
        let yb = width - self.upper_end_width;
        let x0 = self.left_end_offset;
        let x1 = self.left_end_offset + self.lower_end_length;

        let outer = vec![
            (x0, 0.),
            (x1, 0.),
            (x1, yb),
            (length, yb),
            (length, width),
            (0., width),
            (0., yb),
            (x0, yb),
        ];
        let wings = vec![
            Wing::new(Rect::new(0., yb, length, width)),
            Wing::new(Rect::new(x0, 0., x1, yb)).outset(Side::North),
        ];

        Ok(Footprint {
            shape: self.shape_name(),
            outer,
            hole: None,
            wings,
        })
    }
}

/// Two end bars joined by a center bar: three wings, twelve outline edges.
///
/// The end bars share a baseline at `y = 0`; the offsets measure from the
/// top of each end bar down to the top of the center bar and must agree on
/// where that top sits.
#[derive(Debug, Clone, Copy)]
pub struct HShape {
    pub length: f64,
    pub left_width: f64,
    pub center_width: f64,
    pub right_width: f64,
    pub left_end_length: f64,
    pub right_end_length: f64,
    pub left_upper_end_offset: f64,
    pub right_upper_end_offset: f64,
}

impl Shape for HShape {
    fn shape_name(&self) -> &'static str {
        "h_shape"
    }

    fn footprint(&self) -> Result<Footprint> {
        require_positive("length", self.length)?;
        require_positive("left_width", self.left_width)?;
        require_positive("center_width", self.center_width)?;
        require_positive("right_width", self.right_width)?;
        require_positive("left_end_length", self.left_end_length)?;
        require_positive("right_end_length", self.right_end_length)?;
        require_positive("left_upper_end_offset", self.left_upper_end_offset)?;
        require_positive("right_upper_end_offset", self.right_upper_end_offset)?;
        require_less_than(
            "left_end_length",
            self.left_end_length + self.right_end_length,
            self.length,
            "left_end_length + right_end_length must be strictly less than length",
        )?;

        let ct = self.left_width - self.left_upper_end_offset;
        let ct_right = self.right_width - self.right_upper_end_offset;
        if (ct - ct_right).abs() > EPS {
            return Err(ShapeError::InvalidGeometry {
                param: "right_upper_end_offset",
                value: self.right_upper_end_offset,
                reason: "left and right offsets must describe the same center bar top",
            });
        }
        let cb = ct - self.center_width;
        if cb <= 0.0 {
            return Err(ShapeError::InvalidGeometry {
                param: "center_width",
                value: self.center_width,
                reason: "center bar must sit strictly inside both end bars",
            });
        }

        let length = self.length;
        let xl = self.left_end_length;
        let xr = length - self.right_end_length;

        let outer = vec![
            (0., 0.),
            (xl, 0.),
            (xl, cb),
            (xr, cb),
            (xr, 0.),
            (length, 0.),
            (length, self.right_width),
            (xr, self.right_width),
            (xr, ct),
            (xl, ct),
            (xl, self.left_width),
            (0., self.left_width),
        ];
        let wings = vec![
            Wing::new(Rect::new(0., 0., xl, self.left_width)),
            Wing::new(Rect::new(xr, 0., length, self.right_width)),
            Wing::new(Rect::new(xl, cb, xr, ct))
                .outset(Side::West)
                .outset(Side::East),
        ];

        Ok(Footprint {
            shape: self.shape_name(),
            outer,
            hole: None,
            wings,
        })
    }
}

/// Two end wings joined by a base bar, open to the north.
///
/// `left_end_offset` is the height of the base bar; each end wing rises
/// `left_end_length` / `right_end_length` above it.
#[derive(Debug, Clone, Copy)]
pub struct UShape {
    pub length: f64,
    pub left_width: f64,
    pub right_width: f64,
    pub left_end_length: f64,
    pub right_end_length: f64,
    pub left_end_offset: f64,
}

impl Shape for UShape {
    fn shape_name(&self) -> &'static str {
        "u_shape"
    }

    fn footprint(&self) -> Result<Footprint> {
        require_positive("length", self.length)?;
        require_positive("left_width", self.left_width)?;
        require_positive("right_width", self.right_width)?;
        require_positive("left_end_length", self.left_end_length)?;
        require_positive("right_end_length", self.right_end_length)?;
        require_positive("left_end_offset", self.left_end_offset)?;
        require_less_than(
            "left_width",
            self.left_width + self.right_width,
            self.length,
            "left_width + right_width must be strictly less than length",
        )?;

        let length = self.length;
        let base = self.left_end_offset;
        let wl = base + self.left_end_length;
        let wr = base + self.right_end_length;
        let xl = self.left_width;
        let xr = length - self.right_width;

        let outer = vec![
            (0., 0.),
            (length, 0.),
            (length, wr),
            (xr, wr),
            (xr, base),
            (xl, base),
            (xl, wl),
            (0., wl),
        ];
        let wings = vec![
            Wing::new(Rect::new(0., 0., xl, wl)),
            Wing::new(Rect::new(xr, 0., length, wr)),
            Wing::new(Rect::new(xl, 0., xr, base))
                .outset(Side::West)
                .outset(Side::East),
        ];

        Ok(Footprint {
            shape: self.shape_name(),
            outer,
            hole: None,
            wings,
        })
    }
}
