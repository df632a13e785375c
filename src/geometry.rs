//! Core geometry types: Point, Size, Edges, Line, Axis.
//!
//! These are the foundational coordinate types used throughout rectify for
//! positioning and sizing rectangles. All coordinates are `f64` pixels.

use std::fmt;

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// One of the two coordinate axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The other axis.
    #[inline]
    pub const fn opposite(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A point in two-dimensional space.
///
/// Movement operations mutate in place and return `&mut Self` so they can be
/// chained.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the point by the given deltas.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// Move `by` pixels along the straight line towards `target`.
    ///
    /// A zero-length direction (the point already sits on `target`) leaves
    /// the point unchanged.
    pub fn move_towards(&mut self, by: f64, target: Point) -> &mut Self {
        let length = self.distance_to(target);
        if length == 0.0 {
            return self;
        }
        let factor = by / length;
        self.translate((target.x - self.x) * factor, (target.y - self.y) * factor)
    }

    /// Move `by` pixels along the straight line away from `target`.
    pub fn move_away_from(&mut self, by: f64, target: Point) -> &mut Self {
        let length = self.distance_to(target);
        if length == 0.0 {
            return self;
        }
        let factor = by / length;
        self.translate((self.x - target.x) * factor, (self.y - target.y) * factor)
    }

    /// Round both coordinates to the nearest integer.
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        self.x = self.x.round();
        self.y = self.y.round();
        self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// How [`Size::scale`] fits one size into another.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScaleMode {
    /// Take the target dimensions exactly, ignoring aspect ratio.
    Equal,
    /// Largest aspect-preserving size that fits inside the target.
    Contain,
    /// Smallest aspect-preserving size that covers the target.
    Cover,
}

/// The size of a two-dimensional object (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale to fit the rectangle described by `other`, according to `mode`.
    ///
    /// `Contain` and `Cover` preserve the current aspect ratio; non-negative
    /// dimensions stay non-negative.
    pub fn scale(&mut self, other: Size, mode: ScaleMode) -> &mut Self {
        if mode == ScaleMode::Equal {
            self.width = other.width;
            self.height = other.height;
            return self;
        }

        let aspect_ratio = self.width / self.height;
        let scaled_width = other.height * aspect_ratio;

        let use_height = match mode {
            ScaleMode::Contain => scaled_width <= other.width,
            _ => scaled_width >= other.width,
        };

        if use_height {
            self.width = scaled_width;
            self.height = other.height;
        } else {
            self.width = other.width;
            self.height = other.width / aspect_ratio;
        }

        self
    }

    /// Swap the width and height values.
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        std::mem::swap(&mut self.width, &mut self.height);
        self
    }
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

/// Per-edge values around the four sides of a rectangle, used for border,
/// margin, padding, and parent-relative offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    /// Zero on all sides.
    pub const ZERO: Edges = Edges { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Create edges with explicit values for each side.
    #[inline]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: f64) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// A line in two-dimensional space, described by two points on it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    /// Create a line through two points.
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Create a line from slope `m` and y-intercept `b`.
    #[inline]
    pub fn from_slope_intercept(m: f64, b: f64) -> Self {
        Self {
            p1: Point::new(0.0, b),
            p2: Point::new(1.0, m + b),
        }
    }

    /// The slope of the line, or `None` for vertical lines.
    pub fn slope(&self) -> Option<f64> {
        let dx = self.p1.x - self.p2.x;
        if dx == 0.0 {
            return None;
        }
        Some((self.p1.y - self.p2.y) / dx)
    }

    /// The y-intercept, or `None` when the slope is undefined.
    pub fn intercept(&self) -> Option<f64> {
        self.slope().map(|m| self.p1.y - m * self.p1.x)
    }

    /// A copy of this line shifted by the given deltas.
    pub fn translated(&self, dx: f64, dy: f64) -> Line {
        let mut p1 = self.p1;
        let mut p2 = self.p2;
        p1.translate(dx, dy);
        p2.translate(dx, dy);
        Line::new(p1, p2)
    }

    /// The point where this line crosses `other`.
    ///
    /// Parallel or coincident lines have no single crossing point and yield
    /// `None`.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let a1 = self.p1;
        let a2 = self.p2;
        let b1 = other.p1;
        let b2 = other.p2;

        let ua_t = (b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x);
        let u_b = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);

        if u_b == 0.0 {
            return None;
        }

        let ua = ua_t / u_b;
        Some(Point::new(
            a1.x + ua * (a2.x - a1.x),
            a1.y + ua * (a2.y - a1.y),
        ))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Point
    // -----------------------------------------------------------------------

    #[test]
    fn point_new_and_default() {
        assert_eq!(Point::new(3.0, -7.0), Point { x: 3.0, y: -7.0 });
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }

    #[test]
    fn point_translate_chains() {
        let mut p = Point::new(1.0, 2.0);
        p.translate(3.0, 4.0).translate(-1.0, -1.0);
        assert_eq!(p, Point::new(3.0, 5.0));
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn point_move_towards() {
        let mut p = Point::new(0.0, 0.0);
        p.move_towards(5.0, Point::new(10.0, 0.0));
        assert_eq!(p, Point::new(5.0, 0.0));

        let mut q = Point::new(0.0, 0.0);
        q.move_towards(5.0, Point::new(6.0, 8.0));
        assert_eq!(q, Point::new(3.0, 4.0));
    }

    #[test]
    fn point_move_away_from() {
        let mut p = Point::new(5.0, 0.0);
        p.move_away_from(5.0, Point::new(10.0, 0.0));
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn point_move_towards_self_is_noop() {
        let mut p = Point::new(2.0, 3.0);
        p.move_towards(10.0, Point::new(2.0, 3.0));
        assert_eq!(p, Point::new(2.0, 3.0));

        p.move_away_from(10.0, Point::new(2.0, 3.0));
        assert_eq!(p, Point::new(2.0, 3.0));
    }

    #[test]
    fn point_round() {
        let mut p = Point::new(1.4, 2.6);
        p.round();
        assert_eq!(p, Point::new(1.0, 3.0));
    }

    // -----------------------------------------------------------------------
    // Size
    // -----------------------------------------------------------------------

    #[test]
    fn size_scale_equal() {
        let mut s = Size::new(100.0, 50.0);
        s.scale(Size::new(30.0, 40.0), ScaleMode::Equal);
        assert_eq!(s, Size::new(30.0, 40.0));
    }

    #[test]
    fn size_scale_contain_wide() {
        // 2:1 into a 100x100 box -> 100x50
        let mut s = Size::new(200.0, 100.0);
        s.scale(Size::new(100.0, 100.0), ScaleMode::Contain);
        assert_eq!(s, Size::new(100.0, 50.0));
    }

    #[test]
    fn size_scale_contain_tall() {
        // 1:2 into a 100x100 box -> 50x100
        let mut s = Size::new(100.0, 200.0);
        s.scale(Size::new(100.0, 100.0), ScaleMode::Contain);
        assert_eq!(s, Size::new(50.0, 100.0));
    }

    #[test]
    fn size_scale_cover() {
        // 2:1 covering a 100x100 box -> 200x100
        let mut s = Size::new(200.0, 100.0);
        s.scale(Size::new(100.0, 100.0), ScaleMode::Cover);
        assert_eq!(s, Size::new(200.0, 100.0));

        // 1:2 covering a 100x100 box -> 100x200
        let mut t = Size::new(100.0, 200.0);
        t.scale(Size::new(100.0, 100.0), ScaleMode::Cover);
        assert_eq!(t, Size::new(100.0, 200.0));
    }

    #[test]
    fn size_scale_same_aspect() {
        let mut s = Size::new(20.0, 10.0);
        s.scale(Size::new(100.0, 50.0), ScaleMode::Contain);
        assert_eq!(s, Size::new(100.0, 50.0));
    }

    #[test]
    fn size_transpose() {
        let mut s = Size::new(80.0, 24.0);
        s.transpose();
        assert_eq!(s, Size::new(24.0, 80.0));
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    #[test]
    fn edges_constructors() {
        assert_eq!(
            Edges::new(1.0, 2.0, 3.0, 4.0),
            Edges { top: 1.0, right: 2.0, bottom: 3.0, left: 4.0 }
        );
        assert_eq!(Edges::all(5.0), Edges::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(Edges::ZERO, Edges::default());
    }

    #[test]
    fn edges_extents() {
        let e = Edges::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(e.horizontal(), 6.0); // left(4) + right(2)
        assert_eq!(e.vertical(), 4.0); // top(1) + bottom(3)
    }

    // -----------------------------------------------------------------------
    // Line
    // -----------------------------------------------------------------------

    #[test]
    fn line_slope_and_intercept() {
        let l = Line::new(Point::new(0.0, 1.0), Point::new(2.0, 5.0));
        assert_eq!(l.slope(), Some(2.0));
        assert_eq!(l.intercept(), Some(1.0));
    }

    #[test]
    fn line_vertical_has_no_slope() {
        let l = Line::new(Point::new(3.0, 0.0), Point::new(3.0, 10.0));
        assert_eq!(l.slope(), None);
        assert_eq!(l.intercept(), None);
    }

    #[test]
    fn line_from_slope_intercept_roundtrip() {
        let l = Line::from_slope_intercept(0.5, -2.0);
        assert_eq!(l.slope(), Some(0.5));
        assert_eq!(l.intercept(), Some(-2.0));
    }

    #[test]
    fn line_translated_is_pure() {
        let l = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let moved = l.translated(2.0, 3.0);
        assert_eq!(moved.p1, Point::new(2.0, 3.0));
        assert_eq!(moved.p2, Point::new(3.0, 4.0));
        assert_eq!(l.p1, Point::new(0.0, 0.0));
    }

    #[test]
    fn line_intersection_basic() {
        // y = x and y = -x + 4 cross at (2, 2)
        let a = Line::from_slope_intercept(1.0, 0.0);
        let b = Line::from_slope_intercept(-1.0, 4.0);
        assert_eq!(a.intersection(&b), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn line_intersection_with_vertical() {
        let a = Line::new(Point::new(3.0, -1.0), Point::new(3.0, 1.0));
        let b = Line::from_slope_intercept(2.0, 0.0);
        assert_eq!(a.intersection(&b), Some(Point::new(3.0, 6.0)));
    }

    #[test]
    fn line_intersection_parallel_is_none() {
        let a = Line::from_slope_intercept(1.0, 0.0);
        let b = Line::from_slope_intercept(1.0, 5.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn line_intersection_coincident_is_none() {
        let a = Line::from_slope_intercept(1.0, 0.0);
        let b = Line::new(Point::new(2.0, 2.0), Point::new(5.0, 5.0));
        assert_eq!(a.intersection(&b), None);
    }

    // -----------------------------------------------------------------------
    // Axis
    // -----------------------------------------------------------------------

    #[test]
    fn axis_opposite() {
        assert_eq!(Axis::X.opposite(), Axis::Y);
        assert_eq!(Axis::Y.opposite(), Axis::X);
    }
}
