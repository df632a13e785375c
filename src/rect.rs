//! Axis-aligned rectangles: the `Rect` algebra and relative positioning.
//!
//! A `Rect` stores `top`, `left`, `width`, `height`; `right` and `bottom` are
//! derived views. Width and height may be negative ("unnormalized"); every
//! combinator normalizes its operands and returns a fresh value, while the
//! `move*` family mutates in place and returns `&mut Self` for chaining.

use std::fmt;

use crate::geometry::{Axis, Point};
use crate::position::{Horizontal, Position, Vertical};

/// Errors from rectangle construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// Fewer than two resolvable edges were given on an axis, so the
    /// rectangle's extent on that axis is undefined.
    #[error("not enough edges to resolve the {0:?} axis of a rectangle")]
    Underconstrained(Axis),
}

/// An axis-aligned rectangle in two-dimensional space.
///
/// The four stored fields are authoritative; all edge/corner/center accessors
/// are pure functions of them. Assigning a derived edge goes through
/// [`Rect::set_right`]/[`Rect::set_bottom`], which adjust the trailing
/// dimension and never move `left`/`top`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Builds a [`Rect`] from any four edge/size parameters that resolve both
/// axes, e.g. `top` + `bottom` + `left` + `width`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectBuilder {
    top: Option<f64>,
    left: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
}

impl RectBuilder {
    pub fn top(mut self, v: f64) -> Self {
        self.top = Some(v);
        self
    }

    pub fn left(mut self, v: f64) -> Self {
        self.left = Some(v);
        self
    }

    pub fn width(mut self, v: f64) -> Self {
        self.width = Some(v);
        self
    }

    pub fn height(mut self, v: f64) -> Self {
        self.height = Some(v);
        self
    }

    pub fn right(mut self, v: f64) -> Self {
        self.right = Some(v);
        self
    }

    pub fn bottom(mut self, v: f64) -> Self {
        self.bottom = Some(v);
        self
    }

    /// Resolve the collected parameters into a rectangle.
    ///
    /// Missing values derive from their counterparts: `top` from
    /// `bottom - height`, `left` from `right - width`, `width` from
    /// `right - left`, `height` from `bottom - top`. An axis that cannot be
    /// resolved fails with [`GeometryError::Underconstrained`].
    pub fn finish(self) -> Result<Rect, GeometryError> {
        let top = match (self.top, self.bottom, self.height) {
            (Some(t), _, _) => t,
            (None, Some(b), Some(h)) => b - h,
            _ => return Err(GeometryError::Underconstrained(Axis::Y)),
        };
        let left = match (self.left, self.right, self.width) {
            (Some(l), _, _) => l,
            (None, Some(r), Some(w)) => r - w,
            _ => return Err(GeometryError::Underconstrained(Axis::X)),
        };
        let width = match (self.width, self.right) {
            (Some(w), _) => w,
            (None, Some(r)) => r - left,
            (None, None) => return Err(GeometryError::Underconstrained(Axis::X)),
        };
        let height = match (self.height, self.bottom) {
            (Some(h), _) => h,
            (None, Some(b)) => b - top,
            (None, None) => return Err(GeometryError::Underconstrained(Axis::Y)),
        };

        Ok(Rect { top, left, width, height })
    }
}

impl Rect {
    /// Create a rectangle from its top-left corner and dimensions.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    /// Start building a rectangle from an arbitrary edge/size combination.
    #[inline]
    pub fn build() -> RectBuilder {
        RectBuilder::default()
    }

    // -- derived edges ------------------------------------------------------

    /// The right edge: `left + width`.
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Set the right edge by adjusting `width`; `left` does not move.
    #[inline]
    pub fn set_right(&mut self, v: f64) {
        self.width = v - self.left;
    }

    /// The bottom edge: `top + height`.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Set the bottom edge by adjusting `height`; `top` does not move.
    #[inline]
    pub fn set_bottom(&mut self, v: f64) {
        self.height = v - self.top;
    }

    // -- corners and center -------------------------------------------------

    /// The midpoint of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.left + (self.right() - self.left) / 2.0,
            self.top + (self.bottom() - self.top) / 2.0,
        )
    }

    /// Move so the center lands on `p`.
    pub fn set_center(&mut self, p: Point) -> &mut Self {
        self.move_center(p)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Pin the top-left corner to `p`, stretching the rectangle (the
    /// opposite corner stays put).
    pub fn set_top_left(&mut self, p: Point) {
        let (right, bottom) = (self.right(), self.bottom());
        self.top = p.y;
        self.left = p.x;
        self.set_right(right);
        self.set_bottom(bottom);
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top)
    }

    pub fn set_top_right(&mut self, p: Point) {
        let bottom = self.bottom();
        self.top = p.y;
        self.set_right(p.x);
        self.set_bottom(bottom);
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom())
    }

    pub fn set_bottom_left(&mut self, p: Point) {
        let right = self.right();
        self.left = p.x;
        self.set_right(right);
        self.set_bottom(p.y);
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn set_bottom_right(&mut self, p: Point) {
        self.set_right(p.x);
        self.set_bottom(p.y);
    }

    // -- movement -----------------------------------------------------------

    /// Shift the rectangle by the given deltas; dimensions are unchanged.
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.left += dx;
        self.top += dy;
        self
    }

    /// Move the top-left corner to `p` without resizing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.translate(p.x - self.left, p.y - self.top)
    }

    pub fn move_top_left(&mut self, p: Point) -> &mut Self {
        self.move_to(p)
    }

    pub fn move_top_right(&mut self, p: Point) -> &mut Self {
        self.move_to(Point::new(p.x - self.width, p.y))
    }

    pub fn move_bottom_left(&mut self, p: Point) -> &mut Self {
        self.move_to(Point::new(p.x, p.y - self.height))
    }

    pub fn move_bottom_right(&mut self, p: Point) -> &mut Self {
        self.move_to(Point::new(p.x - self.width, p.y - self.height))
    }

    pub fn move_top(&mut self, y: f64) -> &mut Self {
        self.move_to(Point::new(self.left, y))
    }

    pub fn move_left(&mut self, x: f64) -> &mut Self {
        self.move_to(Point::new(x, self.top))
    }

    pub fn move_right(&mut self, x: f64) -> &mut Self {
        self.move_to(Point::new(x - self.width, self.top))
    }

    pub fn move_bottom(&mut self, y: f64) -> &mut Self {
        self.move_to(Point::new(self.left, y - self.height))
    }

    /// Translate so the center lands on `p`.
    pub fn move_center(&mut self, p: Point) -> &mut Self {
        let center = self.center();
        self.translate(p.x - center.x, p.y - center.y)
    }

    // -- queries ------------------------------------------------------------

    /// Inclusive bounds test against the raw (possibly unnormalized) edges.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Whether `other` lies entirely within this rectangle, edges inclusive.
    /// Both operands are normalized first.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        let own = self.normalized();
        let other = other.normalized();

        if other.left < own.left || other.right() > own.right() {
            return false;
        }
        if other.top < own.top || other.bottom() > own.bottom() {
            return false;
        }

        true
    }

    /// Whether the rectangles overlap *without* one containing the other.
    ///
    /// Full containment counts as not intersecting; callers wanting plain
    /// geometric overlap should combine this with [`Rect::contains_rect`].
    pub fn intersects(&self, other: &Rect) -> bool {
        let own = self.normalized();
        let other = other.normalized();

        // strictly separated on either axis
        if own.left > other.right() || own.right() < other.left {
            return false;
        }
        if own.top > other.bottom() || own.bottom() < other.top {
            return false;
        }

        // nested either way, not intersecting
        if own.contains_rect(&other) || other.contains_rect(&own) {
            return false;
        }

        true
    }

    /// The bounding box of both normalized operands.
    pub fn united(&self, other: &Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();

        let top = a.top.min(b.top);
        let left = a.left.min(b.left);
        Rect {
            top,
            left,
            width: a.right().max(b.right()) - left,
            height: a.bottom().max(b.bottom()) - top,
        }
    }

    /// The overlapping region, or `None` when the rectangles do not
    /// intersect (per the [`Rect::intersects`] definition).
    pub fn intersected(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }

        let a = self.normalized();
        let b = other.normalized();

        let top = a.top.max(b.top);
        let left = a.left.max(b.left);
        Some(Rect {
            top,
            left,
            width: a.right().min(b.right()) - left,
            height: a.bottom().min(b.bottom()) - top,
        })
    }

    /// A congruent rectangle with non-negative width and height, flipping
    /// `left`/`top` to the lesser edge. The receiver is not mutated.
    pub fn normalized(&self) -> Rect {
        let mut rect = *self;
        if rect.width < 0.0 {
            rect.left = rect.right();
            rect.width = rect.width.abs();
        }
        if rect.height < 0.0 {
            rect.top = rect.bottom();
            rect.height = rect.height.abs();
        }
        rect
    }

    /// The concrete point on this rectangle named by `pos` (edge or center
    /// per axis).
    pub fn point_at(&self, pos: Position) -> Point {
        let center = self.center();
        let x = match pos.x {
            Horizontal::Left => self.left,
            Horizontal::Right => self.right(),
            Horizontal::Center => center.x,
        };
        let y = match pos.y {
            Vertical::Top => self.top,
            Vertical::Bottom => self.bottom(),
            Vertical::Center => center.y,
        };
        Point::new(x, y)
    }

    /// Place this rectangle relative to another one.
    ///
    /// Aligns the point on `self` named by `my` with the point on `of` named
    /// by `at`: the rectangle is first centered on `of` as a neutral
    /// baseline, then each axis with an edge keyword is snapped to the
    /// destination, then the optional offset is applied.
    pub fn position(&mut self, args: &Placement) -> &mut Self {
        let dest = args.of.point_at(args.at);

        self.move_center(args.of.center());

        match args.my.x {
            Horizontal::Left => {
                self.move_left(dest.x);
            }
            Horizontal::Right => {
                self.move_right(dest.x);
            }
            Horizontal::Center => {}
        }

        match args.my.y {
            Vertical::Top => {
                self.move_top(dest.y);
            }
            Vertical::Bottom => {
                self.move_bottom(dest.y);
            }
            Vertical::Center => {}
        }

        match args.offset {
            None => {}
            Some(Offset::Absolute { x, y }) => {
                self.translate(x, y);
            }
            Some(Offset::Towards { by, target }) => {
                let mut center = self.center();
                center.move_towards(by, target);
                self.move_center(center);
            }
            Some(Offset::AwayFrom { by, target }) => {
                let mut center = self.center();
                center.move_away_from(by, target);
                self.move_center(center);
            }
        }

        self
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect t:{} l:{} r:{} b:{} w:{} h:{}",
            self.top,
            self.left,
            self.right(),
            self.bottom(),
            self.width,
            self.height
        )
    }
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Arguments for [`Rect::position`]: align the point on the receiver named by
/// `my` with the point on `of` named by `at`, then nudge by `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub my: Position,
    pub at: Position,
    pub of: Rect,
    pub offset: Option<Offset>,
}

/// Final adjustment applied after relative placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Plain translation.
    Absolute { x: f64, y: f64 },
    /// Move the center `by` pixels towards `target`.
    Towards { by: f64, target: Point },
    /// Move the center `by` pixels away from `target`.
    AwayFrom { by: f64, target: Point },
}

// ---------------------------------------------------------------------------
// Rectangular
// ---------------------------------------------------------------------------

/// Anything that exposes a positional [`Rect`]. Batch operations and
/// box-model combinators are generic over this instead of inspecting
/// concrete types.
pub trait Rectangular {
    fn rect(&self) -> &Rect;
    fn rect_mut(&mut self) -> &mut Rect;
}

impl Rectangular for Rect {
    #[inline]
    fn rect(&self) -> &Rect {
        self
    }

    #[inline]
    fn rect_mut(&mut self) -> &mut Rect {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
