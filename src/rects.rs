//! Batch operations over lists of rectangles: extrema, alignment, even
//! distribution, and bulk surface application.
//!
//! Everything here is generic over [`Rectangular`], so plain [`Rect`]s and
//! [`BoxRect`]s mix freely in one list.

use crate::box_rect::BoxRect;
use crate::geometry::{Axis, Point};
use crate::rect::Rectangular;
use crate::surface::Surface;

/// How [`align`] lines rectangles up on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

/// The minimum leading edge (`left` or `top`) among the normalized
/// rectangles, or `None` for an empty list.
pub fn min<R: Rectangular>(list: &[R], axis: Axis) -> Option<f64> {
    list.iter()
        .map(|r| {
            let rect = r.rect().normalized();
            match axis {
                Axis::X => rect.left,
                Axis::Y => rect.top,
            }
        })
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
}

/// The maximum trailing edge (`right` or `bottom`) among the normalized
/// rectangles, or `None` for an empty list.
pub fn max<R: Rectangular>(list: &[R], axis: Axis) -> Option<f64> {
    list.iter()
        .map(|r| {
            let rect = r.rect().normalized();
            match axis {
                Axis::X => rect.right(),
                Axis::Y => rect.bottom(),
            }
        })
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
}

/// Move every rectangle so it shares one coordinate on `axis`: the list's
/// minimum for leading alignments, maximum for trailing ones, and the
/// midpoint between the two for `Center`. The other axis is untouched.
///
/// Alignments that do not belong to `axis` (e.g. `Top` on `Axis::X`) leave
/// the list unchanged.
pub fn align<R: Rectangular>(list: &mut [R], axis: Axis, alignment: Alignment) {
    let (Some(lo), Some(hi)) = (min(list, axis), max(list, axis)) else {
        return;
    };

    for r in list.iter_mut() {
        let rect = r.rect_mut();
        match (axis, alignment) {
            (Axis::X, Alignment::Left) => {
                rect.move_left(lo);
            }
            (Axis::X, Alignment::Right) => {
                rect.move_right(hi);
            }
            (Axis::X, Alignment::Center) => {
                let y = rect.center().y;
                rect.move_center(Point::new(lo + (hi - lo) / 2.0, y));
            }
            (Axis::Y, Alignment::Top) => {
                rect.move_top(lo);
            }
            (Axis::Y, Alignment::Bottom) => {
                rect.move_bottom(hi);
            }
            (Axis::Y, Alignment::Center) => {
                let x = rect.center().x;
                rect.move_center(Point::new(x, lo + (hi - lo) / 2.0));
            }
            _ => {}
        }
    }
}

/// Spread the rectangles evenly along `axis` between the list's current
/// extremes, in list order.
///
/// The gap between neighbors is the leftover span divided among the gaps;
/// the first rectangle is anchored at the minimum. Lists shorter than two
/// elements are left unmoved.
pub fn distribute<R: Rectangular>(list: &mut [R], axis: Axis) {
    let (Some(lo), Some(hi)) = (min(list, axis), max(list, axis)) else {
        return;
    };

    let total: f64 = list
        .iter()
        .map(|r| match axis {
            Axis::X => r.rect().width,
            Axis::Y => r.rect().height,
        })
        .sum();

    let spacing = if list.len() < 2 {
        0.0
    } else {
        ((hi - lo - total) / (list.len() - 1) as f64).abs()
    };

    let mut cursor = lo;
    for r in list.iter_mut() {
        let rect = r.rect_mut();
        match axis {
            Axis::X => {
                rect.move_left(cursor);
                cursor = rect.right() + spacing;
            }
            Axis::Y => {
                rect.move_top(cursor);
                cursor = rect.bottom() + spacing;
            }
        }
    }
}

/// Reconcile every rectangle in the list against its own bound element.
pub fn apply<S: Surface>(list: &[BoxRect], surface: &mut S) {
    for rect in list {
        rect.apply(surface);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
