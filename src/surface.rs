//! The boundary between the geometry core and whatever actually renders.
//!
//! A [`Surface`] implementor owns the real elements; the core only ever sees
//! opaque [`SurfaceHandle`]s, reads immutable [`SurfaceGeometry`] snapshots,
//! and hands back [`StyleMap`] batches. Nothing else crosses the boundary.

use slotmap::new_key_type;

use crate::geometry::{Edges, Point, Size};

new_key_type! {
    /// Opaque identifier for one element on a [`Surface`].
    pub struct SurfaceHandle;
}

/// A reference to zero or more surface elements, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceRef {
    /// The whole document.
    Document,
    /// The visible viewport.
    Viewport,
    /// A query the surface resolves however it likes (CSS selector,
    /// element name, ...).
    Selector(String),
    Handle(SurfaceHandle),
    Handles(Vec<SurfaceHandle>),
}

impl From<SurfaceHandle> for SurfaceRef {
    fn from(handle: SurfaceHandle) -> Self {
        SurfaceRef::Handle(handle)
    }
}

impl From<&str> for SurfaceRef {
    fn from(selector: &str) -> Self {
        SurfaceRef::Selector(selector.to_owned())
    }
}

/// CSS positioning scheme of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Positioning {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

impl Positioning {
    pub const fn as_str(self) -> &'static str {
        match self {
            Positioning::Static => "static",
            Positioning::Relative => "relative",
            Positioning::Absolute => "absolute",
            Positioning::Fixed => "fixed",
        }
    }
}

/// Which horizontal edge an element's style is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum XEdge {
    #[default]
    Left,
    Right,
}

/// Which vertical edge an element's style is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YEdge {
    #[default]
    Top,
    Bottom,
}

/// The edge pair an element's current style actually constrains.
///
/// An element styled with `right: 20px; left: auto` is anchored to its right
/// edge; writing `left` to it would fight the existing constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorPrecedence {
    pub x: XEdge,
    pub y: YEdge,
}

/// Snapshot of one element's current rendered geometry.
///
/// `offset` is the content origin in document coordinates; `width`/`height`
/// are the content box. `parent_relative` holds the element's offsets from
/// its offset parent (trailing edges measured to the parent's far edge), and
/// `parent_scroll` is `Some` when that parent is a scrolled container rather
/// than the document root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceGeometry {
    pub offset: Point,
    pub width: f64,
    pub height: f64,
    pub positioning: Positioning,
    pub precedence: AnchorPrecedence,
    pub border: Edges,
    pub margin: Edges,
    pub padding: Edges,
    pub parent_relative: Edges,
    pub parent_scroll: Option<Point>,
}

// ---------------------------------------------------------------------------
// Style batches
// ---------------------------------------------------------------------------

/// The style properties the reconciliation algorithm may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    Top,
    Left,
    Right,
    Bottom,
    Width,
    Height,
    Position,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
}

impl StyleProperty {
    /// The CSS property name.
    pub const fn as_str(self) -> &'static str {
        match self {
            StyleProperty::Top => "top",
            StyleProperty::Left => "left",
            StyleProperty::Right => "right",
            StyleProperty::Bottom => "bottom",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::Position => "position",
            StyleProperty::BorderTopWidth => "border-top-width",
            StyleProperty::BorderRightWidth => "border-right-width",
            StyleProperty::BorderBottomWidth => "border-bottom-width",
            StyleProperty::BorderLeftWidth => "border-left-width",
            StyleProperty::PaddingTop => "padding-top",
            StyleProperty::PaddingRight => "padding-right",
            StyleProperty::PaddingBottom => "padding-bottom",
            StyleProperty::PaddingLeft => "padding-left",
            StyleProperty::MarginTop => "margin-top",
            StyleProperty::MarginRight => "margin-right",
            StyleProperty::MarginBottom => "margin-bottom",
            StyleProperty::MarginLeft => "margin-left",
        }
    }
}

/// A style value: a pixel length, `auto`, or a passthrough keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    Length(f64),
    Auto,
    Keyword(&'static str),
}

/// An ordered batch of style writes.
///
/// Insertion order is preserved; re-setting a property overwrites in place.
/// NaN lengths are dropped at insertion so a bad computation upstream cannot
/// poison the whole batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(StyleProperty, StyleValue)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a property. NaN lengths are silently skipped.
    pub fn set(&mut self, prop: StyleProperty, value: StyleValue) {
        if let StyleValue::Length(v) = value {
            if v.is_nan() {
                return;
            }
        }
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == prop) {
            entry.1 = value;
        } else {
            self.entries.push((prop, value));
        }
    }

    pub fn get(&self, prop: StyleProperty) -> Option<&StyleValue> {
        self.entries.iter().find(|(p, _)| *p == prop).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains(&self, prop: StyleProperty) -> bool {
        self.get(prop).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        self.entries.iter().map(|(p, v)| (*p, v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// The collaborator that owns real elements.
///
/// Implementors resolve references to handles, answer geometry reads, accept
/// style batches, and report document/viewport extents. The geometry core
/// performs no other I/O.
pub trait Surface {
    /// Resolve a reference to concrete handles. `Document` and `Viewport`
    /// resolve to no handles; they are special-cased by the callers that
    /// accept them.
    fn resolve(&self, r: &SurfaceRef) -> Vec<SurfaceHandle>;

    /// Current rendered geometry of one element.
    fn read_geometry(&self, handle: SurfaceHandle) -> SurfaceGeometry;

    /// Apply a batch of style writes to one element.
    fn write_styles(&mut self, handle: SurfaceHandle, styles: &StyleMap);

    /// Stable identity token for a handle, for external caching.
    fn identify(&self, handle: SurfaceHandle) -> u64;

    fn document_size(&self) -> Size;

    fn viewport_size(&self) -> Size;

    /// Current viewport scroll position.
    fn scroll_offset(&self) -> Point;
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_map_preserves_insertion_order() {
        let mut map = StyleMap::new();
        map.set(StyleProperty::Width, StyleValue::Length(10.0));
        map.set(StyleProperty::Top, StyleValue::Length(5.0));
        map.set(StyleProperty::Position, StyleValue::Keyword("absolute"));

        let props: Vec<_> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(
            props,
            vec![StyleProperty::Width, StyleProperty::Top, StyleProperty::Position]
        );
    }

    #[test]
    fn style_map_overwrites_in_place() {
        let mut map = StyleMap::new();
        map.set(StyleProperty::Left, StyleValue::Length(1.0));
        map.set(StyleProperty::Width, StyleValue::Length(2.0));
        map.set(StyleProperty::Left, StyleValue::Auto);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(StyleProperty::Left), Some(&StyleValue::Auto));
        let props: Vec<_> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(props, vec![StyleProperty::Left, StyleProperty::Width]);
    }

    #[test]
    fn style_map_skips_nan_lengths() {
        let mut map = StyleMap::new();
        map.set(StyleProperty::Width, StyleValue::Length(f64::NAN));
        assert!(map.is_empty());
        assert!(!map.contains(StyleProperty::Width));
    }

    #[test]
    fn nan_does_not_clobber_existing_value() {
        let mut map = StyleMap::new();
        map.set(StyleProperty::Width, StyleValue::Length(10.0));
        map.set(StyleProperty::Width, StyleValue::Length(f64::NAN));
        assert_eq!(map.get(StyleProperty::Width), Some(&StyleValue::Length(10.0)));
    }

    #[test]
    fn property_css_names() {
        assert_eq!(StyleProperty::BorderTopWidth.as_str(), "border-top-width");
        assert_eq!(StyleProperty::MarginLeft.as_str(), "margin-left");
        assert_eq!(StyleProperty::Position.as_str(), "position");
    }

    #[test]
    fn surface_ref_conversions() {
        assert_eq!(
            SurfaceRef::from("#main"),
            SurfaceRef::Selector("#main".to_owned())
        );
    }

    #[test]
    fn default_geometry_is_static_top_left() {
        let geo = SurfaceGeometry::default();
        assert_eq!(geo.positioning, Positioning::Static);
        assert_eq!(geo.precedence.x, XEdge::Left);
        assert_eq!(geo.precedence.y, YEdge::Top);
        assert_eq!(geo.parent_scroll, None);
    }
}
