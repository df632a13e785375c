//! Border-box rectangles bound to surface elements.
//!
//! A `BoxRect` is a positional [`Rect`] in border-box terms plus the
//! border/margin/padding edge sets and an optional binding to the surface
//! element it describes. Its centerpiece is [`BoxRect::reconcile`]: turn the
//! difference between an element's current geometry and this rectangle into
//! the minimal batch of style writes that makes the element match.

use crate::geometry::{Edges, Point, Size};
use crate::rect::{GeometryError, Rect, RectBuilder, Rectangular};
use crate::surface::{
    Positioning, StyleMap, StyleProperty, StyleValue, Surface, SurfaceGeometry, SurfaceRef,
    XEdge, YEdge,
};

/// A rectangle carrying box-model state and a surface binding.
///
/// The positional part is border-box: `rect.width` spans content, padding,
/// and border. The binding is a weak association; a `BoxRect` never owns the
/// element it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxRect {
    rect: Rect,
    border: Edges,
    margin: Edges,
    padding: Edges,
    binding: Option<SurfaceRef>,
}

impl BoxRect {
    /// Wrap a plain rectangle with zero edges and no binding.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            rect,
            border: Edges::ZERO,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            binding: None,
        }
    }

    pub fn build() -> BoxRectBuilder {
        BoxRectBuilder::default()
    }

    // -- accessors ----------------------------------------------------------

    #[inline]
    pub fn border(&self) -> Edges {
        self.border
    }

    #[inline]
    pub fn margin(&self) -> Edges {
        self.margin
    }

    #[inline]
    pub fn padding(&self) -> Edges {
        self.padding
    }

    #[inline]
    pub fn binding(&self) -> Option<&SurfaceRef> {
        self.binding.as_ref()
    }

    pub fn bind(&mut self, binding: SurfaceRef) -> &mut Self {
        self.binding = Some(binding);
        self
    }

    pub fn unbind(&mut self) -> &mut Self {
        self.binding = None;
        self
    }

    // -- border/padding setters --------------------------------------------
    //
    // Growing an inner edge grows the border box by the same amount, so the
    // outer top/left never move. Margins live outside the box and store
    // plainly.

    pub fn set_border_top(&mut self, v: f64) -> &mut Self {
        self.rect.height += v - self.border.top;
        self.border.top = v;
        self
    }

    pub fn set_border_right(&mut self, v: f64) -> &mut Self {
        self.rect.width += v - self.border.right;
        self.border.right = v;
        self
    }

    pub fn set_border_bottom(&mut self, v: f64) -> &mut Self {
        self.rect.height += v - self.border.bottom;
        self.border.bottom = v;
        self
    }

    pub fn set_border_left(&mut self, v: f64) -> &mut Self {
        self.rect.width += v - self.border.left;
        self.border.left = v;
        self
    }

    pub fn set_padding_top(&mut self, v: f64) -> &mut Self {
        self.rect.height += v - self.padding.top;
        self.padding.top = v;
        self
    }

    pub fn set_padding_right(&mut self, v: f64) -> &mut Self {
        self.rect.width += v - self.padding.right;
        self.padding.right = v;
        self
    }

    pub fn set_padding_bottom(&mut self, v: f64) -> &mut Self {
        self.rect.height += v - self.padding.bottom;
        self.padding.bottom = v;
        self
    }

    pub fn set_padding_left(&mut self, v: f64) -> &mut Self {
        self.rect.width += v - self.padding.left;
        self.padding.left = v;
        self
    }

    pub fn set_border(&mut self, edges: Edges) -> &mut Self {
        self.set_border_top(edges.top)
            .set_border_right(edges.right)
            .set_border_bottom(edges.bottom)
            .set_border_left(edges.left)
    }

    pub fn set_padding(&mut self, edges: Edges) -> &mut Self {
        self.set_padding_top(edges.top)
            .set_padding_right(edges.right)
            .set_padding_bottom(edges.bottom)
            .set_padding_left(edges.left)
    }

    pub fn set_margin(&mut self, edges: Edges) -> &mut Self {
        self.margin = edges;
        self
    }

    // -- combinators --------------------------------------------------------

    /// Bounding box of both positional parts, keeping this rectangle's box
    /// model and binding.
    pub fn united<R: Rectangular>(&self, other: &R) -> BoxRect {
        self.restamped(self.rect.united(other.rect()))
    }

    /// Overlapping region of both positional parts, keeping this rectangle's
    /// box model and binding; `None` when they do not intersect.
    pub fn intersected<R: Rectangular>(&self, other: &R) -> Option<BoxRect> {
        self.rect.intersected(other.rect()).map(|r| self.restamped(r))
    }

    fn restamped(&self, rect: Rect) -> BoxRect {
        BoxRect {
            rect,
            border: self.border,
            margin: self.margin,
            padding: self.padding,
            binding: self.binding.clone(),
        }
    }

    // -- reconciliation -----------------------------------------------------

    /// Compute the style writes that would make an element at `current`
    /// match this rectangle.
    ///
    /// The border-box width/height convert to content-box targets by
    /// subtracting padding and border; top/left already describe the outer
    /// edge. A dimension counts as changed only when its *rounded* value
    /// differs from the rounded current one, so subpixel drift never
    /// triggers a write.
    ///
    /// Offsets are written as deltas on top of the element's existing
    /// parent-relative position, to whichever edge the element's style is
    /// anchored to; when the size on that axis also changed, the opposite
    /// edge is set to `auto` so it cannot constrain the box. Statically
    /// positioned elements that need an offset get `position: absolute`.
    /// Border, padding, and margin are authoritative and always written.
    pub fn reconcile(&self, current: &SurfaceGeometry) -> StyleMap {
        let next_top = self.rect.top;
        let next_left = self.rect.left;
        let next_width = self.rect.width - self.padding.horizontal() - self.border.horizontal();
        let next_height = self.rect.height - self.padding.vertical() - self.border.vertical();

        let top_changed = current.offset.y.round() != next_top.round();
        let left_changed = current.offset.x.round() != next_left.round();
        let width_changed = current.width.round() != next_width.round();
        let height_changed = current.height.round() != next_height.round();

        let mut styles = StyleMap::new();

        if width_changed {
            styles.set(StyleProperty::Width, StyleValue::Length(next_width.round()));
        }
        if height_changed {
            styles.set(StyleProperty::Height, StyleValue::Length(next_height.round()));
        }

        // Parent-relative offsets shifted by the absolute delta, so existing
        // relative/absolute anchoring is preserved rather than overwritten.
        let dx = next_left - current.offset.x;
        let dy = next_top - current.offset.y;
        let mut adjusted = Edges {
            top: (current.parent_relative.top + dy).round(),
            right: (-(current.parent_relative.right + dx)).round(),
            bottom: (-(current.parent_relative.bottom + dy)).round(),
            left: (current.parent_relative.left + dx).round(),
        };

        // A scrolled offset parent shifts the leading-edge coordinate space.
        if let Some(scroll) = current.parent_scroll {
            adjusted.top += scroll.y;
            adjusted.left += scroll.x;
        }

        if top_changed {
            match current.precedence.y {
                YEdge::Bottom => {
                    styles.set(StyleProperty::Bottom, StyleValue::Length(adjusted.bottom));
                    if height_changed {
                        styles.set(StyleProperty::Top, StyleValue::Auto);
                    }
                }
                YEdge::Top => {
                    styles.set(StyleProperty::Top, StyleValue::Length(adjusted.top));
                    if height_changed {
                        styles.set(StyleProperty::Bottom, StyleValue::Auto);
                    }
                }
            }
        }

        if left_changed {
            match current.precedence.x {
                XEdge::Right => {
                    styles.set(StyleProperty::Right, StyleValue::Length(adjusted.right));
                    if width_changed {
                        styles.set(StyleProperty::Left, StyleValue::Auto);
                    }
                }
                XEdge::Left => {
                    styles.set(StyleProperty::Left, StyleValue::Length(adjusted.left));
                    if width_changed {
                        styles.set(StyleProperty::Right, StyleValue::Auto);
                    }
                }
            }
        }

        // A static element cannot be offset at all.
        if current.positioning == Positioning::Static && (top_changed || left_changed) {
            styles.set(StyleProperty::Position, StyleValue::Keyword("absolute"));
        }

        styles.set(StyleProperty::BorderTopWidth, StyleValue::Length(self.border.top));
        styles.set(StyleProperty::BorderRightWidth, StyleValue::Length(self.border.right));
        styles.set(StyleProperty::BorderBottomWidth, StyleValue::Length(self.border.bottom));
        styles.set(StyleProperty::BorderLeftWidth, StyleValue::Length(self.border.left));
        styles.set(StyleProperty::PaddingTop, StyleValue::Length(self.padding.top));
        styles.set(StyleProperty::PaddingRight, StyleValue::Length(self.padding.right));
        styles.set(StyleProperty::PaddingBottom, StyleValue::Length(self.padding.bottom));
        styles.set(StyleProperty::PaddingLeft, StyleValue::Length(self.padding.left));
        styles.set(StyleProperty::MarginTop, StyleValue::Length(self.margin.top));
        styles.set(StyleProperty::MarginRight, StyleValue::Length(self.margin.right));
        styles.set(StyleProperty::MarginBottom, StyleValue::Length(self.margin.bottom));
        styles.set(StyleProperty::MarginLeft, StyleValue::Length(self.margin.left));

        styles
    }

    /// Reconcile against the bound element.
    ///
    /// A no-op unless the binding resolves to exactly one element; a
    /// rectangle describing the union of several elements has no single
    /// write target.
    pub fn apply<S: Surface>(&self, surface: &mut S) -> &Self {
        let Some(binding) = &self.binding else {
            return self;
        };
        let handles = surface.resolve(binding);
        if handles.len() != 1 {
            return self;
        }
        let styles = self.reconcile(&surface.read_geometry(handles[0]));
        surface.write_styles(handles[0], &styles);
        self
    }

    /// Reconcile against an explicit target, ignoring the binding. Writes to
    /// the first element the reference resolves to.
    pub fn apply_to<S: Surface>(&self, surface: &mut S, target: &SurfaceRef) -> &Self {
        let Some(&handle) = surface.resolve(target).first() else {
            return self;
        };
        let styles = self.reconcile(&surface.read_geometry(handle));
        surface.write_styles(handle, &styles);
        self
    }

    /// Measure a reference into a border-box rectangle.
    ///
    /// The document maps to an unbound rectangle at the origin with the full
    /// document extent; the viewport to one at the current scroll offset
    /// with the viewport extent. Anything else produces one rectangle per
    /// resolved element, folded into their bounding box with [`united`]
    /// (bound to the first element). `None` when nothing matches.
    ///
    /// [`united`]: BoxRect::united
    pub fn from_surface<S: Surface>(surface: &S, r: &SurfaceRef) -> Option<BoxRect> {
        match r {
            SurfaceRef::Document => {
                let Size { width, height } = surface.document_size();
                Some(BoxRect::from_rect(Rect::new(0.0, 0.0, width, height)))
            }
            SurfaceRef::Viewport => {
                let Size { width, height } = surface.viewport_size();
                let Point { x, y } = surface.scroll_offset();
                Some(BoxRect::from_rect(Rect::new(x, y, width, height)))
            }
            _ => {
                let mut bounding: Option<BoxRect> = None;
                for handle in surface.resolve(r) {
                    let geo = surface.read_geometry(handle);
                    let rect = Rect::new(
                        geo.offset.x,
                        geo.offset.y,
                        geo.width + geo.border.horizontal() + geo.padding.horizontal(),
                        geo.height + geo.border.vertical() + geo.padding.vertical(),
                    );
                    let measured = BoxRect {
                        rect,
                        border: geo.border,
                        margin: geo.margin,
                        padding: geo.padding,
                        binding: Some(SurfaceRef::Handle(handle)),
                    };
                    bounding = Some(match bounding {
                        None => measured,
                        Some(b) => b.united(&measured),
                    });
                }
                bounding
            }
        }
    }
}

impl Rectangular for BoxRect {
    #[inline]
    fn rect(&self) -> &Rect {
        &self.rect
    }

    #[inline]
    fn rect_mut(&mut self) -> &mut Rect {
        &mut self.rect
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds a [`BoxRect`] from edge/size parameters plus box-model state.
///
/// Unlike the mutating setters on a finished `BoxRect`, the builder's
/// `border`/`padding` state the whole box up front; the given width/height
/// are already border-box and are not adjusted.
#[derive(Debug, Clone, Default)]
pub struct BoxRectBuilder {
    rect: RectBuilder,
    border: Edges,
    margin: Edges,
    padding: Edges,
    binding: Option<SurfaceRef>,
}

impl BoxRectBuilder {
    pub fn top(mut self, v: f64) -> Self {
        self.rect = self.rect.top(v);
        self
    }

    pub fn left(mut self, v: f64) -> Self {
        self.rect = self.rect.left(v);
        self
    }

    pub fn width(mut self, v: f64) -> Self {
        self.rect = self.rect.width(v);
        self
    }

    pub fn height(mut self, v: f64) -> Self {
        self.rect = self.rect.height(v);
        self
    }

    pub fn right(mut self, v: f64) -> Self {
        self.rect = self.rect.right(v);
        self
    }

    pub fn bottom(mut self, v: f64) -> Self {
        self.rect = self.rect.bottom(v);
        self
    }

    pub fn border(mut self, edges: Edges) -> Self {
        self.border = edges;
        self
    }

    pub fn margin(mut self, edges: Edges) -> Self {
        self.margin = edges;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn binding(mut self, binding: SurfaceRef) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn finish(self) -> Result<BoxRect, GeometryError> {
        Ok(BoxRect {
            rect: self.rect.finish()?,
            border: self.border,
            margin: self.margin,
            padding: self.padding,
            binding: self.binding,
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
