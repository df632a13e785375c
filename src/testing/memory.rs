//! A headless surface whose elements live in a slotmap arena.

use slotmap::{Key, SlotMap};

use crate::geometry::{Point, Size};
use crate::surface::{Surface, SurfaceGeometry, SurfaceHandle, SurfaceRef, StyleMap};

struct ElementState {
    name: String,
    geometry: SurfaceGeometry,
    written: Vec<StyleMap>,
}

/// An in-memory [`Surface`] for tests and examples.
///
/// Elements are inserted with a name and a geometry snapshot; selector
/// references resolve by exact name match, in insertion order. Style writes
/// are never interpreted, only logged per element, so a test can inspect the
/// exact batches a reconciliation produced via [`MemorySurface::writes`].
pub struct MemorySurface {
    elements: SlotMap<SurfaceHandle, ElementState>,
    document: Size,
    viewport: Size,
    scroll: Point,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
            document: Size::ZERO,
            viewport: Size::ZERO,
            scroll: Point::new(0.0, 0.0),
        }
    }

    pub fn with_document_size(mut self, size: Size) -> Self {
        self.document = size;
        self
    }

    pub fn with_viewport_size(mut self, size: Size) -> Self {
        self.viewport = size;
        self
    }

    pub fn with_scroll(mut self, scroll: Point) -> Self {
        self.scroll = scroll;
        self
    }

    /// Add an element and get its handle.
    pub fn insert(&mut self, name: &str, geometry: SurfaceGeometry) -> SurfaceHandle {
        self.elements.insert(ElementState {
            name: name.to_owned(),
            geometry,
            written: Vec::new(),
        })
    }

    pub fn remove(&mut self, handle: SurfaceHandle) {
        self.elements.remove(handle);
    }

    /// Mutable access to an element's geometry, to simulate external
    /// layout changes between reconciliation passes.
    pub fn geometry_mut(&mut self, handle: SurfaceHandle) -> Option<&mut SurfaceGeometry> {
        self.elements.get_mut(handle).map(|e| &mut e.geometry)
    }

    /// Every style batch written to the element, oldest first.
    pub fn writes(&self, handle: SurfaceHandle) -> &[StyleMap] {
        self.elements
            .get(handle)
            .map(|e| e.written.as_slice())
            .unwrap_or(&[])
    }

    /// The most recent style batch written to the element.
    pub fn last_write(&self, handle: SurfaceHandle) -> Option<&StyleMap> {
        self.writes(handle).last()
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MemorySurface {
    fn resolve(&self, r: &SurfaceRef) -> Vec<SurfaceHandle> {
        match r {
            SurfaceRef::Document | SurfaceRef::Viewport => Vec::new(),
            SurfaceRef::Selector(name) => self
                .elements
                .iter()
                .filter(|(_, e)| e.name == *name)
                .map(|(h, _)| h)
                .collect(),
            SurfaceRef::Handle(h) => {
                if self.elements.contains_key(*h) {
                    vec![*h]
                } else {
                    Vec::new()
                }
            }
            SurfaceRef::Handles(handles) => handles
                .iter()
                .copied()
                .filter(|h| self.elements.contains_key(*h))
                .collect(),
        }
    }

    fn read_geometry(&self, handle: SurfaceHandle) -> SurfaceGeometry {
        self.elements
            .get(handle)
            .map(|e| e.geometry.clone())
            .unwrap_or_default()
    }

    fn write_styles(&mut self, handle: SurfaceHandle, styles: &StyleMap) {
        if let Some(element) = self.elements.get_mut(handle) {
            element.written.push(styles.clone());
        }
    }

    fn identify(&self, handle: SurfaceHandle) -> u64 {
        handle.data().as_ffi()
    }

    fn document_size(&self) -> Size {
        self.document
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }
}

// ===========================================================================
// Tests
// ===========================================================================
