//! # rectify
//!
//! Rectangle geometry and box-model reconciliation for absolutely positioned
//! elements.
//!
//! rectify models rectangles the way CSS positioning actually behaves:
//! derived edges that write through to dimensions, relative placement by
//! keyword ("my left top at its right center"), and a reconciliation
//! algorithm that turns the difference between where an element *is* and
//! where a rectangle says it *should be* into a minimal batch of style
//! writes. The platform side sits behind a single [`Surface`](surface::Surface)
//! trait, so the whole crate runs headless.
//!
//! ## Core Systems
//!
//! - **[`geometry`]** — Point, Size, Edges, Line, Axis primitives
//! - **[`position`]** — Keyword positions ("left top") with lenient parsing
//! - **[`rect`]** — The Rect algebra: builders, movement, combinators,
//!   relative placement
//! - **[`rects`]** — Batch alignment and distribution over rectangle lists
//! - **[`box_rect`]** — Border-box rectangles bound to elements, and the
//!   style reconciliation algorithm
//! - **[`surface`]** — The collaborator boundary: handles, geometry
//!   snapshots, style batches
//! - **[`testing`]** — In-memory surface for headless tests

// Foundation
pub mod geometry;
pub mod position;

// Rectangle algebra
pub mod rect;
pub mod rects;

// Surface boundary and reconciliation
pub mod box_rect;
pub mod surface;

// Test support
pub mod testing;

pub use box_rect::BoxRect;
pub use geometry::{Axis, Edges, Line, Point, ScaleMode, Size};
pub use position::Position;
pub use rect::{GeometryError, Offset, Placement, Rect, Rectangular};
pub use surface::{Surface, SurfaceGeometry, SurfaceHandle, SurfaceRef};
