//! In-memory testing support.
//!
//! [`MemorySurface`] is a headless [`Surface`](crate::surface::Surface)
//! implementation backed by a slotmap arena. It resolves selectors by element
//! name and records every style batch written to each element, so tests can
//! assert on exactly what a reconciliation pass emitted.

pub mod memory;

pub use memory::MemorySurface;
