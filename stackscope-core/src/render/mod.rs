//! Plain-text rendering of relationship snapshots
//!
//! Everything here composes plain strings. Color belongs to the front
//! end; keeping ANSI out of this layer is what makes the determinism
//! tests byte-exact.

mod boxes;
mod graph;
mod topology;

pub use graph::{render_neighborhood, GraphNode, StyleTag, COLUMN_CAP};
pub use topology::render_topology;
