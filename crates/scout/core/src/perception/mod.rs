//! Host-provided view of the world for a single tick.
//!
//! The core never looks past this module: the 3×3 window, tag
//! classification, and the handles of entities sharing the agent's cell are
//! all the board knowledge a decision can use.
mod entity;
mod snapshot;

pub use entity::{CoLocated, MemoryOutpost, Outpost, OutpostRecord};
pub use snapshot::{Edges, Perception, TagKind, VisibleCell};
