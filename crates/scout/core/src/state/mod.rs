//! Agent-owned state.
//!
//! Value types shared by every layer (coordinates, steps, edges), the control
//! state enum, and the mutable [`AgentState`] record the controller owns.
mod agent;
mod common;
mod control;
mod knowledge;

pub use agent::{AgentIdentity, AgentState, Role, TurnClock};
pub(crate) use common::far_edge;
pub use common::{Axis, Coordinate, Edge, EdgeFix, Step};
pub use control::ControlState;
pub use knowledge::Knowledge;
