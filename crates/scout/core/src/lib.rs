//! Deterministic decision core for a grid scout agent.
//!
//! `scout-core` turns a local 3×3 perception window into a single-step move.
//! Every decision flows through [`engine::ScoutAgent`]: conditions are
//! evaluated against the snapshot, the highest-priority one drives a
//! table-based state transition, and the active state's policy produces the
//! step. The host owns the board and only talks to the agent through the four
//! lifecycle calls on [`engine::ScoutAgent`].
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod localization;
pub mod navigation;
pub mod perception;
pub mod policy;
pub mod state;

pub use config::{MissionConfig, ScoutConfig};
pub use engine::{DecisionRecord, ScoutAgent, TransitionTable};
pub use error::{ConfigError, ErrorSeverity, PolicyError, ScoutError};
pub use event::{EventKind, EventOutcome, Selection, StatePatch};
pub use localization::{Localization, LocalizationPatch};
pub use navigation::step_toward;
pub use perception::{
    CoLocated, Edges, MemoryOutpost, Outpost, OutpostRecord, Perception, TagKind, VisibleCell,
};
pub use state::{
    AgentIdentity, AgentState, Axis, ControlState, Coordinate, Edge, EdgeFix, Knowledge, Role,
    Step, TurnClock,
};
