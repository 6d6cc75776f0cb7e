//! Reference host for `scout-core`.
//!
//! Owns the ground truth the agents never see directly: a padded board with
//! outposts on its corners, landmarks, enemies, and the real scout positions.
//! Each turn it builds every scout's perception window, asks for a step,
//! checks the step stays on the board, and confirms it back to the agent.
pub mod config;
pub mod error;
pub mod host;
pub mod world;

pub use config::SimConfig;
pub use error::SimError;
pub use host::{MissionReport, Simulation};
pub use world::{Marker, World};
