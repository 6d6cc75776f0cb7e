//! Simulation parameters and loaders.
use std::env;

use scout_core::MissionConfig;

/// Parameters of one simulated mission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub board_size: u32,
    pub turn_budget: u32,
    pub scouts: u32,
    pub landmarks: u32,
    pub enemies: u32,
    pub seed: u64,
}

impl SimConfig {
    pub const DEFAULT_BOARD_SIZE: u32 = 20;
    pub const DEFAULT_TURN_BUDGET: u32 = 300;
    pub const DEFAULT_SCOUTS: u32 = 4;
    pub const DEFAULT_LANDMARKS: u32 = 3;
    pub const DEFAULT_ENEMIES: u32 = 10;
    pub const DEFAULT_SEED: u64 = 5;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCOUT_BOARD_SIZE` - Playable board size (default: 20)
    /// - `SCOUT_TURN_BUDGET` - Turns per mission (default: 300)
    /// - `SCOUT_AGENTS` - Number of scouts (default: 4)
    /// - `SCOUT_LANDMARKS` - Number of landmarks (default: 3)
    /// - `SCOUT_ENEMIES` - Number of enemies (default: 10)
    /// - `SCOUT_SEED` - Board generation seed (default: 5)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(size) = read_env::<u32>("SCOUT_BOARD_SIZE") {
            config.board_size = size.max(1);
        }
        if let Some(turns) = read_env::<u32>("SCOUT_TURN_BUDGET") {
            config.turn_budget = turns;
        }
        if let Some(scouts) = read_env::<u32>("SCOUT_AGENTS") {
            config.scouts = scouts;
        }
        if let Some(landmarks) = read_env::<u32>("SCOUT_LANDMARKS") {
            config.landmarks = landmarks;
        }
        if let Some(enemies) = read_env::<u32>("SCOUT_ENEMIES") {
            config.enemies = enemies;
        }
        if let Some(seed) = read_env::<u64>("SCOUT_SEED") {
            config.seed = seed;
        }

        config
    }

    /// Mission parameters handed to every agent.
    pub fn mission(&self) -> MissionConfig {
        MissionConfig::new(self.board_size, self.turn_budget)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board_size: Self::DEFAULT_BOARD_SIZE,
            turn_budget: Self::DEFAULT_TURN_BUDGET,
            scouts: Self::DEFAULT_SCOUTS,
            landmarks: Self::DEFAULT_LANDMARKS,
            enemies: Self::DEFAULT_ENEMIES,
            seed: Self::DEFAULT_SEED,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
