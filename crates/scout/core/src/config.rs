use crate::error::ConfigError;
use crate::state::{Coordinate, far_edge};

/// Tunable constants of the decision core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoutConfig {
    /// Turns budgeted for one diagonal step on the way home.
    pub diagonal_cost: u32,
    /// Turns budgeted for one orthogonal catch-up step.
    pub orthogonal_cost: u32,
    /// Multiplied by the board size when the agent cannot measure its
    /// distance to home.
    pub blind_cost_factor: u32,
    /// Safety margin on the return estimate, as `numerator / denominator`.
    pub margin_numerator: u32,
    pub margin_denominator: u32,
}

impl ScoutConfig {
    pub const DEFAULT_DIAGONAL_COST: u32 = 3;
    pub const DEFAULT_ORTHOGONAL_COST: u32 = 2;
    pub const DEFAULT_BLIND_COST_FACTOR: u32 = 2;
    pub const DEFAULT_MARGIN: (u32, u32) = (3, 2);

    pub fn new() -> Self {
        Self {
            diagonal_cost: Self::DEFAULT_DIAGONAL_COST,
            orthogonal_cost: Self::DEFAULT_ORTHOGONAL_COST,
            blind_cost_factor: Self::DEFAULT_BLIND_COST_FACTOR,
            margin_numerator: Self::DEFAULT_MARGIN.0,
            margin_denominator: Self::DEFAULT_MARGIN.1,
        }
    }

    #[must_use]
    pub fn with_step_costs(mut self, diagonal: u32, orthogonal: u32) -> Self {
        self.diagonal_cost = diagonal;
        self.orthogonal_cost = orthogonal;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, numerator: u32, denominator: u32) -> Self {
        self.margin_numerator = numerator;
        self.margin_denominator = denominator.max(1);
        self
    }

    /// Remaining-turn count below which the agent must head home, given the
    /// estimated cost of the trip. Rounds down.
    pub fn return_threshold(&self, cost: u32) -> u32 {
        let scaled = u64::from(cost) * u64::from(self.margin_numerator)
            / u64::from(self.margin_denominator.max(1));
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters the host fixes at mission start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionConfig {
    /// Playable board size `n`; coordinates run `0..=n + 1`.
    pub board_size: u32,
    pub turn_budget: u32,
    /// Landmark coordinates announced by the host.
    pub landmarks: Vec<Coordinate>,
}

impl MissionConfig {
    /// Largest accepted board size. Keeps every coordinate and turn cost
    /// comfortably inside `i32` / `u32`.
    pub const MAX_BOARD_SIZE: u32 = i32::MAX as u32 / 4;

    pub fn new(board_size: u32, turn_budget: u32) -> Self {
        Self {
            board_size,
            turn_budget,
            landmarks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_landmarks(mut self, landmarks: Vec<Coordinate>) -> Self {
        self.landmarks = landmarks;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.board_size > Self::MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                board_size: self.board_size,
                max: Self::MAX_BOARD_SIZE,
            });
        }
        let far = far_edge(self.board_size);
        if let Some(&landmark) = self
            .landmarks
            .iter()
            .find(|c| c.x < 0 || c.y < 0 || c.x > far || c.y > far)
        {
            return Err(ConfigError::LandmarkOffBoard {
                landmark,
                board_size: self.board_size,
            });
        }
        Ok(())
    }
}
