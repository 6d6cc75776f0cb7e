use scout_core::ConfigError;

/// Errors raised while setting a simulation up.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("invalid mission: {0}")]
    Mission(#[from] ConfigError),

    #[error("cannot place {requested} markers on a board with {capacity} free cells")]
    Crowded { requested: u64, capacity: u64 },
}
