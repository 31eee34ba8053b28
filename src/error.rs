use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be a positive finite number, got {0}")]
    CellSize(f64),

    #[error("{name} must be a non-negative finite number, got {value}")]
    NegativeRate { name: &'static str, value: f64 },

    #[error("time step must be a positive finite number, got {0}")]
    TimeStep(f64),

    #[error("solver needs at least one iteration")]
    NoIterations,

    #[error("decay must be in (0, 1], got {0}")]
    Decay(f64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
