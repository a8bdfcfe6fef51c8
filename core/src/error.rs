use thiserror::Error;

/// A configuration problem, detected before the first draw.
/// No simulation runs on invalid input; these are fatal to the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown wheel variant '{got}'; expected 'european' or 'american'")]
    UnknownWheelVariant { got: String },

    #[error("bet amount must be a positive finite number, got {got}")]
    NonPositiveBet { got: f64 },

    #[error("win chance percent must lie in [0, 100], got {got}")]
    WinChanceOutOfRange { got: f64 },

    #[error("player count must be at least 1")]
    NoPlayers,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

pub type SimResult<T> = Result<T, SimError>;
