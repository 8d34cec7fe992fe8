use thiserror::Error;

use crate::screen::Screen;

/// Errors surfaced by the trainer core and its startup path.
///
/// Invalid guess text is not an error here: it is a normal round result
/// handled by re-prompting.
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    #[error("cannot switch from {from} to {to}")]
    InvalidTransition { from: Screen, to: Screen },

    #[error("the session is already closed")]
    Closed,

    #[error("cheat probability must be within 0.0..=1.0, got {0}")]
    InvalidCheatProbability(f64),

    #[error("invalid breathing schedule: {0}")]
    InvalidSchedule(&'static str),

    #[error("failed to initialise logging: {0}")]
    LoggingInit(String),
}

pub type Result<T> = std::result::Result<T, TrainerError>;
