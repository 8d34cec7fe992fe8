pub mod affirmation;
pub mod app;
pub mod app_dirs;
pub mod breathing;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod logging;
pub mod round;
pub mod runtime;
pub mod scheduler;
pub mod screen;
pub mod session;
pub mod tone;
pub mod ui;

pub use app::{Action, App};
pub use error::{Result, TrainerError};

/// Event loop tick; breathing steps are 40ms or longer
pub const TICK_RATE_MS: u64 = 20;
