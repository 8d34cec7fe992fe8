use serde::{Deserialize, Serialize};

use crate::difficulty::{Difficulty, Mode};
use crate::error::{Result, TrainerError};

/// Chance that the player's own guess is taken as the true number
pub const DEFAULT_CHEAT_PROBABILITY: f64 = 0.15;

/// Choices made on the intro screen, fixed for the rest of the session and
/// remembered between runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub mode: Mode,
    pub sound_enabled: bool,
    pub cheat_probability: f64,
    pub breathe_between_rounds: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            mode: Mode::Think,
            sound_enabled: true,
            cheat_probability: DEFAULT_CHEAT_PROBABILITY,
            breathe_between_rounds: false,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        validate_cheat_probability(self.cheat_probability)
    }
}

pub fn validate_cheat_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(TrainerError::InvalidCheatProbability(p))
    }
}

/// Counters that live for one run of the program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    streak: u32,
    rounds_played: u32,
}

impl SessionState {
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub(crate) fn record_round(&mut self, qualifies: bool) {
        self.rounds_played = self.rounds_played.saturating_add(1);
        if qualifies {
            self.streak = self.streak.saturating_add(1);
        }
    }
}
