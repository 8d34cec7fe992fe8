use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Difficulty levels offered on the intro screen
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Inclusive `(low, high)` bounds for the numbers drawn at this level
    pub fn bounds(self) -> (i64, i64) {
        match self {
            Difficulty::Easy => (1, 10),
            Difficulty::Medium => (1, 30),
            Difficulty::Hard => (1, 60),
            Difficulty::Expert => (1, 99),
        }
    }

    pub fn range(self) -> RangeInclusive<i64> {
        let (low, high) = self.bounds();
        low..=high
    }

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|d| *d == self).unwrap_or(0)
    }
}

/// How a round is played
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The number is simply revealed after a delay
    #[default]
    Think,
    /// The player types a guess which is compared to the drawn number
    Input,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Think => "Think of a number",
            Mode::Input => "Input a number",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::Think => Mode::Input,
            Mode::Input => Mode::Think,
        }
    }
}
