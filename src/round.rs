use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use ratatui::style::Color;
use std::time::Duration;

use crate::difficulty::Mode;
use crate::error::Result;
use crate::session::{SessionConfig, SessionState};

/// Delay before the number is revealed in think mode
pub const THINK_DELAY: Duration = Duration::from_millis(3000);
/// Delay between a resolved round and the next one
pub const POST_ROUND_DELAY: Duration = Duration::from_millis(2000);

pub const THINK_PROMPT: &str = "Think of a number...";
pub const INPUT_PROMPT: &str = "Type your number and press Enter";
pub const INVALID_INPUT: &str = "Enter a valid number";

pub const CIRCLE_PALETTE: [Color; 3] = [
    Color::Rgb(0x5c, 0xd3, 0xff),
    Color::Rgb(0x00, 0xbf, 0xa5),
    Color::Rgb(0x66, 0xe0, 0xff),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round started yet
    Idle,
    /// Circle is being drawn before the prompt
    Drawing,
    AwaitingReveal,
    AwaitingInput,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub number: i64,
    pub guess: Option<i64>,
    pub correct: bool,
    /// guess was substituted as the true number
    pub lenient: bool,
}

impl RoundOutcome {
    pub fn message(&self) -> String {
        if self.guess.is_some() && self.correct {
            format!("Correct! The number was {}", self.number)
        } else {
            format!("The number was {}", self.number)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Resolved(RoundOutcome),
    /// text was not an integer; the round is still waiting
    Invalid,
    /// no round is waiting for input
    Ignored,
}

/// Drives rounds for one session and owns its streak
#[derive(Debug)]
pub struct RoundController<R: Rng = StdRng> {
    config: SessionConfig,
    state: SessionState,
    rng: R,
    phase: RoundPhase,
}

impl RoundController<StdRng> {
    pub fn from_entropy(config: SessionConfig) -> Result<Self> {
        Self::new(config, StdRng::from_entropy())
    }

    pub fn seeded(config: SessionConfig, seed: u64) -> Result<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundController<R> {
    /// Fails on a cheat probability outside `0..=1`
    pub fn new(config: SessionConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: SessionState::default(),
            rng,
            phase: RoundPhase::Idle,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn streak(&self) -> u32 {
        self.state.streak()
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Start drawing a new round's circle in a fresh colour
    pub fn begin_round(&mut self) -> Color {
        self.phase = RoundPhase::Drawing;
        *CIRCLE_PALETTE
            .choose(&mut self.rng)
            .unwrap_or(&CIRCLE_PALETTE[0])
    }

    /// Circle is drawn; move to the mode's waiting state and return its prompt
    pub fn prompt(&mut self) -> &'static str {
        match self.config.mode {
            Mode::Think => {
                self.phase = RoundPhase::AwaitingReveal;
                THINK_PROMPT
            }
            Mode::Input => {
                self.phase = RoundPhase::AwaitingInput;
                INPUT_PROMPT
            }
        }
    }

    fn draw(&mut self) -> i64 {
        self.rng.gen_range(self.config.difficulty.range())
    }

    /// Think mode: reveal a number, every reveal extends the streak
    pub fn reveal(&mut self) -> Option<RoundOutcome> {
        if self.phase != RoundPhase::AwaitingReveal {
            return None;
        }
        let number = self.draw();
        self.state.record_round(true);
        self.phase = RoundPhase::Resolved;

        tracing::debug!(number, streak = self.streak(), "number revealed");
        Some(RoundOutcome {
            number,
            guess: None,
            correct: true,
            lenient: false,
        })
    }

    /// Input mode: resolve a typed guess
    pub fn submit(&mut self, text: &str) -> Submission {
        if self.phase != RoundPhase::AwaitingInput {
            return Submission::Ignored;
        }
        let Ok(guess) = text.trim().parse::<i64>() else {
            tracing::debug!(input = text, "guess rejected");
            return Submission::Invalid;
        };

        let lenient = self.rng.gen_bool(self.config.cheat_probability);
        let number = if lenient { guess } else { self.draw() };
        let correct = guess == number;

        self.state.record_round(correct);
        self.phase = RoundPhase::Resolved;

        tracing::debug!(guess, number, correct, lenient, streak = self.streak(), "guess resolved");
        Submission::Resolved(RoundOutcome {
            number,
            guess: Some(guess),
            correct,
            lenient,
        })
    }
}
