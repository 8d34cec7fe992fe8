use crate::error::{Result, TrainerError};

/// The four screens of a session. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Screen {
    Intro,
    Breathing,
    Game,
    End,
}

impl Screen {
    /// The only screen reachable from `self`, if any.
    /// `End` has no successor; it can only be closed.
    pub fn successor(self) -> Option<Screen> {
        match self {
            Screen::Intro => Some(Screen::Breathing),
            Screen::Breathing => Some(Screen::Game),
            Screen::Game => Some(Screen::End),
            Screen::End => None,
        }
    }

    pub fn can_goto(self, target: Screen) -> bool {
        self.successor() == Some(target)
    }
}

/// Holds the active screen and the generation counter used to
/// discard timers armed on a screen that is no longer active.
#[derive(Debug, Clone)]
pub struct ScreenManager {
    current: Screen,
    generation: u64,
    closed: bool,
}

impl Default for ScreenManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenManager {
    pub fn new() -> Self {
        Self {
            current: Screen::Intro,
            generation: 0,
            closed: false,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Swap to `target`. Edges outside the transition table leave the
    /// current screen untouched.
    pub fn goto(&mut self, target: Screen) -> Result<()> {
        if self.closed {
            return Err(TrainerError::Closed);
        }
        if !self.current.can_goto(target) {
            return Err(TrainerError::InvalidTransition {
                from: self.current,
                to: target,
            });
        }

        tracing::info!(from = %self.current, to = %target, "screen transition");
        self.current = target;
        self.generation += 1;
        Ok(())
    }

    /// Terminal close, only legal from the end screen
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(TrainerError::Closed);
        }
        if self.current != Screen::End {
            return Err(TrainerError::InvalidTransition {
                from: self.current,
                to: Screen::End,
            });
        }
        self.closed = true;
        self.generation += 1;
        Ok(())
    }
}
