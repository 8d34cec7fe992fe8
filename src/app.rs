use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use std::time::Duration;

use crate::affirmation;
use crate::breathing::{BreathFrame, BreathingAnimation, BreathingSchedule, Pulse};
use crate::config::{ConfigStore, NullConfigStore};
use crate::difficulty::{Difficulty, Mode};
use crate::error::Result;
use crate::round::{
    RoundController, RoundPhase, Submission, CIRCLE_PALETTE, INVALID_INPUT, POST_ROUND_DELAY,
    THINK_DELAY,
};
use crate::scheduler::Scheduler;
use crate::screen::{Screen, ScreenManager};
use crate::session::SessionConfig;
use crate::tone::{Silent, Tone, ToneSink, CORRECT_TONE, MISS_TONE, REVEAL_TONE};

pub const START_TRAINING: &str = "Let's start the training";
/// Radius of the still circle shown during a round
pub const ROUND_RADIUS: f64 = 80.0;
const MAX_GUESS_LEN: usize = 12;

/// Named user actions, decoupled from the keys that trigger them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    ToggleMode,
    ToggleSound,
    Confirm,
    EndSession,
    Char(char),
    Backspace,
    Quit,
}

/// Delayed callbacks the app arms on its scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    BreathFrame,
    RoundFrame,
    Reveal,
    NextRound,
}

/// Selections on the intro screen before Continue is pressed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroForm {
    pub difficulty: Difficulty,
    pub mode: Mode,
    pub sound_enabled: bool,
}

#[derive(Debug)]
pub struct BreathingView {
    pub affirmation: &'static str,
    pub frame: Option<BreathFrame>,
    pub finished: bool,
    animation: BreathingAnimation,
}

#[derive(Debug)]
pub struct GameView {
    pub message: String,
    pub input: String,
    pub input_visible: bool,
    pub radius: f64,
    pub color: Color,
    animation: Option<Pulse>,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            message: String::new(),
            input: String::new(),
            input_visible: false,
            radius: ROUND_RADIUS,
            color: CIRCLE_PALETTE[0],
            animation: None,
        }
    }
}

pub struct App {
    screens: ScreenManager,
    scheduler: Scheduler<TimerEvent>,
    pub intro: IntroForm,
    base: SessionConfig,
    seed: Option<u64>,
    controller: Option<RoundController>,
    breathing: Option<BreathingView>,
    pub game: GameView,
    intro_schedule: BreathingSchedule,
    tone: Box<dyn ToneSink>,
    store: Box<dyn ConfigStore>,
    should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screens.current())
            .field("intro", &self.intro)
            .field("now", &self.scheduler.now())
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl App {
    /// `defaults` preset the intro form; its cheat probability and
    /// between-rounds flag carry into the session unchanged
    pub fn new(defaults: SessionConfig) -> Self {
        Self {
            screens: ScreenManager::new(),
            scheduler: Scheduler::new(),
            intro: IntroForm {
                difficulty: defaults.difficulty,
                mode: defaults.mode,
                sound_enabled: defaults.sound_enabled,
            },
            base: defaults,
            seed: None,
            controller: None,
            breathing: None,
            game: GameView::default(),
            intro_schedule: BreathingSchedule::intro(),
            tone: Box::new(Silent),
            store: Box::new(NullConfigStore),
            should_quit: false,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_tone_sink(mut self, tone: Box<dyn ToneSink>) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_config_store(mut self, store: Box<dyn ConfigStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_intro_schedule(mut self, schedule: BreathingSchedule) -> Self {
        self.intro_schedule = schedule;
        self
    }

    pub fn screen(&self) -> Screen {
        self.screens.current()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending(self.screens.generation())
    }

    pub fn breathing(&self) -> Option<&BreathingView> {
        self.breathing.as_ref()
    }

    pub fn session_config(&self) -> Option<&SessionConfig> {
        self.controller.as_ref().map(|c| c.config())
    }

    pub fn streak(&self) -> u32 {
        self.controller.as_ref().map_or(0, |c| c.streak())
    }

    pub fn rounds_played(&self) -> u32 {
        self.controller
            .as_ref()
            .map_or(0, |c| c.state().rounds_played())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match action_for(self.screen(), self.game.input_visible, key) {
            Some(action) => self.dispatch(action),
            None => Ok(()),
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        if action == Action::Quit {
            self.should_quit = true;
            return Ok(());
        }

        match (self.screen(), action) {
            (Screen::Intro, Action::Up) => self.intro.difficulty = self.intro.difficulty.prev(),
            (Screen::Intro, Action::Down) => self.intro.difficulty = self.intro.difficulty.next(),
            (Screen::Intro, Action::ToggleMode) => self.intro.mode = self.intro.mode.toggle(),
            (Screen::Intro, Action::ToggleSound) => {
                self.intro.sound_enabled = !self.intro.sound_enabled
            }
            (Screen::Intro, Action::Confirm) => self.start_breathing()?,
            (Screen::Breathing, Action::Confirm) => {
                if self.breathing.as_ref().is_some_and(|b| b.finished) {
                    self.start_game()?;
                }
            }
            (Screen::Game, Action::Char(c)) if self.game.input_visible => {
                if self.game.input.chars().count() < MAX_GUESS_LEN {
                    self.game.input.push(c);
                }
            }
            (Screen::Game, Action::Backspace) if self.game.input_visible => {
                self.game.input.pop();
            }
            (Screen::Game, Action::Confirm) if self.game.input_visible => self.submit_guess(),
            (Screen::Game, Action::EndSession) => self.end_session()?,
            (Screen::End, Action::Confirm) => {
                self.screens.close()?;
                self.should_quit = true;
            }
            _ => {}
        }
        Ok(())
    }

    /// Advance virtual time by `dt`, firing every timer that falls due
    pub fn on_tick(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(timer) = self.scheduler.pop_due(until, self.screens.generation()) {
            self.fire(timer);
        }
        self.scheduler.advance_to(until);
    }

    fn start_breathing(&mut self) -> Result<()> {
        let config = SessionConfig {
            difficulty: self.intro.difficulty,
            mode: self.intro.mode,
            sound_enabled: self.intro.sound_enabled,
            ..self.base
        };
        let mut controller = match self.seed {
            Some(seed) => RoundController::seeded(config, seed)?,
            None => RoundController::from_entropy(config)?,
        };
        self.screens.goto(Screen::Breathing)?;

        if let Err(e) = self.store.save(&config) {
            tracing::warn!(error = %e, "could not save config");
        }

        let affirmation = affirmation::choose(controller.rng_mut());
        self.controller = Some(controller);

        tracing::info!(
            difficulty = %config.difficulty,
            mode = %config.mode,
            sound = config.sound_enabled,
            cheat_probability = config.cheat_probability,
            "session started"
        );

        self.breathing = Some(BreathingView {
            affirmation,
            frame: None,
            finished: false,
            animation: self.intro_schedule.frames(),
        });
        self.advance_breathing();
        Ok(())
    }

    fn advance_breathing(&mut self) {
        let Some(view) = self.breathing.as_mut() else {
            return;
        };
        match view.animation.next() {
            Some(frame) => {
                view.frame = Some(frame);
                self.arm(frame.hold, TimerEvent::BreathFrame);
            }
            None => {
                view.frame = None;
                view.finished = true;
            }
        }
    }

    fn start_game(&mut self) -> Result<()> {
        self.screens.goto(Screen::Game)?;
        self.start_round();
        Ok(())
    }

    fn start_round(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        self.game.color = controller.begin_round();
        self.game.input.clear();
        self.game.input_visible = false;
        self.game.message.clear();
        self.game.radius = ROUND_RADIUS;

        if controller.config().breathe_between_rounds {
            self.game.animation = Some(Pulse::between_rounds());
            self.advance_round_animation();
        } else {
            self.show_prompt();
        }
    }

    fn advance_round_animation(&mut self) {
        let next = self.game.animation.as_mut().and_then(|a| a.next());
        match next {
            Some(frame) => {
                self.game.radius = frame.radius;
                self.arm(frame.hold, TimerEvent::RoundFrame);
            }
            None => {
                self.game.animation = None;
                self.game.radius = ROUND_RADIUS;
                self.show_prompt();
            }
        }
    }

    fn show_prompt(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        self.game.message = controller.prompt().to_string();
        match controller.phase() {
            RoundPhase::AwaitingReveal => self.arm(THINK_DELAY, TimerEvent::Reveal),
            RoundPhase::AwaitingInput => self.game.input_visible = true,
            _ => {}
        }
    }

    fn reveal(&mut self) {
        let Some(outcome) = self.controller.as_mut().and_then(|c| c.reveal()) else {
            return;
        };
        self.game.message = outcome.message();
        self.play(REVEAL_TONE);
        self.arm(POST_ROUND_DELAY, TimerEvent::NextRound);
    }

    fn submit_guess(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        match controller.submit(&self.game.input) {
            Submission::Invalid => {
                self.game.message = INVALID_INPUT.to_string();
                self.game.input.clear();
            }
            Submission::Resolved(outcome) => {
                self.game.input.clear();
                self.game.input_visible = false;
                self.game.message = outcome.message();
                self.play(if outcome.correct { CORRECT_TONE } else { MISS_TONE });
                self.arm(POST_ROUND_DELAY, TimerEvent::NextRound);
            }
            Submission::Ignored => {}
        }
    }

    fn end_session(&mut self) -> Result<()> {
        self.screens.goto(Screen::End)?;
        self.game.input_visible = false;
        self.game.animation = None;
        tracing::info!(
            streak = self.streak(),
            rounds = self.rounds_played(),
            "session ended"
        );
        Ok(())
    }

    /// Arm a timer that dies with the current screen
    fn arm(&mut self, delay: Duration, timer: TimerEvent) {
        self.scheduler.schedule(self.screens.generation(), delay, timer);
    }

    fn play(&mut self, tone: Tone) {
        if self.session_config().is_some_and(|c| c.sound_enabled) {
            self.tone.play(tone);
        }
    }

    fn fire(&mut self, timer: TimerEvent) {
        match (self.screen(), timer) {
            (Screen::Breathing, TimerEvent::BreathFrame) => self.advance_breathing(),
            (Screen::Game, TimerEvent::RoundFrame) => self.advance_round_animation(),
            (Screen::Game, TimerEvent::Reveal) => self.reveal(),
            (Screen::Game, TimerEvent::NextRound) => self.start_round(),
            (screen, timer) => {
                tracing::trace!(%screen, ?timer, "timer fired on inactive screen");
            }
        }
    }
}

/// Map a key to an action for the given screen. `typing` is true while the
/// guess field is visible, in which case printable keys go to the field.
pub fn action_for(screen: Screen, typing: bool, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Enter => return Some(Action::Confirm),
        _ => {}
    }

    match screen {
        Screen::Intro => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char('m') => {
                Some(Action::ToggleMode)
            }
            KeyCode::Char('s') | KeyCode::Char(' ') => Some(Action::ToggleSound),
            _ => None,
        },
        Screen::Breathing => None,
        Screen::Game => match key.code {
            KeyCode::Char('e') if ctrl => Some(Action::EndSession),
            KeyCode::Char('e') if !typing => Some(Action::EndSession),
            KeyCode::Char(c) if typing && !ctrl => Some(Action::Char(c)),
            KeyCode::Backspace if typing => Some(Action::Backspace),
            _ => None,
        },
        Screen::End => match key.code {
            KeyCode::Char('q') => Some(Action::Confirm),
            _ => None,
        },
    }
}
