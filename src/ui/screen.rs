use ratatui::Frame;

use crate::{app::App, screen::Screen};

use super::{breathing, end, game, intro};

/// A UI screen boundary: renders one variant of the active screen
pub trait ScreenView {
    fn render(&self, app: &App, f: &mut Frame);
}

pub struct IntroScreenView;

impl ScreenView for IntroScreenView {
    fn render(&self, app: &App, f: &mut Frame) {
        intro::render(app, f);
    }
}

pub struct BreathingScreenView;

impl ScreenView for BreathingScreenView {
    fn render(&self, app: &App, f: &mut Frame) {
        breathing::render(app, f);
    }
}

pub struct GameScreenView;

impl ScreenView for GameScreenView {
    fn render(&self, app: &App, f: &mut Frame) {
        game::render(app, f);
    }
}

pub struct EndScreenView;

impl ScreenView for EndScreenView {
    fn render(&self, app: &App, f: &mut Frame) {
        end::render(app, f);
    }
}

/// Helper to construct the view for the active screen
pub fn current_view(screen: Screen) -> Box<dyn ScreenView> {
    match screen {
        Screen::Intro => Box::new(IntroScreenView),
        Screen::Breathing => Box::new(BreathingScreenView),
        Screen::Game => Box::new(GameScreenView),
        Screen::End => Box::new(EndScreenView),
    }
}
