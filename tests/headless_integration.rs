use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use intuit::{
    app::App,
    breathing::BreathingSchedule,
    difficulty::{Difficulty, Mode},
    runtime::{AppEvent, FixedTicker, Runner, TestEventSource},
    screen::Screen,
    session::SessionConfig,
};

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn quick_breath() -> BreathingSchedule {
    BreathingSchedule::new(
        50.0,
        120.0,
        4,
        Duration::from_millis(40),
        Duration::from_millis(20),
    )
    .unwrap()
}

// Drives the app through the runner the way main does, but with virtual time:
// every Tick advances the app by one tick interval.
fn drive(app: &mut App, runner: &Runner<TestEventSource, FixedTicker>, max_steps: u32) {
    for _ in 0..max_steps {
        match runner.step() {
            AppEvent::Tick => app.on_tick(runner.tick_interval()),
            AppEvent::Resize => {}
            AppEvent::Key(k) => app.handle_key(k).unwrap(),
        }
        if app.should_quit() {
            break;
        }
    }
}

#[test]
fn headless_think_session_runs_to_close() {
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );
    let mut app = App::new(SessionConfig::default())
        .with_seed(Some(2024))
        .with_intro_schedule(quick_breath());

    // pick Medium, keep Think, continue
    tx.send(key(KeyCode::Down)).unwrap();
    tx.send(key(KeyCode::Enter)).unwrap();
    drive(&mut app, &runner, 2);
    assert_eq!(app.screen(), Screen::Breathing);
    assert_eq!(app.session_config().unwrap().difficulty, Difficulty::Medium);

    // no events queued: ticks play the breathing cycle (4+1+4+1 frames, 120ms)
    for _ in 0..200 {
        app.on_tick(Duration::from_millis(1));
    }
    assert!(app.breathing().unwrap().finished);

    tx.send(key(KeyCode::Enter)).unwrap();
    drive(&mut app, &runner, 1);
    assert_eq!(app.screen(), Screen::Game);

    // two full think rounds
    app.on_tick(Duration::from_millis(10_000));
    assert_eq!(app.streak(), 2);

    tx.send(key(KeyCode::Char('e'))).unwrap();
    drive(&mut app, &runner, 1);
    assert_eq!(app.screen(), Screen::End);

    // timers armed before End never fire
    app.on_tick(Duration::from_secs(30));
    assert_eq!(app.streak(), 2);

    tx.send(key(KeyCode::Enter)).unwrap();
    drive(&mut app, &runner, 1);
    assert!(app.should_quit());
}

#[test]
fn headless_input_session_with_typed_keys() {
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );
    let mut app = App::new(SessionConfig {
        mode: Mode::Input,
        cheat_probability: 1.0,
        ..SessionConfig::default()
    })
    .with_seed(Some(5))
    .with_intro_schedule(quick_breath());

    tx.send(key(KeyCode::Enter)).unwrap();
    drive(&mut app, &runner, 1);
    app.on_tick(Duration::from_millis(500));
    tx.send(key(KeyCode::Enter)).unwrap();
    drive(&mut app, &runner, 1);
    assert_eq!(app.screen(), Screen::Game);
    assert!(app.game.input_visible);

    // 'e' is a character while typing, not End Session
    for c in ['e', '3'] {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }
    tx.send(key(KeyCode::Enter)).unwrap();
    drive(&mut app, &runner, 3);
    assert_eq!(app.screen(), Screen::Game);
    assert_eq!(app.game.message, "Enter a valid number");
    assert_eq!(app.rounds_played(), 0);

    tx.send(key(KeyCode::Char('3'))).unwrap();
    tx.send(key(KeyCode::Enter)).unwrap();
    drive(&mut app, &runner, 2);
    assert_eq!(app.game.message, "Correct! The number was 3");
    assert_eq!(app.streak(), 1);

    tx.send(AppEvent::Key(KeyEvent::new(
        KeyCode::Char('e'),
        KeyModifiers::CONTROL,
    )))
    .unwrap();
    drive(&mut app, &runner, 1);
    assert_eq!(app.screen(), Screen::End);
}

#[test]
fn headless_escape_quits_from_intro() {
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );
    let mut app = App::new(SessionConfig::default());
    tx.send(key(KeyCode::Esc)).unwrap();
    drive(&mut app, &runner, 5);
    assert!(app.should_quit());
    assert_eq!(app.screen(), Screen::Intro);
}
