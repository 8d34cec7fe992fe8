use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use intuit::{
    app::App,
    app_dirs::AppDirs,
    config::{ConfigStore, FileConfigStore},
    difficulty::{Difficulty, Mode},
    logging::init_logging,
    runtime::{AppEvent, CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    session::{validate_cheat_probability, SessionConfig},
    tone::{TerminalBell, ToneSink},
    ui, TICK_RATE_MS,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

/// calm terminal intuition trainer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Breathe with the circle, then trust your gut: guess or simply receive numbers and build a streak."
)]
pub struct Cli {
    /// difficulty preselected on the intro screen
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// round mode preselected on the intro screen
    #[clap(short = 'm', long, value_enum)]
    mode: Option<Mode>,

    /// start with sound turned off
    #[clap(long)]
    no_sound: bool,

    /// chance that your own guess is taken as the answer (0.0 - 1.0)
    #[clap(short = 'c', long)]
    cheat_probability: Option<f64>,

    /// seed the random number generator for reproducible sessions
    #[clap(long)]
    seed: Option<u64>,

    /// play a short breathing pulse before every round
    #[clap(short = 'b', long)]
    breathe_between_rounds: bool,
}

impl Cli {
    /// Overlay command line flags on the saved config
    fn session_defaults(&self, saved: &SessionConfig) -> SessionConfig {
        let mut cfg = *saved;
        if let Some(d) = self.difficulty {
            cfg.difficulty = d;
        }
        if let Some(m) = self.mode {
            cfg.mode = m;
        }
        if self.no_sound {
            cfg.sound_enabled = false;
        }
        if let Some(p) = self.cheat_probability {
            cfg.cheat_probability = p;
        }
        if self.breathe_between_rounds {
            cfg.breathe_between_rounds = true;
        }
        cfg
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }
    if let Some(p) = cli.cheat_probability {
        if validate_cheat_probability(p).is_err() {
            let mut cmd = Cli::command();
            cmd.error(
                ErrorKind::ValueValidation,
                format!("--cheat-probability must be between 0.0 and 1.0, got {p}"),
            )
            .exit();
        }
    }

    if let Some(path) = AppDirs::log_path() {
        init_logging(&path)?;
    }

    let store = FileConfigStore::new();
    let defaults = cli.session_defaults(&store.load());
    let tone: Box<dyn ToneSink> = Box::new(TerminalBell);

    let mut app = App::new(defaults)
        .with_seed(cli.seed)
        .with_tone_sink(tone)
        .with_config_store(Box::new(store));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ticker = FixedTicker::new(Duration::from_millis(TICK_RATE_MS));
    let mut runner = Runner::new(CrosstermEventSource::new(), ticker);
    let result = start_tui(&mut terminal, &mut app, &mut runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "session aborted");
    }
    result
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &mut Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui::draw(app, f))?;

    while !app.should_quit() {
        let event = runner.step();
        app.on_tick(runner.elapsed());

        if let AppEvent::Key(key) = event {
            app.handle_key(key)?;
        }
        terminal.draw(|f| ui::draw(app, f))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use intuit::screen::Screen;
    use intuit::tone::Silent;
    use ratatui::backend::TestBackend;
    use std::sync::mpsc;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["intuit"]);
        assert_eq!(cli.difficulty, None);
        assert_eq!(cli.mode, None);
        assert!(!cli.no_sound);
        assert_eq!(cli.cheat_probability, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.breathe_between_rounds);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "intuit", "-d", "expert", "--mode", "input", "--no-sound", "-c", "0.3", "--seed",
            "12", "-b",
        ]);
        assert_eq!(cli.difficulty, Some(Difficulty::Expert));
        assert_eq!(cli.mode, Some(Mode::Input));
        assert!(cli.no_sound);
        assert_eq!(cli.cheat_probability, Some(0.3));
        assert_eq!(cli.seed, Some(12));
        assert!(cli.breathe_between_rounds);
    }

    #[test]
    fn test_cli_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["intuit", "-d", "impossible"]).is_err());
    }

    #[test]
    fn test_flags_override_saved_config() {
        let saved = SessionConfig {
            difficulty: Difficulty::Medium,
            mode: Mode::Input,
            sound_enabled: true,
            cheat_probability: 0.15,
            breathe_between_rounds: false,
        };

        let untouched = Cli::parse_from(["intuit"]).session_defaults(&saved);
        assert_eq!(untouched, saved);

        let cfg = Cli::parse_from(["intuit", "-d", "hard", "--no-sound", "-c", "0"])
            .session_defaults(&saved);
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.mode, Mode::Input);
        assert!(!cfg.sound_enabled);
        assert_eq!(cfg.cheat_probability, 0.0);
    }

    #[test]
    fn test_start_tui_exits_on_escape() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
        use intuit::runtime::TestEventSource;

        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .unwrap();
        tx.send(AppEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
            .unwrap();

        let mut runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(1)),
        );
        let mut app = App::new(SessionConfig::default())
            .with_seed(Some(1))
            .with_tone_sink(Box::new(Silent));
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        start_tui(&mut terminal, &mut app, &mut runner).unwrap();
        assert!(app.should_quit());
        assert_eq!(app.screen(), Screen::Breathing);
    }
}
