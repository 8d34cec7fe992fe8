use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A short beep request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration: Duration,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duration_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(duration_ms),
        }
    }
}

pub const REVEAL_TONE: Tone = Tone::new(600, 200);
pub const CORRECT_TONE: Tone = Tone::new(800, 200);
pub const MISS_TONE: Tone = Tone::new(400, 200);

/// Fire-and-forget audio device
pub trait ToneSink: Send {
    fn play(&mut self, tone: Tone);
}

/// Rings the terminal bell; terminals have no pitch control so the
/// frequency only shows up in the log
#[derive(Debug, Default)]
pub struct TerminalBell;

impl ToneSink for TerminalBell {
    fn play(&mut self, tone: Tone) {
        tracing::trace!(frequency_hz = tone.frequency_hz, "bell");
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}

#[derive(Debug, Default)]
pub struct Silent;

impl ToneSink for Silent {
    fn play(&mut self, _tone: Tone) {}
}

/// Records every tone, for tests
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    played: Arc<Mutex<Vec<Tone>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Tone> {
        self.played.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl ToneSink for RecordingSink {
    fn play(&mut self, tone: Tone) {
        if let Ok(mut played) = self.played.lock() {
            played.push(tone);
        }
    }
}
