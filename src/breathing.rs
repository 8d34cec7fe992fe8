use std::time::Duration;

use crate::error::{Result, TrainerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreathingPhase {
    Inhale,
    PauseHigh,
    Exhale,
    PauseLow,
}

impl BreathingPhase {
    pub fn label(self) -> &'static str {
        match self {
            BreathingPhase::Inhale => "Inhale",
            BreathingPhase::PauseHigh | BreathingPhase::PauseLow => "Pause",
            BreathingPhase::Exhale => "Exhale",
        }
    }
}

/// One redraw of the breathing circle, shown for `hold` before the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreathFrame {
    pub radius: f64,
    pub phase: BreathingPhase,
    pub hold: Duration,
}

/// Parameters of one inhale / pause / exhale / pause cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreathingSchedule {
    min_radius: f64,
    max_radius: f64,
    steps: u32,
    phase_duration: Duration,
    pause_duration: Duration,
}

impl BreathingSchedule {
    pub fn new(
        min_radius: f64,
        max_radius: f64,
        steps: u32,
        phase_duration: Duration,
        pause_duration: Duration,
    ) -> Result<Self> {
        if steps == 0 {
            return Err(TrainerError::InvalidSchedule("steps must be positive"));
        }
        if !min_radius.is_finite() || !max_radius.is_finite() || min_radius < 0.0 {
            return Err(TrainerError::InvalidSchedule(
                "radii must be finite and non-negative",
            ));
        }
        if min_radius >= max_radius {
            return Err(TrainerError::InvalidSchedule(
                "min radius must be below max radius",
            ));
        }

        Ok(Self {
            min_radius,
            max_radius,
            steps,
            phase_duration,
            pause_duration,
        })
    }

    /// Full guided cycle played once before the first round:
    /// 4s inhale over 40 steps, 4s hold, 4s exhale, 4s hold.
    pub fn intro() -> Self {
        Self {
            min_radius: 50.0,
            max_radius: 120.0,
            steps: 40,
            phase_duration: Duration::from_millis(4000),
            pause_duration: Duration::from_millis(4000),
        }
    }

    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn step_duration(&self) -> Duration {
        self.phase_duration / self.steps
    }

    /// Total wall time of one playback
    pub fn total_duration(&self) -> Duration {
        self.step_duration() * self.steps * 2 + self.pause_duration * 2
    }

    pub fn frames(&self) -> BreathingAnimation {
        BreathingAnimation {
            schedule: *self,
            phase: Some(BreathingPhase::Inhale),
            step: 0,
        }
    }
}

/// Lazy, finite frame sequence for one breathing cycle
#[derive(Debug, Clone)]
pub struct BreathingAnimation {
    schedule: BreathingSchedule,
    phase: Option<BreathingPhase>,
    step: u32,
}

impl BreathingAnimation {
    fn interpolate(&self, from: f64, to: f64, step: u32) -> f64 {
        let t = f64::from(step) / f64::from(self.schedule.steps);
        from + (to - from) * t
    }
}

impl Iterator for BreathingAnimation {
    type Item = BreathFrame;

    fn next(&mut self) -> Option<BreathFrame> {
        let phase = self.phase?;
        let s = self.schedule;

        let frame = match phase {
            BreathingPhase::Inhale | BreathingPhase::Exhale => {
                self.step += 1;
                let radius = if phase == BreathingPhase::Inhale {
                    self.interpolate(s.min_radius, s.max_radius, self.step)
                } else {
                    self.interpolate(s.max_radius, s.min_radius, self.step)
                };
                if self.step == s.steps {
                    self.step = 0;
                    self.phase = Some(if phase == BreathingPhase::Inhale {
                        BreathingPhase::PauseHigh
                    } else {
                        BreathingPhase::PauseLow
                    });
                }
                BreathFrame {
                    radius,
                    phase,
                    hold: s.step_duration(),
                }
            }
            BreathingPhase::PauseHigh => {
                self.phase = Some(BreathingPhase::Exhale);
                BreathFrame {
                    radius: s.max_radius,
                    phase,
                    hold: s.pause_duration,
                }
            }
            BreathingPhase::PauseLow => {
                self.phase = None;
                BreathFrame {
                    radius: s.min_radius,
                    phase,
                    hold: s.pause_duration,
                }
            }
        };

        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.phase {
            None => 0,
            Some(BreathingPhase::Inhale) => {
                (self.schedule.steps - self.step) as usize * 2 + self.step as usize + 2
            }
            Some(BreathingPhase::PauseHigh) => self.schedule.steps as usize + 2,
            Some(BreathingPhase::Exhale) => (self.schedule.steps - self.step) as usize + 1,
            Some(BreathingPhase::PauseLow) => 1,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BreathingAnimation {}

/// Triangle-wave pulse drawn before each round: starts at max radius and
/// dips to min and back `cycles` times, one frame every `interval`.
#[derive(Debug, Clone)]
pub struct Pulse {
    min_radius: f64,
    max_radius: f64,
    half_period: u32,
    cycles: u32,
    interval: Duration,
    frame: u32,
}

impl Pulse {
    /// Two dips of 20 frames each way, 40ms apart
    pub fn between_rounds() -> Self {
        Self {
            min_radius: 50.0,
            max_radius: 120.0,
            half_period: 20,
            cycles: 2,
            interval: Duration::from_millis(40),
            frame: 0,
        }
    }

    fn last_frame(&self) -> u32 {
        self.half_period * 2 * self.cycles
    }

    /// Wall time from the first frame to the last
    pub fn total_duration(&self) -> Duration {
        self.interval * self.last_frame()
    }
}

impl Iterator for Pulse {
    type Item = BreathFrame;

    fn next(&mut self) -> Option<BreathFrame> {
        if self.frame > self.last_frame() {
            return None;
        }
        let i = self.frame;
        self.frame += 1;

        let period = self.half_period * 2;
        let t = f64::from(i % period) / f64::from(self.half_period) - 1.0;
        let phase = if i % period < self.half_period {
            BreathingPhase::Exhale
        } else {
            BreathingPhase::Inhale
        };
        // the round starts as soon as the last frame is drawn
        let hold = if i == self.last_frame() {
            Duration::ZERO
        } else {
            self.interval
        };

        Some(BreathFrame {
            radius: self.min_radius + (self.max_radius - self.min_radius) * t.abs(),
            phase,
            hold,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_frame() + 1).saturating_sub(self.frame) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pulse {}
