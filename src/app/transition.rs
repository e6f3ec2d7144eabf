use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    FadingOut { started: Instant },
}

/// Fade from the selection panel to the results view. `begin` starts the
/// fade, `poll` reports completion exactly once, `cancel` drops it.
#[derive(Debug, Clone)]
pub struct OverlayTransition {
    phase: Phase,
    duration: Duration,
}

impl OverlayTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            duration,
        }
    }

    /// Starts the fade. A fade already in progress is restarted from `now`.
    pub fn begin(&mut self, now: Instant) {
        self.phase = Phase::FadingOut { started: now };
    }

    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::FadingOut { .. })
    }

    /// Fraction of the fade elapsed, 0.0 when idle.
    pub fn progress(&self, now: Instant) -> f64 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::FadingOut { .. } if self.duration.is_zero() => 1.0,
            Phase::FadingOut { started } => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
            }
        }
    }

    /// Returns true once when the fade has run its full duration.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::FadingOut { started } if now.saturating_duration_since(started) >= self.duration => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }
}
