//! Loading splash timeline: text entrance, fixed dwell, slide-out exit.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SplashPhase {
    Entering,
    Dwelling,
    Exiting,
    Gone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTimeline {
    pub entrance: Duration,
    /// Time from mount until the exit transition starts.
    pub dwell: Duration,
    pub exit: Duration,
}

impl Default for SplashTimeline {
    fn default() -> Self {
        Self {
            entrance: Duration::from_secs(1),
            dwell: Duration::from_millis(2500),
            exit: Duration::from_millis(1500),
        }
    }
}

impl SplashTimeline {
    pub fn phase_at(&self, elapsed: Duration) -> SplashPhase {
        if elapsed >= self.dwell + self.exit {
            SplashPhase::Gone
        } else if elapsed >= self.dwell {
            SplashPhase::Exiting
        } else if elapsed >= self.entrance {
            SplashPhase::Dwelling
        } else {
            SplashPhase::Entering
        }
    }

    pub fn total(&self) -> Duration {
        self.dwell + self.exit
    }
}

/// One-way splash state; once `Gone` it stays gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splash {
    phase: SplashPhase,
}

impl Default for Splash {
    fn default() -> Self {
        Self {
            phase: SplashPhase::Entering,
        }
    }
}

impl Splash {
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != SplashPhase::Gone
    }

    /// Moves forward to `next`; attempts to go backwards are ignored.
    pub fn advance(&mut self, next: SplashPhase) -> SplashPhase {
        if next > self.phase {
            self.phase = next;
        }
        self.phase
    }
}
