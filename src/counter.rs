//! Numeric tweens for the About stat counters.

use std::time::Duration;

use crate::content::{Affix, StatCounter};

pub const COUNTER_DURATION: Duration = Duration::from_secs(2);

/// Longest step a single animation frame may contribute.
pub const MAX_FRAME_STEP: Duration = Duration::from_millis(50);

/// Display precision a tweened value is snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snap {
    Whole,
    Hundredths,
}

impl Snap {
    pub fn for_target(target: f64) -> Self {
        if target.fract() == 0.0 {
            Snap::Whole
        } else {
            Snap::Hundredths
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Snap::Whole => value.round(),
            Snap::Hundredths => (value * 100.0).round() / 100.0,
        }
    }

    pub fn decimals(&self) -> usize {
        match self {
            Snap::Whole => 0,
            Snap::Hundredths => 2,
        }
    }
}

/// A 0 → target tween. Progress is kept by the caller in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTween {
    pub target: f64,
    pub duration: Duration,
    pub snap: Snap,
}

impl CounterTween {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration: COUNTER_DURATION,
            snap: Snap::for_target(target),
        }
    }

    /// Moves `progress` by `delta` toward 1 (forward) or 0 (reverse).
    pub fn advance(&self, progress: f64, delta: Duration, forward: bool) -> f64 {
        let total = self.duration.as_secs_f64();
        let step = if total > 0.0 {
            delta.as_secs_f64() / total
        } else {
            1.0
        };
        if forward {
            (progress + step).min(1.0)
        } else {
            (progress - step).max(0.0)
        }
    }

    pub fn is_settled(&self, progress: f64, forward: bool) -> bool {
        if forward {
            progress >= 1.0
        } else {
            progress <= 0.0
        }
    }

    /// Eased (`power1.out`) and snapped value; the endpoints are exact.
    pub fn value_at(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            return self.target;
        }
        if progress <= 0.0 {
            return 0.0;
        }
        let eased = 1.0 - (1.0 - progress).powi(2);
        self.snap.apply(self.target * eased)
    }
}

/// Turns animation-frame timestamps (milliseconds) into per-frame steps.
///
/// The first tick after `reset` yields zero so time spent paused never
/// reaches the tween, and every step is capped at [`MAX_FRAME_STEP`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn tick(&mut self, timestamp: f64) -> Duration {
        let step = match self.last {
            Some(last) => (timestamp - last).clamp(0.0, MAX_FRAME_STEP.as_millis() as f64),
            None => 0.0,
        };
        self.last = Some(timestamp);
        Duration::from_micros((step * 1000.0).round() as u64)
    }
}

impl StatCounter {
    pub fn tween(&self) -> CounterTween {
        CounterTween::new(self.target)
    }

    /// Formats a tweened value with this counter's unit in place.
    pub fn render(&self, value: f64) -> String {
        let decimals = Snap::for_target(self.target).decimals();
        let number = format!("{value:.decimals$}");
        match self.affix {
            Affix::None => number,
            Affix::Prefix(p) => format!("{p}{number}"),
            Affix::Suffix(s) => format!("{number}{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Icon, STATS};

    fn frames(tween: &CounterTween, forward: bool, start: f64) -> Vec<f64> {
        let mut progress = start;
        let mut values = Vec::new();
        while !tween.is_settled(progress, forward) {
            progress = tween.advance(progress, Duration::from_millis(16), forward);
            values.push(tween.value_at(progress));
        }
        values
    }

    #[test]
    fn test_snap_selection() {
        assert_eq!(Snap::for_target(300.0), Snap::Whole);
        assert_eq!(Snap::for_target(3.0), Snap::Whole);
        assert_eq!(Snap::for_target(8.23), Snap::Hundredths);
        assert_eq!(Snap::Hundredths.apply(4.5678), 4.57);
        assert_eq!(Snap::Whole.apply(1999.6), 2000.0);
    }

    #[test]
    fn test_final_value_is_exact() {
        for stat in STATS {
            let tween = stat.tween();
            let values = frames(&tween, true, 0.0);
            assert_eq!(*values.last().expect("at least one frame"), stat.target);
        }
    }

    #[test]
    fn test_intermediate_values_are_snapped() {
        let whole = CounterTween::new(300.0);
        for v in frames(&whole, true, 0.0) {
            assert_eq!(v.fract(), 0.0);
        }
        let fractional = CounterTween::new(8.23);
        for v in frames(&fractional, true, 0.0) {
            assert_eq!(Snap::Hundredths.apply(v), v);
            assert!(v <= 8.23);
        }
    }

    #[test]
    fn test_reverse_returns_to_zero() {
        let tween = CounterTween::new(2000.0);
        let values = frames(&tween, false, 1.0);
        assert_eq!(*values.last().expect("at least one frame"), 0.0);
        assert!(tween.is_settled(0.0, false));
        assert!(!tween.is_settled(0.0, true));
    }

    #[test]
    fn test_frame_clock_ignores_paused_time() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(1000.0), Duration::ZERO);
        assert_eq!(clock.tick(1016.0), Duration::from_millis(16));
        // a long stall is capped
        assert_eq!(clock.tick(1516.0), MAX_FRAME_STEP);
        // clocks going backwards never produce a negative step
        assert_eq!(clock.tick(1400.0), Duration::ZERO);
        clock.reset();
        assert_eq!(clock.tick(9000.0), Duration::ZERO);
    }

    #[test]
    fn test_replay_after_pause_tweens_again() {
        let tween = CounterTween::new(300.0);
        let mut clock = FrameClock::default();
        let mut now = 0.0;
        let run = |progress: &mut f64, forward: bool, clock: &mut FrameClock, now: &mut f64| {
            let mut frames = 0;
            let mut first = None;
            while !tween.is_settled(*progress, forward) {
                *progress = tween.advance(*progress, clock.tick(*now), forward);
                first.get_or_insert(tween.value_at(*progress));
                *now += 16.0;
                frames += 1;
            }
            (frames, first)
        };

        let mut progress = 0.0;
        let (reveal_frames, _) = run(&mut progress, true, &mut clock, &mut now);
        assert!(reveal_frames > 100);

        // the loop sits paused for five seconds, then the region leaves
        now += 5000.0;
        clock.reset();
        let (leave_frames, first) = run(&mut progress, false, &mut clock, &mut now);
        assert!(leave_frames > 100);
        assert_eq!(first, Some(300.0));

        now += 5000.0;
        clock.reset();
        let (enter_frames, first) = run(&mut progress, true, &mut clock, &mut now);
        assert!(enter_frames > 100);
        assert_eq!(first, Some(0.0));
    }

    #[test]
    fn test_advance_clamps() {
        let tween = CounterTween::new(10.0);
        assert_eq!(tween.advance(0.9, Duration::from_secs(1), true), 1.0);
        assert_eq!(tween.advance(0.1, Duration::from_secs(1), false), 0.0);
        assert_eq!(tween.advance(0.0, Duration::from_secs(1), true), 0.5);
    }

    #[test]
    fn test_render_affix_positions() {
        let rendered = STATS
            .iter()
            .map(|s| s.render(s.target))
            .collect::<Vec<_>>();
        assert_eq!(rendered, vec!["300+", "8.23", "3", "$2000"]);

        let stat = StatCounter {
            target: 8.23,
            affix: Affix::None,
            label: "CGPA",
            icon: Icon::Award,
        };
        assert_eq!(stat.render(0.0), "0.00");
        assert_eq!(stat.render(4.1), "4.10");
    }
}
