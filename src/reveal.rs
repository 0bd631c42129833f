//! Scroll-triggered reveal bookkeeping.
//!
//! Regions register a [`Trigger`] (a viewport band plus a probe that reports
//! where the region currently sits) together with enter/leave callbacks.
//! [`ScrollReveal::refresh`] samples every probe and fires the callbacks on
//! crossings only: playing forward when the region's top passes the band
//! while scrolling down, and in reverse when it falls back below it.

use std::time::Duration;

/// Delay between siblings of a staggered cascade.
pub const STAGGER_STEP: Duration = Duration::from_millis(200);

/// Horizontal line, as a fraction of the viewport height measured from the
/// top, that a region's top edge has to cross to be revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    pub start: f64,
}

impl TriggerBand {
    pub const TOP_80: TriggerBand = TriggerBand { start: 0.8 };
    pub const TOP_85: TriggerBand = TriggerBand { start: 0.85 };
    pub const TOP_90: TriggerBand = TriggerBand { start: 0.9 };

    pub fn is_past(&self, bounds: RegionBounds, viewport_height: f64) -> bool {
        bounds.top <= self.start * viewport_height
    }
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self::TOP_80
    }
}

/// Region geometry relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Forward,
    Reverse,
}

/// Toggle state of one region: play forward on enter, reverse on leave-back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed the latest "past the trigger" sample; returns a playback only
    /// when the sample differs from the current state.
    pub fn observe(&mut self, past: bool) -> Option<Playback> {
        match (self.revealed, past) {
            (false, true) => {
                self.revealed = true;
                Some(Playback::Forward)
            }
            (true, false) => {
                self.revealed = false;
                Some(Playback::Reverse)
            }
            _ => None,
        }
    }
}

pub type Probe = Box<dyn Fn() -> Option<RegionBounds> + Send + Sync>;
pub type RevealCallback = Box<dyn FnMut() + Send + Sync>;

pub struct Trigger {
    band: TriggerBand,
    probe: Probe,
}

impl Trigger {
    pub fn new<F>(band: TriggerBand, probe: F) -> Self
    where
        F: Fn() -> Option<RegionBounds> + Send + Sync + 'static,
    {
        Self {
            band,
            probe: Box::new(probe),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

/// Registration surface for reveal regions. Implementations own whatever
/// subscriptions they need and must release them in `teardown`.
pub trait RevealController {
    fn register_region(
        &mut self,
        trigger: Trigger,
        on_enter: RevealCallback,
        on_leave: RevealCallback,
    ) -> RegionId;

    fn deregister(&mut self, id: RegionId);

    fn teardown(&mut self);
}

struct Region {
    trigger: Trigger,
    state: RevealState,
    on_enter: RevealCallback,
    on_leave: RevealCallback,
}

/// In-memory controller driven by explicit `refresh` calls (scroll, resize
/// and mount in the browser; direct calls in tests).
#[derive(Default)]
pub struct ScrollReveal {
    regions: Vec<Option<Region>>,
    torn_down: bool,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_regions(&self) -> usize {
        self.regions.iter().flatten().count()
    }

    #[cfg(test)]
    fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Samples every region and fires callbacks for crossings. Returns the
    /// number of playbacks started.
    pub fn refresh(&mut self, viewport_height: f64) -> usize {
        if self.torn_down {
            return 0;
        }
        let mut fired = 0;
        for region in self.regions.iter_mut().flatten() {
            // unmounted regions keep their state until they report again
            let Some(bounds) = (region.trigger.probe)() else {
                continue;
            };
            let past = region.trigger.band.is_past(bounds, viewport_height);
            match region.state.observe(past) {
                Some(Playback::Forward) => (region.on_enter)(),
                Some(Playback::Reverse) => (region.on_leave)(),
                None => continue,
            }
            fired += 1;
        }
        fired
    }
}

impl RevealController for ScrollReveal {
    fn register_region(
        &mut self,
        trigger: Trigger,
        on_enter: RevealCallback,
        on_leave: RevealCallback,
    ) -> RegionId {
        let id = RegionId(self.regions.len());
        if self.torn_down {
            self.regions.push(None);
        } else {
            self.regions.push(Some(Region {
                trigger,
                state: RevealState::default(),
                on_enter,
                on_leave,
            }));
        }
        id
    }

    fn deregister(&mut self, id: RegionId) {
        if let Some(slot) = self.regions.get_mut(id.0) {
            *slot = None;
        }
    }

    fn teardown(&mut self) {
        self.regions.clear();
        self.torn_down = true;
    }
}

/// Starting pose of a reveal transition; the end pose is always the
/// element's natural position at full opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealEffect {
    pub from_x: f64,
    pub from_y: f64,
    pub from_scale: f64,
    pub duration: Duration,
    pub delay: Duration,
}

impl RevealEffect {
    pub const fn fade_up(distance: f64) -> Self {
        Self {
            from_x: 0.0,
            from_y: distance,
            from_scale: 1.0,
            duration: Duration::from_secs(1),
            delay: Duration::ZERO,
        }
    }

    pub const fn slide_x(offset: f64) -> Self {
        Self {
            from_x: offset,
            from_y: 0.0,
            from_scale: 1.0,
            duration: Duration::from_secs(1),
            delay: Duration::ZERO,
        }
    }

    pub const fn pop() -> Self {
        Self {
            from_x: 0.0,
            from_y: 0.0,
            from_scale: 0.0,
            duration: Duration::from_millis(600),
            delay: Duration::ZERO,
        }
    }

    pub fn scale_from(self, from_scale: f64) -> Self {
        Self { from_scale, ..self }
    }

    pub fn lasting(self, duration: Duration) -> Self {
        Self { duration, ..self }
    }

    pub fn staggered(self, index: usize, step: Duration) -> Self {
        Self {
            delay: stagger_delay(index, step),
            ..self
        }
    }

    /// Inline style consumed by the `.reveal` rules in `input.css`.
    pub fn style(&self) -> String {
        format!(
            "--reveal-x: {}px; --reveal-y: {}px; --reveal-scale: {}; transition-duration: {}ms; transition-delay: {}ms;",
            self.from_x,
            self.from_y,
            self.from_scale,
            self.duration.as_millis(),
            self.delay.as_millis()
        )
    }
}

/// Delay of the `index`-th sibling in a cascade.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * u32::try_from(index).unwrap_or(u32::MAX)
}

/// Scrubbed parallax offset, in percent of the element's own height.
///
/// Progress runs from 0 when the region's top enters at the bottom of the
/// viewport to 1 when its bottom leaves through the top.
pub fn parallax_shift(bounds: RegionBounds, viewport_height: f64, max_percent: f64) -> f64 {
    let span = viewport_height + bounds.height;
    if span <= 0.0 {
        return 0.0;
    }
    let progress = ((viewport_height - bounds.top) / span).clamp(0.0, 1.0);
    max_percent * progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    const VIEWPORT: f64 = 1000.0;

    struct Harness {
        top: Arc<Mutex<Option<f64>>>,
        enters: Arc<AtomicUsize>,
        leaves: Arc<AtomicUsize>,
    }

    impl Harness {
        fn register(controller: &mut ScrollReveal, band: TriggerBand) -> (Self, RegionId) {
            let top = Arc::new(Mutex::new(Some(2000.0)));
            let enters = Arc::new(AtomicUsize::new(0));
            let leaves = Arc::new(AtomicUsize::new(0));
            let probe_top = top.clone();
            let (e, l) = (enters.clone(), leaves.clone());
            let id = controller.register_region(
                Trigger::new(band, move || {
                    probe_top.lock().expect("probe lock").map(|top| RegionBounds {
                        top,
                        height: 400.0,
                    })
                }),
                Box::new(move || {
                    e.fetch_add(1, Ordering::SeqCst);
                }),
                Box::new(move || {
                    l.fetch_add(1, Ordering::SeqCst);
                }),
            );
            (
                Self {
                    top,
                    enters,
                    leaves,
                },
                id,
            )
        }

        fn scroll_to(&self, top: f64) {
            *self.top.lock().expect("probe lock") = Some(top);
        }

        fn counts(&self) -> (usize, usize) {
            (
                self.enters.load(Ordering::SeqCst),
                self.leaves.load(Ordering::SeqCst),
            )
        }
    }

    #[test]
    fn test_band_threshold() {
        let bounds = |top| RegionBounds { top, height: 10.0 };
        assert!(TriggerBand::TOP_80.is_past(bounds(800.0), VIEWPORT));
        assert!(!TriggerBand::TOP_80.is_past(bounds(801.0), VIEWPORT));
        assert!(TriggerBand::TOP_90.is_past(bounds(850.0), VIEWPORT));
        assert_eq!(TriggerBand::default(), TriggerBand::TOP_80);
    }

    #[test]
    fn test_state_toggles_only_on_change() {
        let mut state = RevealState::default();
        assert_eq!(state.observe(false), None);
        assert_eq!(state.observe(true), Some(Playback::Forward));
        assert_eq!(state.observe(true), None);
        assert!(state.is_revealed());
        assert_eq!(state.observe(false), Some(Playback::Reverse));
        assert_eq!(state.observe(false), None);
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_enter_plays_once_per_crossing() {
        let mut controller = ScrollReveal::new();
        let (region, _) = Harness::register(&mut controller, TriggerBand::TOP_80);

        assert_eq!(controller.refresh(VIEWPORT), 0);
        region.scroll_to(700.0);
        assert_eq!(controller.refresh(VIEWPORT), 1);
        // more scroll events while inside the band change nothing
        region.scroll_to(300.0);
        controller.refresh(VIEWPORT);
        region.scroll_to(-200.0);
        controller.refresh(VIEWPORT);
        assert_eq!(region.counts(), (1, 0));
    }

    #[test]
    fn test_leave_back_reverses_then_replays() {
        let mut controller = ScrollReveal::new();
        let (region, _) = Harness::register(&mut controller, TriggerBand::TOP_80);

        region.scroll_to(500.0);
        controller.refresh(VIEWPORT);
        region.scroll_to(900.0);
        controller.refresh(VIEWPORT);
        assert_eq!(region.counts(), (1, 1));
        region.scroll_to(600.0);
        controller.refresh(VIEWPORT);
        assert_eq!(region.counts(), (2, 1));
    }

    #[test]
    fn test_unmounted_probe_keeps_state() {
        let mut controller = ScrollReveal::new();
        let (region, _) = Harness::register(&mut controller, TriggerBand::TOP_80);
        region.scroll_to(100.0);
        controller.refresh(VIEWPORT);
        *region.top.lock().expect("probe lock") = None;
        assert_eq!(controller.refresh(VIEWPORT), 0);
        region.scroll_to(200.0);
        assert_eq!(controller.refresh(VIEWPORT), 0);
        assert_eq!(region.counts(), (1, 0));
    }

    #[test]
    fn test_teardown_releases_regions() {
        let mut controller = ScrollReveal::new();
        let (first, _) = Harness::register(&mut controller, TriggerBand::TOP_80);
        let (second, second_id) = Harness::register(&mut controller, TriggerBand::TOP_90);
        assert_eq!(controller.active_regions(), 2);

        controller.deregister(second_id);
        assert_eq!(controller.active_regions(), 1);
        second.scroll_to(0.0);
        controller.refresh(VIEWPORT);
        assert_eq!(second.counts(), (0, 0));

        controller.teardown();
        assert!(controller.is_torn_down());
        first.scroll_to(0.0);
        assert_eq!(controller.refresh(VIEWPORT), 0);
        assert_eq!(first.counts(), (0, 0));

        let (late, _) = Harness::register(&mut controller, TriggerBand::TOP_80);
        late.scroll_to(0.0);
        controller.refresh(VIEWPORT);
        assert_eq!(late.counts(), (0, 0));
        assert_eq!(controller.active_regions(), 0);
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, STAGGER_STEP), Duration::ZERO);
        assert_eq!(stagger_delay(3, STAGGER_STEP), Duration::from_millis(600));
        assert_eq!(
            stagger_delay(2, Duration::from_millis(300)),
            Duration::from_millis(600)
        );
    }

    #[test]
    fn test_effect_style() {
        let effect = RevealEffect::fade_up(80.0).staggered(2, STAGGER_STEP);
        assert_eq!(
            effect.style(),
            "--reveal-x: 0px; --reveal-y: 80px; --reveal-scale: 1; transition-duration: 1000ms; transition-delay: 400ms;"
        );
        let card = RevealEffect::slide_x(-100.0).scale_from(0.8);
        assert_eq!(card.from_x, -100.0);
        assert_eq!(card.from_scale, 0.8);
        assert_eq!(
            RevealEffect::pop().lasting(Duration::from_millis(300)).duration,
            Duration::from_millis(300)
        );
    }

    #[test]
    fn test_parallax_progress() {
        let at = |top| parallax_shift(RegionBounds { top, height: 1000.0 }, VIEWPORT, -30.0);
        assert_eq!(at(1500.0), 0.0);
        assert_eq!(at(1000.0), 0.0);
        assert_eq!(at(0.0), -15.0);
        assert_eq!(at(-1000.0), -30.0);
        assert_eq!(at(-4000.0), -30.0);
    }
}
