//! Fixed cadence re-rendering of a debugger view.
//!
//! The driver is not tied to any UI toolkit: hosts with an event loop call
//! [`RefreshDriver::poll`] and use the returned delay as their wait timeout, hosts without one
//! call [`RefreshDriver::run`]. Ticking is independent from emulation, so a paused emulator keeps
//! being redrawn from its frozen state.

use crate::{Error, Present, Renderer};
use machine::{EmulatorStateView, StaticState};
use spin_sleep::SpinSleeper;
use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};
use tracing::warn;

/// Redraw interval used when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

/// Shortest accepted redraw interval.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Provides access to emulator state for the duration of a callback.
pub trait StateSource {
    fn with_view(&self, f: &mut dyn FnMut(&dyn EmulatorStateView));
}

impl StateSource for StaticState {
    fn with_view(&self, f: &mut dyn FnMut(&dyn EmulatorStateView)) {
        f(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A snapshot was rendered and handed to the target.
    Presented,
    /// Rendering or presenting failed; the target keeps showing the previous frame.
    Skipped,
}

#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub presented: u64,
    pub skipped: u64,
    /// Error of the most recent tick, if it was skipped.
    pub last_error: Option<Error>,
}

pub struct RefreshDriver {
    renderer: Renderer,
    interval: Duration,
    next: Option<Instant>,
    stats: Stats,
}

impl Default for RefreshDriver {
    fn default() -> Self {
        Self::new(Renderer::default(), DEFAULT_INTERVAL)
    }
}

impl RefreshDriver {
    pub fn new(renderer: Renderer, interval: Duration) -> Self {
        Self {
            renderer,
            interval: interval.max(MIN_INTERVAL),
            next: None,
            stats: Stats::default(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the redraw interval. Takes effect after the next tick.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(MIN_INTERVAL);
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Renders `state` and presents it to `target`.
    ///
    /// Errors never leave this function: they are logged, counted and the tick is skipped.
    pub fn tick(
        &mut self,
        state: &dyn EmulatorStateView,
        target: &mut dyn Present,
    ) -> TickOutcome {
        let result = self
            .renderer
            .render(state)
            .and_then(|snapshot| target.present(&snapshot));

        match result {
            Ok(()) => {
                self.stats.presented += 1;
                self.stats.last_error = None;
                TickOutcome::Presented
            }
            Err(e) => {
                warn!("skipping refresh tick: {e}");
                self.stats.skipped += 1;
                self.stats.last_error = Some(e);
                TickOutcome::Skipped
            }
        }
    }

    /// Ticks if the interval has elapsed at `now`, then returns how long until the next tick is
    /// due.
    ///
    /// Missed deadlines are not caught up: after a late tick the schedule restarts from `now`.
    pub fn poll(
        &mut self,
        now: Instant,
        source: &dyn StateSource,
        target: &mut dyn Present,
    ) -> Duration {
        let due = self.next.is_none_or(|next| now >= next);
        if due {
            source.with_view(&mut |view| {
                self.tick(view, &mut *target);
            });

            let next = self.next.map_or(now, |next| next + self.interval);
            self.next = Some(if next <= now { now + self.interval } else { next });
        }

        self.next
            .map_or(Duration::ZERO, |next| next.saturating_duration_since(now))
    }

    /// Ticks on schedule until `stop` is set.
    pub fn run(&mut self, source: &dyn StateSource, target: &mut dyn Present, stop: &AtomicBool) {
        let sleeper = SpinSleeper::default();
        while !stop.load(Ordering::Relaxed) {
            let wait = self.poll(Instant::now(), source, target);
            if !wait.is_zero() && !stop.load(Ordering::Relaxed) {
                sleeper.sleep(wait);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{FormattedSnapshot, Panel};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<FormattedSnapshot>,
    }

    impl Present for Recorder {
        fn present(&mut self, snapshot: &FormattedSnapshot) -> Result<(), Error> {
            self.frames.push(snapshot.clone());
            Ok(())
        }
    }

    #[test]
    fn failed_ticks_are_skipped() {
        let mut driver = RefreshDriver::default();
        let mut recorder = Recorder::default();

        let mut state = StaticState {
            cpu_type: 0,
            ..Default::default()
        };
        assert_eq!(driver.tick(&state, &mut recorder), TickOutcome::Skipped);
        assert!(recorder.frames.is_empty());
        assert_eq!(
            driver.stats().last_error,
            Some(Error::UnknownCpuType { ordinal: 0 })
        );

        state.cpu_type = 1;
        assert_eq!(driver.tick(&state, &mut recorder), TickOutcome::Presented);
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(driver.stats().presented, 1);
        assert_eq!(driver.stats().skipped, 1);
        assert_eq!(driver.stats().last_error, None);
    }

    #[test]
    fn presentation_errors_are_skipped() {
        let mut driver = RefreshDriver::default();
        let mut panel = Panel::new();

        let outcome = driver.tick(&StaticState::default(), &mut panel);
        assert_eq!(outcome, TickOutcome::Skipped);
        assert!(matches!(
            driver.stats().last_error,
            Some(Error::StaleWidgetHandle { .. })
        ));
    }

    #[test]
    fn poll_waits_for_the_interval() {
        let mut driver = RefreshDriver::new(Renderer::default(), Duration::from_millis(16));
        let mut recorder = Recorder::default();
        let state = StaticState::default();

        let start = Instant::now();
        let wait = driver.poll(start, &state, &mut recorder);
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(wait, Duration::from_millis(16));

        let wait = driver.poll(start + Duration::from_millis(10), &state, &mut recorder);
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(wait, Duration::from_millis(6));

        driver.poll(start + Duration::from_millis(16), &state, &mut recorder);
        assert_eq!(recorder.frames.len(), 2);
    }

    #[test]
    fn late_polls_do_not_burst() {
        let mut driver = RefreshDriver::new(Renderer::default(), Duration::from_millis(16));
        let mut recorder = Recorder::default();
        let state = StaticState::default();

        let start = Instant::now();
        driver.poll(start, &state, &mut recorder);

        // a whole second late: one tick, then back on a 16ms schedule
        let late = start + Duration::from_secs(1);
        let wait = driver.poll(late, &state, &mut recorder);
        assert_eq!(recorder.frames.len(), 2);
        assert_eq!(wait, Duration::from_millis(16));

        driver.poll(late + Duration::from_millis(1), &state, &mut recorder);
        assert_eq!(recorder.frames.len(), 2);
    }

    #[test]
    fn interval_has_a_floor() {
        let mut driver = RefreshDriver::new(Renderer::default(), Duration::ZERO);
        assert_eq!(driver.interval(), MIN_INTERVAL);

        driver.set_interval(Duration::from_millis(100));
        assert_eq!(driver.interval(), Duration::from_millis(100));
    }
}
