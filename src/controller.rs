//! controller.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Shared controller state and its three entry points.
//!
//! * [`Controller::on_edge`] runs in the GPIOTE handler for every raw button edge.
//! * [`Controller::on_tick`] runs in the countdown timer handler once per period.
//! * [`Controller::poll_and_render`] runs in the main loop.
//!
//! The countdown and both debounce records sit behind one `critical_section::Mutex`, so
//! every transition updates all of its fields before the main loop can look at them,
//! and the main loop's snapshot is a single read. The dirty flag is an atomic outside
//! the lock since setting it twice is harmless.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::config::Config;
use crate::countdown::{Countdown, CountdownState, Event};
use crate::debounce::{Debouncer, Source};
use crate::render::{RenderFlag, RenderSink};
use crate::uptime::Millis;

struct Inner {
    countdown: Countdown,
    debouncer: Debouncer,
}

/// Controller Struct
///
/// `const`-constructible so it can live in a `static` shared by the interrupt handlers
/// and the main loop.
pub struct Controller {
    inner: Mutex<RefCell<Inner>>,
    dirty: RenderFlag,
}

impl Controller {
    pub const fn new(config: Config) -> Self {
        Controller {
            inner: Mutex::new(RefCell::new(Inner {
                countdown: Countdown::new(config.initial_count),
                debouncer: Debouncer::new(config.debounce_window_ms),
            })),
            dirty: RenderFlag::new(),
        }
    }

    /// Handle one raw button edge seen at `now`. Returns true if it changed the state.
    ///
    /// B edges are dropped while no run is active before they reach the debouncer, so
    /// idle presses leave its record untouched.
    pub fn on_edge(&self, source: Source, now: Millis) -> bool {
        let changed = critical_section::with(|cs| {
            let mut inner = self.inner.borrow_ref_mut(cs);
            let event = match source {
                Source::Primary => Event::Reset,
                Source::Secondary => {
                    if !inner.countdown.is_running() {
                        return false;
                    }
                    Event::Increment
                }
            };
            if !inner.debouncer.accept(source, now) {
                return false;
            }
            inner.countdown.apply(event)
        });
        if changed {
            self.dirty.mark_dirty();
        }
        changed
    }

    /// Advance the countdown by one period. A late tick still counts once.
    pub fn on_tick(&self) -> bool {
        let changed =
            critical_section::with(|cs| self.inner.borrow_ref_mut(cs).countdown.apply(Event::Tick));
        if changed {
            self.dirty.mark_dirty();
        }
        changed
    }

    /// Consistent copy of the countdown as of one instant.
    pub fn snapshot(&self) -> CountdownState {
        critical_section::with(|cs| self.inner.borrow_ref(cs).countdown.state())
    }

    pub fn mark_dirty(&self) {
        self.dirty.mark_dirty();
    }

    /// Render once if anything changed since the last call. Returns true if the sink ran.
    ///
    /// The flag is cleared before the snapshot is taken, so a change landing while the
    /// sink runs leaves the flag set and is drawn on the next poll.
    pub fn poll_and_render<S: RenderSink>(&self, sink: &mut S) -> bool {
        if !self.dirty.take() {
            return false;
        }
        let snapshot = self.snapshot();
        sink.render(&snapshot);
        true
    }
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new(Config::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every snapshot it is handed.
    #[derive(Default)]
    struct Recorder {
        frames: [Option<CountdownState>; 8],
        count: usize,
    }

    impl RenderSink for Recorder {
        fn render(&mut self, snapshot: &CountdownState) {
            self.frames[self.count] = Some(*snapshot);
            self.count += 1;
        }
    }

    impl Recorder {
        fn last(&self) -> Option<CountdownState> {
            self.count.checked_sub(1).and_then(|i| self.frames[i])
        }
    }

    fn state(remaining: u8, secondary_clicks: u32, running: bool) -> CountdownState {
        CountdownState {
            remaining,
            secondary_clicks,
            running,
        }
    }

    /// Controller with the boot render already consumed.
    fn polled() -> Controller {
        let controller = Controller::default();
        let mut sink = Recorder::default();
        assert!(controller.poll_and_render(&mut sink));
        assert_eq!(sink.last(), Some(state(9, 0, false)));
        controller
    }

    #[test]
    fn reset_then_click_then_tick() {
        let controller = polled();
        assert!(controller.on_edge(Source::Primary, 0));
        assert!(controller.on_edge(Source::Secondary, 100));
        assert!(controller.on_tick());

        let mut sink = Recorder::default();
        assert!(controller.poll_and_render(&mut sink));
        assert_eq!(sink.count, 1);
        assert_eq!(sink.last(), Some(state(8, 1, true)));
    }

    #[test]
    fn spaced_resets_each_restart_the_run() {
        let controller = polled();
        let mut now = 0;
        for _ in 0..4 {
            assert!(controller.on_edge(Source::Primary, now));
            controller.on_edge(Source::Secondary, now + 10);
            controller.on_tick();
            now += 301;
            assert!(controller.on_edge(Source::Primary, now));
            assert_eq!(controller.snapshot(), state(9, 0, true));
            now += 301;
        }
    }

    #[test]
    fn bounced_reset_is_ignored() {
        let controller = polled();
        assert!(controller.on_edge(Source::Primary, 1_000));
        controller.on_tick();
        assert!(!controller.on_edge(Source::Primary, 1_300));
        assert_eq!(controller.snapshot().remaining, 8);
    }

    #[test]
    fn idle_click_changes_nothing_and_keeps_debounce_clear() {
        let controller = polled();
        let before = controller.snapshot();
        assert!(!controller.on_edge(Source::Secondary, 500));
        assert_eq!(controller.snapshot(), before);

        let mut sink = Recorder::default();
        assert!(!controller.poll_and_render(&mut sink));
        assert_eq!(sink.count, 0);

        // the idle press at 500 must not have started a debounce window
        assert!(controller.on_edge(Source::Primary, 600));
        assert!(controller.on_edge(Source::Secondary, 650));
        assert_eq!(controller.snapshot().secondary_clicks, 1);
    }

    #[test]
    fn nine_ticks_expire_the_run() {
        let controller = polled();
        controller.on_edge(Source::Primary, 0);
        for k in 1..=9u8 {
            assert!(controller.on_tick());
            let snapshot = controller.snapshot();
            assert_eq!(snapshot.remaining, 9 - k);
            assert_eq!(snapshot.running, k < 9);
        }
        assert!(!controller.on_tick());
        assert_eq!(controller.snapshot(), state(0, 0, false));
    }

    #[test]
    fn marks_coalesce_into_latest_render() {
        let controller = polled();
        controller.on_edge(Source::Primary, 0);
        controller.on_tick();
        controller.on_tick();

        let mut sink = Recorder::default();
        assert!(controller.poll_and_render(&mut sink));
        assert!(!controller.poll_and_render(&mut sink));
        assert_eq!(sink.count, 1);
        assert_eq!(sink.last(), Some(state(7, 0, true)));
    }

    #[test]
    fn change_during_render_is_drawn_next_poll() {
        let controller = polled();
        controller.on_edge(Source::Primary, 0);

        let mut first = None;
        let mut sink = |snapshot: &CountdownState| {
            first = Some(*snapshot);
            // tick lands while the sink is busy
            controller.on_tick();
        };
        assert!(controller.poll_and_render(&mut sink));
        assert_eq!(first, Some(state(9, 0, true)));

        let mut recorder = Recorder::default();
        assert!(controller.poll_and_render(&mut recorder));
        assert_eq!(recorder.last(), Some(state(8, 0, true)));
    }

    #[test]
    fn explicit_mark_forces_render() {
        let controller = polled();
        controller.mark_dirty();
        let mut sink = Recorder::default();
        assert!(controller.poll_and_render(&mut sink));
        assert_eq!(sink.last(), Some(state(9, 0, false)));
    }
}
