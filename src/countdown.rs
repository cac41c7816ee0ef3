//! countdown.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! The countdown state machine.
//!
//! Pressing A (`Reset`) restarts the count from the initial value and starts the run.
//! Every tick while running takes one off the count; the tick that reaches 0 also stops
//! the run. Pressing B (`Increment`) while running bumps the click counter. Nothing
//! here can fail and there is no terminal state: a new `Reset` always restarts the run.

/// Event Enum
///
/// Everything that can drive the countdown, already debounced and classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Reset,
    Increment,
    Tick,
}

/// Phase Enum
///
/// `Idle` covers both "never started" and "expired"; expiry is only the moment the
/// run stops, not a state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Snapshot of the countdown. Cheap to copy, so it doubles as the value handed to
/// the render sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    pub remaining: u8,
    pub secondary_clicks: u32,
    pub running: bool,
}

impl CountdownState {
    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// Idle with nothing left, i.e. a run that ran out rather than one never started.
    pub fn is_expired(&self) -> bool {
        !self.running && self.remaining == 0
    }
}

/// Countdown Struct
///
/// Owns the canonical [`CountdownState`] and the initial count it restarts from.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    state: CountdownState,
    initial_count: u8,
}

impl Countdown {
    /// Start idle with the full count showing.
    pub const fn new(initial_count: u8) -> Self {
        Countdown {
            state: CountdownState {
                remaining: initial_count,
                secondary_clicks: 0,
                running: false,
            },
            initial_count,
        }
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Apply one event. Returns true when the change must be rendered.
    pub fn apply(&mut self, event: Event) -> bool {
        let state = &mut self.state;
        match event {
            Event::Reset => {
                state.remaining = self.initial_count;
                state.secondary_clicks = 0;
                // a zero initial count has nothing to run
                state.running = self.initial_count > 0;
                true
            }
            Event::Tick => {
                if !state.running {
                    return false;
                }
                state.remaining = state.remaining.saturating_sub(1);
                if state.remaining == 0 {
                    state.running = false;
                }
                true
            }
            Event::Increment => {
                if !state.running {
                    return false;
                }
                state.secondary_clicks = state.secondary_clicks.saturating_add(1);
                true
            }
        }
    }
}
