//! config.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Compile-time settings for the countdown controller and the firmware driving it.

/// value the countdown restarts from on every A button press
pub const INITIAL_COUNT: u8 = 9;
/// minimum spacing between two accepted edges from the same button
pub const DEBOUNCE_WINDOW_MS: u32 = 300;
/// countdown tick period
pub const TICK_PERIOD_MS: u32 = 1000;
/// main loop render poll period (also the LED refresh duration)
pub const POLL_INTERVAL_MS: u32 = 50;

/// nRF TIMER peripherals count at 1MHz.
pub const TICKS_PER_SECOND: u32 = 1_000_000;
pub const TICKS_PER_MS: u32 = TICKS_PER_SECOND / 1000;

/// Config Struct
///
/// Runtime view of the tunable controller settings. Kept `const`-constructible so
/// the controller built from it can sit in a `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub initial_count: u8,
    pub debounce_window_ms: u32,
}

impl Config {
    pub const DEFAULT: Config = Config::new(INITIAL_COUNT, DEBOUNCE_WINDOW_MS);

    pub const fn new(initial_count: u8, debounce_window_ms: u32) -> Self {
        Config {
            initial_count,
            debounce_window_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
