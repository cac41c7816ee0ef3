//! uptime.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Monotonic millisecond clock built on a free-running 32 bit hardware counter.
//!
//! The nRF TIMER counts at 1MHz and wraps roughly every 71 minutes. Each call to
//! [`Uptime::observe`] compares the fresh reading with the previous one; a smaller
//! value means the counter wrapped and the upper half is bumped. As long as the
//! counter is sampled at least once per wrap period (the 1s countdown tick does this)
//! the extended value never goes backwards.

use crate::config::TICKS_PER_MS;

/// milliseconds since boot
pub type Millis = u64;

/// Uptime Struct
///
/// Extends raw 32 bit counter readings into a 64 bit tick count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uptime {
    last_raw: u32,
    wraps: u32,
}

impl Uptime {
    pub const fn new() -> Self {
        Uptime {
            last_raw: 0,
            wraps: 0,
        }
    }

    /// Feed a raw counter reading and return the current uptime in ms.
    pub fn observe(&mut self, raw_ticks: u32) -> Millis {
        if raw_ticks < self.last_raw {
            self.wraps = self.wraps.wrapping_add(1);
        }
        self.last_raw = raw_ticks;

        let ticks = ((self.wraps as u64) << 32) | raw_ticks as u64;
        ticks / TICKS_PER_MS as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_ticks_to_ms() {
        let mut uptime = Uptime::new();
        assert_eq!(uptime.observe(0), 0);
        assert_eq!(uptime.observe(999), 0);
        assert_eq!(uptime.observe(1_000), 1);
        assert_eq!(uptime.observe(300_000), 300);
    }

    #[test]
    fn counter_wrap_keeps_time_monotonic() {
        let mut uptime = Uptime::new();
        let before = uptime.observe(u32::MAX - 500_000);
        let after = uptime.observe(500_000);
        assert!(after > before);
        // 1_000_001 ticks elapsed across the wrap
        assert_eq!(after - before, 1000);
    }

    #[test]
    fn repeated_reading_is_not_a_wrap() {
        let mut uptime = Uptime::new();
        let a = uptime.observe(42_000);
        let b = uptime.observe(42_000);
        assert_eq!(a, b);
    }
}
