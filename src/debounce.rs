//! debounce.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Time-window debouncing for the two push buttons. Every button keeps its own record
//! of the last accepted edge; a new edge passes only once the window has fully elapsed.

use crate::uptime::Millis;

/// Source Enum
///
/// Identifies which button produced a raw edge. The discriminant matches the GPIOTE
/// channel the button is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A button: restarts the countdown
    Primary = 0,
    /// B button: counted while the countdown runs
    Secondary = 1,
}

/// TryFrom<u8> implementation for Source enum
///
/// Maps a GPIOTE channel index onto the button wired to it, returning a unit Error
/// for any channel not used by the controller.
impl TryFrom<u8> for Source {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Source::Primary),
            1 => Ok(Source::Secondary),
            _ => Err(()),
        }
    }
}

/// Last accepted edge for one source. `None` means no edge has been accepted yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceRecord {
    pub last_accepted_at: Option<Millis>,
}

impl DebounceRecord {
    pub const NEVER: DebounceRecord = DebounceRecord {
        last_accepted_at: None,
    };
}

/// Debouncer Struct
///
/// Holds one [`DebounceRecord`] per [`Source`] and the shared window length.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    records: [DebounceRecord; 2],
    window_ms: Millis,
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Debouncer {
            records: [DebounceRecord::NEVER; 2],
            window_ms: window_ms as Millis,
        }
    }

    /// Decide whether a raw edge from `source` at `now` is a genuine press.
    ///
    /// Accepts, and records `now`, only if strictly more than the window has passed
    /// since the last accepted edge for that source. The first edge is always accepted.
    /// A timestamp older than the record counts as zero elapsed time.
    pub fn accept(&mut self, source: Source, now: Millis) -> bool {
        let record = &mut self.records[source as usize];
        let accepted = match record.last_accepted_at {
            None => true,
            Some(last) => now.saturating_sub(last) > self.window_ms,
        };
        if accepted {
            record.last_accepted_at = Some(now);
        }
        accepted
    }

    pub fn record(&self, source: Source) -> DebounceRecord {
        self.records[source as usize]
    }
}
