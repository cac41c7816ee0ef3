//! render.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Render-dirty flag and the sink interface used by the main loop.

use core::sync::atomic::{
    AtomicBool,
    Ordering::{AcqRel, Release},
};

use crate::countdown::CountdownState;

/// RenderFlag Struct
///
/// Single "state changed since last render" bit. Producers in interrupt context set it,
/// the main loop takes it. Any number of marks between two takes coalesce into one
/// pending render.
#[derive(Debug)]
pub struct RenderFlag(AtomicBool);

impl RenderFlag {
    /// A new flag starts dirty so the first poll draws the boot state.
    pub const fn new() -> Self {
        RenderFlag(AtomicBool::new(true))
    }

    /// Request a render. Never blocks; safe from an interrupt handler.
    pub fn mark_dirty(&self) {
        self.0.store(true, Release);
    }

    /// Clear the flag, returning whether a render was pending.
    pub fn take(&self) -> bool {
        self.0.swap(false, AcqRel)
    }
}

impl Default for RenderFlag {
    fn default() -> Self {
        RenderFlag::new()
    }
}

/// Anything that can present a countdown snapshot to a human. Only ever called from
/// the main loop, so implementations may take their time.
pub trait RenderSink {
    fn render(&mut self, snapshot: &CountdownState);
}

impl<F> RenderSink for F
where
    F: FnMut(&CountdownState),
{
    fn render(&mut self, snapshot: &CountdownState) {
        self(snapshot)
    }
}
