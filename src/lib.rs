//! lib.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Hardware independent core of the MB2 countdown timer.
//!
//! Button A restarts a 9 second countdown, button B counts clicks while it runs. Button
//! edges and the 1s timer tick arrive in interrupt context and only touch the
//! [`controller::Controller`]; the main loop polls it and renders whenever something
//! changed. Everything in here builds for the host so it can be unit tested.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controller;
pub mod countdown;
pub mod debounce;
pub mod glyph;
pub mod render;
pub mod uptime;

pub use config::Config;
pub use controller::Controller;
pub use countdown::{Countdown, CountdownState, Event, Phase};
pub use debounce::{DebounceRecord, Debouncer, Source};
pub use render::{RenderFlag, RenderSink};
pub use uptime::{Millis, Uptime};
