//! Main.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Turns the MB2 into a countdown timer driven by the A and B buttons.
//!
//! Pressing A (re)starts a countdown from 9 that drops by one every second and stops at 0.
//! While the countdown runs, every press of B is counted; presses of B while stopped are
//! ignored. The remaining count is shown on the 5x5 LED Array (corners light up once it
//! expires) and each change is also printed over RTT.
//!
//! Note, GPIOTE and TIMER2 Interrupt handlers only update the shared controller; all
//! drawing happens in the main loop, which polls for changes every 50ms.

#![no_main]
#![no_std]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use microbit::{
    board::Board,
    display::blocking::Display,
    hal::{
        Timer, gpiote,
        pac::{Interrupt, NVIC, TIMER1, TIMER2, interrupt},
        timer::Periodic,
    },
};

use critical_section_lock_mut::LockMut;

use countdown::{
    Config, Controller, CountdownState, Millis, RenderSink, Source, Uptime,
    config::{POLL_INTERVAL_MS, TICK_PERIOD_MS, TICKS_PER_MS},
    glyph::{self, Frame, LED_SIZE},
};

/// one countdown step in TIMER ticks
const TICK_PERIOD: u32 = TICK_PERIOD_MS * TICKS_PER_MS;

/// Global Mutable objects: Used inside interrupt handlers
static CONTROLLER: Controller = Controller::new(Config::DEFAULT);
static GPIOTE_PERIPHERAL: LockMut<gpiote::Gpiote> = LockMut::new();
static UPTIME: LockMut<UptimeClock> = LockMut::new();
static TICK_TIMER: LockMut<Timer<TIMER2>> = LockMut::new();

/// UptimeClock Struct
///
/// TIMER1 left free running in periodic mode, read through an [`Uptime`] to get
/// milliseconds since boot for debouncing.
struct UptimeClock {
    timer: Timer<TIMER1, Periodic>,
    uptime: Uptime,
}

impl UptimeClock {
    fn new(mut timer: Timer<TIMER1, Periodic>) -> Self {
        timer.disable_interrupt();
        timer.reset_event();
        timer.start(u32::MAX);
        UptimeClock {
            timer,
            uptime: Uptime::new(),
        }
    }

    fn now(&mut self) -> Millis {
        self.uptime.observe(self.timer.read())
    }
}

/// MatrixSink Struct
///
/// Render sink for the LED Array. Keeps the most recent frame so the main loop can
/// keep refreshing the (multiplexed) display between renders.
struct MatrixSink {
    frame: Frame,
}

impl MatrixSink {
    fn new() -> Self {
        MatrixSink {
            frame: [[0u8; LED_SIZE]; LED_SIZE],
        }
    }
}

impl RenderSink for MatrixSink {
    fn render(&mut self, snapshot: &CountdownState) {
        self.frame = glyph::frame_for(snapshot);
        rprintln!(
            "Counter: {} | Clicks B: {} | {}",
            snapshot.remaining,
            snapshot.secondary_clicks,
            if snapshot.running { "running" } else { "restart A" }
        );
    }
}

/// Show `frame` for one poll interval. The blocking display only lights LEDs while it
/// is being driven, so this doubles as the main loop's sleep.
fn refresh<D: DelayNs>(display: &mut Display, delay: &mut D, frame: Frame) {
    display.show(delay, frame, POLL_INTERVAL_MS);
}

/// GPIOTE Interrupt handler (nrf52833 Peripheral Vector Table Entry #6)
///
/// Determines which button fired by checking the GPIOTE channels (Channel 0 is attached to
/// the A btn and Channel 1 to the B btn), clears the events, then hands each edge to the
/// controller together with the current uptime. Debouncing happens in the controller.
#[interrupt]
fn GPIOTE() {
    let mut triggered = [false; 2];
    GPIOTE_PERIPHERAL.with_lock(|gpiote| {
        if gpiote.channel0().is_event_triggered() {
            gpiote.channel0().reset_events();
            triggered[0] = true;
        }
        if gpiote.channel1().is_event_triggered() {
            gpiote.channel1().reset_events();
            triggered[1] = true;
        }
    });

    let mut now = 0;
    UPTIME.with_lock(|clock| now = clock.now());

    for (channel, _) in triggered.iter().enumerate().filter(|(_, fired)| **fired) {
        if let Ok(source) = Source::try_from(channel as u8) {
            CONTROLLER.on_edge(source, now);
        }
    }
}

/// TIMER2 Interrupt handler
///
/// Re-arms the one second one-shot and advances the countdown. Also samples the uptime
/// clock so its counter wraps are never missed.
#[interrupt]
fn TIMER2() {
    TICK_TIMER.with_lock(|tick_timer| {
        tick_timer.reset_event();
        tick_timer.start(TICK_PERIOD);
    });
    UPTIME.with_lock(|clock| {
        clock.now();
    });

    CONTROLLER.on_tick();
}

/// Entry point
///
/// Set up the peripherals and pass the ones used by interrupt handlers into global Mutex
/// handlers. TIMER0 is dedicated to the display, TIMER1 is the free running uptime
/// counter used for debouncing and TIMER2 produces the one second countdown tick.
#[entry]
fn main() -> ! {
    rtt_init_print!();

    let board = Board::take().unwrap();

    // TIMER0 will be dedicated to the LED display
    let mut display_timer = Timer::new(board.TIMER0);
    let mut display = Display::new(board.display_pins);

    // ensure buttons are in Floating mode
    let a_btn = board.buttons.button_a.into_floating_input();
    let b_btn = board.buttons.button_b.into_floating_input();

    //setup GPIOTE for both button press interrupts
    let gpiote = gpiote::Gpiote::new(board.GPIOTE);
    let channel0 = gpiote.channel0();
    let channel1 = gpiote.channel1();
    channel0
        .input_pin(&a_btn.degrade())
        .hi_to_lo()
        .enable_interrupt();
    channel0.reset_events();
    channel1
        .input_pin(&b_btn.degrade())
        .hi_to_lo()
        .enable_interrupt();
    channel1.reset_events();

    GPIOTE_PERIPHERAL.init(gpiote);

    //setup uptime counter
    UPTIME.init(UptimeClock::new(Timer::periodic(board.TIMER1)));

    //setup countdown tick
    let mut tick_timer = Timer::new(board.TIMER2);
    tick_timer.enable_interrupt();
    tick_timer.reset_event();
    tick_timer.start(TICK_PERIOD);
    TICK_TIMER.init(tick_timer);

    let config = Config::DEFAULT;
    rprintln!(
        "countdown: start {} | debounce {}ms | tick {}ms | poll {}ms",
        config.initial_count,
        config.debounce_window_ms,
        TICK_PERIOD_MS,
        POLL_INTERVAL_MS
    );

    let mut sink = MatrixSink::new();

    // Set up the NVIC to handle interrupts.
    unsafe { NVIC::unmask(Interrupt::GPIOTE) }; // allow NVIC to handle GPIOTE signals
    unsafe { NVIC::unmask(Interrupt::TIMER2) }; // allow NVIC to handle TIMER2 signals
    NVIC::unpend(Interrupt::GPIOTE); //clear any currently pending GPIOTE state

    loop {
        // draws at most once per pass; pending changes coalesce into this render
        CONTROLLER.poll_and_render(&mut sink);
        refresh(&mut display, &mut display_timer, sink.frame);
    }
}
