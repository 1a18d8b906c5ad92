//! Stopwatch state: counter, freeze, lap history and status LEDs

use std::fmt;

use heapless::Deque;

/// Counter resolution in milliseconds
pub const TICK_PERIOD_MS: u32 = 10;

/// Status LED blink period in milliseconds
pub const BLINK_PERIOD_MS: u32 = 500;

/// Laps kept for display
pub const LAP_COUNT: usize = 3;

/// A time in hundredths of a second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reading(pub u32);

impl Reading {
    /// Minutes, two digits
    pub const fn minutes(self) -> u32 {
        (self.0 / 6000) % 100
    }

    /// Seconds within the minute
    pub const fn seconds(self) -> u32 {
        (self.0 / 100) % 60
    }

    /// Hundredths within the second
    pub const fn hundredths(self) -> u32 {
        self.0 % 100
    }

    /// The separators are lit on even seconds
    pub const fn colon_lit(self) -> bool {
        self.seconds() % 2 == 0
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}.{:02}",
            self.minutes(),
            self.seconds(),
            self.hundredths()
        )
    }
}

/// Stopwatch driven by a 10 ms tick and the start/stop and reset buttons.
///
/// Stopping freezes the shown reading. Starting again records the frozen
/// reading as a lap.
#[derive(Debug, Default)]
pub struct Stopwatch {
    hundredths: u32,
    running: bool,
    frozen: Option<Reading>,
    laps: Deque<Reading, LAP_COUNT>,
}

impl Stopwatch {
    /// Stopped at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one hundredth while running
    pub fn tick(&mut self) {
        if self.running {
            self.hundredths = self.hundredths.wrapping_add(1);
        }
    }

    /// Start/stop button
    pub fn toggle(&mut self) {
        self.running = !self.running;
        if self.running {
            if let Some(lap) = self.frozen.take() {
                self.record_lap(lap);
            }
        } else {
            self.frozen = Some(Reading(self.hundredths));
        }
        log::info!(
            "Stopwatch {} at {}",
            if self.running { "running" } else { "stopped" },
            self.reading()
        );
    }

    /// Reset button: zero the counter, drop the frozen reading and the laps.
    /// A running stopwatch keeps running from zero.
    pub fn reset(&mut self) {
        self.hundredths = 0;
        self.frozen = None;
        self.laps.clear();
        log::info!("Stopwatch reset");
    }

    fn record_lap(&mut self, lap: Reading) {
        if self.laps.is_full() {
            self.laps.pop_back();
        }
        // cannot fail, a slot was freed above
        let _ = self.laps.push_front(lap);
    }

    /// Value to show: the frozen reading when stopped, the live counter otherwise
    pub fn reading(&self) -> Reading {
        self.frozen.unwrap_or(Reading(self.hundredths))
    }

    /// Counter is advancing
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// A stopped reading is held on screen
    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }

    /// Recorded laps, newest first
    pub fn laps(&self) -> impl Iterator<Item = Reading> + '_ {
        self.laps.iter().copied()
    }
}

/// Pin levels for the active-low status LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedLevels {
    /// Level of the green (running) LED
    pub green_high: bool,
    /// Level of the red (frozen) LED
    pub red_high: bool,
}

/// Blink state of the green LED
#[derive(Debug, Clone, Copy)]
pub struct StatusLeds {
    green_high: bool,
}

impl Default for StatusLeds {
    fn default() -> Self {
        Self { green_high: true }
    }
}

impl StatusLeds {
    /// Both LEDs off
    pub fn new() -> Self {
        Self::default()
    }

    /// Levels for the next blink period. Green blinks while running and is
    /// off otherwise; red is on while a reading is frozen, which also holds
    /// green off.
    pub fn step(&mut self, stopwatch: &Stopwatch) -> LedLevels {
        self.green_high = if stopwatch.is_running() {
            !self.green_high
        } else {
            true
        };
        let frozen = stopwatch.is_frozen();
        LedLevels {
            green_high: frozen || self.green_high,
            red_high: !frozen,
        }
    }
}
