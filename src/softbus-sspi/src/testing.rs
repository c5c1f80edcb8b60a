//! Simulated lines for host tests.

use crate::{gpio::Level, Pins};

/// A GPIO line seen through an oscilloscope.
///
/// The line is open drain with a pull-up: it is low whenever the MCU output or the external
/// device pulls it low. Each sample appends one character to the oscillogram: `_` low, `^` high,
/// `/` rising edge, `\` falling edge.
pub(crate) struct Wire {
    real: Level,
    out: Level,
    out_set: bool,
    external: core::str::Chars<'static>,
    samples: String,
}

impl Wire {
    pub(crate) fn new() -> Self {
        Self {
            real: Level::High,
            out: Level::High,
            out_set: false,
            external: "".chars(),
            samples: String::new(),
        }
    }

    /// Sets the oscillogram the external device drives onto the line, one character per sample.
    /// The device releases the line once the oscillogram is exhausted.
    pub(crate) fn feed(&mut self, oscillogram: &'static str) {
        assert!(oscillogram
            .chars()
            .all(|c| matches!(c, '_' | '/' | '^' | '\\')));
        self.external = oscillogram.chars();
    }

    /// Drives the line from the MCU side.
    pub(crate) fn drive(&mut self, level: Level) {
        assert!(!self.out_set, "line driven twice between two samples");
        self.out_set = true;
        self.out = level;
    }

    /// Returns the level established at the last sample.
    pub(crate) fn level(&self) -> Level {
        self.real
    }

    pub(crate) fn sample(&mut self) {
        let external = match self.external.next() {
            Some('_' | '\\') => Level::Low,
            _ => Level::High,
        };

        let new = if self.out == Level::Low || external == Level::Low {
            Level::Low
        } else {
            Level::High
        };

        self.samples.push(match (self.real == new, new) {
            (true, Level::Low) => '_',
            (true, Level::High) => '^',
            (false, Level::Low) => '\\',
            (false, Level::High) => '/',
        });

        self.out_set = false;
        self.real = new;
    }

    pub(crate) fn oscillogram(&self) -> &str {
        &self.samples
    }
}

/// Three wires sampled at every half period.
pub(crate) struct Scope {
    pub(crate) sck: Wire,
    pub(crate) mosi: Wire,
    pub(crate) miso: Wire,
}

impl Scope {
    pub(crate) fn new() -> Self {
        Self {
            sck: Wire::new(),
            mosi: Wire::new(),
            miso: Wire::new(),
        }
    }
}

impl Pins for Scope {
    fn set_sck(&mut self, level: Level) {
        self.sck.drive(level);
    }

    fn set_mosi(&mut self, level: Level) {
        self.mosi.drive(level);
    }

    fn read_miso(&mut self) -> Level {
        self.miso.level()
    }

    fn delay_half_period(&mut self) {
        self.sck.sample();
        self.mosi.sample();
        self.miso.sample();
    }
}

/// A call made by the bus into its pins.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Sck(Level),
    Mosi(Level),
    Miso(Level),
    Delay,
}

/// Logs every call, and answers MISO reads with a fixed level.
pub(crate) struct Recorder {
    pub(crate) events: Vec<Event>,
    miso: Level,
}

impl Recorder {
    pub(crate) fn new(miso: Level) -> Self {
        Self {
            events: Vec::new(),
            miso,
        }
    }

    pub(crate) fn count(&self, event: Event) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }
}

impl Pins for Recorder {
    fn set_sck(&mut self, level: Level) {
        self.events.push(Event::Sck(level));
    }

    fn set_mosi(&mut self, level: Level) {
        self.events.push(Event::Mosi(level));
    }

    fn read_miso(&mut self) -> Level {
        self.events.push(Event::Miso(self.miso));
        self.miso
    }

    fn delay_half_period(&mut self) {
        self.events.push(Event::Delay);
    }
}

/// MOSI wired straight back to MISO.
pub(crate) struct Loopback {
    mosi: Level,
}

impl Loopback {
    pub(crate) fn new() -> Self {
        Self { mosi: Level::Low }
    }
}

impl Pins for Loopback {
    fn set_sck(&mut self, _level: Level) {}

    fn set_mosi(&mut self, level: Level) {
        self.mosi = level;
    }

    fn read_miso(&mut self) -> Level {
        self.mosi
    }

    fn delay_half_period(&mut self) {}
}
