//! Provides the software SPI bus in main mode.

use crate::{
    gpio::Level,
    log::{debug, trace},
    spi::{BitOrder, Mode, WordSize},
    Pins,
};

/// SPI bus configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub struct Config {
    /// The SPI mode to use.
    pub mode: Mode,
    /// The order in which the bits of a word are shifted out and in.
    pub bit_order: BitOrder,
    /// The number of bits exchanged per word.
    pub word_size: WordSize,
}

impl Config {
    /// Returns the configuration with the given mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the configuration with the given bit order.
    #[must_use]
    pub const fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    /// Returns the configuration with the given word size.
    #[must_use]
    pub const fn with_word_size(mut self, word_size: WordSize) -> Self {
        self.word_size = word_size;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Mode0,
            bit_order: BitOrder::MsbFirst,
            word_size: WordSize::EIGHT,
        }
    }
}

/// Bit-banged SPI bus in main mode.
///
/// Drives SCK and MOSI and samples MISO through its [`Pins`]. The configuration is fixed for the
/// lifetime of the bus; no other state is kept between calls, so transfers may be interrupted
/// between any two words and resumed later.
///
/// Chip select is not handled: assert it before a transaction and release it afterwards.
pub struct SoftSpi<P> {
    pins: P,
    config: Config,
}

impl<P: Pins> SoftSpi<P> {
    /// Creates a bus driving the given pins.
    ///
    /// The lines are left untouched: call [`reset()`](SoftSpi::reset) once the pins are
    /// initialized so that the clock idles at the level the mode expects.
    #[must_use]
    pub fn new(pins: P, config: Config) -> Self {
        debug!(
            "sspi: {}, {}, {}-bit words",
            config.mode,
            config.bit_order,
            config.word_size.bits()
        );

        Self { pins, config }
    }

    /// Returns the bus configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Gives access to the pins, e.g. to drive lines the bus does not know about.
    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// Consumes the bus and returns its pins.
    #[must_use]
    pub fn release(self) -> P {
        self.pins
    }

    /// Puts SCK at its idle level and MOSI low.
    ///
    /// Intended after GPIO initialization, and optionally after write operations to bring MOSI
    /// back to low. Does not wait and produces no clock pulse, so calling it again is harmless.
    pub fn reset(&mut self) {
        trace!("sspi: reset");

        self.pins.set_sck(self.config.mode.idle_level());
        self.pins.set_mosi(Level::Low);
    }

    /// Exchanges a single bit: one full clock cycle.
    ///
    /// Returns the level of MISO at the sampling edge.
    pub fn transfer_bit(&mut self, bit: Level) -> Level {
        let leading = self.config.mode.leading_level();
        let trailing = self.config.mode.idle_level();

        if self.config.mode.clock_phase_trailing() {
            self.pins.delay_half_period();

            // Shift out on the leading edge.
            self.pins.set_sck(leading);
            self.pins.set_mosi(bit);
            self.pins.delay_half_period();

            // Sample on the trailing edge.
            self.pins.set_sck(trailing);
            self.pins.read_miso()
        } else {
            self.pins.set_mosi(bit);
            self.pins.delay_half_period();

            // Sample on the leading edge.
            self.pins.set_sck(leading);
            let sampled = self.pins.read_miso();
            self.pins.delay_half_period();

            self.pins.set_sck(trailing);
            sampled
        }
    }

    /// Exchanges one word of [`Config::word_size`] bits.
    ///
    /// The word to send is taken from the low-order bits of `word`; the received word is returned
    /// right-justified, with the unused high-order bits cleared.
    pub fn transfer_byte(&mut self, word: u8) -> u8 {
        let bits = self.config.word_size.bits();
        let msb_mask = self.config.word_size.msb_mask();
        let lsb_first = self.config.bit_order == BitOrder::LsbFirst;

        let (tx_mask, rx_mask) = if lsb_first {
            (0x01, msb_mask)
        } else {
            (msb_mask, 0x01)
        };

        let mut tx = word;
        let mut rx = 0;

        for bit in 0..bits {
            if self.transfer_bit(Level::from((tx & tx_mask) != 0)) == Level::High {
                rx |= rx_mask;
            }

            // Both bytes move the same way, so the received bits end up in transmission order.
            if bit < bits - 1 {
                if lsb_first {
                    tx >>= 1;
                    rx >>= 1;
                } else {
                    tx <<= 1;
                    rx <<= 1;
                }
            }
        }

        rx
    }

    /// Exchanges `count` words.
    ///
    /// Words are taken from `write`, or sent as `0x00` when `write` is `None` or shorter than
    /// `count`. Received words are stored into `read`, or dropped when `read` is `None` or
    /// shorter than `count`.
    pub fn transfer_buffer(
        &mut self,
        mut read: Option<&mut [u8]>,
        write: Option<&[u8]>,
        count: usize,
    ) {
        trace!("sspi: transferring {} words", count);

        for position in 0..count {
            let tx = write
                .and_then(|write| write.get(position))
                .copied()
                .unwrap_or(0x00);
            let rx = self.transfer_byte(tx);

            if let Some(slot) = read.as_deref_mut().and_then(|read| read.get_mut(position)) {
                *slot = rx;
            }
        }
    }

    /// Exchanges each word of `words`, replacing it with the word received in its place.
    pub fn transfer_in_place(&mut self, words: &mut [u8]) {
        trace!("sspi: transferring {} words in place", words.len());

        for word in words.iter_mut() {
            *word = self.transfer_byte(*word);
        }
    }

    /// Fills `words` with received words, sending `0x00` meanwhile.
    pub fn read(&mut self, words: &mut [u8]) {
        let count = words.len();
        self.transfer_buffer(Some(words), None, count);
    }

    /// Sends `words`, discarding what is received.
    pub fn write(&mut self, words: &[u8]) {
        self.transfer_buffer(None, Some(words), words.len());
    }
}
