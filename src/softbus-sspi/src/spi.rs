//! Provides the SPI bus parameters: mode, bit order and word size.

use core::fmt;

use embedded_hal::spi::{Phase, Polarity, MODE_0, MODE_1, MODE_2, MODE_3};

use crate::gpio::Level;

/// SPI mode.
///
/// - CPOL: Clock polarity. When set, the clock idles high and the leading edge is a high to low
///   transition: `^^\_/^^`. Otherwise the clock idles low: `__/^\__`.
/// - CPHA: Clock phase. When set, data is changed on the leading edge and sampled on the trailing
///   edge. Otherwise data is set up before the leading edge and sampled on it.
///
/// See the [Wikipedia page for details](https://en.wikipedia.org/wiki/Serial_Peripheral_Interface#Mode_numbers).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// CPOL = 0, CPHA = 0.
    Mode0,
    /// CPOL = 0, CPHA = 1.
    Mode1,
    /// CPOL = 1, CPHA = 0.
    Mode2,
    /// CPOL = 1, CPHA = 1.
    Mode3,
}

impl Mode {
    /// Builds the mode from its CPOL and CPHA flags.
    #[must_use]
    pub const fn from_flags(clock_polarity_inverted: bool, clock_phase_trailing: bool) -> Self {
        match (clock_polarity_inverted, clock_phase_trailing) {
            (false, false) => Self::Mode0,
            (false, true) => Self::Mode1,
            (true, false) => Self::Mode2,
            (true, true) => Self::Mode3,
        }
    }

    /// Returns `true` if the clock idles high (CPOL = 1).
    #[must_use]
    pub const fn clock_polarity_inverted(self) -> bool {
        matches!(self, Self::Mode2 | Self::Mode3)
    }

    /// Returns `true` if data is sampled on the trailing edge (CPHA = 1).
    #[must_use]
    pub const fn clock_phase_trailing(self) -> bool {
        matches!(self, Self::Mode1 | Self::Mode3)
    }

    /// Level of the clock line between bits.
    #[must_use]
    pub const fn idle_level(self) -> Level {
        if self.clock_polarity_inverted() {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Level the clock is driven to on the leading edge, the complement of the idle level.
    #[must_use]
    pub const fn leading_level(self) -> Level {
        if self.clock_polarity_inverted() {
            Level::Low
        } else {
            Level::High
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Mode0
    }
}

impl From<embedded_hal::spi::Mode> for Mode {
    fn from(mode: embedded_hal::spi::Mode) -> Self {
        Self::from_flags(
            mode.polarity == Polarity::IdleHigh,
            mode.phase == Phase::CaptureOnSecondTransition,
        )
    }
}

impl From<Mode> for embedded_hal::spi::Mode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => MODE_0,
            Mode::Mode1 => MODE_1,
            Mode::Mode2 => MODE_2,
            Mode::Mode3 => MODE_3,
        }
    }
}

/// Order in which bits are transmitted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first.
    MsbFirst,
    /// Least significant bit first.
    LsbFirst,
}

impl Default for BitOrder {
    fn default() -> Self {
        Self::MsbFirst
    }
}

/// Number of significant bits exchanged per word, from 1 to 8.
///
/// Words narrower than a byte always occupy the low-order bits of the byte, whatever the
/// [`BitOrder`]: to send five ones, write `0x1F`. Received words are right-justified the same way.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WordSize(u8);

impl WordSize {
    /// Full 8-bit words.
    pub const EIGHT: Self = Self(8);

    /// Creates a word size, normalizing out-of-range values.
    ///
    /// Values in `1..=7` are kept as is. Any other value, `0` included, selects full 8-bit words.
    /// Use `WordSize::try_from()` to reject such values instead.
    #[must_use]
    pub const fn new(bits: u8) -> Self {
        if matches!(bits, 1..=7) {
            Self(bits)
        } else {
            Self::EIGHT
        }
    }

    /// Returns the number of bits per word.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns the mask of the most significant bit of a word.
    #[must_use]
    pub const fn msb_mask(self) -> u8 {
        1 << (self.0 - 1)
    }
}

impl Default for WordSize {
    fn default() -> Self {
        Self::EIGHT
    }
}

impl TryFrom<u8> for WordSize {
    type Error = InvalidWordSize;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        if matches!(bits, 1..=8) {
            Ok(Self(bits))
        } else {
            Err(InvalidWordSize(bits))
        }
    }
}

/// Returned when converting a bit count outside of `1..=8` into a [`WordSize`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidWordSize(pub u8);

impl fmt::Display for InvalidWordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid SPI word size: {} bits, expected 1 to 8", self.0)
    }
}
