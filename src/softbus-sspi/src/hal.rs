//! Provides the [`embedded-hal`](embedded_hal) integration.
//!
//! [`GpioPins`] builds the bus primitives out of `embedded-hal` GPIOs and a delay provider, and
//! [`SoftSpi`] implements [`SpiBus`] so that it can be handed to any driver written against
//! `embedded-hal`, e.g. wrapped into an `SpiDevice` together with a chip select output.

use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::{ErrorType, SpiBus},
};

use crate::{gpio::Level, Pins, SoftSpi};

pub use fugit::KilohertzU32 as Kilohertz;

/// Clock frequency used by [`GpioPins::with_default_frequency()`].
///
/// Can be set at build time through `CONFIG_SSPI_FREQUENCY_KHZ`.
pub const DEFAULT_FREQUENCY: Kilohertz = Kilohertz::kHz(softbus_utils::u32_from_env_or!(
    "CONFIG_SSPI_FREQUENCY_KHZ",
    100,
    "default software SPI clock frequency (in kHz)"
));

/// Returns the half period of the clock at `frequency`, in nanoseconds.
///
/// Rounded up, so the actual bus frequency never exceeds the requested one. A zero frequency is
/// treated as 1 kHz.
#[must_use]
pub const fn half_period_ns(frequency: Kilohertz) -> u32 {
    let khz = frequency.to_kHz();
    let khz = if khz == 0 { 1 } else { khz };

    500_000_u32.div_ceil(khz)
}

/// Bus primitives backed by `embedded-hal` GPIOs and a [`DelayNs`] provider.
///
/// The GPIOs must be infallible, as the bus has no way of reporting pin errors.
pub struct GpioPins<Sck, Mosi, Miso, Delay> {
    sck: Sck,
    mosi: Mosi,
    miso: Miso,
    delay: Delay,
    half_period_ns: u32,
}

impl<Sck, Mosi, Miso, Delay> GpioPins<Sck, Mosi, Miso, Delay>
where
    Sck: OutputPin<Error = Infallible>,
    Mosi: OutputPin<Error = Infallible>,
    Miso: InputPin<Error = Infallible>,
    Delay: DelayNs,
{
    /// Creates the primitives for a bus clocked at `frequency`.
    #[must_use]
    pub fn new(sck: Sck, mosi: Mosi, miso: Miso, delay: Delay, frequency: Kilohertz) -> Self {
        let half_period_ns = half_period_ns(frequency);

        crate::log::debug!(
            "sspi: {} kHz requested, half period of {} ns",
            frequency.to_kHz(),
            half_period_ns
        );

        Self {
            sck,
            mosi,
            miso,
            delay,
            half_period_ns,
        }
    }

    /// Creates the primitives for a bus clocked at [`DEFAULT_FREQUENCY`].
    #[must_use]
    pub fn with_default_frequency(sck: Sck, mosi: Mosi, miso: Miso, delay: Delay) -> Self {
        Self::new(sck, mosi, miso, delay, DEFAULT_FREQUENCY)
    }

    /// Returns the half period waited between clock edges, in nanoseconds.
    #[must_use]
    pub fn half_period_ns(&self) -> u32 {
        self.half_period_ns
    }

    /// Returns the GPIOs and the delay provider.
    #[must_use]
    pub fn release(self) -> (Sck, Mosi, Miso, Delay) {
        (self.sck, self.mosi, self.miso, self.delay)
    }
}

impl<Sck, Mosi, Miso, Delay> Pins for GpioPins<Sck, Mosi, Miso, Delay>
where
    Sck: OutputPin<Error = Infallible>,
    Mosi: OutputPin<Error = Infallible>,
    Miso: InputPin<Error = Infallible>,
    Delay: DelayNs,
{
    fn set_sck(&mut self, level: Level) {
        self.sck
            .set_state(level.into())
            .unwrap_or_else(|never| match never {});
    }

    fn set_mosi(&mut self, level: Level) {
        self.mosi
            .set_state(level.into())
            .unwrap_or_else(|never| match never {});
    }

    fn read_miso(&mut self) -> Level {
        self.miso
            .is_high()
            .map_or_else(|never| match never {}, Level::from)
    }

    fn delay_half_period(&mut self) {
        self.delay.delay_ns(self.half_period_ns);
    }
}

impl<P: Pins> ErrorType for SoftSpi<P> {
    type Error = Infallible;
}

// Every transfer completes before returning, there is never anything to flush.
impl<P: Pins> SpiBus<u8> for SoftSpi<P> {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let count = words.len();
        self.transfer_buffer(Some(words), None, count);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.transfer_buffer(None, Some(words), words.len());
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        // The longer slice sets the length of the transfer.
        let count = read.len().max(write.len());
        self.transfer_buffer(Some(read), Some(write), count);
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for word in words.iter_mut() {
            *word = self.transfer_byte(*word);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
