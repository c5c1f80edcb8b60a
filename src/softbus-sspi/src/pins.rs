use crate::gpio::Level;

/// Line-level primitives a [`SoftSpi`](crate::SoftSpi) drives the bus through.
///
/// The bus never touches hardware by itself: every edge it produces and every bit it samples goes
/// through these four calls, in program order. Implementations must make the outputs take effect
/// before the following [`delay_half_period()`](Pins::delay_half_period) returns, and
/// [`read_miso()`](Pins::read_miso) must report the line as it is at the time of the call.
///
/// The primitives are infallible. A fault in the underlying line access is the implementor's
/// concern and is not reported to the bus.
///
/// The chip select line is not part of this interface; it is entirely left to the caller.
pub trait Pins {
    /// Drives the clock line (SCK).
    fn set_sck(&mut self, level: Level);

    /// Drives the data output line (MOSI).
    fn set_mosi(&mut self, level: Level);

    /// Samples the data input line (MISO).
    fn read_miso(&mut self) -> Level;

    /// Blocks for half of the SPI clock period.
    ///
    /// Must not return early: the symmetry of the clock depends on it.
    fn delay_half_period(&mut self);
}

impl<P: Pins + ?Sized> Pins for &mut P {
    fn set_sck(&mut self, level: Level) {
        (**self).set_sck(level);
    }

    fn set_mosi(&mut self, level: Level) {
        (**self).set_mosi(level);
    }

    fn read_miso(&mut self) -> Level {
        (**self).read_miso()
    }

    fn delay_half_period(&mut self) {
        (**self).delay_half_period();
    }
}
