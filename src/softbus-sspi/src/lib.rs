//! Software implementation of an SPI bus in main mode.
//!
//! The bus is bit-banged over three lines (SCK, MOSI and MISO) accessed through the [`Pins`]
//! trait. All four SPI modes are supported, in MSB-first or LSB-first order, with words of 1 to 8
//! bits. Wider words can be built by following a [`SoftSpi::transfer_byte()`] with calls to
//! [`SoftSpi::transfer_bit()`].
//!
//! The chip select line is not handled by the bus.
//!
//! # Examples
//!
//! ```
//! use softbus_sspi::{gpio::Level, spi::Mode, Config, Pins, SoftSpi};
//!
//! // MOSI wired back to MISO.
//! struct Loopback(Level);
//!
//! impl Pins for Loopback {
//!     fn set_sck(&mut self, _level: Level) {}
//!
//!     fn set_mosi(&mut self, level: Level) {
//!         self.0 = level;
//!     }
//!
//!     fn read_miso(&mut self) -> Level {
//!         self.0
//!     }
//!
//!     fn delay_half_period(&mut self) {}
//! }
//!
//! let mut spi = SoftSpi::new(Loopback(Level::Low), Config::default().with_mode(Mode::Mode3));
//! spi.reset();
//!
//! let tx = [0xde, 0xad, 0x42];
//! let mut rx = [0; 3];
//! spi.transfer_buffer(Some(rx.as_mut_slice()), Some(tx.as_slice()), tx.len());
//! assert_eq!(rx, tx);
//! ```
//!
//! On actual hardware, [`hal::GpioPins`] builds the primitives out of `embedded-hal` GPIOs and a
//! delay provider, and [`SoftSpi`] can be used anywhere an [`embedded_hal::spi::SpiBus`] is
//! expected.
//!
//! # Cargo features
//!
//! - `defmt`: logs through [`defmt`](https://docs.rs/defmt) and implements `defmt::Format` on
//!   the public types.
//!
//! # Configuration
//!
//! - `CONFIG_SSPI_FREQUENCY_KHZ`: clock frequency used by
//!   [`GpioPins::with_default_frequency()`](hal::GpioPins::with_default_frequency), read at build
//!   time. Defaults to 100 kHz.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

mod log;

pub mod bus;
pub mod gpio;
pub mod hal;
mod pins;
pub mod spi;

#[cfg(test)]
mod testing;

pub use bus::{Config, SoftSpi};
pub use pins::Pins;
