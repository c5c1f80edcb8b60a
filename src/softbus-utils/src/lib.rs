//! Build-time configuration helpers shared by the softbus crates.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

pub mod env;
