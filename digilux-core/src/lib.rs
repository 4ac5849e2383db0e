//! Board-agnostic core logic for the digit analysis firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Millisecond clock and interrupt hand-off context
//! - Serial line assembly and digit filtering
//! - State machine for analysis sessions
//! - Digit scheduler and blink cadence
//! - Freeze button latch
//! - The foreground controller tying it together

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod blink;
pub mod button;
pub mod clock;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod filter;
pub mod input;
pub mod led;
pub mod report;
pub mod scheduler;
pub mod state;

pub use context::Context;
pub use controller::{Activity, Controller, Peripherals};
pub use error::Error;
