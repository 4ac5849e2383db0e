//! RP2040-specific HAL for the digit analysis firmware
//!
//! This crate provides RP2040/embassy implementations of the shared
//! `digilux-hal` traits:
//!
//! - GPIO wrappers for the indicator LEDs and the freeze button
//! - A gated tick source standing in for the periodic hardware timer
//! - UART configuration and console flushing

#![no_std]

pub mod gpio;
pub mod timer;
pub mod uart;

pub use gpio::{ButtonPin, LedPin};
pub use timer::{GatedTimer, TickGate};
pub use uart::{flush, uart_config};
