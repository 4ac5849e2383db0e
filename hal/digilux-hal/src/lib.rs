//! Digilux Hardware Abstraction Layer
//!
//! This crate defines the hardware primitives the digit analysis core
//! calls into. Chip-specific crates implement them; the core only ever
//! sees these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  digilux-core (controller, scheduler)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  digilux-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ digilux-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::SerialPort`] - Console output (print, transmit)
//! - [`gpio::OutputPin`] - Digital output ([`gpio::ButtonConfig`] wires the button)
//! - [`timer::PeriodicTimer`] - Millisecond tick source
//! - [`indicator::IndicatorOutput`] - Status indicator (LED)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod indicator;
pub mod timer;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{ButtonConfig, Edge, OutputPin, Pull};
pub use indicator::{IndicatorOutput, PinIndicator};
pub use timer::{PeriodicTimer, TimerConfig};
pub use uart::{SerialPort, TxBuffer, UartConfig};
