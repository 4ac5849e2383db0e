//! Inter-task signals
//!
//! The interrupt-side tasks never touch controller state; they update the
//! shared `Context` and then wake the controller through these.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use digilux_hal_rp2040::TickGate;

/// Wake the controller task for another foreground pass
pub static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Enable bit for the millisecond tick task
pub static TICK_GATE: TickGate = TickGate::new();
