//! Gated millisecond tick
//!
//! The RP2040 has a free-running timer that embassy-time already owns, so
//! the periodic tick is an embassy `Ticker` in a task. [`TickGate`] is the
//! enable bit that task obeys; [`GatedTimer`] is the `PeriodicTimer` handle
//! the core flips it with.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use portable_atomic::{AtomicBool, Ordering};

use digilux_hal::{PeriodicTimer, TimerConfig};

/// Shared enable bit for the tick task
pub struct TickGate {
    enabled: AtomicBool,
    resume: Signal<CriticalSectionRawMutex, ()>,
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new()
    }
}

impl TickGate {
    /// Create a closed gate
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            resume: Signal::new(),
        }
    }

    /// Check if ticks should be delivered
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Wait until the gate opens
    pub async fn wait_enabled(&self) {
        while !self.is_enabled() {
            self.resume.wait().await;
        }
    }

    /// Deliver ticks while the gate is open
    ///
    /// Returns when the gate closes. The first tick comes one interval
    /// after the gate opened.
    pub async fn run<F: FnMut()>(&self, config: &TimerConfig, mut on_tick: F) {
        self.wait_enabled().await;
        let mut ticker = Ticker::every(Duration::from_micros(config.interval_us as u64));
        loop {
            ticker.next().await;
            if !self.is_enabled() {
                return;
            }
            on_tick();
        }
    }

    fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
        if enabled {
            self.resume.signal(());
        }
    }
}

/// `PeriodicTimer` handle over a [`TickGate`]
pub struct GatedTimer {
    gate: &'static TickGate,
}

impl GatedTimer {
    /// Create a handle for `gate`
    pub fn new(gate: &'static TickGate) -> Self {
        Self { gate }
    }
}

impl PeriodicTimer for GatedTimer {
    fn enable(&mut self) {
        self.gate.set(true);
    }

    fn disable(&mut self) {
        self.gate.set(false);
    }

    fn is_enabled(&self) -> bool {
        self.gate.is_enabled()
    }
}
