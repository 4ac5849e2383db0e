//! Periodic timer abstraction
//!
//! The tick source behind the core's millisecond clock. The timer's
//! interrupt handler only calls `Context::on_tick`; the core decides when
//! the timer runs.

/// Periodic tick source
pub trait PeriodicTimer {
    /// Start delivering ticks
    fn enable(&mut self);

    /// Stop delivering ticks
    fn disable(&mut self);

    /// Check if ticks are being delivered
    fn is_enabled(&self) -> bool;
}

/// Timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Tick interval in microseconds
    pub interval_us: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { interval_us: 1000 }
    }
}
