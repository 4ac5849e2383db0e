//! Application configuration
//!
//! Everything is fixed at compile time; nothing is persisted. Buffer sizes
//! are constants because they size static storage.

/// Input line buffer size; a line holds at most `LINE_CAPACITY - 1` characters
pub const LINE_CAPACITY: usize = 128;

/// Receive queue size (heapless queues hold `N - 1` bytes)
pub const RX_QUEUE_SIZE: usize = 256;

/// Tick interval of the millisecond clock
pub const TICK_INTERVAL_US: u32 = 1000;

/// Console baud rate
pub const DEFAULT_BAUDRATE: u32 = 115200;

/// Dwell time per digit
pub const DIGIT_CADENCE_MS: u32 = 500;

/// Toggle period while the current digit is even
pub const BLINK_CADENCE_MS: u32 = 200;

/// Runtime options for the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig {
    /// Dwell time per digit in milliseconds
    pub digit_cadence_ms: u32,
    /// Blink toggle period in milliseconds
    pub blink_cadence_ms: u32,
    /// Echo accepted input bytes back to the terminal
    pub echo: bool,
    /// Print a notice for every blink toggle, not only odd-digit toggles
    pub report_blink_toggles: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            digit_cadence_ms: DIGIT_CADENCE_MS,
            blink_cadence_ms: BLINK_CADENCE_MS,
            echo: true,
            report_blink_toggles: false,
        }
    }
}
