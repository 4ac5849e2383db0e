//! UART serial communication abstractions
//!
//! The console side of the serial link. Receive delivery is not part of
//! this trait: bytes are pushed by the receive interrupt into the core's
//! queue.

use heapless::Vec;

/// Serial console output
///
/// Writes never fail from the caller's point of view. Implementations that
/// can lose data (bounded buffers) account for it internally.
pub trait SerialPort {
    /// Write a text fragment
    fn print(&mut self, text: &str);

    /// Write a single raw byte
    fn transmit(&mut self, byte: u8);
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

/// Bounded output staging buffer
///
/// Collects console output during a foreground pass so it can be flushed
/// to an async UART afterwards. Bytes that do not fit are dropped and
/// counted.
pub struct TxBuffer<const N: usize> {
    buf: Vec<u8, N>,
    dropped: u32,
}

impl<const N: usize> Default for TxBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TxBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            dropped: 0,
        }
    }

    /// Pending bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Check if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discard pending bytes after they were flushed
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Take and reset the count of bytes dropped since the last call
    pub fn take_dropped(&mut self) -> u32 {
        core::mem::take(&mut self.dropped)
    }
}

impl<const N: usize> SerialPort for TxBuffer<N> {
    fn print(&mut self, text: &str) {
        for &byte in text.as_bytes() {
            self.transmit(byte);
        }
    }

    fn transmit(&mut self, byte: u8) {
        if self.buf.push(byte).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}
