//! Receive path and foreground line assembly
//!
//! [`RxSink`] is the interrupt half: it only enqueues. [`InputCollector`]
//! is the foreground half: it drains the queue, edits the line and echoes.

use heapless::spsc::{Consumer, Producer};

use digilux_hal::SerialPort;

use super::line::InputLine;
use crate::context::Context;
use crate::error::Error;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;
const CARRIAGE_RETURN: u8 = b'\r';

/// Interrupt-side receive handle
pub struct RxSink<'a, const N: usize> {
    producer: Producer<'a, u8, N>,
    ctx: &'a Context,
}

impl<'a, const N: usize> RxSink<'a, N> {
    pub(crate) fn new(producer: Producer<'a, u8, N>, ctx: &'a Context) -> Self {
        Self { producer, ctx }
    }

    /// Queue one received byte
    ///
    /// A full queue drops the byte. A queued byte during an analysis
    /// session raises the interruption signal.
    pub fn receive(&mut self, byte: u8) -> Result<(), Error> {
        self.producer.enqueue(byte).map_err(|_| Error::QueueFull)?;
        self.ctx.note_byte();
        Ok(())
    }
}

/// Foreground line assembler
pub struct InputCollector<'a, const N: usize> {
    rx: Consumer<'a, u8, N>,
    line: InputLine,
    echo: bool,
}

impl<'a, const N: usize> InputCollector<'a, N> {
    /// Create a collector draining `rx`
    pub fn new(rx: Consumer<'a, u8, N>, echo: bool) -> Self {
        Self {
            rx,
            line: InputLine::new(),
            echo,
        }
    }

    /// Check if bytes are waiting in the queue
    pub fn has_pending(&self) -> bool {
        self.rx.ready()
    }

    /// Drain queued bytes into the line
    ///
    /// Stops at the first completed line and leaves the rest queued.
    /// Returns `None` while the line is still open.
    pub fn poll<S: SerialPort>(&mut self, out: &mut S) -> Option<Result<(), Error>> {
        while let Some(byte) = self.rx.dequeue() {
            if let Some(done) = self.accept(byte, out) {
                return Some(done);
            }
        }
        None
    }

    fn accept<S: SerialPort>(&mut self, byte: u8, out: &mut S) -> Option<Result<(), Error>> {
        match byte {
            BACKSPACE | DELETE => {
                if self.line.erase() && self.echo {
                    out.print("\x08 \x08");
                }
                None
            }
            CARRIAGE_RETURN => {
                if self.echo {
                    out.print("\r\n");
                }
                Some(Ok(()))
            }
            0x20..=0x7E => {
                if self.echo {
                    out.transmit(byte);
                }
                match self.line.push(byte as char) {
                    Ok(()) => None,
                    Err(e) => {
                        if self.echo {
                            out.print("\r\n");
                        }
                        Some(Err(e))
                    }
                }
            }
            _ => None,
        }
    }

    /// The line assembled so far
    pub fn line(&self) -> &InputLine {
        &self.line
    }

    /// Start a fresh line
    pub fn reset(&mut self) {
        self.line.clear();
    }

    /// Drop everything still queued, returns the number of bytes dropped
    pub fn discard_pending(&mut self) -> usize {
        let mut dropped = 0;
        while self.rx.dequeue().is_some() {
            dropped += 1;
        }
        dropped
    }
}
