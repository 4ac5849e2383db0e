//! Operator console messages
//!
//! Everything the controller prints goes through here so the wording lives
//! in one place.

use core::fmt::{self, Write};

use digilux_hal::SerialPort;

use crate::button::{ButtonReport, LockChange};
use crate::error::Error;
use crate::scheduler::{DigitOutcome, Parity};

/// `core::fmt::Write` adapter over a serial port
pub struct Console<'a, S: SerialPort>(pub &'a mut S);

impl<S: SerialPort> Write for Console<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.print(s);
        Ok(())
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

/// Boot banner
pub fn banner<S: SerialPort>(out: &mut S) {
    out.print("\r\n*** Digit Analysis System ***\r\n");
}

/// Input prompt
pub fn prompt<S: SerialPort>(out: &mut S) {
    out.print("Enter number: ");
}

/// Line rejected or state recovered
pub fn error<S: SerialPort>(out: &mut S, err: Error) {
    // Console never fails
    let _ = write!(Console(out), "{}\r\n", err);
}

/// Trailing marker found
pub fn continuous_detected<S: SerialPort>(out: &mut S) {
    out.print("Continuous mode detected ('-').\r\n");
}

/// Session begins
pub fn starting<S: SerialPort>(out: &mut S) {
    out.print("Starting analysis...\r\n");
}

/// One digit analyzed
pub fn digit<S: SerialPort>(out: &mut S, outcome: &DigitOutcome) {
    let c = char::from(b'0' + outcome.digit);
    let _ = match outcome.parity {
        Parity::Even => write!(Console(out), "digit {}: even - LED blinking\r\n", c),
        Parity::Odd => write!(
            Console(out),
            "digit {}: odd - LED toggled {}\r\n",
            c,
            on_off(outcome.led_on)
        ),
    };
}

/// Blink toggle, only when enabled in `AppConfig`
pub fn blink_toggled<S: SerialPort>(out: &mut S, on: bool) {
    let _ = write!(Console(out), "LED blink: {}\r\n", on_off(on));
}

/// Sequence finished
pub fn complete<S: SerialPort>(out: &mut S) {
    out.print("Analysis complete.\r\n");
}

/// Continuous sequence restarting
pub fn restarting<S: SerialPort>(out: &mut S) {
    out.print("Continuous mode: Restarting analysis.\r\n");
}

/// Sequence ended on an even digit
pub fn continuous_blink<S: SerialPort>(out: &mut S) {
    out.print("Continuous LED blinking.\r\n");
}

/// Session cancelled by new input
pub fn interrupted<S: SerialPort>(out: &mut S) {
    out.print("\r\nAnalysis interrupted by new input.\r\n");
}

/// Freeze button pressed
///
/// Two presses seen in one pass print both lock states they went through.
pub fn button<S: SerialPort>(out: &mut S, report: &ButtonReport) {
    if report.change == LockChange::Unchanged {
        press(out, !report.frozen, report.presses.wrapping_sub(1));
    }
    press(out, report.frozen, report.presses);
}

fn press<S: SerialPort>(out: &mut S, frozen: bool, count: u32) {
    let lock = if frozen { "LOCKED" } else { "RESTORED" };
    let _ = write!(
        Console(out),
        "\r\nButton Press: LED functionality {}. Press count: {}\r\n",
        lock,
        count
    );
}
