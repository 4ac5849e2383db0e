//! Host simulation harness
//!
//! Mock peripherals plus a driver that advances the clock one millisecond
//! at a time, running the foreground loop to quiescence after each tick.

#![allow(dead_code)]

use digilux_core::config::{AppConfig, RX_QUEUE_SIZE};
use digilux_core::input::{channel, RxSink};
use digilux_core::state::State;
use digilux_core::{Activity, Context, Controller, Peripherals};
use digilux_hal::{IndicatorOutput, PeriodicTimer, SerialPort};
use heapless::spsc::Queue;

#[derive(Debug, Default)]
pub struct MockSerial {
    pub text: String,
}

impl SerialPort for MockSerial {
    fn print(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn transmit(&mut self, byte: u8) {
        self.text.push(byte as char);
    }
}

#[derive(Debug, Default)]
pub struct MockTimer {
    pub enabled: bool,
}

impl PeriodicTimer for MockTimer {
    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[derive(Debug, Default)]
pub struct MockIndicator {
    pub on: bool,
}

impl IndicatorOutput for MockIndicator {
    fn set(&mut self, on: bool, _aux_a: bool, _aux_b: bool) {
        self.on = on;
    }
}

pub type SimController =
    Controller<'static, MockSerial, MockTimer, MockIndicator, RX_QUEUE_SIZE>;

pub struct Sim {
    pub ctx: &'static Context,
    pub sink: RxSink<'static, RX_QUEUE_SIZE>,
    pub ctrl: SimController,
}

impl Sim {
    /// Boot a controller with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let ctx: &'static Context = Box::leak(Box::new(Context::new()));
        let queue: &'static mut Queue<u8, RX_QUEUE_SIZE> = Box::leak(Box::new(Queue::new()));
        let (sink, rx) = channel(queue, ctx);
        let hw = Peripherals {
            serial: MockSerial::default(),
            timer: MockTimer::default(),
            indicator: MockIndicator::default(),
        };
        let mut ctrl = Controller::new(ctx, rx, hw, config);
        ctrl.boot();
        Self { ctx, sink, ctrl }
    }

    /// Run foreground passes until there is nothing left to do
    pub fn settle(&mut self) {
        for _ in 0..32 {
            if self.ctrl.poll() == Activity::Waiting {
                return;
            }
        }
        panic!("foreground never went idle");
    }

    /// Deliver bytes through the receive path, then settle
    pub fn send(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.sink.receive(b).expect("receive queue full");
        }
        self.settle();
    }

    /// Advance `ms` ticks, returns the number of logical LED changes
    pub fn run_ms(&mut self, ms: u32) -> u32 {
        let mut changes = 0;
        for _ in 0..ms {
            if self.ctrl.peripherals().timer.is_enabled() {
                self.ctx.on_tick();
            }
            let before = self.led();
            self.settle();
            if self.led() != before {
                changes += 1;
            }
        }
        changes
    }

    /// One button edge, then settle
    pub fn press(&mut self) {
        self.ctx.on_button_edge();
        self.settle();
    }

    pub fn state(&self) -> State {
        self.ctrl.state()
    }

    pub fn led(&self) -> bool {
        self.ctrl.led().is_on()
    }

    pub fn hw_led(&self) -> bool {
        self.ctrl.peripherals().indicator.on
    }

    pub fn tick_enabled(&self) -> bool {
        self.ctrl.peripherals().timer.enabled
    }

    pub fn text(&self) -> &str {
        &self.ctrl.peripherals().serial.text
    }

    pub fn clear_text(&mut self) {
        self.ctrl.peripherals_mut().serial.text.clear();
    }
}
