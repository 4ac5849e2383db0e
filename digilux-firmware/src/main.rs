//! Digilux - Digit Analysis Firmware
//!
//! Main firmware binary for RP2040-based boards. Reads a number from the
//! console UART and walks its digits on an LED: even digits blink, odd
//! digits toggle. A button freezes the LED output.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use heapless::spsc::Queue;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use digilux_core::config::{AppConfig, DEFAULT_BAUDRATE, RX_QUEUE_SIZE, TICK_INTERVAL_US};
use digilux_core::input::channel;
use digilux_core::{Context, Controller, Peripherals};
use digilux_hal::{ButtonConfig, PinIndicator, TimerConfig, TxBuffer, UartConfig};
use digilux_hal_rp2040::{uart_config, ButtonPin, GatedTimer, LedPin};

use crate::channels::TICK_GATE;

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// State shared between the interrupt-side tasks and the controller
static CONTEXT: Context = Context::new();

// Static cells for buffers (must live forever)
static RX_QUEUE: StaticCell<Queue<u8, RX_QUEUE_SIZE>> = StaticCell::new();
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Digilux firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console UART (GPIO0 TX, GPIO1 RX)
    let console_config = UartConfig {
        baudrate: DEFAULT_BAUDRATE,
        ..UartConfig::default()
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config(&console_config));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", console_config.baudrate);

    let (sink, consumer) = channel(RX_QUEUE.init(Queue::new()), &CONTEXT);

    // Freeze button on GPIO15, pulled up
    let button = ButtonPin::new(p.PIN_15, ButtonConfig::default());

    // RGB LED on GPIO18-20; the first channel is the analysis indicator
    let indicator = PinIndicator::new_active_high(
        LedPin::new(p.PIN_18),
        LedPin::new(p.PIN_19),
        LedPin::new(p.PIN_20),
    );

    let hw = Peripherals {
        serial: TxBuffer::new(),
        timer: GatedTimer::new(&TICK_GATE),
        indicator,
    };
    let app: tasks::App = Controller::new(&CONTEXT, consumer, hw, AppConfig::default());

    let tick_config = TimerConfig {
        interval_us: TICK_INTERVAL_US,
    };

    spawner.spawn(tasks::tick_task(&CONTEXT, tick_config)).unwrap();
    spawner.spawn(tasks::serial_rx_task(rx, sink)).unwrap();
    spawner.spawn(tasks::button_task(&CONTEXT, button)).unwrap();
    spawner.spawn(tasks::controller_task(app, tx)).unwrap();

    info!("All tasks spawned, firmware running");
}
