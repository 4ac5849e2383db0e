//! Console UART receive task
//!
//! Moves received bytes into the core's receive queue. No parsing or echo
//! happens here.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use digilux_core::config::RX_QUEUE_SIZE;
use digilux_core::input::RxSink;

use crate::channels::WAKE;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Serial RX task - enqueues bytes and wakes the controller
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx, mut sink: RxSink<'static, RX_QUEUE_SIZE>) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    if let Err(e) = sink.receive(byte) {
                        trace!("RX byte dropped: {:?}", e);
                    }
                }
                WAKE.signal(());
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
