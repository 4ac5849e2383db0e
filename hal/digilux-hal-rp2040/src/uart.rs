//! UART setup and console flushing

use embassy_rp::uart::{self, BufferedUartTx};
use embedded_io_async::Write;

use digilux_hal::uart::{DataBits, Parity, StopBits};
use digilux_hal::{TxBuffer, UartConfig};

/// Convert the shared UART configuration to the embassy-rp one
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// Write out everything staged in `buf`, then empty it
pub async fn flush<const N: usize>(
    tx: &mut BufferedUartTx,
    buf: &mut TxBuffer<N>,
) -> Result<(), uart::Error> {
    if buf.is_empty() {
        return Ok(());
    }
    let result = tx.write_all(buf.as_slice()).await;
    buf.clear();
    result
}
