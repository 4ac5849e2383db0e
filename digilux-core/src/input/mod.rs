//! Serial input
//!
//! Bytes flow from the receive interrupt through a lock-free SPSC queue
//! into the foreground line buffer.

pub mod collector;
pub mod line;

use heapless::spsc::{Consumer, Queue};

use crate::context::Context;

pub use collector::{InputCollector, RxSink};
pub use line::{InputLine, MAX_LINE_CHARS};

/// Split a receive queue into its interrupt and foreground halves
pub fn channel<'a, const N: usize>(
    queue: &'a mut Queue<u8, N>,
    ctx: &'a Context,
) -> (RxSink<'a, N>, Consumer<'a, u8, N>) {
    let (producer, consumer) = queue.split();
    (RxSink::new(producer, ctx), consumer)
}
