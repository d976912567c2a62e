//! The harness that runs producers against a shared queue and reports the
//! result.

use std::io;
use std::io::Write;

use crate::order::Order;
use crate::producer::Producer;
use crate::queue::AppendQueue;

/// Runs every producer on its own thread against the shared queue, returning
/// once all of them have finished.
///
/// The end of the internal scope is the join barrier: it is a hard join with
/// no timeout and no cancellation. A panicking producer propagates the panic
/// to the caller after the remaining producers have been joined.
pub fn run_producers<Queue>(queue: &Queue, producers: &[Producer])
where
    Queue: AppendQueue<Order> + Sync,
{
    crossbeam_utils::thread::scope(|scope| {
        for producer in producers {
            scope.spawn(move |_| producer.run(queue));
        }
    })
    .unwrap();
}

/// Runs every producer against the queue, then drains it.
///
/// This is the whole lifecycle of a run: the queue is mutated only by the
/// producers, and read only after the join barrier.
///
/// # Example
///
/// ```
/// # use append_queue::{MutexQueue, Producer, run_to_completion};
/// let producers = vec![Producer::new("Mark"), Producer::new("Ramdevi")];
/// let orders = run_to_completion(MutexQueue::new(), &producers);
/// assert_eq!(orders.len(), 10);
/// ```
pub fn run_to_completion<Queue>(queue: Queue, producers: &[Producer]) -> Vec<Order>
where
    Queue: AppendQueue<Order> + Sync,
{
    run_producers(&queue, producers);
    queue.into_items()
}

/// Writes one `ORDER:` line per order to the given sink.
///
/// # Example
///
/// ```
/// # use append_queue::{write_report, Order};
/// let mut sink = Vec::new();
/// write_report(&mut sink, &[Order::new("Mark", 1)]).unwrap();
/// assert_eq!(String::from_utf8(sink).unwrap(), "ORDER: Mark wants t-shirt 1\n");
/// ```
pub fn write_report<Writer: Write>(writer: &mut Writer, orders: &[Order]) -> io::Result<()> {
    for order in orders {
        writeln!(writer, "ORDER: {}", order)?;
    }

    Ok(())
}
