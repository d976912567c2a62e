//! Producer tasks that append labeled orders into a shared queue.

use std::thread;
use std::time::Duration;

use crate::order::Order;
use crate::queue::AppendQueue;

/// The number of orders a producer places unless configured otherwise.
pub const DEFAULT_ORDER_COUNT: u32 = 5;

/// A unit of work that appends a fixed number of labeled orders into a
/// shared queue.
///
/// A producer is pure side effect: running it cannot fail, and its only
/// output is the orders it appends. The optional per-item delay exists to
/// widen the window in which concurrently running producers interleave; it
/// is not a real blocking wait.
///
/// # Example
///
/// ```
/// # use append_queue::{AppendQueue, MutexQueue, Producer};
/// let queue = MutexQueue::new();
/// Producer::new("Mark").run(&queue);
/// assert_eq!(queue.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Producer {
    customer: String,
    count: u32,
    delay: Option<Duration>,
}

impl Producer {
    /// Creates a producer that places [DEFAULT_ORDER_COUNT] orders for the
    /// given customer, with no delay between them.
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            count: DEFAULT_ORDER_COUNT,
            delay: None,
        }
    }

    /// Sets the number of orders this producer places.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets a delay observed before each order is appended.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// The customer this producer places orders for.
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// The number of orders this producer places.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Appends this producer's orders to the queue, in sequence order,
    /// sleeping the configured delay before each one.
    pub fn run<Queue: AppendQueue<Order>>(&self, queue: &Queue) {
        for sequence in 1..=self.count {
            if let Some(delay) = self.delay {
                thread::sleep(delay);
            }

            queue.append(Order::new(self.customer.clone(), sequence));
        }
    }
}
