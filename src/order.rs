//! The order records that producers append into the shared queue.

use std::fmt;
use std::fmt::{Display, Formatter};

/// A single t-shirt order placed by a customer.
///
/// Orders are immutable once constructed. An order displays as the line the
/// report prints for it:
///
/// ```
/// # use append_queue::Order;
/// let order = Order::new("Mark", 1);
/// assert_eq!(order.to_string(), "Mark wants t-shirt 1");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Order {
    customer: String,
    sequence: u32,
}

impl Order {
    /// Creates an order for the given customer and sequence number.
    pub fn new(customer: impl Into<String>, sequence: u32) -> Self {
        Self {
            customer: customer.into(),
            sequence,
        }
    }

    /// The name of the customer who placed the order.
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// The position of this order within its customer's batch, starting at 1.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} wants t-shirt {}", self.customer, self.sequence)
    }
}
