//! The append contract shared by every queue backend.

/// A FIFO sequence that many producers append into and a single consumer
/// drains once the producers are done.
///
/// Implementations must never lose, duplicate or tear an element that was
/// appended through a safe backend, and must keep the elements appended by
/// any one thread in the order that thread appended them. The order in which
/// different threads' elements interleave is left to the backend.
pub trait AppendQueue<Element> {
    /// Adds an element at the tail of the queue.
    fn append(&self, element: Element);

    /// The number of elements currently held.
    ///
    /// While producers are still appending this is only a hint; once they
    /// have all been joined it is exact.
    fn len(&self) -> usize;

    /// Whether the queue currently holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the queue and returns every element in insertion-consistent
    /// order.
    ///
    /// Taking the queue by value is what enforces the consumption contract:
    /// the scoped producer threads borrow the queue, so it can only be
    /// drained after they have all been joined.
    fn into_items(self) -> Vec<Element>
    where
        Self: Sized;
}
