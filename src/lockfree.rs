//! The lock-free queue backend.

use crate::queue::AppendQueue;
use crate::util::sync::concurrent_queue::ConcurrentQueue;

/// An append-only queue whose concurrency safety is built into its own
/// atomic tail insertion, with no external lock.
///
/// Elements appended by one thread come out in that thread's order; how
/// different threads' elements interleave is unspecified, but nothing is
/// ever lost or duplicated.
///
/// # Example
///
/// ```
/// # use append_queue::{AppendQueue, LockFreeQueue};
/// let queue = LockFreeQueue::new();
/// queue.append(42);
/// assert_eq!(queue.into_items(), vec![42]);
/// ```
pub struct LockFreeQueue<Element> {
    items: ConcurrentQueue<Element>,
}

impl<Element> LockFreeQueue<Element> {
    /// Creates a new, empty queue.
    pub fn new() -> Self {
        Self {
            items: ConcurrentQueue::new(),
        }
    }
}

impl<Element> AppendQueue<Element> for LockFreeQueue<Element> {
    fn append(&self, element: Element) {
        self.items.push(element)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn into_items(self) -> Vec<Element> {
        self.items.into_items()
    }
}

impl<Element> Default for LockFreeQueue<Element> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use crate::{AppendQueue, LockFreeQueue};

    #[test]
    fn starts_empty() {
        let queue = LockFreeQueue::<u32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.into_items().is_empty());
    }

    #[test]
    fn preserves_single_thread_order() {
        let queue = LockFreeQueue::new();

        for i in 0..42 {
            queue.append(i);
        }

        assert_eq!(queue.into_items(), (0..42).collect::<Vec<_>>());
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let queue = LockFreeQueue::new();

        crossbeam_utils::thread::scope(|scope| {
            for thread in 0..4 {
                let queue = &queue;
                scope.spawn(move |_| {
                    for i in 0..100 {
                        queue.append((thread, i));
                    }
                });
            }
        })
        .unwrap();

        let items = queue.into_items();
        assert_eq!(items.len(), 400);

        for thread in 0..4 {
            let sequence: Vec<_> = items
                .iter()
                .filter(|(owner, _)| *owner == thread)
                .map(|(_, i)| *i)
                .collect();

            assert_eq!(sequence, (0..100).collect::<Vec<_>>());
        }
    }

    #[test]
    fn implements_sync() {
        let queue = LockFreeQueue::<u32>::new();
        &queue as &dyn Sync;
    }

    #[test]
    fn implements_send() {
        let queue = LockFreeQueue::<u32>::new();
        &queue as &dyn Send;
    }
}
