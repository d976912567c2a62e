//! The lock-based queue backend.

use crate::queue::AppendQueue;
use crate::util::sync::mutex::Mutex;

/// An append-only queue that guards a plain vector with a mutex.
///
/// The mutex is owned by the queue instance, so independent queues never
/// contend with each other. Each append acquires the lock for the single
/// push only; the guard releases it on every exit path, including unwinds,
/// so one producer failing mid-loop cannot wedge the others.
///
/// # Example
///
/// ```
/// # use append_queue::{AppendQueue, MutexQueue};
/// let queue = MutexQueue::new();
/// queue.append(42);
/// assert_eq!(queue.into_items(), vec![42]);
/// ```
pub struct MutexQueue<Element> {
    items: Mutex<Vec<Element>>,
}

impl<Element> MutexQueue<Element> {
    /// Creates a new, empty queue.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of every element currently held, in insertion order,
    /// without consuming the queue.
    ///
    /// The clone happens under the lock, so the copy is a consistent cut of
    /// the sequence even while producers are still appending.
    pub fn snapshot(&self) -> Vec<Element>
    where
        Element: Clone,
    {
        self.items.lock().clone()
    }
}

impl<Element> AppendQueue<Element> for MutexQueue<Element> {
    fn append(&self, element: Element) {
        self.items.lock().push(element)
    }

    fn len(&self) -> usize {
        self.items.lock().len()
    }

    fn into_items(self) -> Vec<Element> {
        self.items.into_inner()
    }
}

impl<Element> Default for MutexQueue<Element> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use crate::{AppendQueue, MutexQueue};

    #[test]
    fn starts_empty() {
        let queue = MutexQueue::<u32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.into_items().is_empty());
    }

    #[test]
    fn preserves_insertion_order() {
        let queue = MutexQueue::new();

        for i in 0..42 {
            queue.append(i);
        }

        assert_eq!(queue.into_items(), (0..42).collect::<Vec<_>>());
    }

    #[test]
    fn snapshot_does_not_consume() {
        let queue = MutexQueue::new();
        queue.append(1);
        queue.append(2);

        assert_eq!(queue.snapshot(), vec![1, 2]);
        assert_eq!(queue.len(), 2);

        queue.append(4);
        assert_eq!(queue.into_items(), vec![1, 2, 4]);
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let queue = MutexQueue::new();

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
        let queue = MutexQueue::<u32>::new();
        &queue as &dyn Sync;
    }

    #[test]
    fn implements_send() {
        let queue = MutexQueue::<u32>::new();
        &queue as &dyn Send;
    }
}
