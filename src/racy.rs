//! The intentionally unsynchronized queue backend.
//!
//! This module exists to demonstrate the failure the safe backends rule out.
//! Nothing in here may be used outside demonstrations and tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::atomic::AtomicCell;

use crate::queue::AppendQueue;

/// A demo-only queue whose append path contains a deliberate lost-update
/// race.
///
/// The tail index is read and written as two separate atomic operations, so
/// two producers that read the index at the same time claim the same slot:
/// one order overwrites the other and the index advances once. Under
/// contention the final drain is therefore shorter than the number of
/// appends — the classic symptom of unsynchronized shared mutation, kept
/// observable without undefined behavior by storing slots in
/// [AtomicCell](crossbeam_utils::atomic::AtomicCell)s.
///
/// The queue holds a fixed number of slots; appends past capacity are
/// discarded. When used from a single thread it behaves like a plain FIFO.
pub struct RacyQueue<Element> {
    slots: Box<[AtomicCell<Option<Element>>]>,
    next_slot: AtomicUsize,
}

impl<Element> RacyQueue<Element> {
    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| AtomicCell::new(None)).collect();

        Self {
            slots,
            next_slot: AtomicUsize::new(0),
        }
    }

    /// The number of slots this queue was created with.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<Element> AppendQueue<Element> for RacyQueue<Element> {
    fn append(&self, element: Element) {
        // The load and the store are two separate operations on purpose:
        // concurrent producers can both observe the same index and claim the
        // same slot.
        let slot = self.next_slot.load(Ordering::Relaxed);

        if slot >= self.slots.len() {
            return;
        }

        self.slots[slot].store(Some(element));
        self.next_slot.store(slot + 1, Ordering::Relaxed);
    }

    fn len(&self) -> usize {
        self.next_slot.load(Ordering::Relaxed).min(self.slots.len())
    }

    fn into_items(self) -> Vec<Element> {
        self.slots
            .into_vec()
            .into_iter()
            .filter_map(AtomicCell::into_inner)
            .collect()
    }
}
