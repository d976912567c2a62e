use loom::model;
use loom::sync::Arc;
use loom::thread;

use crate::{AppendQueue, LockFreeQueue, MutexQueue};

// Two producers, two appends each, explored across every interleaving loom
// can reach. Under loom the backends swap in loom's own primitives, so these
// check the queue logic rather than parking_lot or crossbeam internals.

#[test]
fn mutex_queue_loses_nothing_across_interleavings() {
    model(|| {
        let queue = Arc::new(MutexQueue::new());

        let threads: Vec<_> = (0..2)
            .map(|producer| {
                let queue = queue.clone();

                thread::spawn(move || {
                    for sequence in 0..2 {
                        queue.append((producer, sequence));
                    }
                })
            })
            .collect();

        for thread in threads {
            thread.join().unwrap();
        }

        let items = queue.snapshot();
        assert_eq!(items.len(), 4);

        for producer in 0..2 {
            let sequence: Vec<_> = items
                .iter()
                .filter(|(owner, _)| *owner == producer)
                .map(|(_, sequence)| *sequence)
                .collect();

            assert_eq!(sequence, vec![0, 1]);
        }
    });
}

#[test]
fn lock_free_queue_loses_nothing_across_interleavings() {
    model(|| {
        let queue = Arc::new(LockFreeQueue::new());

        let threads: Vec<_> = (0..2)
            .map(|producer| {
                let queue = queue.clone();

                thread::spawn(move || {
                    for sequence in 0..2 {
                        queue.append((producer, sequence));
                    }
                })
            })
            .collect();

        for thread in threads {
            thread.join().unwrap();
        }

        assert_eq!(queue.len(), 4);
    });
}
