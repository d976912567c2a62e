//! The t-shirt order demonstration: the same two-producer workload run four
//! ways, from single-threaded through racy to the two safe backends.
//!
//! Run with `cargo run --example submit_orders`, adding `--pause` to wait
//! for enter between variants.

use std::env;
use std::io;
use std::io::{BufRead, Write};
use std::time::Duration;

use append_queue::{
    run_to_completion, write_report, AppendQueue, LockFreeQueue, MutexQueue, Order, Producer,
    RacyQueue, DEFAULT_ORDER_COUNT,
};

const CUSTOMERS: [&str; 2] = ["Mark", "Ramdevi"];
const ITEM_DELAY: Duration = Duration::from_millis(1);

fn main() -> io::Result<()> {
    let pause = env::args().any(|argument| argument == "--pause");

    run_single_threaded(pause)?;
    run_racy(pause)?;
    run_lock_free(pause)?;
    run_lock_based(pause)?;

    Ok(())
}

/// One thread appends every order itself; nothing can go wrong, and nothing
/// runs concurrently.
fn run_single_threaded(pause: bool) -> io::Result<()> {
    println!("== single-threaded ==");

    let queue = MutexQueue::new();

    for producer in producers() {
        producer.run(&queue);
    }

    report(queue.into_items(), pause)
}

/// Both producers hammer the racy queue at once. Expect missing orders in
/// the report on most runs.
fn run_racy(pause: bool) -> io::Result<()> {
    println!("== multithreaded, unsynchronized ==");

    let capacity = CUSTOMERS.len() * DEFAULT_ORDER_COUNT as usize;
    let orders = run_to_completion(RacyQueue::with_capacity(capacity), &producers());

    report(orders, pause)
}

/// The same workload through the lock-free backend: all ten orders, every
/// run.
fn run_lock_free(pause: bool) -> io::Result<()> {
    println!("== multithreaded, lock-free queue ==");

    report(
        run_to_completion(LockFreeQueue::new(), &producers()),
        pause,
    )
}

/// The same workload again, synchronized with the mutex backend instead.
fn run_lock_based(pause: bool) -> io::Result<()> {
    println!("== multithreaded, lock-based queue ==");

    report(run_to_completion(MutexQueue::new(), &producers()), pause)
}

fn producers() -> Vec<Producer> {
    CUSTOMERS
        .iter()
        .map(|customer| Producer::new(*customer).with_delay(ITEM_DELAY))
        .collect()
}

fn report(orders: Vec<Order>, pause: bool) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &orders)?;

    if pause {
        wait_for_enter()?;
    }

    Ok(())
}

fn wait_for_enter() -> io::Result<()> {
    print!("Press enter to continue...");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(())
}
