#![doc = include_str!("documentation.md")]
#![warn(missing_docs)]

pub use crate::locking::MutexQueue;
pub use crate::lockfree::LockFreeQueue;
pub use crate::order::Order;
pub use crate::producer::{Producer, DEFAULT_ORDER_COUNT};
pub use crate::queue::AppendQueue;
pub use crate::racy::RacyQueue;
pub use crate::run::{run_producers, run_to_completion, write_report};

pub mod locking;
pub mod lockfree;
#[cfg(all(test, loom))]
mod loom;
pub mod order;
pub mod producer;
pub mod queue;
pub mod racy;
pub mod run;
mod util;
