pub mod concurrent_queue;
pub mod mutex;
