//! Execution engine: job store, submission gate, and the single drain loop.

pub mod pool;

pub use pool::MiningPool;
