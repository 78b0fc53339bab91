//! Multi-chain polling and sync orchestration.
//!
//! Runs one independent task per tracked chain. Each task polls for new
//! heights, composes every pending block per the configured fetch mode and
//! delivers it to the consumer callback in strictly increasing height
//! order. A failing chain restarts after a cooldown without affecting any
//! other chain.

mod error;
mod service;

pub use error::WatcherError;
pub use service::{BlockHandler, BlockWatcher, WatcherIntervals};
