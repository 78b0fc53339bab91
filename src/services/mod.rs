//! Core services for block acquisition and delivery.
//!
//! - `registry`: endpoint resolution and health-aware ordering
//! - `client`: per-chain block data acquisition with failover
//! - `watcher`: per-chain polling tasks and in-order delivery

pub mod client;
pub mod registry;
pub mod watcher;
