//! Cosmos block watcher library.
//!
//! Tracks the head of one or more Cosmos-SDK networks by polling public REST
//! and RPC gateways, reconstructing each new block, and delivering blocks in
//! strictly increasing height order to a consumer callback, per chain.
//!
//! The crate is organized around three layers:
//! - `services::registry`: resolves chain identifiers to candidate gateway
//!   URLs and keeps a reliability score per endpoint
//! - `services::client`: best-effort block data acquisition with endpoint
//!   failover and transaction decoding
//! - `services::watcher`: per-chain polling tasks that compose blocks and
//!   drive the consumer callback

pub mod models;
pub mod services;
pub mod utils;
