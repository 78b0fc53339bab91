//! Per-chain block data acquisition.
//!
//! Turns an ordered list of candidate endpoints into one best-effort answer
//! per call: latest-height discovery fans out to every REST gateway at
//! once, while header and transaction fetches fail over sequentially
//! through the RPC gateways in priority order. Outcomes are reported back
//! to the endpoint registry so unreliable gateways sink in the ordering.

mod client;
mod decoder;
mod error;

pub use client::{ChainClient, ClientConfig};
pub use decoder::decode_transaction;
pub use error::ClientError;
