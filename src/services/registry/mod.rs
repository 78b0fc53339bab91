//! Endpoint registry with health-aware ordering.
//!
//! Resolves a chain identifier to candidate REST and RPC base URLs merged
//! from all configured sources, and maintains a consecutive-failure score
//! per endpoint. Failing endpoints are reordered to the back of the
//! candidate list rather than removed, so a transiently broken gateway
//! becomes eligible again on the next poll cycle without operator
//! intervention.

mod error;
mod service;
mod source;

pub use error::RegistryError;
pub use service::{ChainEndpoints, Endpoint, EndpointKind, EndpointRegistry};
pub use source::{ChainEndpointUrls, EndpointSource, StaticEndpointSource};
