//! Utility modules for common functionality.
//!
//! - `http`: retryable HTTP client construction
//! - `logging`: tracing subscriber setup

pub mod http;
pub mod logging;
