//! Server module for building the HTTP service
//!
//! This module provides a `ServerBuilder` that wires the order store and
//! configuration into a `ServerHost`, then exposes it over REST.

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
