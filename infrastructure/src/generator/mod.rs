//! Generation service adapter.
//!
//! Speaks the service's JSON dialect over HTTP: a fixed four-entry endpoint
//! catalog, wire types with the service's Japanese field names, a transport
//! loop with linear backoff and cooperative cancellation, and parallel
//! fan-out helpers over the single-item operations.

pub mod client;
pub mod endpoint;
pub mod parallel;
pub mod wire;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::GeneratorClient;
pub use endpoint::Endpoint;
pub use parallel::SingleRequestSpec;
