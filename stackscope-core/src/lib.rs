//! Stackscope Core Library
//!
//! Provides the platform-independent pieces of the stackscope terminal
//! client:
//! - Resource data model (`types`)
//! - Read-only provider abstractions (`traits`)
//! - Relationship aggregation across services (`services`)
//! - Plain-text graph and topology rendering (`render`)
//!
//! The library never talks to a network itself; everything reaches the
//! cloud through the provider traits, so front ends and tests supply
//! their own implementations.

pub mod error;
pub mod render;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::RelationshipAggregator;
pub use traits::{
    ComputeProvider, DnsProvider, IdentityProvider, ImageProvider, LoadBalancerProvider,
    NetworkProvider, StorageProvider,
};
pub use types::{RelationshipSnapshot, ResourceKind, ResourceRef};
