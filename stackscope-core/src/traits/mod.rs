//! Provider abstractions
//!
//! Read-only, async views onto each cloud service family. Front ends hand
//! the aggregator `Arc<dyn ...>` handles; tests substitute in-memory
//! implementations. Session/token state behind an implementation is its
//! own concern and assumed externally synchronized.

mod compute;
mod dns;
mod identity;
mod image;
mod loadbalancer;
mod network;
mod storage;

pub use compute::ComputeProvider;
pub use dns::DnsProvider;
pub use identity::IdentityProvider;
pub use image::ImageProvider;
pub use loadbalancer::LoadBalancerProvider;
pub use network::NetworkProvider;
pub use storage::StorageProvider;
