//! Resource data model
//!
//! Plain data structures mirroring the cloud API records, plus the
//! [`RelationshipSnapshot`] aggregation used by the graph and topology
//! renderers. No business logic lives here.

mod compute;
mod identity;
mod loadbalancer;
mod network;
mod resource;
mod search;
mod snapshot;
mod storage;

pub use compute::{Flavor, Hypervisor, Image, Keypair, Server, ServerInterface};
pub use identity::{DnsZone, Project, User};
pub use loadbalancer::{Listener, LoadBalancer, Pool};
pub use network::{FixedIp, FloatingIp, Network, Port, Router, SecurityGroup, Subnet};
pub use resource::{ResourceKind, ResourceRef};
pub use search::SearchHit;
pub use snapshot::RelationshipSnapshot;
pub use storage::{Volume, VolumeAttachment};
