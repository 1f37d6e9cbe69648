//! Resource identity types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every resource family the client can navigate into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Server,
    Network,
    Subnet,
    Port,
    FloatingIp,
    Volume,
    Router,
    LoadBalancer,
    Listener,
    Pool,
    SecurityGroup,
    Project,
    User,
    DnsZone,
    DnsRecordSet,
    Image,
    Flavor,
    Keypair,
    Hypervisor,
}

impl ResourceKind {
    /// Human-readable singular label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Server => "Server",
            Self::Network => "Network",
            Self::Subnet => "Subnet",
            Self::Port => "Port",
            Self::FloatingIp => "Floating IP",
            Self::Volume => "Volume",
            Self::Router => "Router",
            Self::LoadBalancer => "Load Balancer",
            Self::Listener => "Listener",
            Self::Pool => "Pool",
            Self::SecurityGroup => "Security Group",
            Self::Project => "Project",
            Self::User => "User",
            Self::DnsZone => "DNS Zone",
            Self::DnsRecordSet => "DNS Record Set",
            Self::Image => "Image",
            Self::Flavor => "Flavor",
            Self::Keypair => "Keypair",
            Self::Hypervisor => "Hypervisor",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies any navigable entity. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: String,
    pub name: String,
}

impl ResourceRef {
    pub fn new(kind: ResourceKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            name: name.into(),
        }
    }

    /// Short ID prefix used in space-constrained renders.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map_or(self.id.len(), |(i, _)| i);
        &self.id[..end]
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.name)
    }
}
