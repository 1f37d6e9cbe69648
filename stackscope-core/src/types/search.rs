//! Global search result type

use serde::{Deserialize, Serialize};

use super::{ResourceKind, ResourceRef};

/// A single hit from the cross-service live search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub kind: ResourceKind,
    pub id: String,
    pub name: String,
    /// Additional context: status, size, CIDR, ...
    pub extra: String,
}

impl SearchHit {
    pub fn to_ref(&self) -> ResourceRef {
        ResourceRef::new(self.kind, self.id.clone(), self.name.clone())
    }
}
