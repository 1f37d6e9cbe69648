//! DNS service provider trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::DnsZone;

/// Read operations against the DNS service.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    async fn list_zones(&self) -> CoreResult<Vec<DnsZone>>;
}
