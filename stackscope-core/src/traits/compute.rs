//! Compute service provider trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Flavor, Hypervisor, Keypair, Server, ServerInterface, VolumeAttachment};

/// Read operations against the compute service.
#[async_trait]
pub trait ComputeProvider: Send + Sync {
    async fn list_servers(&self) -> CoreResult<Vec<Server>>;

    async fn get_server(&self, id: &str) -> CoreResult<Server>;

    /// Network interfaces attached to a server.
    async fn list_server_interfaces(&self, server_id: &str) -> CoreResult<Vec<ServerInterface>>;

    /// Volume attachments on a server.
    async fn list_server_volumes(&self, server_id: &str) -> CoreResult<Vec<VolumeAttachment>>;

    async fn list_flavors(&self) -> CoreResult<Vec<Flavor>>;

    async fn list_keypairs(&self) -> CoreResult<Vec<Keypair>>;

    async fn list_hypervisors(&self) -> CoreResult<Vec<Hypervisor>>;
}
