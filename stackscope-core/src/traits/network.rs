//! Network service provider trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{FloatingIp, Network, Port, Router, SecurityGroup, Subnet};

/// Read operations against the network service.
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    async fn list_networks(&self) -> CoreResult<Vec<Network>>;

    async fn get_network(&self, id: &str) -> CoreResult<Network>;

    async fn list_subnets(&self) -> CoreResult<Vec<Subnet>>;

    async fn list_ports(&self) -> CoreResult<Vec<Port>>;

    /// Ports whose device is the given server.
    async fn list_ports_by_server(&self, server_id: &str) -> CoreResult<Vec<Port>>;

    /// Ports on the given network.
    async fn list_ports_by_network(&self, network_id: &str) -> CoreResult<Vec<Port>>;

    async fn list_floating_ips(&self) -> CoreResult<Vec<FloatingIp>>;

    async fn list_routers(&self) -> CoreResult<Vec<Router>>;

    async fn list_security_groups(&self) -> CoreResult<Vec<SecurityGroup>>;
}
