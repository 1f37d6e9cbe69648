//! Test helpers
//!
//! In-memory provider implementation with per-operation error and delay
//! injection, plus factories for a small sample cloud.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{
    ComputeProvider, DnsProvider, IdentityProvider, ImageProvider, LoadBalancerProvider,
    NetworkProvider, StorageProvider,
};
use crate::types::{
    DnsZone, FixedIp, Flavor, FloatingIp, Hypervisor, Image, Keypair, Listener, LoadBalancer,
    Network, Pool, Port, Project, Router, SecurityGroup, Server, ServerInterface, Subnet, User,
    Volume, VolumeAttachment,
};

// ===== MockCloud =====

/// One mock implementing every provider trait over plain vectors.
#[derive(Default)]
pub struct MockCloud {
    pub servers: Vec<Server>,
    pub networks: Vec<Network>,
    pub subnets: Vec<Subnet>,
    pub ports: Vec<Port>,
    pub floating_ips: Vec<FloatingIp>,
    pub volumes: Vec<Volume>,
    pub routers: Vec<Router>,
    pub security_groups: Vec<SecurityGroup>,
    pub load_balancers: Vec<LoadBalancer>,
    pub listeners: HashMap<String, Vec<Listener>>,
    pub pools: HashMap<String, Vec<Pool>>,

    /// Operation name -> error message returned instead of data.
    fail: RwLock<HashMap<&'static str, String>>,
    /// Operation name -> sleep applied before returning.
    delay: RwLock<HashMap<&'static str, Duration>>,
}

impl MockCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the named operation fail with the given message.
    pub async fn fail_on(&self, operation: &'static str, message: impl Into<String>) {
        self.fail.write().await.insert(operation, message.into());
    }

    /// Delays the named operation by the given duration.
    pub async fn delay_on(&self, operation: &'static str, delay: Duration) {
        self.delay.write().await.insert(operation, delay);
    }

    /// Applies injected delay/error for one operation.
    async fn gate(&self, operation: &'static str) -> CoreResult<()> {
        if let Some(delay) = self.delay.read().await.get(operation).copied() {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = self.fail.read().await.get(operation).cloned() {
            return Err(CoreError::fetch(operation, message));
        }
        Ok(())
    }
}

#[async_trait]
impl ComputeProvider for MockCloud {
    async fn list_servers(&self) -> CoreResult<Vec<Server>> {
        self.gate("list_servers").await?;
        Ok(self.servers.clone())
    }

    async fn get_server(&self, id: &str) -> CoreResult<Server> {
        self.gate("get_server").await?;
        self.servers
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(crate::types::ResourceKind::Server, id))
    }

    async fn list_server_interfaces(&self, server_id: &str) -> CoreResult<Vec<ServerInterface>> {
        self.gate("list_server_interfaces").await?;
        Ok(self
            .ports
            .iter()
            .filter(|p| p.device_id.as_deref() == Some(server_id))
            .map(|p| ServerInterface {
                port_id: p.id.clone(),
                network_id: p.network_id.clone(),
                fixed_ips: p.fixed_ips.iter().map(|ip| ip.ip_address.clone()).collect(),
            })
            .collect())
    }

    async fn list_server_volumes(&self, server_id: &str) -> CoreResult<Vec<VolumeAttachment>> {
        self.gate("list_server_volumes").await?;
        Ok(self
            .volumes
            .iter()
            .flat_map(|v| v.attachments.iter())
            .filter(|a| a.server_id == server_id)
            .cloned()
            .collect())
    }

    async fn list_flavors(&self) -> CoreResult<Vec<Flavor>> {
        self.gate("list_flavors").await?;
        Ok(Vec::new())
    }

    async fn list_keypairs(&self) -> CoreResult<Vec<Keypair>> {
        self.gate("list_keypairs").await?;
        Ok(Vec::new())
    }

    async fn list_hypervisors(&self) -> CoreResult<Vec<Hypervisor>> {
        self.gate("list_hypervisors").await?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl NetworkProvider for MockCloud {
    async fn list_networks(&self) -> CoreResult<Vec<Network>> {
        self.gate("list_networks").await?;
        Ok(self.networks.clone())
    }

    async fn get_network(&self, id: &str) -> CoreResult<Network> {
        self.gate("get_network").await?;
        self.networks
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(crate::types::ResourceKind::Network, id))
    }

    async fn list_subnets(&self) -> CoreResult<Vec<Subnet>> {
        self.gate("list_subnets").await?;
        Ok(self.subnets.clone())
    }

    async fn list_ports(&self) -> CoreResult<Vec<Port>> {
        self.gate("list_ports").await?;
        Ok(self.ports.clone())
    }

    async fn list_ports_by_server(&self, server_id: &str) -> CoreResult<Vec<Port>> {
        self.gate("list_ports_by_server").await?;
        Ok(self
            .ports
            .iter()
            .filter(|p| p.device_id.as_deref() == Some(server_id))
            .cloned()
            .collect())
    }

    async fn list_ports_by_network(&self, network_id: &str) -> CoreResult<Vec<Port>> {
        self.gate("list_ports_by_network").await?;
        Ok(self
            .ports
            .iter()
            .filter(|p| p.network_id == network_id)
            .cloned()
            .collect())
    }

    async fn list_floating_ips(&self) -> CoreResult<Vec<FloatingIp>> {
        self.gate("list_floating_ips").await?;
        Ok(self.floating_ips.clone())
    }

    async fn list_routers(&self) -> CoreResult<Vec<Router>> {
        self.gate("list_routers").await?;
        Ok(self.routers.clone())
    }

    async fn list_security_groups(&self) -> CoreResult<Vec<SecurityGroup>> {
        self.gate("list_security_groups").await?;
        Ok(self.security_groups.clone())
    }
}

#[async_trait]
impl StorageProvider for MockCloud {
    async fn list_volumes(&self) -> CoreResult<Vec<Volume>> {
        self.gate("list_volumes").await?;
        Ok(self.volumes.clone())
    }

    async fn get_volume(&self, id: &str) -> CoreResult<Volume> {
        self.gate("get_volume").await?;
        self.volumes
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(crate::types::ResourceKind::Volume, id))
    }
}

#[async_trait]
impl LoadBalancerProvider for MockCloud {
    async fn list_load_balancers(&self) -> CoreResult<Vec<LoadBalancer>> {
        self.gate("list_load_balancers").await?;
        Ok(self.load_balancers.clone())
    }

    async fn list_listeners(&self, lb_id: &str) -> CoreResult<Vec<Listener>> {
        self.gate("list_listeners").await?;
        Ok(self.listeners.get(lb_id).cloned().unwrap_or_default())
    }

    async fn list_pools(&self, lb_id: &str) -> CoreResult<Vec<Pool>> {
        self.gate("list_pools").await?;
        Ok(self.pools.get(lb_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl IdentityProvider for MockCloud {
    async fn list_projects(&self) -> CoreResult<Vec<Project>> {
        self.gate("list_projects").await?;
        Ok(Vec::new())
    }

    async fn list_users(&self) -> CoreResult<Vec<User>> {
        self.gate("list_users").await?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl ImageProvider for MockCloud {
    async fn list_images(&self) -> CoreResult<Vec<Image>> {
        self.gate("list_images").await?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl DnsProvider for MockCloud {
    async fn list_zones(&self) -> CoreResult<Vec<DnsZone>> {
        self.gate("list_zones").await?;
        Ok(Vec::new())
    }
}

// ===== Factories =====

pub fn server(id: &str, name: &str, status: &str) -> Server {
    Server {
        id: id.into(),
        name: name.into(),
        status: status.into(),
        ..Server::default()
    }
}

pub fn network(id: &str, name: &str, subnet_ids: &[&str]) -> Network {
    Network {
        id: id.into(),
        name: name.into(),
        status: "ACTIVE".into(),
        subnet_ids: subnet_ids.iter().map(|s| (*s).into()).collect(),
    }
}

pub fn subnet(id: &str, name: &str, cidr: &str, network_id: &str) -> Subnet {
    Subnet {
        id: id.into(),
        name: name.into(),
        cidr: cidr.into(),
        network_id: network_id.into(),
    }
}

pub fn port(id: &str, network_id: &str, device_id: Option<&str>, ip: &str) -> Port {
    Port {
        id: id.into(),
        mac_address: format!("fa:16:3e:00:00:{:02}", id.len()),
        network_id: network_id.into(),
        device_id: device_id.map(Into::into),
        fixed_ips: vec![FixedIp {
            ip_address: ip.into(),
            subnet_id: String::new(),
        }],
    }
}

pub fn floating_ip(id: &str, address: &str, port_id: Option<&str>) -> FloatingIp {
    FloatingIp {
        id: id.into(),
        floating_ip: address.into(),
        status: "ACTIVE".into(),
        port_id: port_id.map(Into::into),
    }
}

pub fn attached_volume(id: &str, name: &str, server_id: &str, device: &str) -> Volume {
    Volume {
        id: id.into(),
        name: name.into(),
        status: "in-use".into(),
        size_gb: 20,
        attachments: vec![VolumeAttachment {
            volume_id: id.into(),
            server_id: server_id.into(),
            device: device.into(),
        }],
    }
}

/// A small but fully linked sample cloud shared by the service tests.
pub fn sample_cloud() -> MockCloud {
    let mut cloud = MockCloud::new();
    cloud.servers = vec![
        server("srv-1", "web1", "ACTIVE"),
        server("srv-2", "db1", "SHUTOFF"),
    ];
    cloud.networks = vec![
        network("net-1", "internal", &["sub-1"]),
        network("net-2", "external", &["sub-2"]),
    ];
    cloud.subnets = vec![
        subnet("sub-1", "internal-v4", "10.0.1.0/24", "net-1"),
        subnet("sub-2", "external-v4", "203.0.113.0/24", "net-2"),
    ];
    cloud.ports = vec![
        port("port-1", "net-1", Some("srv-1"), "10.0.1.10"),
        port("port-2", "net-1", Some("srv-2"), "10.0.1.11"),
    ];
    cloud.floating_ips = vec![floating_ip("fip-1", "203.0.113.5", Some("port-1"))];
    cloud.volumes = vec![attached_volume("vol-1", "web1-data", "srv-1", "/dev/vdb")];
    cloud.routers = vec![Router {
        id: "rt-1".into(),
        name: "edge".into(),
        status: "ACTIVE".into(),
        external_network_id: Some("net-2".into()),
    }];
    cloud
}
