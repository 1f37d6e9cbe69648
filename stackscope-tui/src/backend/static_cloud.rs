//! Built-in demo dataset
//!
//! Implements every provider trait over fixed in-memory data so the
//! client can run without credentials. Seeded from the cloud profile
//! name so switching profiles visibly changes the data.

use std::collections::HashMap;

use async_trait::async_trait;

use stackscope_core::types::{
    DnsZone, FixedIp, Flavor, FloatingIp, Hypervisor, Image, Keypair, Listener, LoadBalancer,
    Network, Pool, Port, Project, ResourceKind, Router, SecurityGroup, Server, ServerInterface,
    Subnet, User, Volume, VolumeAttachment,
};
use stackscope_core::{
    ComputeProvider, CoreError, CoreResult, DnsProvider, IdentityProvider, ImageProvider,
    LoadBalancerProvider, NetworkProvider, StorageProvider,
};

pub struct StaticCloud {
    servers: Vec<Server>,
    networks: Vec<Network>,
    subnets: Vec<Subnet>,
    ports: Vec<Port>,
    floating_ips: Vec<FloatingIp>,
    volumes: Vec<Volume>,
    routers: Vec<Router>,
    security_groups: Vec<SecurityGroup>,
    load_balancers: Vec<LoadBalancer>,
    listeners: HashMap<String, Vec<Listener>>,
    pools: HashMap<String, Vec<Pool>>,
    flavors: Vec<Flavor>,
    keypairs: Vec<Keypair>,
    hypervisors: Vec<Hypervisor>,
    images: Vec<Image>,
    projects: Vec<Project>,
    users: Vec<User>,
    zones: Vec<DnsZone>,
}

impl StaticCloud {
    pub fn seeded(cloud: &str) -> Self {
        let servers = vec![
            server(cloud, 1, "web1", "ACTIVE", "m1.small", "img-debian"),
            server(cloud, 2, "web2", "ACTIVE", "m1.small", "img-debian"),
            server(cloud, 3, "db1", "SHUTOFF", "m1.large", "img-ubuntu"),
        ];
        let networks = vec![
            Network {
                id: id(cloud, "net", 1),
                name: "internal".into(),
                status: "ACTIVE".into(),
                subnet_ids: vec![id(cloud, "sub", 1)],
            },
            Network {
                id: id(cloud, "net", 2),
                name: "external".into(),
                status: "ACTIVE".into(),
                subnet_ids: vec![id(cloud, "sub", 2)],
            },
        ];
        let subnets = vec![
            Subnet {
                id: id(cloud, "sub", 1),
                name: "internal-v4".into(),
                cidr: "10.0.1.0/24".into(),
                network_id: id(cloud, "net", 1),
            },
            Subnet {
                id: id(cloud, "sub", 2),
                name: "external-v4".into(),
                cidr: "203.0.113.0/24".into(),
                network_id: id(cloud, "net", 2),
            },
        ];
        let ports = vec![
            port(cloud, 1, 1, Some(1), "10.0.1.11"),
            port(cloud, 2, 1, Some(2), "10.0.1.12"),
            port(cloud, 3, 1, Some(3), "10.0.1.13"),
            port(cloud, 4, 1, None, "10.0.1.20"),
        ];
        let floating_ips = vec![
            FloatingIp {
                id: id(cloud, "fip", 1),
                floating_ip: "203.0.113.5".into(),
                status: "ACTIVE".into(),
                port_id: Some(id(cloud, "port", 1)),
            },
            FloatingIp {
                id: id(cloud, "fip", 2),
                floating_ip: "203.0.113.6".into(),
                status: "DOWN".into(),
                port_id: None,
            },
        ];
        let volumes = vec![
            Volume {
                id: id(cloud, "vol", 1),
                name: "web1-data".into(),
                status: "in-use".into(),
                size_gb: 20,
                attachments: vec![VolumeAttachment {
                    volume_id: id(cloud, "vol", 1),
                    server_id: id(cloud, "srv", 1),
                    device: "/dev/vdb".into(),
                }],
            },
            Volume {
                id: id(cloud, "vol", 2),
                name: "db1-data".into(),
                status: "in-use".into(),
                size_gb: 100,
                attachments: vec![VolumeAttachment {
                    volume_id: id(cloud, "vol", 2),
                    server_id: id(cloud, "srv", 3),
                    device: "/dev/vdb".into(),
                }],
            },
            Volume {
                id: id(cloud, "vol", 3),
                name: "scratch".into(),
                status: "available".into(),
                size_gb: 50,
                attachments: Vec::new(),
            },
        ];
        let routers = vec![Router {
            id: id(cloud, "rt", 1),
            name: "edge".into(),
            status: "ACTIVE".into(),
            external_network_id: Some(id(cloud, "net", 2)),
        }];
        let security_groups = vec![
            SecurityGroup {
                id: id(cloud, "sg", 1),
                name: "default".into(),
                description: "Default security group".into(),
            },
            SecurityGroup {
                id: id(cloud, "sg", 2),
                name: "web".into(),
                description: "Allow 80/443 from anywhere".into(),
            },
        ];
        let lb_id = id(cloud, "lb", 1);
        let load_balancers = vec![LoadBalancer {
            id: lb_id.clone(),
            name: "web-lb".into(),
            provisioning_status: "ACTIVE".into(),
            vip_address: "10.0.1.100".into(),
        }];
        let listeners = HashMap::from([(
            lb_id.clone(),
            vec![
                Listener {
                    id: id(cloud, "lsn", 1),
                    name: "http".into(),
                    protocol: "HTTP".into(),
                    protocol_port: 80,
                },
                Listener {
                    id: id(cloud, "lsn", 2),
                    name: "https".into(),
                    protocol: "HTTPS".into(),
                    protocol_port: 443,
                },
            ],
        )]);
        let pools = HashMap::from([(
            lb_id,
            vec![Pool {
                id: id(cloud, "pool", 1),
                name: "web-pool".into(),
                protocol: "HTTP".into(),
            }],
        )]);
        let flavors = vec![
            Flavor {
                id: "m1.small".into(),
                name: "m1.small".into(),
                vcpus: 2,
                ram_mb: 4096,
                disk_gb: 40,
            },
            Flavor {
                id: "m1.large".into(),
                name: "m1.large".into(),
                vcpus: 8,
                ram_mb: 16384,
                disk_gb: 160,
            },
        ];
        let keypairs = vec![Keypair {
            name: "ops".into(),
            fingerprint: "a1:b2:c3:d4:e5:f6".into(),
        }];
        let hypervisors = vec![Hypervisor {
            id: id(cloud, "hv", 1),
            hostname: format!("compute-01.{cloud}"),
            state: "up".into(),
            running_vms: 3,
        }];
        let images = vec![
            Image {
                id: "img-debian".into(),
                name: "debian-12".into(),
                status: "active".into(),
                size_bytes: 512 * 1024 * 1024,
            },
            Image {
                id: "img-ubuntu".into(),
                name: "ubuntu-24.04".into(),
                status: "active".into(),
                size_bytes: 640 * 1024 * 1024,
            },
        ];
        let projects = vec![Project {
            id: id(cloud, "prj", 1),
            name: cloud.to_owned(),
            description: "Demo project".into(),
        }];
        let users = vec![User {
            id: id(cloud, "usr", 1),
            name: "admin".into(),
            enabled: true,
        }];
        let zones = vec![DnsZone {
            id: id(cloud, "zone", 1),
            name: format!("{cloud}.example.com."),
            status: "ACTIVE".into(),
            record_count: 12,
        }];

        Self {
            servers,
            networks,
            subnets,
            ports,
            floating_ips,
            volumes,
            routers,
            security_groups,
            load_balancers,
            listeners,
            pools,
            flavors,
            keypairs,
            hypervisors,
            images,
            projects,
            users,
            zones,
        }
    }
}

fn id(cloud: &str, prefix: &str, n: u32) -> String {
    format!("{prefix}-{cloud}-{n}")
}

fn server(cloud: &str, n: u32, name: &str, status: &str, flavor: &str, image: &str) -> Server {
    Server {
        id: id(cloud, "srv", n),
        name: name.into(),
        status: status.into(),
        flavor_id: flavor.into(),
        image_id: image.into(),
    }
}

fn port(cloud: &str, n: u32, network: u32, server: Option<u32>, ip: &str) -> Port {
    Port {
        id: id(cloud, "port", n),
        mac_address: format!("fa:16:3e:00:00:{n:02x}"),
        network_id: id(cloud, "net", network),
        device_id: server.map(|s| id(cloud, "srv", s)),
        fixed_ips: vec![FixedIp {
            ip_address: ip.into(),
            subnet_id: id(cloud, "sub", 1),
        }],
    }
}

#[async_trait]
impl ComputeProvider for StaticCloud {
    async fn list_servers(&self) -> CoreResult<Vec<Server>> {
        Ok(self.servers.clone())
    }

    async fn get_server(&self, server_id: &str) -> CoreResult<Server> {
        self.servers
            .iter()
            .find(|s| s.id == server_id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(ResourceKind::Server, server_id))
    }

    async fn list_server_interfaces(&self, server_id: &str) -> CoreResult<Vec<ServerInterface>> {
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
        Ok(self
            .volumes
            .iter()
            .flat_map(|v| v.attachments.iter())
            .filter(|a| a.server_id == server_id)
            .cloned()
            .collect())
    }

    async fn list_flavors(&self) -> CoreResult<Vec<Flavor>> {
        Ok(self.flavors.clone())
    }

    async fn list_keypairs(&self) -> CoreResult<Vec<Keypair>> {
        Ok(self.keypairs.clone())
    }

    async fn list_hypervisors(&self) -> CoreResult<Vec<Hypervisor>> {
        Ok(self.hypervisors.clone())
    }
}

#[async_trait]
impl NetworkProvider for StaticCloud {
    async fn list_networks(&self) -> CoreResult<Vec<Network>> {
        Ok(self.networks.clone())
    }

    async fn get_network(&self, network_id: &str) -> CoreResult<Network> {
        self.networks
            .iter()
            .find(|n| n.id == network_id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(ResourceKind::Network, network_id))
    }

    async fn list_subnets(&self) -> CoreResult<Vec<Subnet>> {
        Ok(self.subnets.clone())
    }

    async fn list_ports(&self) -> CoreResult<Vec<Port>> {
        Ok(self.ports.clone())
    }

    async fn list_ports_by_server(&self, server_id: &str) -> CoreResult<Vec<Port>> {
        Ok(self
            .ports
            .iter()
            .filter(|p| p.device_id.as_deref() == Some(server_id))
            .cloned()
            .collect())
    }

    async fn list_ports_by_network(&self, network_id: &str) -> CoreResult<Vec<Port>> {
        Ok(self
            .ports
            .iter()
            .filter(|p| p.network_id == network_id)
            .cloned()
            .collect())
    }

    async fn list_floating_ips(&self) -> CoreResult<Vec<FloatingIp>> {
        Ok(self.floating_ips.clone())
    }

    async fn list_routers(&self) -> CoreResult<Vec<Router>> {
        Ok(self.routers.clone())
    }

    async fn list_security_groups(&self) -> CoreResult<Vec<SecurityGroup>> {
        Ok(self.security_groups.clone())
    }
}

#[async_trait]
impl StorageProvider for StaticCloud {
    async fn list_volumes(&self) -> CoreResult<Vec<Volume>> {
        Ok(self.volumes.clone())
    }

    async fn get_volume(&self, volume_id: &str) -> CoreResult<Volume> {
        self.volumes
            .iter()
            .find(|v| v.id == volume_id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(ResourceKind::Volume, volume_id))
    }
}

#[async_trait]
impl LoadBalancerProvider for StaticCloud {
    async fn list_load_balancers(&self) -> CoreResult<Vec<LoadBalancer>> {
        Ok(self.load_balancers.clone())
    }

    async fn list_listeners(&self, lb_id: &str) -> CoreResult<Vec<Listener>> {
        Ok(self.listeners.get(lb_id).cloned().unwrap_or_default())
    }

    async fn list_pools(&self, lb_id: &str) -> CoreResult<Vec<Pool>> {
        Ok(self.pools.get(lb_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl IdentityProvider for StaticCloud {
    async fn list_projects(&self) -> CoreResult<Vec<Project>> {
        Ok(self.projects.clone())
    }

    async fn list_users(&self) -> CoreResult<Vec<User>> {
        Ok(self.users.clone())
    }
}

#[async_trait]
impl ImageProvider for StaticCloud {
    async fn list_images(&self) -> CoreResult<Vec<Image>> {
        Ok(self.images.clone())
    }
}

#[async_trait]
impl DnsProvider for StaticCloud {
    async fn list_zones(&self) -> CoreResult<Vec<DnsZone>> {
        Ok(self.zones.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_varies_with_cloud_name() {
        let a = StaticCloud::seeded("dev");
        let b = StaticCloud::seeded("prod");
        let sa = a.list_servers().await.unwrap();
        let sb = b.list_servers().await.unwrap();
        assert_ne!(sa[0].id, sb[0].id);
    }

    #[tokio::test]
    async fn topology_relationships_line_up() {
        let cloud = StaticCloud::seeded("demo");
        let ports = cloud.list_ports_by_server(&id("demo", "srv", 1)).await.unwrap();
        assert_eq!(ports.len(), 1);
        let fips = cloud.list_floating_ips().await.unwrap();
        assert_eq!(fips[0].port_id.as_deref(), Some(ports[0].id.as_str()));
    }
}
