//! Cloud access service
//!
//! Wraps the provider trait objects behind the two shapes the UI
//! actually consumes: uniform list rows and key/value details. The
//! aggregator for graph, topology and search requests is built from
//! the same provider handles, so everything observes the same cloud.

use std::sync::Arc;

use serde::Serialize;

use stackscope_core::types::{ResourceKind, ResourceRef};
use stackscope_core::{
    ComputeProvider, CoreError, CoreResult, DnsProvider, IdentityProvider, ImageProvider,
    LoadBalancerProvider, NetworkProvider, RelationshipAggregator, StorageProvider,
};

use super::static_cloud::StaticCloud;

/// One entry in a resource list view.
#[derive(Debug, Clone)]
pub struct ResourceRow {
    pub reference: ResourceRef,
    /// Raw status string, empty for kinds without one.
    pub status: String,
    /// Short free-form context shown after the name.
    pub summary: String,
}

impl ResourceRow {
    fn new(reference: ResourceRef, status: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            reference,
            status: status.into(),
            summary: summary.into(),
        }
    }
}

/// Detail view data for a single resource.
#[derive(Debug, Clone)]
pub struct ResourceDetail {
    pub reference: ResourceRef,
    pub fields: Vec<(String, String)>,
    /// Pretty-printed raw record for the JSON toggle.
    pub json: String,
    /// What a graph request from this detail should focus on. A subnet
    /// graphs its parent network, a port its attached server.
    pub graph_ref: Option<ResourceRef>,
}

pub struct CloudService {
    name: String,
    compute: Arc<dyn ComputeProvider>,
    network: Arc<dyn NetworkProvider>,
    storage: Arc<dyn StorageProvider>,
    load_balancer: Arc<dyn LoadBalancerProvider>,
    identity: Arc<dyn IdentityProvider>,
    image: Arc<dyn ImageProvider>,
    dns: Arc<dyn DnsProvider>,
}

impl CloudService {
    /// A service backed by the built-in demo dataset, seeded from the
    /// cloud name so different profiles look different.
    pub fn demo(name: &str) -> Self {
        let cloud = Arc::new(StaticCloud::seeded(name));
        Self {
            name: name.to_owned(),
            compute: cloud.clone(),
            network: cloud.clone(),
            storage: cloud.clone(),
            load_balancer: cloud.clone(),
            identity: cloud.clone(),
            image: cloud.clone(),
            dns: cloud,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aggregator(&self) -> RelationshipAggregator {
        RelationshipAggregator::new(
            self.compute.clone(),
            self.network.clone(),
            self.storage.clone(),
            self.load_balancer.clone(),
        )
    }

    /// Lists one resource family as uniform rows.
    pub async fn list_rows(&self, kind: ResourceKind) -> CoreResult<Vec<ResourceRow>> {
        let rows = match kind {
            ResourceKind::Server => self
                .compute
                .list_servers()
                .await?
                .into_iter()
                .map(|s| {
                    let reference = ResourceRef::new(kind, &s.id, &s.name);
                    ResourceRow::new(reference, &s.status, format!("flavor {}", s.flavor_id))
                })
                .collect(),
            ResourceKind::Network => self
                .network
                .list_networks()
                .await?
                .into_iter()
                .map(|n| {
                    let reference = ResourceRef::new(kind, &n.id, &n.name);
                    let summary = format!("{} subnet(s)", n.subnet_ids.len());
                    ResourceRow::new(reference, &n.status, summary)
                })
                .collect(),
            ResourceKind::Subnet => self
                .network
                .list_subnets()
                .await?
                .into_iter()
                .map(|s| {
                    let reference = ResourceRef::new(kind, &s.id, &s.name);
                    ResourceRow::new(reference, "", &s.cidr)
                })
                .collect(),
            ResourceKind::Port => self
                .network
                .list_ports()
                .await?
                .into_iter()
                .map(|p| {
                    let name = p.primary_ip().unwrap_or(&p.mac_address).to_owned();
                    let reference = ResourceRef::new(kind, &p.id, name);
                    let status = if p.device_id.is_some() { "in-use" } else { "down" };
                    ResourceRow::new(reference, status, &p.mac_address)
                })
                .collect(),
            ResourceKind::FloatingIp => self
                .network
                .list_floating_ips()
                .await?
                .into_iter()
                .map(|f| {
                    let reference = ResourceRef::new(kind, &f.id, &f.floating_ip);
                    let summary = match &f.port_id {
                        Some(port) => format!("port {port}"),
                        None => "not associated".to_owned(),
                    };
                    ResourceRow::new(reference, &f.status, summary)
                })
                .collect(),
            ResourceKind::Volume => self
                .storage
                .list_volumes()
                .await?
                .into_iter()
                .map(|v| {
                    let reference = ResourceRef::new(kind, &v.id, &v.name);
                    ResourceRow::new(reference, &v.status, format!("{}GB", v.size_gb))
                })
                .collect(),
            ResourceKind::Router => self
                .network
                .list_routers()
                .await?
                .into_iter()
                .map(|r| {
                    let reference = ResourceRef::new(kind, &r.id, &r.name);
                    let summary = match &r.external_network_id {
                        Some(net) => format!("gateway {net}"),
                        None => "no gateway".to_owned(),
                    };
                    ResourceRow::new(reference, &r.status, summary)
                })
                .collect(),
            ResourceKind::SecurityGroup => self
                .network
                .list_security_groups()
                .await?
                .into_iter()
                .map(|g| {
                    let reference = ResourceRef::new(kind, &g.id, &g.name);
                    ResourceRow::new(reference, "", &g.description)
                })
                .collect(),
            ResourceKind::LoadBalancer => self
                .load_balancer
                .list_load_balancers()
                .await?
                .into_iter()
                .map(|lb| {
                    let reference = ResourceRef::new(kind, &lb.id, &lb.name);
                    ResourceRow::new(reference, &lb.provisioning_status, &lb.vip_address)
                })
                .collect(),
            ResourceKind::Image => self
                .image
                .list_images()
                .await?
                .into_iter()
                .map(|i| {
                    let reference = ResourceRef::new(kind, &i.id, &i.name);
                    let summary = format!("{}MB", i.size_bytes / (1024 * 1024));
                    ResourceRow::new(reference, &i.status, summary)
                })
                .collect(),
            ResourceKind::Flavor => self
                .compute
                .list_flavors()
                .await?
                .into_iter()
                .map(|f| {
                    let reference = ResourceRef::new(kind, &f.id, &f.name);
                    let summary =
                        format!("{} vCPU / {}MB / {}GB", f.vcpus, f.ram_mb, f.disk_gb);
                    ResourceRow::new(reference, "", summary)
                })
                .collect(),
            ResourceKind::Keypair => self
                .compute
                .list_keypairs()
                .await?
                .into_iter()
                .map(|k| {
                    let reference = ResourceRef::new(kind, &k.name, &k.name);
                    ResourceRow::new(reference, "", &k.fingerprint)
                })
                .collect(),
            ResourceKind::Hypervisor => self
                .compute
                .list_hypervisors()
                .await?
                .into_iter()
                .map(|h| {
                    let reference = ResourceRef::new(kind, &h.id, &h.hostname);
                    ResourceRow::new(reference, &h.state, format!("{} VMs", h.running_vms))
                })
                .collect(),
            ResourceKind::Project => self
                .identity
                .list_projects()
                .await?
                .into_iter()
                .map(|p| {
                    let reference = ResourceRef::new(kind, &p.id, &p.name);
                    ResourceRow::new(reference, "", &p.description)
                })
                .collect(),
            ResourceKind::User => self
                .identity
                .list_users()
                .await?
                .into_iter()
                .map(|u| {
                    let reference = ResourceRef::new(kind, &u.id, &u.name);
                    let status = if u.enabled { "enabled" } else { "disabled" };
                    ResourceRow::new(reference, status, "")
                })
                .collect(),
            ResourceKind::DnsZone => self
                .dns
                .list_zones()
                .await?
                .into_iter()
                .map(|z| {
                    let reference = ResourceRef::new(kind, &z.id, &z.name);
                    let summary = format!("{} record(s)", z.record_count);
                    ResourceRow::new(reference, &z.status, summary)
                })
                .collect(),
            other => {
                return Err(CoreError::fetch(
                    "list_rows",
                    format!("{other} has no list view"),
                ))
            }
        };
        Ok(rows)
    }

    /// Fetches the detail view for one resource.
    pub async fn fetch_detail(&self, reference: &ResourceRef) -> CoreResult<ResourceDetail> {
        let id = reference.id.as_str();
        match reference.kind {
            ResourceKind::Server => {
                let s = self.compute.get_server(id).await?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &s.id),
                        field("Name", &s.name),
                        field("Status", &s.status),
                        field("Flavor", &s.flavor_id),
                        field("Image", &s.image_id),
                    ],
                    &s,
                    Some(reference.clone()),
                ))
            }
            ResourceKind::Network => {
                let n = self.network.get_network(id).await?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &n.id),
                        field("Name", &n.name),
                        field("Status", &n.status),
                        field("Subnets", n.subnet_ids.join(", ")),
                    ],
                    &n,
                    Some(reference.clone()),
                ))
            }
            ResourceKind::Subnet => {
                let s = find(self.network.list_subnets().await?, reference, |s| &s.id)?;
                let parent = self.network.get_network(&s.network_id).await?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &s.id),
                        field("Name", &s.name),
                        field("CIDR", &s.cidr),
                        field("Network", &parent.name),
                    ],
                    &s,
                    Some(ResourceRef::new(
                        ResourceKind::Network,
                        &parent.id,
                        &parent.name,
                    )),
                ))
            }
            ResourceKind::Port => {
                let p = find(self.network.list_ports().await?, reference, |p| &p.id)?;
                let graph_ref = match &p.device_id {
                    Some(server_id) => {
                        let server = self.compute.get_server(server_id).await?;
                        Some(ResourceRef::new(
                            ResourceKind::Server,
                            &server.id,
                            &server.name,
                        ))
                    }
                    None => None,
                };
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &p.id),
                        field("MAC", &p.mac_address),
                        field("Network", &p.network_id),
                        field("Device", p.device_id.clone().unwrap_or_default()),
                        field("Fixed IP", p.primary_ip().unwrap_or_default()),
                    ],
                    &p,
                    graph_ref,
                ))
            }
            ResourceKind::FloatingIp => {
                let f = find(self.network.list_floating_ips().await?, reference, |f| {
                    &f.id
                })?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &f.id),
                        field("Address", &f.floating_ip),
                        field("Status", &f.status),
                        field("Port", f.port_id.clone().unwrap_or_default()),
                    ],
                    &f,
                    Some(reference.clone()),
                ))
            }
            ResourceKind::Volume => {
                let v = self.storage.get_volume(id).await?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &v.id),
                        field("Name", &v.name),
                        field("Status", &v.status),
                        field("Size", format!("{}GB", v.size_gb)),
                        field("Attachments", v.attachments.len().to_string()),
                    ],
                    &v,
                    Some(reference.clone()),
                ))
            }
            ResourceKind::Router => {
                let r = find(self.network.list_routers().await?, reference, |r| &r.id)?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &r.id),
                        field("Name", &r.name),
                        field("Status", &r.status),
                        field("Gateway", r.external_network_id.clone().unwrap_or_default()),
                    ],
                    &r,
                    None,
                ))
            }
            ResourceKind::SecurityGroup => {
                let g = find(self.network.list_security_groups().await?, reference, |g| {
                    &g.id
                })?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &g.id),
                        field("Name", &g.name),
                        field("Description", &g.description),
                    ],
                    &g,
                    None,
                ))
            }
            ResourceKind::LoadBalancer => {
                let lb = find(self.load_balancer.list_load_balancers().await?, reference, |l| {
                    &l.id
                })?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &lb.id),
                        field("Name", &lb.name),
                        field("Status", &lb.provisioning_status),
                        field("VIP", &lb.vip_address),
                    ],
                    &lb,
                    Some(reference.clone()),
                ))
            }
            ResourceKind::Image => {
                let i = find(self.image.list_images().await?, reference, |i| &i.id)?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &i.id),
                        field("Name", &i.name),
                        field("Status", &i.status),
                        field("Size", format!("{}MB", i.size_bytes / (1024 * 1024))),
                    ],
                    &i,
                    None,
                ))
            }
            ResourceKind::Flavor => {
                let f = find(self.compute.list_flavors().await?, reference, |f| &f.id)?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &f.id),
                        field("Name", &f.name),
                        field("vCPUs", f.vcpus.to_string()),
                        field("RAM", format!("{}MB", f.ram_mb)),
                        field("Disk", format!("{}GB", f.disk_gb)),
                    ],
                    &f,
                    None,
                ))
            }
            ResourceKind::Keypair => {
                let k = find(self.compute.list_keypairs().await?, reference, |k| &k.name)?;
                Ok(detail(
                    reference,
                    vec![
                        field("Name", &k.name),
                        field("Fingerprint", &k.fingerprint),
                    ],
                    &k,
                    None,
                ))
            }
            ResourceKind::Hypervisor => {
                let h = find(self.compute.list_hypervisors().await?, reference, |h| &h.id)?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &h.id),
                        field("Hostname", &h.hostname),
                        field("State", &h.state),
                        field("Running VMs", h.running_vms.to_string()),
                    ],
                    &h,
                    None,
                ))
            }
            ResourceKind::Project => {
                let p = find(self.identity.list_projects().await?, reference, |p| &p.id)?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &p.id),
                        field("Name", &p.name),
                        field("Description", &p.description),
                    ],
                    &p,
                    None,
                ))
            }
            ResourceKind::User => {
                let u = find(self.identity.list_users().await?, reference, |u| &u.id)?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &u.id),
                        field("Name", &u.name),
                        field("Enabled", u.enabled.to_string()),
                    ],
                    &u,
                    None,
                ))
            }
            ResourceKind::DnsZone => {
                let z = find(self.dns.list_zones().await?, reference, |z| &z.id)?;
                Ok(detail(
                    reference,
                    vec![
                        field("ID", &z.id),
                        field("Name", &z.name),
                        field("Status", &z.status),
                        field("Records", z.record_count.to_string()),
                    ],
                    &z,
                    None,
                ))
            }
            other => Err(CoreError::not_found(other, id)),
        }
    }
}

fn field(name: &str, value: impl Into<String>) -> (String, String) {
    (name.to_owned(), value.into())
}

fn detail<T: Serialize>(
    reference: &ResourceRef,
    fields: Vec<(String, String)>,
    record: &T,
    graph_ref: Option<ResourceRef>,
) -> ResourceDetail {
    ResourceDetail {
        reference: reference.clone(),
        fields,
        json: serde_json::to_string_pretty(record).unwrap_or_default(),
        graph_ref,
    }
}

fn find<T>(items: Vec<T>, reference: &ResourceRef, id: impl Fn(&T) -> &String) -> CoreResult<T> {
    items
        .into_iter()
        .find(|item| id(item) == &reference.id)
        .ok_or_else(|| CoreError::not_found(reference.kind, &reference.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_cloud_lists_every_sidebar_family() {
        let cloud = CloudService::demo("demo");
        for kind in [
            ResourceKind::Server,
            ResourceKind::Network,
            ResourceKind::Subnet,
            ResourceKind::Port,
            ResourceKind::FloatingIp,
            ResourceKind::Volume,
            ResourceKind::Router,
            ResourceKind::SecurityGroup,
            ResourceKind::LoadBalancer,
            ResourceKind::Image,
            ResourceKind::Flavor,
            ResourceKind::Keypair,
            ResourceKind::Hypervisor,
            ResourceKind::Project,
            ResourceKind::User,
            ResourceKind::DnsZone,
        ] {
            let rows = cloud.list_rows(kind).await.unwrap();
            assert!(!rows.is_empty(), "no rows for {kind}");
        }
    }

    #[tokio::test]
    async fn subnet_detail_graphs_its_parent_network() {
        let cloud = CloudService::demo("demo");
        let subnets = cloud.list_rows(ResourceKind::Subnet).await.unwrap();
        let d = cloud.fetch_detail(&subnets[0].reference).await.unwrap();

        let graph_ref = d.graph_ref.unwrap();
        assert_eq!(graph_ref.kind, ResourceKind::Network);
    }

    #[tokio::test]
    async fn detail_of_missing_resource_is_not_found() {
        let cloud = CloudService::demo("demo");
        let reference = ResourceRef::new(ResourceKind::Server, "srv-missing", "ghost");
        let err = cloud.fetch_detail(&reference).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn detail_carries_pretty_json() {
        let cloud = CloudService::demo("demo");
        let servers = cloud.list_rows(ResourceKind::Server).await.unwrap();
        let d = cloud.fetch_detail(&servers[0].reference).await.unwrap();
        assert!(d.json.contains("\"id\""));
        assert!(!d.fields.is_empty());
    }
}
