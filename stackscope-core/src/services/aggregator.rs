//! Relationship aggregation service
//!
//! Fans read calls out across the providers and joins them into one
//! [`RelationshipSnapshot`]. Independent fetches run concurrently through
//! `try_join!`; fetches that need a prior result (resolving a network
//! record after learning a port's network ID) run after their dependency.
//! Nothing is published until every branch has completed, and any failed
//! branch fails the whole call; no partial graphs.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::try_join;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ComputeProvider, LoadBalancerProvider, NetworkProvider, StorageProvider};
use crate::types::{
    FixedIp, Network, Port, RelationshipSnapshot, ResourceKind, ResourceRef, SearchHit, Server,
    Volume,
};

/// Builds relationship snapshots for graph, topology and search requests.
#[derive(Clone)]
pub struct RelationshipAggregator {
    compute: Arc<dyn ComputeProvider>,
    network: Arc<dyn NetworkProvider>,
    storage: Arc<dyn StorageProvider>,
    load_balancer: Arc<dyn LoadBalancerProvider>,
}

impl RelationshipAggregator {
    pub fn new(
        compute: Arc<dyn ComputeProvider>,
        network: Arc<dyn NetworkProvider>,
        storage: Arc<dyn StorageProvider>,
        load_balancer: Arc<dyn LoadBalancerProvider>,
    ) -> Self {
        Self {
            compute,
            network,
            storage,
            load_balancer,
        }
    }

    /// Builds a snapshot of the entire visible topology.
    ///
    /// Seven independent list calls joined before anything is derived.
    pub async fn build_full_topology(&self) -> CoreResult<RelationshipSnapshot> {
        let (servers, networks, subnets, ports, floating_ips, volumes, routers) = try_join!(
            self.compute.list_servers(),
            self.network.list_networks(),
            self.network.list_subnets(),
            self.network.list_ports(),
            self.network.list_floating_ips(),
            self.storage.list_volumes(),
            self.network.list_routers(),
        )?;

        Ok(RelationshipSnapshot::index(
            servers,
            networks,
            subnets,
            ports,
            floating_ips,
            volumes,
            routers,
        ))
    }

    /// Builds a snapshot of one focal resource's immediate neighborhood.
    ///
    /// Only the sub-fetches relevant to `focal.kind` are dispatched.
    pub async fn build_neighborhood(
        &self,
        focal: &ResourceRef,
    ) -> CoreResult<RelationshipSnapshot> {
        match focal.kind {
            ResourceKind::Server => self.server_neighborhood(&focal.id).await,
            ResourceKind::Network => self.network_neighborhood(&focal.id).await,
            ResourceKind::Volume => self.volume_neighborhood(&focal.id).await,
            // A floating IP is a terminal node: no further fan-out.
            ResourceKind::FloatingIp => Ok(RelationshipSnapshot::default()),
            ResourceKind::LoadBalancer => self.load_balancer_neighborhood(&focal.id).await,
            kind => Err(CoreError::GraphUnsupported(kind)),
        }
    }

    async fn server_neighborhood(&self, server_id: &str) -> CoreResult<RelationshipSnapshot> {
        let (server, interfaces, attachments, floating_ips) = try_join!(
            self.compute.get_server(server_id),
            self.compute.list_server_interfaces(server_id),
            self.compute.list_server_volumes(server_id),
            self.network.list_floating_ips(),
        )?;

        // Dependent lookups: each interface's network, each attachment's volume.
        let mut networks: BTreeMap<String, Network> = BTreeMap::new();
        let mut ports = Vec::with_capacity(interfaces.len());
        for iface in &interfaces {
            if !networks.contains_key(&iface.network_id) {
                let net = self.network.get_network(&iface.network_id).await?;
                networks.insert(net.id.clone(), net);
            }
            ports.push(Port {
                id: iface.port_id.clone(),
                mac_address: String::new(),
                network_id: iface.network_id.clone(),
                device_id: Some(server_id.to_owned()),
                fixed_ips: iface
                    .fixed_ips
                    .iter()
                    .map(|ip| FixedIp {
                        ip_address: ip.clone(),
                        subnet_id: String::new(),
                    })
                    .collect(),
            });
        }

        let mut volumes = Vec::with_capacity(attachments.len());
        for attachment in &attachments {
            volumes.push(self.storage.get_volume(&attachment.volume_id).await?);
        }

        // Keep only floating IPs bound to this server's ports.
        let bound: Vec<_> = floating_ips
            .into_iter()
            .filter(|fip| {
                fip.port_id
                    .as_ref()
                    .is_some_and(|pid| ports.iter().any(|p| &p.id == pid))
            })
            .collect();

        Ok(RelationshipSnapshot::index(
            vec![server],
            networks.into_values().collect(),
            Vec::new(),
            ports,
            bound,
            volumes,
            Vec::new(),
        ))
    }

    async fn network_neighborhood(&self, network_id: &str) -> CoreResult<RelationshipSnapshot> {
        let (network, ports, servers, subnets) = try_join!(
            self.network.get_network(network_id),
            self.network.list_ports_by_network(network_id),
            self.compute.list_servers(),
            self.network.list_subnets(),
        )?;

        let own_subnets: Vec<_> = subnets
            .into_iter()
            .filter(|s| s.network_id == network_id)
            .collect();

        Ok(RelationshipSnapshot::index(
            servers,
            vec![network],
            own_subnets,
            ports,
            Vec::new(),
            Vec::new(),
            Vec::new(),
        ))
    }

    async fn volume_neighborhood(&self, volume_id: &str) -> CoreResult<RelationshipSnapshot> {
        let volume = self.storage.get_volume(volume_id).await?;

        // Dependent lookups: resolve each attached server.
        let mut servers: Vec<Server> = Vec::with_capacity(volume.attachments.len());
        for attachment in &volume.attachments {
            servers.push(self.compute.get_server(&attachment.server_id).await?);
        }

        Ok(RelationshipSnapshot::index(
            servers,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![volume],
            Vec::new(),
        ))
    }

    async fn load_balancer_neighborhood(&self, lb_id: &str) -> CoreResult<RelationshipSnapshot> {
        let (listeners, pools) = try_join!(
            self.load_balancer.list_listeners(lb_id),
            self.load_balancer.list_pools(lb_id),
        )?;

        let mut snapshot = RelationshipSnapshot::default();
        snapshot.listeners_by_lb.insert(lb_id.to_owned(), listeners);
        snapshot.pools_by_lb.insert(lb_id.to_owned(), pools);
        Ok(snapshot)
    }

    /// Live search across servers, networks, subnets, volumes, floating IPs
    /// and routers. Matches on name and ID, case-insensitive; results are
    /// sorted by kind label then name. Any failed branch fails the search.
    pub async fn search(&self, query: &str) -> CoreResult<Vec<SearchHit>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let (servers, networks, subnets, volumes, floating_ips, routers) = try_join!(
            self.compute.list_servers(),
            self.network.list_networks(),
            self.network.list_subnets(),
            self.storage.list_volumes(),
            self.network.list_floating_ips(),
            self.network.list_routers(),
        )?;

        let matches = |name: &str, id: &str| {
            name.to_lowercase().contains(&query) || id.to_lowercase().contains(&query)
        };

        let mut hits: Vec<SearchHit> = Vec::new();
        for s in &servers {
            if matches(&s.name, &s.id) {
                hits.push(hit(ResourceKind::Server, &s.id, &s.name, &s.status));
            }
        }
        for n in &networks {
            if matches(&n.name, &n.id) {
                hits.push(hit(ResourceKind::Network, &n.id, &n.name, &n.status));
            }
        }
        for s in &subnets {
            if matches(&s.name, &s.id) || s.cidr.contains(&query) {
                hits.push(hit(ResourceKind::Subnet, &s.id, &s.name, &s.cidr));
            }
        }
        for v in &volumes {
            if matches(&v.name, &v.id) {
                let extra = format!("{}GB {}", v.size_gb, v.status);
                hits.push(hit(ResourceKind::Volume, &v.id, &v.name, &extra));
            }
        }
        for f in &floating_ips {
            if matches(&f.floating_ip, &f.id) {
                hits.push(hit(ResourceKind::FloatingIp, &f.id, &f.floating_ip, &f.status));
            }
        }
        for r in &routers {
            if matches(&r.name, &r.id) {
                hits.push(hit(ResourceKind::Router, &r.id, &r.name, &r.status));
            }
        }

        hits.sort_by(|a, b| {
            (a.kind.label(), a.name.as_str(), a.id.as_str())
                .cmp(&(b.kind.label(), b.name.as_str(), b.id.as_str()))
        });
        Ok(hits)
    }
}

fn hit(kind: ResourceKind, id: &str, name: &str, extra: &str) -> SearchHit {
    SearchHit {
        kind,
        id: id.into(),
        name: name.into(),
        extra: extra.into(),
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;
    use crate::test_utils::{sample_cloud, MockCloud};

    fn aggregator(cloud: MockCloud) -> RelationshipAggregator {
        let cloud = Arc::new(cloud);
        RelationshipAggregator::new(cloud.clone(), cloud.clone(), cloud.clone(), cloud)
    }

    #[tokio::test]
    async fn full_topology_indexes_every_relationship() {
        let agg = aggregator(sample_cloud());
        let snapshot = agg.build_full_topology().await.unwrap();

        assert_eq!(snapshot.servers_by_id.len(), 2);
        assert_eq!(snapshot.networks_by_id.len(), 2);
        assert!(snapshot.ports_by_network["net-1"].contains("srv-1"));
        assert_eq!(snapshot.floating_ips_by_port["port-1"].len(), 1);
        assert_eq!(snapshot.volumes_by_server["srv-1"][0].name, "web1-data");
        assert_eq!(snapshot.routers_by_network["net-2"][0].name, "edge");
    }

    #[tokio::test]
    async fn full_topology_fails_when_any_branch_fails() {
        let cloud = sample_cloud();
        cloud.fail_on("list_volumes", "storage unavailable").await;
        let agg = aggregator(cloud);

        let err = agg.build_full_topology().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Fetch {
                operation: "list_volumes",
                ..
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn full_topology_waits_for_slowest_branch() {
        let cloud = sample_cloud();
        cloud
            .delay_on("list_routers", Duration::from_millis(500))
            .await;
        let agg = aggregator(cloud);

        let fut = agg.build_full_topology();
        tokio::pin!(fut);

        // Six branches are done almost immediately, but no result may be
        // published before the delayed seventh completes.
        assert!(timeout(Duration::from_millis(100), fut.as_mut())
            .await
            .is_err());
        let snapshot = fut.await.unwrap();
        assert_eq!(snapshot.servers_by_id.len(), 2);
    }

    #[tokio::test]
    async fn server_neighborhood_collects_ports_volumes_and_bound_fips() {
        let agg = aggregator(sample_cloud());
        let focal = ResourceRef::new(ResourceKind::Server, "srv-1", "web1");
        let snapshot = agg.build_neighborhood(&focal).await.unwrap();

        assert_eq!(snapshot.ports_by_server["srv-1"].len(), 1);
        assert_eq!(
            snapshot.ports_by_server["srv-1"][0].primary_ip(),
            Some("10.0.1.10")
        );
        assert_eq!(snapshot.networks_by_id["net-1"].name, "internal");
        assert_eq!(
            snapshot.floating_ips_by_port["port-1"][0].floating_ip,
            "203.0.113.5"
        );
        assert_eq!(snapshot.volumes_by_server["srv-1"][0].device(), Some("/dev/vdb"));
        // db1's floating state is not part of web1's neighborhood.
        assert!(!snapshot.ports_by_server.contains_key("srv-2"));
    }

    #[tokio::test]
    async fn neighborhood_fails_when_a_dependent_fetch_fails() {
        let cloud = sample_cloud();
        cloud.fail_on("get_network", "neutron down").await;
        let agg = aggregator(cloud);
        let focal = ResourceRef::new(ResourceKind::Server, "srv-1", "web1");

        assert!(agg.build_neighborhood(&focal).await.is_err());
    }

    #[tokio::test]
    async fn neighborhood_of_missing_focal_is_not_found() {
        let agg = aggregator(sample_cloud());
        let focal = ResourceRef::new(ResourceKind::Volume, "vol-gone", "ghost");

        let err = agg.build_neighborhood(&focal).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn neighborhood_of_unsupported_kind_is_rejected() {
        let agg = aggregator(sample_cloud());
        let focal = ResourceRef::new(ResourceKind::Keypair, "kp-1", "ops");

        let err = agg.build_neighborhood(&focal).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::GraphUnsupported(ResourceKind::Keypair)
        ));
    }

    #[tokio::test]
    async fn floating_ip_neighborhood_is_terminal() {
        let agg = aggregator(sample_cloud());
        let focal = ResourceRef::new(ResourceKind::FloatingIp, "fip-1", "203.0.113.5");
        let snapshot = agg.build_neighborhood(&focal).await.unwrap();

        assert!(snapshot.servers_by_id.is_empty());
        assert!(snapshot.ports_by_server.is_empty());
    }

    #[tokio::test]
    async fn search_groups_and_sorts_hits() {
        let agg = aggregator(sample_cloud());
        let hits = agg.search("1").await.unwrap();

        // Sorted by kind label, then name.
        let kinds: Vec<_> = hits.iter().map(|h| h.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| k.label());
        assert_eq!(kinds, sorted);
        assert!(hits.iter().any(|h| h.name == "web1"));
        assert!(hits.iter().any(|h| h.name == "db1"));
    }

    #[tokio::test]
    async fn search_fails_when_any_branch_fails() {
        let cloud = sample_cloud();
        cloud.fail_on("list_routers", "neutron down").await;
        let agg = aggregator(cloud);

        assert!(agg.search("web").await.is_err());
    }

    #[tokio::test]
    async fn blank_search_returns_nothing_without_fetching() {
        let cloud = sample_cloud();
        cloud.fail_on("list_servers", "should not be called").await;
        let agg = aggregator(cloud);

        assert!(agg.search("   ").await.unwrap().is_empty());
    }
}
