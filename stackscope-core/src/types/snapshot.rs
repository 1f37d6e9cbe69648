//! Point-in-time relationship aggregation
//!
//! A [`RelationshipSnapshot`] is built fresh for every graph or topology
//! request and never mutated afterwards. Staleness is bounded by
//! re-fetching, not by invalidation. The derived maps are each built by a
//! single linear scan over the flat lists, so indexing is O(n) in total
//! resource count and every later lookup is O(1)-ish (B-tree lookups keep
//! iteration order deterministic for rendering).

use std::collections::{BTreeMap, BTreeSet};

use super::{FloatingIp, Listener, Network, Pool, Port, Router, Server, Subnet, Volume};

/// Immutable cross-resource link aggregation.
#[derive(Debug, Clone, Default)]
pub struct RelationshipSnapshot {
    pub networks_by_id: BTreeMap<String, Network>,
    pub subnets_by_id: BTreeMap<String, Subnet>,
    pub servers_by_id: BTreeMap<String, Server>,

    /// Server ID -> ports attached to it.
    pub ports_by_server: BTreeMap<String, Vec<Port>>,
    /// Network ID -> server IDs reachable via ports on that network.
    pub ports_by_network: BTreeMap<String, BTreeSet<String>>,
    /// Port ID -> floating IPs bound to it.
    pub floating_ips_by_port: BTreeMap<String, Vec<FloatingIp>>,
    /// Server ID -> volumes attached to it.
    pub volumes_by_server: BTreeMap<String, Vec<Volume>>,
    /// External gateway network ID -> routers gated through it.
    pub routers_by_network: BTreeMap<String, Vec<Router>>,

    /// Load balancer ID -> its listeners / pools (neighborhood mode only).
    pub listeners_by_lb: BTreeMap<String, Vec<Listener>>,
    pub pools_by_lb: BTreeMap<String, Vec<Pool>>,

    // Flat lists kept for unattached-resource detection.
    pub floating_ips: Vec<FloatingIp>,
    pub volumes: Vec<Volume>,
}

impl RelationshipSnapshot {
    /// Builds the derived maps from flat fetch results.
    ///
    /// One pass per input list; no quadratic joins.
    pub fn index(
        servers: Vec<Server>,
        networks: Vec<Network>,
        subnets: Vec<Subnet>,
        ports: Vec<Port>,
        floating_ips: Vec<FloatingIp>,
        volumes: Vec<Volume>,
        routers: Vec<Router>,
    ) -> Self {
        let mut snapshot = Self {
            networks_by_id: networks.into_iter().map(|n| (n.id.clone(), n)).collect(),
            subnets_by_id: subnets.into_iter().map(|s| (s.id.clone(), s)).collect(),
            servers_by_id: servers.into_iter().map(|s| (s.id.clone(), s)).collect(),
            ..Self::default()
        };

        for port in ports {
            if let Some(server_id) = port.device_id.clone() {
                snapshot
                    .ports_by_network
                    .entry(port.network_id.clone())
                    .or_default()
                    .insert(server_id.clone());
                snapshot
                    .ports_by_server
                    .entry(server_id)
                    .or_default()
                    .push(port);
            }
        }

        for fip in &floating_ips {
            if let Some(port_id) = fip.port_id.clone() {
                snapshot
                    .floating_ips_by_port
                    .entry(port_id)
                    .or_default()
                    .push(fip.clone());
            }
        }

        for volume in &volumes {
            for attachment in &volume.attachments {
                snapshot
                    .volumes_by_server
                    .entry(attachment.server_id.clone())
                    .or_default()
                    .push(volume.clone());
            }
        }

        for router in routers {
            if let Some(network_id) = router.external_network_id.clone() {
                snapshot
                    .routers_by_network
                    .entry(network_id)
                    .or_default()
                    .push(router);
            }
        }

        snapshot.floating_ips = floating_ips;
        snapshot.volumes = volumes;
        snapshot
    }

    /// Floating IPs not bound to any port.
    pub fn unattached_floating_ips(&self) -> impl Iterator<Item = &FloatingIp> {
        self.floating_ips.iter().filter(|f| f.port_id.is_none())
    }

    /// Volumes with no attachments.
    pub fn unattached_volumes(&self) -> impl Iterator<Item = &Volume> {
        self.volumes.iter().filter(|v| v.attachments.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FixedIp, VolumeAttachment};

    fn port(id: &str, network: &str, device: Option<&str>, ip: &str) -> Port {
        Port {
            id: id.into(),
            mac_address: "fa:16:3e:00:00:01".into(),
            network_id: network.into(),
            device_id: device.map(Into::into),
            fixed_ips: vec![FixedIp {
                ip_address: ip.into(),
                subnet_id: "sub-1".into(),
            }],
        }
    }

    #[test]
    fn index_builds_derived_maps() {
        let servers = vec![Server {
            id: "srv-1".into(),
            name: "web1".into(),
            status: "ACTIVE".into(),
            ..Server::default()
        }];
        let ports = vec![
            port("port-1", "net-1", Some("srv-1"), "10.0.1.10"),
            port("port-2", "net-1", None, "10.0.1.2"),
        ];
        let fips = vec![FloatingIp {
            id: "fip-1".into(),
            floating_ip: "203.0.113.5".into(),
            status: "ACTIVE".into(),
            port_id: Some("port-1".into()),
        }];
        let volumes = vec![Volume {
            id: "vol-1".into(),
            name: "data".into(),
            status: "in-use".into(),
            size_gb: 20,
            attachments: vec![VolumeAttachment {
                volume_id: "vol-1".into(),
                server_id: "srv-1".into(),
                device: "/dev/vdb".into(),
            }],
        }];
        let routers = vec![Router {
            id: "rt-1".into(),
            name: "edge".into(),
            status: "ACTIVE".into(),
            external_network_id: Some("net-1".into()),
        }];

        let snapshot = RelationshipSnapshot::index(
            servers,
            Vec::new(),
            Vec::new(),
            ports,
            fips,
            volumes,
            routers,
        );

        assert_eq!(snapshot.ports_by_server["srv-1"].len(), 1);
        assert!(snapshot.ports_by_network["net-1"].contains("srv-1"));
        assert_eq!(
            snapshot.floating_ips_by_port["port-1"][0].floating_ip,
            "203.0.113.5"
        );
        assert_eq!(snapshot.volumes_by_server["srv-1"][0].id, "vol-1");
        assert_eq!(snapshot.routers_by_network["net-1"][0].name, "edge");
        // The dangling port has no device, so it indexes nowhere.
        assert!(!snapshot.ports_by_server.contains_key("port-2"));
    }

    #[test]
    fn unattached_resources_are_detected() {
        let fips = vec![
            FloatingIp {
                id: "fip-1".into(),
                floating_ip: "203.0.113.5".into(),
                status: "DOWN".into(),
                port_id: None,
            },
            FloatingIp {
                id: "fip-2".into(),
                floating_ip: "203.0.113.6".into(),
                status: "ACTIVE".into(),
                port_id: Some("port-1".into()),
            },
        ];
        let volumes = vec![Volume {
            id: "vol-1".into(),
            name: "scratch".into(),
            status: "available".into(),
            size_gb: 5,
            attachments: Vec::new(),
        }];

        let snapshot = RelationshipSnapshot::index(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            fips,
            volumes,
            Vec::new(),
        );

        let unattached: Vec<_> = snapshot.unattached_floating_ips().collect();
        assert_eq!(unattached.len(), 1);
        assert_eq!(unattached[0].id, "fip-1");
        assert_eq!(snapshot.unattached_volumes().count(), 1);
    }
}
