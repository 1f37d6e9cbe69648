//! Whole-cloud topology tree
//!
//! Renders every network as a tree rooted at its header line, with the
//! servers and routers on it, their ports, bound floating IPs and
//! attached volumes nested below. Resources that hang off nothing are
//! collected into a trailing section so they are never silently lost.

use crate::types::{Port, RelationshipSnapshot, Server, Volume};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Renders the full topology of a snapshot as plain text.
///
/// Every tree level is sorted by display name, ties broken by ID, so
/// the same snapshot always renders the same bytes.
pub fn render_topology(snapshot: &RelationshipSnapshot) -> String {
    let mut blocks: Vec<String> = Vec::new();

    let mut networks: Vec<_> = snapshot.networks_by_id.values().collect();
    networks.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));

    for network in networks {
        let cidr = network
            .subnet_ids
            .first()
            .and_then(|id| snapshot.subnets_by_id.get(id))
            .map(|s| s.cidr.as_str())
            .unwrap_or_default();

        let mut lines = vec![format!("Network: {} ({cidr})", network.name)];

        let mut servers: Vec<&Server> = snapshot
            .ports_by_network
            .get(&network.id)
            .into_iter()
            .flatten()
            .filter_map(|id| snapshot.servers_by_id.get(id))
            .collect();
        servers.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));

        let mut routers: Vec<_> = snapshot
            .routers_by_network
            .get(&network.id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .to_vec();
        routers.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));

        let entries = servers.len() + routers.len();
        for (i, server) in servers.iter().enumerate() {
            let last = i + 1 == entries;
            lines.push(format!(
                "{}Server: {} [{}]",
                connector(last),
                server.name,
                server.status
            ));
            push_server_children(&mut lines, snapshot, server, &network.id, indent(last));
        }
        for (i, router) in routers.iter().enumerate() {
            let last = servers.len() + i + 1 == entries;
            lines.push(format!("{}Router: {}", connector(last), router.name));
        }

        blocks.push(lines.join("\n"));
    }

    let unattached = unattached_block(snapshot);
    if !unattached.is_empty() {
        blocks.push(unattached);
    }

    let mut out = blocks.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Ports (with bound floating IPs) and volumes nested under a server.
fn push_server_children(
    lines: &mut Vec<String>,
    snapshot: &RelationshipSnapshot,
    server: &Server,
    network_id: &str,
    prefix: &str,
) {
    let mut ports: Vec<&Port> = snapshot
        .ports_by_server
        .get(&server.id)
        .into_iter()
        .flatten()
        .filter(|p| p.network_id == network_id)
        .collect();
    ports.sort_by(|a, b| (a.primary_ip(), &a.id).cmp(&(b.primary_ip(), &b.id)));

    let mut volumes: Vec<&Volume> = snapshot
        .volumes_by_server
        .get(&server.id)
        .into_iter()
        .flatten()
        .collect();
    volumes.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));

    let entries = ports.len() + volumes.len();
    for (i, port) in ports.iter().enumerate() {
        let last = i + 1 == entries;
        lines.push(format!(
            "{prefix}{}Port: {}",
            connector(last),
            port.primary_ip().unwrap_or_default()
        ));

        let mut fips: Vec<_> = snapshot
            .floating_ips_by_port
            .get(&port.id)
            .into_iter()
            .flatten()
            .collect();
        fips.sort_by(|a, b| (&a.floating_ip, &a.id).cmp(&(&b.floating_ip, &b.id)));
        for (j, fip) in fips.iter().enumerate() {
            lines.push(format!(
                "{prefix}{}{}FIP: {}",
                indent(last),
                connector(j + 1 == fips.len()),
                fip.floating_ip
            ));
        }
    }
    for (i, volume) in volumes.iter().enumerate() {
        let last = ports.len() + i + 1 == entries;
        lines.push(format!(
            "{prefix}{}Vol: {} {}GB",
            connector(last),
            volume.device().filter(|d| !d.is_empty()).unwrap_or(&volume.name),
            volume.size_gb
        ));
    }
}

/// Floating IPs bound to nothing and volumes attached to nothing.
fn unattached_block(snapshot: &RelationshipSnapshot) -> String {
    let mut fips: Vec<_> = snapshot.unattached_floating_ips().collect();
    fips.sort_by(|a, b| (&a.floating_ip, &a.id).cmp(&(&b.floating_ip, &b.id)));
    let mut volumes: Vec<_> = snapshot.unattached_volumes().collect();
    volumes.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));

    let entries = fips.len() + volumes.len();
    if entries == 0 {
        return String::new();
    }

    let mut lines = vec!["Unattached resources:".to_owned()];
    for (i, fip) in fips.iter().enumerate() {
        lines.push(format!(
            "{}FIP: {} (not associated)",
            connector(i + 1 == entries),
            fip.floating_ip
        ));
    }
    for (i, volume) in volumes.iter().enumerate() {
        lines.push(format!(
            "{}Vol: {} {}GB (available)",
            connector(fips.len() + i + 1 == entries),
            volume.name,
            volume.size_gb
        ));
    }
    lines.join("\n")
}

fn connector(last: bool) -> &'static str {
    if last {
        LAST_BRANCH
    } else {
        BRANCH
    }
}

fn indent(last: bool) -> &'static str {
    if last {
        BLANK
    } else {
        PIPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{floating_ip, network, port, sample_cloud, server, subnet};
    use crate::types::Volume;

    fn sample_snapshot() -> RelationshipSnapshot {
        let cloud = sample_cloud();
        RelationshipSnapshot::index(
            cloud.servers,
            cloud.networks,
            cloud.subnets,
            cloud.ports,
            cloud.floating_ips,
            cloud.volumes,
            cloud.routers,
        )
    }

    #[test]
    fn sample_cloud_renders_exact_tree() {
        let expected = "\
Network: external (203.0.113.0/24)
└── Router: edge

Network: internal (10.0.1.0/24)
├── Server: db1 [SHUTOFF]
│   └── Port: 10.0.1.11
└── Server: web1 [ACTIVE]
    ├── Port: 10.0.1.10
    │   └── FIP: 203.0.113.5
    └── Vol: /dev/vdb 20GB
";
        assert_eq!(render_topology(&sample_snapshot()), expected);
    }

    #[test]
    fn identical_snapshot_renders_identical_bytes() {
        let snapshot = sample_snapshot();
        assert_eq!(render_topology(&snapshot), render_topology(&snapshot));
    }

    #[test]
    fn networks_sort_by_name_with_one_server_each() {
        let snapshot = RelationshipSnapshot::index(
            vec![
                server("srv-1", "alpha", "ACTIVE"),
                server("srv-2", "beta", "ACTIVE"),
            ],
            vec![
                network("net-1", "zeta", &["sub-1"]),
                network("net-2", "apex", &["sub-2"]),
            ],
            vec![
                subnet("sub-1", "zeta-v4", "10.0.1.0/24", "net-1"),
                subnet("sub-2", "apex-v4", "10.0.2.0/24", "net-2"),
            ],
            vec![
                port("port-1", "net-1", Some("srv-1"), "10.0.1.10"),
                port("port-2", "net-2", Some("srv-2"), "10.0.2.10"),
            ],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        let out = render_topology(&snapshot);
        let apex = out.find("Network: apex").unwrap();
        let zeta = out.find("Network: zeta").unwrap();
        assert!(apex < zeta);
        assert!(out.contains("└── Server: alpha [ACTIVE]"));
        assert!(out.contains("└── Server: beta [ACTIVE]"));
        assert!(!out.contains("Unattached"));
    }

    #[test]
    fn unattached_resources_get_their_own_section() {
        let snapshot = RelationshipSnapshot::index(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![floating_ip("fip-1", "203.0.113.9", None)],
            vec![Volume {
                id: "vol-1".into(),
                name: "scratch".into(),
                status: "available".into(),
                size_gb: 5,
                attachments: Vec::new(),
            }],
            Vec::new(),
        );

        let out = render_topology(&snapshot);
        assert!(out.contains("Unattached resources:"));
        assert!(out.contains("├── FIP: 203.0.113.9 (not associated)"));
        assert!(out.contains("└── Vol: scratch 5GB (available)"));
    }

    #[test]
    fn network_without_subnet_renders_empty_cidr() {
        let snapshot = RelationshipSnapshot::index(
            Vec::new(),
            vec![network("net-1", "flat", &[])],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        assert!(render_topology(&snapshot).contains("Network: flat ()"));
    }

    #[test]
    fn empty_snapshot_renders_nothing() {
        assert_eq!(render_topology(&RelationshipSnapshot::default()), "");
    }
}
