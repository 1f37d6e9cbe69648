//! Neighborhood graph layout
//!
//! Lays the focal resource out as a horizontal row of boxed columns,
//! one column per related-resource category. Falls back to vertical
//! stacking when the row would not fit the viewport. Output is plain
//! text; identical snapshot and width always yield identical bytes.

use std::fmt::Write as _;

use super::boxes::{join_horizontal, stack_vertical, TextBlock};
use crate::types::{RelationshipSnapshot, ResourceKind, ResourceRef};

/// Maximum boxes per category column; overflow collapses into a counter.
pub const COLUMN_CAP: usize = 8;

const CONNECTOR: &str = " ── ";

/// Semantic tag a front end may map to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Center,
    Port,
    Network,
    Subnet,
    FloatingIp,
    Volume,
    Server,
    Listener,
    Pool,
    Overflow,
}

/// One box in the laid-out graph.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub lines: Vec<String>,
    pub style: StyleTag,
}

impl GraphNode {
    fn new(style: StyleTag, lines: Vec<String>) -> Self {
        Self { lines, style }
    }
}

/// Renders the neighborhood of `focal` into plain text sized for
/// `viewport_width` columns.
pub fn render_neighborhood(
    snapshot: &RelationshipSnapshot,
    focal: &ResourceRef,
    viewport_width: u16,
) -> String {
    let center = GraphNode::new(
        StyleTag::Center,
        vec![focal.kind.label().to_owned(), focal.name.clone()],
    );
    let (above, columns) = categorize(snapshot, focal);

    let center_block = boxed(&center);
    let column_blocks: Vec<TextBlock> = columns
        .iter()
        .map(|nodes| stack_vertical(&nodes.iter().map(boxed).collect::<Vec<_>>()))
        .collect();

    let row_width = center_block.width
        + column_blocks.iter().map(|b| b.width + 4).sum::<usize>();

    let main = if row_width <= usize::from(viewport_width) {
        let mut blocks = vec![center_block];
        blocks.extend(column_blocks);
        join_horizontal(&blocks, CONNECTOR)
    } else {
        // Too narrow for a row; stack the center and each column with a
        // blank line between them.
        let mut lines = center_block.lines.clone();
        for block in &column_blocks {
            lines.push(String::new());
            lines.extend(block.lines.iter().cloned());
        }
        TextBlock::from_lines(lines)
    };

    let mut out = String::new();
    if !above.is_empty() {
        let volumes = join_horizontal(&above.iter().map(boxed).collect::<Vec<_>>(), "  ");
        let _ = writeln!(out, "{}", volumes.render());
        out.push_str("  │\n");
    }
    out.push_str(&main.render());
    out
}

fn boxed(node: &GraphNode) -> TextBlock {
    TextBlock::boxed(&node.lines)
}

/// Builds the category columns for the focal resource.
///
/// Returns the boxes rendered above the main row (volume attachments)
/// and the left-to-right columns. Empty categories are omitted.
fn categorize(
    snapshot: &RelationshipSnapshot,
    focal: &ResourceRef,
) -> (Vec<GraphNode>, Vec<Vec<GraphNode>>) {
    let mut above = Vec::new();
    let mut columns = Vec::new();

    match focal.kind {
        ResourceKind::Server => {
            let mut volumes: Vec<_> = snapshot
                .volumes_by_server
                .get(&focal.id)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .to_vec();
            volumes.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
            above = volumes
                .iter()
                .map(|v| {
                    let label = v
                        .device()
                        .filter(|d| !d.is_empty())
                        .unwrap_or(&v.name)
                        .to_owned();
                    GraphNode::new(StyleTag::Volume, vec!["Volume".to_owned(), label])
                })
                .collect();

            let mut ports: Vec<_> = snapshot
                .ports_by_server
                .get(&focal.id)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .to_vec();
            ports.sort_by(|a, b| {
                (a.primary_ip(), &a.id).cmp(&(b.primary_ip(), &b.id))
            });
            push_column(
                &mut columns,
                ports
                    .iter()
                    .map(|p| {
                        GraphNode::new(
                            StyleTag::Port,
                            vec![
                                "Port".to_owned(),
                                p.primary_ip().unwrap_or_default().to_owned(),
                            ],
                        )
                    })
                    .collect(),
            );

            let mut networks: Vec<_> = snapshot.networks_by_id.values().collect();
            networks.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
            push_column(
                &mut columns,
                networks
                    .iter()
                    .map(|n| {
                        GraphNode::new(
                            StyleTag::Network,
                            vec!["Network".to_owned(), n.name.clone()],
                        )
                    })
                    .collect(),
            );

            let mut fips = Vec::new();
            for port in &ports {
                if let Some(bound) = snapshot.floating_ips_by_port.get(&port.id) {
                    fips.extend(bound.iter());
                }
            }
            fips.sort_by(|a, b| (&a.floating_ip, &a.id).cmp(&(&b.floating_ip, &b.id)));
            push_column(
                &mut columns,
                fips.iter()
                    .map(|f| {
                        GraphNode::new(
                            StyleTag::FloatingIp,
                            vec!["Floating IP".to_owned(), f.floating_ip.clone()],
                        )
                    })
                    .collect(),
            );
        }
        ResourceKind::Network => {
            let mut subnets: Vec<_> = snapshot
                .subnets_by_id
                .values()
                .filter(|s| s.network_id == focal.id)
                .collect();
            subnets.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
            push_column(
                &mut columns,
                subnets
                    .iter()
                    .map(|s| {
                        GraphNode::new(
                            StyleTag::Subnet,
                            vec!["Subnet".to_owned(), s.cidr.clone()],
                        )
                    })
                    .collect(),
            );

            let mut ports: Vec<_> = snapshot
                .ports_by_server
                .values()
                .flatten()
                .filter(|p| p.network_id == focal.id)
                .collect();
            ports.sort_by(|a, b| (&a.mac_address, &a.id).cmp(&(&b.mac_address, &b.id)));
            push_column(
                &mut columns,
                ports
                    .iter()
                    .map(|p| {
                        GraphNode::new(
                            StyleTag::Port,
                            vec!["Port".to_owned(), p.mac_address.clone()],
                        )
                    })
                    .collect(),
            );

            let mut servers: Vec<_> = snapshot
                .ports_by_network
                .get(&focal.id)
                .into_iter()
                .flatten()
                .filter_map(|id| snapshot.servers_by_id.get(id))
                .collect();
            servers.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
            push_column(
                &mut columns,
                servers
                    .iter()
                    .map(|s| {
                        GraphNode::new(
                            StyleTag::Server,
                            vec!["Server".to_owned(), s.name.clone()],
                        )
                    })
                    .collect(),
            );
        }
        ResourceKind::Volume => {
            let mut servers: Vec<_> = snapshot.servers_by_id.values().collect();
            servers.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
            push_column(
                &mut columns,
                servers
                    .iter()
                    .map(|s| {
                        GraphNode::new(
                            StyleTag::Server,
                            vec!["Server".to_owned(), s.name.clone()],
                        )
                    })
                    .collect(),
            );
        }
        ResourceKind::LoadBalancer => {
            let mut listeners: Vec<_> = snapshot
                .listeners_by_lb
                .get(&focal.id)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .to_vec();
            listeners.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
            push_column(
                &mut columns,
                listeners
                    .iter()
                    .map(|l| {
                        GraphNode::new(
                            StyleTag::Listener,
                            vec![
                                "Listener".to_owned(),
                                format!("{}:{}", l.protocol, l.protocol_port),
                            ],
                        )
                    })
                    .collect(),
            );

            let mut pools: Vec<_> = snapshot
                .pools_by_lb
                .get(&focal.id)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .to_vec();
            pools.sort_by(|a, b| (&a.name, &a.id).cmp(&(&b.name, &b.id)));
            push_column(
                &mut columns,
                pools
                    .iter()
                    .map(|p| {
                        GraphNode::new(StyleTag::Pool, vec!["Pool".to_owned(), p.name.clone()])
                    })
                    .collect(),
            );
        }
        // Floating IPs are terminal; anything else never reaches the
        // renderer because the aggregator rejects it first.
        _ => {}
    }

    (above, columns)
}

/// Appends a column unless empty, collapsing overflow past the cap.
fn push_column(columns: &mut Vec<Vec<GraphNode>>, mut nodes: Vec<GraphNode>) {
    if nodes.is_empty() {
        return;
    }
    if nodes.len() > COLUMN_CAP {
        let hidden = nodes.len() - (COLUMN_CAP - 1);
        nodes.truncate(COLUMN_CAP - 1);
        nodes.push(GraphNode::new(
            StyleTag::Overflow,
            vec![format!("+{hidden} more")],
        ));
    }
    columns.push(nodes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{attached_volume, floating_ip, network, port, sample_cloud, server};
    use crate::types::{Port, RelationshipSnapshot};

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

    fn web1() -> ResourceRef {
        ResourceRef::new(ResourceKind::Server, "srv-1", "web1")
    }

    #[test]
    fn server_neighborhood_shows_all_categories() {
        let out = render_neighborhood(&sample_snapshot(), &web1(), 200);
        assert!(out.contains("web1"));
        assert!(out.contains("10.0.1.10"));
        assert!(out.contains("203.0.113.5"));
        assert!(out.contains("/dev/vdb"));
        assert!(out.contains(CONNECTOR.trim()));
    }

    #[test]
    fn volumes_render_above_the_main_row() {
        let out = render_neighborhood(&sample_snapshot(), &web1(), 200);
        let volume_line = out.lines().position(|l| l.contains("/dev/vdb"));
        let center_line = out.lines().position(|l| l.contains("web1"));
        assert!(volume_line < center_line);
    }

    #[test]
    fn identical_input_renders_identical_bytes() {
        let snapshot = sample_snapshot();
        let a = render_neighborhood(&snapshot, &web1(), 120);
        let b = render_neighborhood(&snapshot, &web1(), 120);
        assert_eq!(a, b);
    }

    #[test]
    fn narrow_viewport_stacks_vertically() {
        let snapshot = sample_snapshot();
        let out = render_neighborhood(&snapshot, &web1(), 30);
        assert!(!out.contains(" ── "));
        let server_line = out.lines().position(|l| l.contains("web1"));
        let port_line = out.lines().position(|l| l.contains("10.0.1.10"));
        assert!(server_line < port_line);
    }

    #[test]
    fn overflowing_column_collapses_into_counter() {
        let mut ports: Vec<Port> = Vec::new();
        for i in 0..12 {
            ports.push(port(
                &format!("port-{i:02}"),
                "net-1",
                Some("srv-1"),
                &format!("10.0.1.{}", 10 + i),
            ));
        }
        let snapshot = RelationshipSnapshot::index(
            vec![server("srv-1", "web1", "ACTIVE")],
            vec![network("net-1", "internal", &[])],
            Vec::new(),
            ports,
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        let out = render_neighborhood(&snapshot, &web1(), 400);
        assert!(out.contains("+5 more"));
        let rendered_ips = (0..12)
            .filter(|i| out.contains(&format!("10.0.1.{}", 10 + i)))
            .count();
        assert_eq!(rendered_ips, 7);
    }

    #[test]
    fn floating_ip_focal_is_terminal() {
        let snapshot = sample_snapshot();
        let focal = ResourceRef::new(ResourceKind::FloatingIp, "fip-1", "203.0.113.5");
        let out = render_neighborhood(&snapshot, &focal, 120);
        assert!(out.contains("Floating IP"));
        assert!(!out.contains(" ── "));
    }

    #[test]
    fn empty_categories_are_omitted() {
        let snapshot = RelationshipSnapshot::index(
            vec![server("srv-1", "web1", "ACTIVE")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let out = render_neighborhood(&snapshot, &web1(), 120);
        assert!(!out.contains("Volume"));
        assert!(!out.contains("Port"));
    }

    #[test]
    fn unbound_floating_ips_stay_out_of_server_graphs() {
        let cloud = sample_cloud();
        let mut fips = cloud.floating_ips;
        fips.push(floating_ip("fip-9", "203.0.113.99", None));
        let snapshot = RelationshipSnapshot::index(
            cloud.servers,
            cloud.networks,
            cloud.subnets,
            cloud.ports,
            fips,
            cloud.volumes,
            cloud.routers,
        );
        let out = render_neighborhood(&snapshot, &web1(), 200);
        assert!(out.contains("203.0.113.5"));
        assert!(!out.contains("203.0.113.99"));
    }

    #[test]
    fn volume_label_falls_back_to_name_without_device() {
        let mut volume = attached_volume("vol-1", "scratch", "srv-1", "");
        volume.attachments[0].device = String::new();
        let snapshot = RelationshipSnapshot::index(
            vec![server("srv-1", "web1", "ACTIVE")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![volume],
            Vec::new(),
        );
        let out = render_neighborhood(&snapshot, &web1(), 200);
        assert!(out.contains("scratch"));
    }
}
