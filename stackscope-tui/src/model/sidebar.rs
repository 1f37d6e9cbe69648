//! Sidebar navigation state

use stackscope_core::types::ResourceKind;

/// One line in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    /// Non-selectable section header.
    Section(&'static str),
    Kind(ResourceKind),
    Topology,
    Quit,
}

pub struct SidebarState {
    pub entries: Vec<SidebarEntry>,
    pub selected: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        use ResourceKind::*;
        let entries = vec![
            SidebarEntry::Section("Compute"),
            SidebarEntry::Kind(Server),
            SidebarEntry::Kind(Flavor),
            SidebarEntry::Kind(Keypair),
            SidebarEntry::Kind(Hypervisor),
            SidebarEntry::Section("Network"),
            SidebarEntry::Kind(Network),
            SidebarEntry::Kind(Subnet),
            SidebarEntry::Kind(Port),
            SidebarEntry::Kind(FloatingIp),
            SidebarEntry::Kind(Router),
            SidebarEntry::Kind(SecurityGroup),
            SidebarEntry::Section("Storage"),
            SidebarEntry::Kind(Volume),
            SidebarEntry::Section("Load Balancer"),
            SidebarEntry::Kind(LoadBalancer),
            SidebarEntry::Section("Images"),
            SidebarEntry::Kind(Image),
            SidebarEntry::Section("Identity"),
            SidebarEntry::Kind(Project),
            SidebarEntry::Kind(User),
            SidebarEntry::Section("DNS"),
            SidebarEntry::Kind(DnsZone),
            SidebarEntry::Section("Views"),
            SidebarEntry::Topology,
            SidebarEntry::Quit,
        ];
        // First selectable entry
        let selected = entries
            .iter()
            .position(|e| !matches!(e, SidebarEntry::Section(_)))
            .unwrap_or(0);
        Self { entries, selected }
    }

    pub fn current(&self) -> SidebarEntry {
        self.entries[self.selected]
    }

    /// Moves the selection down, skipping section headers.
    pub fn select_next(&mut self) {
        let mut i = self.selected;
        loop {
            if i + 1 >= self.entries.len() {
                return;
            }
            i += 1;
            if !matches!(self.entries[i], SidebarEntry::Section(_)) {
                self.selected = i;
                return;
            }
        }
    }

    /// Moves the selection up, skipping section headers.
    pub fn select_prev(&mut self) {
        let mut i = self.selected;
        while i > 0 {
            i -= 1;
            if !matches!(self.entries[i], SidebarEntry::Section(_)) {
                self.selected = i;
                return;
            }
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_skips_section_headers() {
        let mut sidebar = SidebarState::new();
        assert!(matches!(sidebar.current(), SidebarEntry::Kind(_)));

        // Walk down past the Compute section into Network.
        for _ in 0..4 {
            sidebar.select_next();
        }
        assert_eq!(sidebar.current(), SidebarEntry::Kind(ResourceKind::Network));

        sidebar.select_prev();
        assert_eq!(
            sidebar.current(),
            SidebarEntry::Kind(ResourceKind::Hypervisor)
        );
    }

    #[test]
    fn selection_clamps_at_the_ends() {
        let mut sidebar = SidebarState::new();
        sidebar.select_prev();
        assert_eq!(sidebar.current(), SidebarEntry::Kind(ResourceKind::Server));

        for _ in 0..100 {
            sidebar.select_next();
        }
        assert_eq!(sidebar.current(), SidebarEntry::Quit);
    }
}
