//! Interaction modes

/// What the client is currently doing. Exactly one mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Focus on the left navigation sidebar.
    Sidebar,
    /// Browsing a resource list.
    List,
    /// Viewing one resource's details.
    Detail,
    /// Neighborhood graph of one resource.
    Graph,
    /// Whole-cloud topology tree.
    Topology,
    /// Live cross-service search.
    Search,
    /// Command-line overlay (`:`).
    Command,
    /// Key binding help overlay.
    Help,
    /// Output of a shell passthrough command.
    Shell,
    /// Cloud profile selector overlay.
    CloudSelect,
}

impl Mode {
    /// Overlays keep the underlying content view alive; closing one
    /// returns to it without a refetch.
    pub fn is_overlay(self) -> bool {
        matches!(self, Self::Command | Self::Help | Self::CloudSelect)
    }

    /// Modes that consume plain character input, where `q` must type a
    /// letter instead of quitting.
    pub fn captures_text(self) -> bool {
        matches!(self, Self::Command | Self::Search | Self::Shell)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Sidebar => "Overview",
            Self::List => "Resources",
            Self::Detail => "Detail",
            Self::Graph => "Graph",
            Self::Topology => "Topology",
            Self::Search => "Search",
            Self::Command => "Command",
            Self::Help => "Help",
            Self::Shell => "Shell",
            Self::CloudSelect => "Clouds",
        }
    }
}
