//! Application main state

use stackscope_core::types::{ResourceKind, ResourceRef};

use crate::backend::Backend;
use crate::pages::ChildView;

use super::{CloudSelectState, CommandState, Mode, SidebarState};

/// Where a back navigation should land, with enough context to rebuild
/// the view with a fresh fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavFrame {
    Sidebar,
    List(ResourceKind),
    Detail(ResourceRef),
    Graph(ResourceRef),
    Topology,
    Search,
}

/// Application main state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Current interaction mode
    pub mode: Mode,

    /// Mode an open overlay will return to
    pub overlay_return: Option<Mode>,

    /// The frame the content view was built from
    pub location: NavFrame,

    /// Back navigation history
    pub history: Vec<NavFrame>,

    /// Sidebar state
    pub sidebar: SidebarState,

    /// Command-line state
    pub command: CommandState,

    /// Cloud selector state
    pub cloud_select: CloudSelectState,

    /// The active content view, if any
    pub child: Option<Box<dyn ChildView>>,

    /// Resource family of the current list view
    pub current_kind: Option<ResourceKind>,

    /// Focal resource of the current graph view
    pub focal: Option<ResourceRef>,

    /// Status bar message
    pub status_message: Option<String>,

    /// Async dispatch and cloud access
    pub backend: Backend,
}

impl App {
    /// Creates a new application instance
    pub fn new(backend: Backend) -> Self {
        let clouds = backend.clouds.clone();
        Self {
            should_quit: false,
            mode: Mode::Sidebar,
            overlay_return: None,
            location: NavFrame::Sidebar,
            history: Vec::new(),
            sidebar: SidebarState::new(),
            command: CommandState::new(),
            cloud_select: CloudSelectState::new(clouds),
            child: None,
            current_kind: None,
            focal: None,
            status_message: None,
            backend,
        }
    }

    /// Sets the status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clears the status bar message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
