//! Message layer
//!
//! Everything that can change the model is expressed as one of these
//! enums. The event layer produces them from input; the backend layer
//! produces [`AppMessage::Loaded`] from finished fetches; the update
//! layer consumes them.

use crossterm::event::KeyEvent;

use stackscope_core::{CoreResult, RelationshipSnapshot};
use stackscope_core::types::SearchHit;

use crate::backend::{ResourceDetail, ResourceRow};

/// Identifies one dispatched background fetch.
///
/// Monotonically increasing; a completion whose ID no longer matches
/// the view's pending fetch is stale and gets dropped.
pub type RequestId = u64;

/// Result of a finished background fetch.
pub enum LoadPayload {
    Rows(CoreResult<Vec<ResourceRow>>),
    Detail(CoreResult<ResourceDetail>),
    Graph(CoreResult<RelationshipSnapshot>),
    Topology(CoreResult<RelationshipSnapshot>),
    Search(CoreResult<Vec<SearchHit>>),
    Shell(Result<String, String>),
}

/// Top-level application message
pub enum AppMessage {
    Quit,
    ShowHelp,
    OpenCommand,
    OpenCloudSelect,
    EnterTopology,
    EnterSearch,
    GoBack,
    ToggleGraph,
    Refresh,
    Sidebar(SidebarMessage),
    Command(CommandMessage),
    CloudSelect(CloudSelectMessage),
    /// Key forwarded to the active content view.
    Child(KeyEvent),
    /// A background fetch finished.
    Loaded {
        request: RequestId,
        payload: LoadPayload,
    },
    Noop,
}

/// Sidebar navigation messages
pub enum SidebarMessage {
    Up,
    Down,
    Select,
}

/// Command-line input messages
pub enum CommandMessage {
    Input(char),
    Backspace,
    Complete,
    Submit,
    Cancel,
}

/// Cloud selector messages
pub enum CloudSelectMessage {
    Up,
    Down,
    Select,
    Cancel,
}
