//! Content views
//!
//! Exactly one content view is alive at a time; the update layer swaps
//! it when navigation changes. Views declare what they can do through
//! this trait instead of the update layer matching on concrete types.

mod detail;
mod graph;
mod list;
mod search;
mod shell;
mod topology;

pub use detail::DetailModel;
pub use graph::GraphModel;
pub use list::ListModel;
pub use search::SearchModel;
pub use shell::ShellModel;
pub use topology::TopologyModel;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use stackscope_core::types::ResourceRef;

use crate::backend::Backend;
use crate::message::{LoadPayload, RequestId};

/// Something a view asks the update layer to do.
pub enum ChildOutcome {
    OpenDetail(ResourceRef),
    Status(String),
}

/// The active content view.
pub trait ChildView {
    /// Starts (or restarts) the view's fetch. Called on entry and on
    /// refresh.
    fn init(&mut self, backend: &Backend);

    /// Handles a key the global handler did not claim.
    fn handle_key(&mut self, key: KeyEvent, backend: &Backend) -> Option<ChildOutcome>;

    /// Receives a completed fetch. Only called when the request ID
    /// matched [`pending_request`](Self::pending_request).
    fn on_load(&mut self, payload: LoadPayload);

    /// The fetch this view is waiting for, if any.
    fn pending_request(&self) -> Option<RequestId>;

    fn draw(&self, frame: &mut Frame, area: Rect);

    /// What a graph request from here should focus on. `None` means
    /// the graph key does nothing in this view.
    fn graph_focal(&self) -> Option<ResourceRef> {
        None
    }
}
