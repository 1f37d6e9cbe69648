//! Model layer
//!
//! All application state. Mutated only by the update layer.

mod app;
mod cloud_select;
mod command;
mod mode;
mod sidebar;

pub use app::{App, NavFrame};
pub use cloud_select::CloudSelectState;
pub use command::{CommandAction, CommandState, CommandTarget};
pub use mode::Mode;
pub use sidebar::{SidebarEntry, SidebarState};
