//! stackscope
//!
//! Terminal client for exploring the resources of a cloud deployment.
//!
//! ## Architecture
//!
//! Follows the Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: cloud access and async dispatch (`backend/`)
//! - **Pages**: the interchangeable content views (`pages/`)
//!
//! The main loop is synchronous; every cloud fetch runs on a tokio
//! runtime in the background and comes back as a message through a
//! channel the loop drains once per tick.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod pages;
mod update;
mod util;
mod view;

use std::sync::mpsc;

use anyhow::Result;

use backend::{discover_clouds, Backend, CloudService, Dispatcher};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Initialize the terminal
    let mut terminal = init_terminal()?;

    // 2. Build the async backend
    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, rx) = mpsc::channel();
    let dispatcher = Dispatcher::new(runtime.handle().clone(), tx);
    let clouds = discover_clouds();
    let initial = clouds.first().map(String::as_str).unwrap_or("demo");
    let backend = Backend::new(dispatcher, CloudService::demo(initial), clouds.clone());

    // 3. Create the application instance
    let mut app = model::App::new(backend);

    // 4. Run the main loop
    let result = app::run(&mut terminal, &mut app, &rx);

    // 5. Restore the terminal (on success and on failure)
    restore_terminal(&mut terminal)?;

    // 6. Return the result
    result
}
