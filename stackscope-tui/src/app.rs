//! Application main loop
//!
//! Roughly one iteration per 100ms (sooner when input arrives):
//! draw, drain completed background fetches, poll input, update.
//! Background work never touches the model directly; it comes back as
//! [`AppMessage::Loaded`] through the channel.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Runs the application main loop
pub fn run(terminal: &mut Term, app: &mut App, completions: &Receiver<AppMessage>) -> Result<()> {
    loop {
        // 1. Render the UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Check whether we should quit
        if app.should_quit {
            break;
        }

        // 3. Drain completed background fetches
        while let Ok(msg) = completions.try_recv() {
            update::update(app, msg);
        }

        // 4. Poll input (100ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. Translate the event into a message
            let msg = event::handle_event(event, app);

            // 6. Update the state
            update::update(app, msg);
        }
    }

    Ok(())
}
