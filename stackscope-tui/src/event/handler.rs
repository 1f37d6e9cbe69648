//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, CloudSelectMessage, CommandMessage, SidebarMessage};
use crate::model::{App, Mode};

/// Polls for an event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handles an event, returning the corresponding message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Terminal resize redraws automatically on the next tick.
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// Handles a key event
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only Press events; Release/Repeat would double keys on Windows
    // terminals.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C quits everywhere, even while typing.
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // q is terminal from every view that is not capturing typed input.
    if !app.mode.captures_text() && DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match app.mode {
        Mode::Command => handle_command_keys(key),
        Mode::CloudSelect => handle_cloud_select_keys(key),
        Mode::Help => handle_help_keys(key),
        Mode::Search | Mode::Shell => handle_text_view_keys(key),
        Mode::Sidebar => handle_sidebar_keys(key),
        Mode::List | Mode::Detail | Mode::Graph | Mode::Topology => handle_content_keys(key),
    }
}

fn handle_command_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Command(CommandMessage::Cancel),
        KeyCode::Enter => AppMessage::Command(CommandMessage::Submit),
        KeyCode::Tab => AppMessage::Command(CommandMessage::Complete),
        KeyCode::Backspace => AppMessage::Command(CommandMessage::Backspace),
        KeyCode::Char(c) => AppMessage::Command(CommandMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}

fn handle_cloud_select_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::CloudSelect(CloudSelectMessage::Cancel),
        KeyCode::Up | KeyCode::Char('k') => AppMessage::CloudSelect(CloudSelectMessage::Up),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::CloudSelect(CloudSelectMessage::Down),
        KeyCode::Enter => AppMessage::CloudSelect(CloudSelectMessage::Select),
        _ => AppMessage::Noop,
    }
}

fn handle_help_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') => AppMessage::GoBack,
        _ => AppMessage::Noop,
    }
}

/// Search and shell capture plain characters, so only the non-text
/// globals apply.
fn handle_text_view_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    AppMessage::Child(key)
}

fn handle_sidebar_keys(key: KeyEvent) -> AppMessage {
    if let Some(msg) = handle_global_keys(&key) {
        return msg;
    }
    if DefaultKeymap::NAV_UP.matches(&key) || key.code == KeyCode::Char('k') {
        return AppMessage::Sidebar(SidebarMessage::Up);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) || key.code == KeyCode::Char('j') {
        return AppMessage::Sidebar(SidebarMessage::Down);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Sidebar(SidebarMessage::Select);
    }
    AppMessage::Noop
}

fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if let Some(msg) = handle_global_keys(&key) {
        return msg;
    }
    AppMessage::Child(key)
}

/// Globals shared by the sidebar and the content views.
fn handle_global_keys(key: &KeyEvent) -> Option<AppMessage> {
    if DefaultKeymap::BACK.matches(key) {
        return Some(AppMessage::GoBack);
    }
    if DefaultKeymap::HELP.matches(key) {
        return Some(AppMessage::ShowHelp);
    }
    if DefaultKeymap::COMMAND.matches(key) {
        return Some(AppMessage::OpenCommand);
    }
    if DefaultKeymap::SEARCH.matches(key) {
        return Some(AppMessage::EnterSearch);
    }
    if DefaultKeymap::GRAPH.matches(key) {
        return Some(AppMessage::ToggleGraph);
    }
    if DefaultKeymap::TOPOLOGY.matches(key) {
        return Some(AppMessage::EnterTopology);
    }
    if DefaultKeymap::CLOUDS.matches(key) {
        return Some(AppMessage::OpenCloudSelect);
    }
    if DefaultKeymap::REFRESH.matches(key) {
        return Some(AppMessage::Refresh);
    }
    None
}
