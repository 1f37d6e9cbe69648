//! Key binding configuration
//!
//! Central place for the global bindings (could become user
//! configurable later).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Checks whether a key event matches this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));

    // Views
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const COMMAND: KeyBinding = KeyBinding::key(KeyCode::Char(':'));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const GRAPH: KeyBinding = KeyBinding::key(KeyCode::Char('g'));
    pub const TOPOLOGY: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const CLOUDS: KeyBinding = KeyBinding::key(KeyCode::Char('c'));

    // Navigation
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
