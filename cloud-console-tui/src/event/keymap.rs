//! Key binding configuration
//!
//! Central place for the default bindings (user-defined maps could hook in
//! here later).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One key binding
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

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether a key event matches this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Content panel
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const SEARCH_CLEAR: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
    pub const EXPORT: KeyBinding = KeyBinding::alt(KeyCode::Char('x'));

    // Audit log selects
    pub const FILTER_KIND: KeyBinding = KeyBinding::key(KeyCode::Char('f'));
    pub const FILTER_SEVERITY: KeyBinding = KeyBinding::key(KeyCode::Char('s'));
}
