//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key binding
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

    /// Whether the key event triggers this binding
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
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));

    // History
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const BACK_ALT: KeyBinding = KeyBinding::alt(KeyCode::Left);
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
    pub const FORWARD: KeyBinding = KeyBinding::alt(KeyCode::Right);

    // List
    pub const UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const UP_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const DOWN_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // Error fallback
    pub const TRY_AGAIN: KeyBinding = KeyBinding::key(KeyCode::Char('t'));

    pub fn is_quit(key: &KeyEvent) -> bool {
        Self::QUIT.matches(key) || Self::FORCE_QUIT.matches(key)
    }

    pub fn is_back(key: &KeyEvent) -> bool {
        Self::BACK.matches(key) || Self::BACK_ALT.matches(key) || Self::BACKSPACE.matches(key)
    }

    pub fn is_up(key: &KeyEvent) -> bool {
        Self::UP.matches(key) || Self::UP_VIM.matches(key)
    }

    pub fn is_down(key: &KeyEvent) -> bool {
        Self::DOWN.matches(key) || Self::DOWN_VIM.matches(key)
    }
}
