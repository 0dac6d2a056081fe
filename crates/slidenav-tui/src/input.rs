use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use slidenav_core::input::NavKey;

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,
    ToggleMenu,
    ToggleFade,
    TogglePointer,
    /// A navigation key delivered to the navigator as-is
    Nav(NavKey),
    /// Digit pressed while the menu is open
    MenuPick(usize),
    None,
}

impl Action {
    /// Navigator key for slide movement actions
    pub fn nav_key(&self) -> Option<NavKey> {
        match self {
            Action::NextSlide => Some(NavKey::PageDown),
            Action::PrevSlide => Some(NavKey::PageUp),
            Action::FirstSlide => Some(NavKey::Home),
            Action::LastSlide => Some(NavKey::End),
            Action::Nav(key) => Some(*key),
            _ => None,
        }
    }
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap, menu_open: bool) -> Action {
    if menu_open {
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            return Action::MenuPick(c as usize - '1' as usize);
        }
    }

    let binding = KeyBinding::new(key.code, normalize_modifiers(key));
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    match nav_key(key.code) {
        Some(nav) => Action::Nav(nav),
        None => Action::None,
    }
}

/// Fixed navigation keys, always available alongside the configured keymap
pub fn nav_key(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Up => Some(NavKey::ArrowUp),
        KeyCode::Down => Some(NavKey::ArrowDown),
        KeyCode::PageUp => Some(NavKey::PageUp),
        KeyCode::PageDown => Some(NavKey::PageDown),
        KeyCode::Char(' ') => Some(NavKey::Space),
        KeyCode::Home => Some(NavKey::Home),
        KeyCode::End => Some(NavKey::End),
        KeyCode::Esc => Some(NavKey::Escape),
        _ => None,
    }
}

/// Terminals report uppercase letters with or without SHIFT; bindings always carry it
fn normalize_modifiers(key: KeyEvent) -> KeyModifiers {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => key.modifiers | KeyModifiers::SHIFT,
        _ => key.modifiers,
    }
}
