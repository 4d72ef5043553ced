//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only the code and modifiers take part in the lookup, so key repeat
    /// and keyboard-enhancement state flags do not hide a binding.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Vim-style scrolling
        keys.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);

        // Arrow key scrolling
        keys.bind(KeyCode::Up, none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, none, KeyAction::PageUp);

        // About tabs
        keys.bind(KeyCode::Char(']'), none, KeyAction::NextTab);
        keys.bind(KeyCode::Char('['), none, KeyAction::PrevTab);
        for n in 1..=9u8 {
            keys.bind(
                KeyCode::Char(char::from(b'0' + n)),
                none,
                KeyAction::SelectTab(usize::from(n)),
            );
        }

        // Snippet carousel
        keys.bind(KeyCode::Char('l'), none, KeyAction::NextSnippet);
        keys.bind(KeyCode::Char('h'), none, KeyAction::PrevSnippet);
        keys.bind(KeyCode::Right, none, KeyAction::NextSnippet);
        keys.bind(KeyCode::Left, none, KeyAction::PrevSnippet);
        keys.bind(KeyCode::Char('y'), none, KeyAction::CopySnippet);

        // Keyboard focus
        keys.bind(KeyCode::Tab, none, KeyAction::FocusNext);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::FocusPrev);
        keys.bind(KeyCode::Enter, none, KeyAction::Activate);
        keys.bind(KeyCode::Char(' '), none, KeyAction::Activate);

        // Application controls
        keys.bind(KeyCode::Esc, none, KeyAction::Close);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
