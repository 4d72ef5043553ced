//! Tests for KeyAction enum and KeyBindings.

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn get(kb: &KeyBindings, code: KeyCode, mods: KeyModifiers) -> Option<KeyAction> {
    kb.get(KeyEvent::new(code, mods))
}

/// Test that default bindings include vim-style navigation.
#[test]
fn test_default_bindings_vim_style() {
    let kb = KeyBindings::default();
    let none = KeyModifiers::NONE;

    assert_eq!(get(&kb, KeyCode::Char('j'), none), Some(KeyAction::ScrollDown));
    assert_eq!(get(&kb, KeyCode::Char('k'), none), Some(KeyAction::ScrollUp));
    assert_eq!(get(&kb, KeyCode::Char('g'), none), Some(KeyAction::ScrollToTop));
    assert_eq!(
        get(&kb, KeyCode::Char('G'), KeyModifiers::SHIFT),
        Some(KeyAction::ScrollToBottom)
    );
}

/// Test that default bindings include page navigation.
#[test]
fn test_default_bindings_page_navigation() {
    let kb = KeyBindings::default();

    assert_eq!(
        get(&kb, KeyCode::Char('d'), KeyModifiers::CONTROL),
        Some(KeyAction::PageDown)
    );
    assert_eq!(
        get(&kb, KeyCode::Char('u'), KeyModifiers::CONTROL),
        Some(KeyAction::PageUp)
    );
    assert_eq!(
        get(&kb, KeyCode::PageDown, KeyModifiers::NONE),
        Some(KeyAction::PageDown)
    );
    assert_eq!(get(&kb, KeyCode::Home, KeyModifiers::NONE), Some(KeyAction::ScrollToTop));
    assert_eq!(get(&kb, KeyCode::End, KeyModifiers::NONE), Some(KeyAction::ScrollToBottom));
}

/// Arrows scroll vertically and page through snippets horizontally.
#[test]
fn test_default_bindings_arrow_keys() {
    let kb = KeyBindings::default();
    let none = KeyModifiers::NONE;

    assert_eq!(get(&kb, KeyCode::Up, none), Some(KeyAction::ScrollUp));
    assert_eq!(get(&kb, KeyCode::Down, none), Some(KeyAction::ScrollDown));
    assert_eq!(get(&kb, KeyCode::Left, none), Some(KeyAction::PrevSnippet));
    assert_eq!(get(&kb, KeyCode::Right, none), Some(KeyAction::NextSnippet));
}

/// Test that default bindings include tab navigation.
#[test]
fn test_default_bindings_tab_navigation() {
    let kb = KeyBindings::default();
    let none = KeyModifiers::NONE;

    assert_eq!(get(&kb, KeyCode::Char(']'), none), Some(KeyAction::NextTab));
    assert_eq!(get(&kb, KeyCode::Char('['), none), Some(KeyAction::PrevTab));
    assert_eq!(get(&kb, KeyCode::Char('1'), none), Some(KeyAction::SelectTab(1)));
    assert_eq!(get(&kb, KeyCode::Char('9'), none), Some(KeyAction::SelectTab(9)));
    assert_eq!(get(&kb, KeyCode::Char('0'), none), None);
}

/// Tab walks focus; Enter and Space activate; Esc closes.
#[test]
fn test_default_bindings_focus_and_activation() {
    let kb = KeyBindings::default();
    let none = KeyModifiers::NONE;

    assert_eq!(get(&kb, KeyCode::Tab, none), Some(KeyAction::FocusNext));
    assert_eq!(
        get(&kb, KeyCode::BackTab, KeyModifiers::SHIFT),
        Some(KeyAction::FocusPrev)
    );
    assert_eq!(get(&kb, KeyCode::Enter, none), Some(KeyAction::Activate));
    assert_eq!(get(&kb, KeyCode::Char(' '), none), Some(KeyAction::Activate));
    assert_eq!(get(&kb, KeyCode::Esc, none), Some(KeyAction::Close));
}

/// Test that quit is reachable two ways.
#[test]
fn test_default_bindings_quit() {
    let kb = KeyBindings::default();

    assert_eq!(get(&kb, KeyCode::Char('q'), KeyModifiers::NONE), Some(KeyAction::Quit));
    assert_eq!(
        get(&kb, KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(KeyAction::Quit)
    );
    assert_eq!(get(&kb, KeyCode::Char('c'), KeyModifiers::NONE), None);
}
