//! Domain-level keyboard actions independent of key bindings.

/// Actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Page scrolling
    /// Scroll the page up one line. Default: k/↑
    ScrollUp,
    /// Scroll the page down one line. Default: j/↓
    ScrollDown,
    /// Scroll up one viewport. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down one viewport. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the page. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the page. Default: G/End
    ScrollToBottom,

    // About tabs
    /// Next about tab, wrapping. Default: ]
    NextTab,
    /// Previous about tab, wrapping. Default: [
    PrevTab,
    /// Select about tab by number. Field: tab index (1-9)
    SelectTab(usize),

    // Snippet carousel
    /// Next code snippet, wrapping. Default: l/→
    NextSnippet,
    /// Previous code snippet, wrapping. Default: h/←
    PrevSnippet,
    /// Copy the code snippet on show to the clipboard. Default: y
    CopySnippet,

    // Keyboard focus over cards and projects
    /// Focus the next card or project. Default: Tab
    FocusNext,
    /// Focus the previous card or project. Default: Shift+Tab
    FocusPrev,
    /// Activate the focused item: follow a card link or open a project. Default: Enter/Space
    Activate,

    // Application
    /// Close the open modal, or clear focus. Default: Esc
    Close,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
