//! Drives a whole `TuiApp` over a `TestBackend` for acceptance tests.
//!
//! Tests speak in user terms (keys, clicks, hovering a card, waiting) and
//! read back either `AppState` or the rendered screen.
//!
//! The harness owns a virtual clock. Nothing advances unless a test calls
//! [`AcceptanceTestHarness::advance`], so animations are deterministic.

use crate::config::ResolvedConfig;
use crate::model::Portfolio;
use crate::state::AppState;
use crate::timing::FRAME_INTERVAL;
use crate::view::constants::PROGRESS_BAR_HEIGHT;
use crate::view::{ClipboardSink, ColorConfig, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::path::Path;
use std::time::Duration;

/// Screen text, one line per non-blank row, trailing spaces trimmed.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    now: Duration,
    running: bool,
}

#[allow(dead_code)] // Not every test file uses every helper
impl AcceptanceTestHarness {
    /// Bundled portfolio with default terminal size (80x24), no colors
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    /// Bundled portfolio at a custom terminal size
    pub fn with_size(width: u16, height: u16) -> Self {
        let portfolio = Portfolio::builtin().expect("bundled portfolio should parse");
        Self::with_portfolio(portfolio, &ResolvedConfig::default(), width, height)
    }

    /// Load a content document into the test app
    ///
    /// # Returns
    /// * `Ok(Self)` - Initialized harness with content loaded
    /// * `Err(TuiError)` - If the document cannot be read or parsed
    pub fn from_content(path: &Path, width: u16, height: u16) -> Result<Self, TuiError> {
        let portfolio = Portfolio::from_path(path).map_err(crate::model::AppError::from)?;
        Ok(Self::with_portfolio(
            portfolio,
            &ResolvedConfig::default(),
            width,
            height,
        ))
    }

    /// Arbitrary portfolio and config
    pub fn with_portfolio(
        portfolio: Portfolio,
        config: &ResolvedConfig,
        width: u16,
        height: u16,
    ) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("TestBackend never fails");
        // Monochrome keeps snapshots independent of the palette
        let colors = ColorConfig::forced(false);
        let app = TuiApp::new_for_test(terminal, portfolio, config, colors);

        Self {
            app,
            now: Duration::ZERO,
            running: true,
        }
    }

    /// Send copies to `clipboard` instead of the system clipboard
    pub fn use_clipboard(&mut self, clipboard: impl ClipboardSink + 'static) {
        self.app.set_clipboard_test(Box::new(clipboard));
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Let `ms` milliseconds pass, ticking once per frame like the event loop
    pub fn advance(&mut self, ms: u64) {
        let end = self.now + Duration::from_millis(ms);
        while self.now < end {
            self.now = (self.now + FRAME_INTERVAL).min(end);
            self.app.tick_test(self.now);
        }
    }

    /// Send single key press
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let key_event = KeyEvent::new(key, mods);
        let quit = self.app.handle_key_test(key_event, self.now);

        if quit {
            self.running = false;
        }

        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break; // Quit encountered
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't crash/quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test(self.now)
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }

    /// Send a left click at screen coordinates
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return; // Already quit
        }

        // Render first so the modal area is known
        let _ = self.app.render_test(self.now);
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Move the pointer to screen coordinates
    pub fn move_to(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::Moved, column, row);
    }

    /// Scroll the mouse wheel by `notches`, positive for down
    pub fn scroll(&mut self, notches: i32) {
        let kind = if notches >= 0 {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        for _ in 0..notches.unsigned_abs() {
            self.mouse(kind, 0, 1);
        }
    }

    /// Screen cell showing page cell `(x, y)`, if it is scrolled into view
    pub fn page_to_screen(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        let page = self.state().page();
        let row = y.checked_sub(page.offset())?;
        (row < page.viewport_height()).then_some((x, row + PROGRESS_BAR_HEIGHT))
    }

    /// Click the middle of a page element
    ///
    /// # Panics
    /// Panics if the element is not on screen
    pub fn click_page_rect(&mut self, rect: Rect) {
        let (column, row) = self.visible_center(rect);
        self.click_at(column, row);
    }

    /// Move the pointer to the middle of a page element
    ///
    /// # Panics
    /// Panics if the element is not on screen
    pub fn hover_page_rect(&mut self, rect: Rect) {
        let (column, row) = self.visible_center(rect);
        self.move_to(column, row);
    }

    fn visible_center(&self, rect: Rect) -> (u16, u16) {
        let x = rect.x + rect.width / 2;
        let y = rect.y + rect.height / 2;
        self.page_to_screen(x, y)
            .unwrap_or_else(|| panic!("page cell ({x}, {y}) is not on screen"))
    }

    /// Resize the terminal
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_resize_test(width, height);
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(event, self.now);
    }
}

impl Default for AcceptanceTestHarness {
    fn default() -> Self {
        Self::new()
    }
}
