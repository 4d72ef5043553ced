//! TUI rendering and terminal management (impure shell)

pub mod card;
pub mod carousel;
pub mod clipboard;
pub mod constants;
pub mod glow;
pub mod hero;
pub mod highlighter;
pub mod layout;
pub mod marquee;
pub mod modal;
pub mod page;
pub mod styles;
pub mod tabs;

pub use clipboard::{ClipboardError, ClipboardSink, SystemClipboard};
pub use highlighter::SyntaxHighlighter;
pub use styles::{ColorConfig, Palette};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction, Portfolio};
use crate::state::{detect_modal_click, screen_to_page, screen_to_viewport, AppState};
use crate::timing::FRAME_INTERVAL;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Lines scrolled per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend. Every handler
/// takes the current time explicitly; only [`TuiApp::run`] reads the clock.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    palette: Palette,
    highlighter: SyntaxHighlighter,
    started: Instant,
    /// Last rendered page area (for pointer and click mapping)
    last_page_area: Option<Rect>,
    /// Last rendered full-size modal box (for backdrop click detection)
    last_modal_area: Option<Rect>,
    clipboard: Box<dyn ClipboardSink>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(
        portfolio: Portfolio,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            portfolio,
            config,
            colors,
            Duration::ZERO,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Input is handled as it
    /// arrives; animation ticks and redraws happen at most once per frame
    /// interval, and only when something changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut dirty = true;
        let mut next_frame = Duration::ZERO;

        loop {
            let now = self.now();
            if now >= next_frame {
                dirty |= self.app_state.tick(now);
                next_frame = now + FRAME_INTERVAL;
                if dirty {
                    self.draw(now)?;
                    dirty = false;
                }
            }

            let timeout = next_frame.saturating_sub(self.now());
            if !event::poll(timeout)? {
                continue;
            }

            let now = self.now();
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key, now) {
                        return Ok(()); // User quit
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse, now),
                Event::Resize(width, height) => self.handle_resize(width, height),
                Event::FocusLost => self.handle_focus_lost(now),
                _ => continue,
            }
            dirty = true;
        }
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        portfolio: Portfolio,
        config: &ResolvedConfig,
        colors: ColorConfig,
        now: Duration,
    ) -> Self {
        let palette = Palette::new(config.theme, colors);
        let highlighter = if palette.is_monochrome() {
            SyntaxHighlighter::plain()
        } else {
            SyntaxHighlighter::new(config.theme)
        };

        let mut app = Self {
            app_state: AppState::new(portfolio, config, now),
            terminal,
            key_bindings: KeyBindings::default(),
            palette,
            highlighter,
            started: Instant::now(),
            last_page_area: None,
            last_modal_area: None,
            clipboard: Box::new(SystemClipboard::default()),
        };
        let (width, height) = match app.terminal.size() {
            Ok(size) => (size.width, size.height),
            Err(_) => (80, 24),
        };
        app.handle_resize(width, height);
        app
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Duration) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => {
                info!("quit requested");
                true
            }
            Some(action) => {
                self.app_state.apply_action(action, now);
                self.flush_copy(now);
                false
            }
            None => false,
        }
    }

    /// Handle a single mouse event
    ///
    /// Moves feed the pointer bus and hover; left clicks go to the modal
    /// when one is open, else to whatever page element is under them; the
    /// wheel scrolls the modal body or the page.
    fn handle_mouse(&mut self, mouse: MouseEvent, now: Duration) {
        let Some(page_area) = self.last_page_area else {
            return;
        };

        match mouse.kind {
            MouseEventKind::ScrollUp => self.app_state.wheel(-WHEEL_STEP, now),
            MouseEventKind::ScrollDown => self.app_state.wheel(WHEEL_STEP, now),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if self.app_state.modal().is_open() {
                    self.app_state.pointer_left(now);
                    return;
                }
                match screen_to_viewport(mouse.column, mouse.row, page_area) {
                    Some((x, y)) => self.app_state.pointer_moved(x, y, now),
                    None => self.app_state.pointer_left(now),
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.app_state.modal().is_open() {
                    if let Some(modal_area) = self.last_modal_area {
                        let target = detect_modal_click(mouse.column, mouse.row, modal_area);
                        self.app_state.click_modal(target, now);
                    }
                    return;
                }
                let offset = self.app_state.page().offset();
                if let Some((x, y)) = screen_to_page(mouse.column, mouse.row, page_area, offset) {
                    self.app_state.click_page(x, y, now);
                    self.flush_copy(now);
                }
            }
            _ => {}
        }
    }

    /// Copy the snippet the page asked for, if any.
    ///
    /// A failed copy only logs; the button keeps its plain label.
    fn flush_copy(&mut self, now: Duration) {
        let Some(index) = self.app_state.take_copy_request() else {
            return;
        };
        let Some(snippet) = self.app_state.portfolio().snippets.get(index) else {
            return;
        };
        match self.clipboard.set_text(&snippet.code) {
            Ok(()) => {
                info!(title = %snippet.title, "snippet copied to clipboard");
                self.app_state.mark_copied(index, now);
            }
            Err(error) => warn!(%error, "snippet not copied"),
        }
    }

    /// The terminal lost focus; the pointer may be anywhere now.
    fn handle_focus_lost(&mut self, now: Duration) {
        self.app_state.pointer_left(now);
    }

    /// Handle a terminal resize event
    ///
    /// Relays out the page for the new page area.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        let screen = layout::calculate_screen_layout(Rect::new(0, 0, width, height));
        self.last_page_area = Some(screen.page);
        self.app_state.resize(screen.page.width, screen.page.height);
    }

    /// Render the current frame
    ///
    /// Measures the open modal's body before rendering so scrolling is
    /// clamped to what is actually drawn.
    fn draw(&mut self, now: Duration) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let screen = layout::calculate_screen_layout(frame_area);
        if self.last_page_area != Some(screen.page) {
            self.handle_resize(size.width, size.height);
        }

        let open_project = self
            .app_state
            .modal()
            .payload()
            .and_then(|&index| self.app_state.portfolio().projects.get(index));
        match open_project {
            Some(project) => {
                let modal_area = modal::modal_area(frame_area);
                let limit = modal::body_scroll_limit(project, modal_area, &self.palette);
                self.last_modal_area = Some(modal_area);
                self.app_state.set_modal_scroll_limit(limit);
            }
            None => self.last_modal_area = None,
        }

        self.terminal.draw(|frame| {
            layout::render_layout(
                frame,
                &self.app_state,
                &self.highlighter,
                &self.palette,
                now,
            );
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.
//
// DO NOT use these in production code.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips raw mode and the alternate screen. The clock starts at zero.
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        portfolio: Portfolio,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Self {
        Self::with_terminal(terminal, portfolio, config, colors, Duration::ZERO)
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event at `now` (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Duration) -> bool {
        self.handle_key(key, now)
    }

    /// Handle a single mouse event at `now` (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent, now: Duration) {
        self.handle_mouse(mouse, now)
    }

    /// Replace the clipboard (test-only accessor)
    pub(crate) fn set_clipboard_test(&mut self, clipboard: Box<dyn ClipboardSink>) {
        self.clipboard = clipboard;
    }

    /// Handle losing terminal focus at `now` (test-only accessor)
    pub(crate) fn handle_focus_lost_test(&mut self, now: Duration) {
        self.handle_focus_lost(now)
    }

    /// Handle a resize event (test-only accessor)
    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height)
    }

    /// Run one animation frame at `now` (test-only accessor)
    ///
    /// Returns whether anything visible changed.
    pub(crate) fn tick_test(&mut self, now: Duration) -> bool {
        self.app_state.tick(now)
    }

    /// Render a single frame at `now` (test-only accessor)
    pub(crate) fn render_test(&mut self, now: Duration) -> Result<(), TuiError> {
        self.draw(now)
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to terminal (test-only accessor)
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

// ===== Benchmark Helpers =====
//
// Public wrappers for benchmarks when bench-internals feature is enabled.
// These delegate to the pub(crate) test helpers above.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking (benchmark-only constructor)
    pub fn new_for_bench(
        terminal: Terminal<B>,
        portfolio: Portfolio,
        config: &ResolvedConfig,
    ) -> Self {
        Self::new_for_test(
            terminal,
            portfolio,
            config,
            ColorConfig::forced(true),
        )
    }

    /// Handle a single mouse event (benchmark-only accessor)
    pub fn handle_mouse_bench(&mut self, mouse: MouseEvent, now: Duration) {
        self.handle_mouse_test(mouse, now)
    }

    /// Run one animation frame (benchmark-only accessor)
    pub fn tick_bench(&mut self, now: Duration) -> bool {
        self.tick_test(now)
    }

    /// Render a single frame (benchmark-only accessor)
    pub fn render_bench(&mut self, now: Duration) -> Result<(), TuiError> {
        self.render_test(now)
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    portfolio: Portfolio,
    config: &ResolvedConfig,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(portfolio, config, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture and focus reporting, and leaves the
/// alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableFocusChange)?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    // Helper to create test TuiApp
    fn create_test_app() -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        TuiApp::new_for_test(
            terminal,
            Portfolio::builtin().unwrap(),
            &ResolvedConfig::default(),
            ColorConfig::forced(false),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(app.handle_key(key(KeyCode::Char('q')), ms(0)), "'q' should trigger quit");
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(key, ms(0)), "Ctrl+C should trigger quit");
    }

    #[test]
    fn handle_key_other_returns_false() {
        let mut app = create_test_app();
        assert!(!app.handle_key(key(KeyCode::Char('z')), ms(0)));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = create_test_app();
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert!(!app.handle_key(release, ms(0)));
    }

    #[test]
    fn construction_lays_out_for_terminal_size() {
        let app = create_test_app();

        assert_eq!(app.last_page_area, Some(Rect::new(0, 1, 80, 22)));
        assert_eq!(app.app_state.page().viewport_height(), 22);
        assert_eq!(app.app_state.layout().width, 80);
    }

    #[test]
    fn draw_renders_without_error() {
        let mut app = create_test_app();
        assert!(app.draw(ms(0)).is_ok());
    }

    #[test]
    fn handle_key_j_scrolls_page() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Char('j')), ms(0));
        assert_eq!(app.app_state.page().offset(), 1);
    }

    #[test]
    fn wheel_scrolls_by_step() {
        let mut app = create_test_app();
        app.handle_mouse(mouse(MouseEventKind::ScrollDown, 5, 5), ms(0));
        assert_eq!(app.app_state.page().offset(), WHEEL_STEP as u16);
    }

    #[test]
    fn pointer_move_maps_through_page_area() {
        let mut app = create_test_app();
        let card = app.app_state.layout().cards[0];

        // Screen row = page row + 1 for the progress bar.
        app.handle_mouse(mouse(MouseEventKind::Moved, card.x + 2, card.y + 3), ms(0));

        assert_eq!(
            app.app_state.hovered(),
            Some(crate::state::PageTarget::Card(0))
        );
    }

    #[test]
    fn pointer_over_status_bar_leaves_page() {
        let mut app = create_test_app();
        let card = app.app_state.layout().cards[0];
        app.handle_mouse(mouse(MouseEventKind::Moved, card.x + 2, card.y + 3), ms(0));

        app.handle_mouse(mouse(MouseEventKind::Moved, 2, 23), ms(10));

        assert_eq!(app.app_state.hovered(), None);
    }

    #[test]
    fn draw_records_modal_area_and_scroll_limit() {
        let mut app = create_test_app();
        app.app_state
            .perform(crate::state::Intent::OpenProject(0), ms(0));

        app.draw(ms(500)).unwrap();

        assert_eq!(app.last_modal_area, Some(modal::modal_area(Rect::new(0, 0, 80, 24))));
        app.draw(ms(600)).unwrap();
    }

    #[test]
    fn backdrop_click_closes_modal() {
        let mut app = create_test_app();
        app.app_state
            .perform(crate::state::Intent::OpenProject(0), ms(0));
        app.draw(ms(500)).unwrap();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, 12), ms(510));
        assert!(app.app_state.modal().is_open(), "content click keeps it open");

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), ms(520));
        assert!(!app.app_state.modal().is_open());
    }

    #[test]
    fn event_resize_relays_out_page() {
        let mut app = create_test_app();

        app.handle_resize(40, 30);

        assert_eq!(app.app_state.layout().width, 40);
        assert_eq!(app.app_state.page().viewport_height(), 28);
        assert_eq!(app.last_page_area, Some(Rect::new(0, 1, 40, 28)));
    }

    #[test]
    fn monochrome_app_skips_syntax_colors() {
        let app = create_test_app();
        assert!(app.palette.is_monochrome());
    }
}
