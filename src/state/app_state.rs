//! Application state: the page, its primitives, and how input moves them.

use crate::config::ResolvedConfig;
use crate::model::{KeyAction, Point, Portfolio, Section, CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::primitives::{
    Carousel, ClickTarget, FocusChange, FocusRing, GlowBorder, HoverReveal, Marquee,
    MarqueeConfig, MarqueeDirection, ModalController, PageScroll, PointerBus, RevealSource,
    ScrollLock, TabSwitcher, TapOutcome, Typewriter,
};
use crate::state::mouse_handler::{detect_page_target, PageTarget};
use crate::state::page_layout::{marquee_copy_width, rect_bounds, testimonial_items, PageLayout};
use crate::timing::Timer;
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long the copy button reads "copied" after a copy.
pub const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// A highlight card: reveal state plus its glow border.
#[derive(Debug)]
pub struct CardState {
    /// Hover reveal of the card body.
    pub reveal: HoverReveal,
    /// Animated border, subscribed to the pointer bus.
    pub glow: GlowBorder,
}

/// What a focused or tapped element asks the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Scroll to a section.
    Navigate(Section),
    /// Show a project in the modal.
    OpenProject(usize),
}

/// The whole page.
///
/// Low-frequency state (hover, tab, modal, focus) lives here directly. Glow
/// angle and intensity live in cells shared with the pointer bus and are
/// read at draw time.
#[derive(Debug)]
pub struct AppState {
    portfolio: Portfolio,
    layout: PageLayout,
    page: PageScroll,
    typewriter: Typewriter,
    testimonials: Marquee,
    tech: Marquee,
    testimonial_items: Vec<String>,
    cards: Vec<CardState>,
    about_tabs: TabSwitcher,
    modal: ModalController<usize>,
    snippets: Carousel,
    focus: FocusRing,
    bus: PointerBus,
    scroll_lock: ScrollLock,
    /// Last pointer cell relative to the page viewport.
    pointer: Option<(u16, u16)>,
    hovered: Option<PageTarget>,
    caret_on: bool,
    modal_scroll_limit: u16,
    /// Snippet the user asked to copy, waiting for the shell.
    copy_request: Option<usize>,
    /// Snippet most recently copied, while its feedback shows.
    copied: Option<usize>,
    copied_timer: Timer,
    /// Latest time seen from any input or tick.
    clock: Duration,
}

impl AppState {
    /// Build the page for `portfolio`, starting animations at `now`.
    ///
    /// Nothing is measured until the first [`AppState::resize`].
    pub fn new(portfolio: Portfolio, config: &ResolvedConfig, now: Duration) -> Self {
        let bus = PointerBus::new();
        let scroll_lock = ScrollLock::new();

        let cards = portfolio
            .highlights
            .iter()
            .map(|_| CardState {
                reveal: HoverReveal::default(),
                glow: GlowBorder::new(config.glow, &bus),
            })
            .collect();

        let typewriter = Typewriter::mount(portfolio.phrases.clone(), config.typewriter, now);
        let testimonials = Marquee::new(MarqueeConfig {
            direction: MarqueeDirection::Left,
            ..config.marquee
        });
        let tech = Marquee::new(MarqueeConfig {
            direction: MarqueeDirection::Right,
            ..config.marquee
        });

        let focusable = portfolio.highlights.len() + portfolio.projects.len();
        let caret_on = typewriter.caret_visible(now);

        Self {
            testimonial_items: testimonial_items(&portfolio),
            about_tabs: TabSwitcher::new(portfolio.tab_ids()),
            snippets: Carousel::new(portfolio.snippets.len()),
            focus: FocusRing::new(focusable),
            modal: ModalController::new(scroll_lock.clone()),
            layout: PageLayout::default(),
            page: PageScroll::new(),
            typewriter,
            testimonials,
            tech,
            cards,
            portfolio,
            bus,
            scroll_lock,
            pointer: None,
            hovered: None,
            caret_on,
            modal_scroll_limit: 0,
            copy_request: None,
            copied: None,
            copied_timer: Timer::new(),
            clock: now,
        }
    }

    // ===== Accessors =====

    /// Content the page renders.
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Page layout for the current width.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Page scroll position and progress.
    pub fn page(&self) -> &PageScroll {
        &self.page
    }

    /// Hero tagline typewriter.
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Testimonial ticker.
    pub fn testimonials(&self) -> &Marquee {
        &self.testimonials
    }

    /// Tech stack ticker.
    pub fn tech(&self) -> &Marquee {
        &self.tech
    }

    /// One line per testimonial, as the ticker shows them.
    pub fn testimonial_items(&self) -> &[String] {
        &self.testimonial_items
    }

    /// Skill cards in display order.
    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    /// Tabs of the about section.
    pub fn about_tabs(&self) -> &TabSwitcher {
        &self.about_tabs
    }

    /// Project modal, keyed by project index.
    pub fn modal(&self) -> &ModalController<usize> {
        &self.modal
    }

    /// Code snippet carousel.
    pub fn snippets(&self) -> &Carousel {
        &self.snippets
    }

    /// Keyboard focus ring.
    pub fn focus(&self) -> &FocusRing {
        &self.focus
    }

    /// Pointer bus feeding the card glows.
    pub fn bus(&self) -> &PointerBus {
        &self.bus
    }

    /// Page scroll lock held while an overlay is open.
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    /// Element under the pointer, if any.
    pub fn hovered(&self) -> Option<PageTarget> {
        self.hovered
    }

    /// Focused card index, if focus is on a card.
    pub fn focused_card(&self) -> Option<usize> {
        self.focus.current().filter(|&i| i < self.cards.len())
    }

    /// Focused project index, if focus is on a project.
    pub fn focused_project(&self) -> Option<usize> {
        self.focus
            .current()
            .and_then(|i| i.checked_sub(self.cards.len()))
    }

    // ===== Layout =====

    /// Re-lay the page for a new viewport and remeasure what depends on it.
    pub fn resize(&mut self, width: u16, viewport_height: u16) {
        self.layout = PageLayout::compute(&self.portfolio, width);
        self.page.set_extent(self.layout.height, viewport_height);

        for (card, rect) in self.cards.iter().zip(&self.layout.cards) {
            card.glow.set_bounds(rect_bounds(*rect));
        }

        let measure = |strip: &str, items: &[String]| {
            let cells = marquee_copy_width(items);
            if cells > usize::from(u16::MAX) {
                warn!(
                    strip,
                    cells,
                    drawn = u16::MAX,
                    "marquee copy is wider than a drawable row; the tail is left blank"
                );
            }
            (width > 0).then(|| cells as f64 * CELL_WIDTH_PX)
        };
        self.testimonials
            .measure(measure("testimonials", &self.testimonial_items));
        self.tech
            .measure(measure("tech", &self.portfolio.tech_stack));

        self.sync_scroll();
        debug!(
            width,
            viewport_height,
            page_height = self.layout.height,
            "page laid out"
        );
    }

    /// Upper bound for the modal body scroll, known once it is rendered.
    pub fn set_modal_scroll_limit(&mut self, limit: u16) {
        self.modal_scroll_limit = limit;
        if self.modal.body_scroll() > limit {
            self.modal.scroll_body(0, limit);
        }
    }

    // ===== Time =====

    /// Advance every animation to `now`. Returns whether anything visible
    /// changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.advance_clock(now);
        let mut dirty = self.typewriter.tick(now);

        let caret_on = self.typewriter.caret_visible(now);
        if caret_on != self.caret_on {
            self.caret_on = caret_on;
            dirty = true;
        }

        dirty |= self.testimonials.tick(now);
        dirty |= self.tech.tick(now);
        dirty |= self.bus.run_frame(now) > 0;
        if self.copied_timer.take_due(now).is_some() {
            self.copied = None;
            dirty = true;
        }

        dirty || self.is_animating(now)
    }

    /// Whether a transition is still running.
    pub fn is_animating(&self, now: Duration) -> bool {
        self.cards
            .iter()
            .any(|c| c.reveal.is_animating(now) || c.glow.is_animating(now))
            || self.about_tabs.is_animating(now)
            || self.modal.is_animating(now)
    }

    // ===== Keyboard =====

    /// Apply a key action. `Quit` is the caller's business and does nothing
    /// here.
    pub fn apply_action(&mut self, action: KeyAction, now: Duration) {
        self.advance_clock(now);
        match action {
            KeyAction::ScrollDown => self.wheel(1, now),
            KeyAction::ScrollUp => self.wheel(-1, now),
            KeyAction::PageDown => self.wheel(self.page_step(), now),
            KeyAction::PageUp => self.wheel(-self.page_step(), now),
            KeyAction::ScrollToTop => {
                if self.modal.is_open() {
                    let limit = self.modal_scroll_limit;
                    self.modal.scroll_body(-i32::from(limit), limit);
                } else {
                    self.scroll_page_to(0);
                }
            }
            KeyAction::ScrollToBottom => {
                if self.modal.is_open() {
                    self.modal
                        .scroll_body(i32::from(self.modal_scroll_limit), self.modal_scroll_limit);
                } else {
                    self.scroll_page_to(self.page.max_offset());
                }
            }
            KeyAction::NextTab => {
                self.about_tabs.next(now);
            }
            KeyAction::PrevTab => {
                self.about_tabs.prev(now);
            }
            KeyAction::SelectTab(n) => {
                if let Some(index) = n.checked_sub(1) {
                    self.about_tabs.select_index(index, now);
                }
            }
            KeyAction::NextSnippet => self.snippets.next(),
            KeyAction::PrevSnippet => self.snippets.prev(),
            KeyAction::CopySnippet => self.request_copy(),
            KeyAction::FocusNext => {
                let change = self.focus.next();
                self.apply_focus(change, now);
            }
            KeyAction::FocusPrev => {
                let change = self.focus.prev();
                self.apply_focus(change, now);
            }
            KeyAction::Activate => {
                if let Some(intent) = self.focused_intent() {
                    self.perform(intent, now);
                }
            }
            KeyAction::Close => self.close(now),
            KeyAction::Quit => {}
        }
    }

    fn page_step(&self) -> i32 {
        i32::from(self.page.viewport_height().saturating_sub(1).max(1))
    }

    fn focused_intent(&self) -> Option<Intent> {
        if let Some(card) = self.focused_card() {
            let target = self.portfolio.highlights.get(card)?.target;
            return Some(Intent::Navigate(target));
        }
        self.focused_project().map(Intent::OpenProject)
    }

    /// Esc: close the modal, else drop focus and any tapped reveal.
    fn close(&mut self, now: Duration) {
        if self.modal.close(now).is_some() {
            return;
        }
        let change = self.focus.clear();
        self.apply_focus(change, now);
        for card in &mut self.cards {
            card.reveal.signal(RevealSource::ExplicitTap, false, now);
        }
    }

    fn apply_focus(&mut self, change: FocusChange, now: Duration) {
        let cards = self.cards.len();
        if let Some(card) = change.blurred.filter(|&i| i < cards) {
            self.cards[card]
                .reveal
                .signal(RevealSource::KeyboardFocus, false, now);
        }
        let Some(focused) = change.focused else {
            return;
        };
        let rect = if focused < cards {
            self.cards[focused]
                .reveal
                .signal(RevealSource::KeyboardFocus, true, now);
            self.layout.cards.get(focused).copied()
        } else {
            self.layout.projects.get(focused - cards).copied()
        };
        if let Some(rect) = rect {
            self.scroll_into_view(rect);
        }
    }

    /// Carry out an intent emitted by a card or project.
    pub fn perform(&mut self, intent: Intent, now: Duration) {
        match intent {
            Intent::Navigate(section) => {
                if let Some(top) = self.layout.section_top(section) {
                    info!(section = section.title(), "navigating");
                    self.scroll_page_to(top);
                }
            }
            Intent::OpenProject(index) => {
                if let Some(project) = self.portfolio.projects.get(index) {
                    info!(project = %project.title, "opening project");
                    self.modal.open(index, now);
                    // The overlay covers the page; nothing under it stays lit.
                    self.pointer_left(now);
                }
            }
        }
    }

    // ===== Scrolling =====

    /// Mouse wheel or arrow scroll: the modal body when the page is locked,
    /// else the page.
    pub fn wheel(&mut self, delta: i32, now: Duration) {
        self.advance_clock(now);
        if self.modal.is_open() {
            self.modal.scroll_body(delta, self.modal_scroll_limit);
            return;
        }
        if self.scroll_lock.is_locked() {
            debug!("page scroll suppressed by scroll lock");
            return;
        }
        if self.page.scroll_by(delta) {
            self.sync_scroll();
        }
    }

    fn scroll_page_to(&mut self, offset: u16) {
        if self.scroll_lock.is_locked() {
            debug!("page scroll suppressed by scroll lock");
            return;
        }
        if self.page.scroll_to(offset) {
            self.sync_scroll();
        }
    }

    fn scroll_into_view(&mut self, rect: Rect) {
        let top = self.page.offset();
        let height = self.page.viewport_height();
        if rect.y < top {
            self.scroll_page_to(rect.y);
        } else if rect.bottom() > top.saturating_add(height) {
            self.scroll_page_to(rect.bottom().saturating_sub(height));
        }
    }

    /// Tell the bus where the page is and recompute hover under a pointer
    /// that stayed put while the page moved.
    fn sync_scroll(&mut self) {
        self.bus.scrolled(Point::new(
            0.0,
            f64::from(self.page.offset()) * CELL_HEIGHT_PX,
        ));
        self.refresh_hover();
    }

    // ===== Pointer =====

    /// Pointer moved to `(column, row)` relative to the page viewport.
    pub fn pointer_moved(&mut self, column: u16, row: u16, now: Duration) {
        self.advance_clock(now);
        self.pointer = Some((column, row));
        self.bus.pointer_moved(Point::cell_center(column, row));
        self.refresh_hover();
    }

    /// Pointer left the page viewport.
    pub fn pointer_left(&mut self, now: Duration) {
        self.advance_clock(now);
        if self.pointer.take().is_some() {
            self.bus.pointer_left(now);
        }
        self.set_hovered(None, now);
    }

    fn refresh_hover(&mut self) {
        let target = self.pointer.and_then(|(x, y)| {
            detect_page_target(x, y.saturating_add(self.page.offset()), &self.layout)
        });
        self.set_hovered(target, self.clock);
    }

    fn advance_clock(&mut self, now: Duration) {
        self.clock = self.clock.max(now);
    }

    fn set_hovered(&mut self, target: Option<PageTarget>, now: Duration) {
        if target == self.hovered {
            return;
        }
        self.apply_hover(self.hovered, false, now);
        self.apply_hover(target, true, now);
        debug!(?target, "hover changed");
        self.hovered = target;
    }

    fn apply_hover(&mut self, target: Option<PageTarget>, active: bool, now: Duration) {
        match target {
            Some(PageTarget::Card(i)) => {
                if let Some(card) = self.cards.get_mut(i) {
                    card.reveal.signal(RevealSource::PointerHover, active, now);
                }
            }
            Some(PageTarget::TestimonialStrip) => self.testimonials.set_hovered(active),
            Some(PageTarget::TechStrip) => self.tech.set_hovered(active),
            _ => {}
        }
    }

    /// Click at page cell `(x, y)`.
    pub fn click_page(&mut self, x: u16, y: u16, now: Duration) {
        self.advance_clock(now);
        let target = detect_page_target(x, y, &self.layout);
        if !matches!(target, Some(PageTarget::Card(_))) {
            for card in &mut self.cards {
                card.reveal.signal(RevealSource::ExplicitTap, false, now);
            }
        }
        match target {
            Some(PageTarget::Card(i)) => self.tap_card(i, now),
            Some(PageTarget::Tab(i)) => {
                self.about_tabs.select_index(i, now);
            }
            Some(PageTarget::Project(i)) => self.perform(Intent::OpenProject(i), now),
            Some(PageTarget::SnippetPrev) => self.snippets.prev(),
            Some(PageTarget::SnippetNext) => self.snippets.next(),
            Some(PageTarget::Snippet(i)) => {
                self.snippets.select(i);
            }
            Some(PageTarget::SnippetCopy) => self.request_copy(),
            Some(PageTarget::TestimonialStrip) | Some(PageTarget::TechStrip) | None => {}
        }
    }

    // ===== Snippet copy =====

    /// Ask the shell to copy the current snippet. Ignored behind the modal.
    fn request_copy(&mut self) {
        if !self.modal.is_open() {
            self.copy_request = self.snippets.index();
        }
    }

    /// Hand the pending copy request to the shell, which owns the clipboard.
    pub fn take_copy_request(&mut self) -> Option<usize> {
        self.copy_request.take()
    }

    /// The shell copied snippet `index`; show feedback for
    /// [`COPIED_FEEDBACK`]. A second copy restarts the window.
    pub fn mark_copied(&mut self, index: usize, now: Duration) {
        self.advance_clock(now);
        self.copied = Some(index);
        self.copied_timer.schedule(now, COPIED_FEEDBACK);
        debug!(index, "snippet copied");
    }

    /// Whether the snippet on show was just copied.
    pub fn snippet_copied(&self) -> bool {
        self.copied.is_some() && self.copied == self.snippets.index()
    }

    /// First tap reveals a card; tapping a revealed card follows its call to
    /// action.
    pub fn tap_card(&mut self, index: usize, now: Duration) {
        let Some(card) = self.cards.get_mut(index) else {
            return;
        };
        if card.reveal.tap(now) == TapOutcome::Activate {
            if let Some(highlight) = self.portfolio.highlights.get(index) {
                let intent = Intent::Navigate(highlight.target);
                self.perform(intent, now);
            }
        }
    }

    /// Click while the modal is up.
    pub fn click_modal(&mut self, target: ClickTarget, now: Duration) {
        self.advance_clock(now);
        self.modal.click(target, now);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
