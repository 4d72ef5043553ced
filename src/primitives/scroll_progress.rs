//! Page scroll position and the reading-progress fraction derived from it.

/// Vertical scroll state of a page taller than its viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageScroll {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl PageScroll {
    /// Empty page scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible page row.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Page height in rows.
    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Visible rows.
    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Largest valid offset; zero when the page fits.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Update the measured heights, clamping the offset to stay valid.
    pub fn set_extent(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll by `delta` rows. Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.scroll_to(u16::try_from(target).unwrap_or(0))
    }

    /// Scroll to `offset`, clamped. Returns whether the offset changed.
    pub fn scroll_to(&mut self, offset: u16) -> bool {
        let clamped = offset.min(self.max_offset());
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Fraction of the page scrolled past, in [0, 1].
    pub fn progress(&self) -> f64 {
        scroll_progress(self.offset, self.content_height, self.viewport_height)
    }
}

/// `offset / (content - viewport)`, or 0 when nothing can scroll.
pub fn scroll_progress(offset: u16, content_height: u16, viewport_height: u16) -> f64 {
    let scrollable = content_height.saturating_sub(viewport_height);
    if scrollable == 0 {
        return 0.0;
    }
    (f64::from(offset) / f64::from(scrollable)).clamp(0.0, 1.0)
}
