//! Circular index over a fixed number of items.

/// Active position in `[0, len)`; navigation wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// Carousel over `len` items, starting at the first.
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active index, or `None` when there are no items.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Step forward; the last item wraps to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back; the first item wraps to the last.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`. Returns `false` if out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}
