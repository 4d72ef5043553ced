//! Keyboard focus over an ordered list of focusable items.

/// Focus moved from `blurred` to `focused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    /// Item that lost focus.
    pub blurred: Option<usize>,
    /// Item that gained focus.
    pub focused: Option<usize>,
}

/// Focus position; nothing is focused until the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusRing {
    len: usize,
    current: Option<usize>,
}

impl FocusRing {
    /// Ring over `len` items with nothing focused.
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    /// Focused item, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Number of focusable items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing can take focus.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Focus the next item, wrapping. The first move focuses item 0.
    pub fn next(&mut self) -> FocusChange {
        let target = match self.current {
            _ if self.len == 0 => None,
            None => Some(0),
            Some(i) => Some((i + 1) % self.len),
        };
        self.move_to(target)
    }

    /// Focus the previous item, wrapping. The first move focuses the last.
    pub fn prev(&mut self) -> FocusChange {
        let target = match self.current {
            _ if self.len == 0 => None,
            None => Some(self.len - 1),
            Some(i) => Some((i + self.len - 1) % self.len),
        };
        self.move_to(target)
    }

    /// Focus `index` directly. Out-of-range indices clear focus.
    pub fn focus(&mut self, index: usize) -> FocusChange {
        self.move_to((index < self.len).then_some(index))
    }

    /// Drop focus entirely.
    pub fn clear(&mut self) -> FocusChange {
        self.move_to(None)
    }

    fn move_to(&mut self, target: Option<usize>) -> FocusChange {
        let change = FocusChange {
            blurred: self.current,
            focused: target,
        };
        self.current = target;
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_next_focuses_first_item() {
        let mut ring = FocusRing::new(3);
        let change = ring.next();
        assert_eq!(change, FocusChange { blurred: None, focused: Some(0) });
    }

    #[test]
    fn next_wraps_and_reports_blurred_item() {
        let mut ring = FocusRing::new(2);
        ring.focus(1);
        let change = ring.next();
        assert_eq!(change, FocusChange { blurred: Some(1), focused: Some(0) });
    }

    #[test]
    fn first_prev_focuses_last_item() {
        let mut ring = FocusRing::new(3);
        assert_eq!(ring.prev().focused, Some(2));
    }

    #[test]
    fn empty_ring_never_focuses() {
        let mut ring = FocusRing::new(0);
        assert_eq!(ring.next().focused, None);
        assert_eq!(ring.prev().focused, None);
    }
}
