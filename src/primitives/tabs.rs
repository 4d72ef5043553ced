//! Single-selection tab switcher with an entry animation per switch.

use super::easing::Easing;
use super::transition::Transition;
use std::time::Duration;
use tracing::{debug, warn};

/// Entry animation time.
pub const TAB_ENTRY: Duration = Duration::from_millis(300);

/// Vertical offset of freshly entered content, in virtual pixels.
const ENTRY_SHIFT: f64 = 10.0;

/// Style of the active tab's content during its entry animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabEntry {
    /// Content opacity, easing to 1.
    pub opacity: f64,
    /// Downward offset in virtual pixels, easing to zero.
    pub shift: f64,
}

/// Tab selection over a fixed ordered list of ids.
///
/// The active tab always names a real tab. An empty list has no active tab.
#[derive(Debug, Clone)]
pub struct TabSwitcher {
    ids: Vec<String>,
    active: usize,
    /// Bumped once per actual switch; keys the entry animation.
    entry_generation: u64,
    entry: Transition,
}

impl TabSwitcher {
    /// Start on the first tab, already settled.
    pub fn new(ids: Vec<String>) -> Self {
        Self {
            ids,
            active: 0,
            entry_generation: 0,
            entry: Transition::new(1.0, TAB_ENTRY, Easing::EaseOut),
        }
    }

    /// Tab ids in display order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when there are no tabs.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Position of the active tab; `None` only when empty.
    pub fn active_index(&self) -> Option<usize> {
        (!self.ids.is_empty()).then_some(self.active)
    }

    /// Id of the active tab.
    pub fn active_tab(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }

    /// Number of switches so far.
    pub fn entry_generation(&self) -> u64 {
        self.entry_generation
    }

    /// Select the tab named `id`.
    ///
    /// Returns `true` when the selection changed and an entry animation was
    /// started. Re-selecting the active tab and unknown ids do nothing.
    pub fn select(&mut self, id: &str, now: Duration) -> bool {
        match self.ids.iter().position(|t| t == id) {
            Some(index) => self.select_index(index, now),
            None => {
                warn!(tab = id, "ignoring selection of unknown tab");
                false
            }
        }
    }

    /// Select by position. Out-of-range positions are ignored.
    pub fn select_index(&mut self, index: usize, now: Duration) -> bool {
        if index >= self.ids.len() || index == self.active {
            return false;
        }
        self.active = index;
        self.entry_generation += 1;
        self.entry.restart(0.0, 1.0, now);
        debug!(tab = %self.ids[index], generation = self.entry_generation, "tab switched");
        true
    }

    /// Move to the next tab, wrapping.
    pub fn next(&mut self, now: Duration) -> bool {
        match self.ids.len() {
            0 => false,
            n => self.select_index((self.active + 1) % n, now),
        }
    }

    /// Move to the previous tab, wrapping.
    pub fn prev(&mut self, now: Duration) -> bool {
        match self.ids.len() {
            0 => false,
            n => self.select_index((self.active + n - 1) % n, now),
        }
    }

    /// Entry animation values at `now`.
    pub fn entry(&self, now: Duration) -> TabEntry {
        let p = self.entry.value_at(now);
        TabEntry {
            opacity: p,
            shift: ENTRY_SHIFT * (1.0 - p),
        }
    }

    /// Whether the entry animation is running.
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.entry.is_settled(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> TabSwitcher {
        TabSwitcher::new(vec!["journey".into(), "values".into(), "approach".into()])
    }

    #[test]
    fn starts_on_first_tab_fully_visible() {
        let t = tabs();
        assert_eq!(t.active_tab(), Some("journey"));
        assert_eq!(t.entry(Duration::ZERO), TabEntry { opacity: 1.0, shift: 0.0 });
    }

    #[test]
    fn reselecting_active_tab_emits_nothing() {
        let mut t = tabs();
        assert!(!t.select("journey", Duration::ZERO));
        assert_eq!(t.entry_generation(), 0);
        assert!(!t.is_animating(Duration::ZERO));
    }

    #[test]
    fn switching_emits_exactly_one_entry() {
        let mut t = tabs();
        assert!(t.select("values", Duration::ZERO));

        assert_eq!(t.active_tab(), Some("values"));
        assert_eq!(t.entry_generation(), 1);
        assert_eq!(t.entry(Duration::ZERO), TabEntry { opacity: 0.0, shift: 10.0 });
        assert_eq!(t.entry(TAB_ENTRY).opacity, 1.0);
    }

    #[test]
    fn unknown_id_keeps_selection() {
        let mut t = tabs();
        assert!(!t.select("missing", Duration::ZERO));
        assert_eq!(t.active_tab(), Some("journey"));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut t = tabs();
        t.prev(Duration::ZERO);
        assert_eq!(t.active_tab(), Some("approach"));
        t.next(Duration::ZERO);
        assert_eq!(t.active_tab(), Some("journey"));
    }

    #[test]
    fn empty_switcher_has_no_active_tab() {
        let mut t = TabSwitcher::new(Vec::new());
        assert_eq!(t.active_tab(), None);
        assert_eq!(t.active_index(), None);
        assert!(!t.next(Duration::ZERO));
        assert!(!t.select("any", Duration::ZERO));
    }

    #[test]
    fn single_tab_never_switches() {
        let mut t = TabSwitcher::new(vec!["only".into()]);
        assert!(!t.next(Duration::ZERO));
        assert_eq!(t.entry_generation(), 0);
    }
}
