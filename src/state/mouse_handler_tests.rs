//! Tests for mouse hit testing.

use super::*;
use crate::model::Portfolio;
use crate::state::page_layout::tab_hit_rects;

// ===== Test Helpers =====

fn layout() -> PageLayout {
    PageLayout::compute(&Portfolio::builtin().unwrap(), 80)
}

fn center(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

// ===== detect_tab_click Tests =====

#[test]
fn detect_tab_click_returns_no_tab_when_outside_area() {
    let area = Rect::new(0, 0, 80, 1);
    let tabs = tab_hit_rects(area, ["One", "Two"]);

    assert_eq!(detect_tab_click(5, 3, area, &tabs), TabClickResult::NoTab);
}

#[test]
fn detect_tab_click_returns_index_of_label() {
    let area = Rect::new(10, 2, 60, 1);
    let tabs = tab_hit_rects(area, ["Journey", "Values", "Approach"]);

    assert_eq!(detect_tab_click(10, 2, area, &tabs), TabClickResult::TabClicked(0));
    assert_eq!(detect_tab_click(22, 2, area, &tabs), TabClickResult::TabClicked(1));
    assert_eq!(detect_tab_click(31, 2, area, &tabs), TabClickResult::TabClicked(2));
}

#[test]
fn detect_tab_click_ignores_divider_and_trailing_space() {
    let area = Rect::new(0, 0, 60, 1);
    let tabs = tab_hit_rects(area, ["One", "Two"]);

    // " One " spans 0..5, divider at 5
    assert_eq!(detect_tab_click(5, 0, area, &tabs), TabClickResult::NoTab);
    assert_eq!(detect_tab_click(40, 0, area, &tabs), TabClickResult::NoTab);
}

#[test]
fn detect_tab_click_with_no_tabs() {
    let area = Rect::new(0, 0, 60, 1);
    assert_eq!(detect_tab_click(1, 0, area, &[]), TabClickResult::NoTab);
}

// ===== Coordinate conversion =====

#[test]
fn screen_to_page_adds_scroll_offset() {
    let page_area = Rect::new(0, 1, 80, 20);

    assert_eq!(screen_to_page(4, 1, page_area, 0), Some((4, 0)));
    assert_eq!(screen_to_page(4, 6, page_area, 30), Some((4, 35)));
}

#[test]
fn screen_to_page_rejects_chrome_rows() {
    let page_area = Rect::new(0, 1, 80, 20);

    assert_eq!(screen_to_page(4, 0, page_area, 0), None);
    assert_eq!(screen_to_page(4, 21, page_area, 0), None);
}

// ===== detect_page_target =====

#[test]
fn page_targets_resolve_to_their_elements() {
    let layout = layout();

    let (x, y) = center(layout.cards[1]);
    assert_eq!(detect_page_target(x, y, &layout), Some(PageTarget::Card(1)));

    let (x, y) = center(layout.tabs[2]);
    assert_eq!(detect_page_target(x, y, &layout), Some(PageTarget::Tab(2)));

    let (x, y) = center(layout.projects[0]);
    assert_eq!(detect_page_target(x, y, &layout), Some(PageTarget::Project(0)));

    let (x, y) = center(layout.snippet_prev);
    assert_eq!(detect_page_target(x, y, &layout), Some(PageTarget::SnippetPrev));

    let (x, y) = center(layout.snippet_next);
    assert_eq!(detect_page_target(x, y, &layout), Some(PageTarget::SnippetNext));

    let (x, y) = center(layout.tech_strip);
    assert_eq!(detect_page_target(x, y, &layout), Some(PageTarget::TechStrip));
}

#[test]
fn snippet_pickers_and_copy_button_sit_on_the_code_box_border() {
    let layout = layout();

    let (x, y) = center(layout.snippet_picks[2]);
    assert_eq!(detect_page_target(x, y, &layout), Some(PageTarget::Snippet(2)));

    let (x, y) = center(layout.snippet_copy);
    assert_eq!(detect_page_target(x, y, &layout), Some(PageTarget::SnippetCopy));

    // The border cell between two pickers belongs to neither
    let gap = layout.snippet_picks[0].right();
    assert_eq!(detect_page_target(gap, layout.snippet_picks[0].y, &layout), None);
}

#[test]
fn hero_and_headings_are_not_interactive() {
    let layout = layout();

    let (x, y) = center(layout.hero);
    assert_eq!(detect_page_target(x, y, &layout), None);

    let (_, heading) = layout.headings[0];
    assert_eq!(detect_page_target(heading.x, heading.y, &layout), None);
}

// ===== detect_modal_click =====

#[test]
fn modal_click_inside_content_is_contained() {
    let modal = Rect::new(10, 5, 40, 10);

    assert_eq!(detect_modal_click(10, 5, modal), ClickTarget::Content);
    assert_eq!(detect_modal_click(49, 14, modal), ClickTarget::Content);
}

#[test]
fn modal_click_outside_content_is_backdrop() {
    let modal = Rect::new(10, 5, 40, 10);

    assert_eq!(detect_modal_click(9, 5, modal), ClickTarget::Backdrop);
    assert_eq!(detect_modal_click(50, 14, modal), ClickTarget::Backdrop);
    assert_eq!(detect_modal_click(20, 15, modal), ClickTarget::Backdrop);
}
