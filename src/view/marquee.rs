//! Marquee strip.
//!
//! One copy of the items is laid out once into a single-row buffer, then
//! the strip shows the two-copy track through a window that starts
//! `-offset` pixels in. Columns past the second copy stay blank.

use crate::model::CELL_WIDTH_PX;
use crate::primitives::marquee::COPIES;
use crate::primitives::Marquee;
use crate::state::page_layout::{marquee_copy_width, marquee_track_width, MARQUEE_SEPARATOR};
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// Draw `items` scrolling through the one-row `area`.
pub fn render_marquee(
    area: Rect,
    buf: &mut Buffer,
    items: &[String],
    marquee: &Marquee,
    item_style: Style,
    palette: &Palette,
) {
    let copy_width = marquee_copy_width(items);
    if area.is_empty() || copy_width == 0 {
        return;
    }

    let copy = Line::from(
        items
            .iter()
            .flat_map(|item| {
                [
                    Span::styled(item.as_str(), item_style),
                    Span::styled(MARQUEE_SEPARATOR, palette.muted()),
                ]
            })
            .collect::<Vec<_>>(),
    );
    let mut track = Buffer::empty(Rect::new(0, 0, marquee_track_width(copy_width), 1));
    copy.render(track.area, &mut track);

    let start = (-marquee.offset_px() / CELL_WIDTH_PX).floor().max(0.0) as usize;
    for column in 0..area.width {
        let index = start + usize::from(column);
        if index >= COPIES * copy_width {
            break;
        }
        let Ok(source) = u16::try_from(index % copy_width) else {
            continue;
        };
        if let (Some(from), Some(to)) = (
            track.cell((source, 0)),
            buf.cell_mut((area.x + column, area.y)),
        ) {
            *to = from.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{MarqueeConfig, MarqueeDirection};
    use std::time::Duration;

    fn strip(marquee: &Marquee, items: &[String], width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        render_marquee(
            area,
            &mut buf,
            items,
            marquee,
            Style::default(),
            &Palette::monochrome(),
        );
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    fn items() -> Vec<String> {
        vec!["rust".into(), "go".into()]
    }

    fn measured(direction: MarqueeDirection) -> Marquee {
        let mut marquee = Marquee::new(MarqueeConfig {
            direction,
            ..MarqueeConfig::default()
        });
        let width = marquee_copy_width(&items());
        marquee.measure(Some(width as f64 * CELL_WIDTH_PX));
        marquee
    }

    #[test]
    fn left_marquee_starts_at_first_item() {
        let marquee = measured(MarqueeDirection::Left);

        assert_eq!(strip(&marquee, &items(), 20), "rust   ·   go   ·   ");
    }

    #[test]
    fn scrolling_moves_the_window_along_the_track() {
        let mut marquee = measured(MarqueeDirection::Left);
        marquee.tick(Duration::ZERO);
        // 20 cells at 40px/s loop in 4s; half a loop is half a copy.
        marquee.tick(Duration::from_secs(2));

        let out = strip(&marquee, &items(), 10);

        assert_eq!(out, " go   ·   ");
    }

    #[test]
    fn window_past_second_copy_is_blank() {
        let marquee = measured(MarqueeDirection::Left);
        let out = strip(&marquee, &items(), 50);

        assert_eq!(out.trim_end().chars().count(), 37);
    }

    #[test]
    fn empty_items_draw_nothing() {
        let marquee = measured(MarqueeDirection::Left);

        assert_eq!(strip(&marquee, &[], 5), "     ");
    }
}
