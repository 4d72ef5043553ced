//! Pointer-reactive glow border.
//!
//! The border is drawn statically first. When the glow is live, each
//! perimeter cell is then recolored by how close its bearing from the box
//! center lies to the glow's arc.

use crate::model::Point;
use crate::primitives::glow::arc_intensity;
use crate::primitives::GlowFrame;
use crate::state::page_layout::rect_bounds;
use crate::view::styles::{Palette, VISIBLE_THRESHOLD};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Widget},
};

/// Border line style for a configured weight.
pub fn border_type(weight: u16) -> BorderType {
    match weight {
        0 | 1 => BorderType::Rounded,
        2 => BorderType::Thick,
        _ => BorderType::Double,
    }
}

/// Cells on the edge of `area`, clockwise from the top-left corner.
pub fn perimeter(area: Rect) -> Vec<(u16, u16)> {
    if area.is_empty() {
        return Vec::new();
    }
    let (left, top) = (area.x, area.y);
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;

    let mut cells: Vec<(u16, u16)> = (left..=right).map(|x| (x, top)).collect();
    cells.extend((top + 1..=bottom).map(|y| (right, y)));
    if bottom > top {
        cells.extend((left..right).rev().map(|x| (x, bottom)));
    }
    if right > left {
        cells.extend((top + 1..bottom).rev().map(|y| (left, y)));
    }
    cells
}

/// Draw a bordered box at `area` lit by `glow`.
///
/// `area` is in page cells, which is also the space glow bearings are
/// measured in.
pub fn render_glow_border(
    area: Rect,
    buf: &mut Buffer,
    glow: GlowFrame,
    weight: u16,
    palette: &Palette,
    focused: bool,
) {
    let base = if focused {
        palette.accent()
    } else {
        Style::default().fg(palette.border)
    };
    Block::bordered()
        .border_type(border_type(weight))
        .border_style(base)
        .render(area, buf);

    if glow.disabled || glow.opacity < VISIBLE_THRESHOLD || area.width < 2 || area.height < 2 {
        return;
    }

    let bounds = rect_bounds(area);
    for (x, y) in perimeter(area) {
        let bearing = bounds.bearing_to(Point::cell_center(x, y));
        let intensity = arc_intensity(bearing, glow.angle, glow.spread) * glow.opacity;
        if intensity < VISIBLE_THRESHOLD {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_style(palette.glow_border(bearing, intensity));
        }
    }
}
