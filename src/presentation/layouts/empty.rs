//! Placeholder shown when there is nothing to display.

use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};

use super::{centered, LayoutContext};

pub const MESSAGE: &str = "No testimonials to display.";

const DASHED: border::Set = border::Set {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    vertical_left: "┆",
    vertical_right: "┆",
    horizontal_top: "┄",
    horizontal_bottom: "┄",
};

pub fn render(ctx: &LayoutContext, area: Rect, buf: &mut Buffer) {
    let width = (MESSAGE.len() as u16 + 6).min(area.width);
    let frame = centered(area, width, 5);
    let block = Block::new()
        .borders(Borders::ALL)
        .border_set(DASHED)
        .border_style(ctx.palette.border);
    let inner = block.inner(frame);
    block.render(frame, buf);
    Paragraph::new(Line::styled(MESSAGE, ctx.palette.muted).centered())
        .render(centered(inner, inner.width, 1), buf);
}
