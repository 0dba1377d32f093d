//! List: borderless entries separated by rules, with dates.

use ratatui::{prelude::*, widgets::Borders};

use super::{stack_cards, LayoutContext};

pub const DIVIDER: &str = "─";

pub fn render(ctx: &LayoutContext, area: Rect, buf: &mut Buffer) {
    let cards = ctx
        .displayed()
        .iter()
        .enumerate()
        .map(|(index, t)| ctx.card(t, index).borders(Borders::NONE).show_date(true))
        .collect();

    for drawn in stack_cards(cards, area, buf) {
        // the gap row below each entry holds the divider
        let y = drawn.bottom();
        if y < area.bottom() {
            buf.set_string(
                area.x,
                y,
                DIVIDER.repeat(area.width as usize),
                ctx.palette.border,
            );
        }
    }
}
