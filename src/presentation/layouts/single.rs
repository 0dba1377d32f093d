//! Single: the first testimonial, large and centered.

use ratatui::prelude::*;

use super::{centered, LayoutContext};
use crate::presentation::widgets::testimonial_card::CardSize;

const MAX_WIDTH: u16 = 80;

pub fn render(ctx: &LayoutContext, area: Rect, buf: &mut Buffer) {
    let Some(testimonial) = ctx.displayed().first() else {
        return;
    };
    let card = ctx.card(testimonial, 0).size(CardSize::Large);
    let width = area.width.min(MAX_WIDTH);
    let height = card.calculate_height(width);
    card.render(centered(area, width, height), buf);
}
