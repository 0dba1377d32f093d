//! Featured: one highlighted testimonial with two selectable alternates.

use ratatui::prelude::*;

use super::{LayoutContext, CARD_GAP};
use crate::presentation::{
    hit_map::{HitMap, HitTarget},
    widgets::testimonial_card::CardSize,
};

/// Narrowest area that puts the alternates beside the featured card
pub const SIDE_BY_SIDE_WIDTH: u16 = 80;

pub fn render(ctx: &LayoutContext, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let Some(split) = ctx.widget.featured() else {
        return;
    };

    let direction = if area.width >= SIDE_BY_SIDE_WIDTH {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let [main_area, side_area] = Layout::new(
        direction,
        [Constraint::Percentage(62), Constraint::Percentage(38)],
    )
    .spacing(CARD_GAP)
    .areas(area);

    let featured = ctx
        .card(split.featured, 0)
        .size(CardSize::Large)
        .highlight(true)
        .title(" Featured ");
    let height = featured.calculate_height(main_area.width).min(main_area.height);
    featured.render(Rect { height, ..main_area }, buf);

    let mut y = side_area.y;
    for (slot, alternate) in split.alternates.into_iter().enumerate() {
        let remaining = side_area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let card = ctx
            .card(alternate, slot + 1)
            .size(CardSize::Compact)
            .title(format!(" [{}] ", slot + 1));
        let height = card.calculate_height(side_area.width).min(remaining);
        let card_area = Rect {
            y,
            height,
            ..side_area
        };
        card.render(card_area, buf);
        hits.push(card_area, HitTarget::Alternate(alternate.id.clone()));
        y = y.saturating_add(height + CARD_GAP);
    }
}
