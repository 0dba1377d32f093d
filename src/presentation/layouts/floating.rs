//! Floating: up to six bubbles scattered over the area; hovering one shows
//! its testimonial in a tooltip.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::LayoutContext;
use crate::{
    domain::{selection, testimonial::Testimonial},
    presentation::{
        hit_map::{HitMap, HitTarget},
        widgets::testimonial_card::CardSize,
    },
};

/// Bubble anchors as percentages of the area, left and top
pub const POSITIONS: [(u16, u16); selection::FLOATING_LIMIT] =
    [(5, 10), (55, 5), (30, 40), (70, 45), (10, 70), (60, 75)];

const BUBBLE_HEIGHT: u16 = 3;
const TOOLTIP_MAX_WIDTH: u16 = 36;

fn percent_of(length: u16, percent: u16) -> u16 {
    (u32::from(length) * u32::from(percent) / 100) as u16
}

fn bubble_label(ctx: &LayoutContext, testimonial: &Testimonial) -> Line<'static> {
    let mut spans = vec![];
    if ctx.settings().show_avatars {
        spans.push(Span::styled(
            format!(" {} ", testimonial.initials()),
            ctx.palette.avatar,
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(testimonial.client_name.clone(), ctx.palette.text));
    Line::from(spans)
}

/// Area of the bubble at `slot`, kept inside `area`
pub fn bubble_area(area: Rect, slot: usize, label_width: u16) -> Rect {
    let (left, top) = POSITIONS[slot % POSITIONS.len()];
    let width = (label_width + 4).min(area.width);
    let height = BUBBLE_HEIGHT.min(area.height);
    let x = (area.x + percent_of(area.width, left)).min(area.right() - width);
    let y = (area.y + percent_of(area.height, top)).min(area.bottom() - height);
    Rect::new(x, y, width, height)
}

/// Tooltip placement: below the bubble, or above it when there is no room
fn tooltip_area(area: Rect, bubble: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = bubble.x.min(area.right() - width);
    let y = if bubble.bottom() + height <= area.bottom() {
        bubble.bottom()
    } else if bubble.y >= area.y + height {
        bubble.y - height
    } else {
        area.bottom() - height
    };
    Rect::new(x, y, width, height)
}

pub fn render(ctx: &LayoutContext, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    if area.width < 5 || area.height < BUBBLE_HEIGHT {
        return;
    }
    let hovered = ctx.widget.hovered_id.as_deref();
    let mut tooltip = None;

    for (slot, testimonial) in selection::floating(ctx.displayed()).iter().enumerate() {
        let label = bubble_label(ctx, testimonial);
        let bubble = ctx.reveal(slot).apply(bubble_area(area, slot, label.width() as u16));
        let is_hovered = hovered == Some(testimonial.id.as_str());

        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if is_hovered {
                ctx.palette.accent
            } else {
                ctx.palette.border
            })
            .style(ctx.palette.card);
        Clear.render(bubble, buf);
        Paragraph::new(label.centered()).block(block).render(bubble, buf);
        hits.push(bubble, HitTarget::Bubble(testimonial.id.clone()));

        if is_hovered {
            tooltip = Some((testimonial, bubble));
        }
    }

    // drawn last so it sits above every bubble
    // the tooltip keeps the hover while the pointer is over it
    if let Some((testimonial, bubble)) = tooltip {
        let mut card = ctx.card(testimonial, 0).size(CardSize::Compact);
        card.palette.card = ctx.palette.tooltip;
        card.palette.text = ctx.palette.tooltip;
        card.reveal = Default::default();
        let width = TOOLTIP_MAX_WIDTH.min(area.width);
        let height = card.calculate_height(width);
        let tooltip = tooltip_area(area, bubble, width, height);
        card.render(tooltip, buf);
        hits.push(tooltip, HitTarget::Bubble(testimonial.id.clone()));
    }
}
