//! Infinite scroll: columns of cards drifting up or down forever.
//!
//! Each column draws its strip once into a scratch buffer and copies the
//! window selected by the tick clock into the frame, so a card crossing the
//! edge is cut cleanly instead of being squeezed.

use ratatui::prelude::*;

use super::{stack_cards, LayoutContext, CARD_GAP};
use crate::{
    domain::selection::{self, ScrollColumn, ScrollDirection, Slot},
    presentation::{animation::Reveal, widgets::testimonial_card::CardSize},
};

/// First strip row shown by `column` after `ticks` ticks.
///
/// The strip repeats every `cycle` rows; columns moving down walk it
/// backwards.
pub fn window_start(cycle: u16, ticks: u64, column: &ScrollColumn) -> u16 {
    if cycle == 0 {
        return 0;
    }
    let cycle = u64::from(cycle);
    let delay = u64::from(column.delay_percent) * cycle / 100;
    let shift = (ticks % cycle + delay) % cycle;
    let start = match column.direction {
        ScrollDirection::Up => shift,
        ScrollDirection::Down => (cycle - shift) % cycle,
    };
    start as u16
}

fn cycle_height(heights: &[u16]) -> u16 {
    heights.iter().map(|h| h + CARD_GAP).sum()
}

pub fn render(ctx: &LayoutContext, area: Rect, buf: &mut Buffer) {
    let extension = selection::cyclic_extension(ctx.displayed(), selection::INFINITE_SLOTS);
    let columns = selection::visible_columns(area.width);
    let column_areas = Layout::horizontal(vec![Constraint::Ratio(1, columns.len() as u32); columns.len()])
        .spacing(1)
        .split(area);

    for (column, column_area) in columns.iter().zip(column_areas.iter()) {
        render_column(ctx, &extension, column, *column_area, buf);
    }
}

fn render_column<'a>(
    ctx: &LayoutContext<'a>,
    extension: &[Slot<'a>],
    column: &ScrollColumn,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.is_empty() {
        return;
    }
    let card = |slot: &Slot<'a>| {
        ctx.card(slot.testimonial, 0)
            .size(CardSize::Compact)
            .reveal(Reveal::default())
    };

    let heights: Vec<u16> = extension
        .iter()
        .map(|slot| card(slot).calculate_height(area.width))
        .collect();
    let cycle = cycle_height(&heights);
    let strip = selection::column_strip(extension, column.direction);

    let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, cycle.saturating_mul(2)));
    scratch.set_style(scratch.area, ctx.palette.background);
    let scratch_area = scratch.area;
    stack_cards(strip.iter().map(card).collect(), scratch_area, &mut scratch);

    let start = window_start(cycle, ctx.widget.ticks, column);
    for row in 0..area.height {
        let source_y = start + row;
        for x in 0..area.width {
            if let (Some(source), Some(target)) = (
                scratch.cell((x, source_y)),
                buf.cell_mut((area.x + x, area.y + row)),
            ) {
                *target = source.clone();
            }
        }
    }

    // soften the edges the cards scroll through
    let fade = Style::default().add_modifier(Modifier::DIM);
    buf.set_style(Rect { height: 1, ..area }, fade);
    buf.set_style(
        Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        },
        fade,
    );
}
