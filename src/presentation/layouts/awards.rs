//! Awards: the first testimonial inside a trophy frame.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

use super::{centered, LayoutContext};
use crate::presentation::widgets::testimonial_card::CardSize;

pub const TITLE: &str = " 🏆 Top Testimonial 🏆 ";
pub const CAPTION: &str = " Customer Choice ";

const MAX_WIDTH: u16 = 76;

pub fn render(ctx: &LayoutContext, area: Rect, buf: &mut Buffer) {
    let Some(testimonial) = ctx.displayed().first() else {
        return;
    };
    let card = ctx.card(testimonial, 0).size(CardSize::Large);
    let width = area.width.min(MAX_WIDTH);
    // frame adds a border and one row of breathing room on each side
    let inner_width = width.saturating_sub(4);
    let height = card.calculate_height(inner_width) + 4;

    let frame = centered(area, width, height);
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(ctx.palette.trophy)
        .title(Line::styled(TITLE, ctx.palette.trophy).centered())
        .title_bottom(Line::styled(CAPTION, ctx.palette.trophy).centered());
    let inner = block.inner(frame);
    block.render(frame, buf);

    let card_area = Rect {
        x: inner.x + 1,
        y: inner.y + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(2),
    };
    card.render(card_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::state::WidgetState,
        domain::{
            testimonial::Testimonial,
            widget::{WidgetConfig, WidgetType},
        },
        presentation::config::Styles,
    };

    #[test]
    fn test_trophy_frame() {
        let widget = WidgetState::new(
            WidgetConfig::new(WidgetType::Awards),
            vec![
                Testimonial::new("a", 5, "Best tool", "Ann Lee"),
                Testimonial::new("b", 5, "Runner up", "Bo Chen"),
            ],
        );
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);

        render(&LayoutContext::new(&widget, &Styles::default()), area, &mut buf);

        let screen: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect();
        let joined = screen.join("\n");
        assert!(joined.contains("Top Testimonial"));
        assert!(joined.contains("Customer Choice"));
        assert!(joined.contains('╔'));
        assert!(joined.contains("Best tool"));
        assert!(!joined.contains("Runner up"));
    }
}
