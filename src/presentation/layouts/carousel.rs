//! Carousel: one slide with previous/next controls and dot indicators.

use ratatui::{prelude::*, widgets::Paragraph};

use super::{centered, LayoutContext};
use crate::{
    domain::carousel::Carousel,
    presentation::{
        hit_map::{HitMap, HitTarget},
        widgets::testimonial_card::CardSize,
    },
};

pub const PREVIOUS: &str = " ‹ ";
pub const NEXT: &str = " › ";
pub const DOT_CURRENT: &str = "●";
pub const DOT: &str = "○";

const SLIDE_MAX_WIDTH: u16 = 72;

pub fn render(ctx: &LayoutContext, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
    let list = ctx.displayed();
    let index = ctx.widget.current_index();
    let Some(testimonial) = list.get(index) else {
        return;
    };
    let controls = Carousel::has_controls(list.len());

    let [slide_area, controls_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(if controls { 1 } else { 0 }),
    ])
    .areas(area);

    let card = ctx.card(testimonial, 0).size(CardSize::Large);
    let width = slide_area.width.min(SLIDE_MAX_WIDTH);
    let height = card.calculate_height(width);
    card.render(centered(slide_area, width, height), buf);

    if controls {
        render_controls(ctx, list.len(), index, controls_area, buf, hits);
    }
}

fn render_controls(
    ctx: &LayoutContext,
    len: usize,
    current: usize,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    let button = ctx.palette.accent;
    let arrow_width = PREVIOUS.chars().count() as u16;

    let previous = Rect::new(area.x, area.y, arrow_width.min(area.width), area.height);
    let next = Rect::new(
        area.right().saturating_sub(arrow_width).max(area.x),
        area.y,
        arrow_width.min(area.width),
        area.height,
    );
    Paragraph::new(Span::styled(PREVIOUS, button)).render(previous, buf);
    Paragraph::new(Span::styled(NEXT, button)).render(next, buf);
    hits.push(previous, HitTarget::Previous);
    hits.push(next, HitTarget::Next);

    // dots are two cells apart; fall back to a counter when they do not fit
    let dots_width = (len * 2).saturating_sub(1);
    let room = area.width.saturating_sub(arrow_width * 2 + 2) as usize;
    if dots_width > room {
        let counter = format!("{}/{}", current + 1, len);
        let counter_area = centered(area, counter.chars().count() as u16, 1);
        Paragraph::new(Span::styled(counter, ctx.palette.muted)).render(counter_area, buf);
        return;
    }

    let dots_area = centered(area, dots_width as u16, 1);
    for i in 0..len {
        let (symbol, style) = if i == current {
            (DOT_CURRENT, ctx.palette.accent)
        } else {
            (DOT, ctx.palette.muted)
        };
        let dot = Rect::new(dots_area.x + (i as u16) * 2, dots_area.y, 1, 1);
        buf.set_string(dot.x, dot.y, symbol, style);
        hits.push(dot, HitTarget::Dot(i));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::state::WidgetState,
        domain::{
            testimonial::Testimonial,
            widget::{WidgetConfig, WidgetType},
        },
        presentation::config::Styles,
    };

    fn widget(n: usize) -> WidgetState {
        let testimonials = (0..n)
            .map(|i| Testimonial::new(format!("t{i}"), 5, format!("Quote {i}"), "Ann Lee"))
            .collect();
        WidgetState::new(WidgetConfig::new(WidgetType::Carousel), testimonials)
    }

    fn draw(widget: &WidgetState, width: u16, height: u16) -> (Buffer, HitMap) {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();
        let ctx = LayoutContext::new(widget, &Styles::default());
        render(&ctx, area, &mut buf, &mut hits);
        (buf, hits)
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_controls_and_dots() {
        let widget = widget(3);
        let (buf, hits) = draw(&widget, 60, 12);

        let controls = row(&buf, 11);
        assert!(controls.starts_with(" ‹ "));
        assert!(controls.ends_with(" › "));
        assert!(controls.contains("● ○ ○"));

        let targets: Vec<&HitTarget> = hits.targets().collect();
        assert_eq!(
            targets,
            vec![
                &HitTarget::Previous,
                &HitTarget::Next,
                &HitTarget::Dot(0),
                &HitTarget::Dot(1),
                &HitTarget::Dot(2),
            ]
        );
    }

    #[test]
    fn test_single_slide_has_no_controls() {
        let widget = widget(1);
        let (buf, hits) = draw(&widget, 60, 12);

        assert!(hits.is_empty());
        assert!(!row(&buf, 11).contains('‹'));
    }

    #[test]
    fn test_shows_current_slide() {
        let mut widget = widget(3);
        widget.carousel.go_to(2, 3);
        let (buf, _) = draw(&widget, 60, 12);

        let screen: String = (0..12).map(|y| row(&buf, y)).collect();
        assert!(screen.contains("Quote 2"));
        assert!(!screen.contains("Quote 0"));
        assert!(row(&buf, 11).contains("○ ○ ●"));
    }

    #[test]
    fn test_counter_when_dots_do_not_fit() {
        let widget = widget(20);
        let (buf, hits) = draw(&widget, 30, 12);

        assert!(row(&buf, 11).contains("1/20"));
        assert!(!hits.targets().any(|t| matches!(t, HitTarget::Dot(_))));
    }
}
