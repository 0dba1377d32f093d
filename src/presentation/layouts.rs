//! Presentation selector
//!
//! Chooses one of the nine testimonial layouts from the widget type and draws
//! it. Every layout records the interactive regions it drew in a [`HitMap`],
//! which the translator uses to resolve pointer events.

use ratatui::prelude::*;

use crate::{
    core::state::WidgetState,
    domain::{testimonial::Testimonial, widget::{WidgetSettings, WidgetType}},
    presentation::{
        animation::Reveal,
        config::Styles,
        hit_map::HitMap,
        theme::Palette,
        widgets::testimonial_card::TestimonialCard,
    },
};

pub mod awards;
pub mod carousel;
pub mod empty;
pub mod featured;
pub mod floating;
pub mod infinite_scroll;
pub mod list;
pub mod single;
pub mod wall;

/// Rows left empty between stacked cards
pub const CARD_GAP: u16 = 1;

/// Everything a layout needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub widget: &'a WidgetState,
    pub palette: Palette,
}

impl<'a> LayoutContext<'a> {
    pub fn new(widget: &'a WidgetState, styles: &Styles) -> Self {
        Self {
            widget,
            palette: Palette::for_theme(widget.config.settings.theme).with_overrides(styles),
        }
    }

    pub fn settings(&self) -> &'a WidgetSettings {
        &self.widget.config.settings
    }

    pub fn displayed(&self) -> &'a [Testimonial] {
        self.widget.displayed()
    }

    /// Entrance state of the `index`-th card on screen
    pub fn reveal(&self, index: usize) -> Reveal {
        Reveal::compute(
            self.settings().animation_style,
            self.widget.reveal_elapsed(),
            index,
        )
    }

    pub fn card(&self, testimonial: &'a Testimonial, index: usize) -> TestimonialCard<'a> {
        TestimonialCard::new(testimonial, self.settings(), self.palette).reveal(self.reveal(index))
    }
}

/// Draw the widget into `area` and return its interactive regions.
pub fn render(widget: &WidgetState, styles: &Styles, area: Rect, buf: &mut Buffer) -> HitMap {
    let ctx = LayoutContext::new(widget, styles);
    let mut hits = HitMap::default();
    buf.set_style(area, ctx.palette.background);

    if ctx.displayed().is_empty() {
        empty::render(&ctx, area, buf);
        return hits;
    }

    match widget.config.widget_type {
        WidgetType::Wall => wall::render(&ctx, area, buf, wall::Flow::Balanced),
        WidgetType::Masonry => wall::render(&ctx, area, buf, wall::Flow::ShortestColumn),
        WidgetType::Carousel => carousel::render(&ctx, area, buf, &mut hits),
        WidgetType::Single => single::render(&ctx, area, buf),
        WidgetType::List => list::render(&ctx, area, buf),
        WidgetType::Floating => floating::render(&ctx, area, buf, &mut hits),
        WidgetType::Featured => featured::render(&ctx, area, buf, &mut hits),
        WidgetType::Awards => awards::render(&ctx, area, buf),
        WidgetType::InfiniteScroll => infinite_scroll::render(&ctx, area, buf),
    }
    hits
}

/// Stack cards top-down in `area`. A card that does not fit entirely is cut
/// at the bottom edge; cards below it are not drawn. Returns the drawn areas.
pub fn stack_cards(cards: Vec<TestimonialCard<'_>>, area: Rect, buf: &mut Buffer) -> Vec<Rect> {
    let mut drawn = vec![];
    let mut y = area.y;
    for card in cards {
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let height = card.calculate_height(area.width).min(remaining);
        let card_area = Rect::new(area.x, y, area.width, height);
        card.render(card_area, buf);
        drawn.push(card_area);
        y = y.saturating_add(height + CARD_GAP);
    }
    drawn
}

/// A `width` x `height` rectangle centered in `area`, clamped to it
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::widget::WidgetConfig;

    #[test]
    fn test_centered() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(15, 8, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }

    #[test]
    fn test_stack_cards_stops_at_bottom() {
        let testimonials: Vec<Testimonial> = (0..5)
            .map(|i| Testimonial::new(format!("t{i}"), 5, "Short", "Ann"))
            .collect();
        let settings = WidgetSettings::default();
        let palette = Palette::for_theme(Default::default());
        let cards = testimonials
            .iter()
            .map(|t| TestimonialCard::new(t, &settings, palette))
            .collect();
        let area = Rect::new(0, 0, 30, 16);
        let mut buf = Buffer::empty(area);

        let drawn = stack_cards(cards, area, &mut buf);

        // 6-row cards with a 1-row gap: two full cards and one cut short
        assert_eq!(
            drawn,
            vec![
                Rect::new(0, 0, 30, 6),
                Rect::new(0, 7, 30, 6),
                Rect::new(0, 14, 30, 2),
            ]
        );
    }

    #[test]
    fn test_empty_list_renders_no_hits() {
        let widget = WidgetState::new(WidgetConfig::new(WidgetType::Carousel), vec![]);
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);

        let hits = render(&widget, &Styles::default(), area, &mut buf);

        assert!(hits.is_empty());
    }
}
