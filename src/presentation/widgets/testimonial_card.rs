use ratatui::{prelude::*, widgets::*};

use crate::{
    domain::{testimonial::Testimonial, text, widget::WidgetSettings},
    presentation::{
        animation::Reveal,
        theme::Palette,
        widgets::{shrink_text::ShrinkText, stars::Stars},
    },
};

/// How much of the quote a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    Compact,
    Regular,
    Large,
}

impl CardSize {
    fn max_content_lines(self) -> usize {
        match self {
            CardSize::Compact => 3,
            CardSize::Regular => 6,
            CardSize::Large => 12,
        }
    }
}

/// One testimonial inside a rounded card
#[derive(Clone, Debug)]
pub struct TestimonialCard<'a> {
    pub testimonial: &'a Testimonial,
    pub settings: &'a WidgetSettings,
    pub palette: Palette,
    pub size: CardSize,
    pub reveal: Reveal,
    pub highlight: bool,
    pub show_date: bool,
    pub borders: Borders,
    pub title: Option<String>,
    pub padding: Padding,
}

impl<'a> TestimonialCard<'a> {
    pub fn new(testimonial: &'a Testimonial, settings: &'a WidgetSettings, palette: Palette) -> Self {
        Self {
            testimonial,
            settings,
            palette,
            size: CardSize::Regular,
            reveal: Reveal::default(),
            highlight: false,
            show_date: false,
            borders: Borders::ALL,
            title: None,
            padding: Padding::horizontal(1),
        }
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn reveal(mut self, reveal: Reveal) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn show_date(mut self, show_date: bool) -> Self {
        self.show_date = show_date;
        self
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Formatted creation date, when known
    pub fn created_at(&self) -> Option<String> {
        self.testimonial
            .created_at
            .map(|created_at| created_at.format("%b %-d, %Y").to_string())
    }

    fn border_cells(&self, sides: [Borders; 2]) -> u16 {
        sides.iter().filter(|side| self.borders.contains(**side)).count() as u16
    }

    fn content_width(&self, width: u16) -> usize {
        let chrome = self.border_cells([Borders::LEFT, Borders::RIGHT]) + self.padding.left + self.padding.right;
        width.saturating_sub(chrome) as usize
    }

    fn content(&self, width: u16) -> ShrinkText<'static> {
        ShrinkText::new(
            text::quote(&self.testimonial.content),
            self.content_width(width),
            self.size.max_content_lines(),
        )
        .style(self.palette.text)
    }

    fn author_line(&self) -> Line<'static> {
        let mut spans = vec![];
        if self.settings.show_avatars {
            spans.push(Span::styled(
                format!(" {} ", self.testimonial.initials()),
                self.palette.avatar,
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            self.testimonial.client_name.clone(),
            self.palette.text.add_modifier(Modifier::BOLD),
        ));
        Line::from(spans)
    }

    fn footer_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![];
        if self.settings.show_company {
            if let Some(attribution) = self.testimonial.attribution() {
                lines.push(Line::styled(attribution, self.palette.muted));
            }
        }
        if self.show_date {
            if let Some(date) = self.created_at() {
                lines.push(Line::styled(date, self.palette.muted));
            }
        }
        lines
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![];
        if self.settings.show_ratings {
            lines.push(
                Stars::new(
                    self.testimonial.clamped_rating(),
                    self.palette.star,
                    self.palette.star_empty,
                )
                .into(),
            );
        }
        let content: Text = self.content(width).into();
        lines.extend(content.lines);
        lines.push(Line::default());
        lines.push(self.author_line());
        lines.extend(self.footer_lines());
        lines
    }

    /// Rows the card needs at `width`, borders included
    pub fn calculate_height(&self, width: u16) -> u16 {
        let rows = self.lines(width).len() as u16;
        rows + self.border_cells([Borders::TOP, Borders::BOTTOM]) + self.padding.top + self.padding.bottom
    }
}

impl Widget for TestimonialCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = self.reveal.apply(area);
        if area.width < 3 || area.height == 0 {
            return;
        }

        let border = if self.highlight {
            self.palette.accent
        } else {
            self.palette.border
        };
        let mut block = Block::new()
            .borders(self.borders)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(self.palette.card)
            .padding(self.padding);
        if let Some(title) = self.title.clone() {
            block = block.title(Span::styled(title, self.palette.muted));
        }

        let mut paragraph = Paragraph::new(self.lines(area.width)).block(block);
        if self.reveal.dim {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
        }

        Clear.render(area, buf);
        paragraph.render(area, buf);
    }
}
