use std::borrow::Cow;

use ratatui::{style::Style, text::Text};

use crate::domain::text;

/// Text wrapped to a width and cut to a height, ending in `...` when cut
#[derive(Clone, Debug, Default)]
pub struct ShrinkText<'a> {
    pub content: Cow<'a, str>,
    pub width: usize,
    pub max_height: usize,
    pub style: Style,
}

impl<'a> ShrinkText<'a> {
    pub fn new<T>(content: T, width: usize, max_height: usize) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Self {
            content: content.into(),
            width,
            max_height,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn shrunk(&self) -> String {
        text::truncate_text(&text::wrap_text(&self.content, self.width), self.max_height)
    }

    /// Rows the shrunk text occupies
    pub fn height(&self) -> usize {
        let shrunk = self.shrunk();
        if shrunk.is_empty() {
            0
        } else {
            shrunk.lines().count()
        }
    }
}

impl<'a> From<ShrinkText<'a>> for Text<'a> {
    fn from(value: ShrinkText) -> Self {
        Text::styled(value.shrunk(), value.style)
    }
}
