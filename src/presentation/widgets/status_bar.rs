use ratatui::{prelude::*, widgets::Paragraph};
use thousands::Separable;

use crate::domain::widget::WidgetConfig;

/// Two status rows below the widget: what is shown, and the last message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarWidget<'a> {
    pub widget: &'a WidgetConfig,
    pub shown: usize,
    pub total: usize,
    pub message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(widget: &'a WidgetConfig, shown: usize, total: usize, message: Option<&'a str>) -> Self {
        Self {
            widget,
            shown,
            total,
            message,
        }
    }

    pub fn summary(&self) -> String {
        let autoplay = if self.widget.settings.autoplay {
            " · autoplay"
        } else {
            ""
        };
        format!(
            "{} · {} · {}{autoplay}",
            self.widget.name, self.widget.widget_type, self.widget.settings.theme
        )
    }

    pub fn counts(&self) -> String {
        format!(
            "{}/{} shown",
            self.shown.separate_with_commas(),
            self.total.separate_with_commas()
        )
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),    // Main content area (not used by status bar)
                Constraint::Length(1), // Widget info line
                Constraint::Length(1), // Status message line
            ],
        )
        .split(area);

        let counts = self.counts();
        let [summary_area, counts_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(counts.chars().count() as u16 + 1),
        ])
        .areas(layout[1]);

        let info_style = Style::default().bg(Color::Black);
        Paragraph::new(Span::styled(
            self.summary(),
            Style::default().fg(Color::Gray).italic(),
        ))
        .style(info_style)
        .render(summary_area, buf);
        Paragraph::new(Span::styled(counts, Style::default().fg(Color::Gray)))
            .style(info_style)
            .render(counts_area, buf);

        // Render status message line
        let message = self.message.unwrap_or_default().to_string();
        Paragraph::new(message).render(layout[2], buf);
    }
}
