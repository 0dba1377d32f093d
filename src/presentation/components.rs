//! Frame composition
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{hit_map::HitMap, layouts, widgets::status_bar::StatusBarWidget},
};

/// Draws a whole frame: the widget above a two-row status bar
#[derive(Debug, Default)]
pub struct Components;

impl Components {
    pub fn new() -> Self {
        Self
    }

    /// Render the frame and return the interactive regions of the widget
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) -> HitMap {
        let [widget_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(frame.area());

        let hits = layouts::render(
            &state.widget,
            &state.config.config.styles,
            widget_area,
            frame.buffer_mut(),
        );

        let status_bar = StatusBarWidget::new(
            &state.widget.config,
            state.widget.display_count(),
            state.widget.testimonials.len(),
            state.system.status_message().map(String::as_str),
        );
        frame.render_widget(status_bar, status_area);
        hits
    }
}
