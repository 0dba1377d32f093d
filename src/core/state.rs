pub mod system;
pub mod widget;

use crate::{
    domain::{testimonial::Testimonial, widget::WidgetConfig},
    infrastructure::config::Config,
};

pub use system::SystemState;
pub use widget::{AutoplayKey, WidgetState};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub widget: WidgetState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState for a widget and its testimonials
    pub fn new(widget: WidgetConfig, testimonials: Vec<Testimonial>) -> Self {
        Self {
            widget: WidgetState::new(widget, testimonials),
            ..Default::default()
        }
    }

    /// Initialize AppState from configuration; the widget comes from `config.widget`
    pub fn new_with_config(config: Config, testimonials: Vec<Testimonial>) -> Self {
        Self {
            widget: WidgetState::new(config.widget.clone(), testimonials),
            config: ConfigState { config },
            ..Default::default()
        }
    }
}
