use serde::{Deserialize, Serialize};

use crate::domain::{
    testimonial::Testimonial,
    widget::{WidgetConfig, WidgetType},
};

/// Messages specific to WidgetState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetMsg {
    // Carousel navigation
    Next,
    Previous,
    GoTo(usize),
    /// Emitted by the autoplay timer armed for `generation`
    AutoplayTick { generation: u64 },

    // Floating bubbles
    HoverEnter(String),
    HoverLeave(String),
    HoverCycle,
    HoverClear,

    // Featured spotlight
    Promote(String),
    /// Promote the n-th alternate currently on screen
    PromoteAlternate(usize),

    // Widget configuration
    ToggleAutoplay,
    CycleLayout,
    CycleTheme,
    SetLayout(WidgetType),
    ReplaceConfig(WidgetConfig),
    ReplaceTestimonials(Vec<Testimonial>),

    /// Animation clock
    AnimationTick,
}

impl WidgetMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, WidgetMsg::AnimationTick)
    }
}
