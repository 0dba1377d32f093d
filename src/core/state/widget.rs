use crate::{
    core::{cmd::Cmd, msg::widget::WidgetMsg},
    domain::{
        carousel::Carousel,
        selection::{self, FeaturedSplit},
        testimonial::Testimonial,
        widget::{WidgetConfig, WidgetType},
    },
};

/// Identity of the autoplay timer the current state asks for.
///
/// The runtime keeps at most one timer alive and replaces it whenever this
/// key changes; `generation` increases with every change so ticks from a
/// replaced timer can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplayKey {
    pub widget_type: WidgetType,
    pub autoplay: bool,
    pub count: usize,
    pub generation: u64,
}

impl AutoplayKey {
    pub fn armed(&self) -> bool {
        self.widget_type == WidgetType::Carousel && self.autoplay && Carousel::has_controls(self.count)
    }
}

/// Widget configuration, its testimonials and the ephemeral UI state of one
/// widget instance
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    pub config: WidgetConfig,
    pub testimonials: Vec<Testimonial>,
    pub carousel: Carousel,
    pub hovered_id: Option<String>,
    pub featured_id: Option<String>,
    /// Animation clock, advanced by the runtime tick
    pub ticks: u64,
    /// Tick at which the visible cards were last (re)presented
    pub reveal_origin: u64,
    pub autoplay_generation: u64,
}

impl WidgetState {
    pub fn new(config: WidgetConfig, testimonials: Vec<Testimonial>) -> Self {
        Self {
            config,
            testimonials,
            ..Default::default()
        }
    }

    /// Testimonials actually shown: a prefix of at most `max_testimonials`
    pub fn displayed(&self) -> &[Testimonial] {
        selection::displayed(&self.testimonials, self.config.settings.max_testimonials)
    }

    pub fn display_count(&self) -> usize {
        self.displayed().len()
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current(self.display_count())
    }

    pub fn featured(&self) -> Option<FeaturedSplit<'_>> {
        selection::featured_split(self.displayed(), self.featured_id.as_deref())
    }

    /// Ticks since the visible cards were presented
    pub fn reveal_elapsed(&self) -> u64 {
        self.ticks.saturating_sub(self.reveal_origin)
    }

    pub fn autoplay_key(&self) -> AutoplayKey {
        AutoplayKey {
            widget_type: self.config.widget_type,
            autoplay: self.config.settings.autoplay,
            count: self.display_count(),
            generation: self.autoplay_generation,
        }
    }

    fn timer_inputs(&self) -> (WidgetType, bool, usize) {
        (
            self.config.widget_type,
            self.config.settings.autoplay,
            self.display_count(),
        )
    }

    fn restart_reveal(&mut self) {
        self.reveal_origin = self.ticks;
    }

    /// Widget-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: WidgetMsg) -> Vec<Cmd> {
        let before = self.timer_inputs();
        let cmds = self.apply(msg);
        if self.timer_inputs() != before {
            self.autoplay_generation += 1;
        }
        cmds
    }

    fn apply(&mut self, msg: WidgetMsg) -> Vec<Cmd> {
        let len = self.display_count();
        let is_carousel = self.config.widget_type == WidgetType::Carousel;
        let is_floating = self.config.widget_type == WidgetType::Floating;

        match msg {
            WidgetMsg::Next if is_carousel && Carousel::has_controls(len) => {
                self.carousel.next(len);
                self.restart_reveal();
                vec![]
            }

            WidgetMsg::Previous if is_carousel && Carousel::has_controls(len) => {
                self.carousel.previous(len);
                self.restart_reveal();
                vec![]
            }

            WidgetMsg::GoTo(index) if is_carousel && index < len => {
                if index != self.current_index() {
                    self.carousel.go_to(index, len);
                    self.restart_reveal();
                }
                vec![]
            }

            WidgetMsg::AutoplayTick { generation } => {
                let key = self.autoplay_key();
                if generation == key.generation && key.armed() {
                    self.carousel.next(len);
                    self.restart_reveal();
                } else {
                    log::debug!(
                        "Dropping autoplay tick of generation {generation} (current {})",
                        key.generation
                    );
                }
                vec![]
            }

            WidgetMsg::Next | WidgetMsg::Previous | WidgetMsg::GoTo(_) => vec![],

            WidgetMsg::HoverEnter(id) if is_floating => {
                if selection::floating(self.displayed()).iter().any(|t| t.id == id) {
                    self.hovered_id = Some(id);
                }
                vec![]
            }

            WidgetMsg::HoverLeave(id) => {
                if self.hovered_id.as_deref() == Some(id.as_str()) {
                    self.hovered_id = None;
                }
                vec![]
            }

            WidgetMsg::HoverCycle if is_floating => {
                let bubbles = selection::floating(self.displayed());
                let next = match &self.hovered_id {
                    Some(current) => bubbles
                        .iter()
                        .position(|t| &t.id == current)
                        .map(|i| (i + 1) % bubbles.len())
                        .unwrap_or(0),
                    None => 0,
                };
                self.hovered_id = bubbles.get(next).map(|t| t.id.clone());
                vec![]
            }

            WidgetMsg::HoverEnter(_) | WidgetMsg::HoverCycle => vec![],

            WidgetMsg::HoverClear => {
                self.hovered_id = None;
                vec![]
            }

            WidgetMsg::Promote(id) => {
                self.promote(id);
                vec![]
            }

            WidgetMsg::PromoteAlternate(slot) => {
                let target = self
                    .featured()
                    .and_then(|split| split.alternates.get(slot).map(|t| t.id.clone()));
                if let Some(id) = target {
                    self.promote(id);
                }
                vec![]
            }

            WidgetMsg::ToggleAutoplay => {
                self.config.settings.autoplay = !self.config.settings.autoplay;
                vec![Cmd::log_info(format!(
                    "Autoplay {}",
                    if self.config.settings.autoplay { "enabled" } else { "disabled" }
                ))]
            }

            WidgetMsg::CycleLayout => {
                let next = self.config.widget_type.cycle_next();
                self.set_layout(next)
            }

            WidgetMsg::SetLayout(widget_type) => self.set_layout(widget_type),

            WidgetMsg::CycleTheme => {
                self.config.settings.theme = self.config.settings.theme.cycle_next();
                vec![]
            }

            WidgetMsg::ReplaceConfig(config) => {
                self.config = config;
                self.hovered_id = None;
                self.restart_reveal();
                vec![]
            }

            WidgetMsg::ReplaceTestimonials(testimonials) => {
                self.testimonials = testimonials;
                if let Some(hovered) = &self.hovered_id {
                    if !selection::floating(self.displayed()).iter().any(|t| &t.id == hovered) {
                        self.hovered_id = None;
                    }
                }
                self.restart_reveal();
                vec![]
            }

            WidgetMsg::AnimationTick => {
                self.ticks = self.ticks.wrapping_add(1);
                vec![]
            }
        }
    }

    fn promote(&mut self, id: String) {
        if self.config.widget_type != WidgetType::Featured {
            return;
        }
        let current = self.featured().map(|split| split.featured.id.clone());
        if current.as_deref() == Some(id.as_str()) {
            return;
        }
        if self.displayed().iter().any(|t| t.id == id) {
            self.featured_id = Some(id);
            self.restart_reveal();
        }
    }

    fn set_layout(&mut self, widget_type: WidgetType) -> Vec<Cmd> {
        self.config.widget_type = widget_type;
        self.hovered_id = None;
        self.restart_reveal();
        vec![Cmd::log_info(format!("Layout switched to {widget_type}"))]
    }
}
