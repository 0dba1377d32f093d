use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Layout used to present the testimonials
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case", from = "String")]
#[strum(serialize_all = "kebab-case")]
pub enum WidgetType {
    Wall,
    Masonry,
    Carousel,
    #[default]
    Single,
    List,
    Floating,
    Featured,
    Awards,
    InfiniteScroll,
}

impl WidgetType {
    /// Layout used for any type name we do not recognize
    pub const FALLBACK: WidgetType = WidgetType::Single;

    pub fn parse_lenient(s: &str) -> Self {
        s.trim().parse().unwrap_or_else(|_| {
            log::warn!("Unknown widget type {s:?}, falling back to {}", Self::FALLBACK);
            Self::FALLBACK
        })
    }

    pub fn cycle_next(self) -> Self {
        cycle(self)
    }
}

impl From<String> for WidgetType {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase", from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Auto,
}

impl Theme {
    pub fn cycle_next(self) -> Self {
        cycle(self)
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase", from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum AnimationStyle {
    #[default]
    None,
    Fade,
    Slide,
    Scale,
    Bounce,
}

impl From<String> for AnimationStyle {
    fn from(value: String) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: T) -> T {
    let all: Vec<T> = T::iter().collect();
    let position = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(position + 1) % all.len()]
}

/// Display settings of a widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub theme: Theme,
    pub animation_style: AnimationStyle,
    pub autoplay: bool,
    /// Zero or negative shows nothing.
    pub max_testimonials: i64,
    pub show_ratings: bool,
    pub show_avatars: bool,
    pub show_company: bool,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            animation_style: AnimationStyle::Fade,
            autoplay: true,
            max_testimonials: 9,
            show_ratings: true,
            show_avatars: true,
            show_company: true,
        }
    }
}

/// A configured testimonial display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub widget_type: WidgetType,
    #[serde(default)]
    pub settings: WidgetSettings,
}

fn default_name() -> String {
    String::from("Testimonials")
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            widget_type: WidgetType::default(),
            settings: WidgetSettings::default(),
        }
    }
}

impl WidgetConfig {
    pub fn new(widget_type: WidgetType) -> Self {
        Self {
            widget_type,
            ..Default::default()
        }
    }

    pub fn with_settings(mut self, settings: WidgetSettings) -> Self {
        self.settings = settings;
        self
    }
}
