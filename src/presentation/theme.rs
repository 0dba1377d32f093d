//! Colors of the three widget themes

use ratatui::style::{Color, Modifier, Style};

use crate::{domain::widget::Theme, presentation::config::Styles};

const GRAY_50: Color = Color::Rgb(249, 250, 251);
const GRAY_200: Color = Color::Rgb(229, 231, 235);
const GRAY_400: Color = Color::Rgb(156, 163, 175);
const GRAY_500: Color = Color::Rgb(107, 114, 128);
const GRAY_700: Color = Color::Rgb(55, 65, 81);
const GRAY_800: Color = Color::Rgb(31, 41, 55);
const GRAY_900: Color = Color::Rgb(17, 24, 39);
const YELLOW_400: Color = Color::Rgb(250, 204, 21);
const BLUE_500: Color = Color::Rgb(59, 130, 246);
const BLUE_600: Color = Color::Rgb(37, 99, 235);
const AMBER_500: Color = Color::Rgb(245, 158, 11);

/// Resolved styles for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Style,
    pub card: Style,
    pub border: Style,
    pub text: Style,
    pub muted: Style,
    pub accent: Style,
    pub star: Style,
    pub star_empty: Style,
    pub avatar: Style,
    pub tooltip: Style,
    pub trophy: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Style::default().bg(GRAY_900),
                card: Style::default().fg(Color::White).bg(GRAY_800),
                border: Style::default().fg(GRAY_700),
                text: Style::default().fg(Color::White),
                muted: Style::default().fg(GRAY_400),
                ..Self::light(GRAY_900)
            },
            // auto follows the light palette with a softer page color
            Theme::Auto => Self::light(GRAY_50),
            Theme::Default => Self::light(Color::White),
        }
    }

    fn light(page: Color) -> Self {
        Self {
            background: Style::default().bg(page),
            card: Style::default().fg(GRAY_900).bg(Color::White),
            border: Style::default().fg(GRAY_200),
            text: Style::default().fg(GRAY_900),
            muted: Style::default().fg(GRAY_500),
            accent: Style::default().fg(BLUE_600).add_modifier(Modifier::BOLD),
            star: Style::default().fg(YELLOW_400),
            star_empty: Style::default().fg(GRAY_400),
            avatar: Style::default()
                .fg(Color::White)
                .bg(BLUE_500)
                .add_modifier(Modifier::BOLD),
            tooltip: Style::default().fg(Color::White).bg(GRAY_900),
            trophy: Style::default().fg(AMBER_500).add_modifier(Modifier::BOLD),
        }
    }

    /// Apply user style overrides by name
    pub fn with_overrides(mut self, styles: &Styles) -> Self {
        let slots: [(&str, &mut Style); 6] = [
            ("star", &mut self.star),
            ("accent", &mut self.accent),
            ("tooltip", &mut self.tooltip),
            ("border", &mut self.border),
            ("avatar", &mut self.avatar),
            ("trophy", &mut self.trophy),
        ];
        for (name, slot) in slots {
            if let Some(style) = styles.get(name) {
                *slot = slot.patch(*style);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dark_theme_background() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(palette.background.bg, Some(GRAY_900));
        assert_eq!(palette.star.fg, Some(YELLOW_400));
    }

    #[test]
    fn test_auto_follows_light_palette() {
        let auto = Palette::for_theme(Theme::Auto);
        let light = Palette::for_theme(Theme::Default);
        assert_eq!(auto.card, light.card);
        assert_eq!(auto.background.bg, Some(GRAY_50));
    }

    #[test]
    fn test_overrides_patch_named_slots() {
        let styles = Styles(HashMap::from([(
            "star".to_string(),
            Style::default().fg(Color::Red),
        )]));
        let palette = Palette::for_theme(Theme::Default).with_overrides(&styles);
        assert_eq!(palette.star.fg, Some(Color::Red));
        assert_eq!(palette.accent, Palette::for_theme(Theme::Default).accent);
    }
}
