use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named style overrides, e.g. `"star": "bold yellow"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| (name, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parse `"bold underline red on black"` style descriptions.
///
/// Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let (foreground, background) = line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replace("on ", ""));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style.add_modifier(foreground.1 | background.1)
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let color = color_str
        .replace("grey", "gray")
        .replace("bright ", "")
        .replace("bold ", "")
        .replace("underline ", "")
        .replace("inverse ", "")
        .replace("italic ", "")
        .replace("dim ", "");

    let mut modifiers = Modifier::empty();
    if color_str.contains("underline") {
        modifiers |= Modifier::UNDERLINED;
    }
    if color_str.contains("bold") {
        modifiers |= Modifier::BOLD;
    }
    if color_str.contains("inverse") {
        modifiers |= Modifier::REVERSED;
    }
    if color_str.contains("italic") {
        modifiers |= Modifier::ITALIC;
    }
    if color_str.contains("dim") {
        modifiers |= Modifier::DIM;
    }

    (color, modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let value = u32::from_str_radix(hex, 16).ok()?;
            return Some(Color::from_u32(value));
        }
        return None;
    }
    if let Some(index) = s.strip_prefix("color") {
        return index.parse::<u8>().ok().map(Color::Indexed);
    }
    s.parse::<Color>().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_default() {
        assert_eq!(parse_style(""), Style::default());
    }

    #[test]
    fn test_parse_style_foreground() {
        assert_eq!(parse_style("red"), Style::default().fg(Color::Red));
    }

    #[test]
    fn test_parse_style_background() {
        assert_eq!(parse_style("on blue"), Style::default().bg(Color::Blue));
    }

    #[test]
    fn test_parse_style_modifiers() {
        assert_eq!(
            parse_style("bold underline yellow on black"),
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        );
    }

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("#facc15"), Some(Color::Rgb(250, 204, 21)));
        assert_eq!(parse_color("color42"), Some(Color::Indexed(42)));
        assert_eq!(parse_color("gray"), Some(Color::Gray));
        assert_eq!(parse_color("nonsense"), None);
    }

    #[test]
    fn test_deserialize_styles() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ "star": "bold yellow" }"#)?;
        assert_eq!(
            styles.get("star"),
            Some(&Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        );
        Ok(())
    }
}
