use ratatui::prelude::*;

use crate::domain::rating::{self, Star, MAX_STARS};

pub const FILLED: &str = "★";
pub const EMPTY: &str = "☆";

/// Five star slots, filled up to the rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars {
    rating: u8,
    filled: Style,
    empty: Style,
}

impl Stars {
    pub fn new(rating: u8, filled: Style, empty: Style) -> Self {
        Self {
            rating,
            filled,
            empty,
        }
    }
}

impl From<Stars> for Line<'static> {
    fn from(value: Stars) -> Self {
        rating::stars(value.rating, MAX_STARS)
            .into_iter()
            .map(|star| match star {
                Star::Filled => Span::styled(FILLED, value.filled),
                Star::Empty => Span::styled(EMPTY, value.empty),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0, "☆☆☆☆☆")]
    #[case(3, "★★★☆☆")]
    #[case(5, "★★★★★")]
    #[case(9, "★★★★★")]
    fn test_stars_line(#[case] rating: u8, #[case] expected: &str) {
        let line: Line = Stars::new(rating, Style::default(), Style::default()).into();
        assert_eq!(line.to_string(), expected);
    }

    #[test]
    fn test_stars_styles() {
        let filled = Style::default().fg(Color::Yellow);
        let empty = Style::default().fg(Color::Gray);
        let line: Line = Stars::new(1, filled, empty).into();
        assert_eq!(line.spans[0].style, filled);
        assert_eq!(line.spans[4].style, empty);
    }
}
