//! Entrance effects for cards, driven by the tick clock.

use ratatui::layout::Rect;

use crate::domain::widget::AnimationStyle;

/// Ticks an entrance effect lasts
pub const REVEAL_TICKS: u64 = 3;

/// Row offsets of the bounce effect, one per tick
const BOUNCE_OFFSETS: [u16; 4] = [2, 0, 1, 0];

/// How a card is drawn at one moment of its entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reveal {
    pub dim: bool,
    /// Rows the card is pushed down
    pub offset: u16,
    /// Cells removed on the left and right
    pub inset: u16,
}

impl Reveal {
    /// Card `index` starts its entrance `index` ticks after the first one.
    pub fn compute(style: AnimationStyle, elapsed: u64, index: usize) -> Self {
        let progress = elapsed.saturating_sub(index as u64);
        let remaining = REVEAL_TICKS.saturating_sub(progress) as u16;

        match style {
            AnimationStyle::None => Self::default(),
            AnimationStyle::Fade => Self {
                dim: remaining > 0,
                ..Default::default()
            },
            AnimationStyle::Slide => Self {
                offset: remaining,
                ..Default::default()
            },
            AnimationStyle::Scale => Self {
                inset: remaining,
                ..Default::default()
            },
            AnimationStyle::Bounce => {
                let step = usize::try_from(progress)
                    .unwrap_or(usize::MAX)
                    .min(BOUNCE_OFFSETS.len() - 1);
                Self {
                    offset: BOUNCE_OFFSETS[step],
                    ..Default::default()
                }
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        *self == Self::default()
    }

    /// Area the card occupies at this moment
    pub fn apply(&self, area: Rect) -> Rect {
        let offset = self.offset.min(area.height);
        let inset = self.inset.min(area.width / 2);
        Rect {
            x: area.x + inset,
            y: area.y + offset,
            width: area.width - inset * 2,
            height: area.height - offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(AnimationStyle::None, 0)]
    #[case(AnimationStyle::Fade, 3)]
    #[case(AnimationStyle::Slide, 3)]
    #[case(AnimationStyle::Scale, 3)]
    #[case(AnimationStyle::Bounce, 3)]
    fn test_effects_settle(#[case] style: AnimationStyle, #[case] settle_at: u64) {
        if settle_at > 0 {
            assert!(!Reveal::compute(style, settle_at - 1, 0).is_settled());
        }
        assert!(Reveal::compute(style, settle_at, 0).is_settled());
        assert!(Reveal::compute(style, settle_at + 10, 0).is_settled());
    }

    #[test]
    fn test_stagger_delays_later_cards() {
        assert_eq!(Reveal::compute(AnimationStyle::Slide, 2, 0).offset, 1);
        assert_eq!(Reveal::compute(AnimationStyle::Slide, 2, 2).offset, 3);
        assert!(Reveal::compute(AnimationStyle::Fade, 4, 2).dim);
        assert!(!Reveal::compute(AnimationStyle::Fade, 5, 2).dim);
    }

    #[test]
    fn test_bounce_overshoots_once() {
        let offsets: Vec<u16> = (0..5)
            .map(|tick| Reveal::compute(AnimationStyle::Bounce, tick, 0).offset)
            .collect();
        assert_eq!(offsets, vec![2, 0, 1, 0, 0]);
    }

    #[test]
    fn test_apply_clamps_to_area() {
        let area = Rect::new(0, 0, 4, 2);
        let reveal = Reveal {
            dim: false,
            offset: 5,
            inset: 5,
        };
        assert_eq!(reveal.apply(area), Rect::new(2, 2, 0, 0));
    }
}
