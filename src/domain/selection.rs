//! Which testimonials a layout shows, and in what arrangement.

use crate::domain::testimonial::Testimonial;

/// Bubbles shown by the floating layout
pub const FLOATING_LIMIT: usize = 6;
/// Small alternates shown next to the featured testimonial
pub const FEATURED_ALTERNATES: usize = 2;
/// Slots filled by cyclic repetition in the infinite scroll layout
pub const INFINITE_SLOTS: usize = 12;

/// Prefix of `testimonials` limited to `max` entries; non-positive `max` shows none.
pub fn displayed(testimonials: &[Testimonial], max: i64) -> &[Testimonial] {
    let limit = usize::try_from(max).unwrap_or(0).min(testimonials.len());
    &testimonials[..limit]
}

/// A testimonial occupying one slot of the infinite scroll strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<'a> {
    pub key: String,
    pub testimonial: &'a Testimonial,
}

/// Repeat `list` cyclically until `slots` entries exist.
pub fn cyclic_extension(list: &[Testimonial], slots: usize) -> Vec<Slot<'_>> {
    if list.is_empty() {
        return vec![];
    }
    (0..slots)
        .map(|i| {
            let testimonial = &list[i % list.len()];
            Slot {
                key: format!("{}-{i}", testimonial.id),
                testimonial,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// One scrolling column of the infinite layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollColumn {
    pub direction: ScrollDirection,
    /// Fraction of a full cycle the column starts ahead, in percent
    pub delay_percent: u8,
    /// Narrowest viewport (in cells) on which the column is shown
    pub min_width: u16,
}

pub const SCROLL_COLUMNS: [ScrollColumn; 3] = [
    ScrollColumn {
        direction: ScrollDirection::Up,
        delay_percent: 0,
        min_width: 0,
    },
    ScrollColumn {
        direction: ScrollDirection::Down,
        delay_percent: 0,
        min_width: 60,
    },
    ScrollColumn {
        direction: ScrollDirection::Up,
        delay_percent: 50,
        min_width: 100,
    },
];

/// Columns visible at a given viewport width
pub fn visible_columns(width: u16) -> Vec<ScrollColumn> {
    SCROLL_COLUMNS
        .iter()
        .filter(|column| width >= column.min_width)
        .copied()
        .collect()
}

/// The strip a column scrolls through: the extension twice over, reversed
/// for columns moving down.
pub fn column_strip<'a>(extension: &[Slot<'a>], direction: ScrollDirection) -> Vec<Slot<'a>> {
    let mut doubled: Vec<Slot<'a>> = extension.iter().chain(extension.iter()).cloned().collect();
    if direction == ScrollDirection::Down {
        doubled.reverse();
    }
    doubled
}

/// Featured testimonial and its alternates.
///
/// `featured_id` is resolved against the current list on every call; an id
/// that is no longer displayed selects the first testimonial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedSplit<'a> {
    pub featured_index: usize,
    pub featured: &'a Testimonial,
    pub alternates: Vec<&'a Testimonial>,
}

pub fn featured_split<'a>(
    list: &'a [Testimonial],
    featured_id: Option<&str>,
) -> Option<FeaturedSplit<'a>> {
    let featured_index = featured_id
        .and_then(|id| list.iter().position(|t| t.id == id))
        .unwrap_or(0);
    let featured = list.get(featured_index)?;
    let alternates = list
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != featured_index)
        .map(|(_, t)| t)
        .take(FEATURED_ALTERNATES)
        .collect();

    Some(FeaturedSplit {
        featured_index,
        featured,
        alternates,
    })
}

/// Testimonials shown as floating bubbles
pub fn floating(list: &[Testimonial]) -> &[Testimonial] {
    &list[..list.len().min(FLOATING_LIMIT)]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn testimonials(n: usize) -> Vec<Testimonial> {
        (0..n)
            .map(|i| Testimonial::new(format!("t{i}"), 5, format!("content {i}"), "Jane Doe"))
            .collect()
    }

    fn ids(list: &[Testimonial]) -> Vec<&str> {
        list.iter().map(|t| t.id.as_str()).collect()
    }

    #[rstest]
    #[case(5, 3, 3)]
    #[case(2, 9, 2)]
    #[case(4, 0, 0)]
    #[case(4, -1, 0)]
    #[case(0, 5, 0)]
    fn test_displayed_is_prefix(#[case] len: usize, #[case] max: i64, #[case] expected: usize) {
        let all = testimonials(len);
        let shown = displayed(&all, max);
        assert_eq!(shown.len(), expected);
        assert_eq!(shown, &all[..expected]);
    }

    #[test]
    fn test_cyclic_extension_fills_slots() {
        let all = testimonials(5);
        let ext = cyclic_extension(&all, INFINITE_SLOTS);
        assert_eq!(ext.len(), 12);
        assert_eq!(ext[0].testimonial.id, "t0");
        assert_eq!(ext[5].testimonial.id, "t0");
        assert_eq!(ext[11].testimonial.id, "t1");
        assert_eq!(ext[11].key, "t1-11");
    }

    #[test]
    fn test_cyclic_extension_empty() {
        assert!(cyclic_extension(&[], INFINITE_SLOTS).is_empty());
    }

    #[test]
    fn test_column_strip_down_is_reversed() {
        let all = testimonials(2);
        let ext = cyclic_extension(&all, 4);
        let up = column_strip(&ext, ScrollDirection::Up);
        let down = column_strip(&ext, ScrollDirection::Down);
        assert_eq!(up.len(), 8);
        assert_eq!(up[0].key, "t0-0");
        assert_eq!(down[0].key, "t1-3");
        assert_eq!(down[7].key, "t0-0");
    }

    #[rstest]
    #[case(40, 1)]
    #[case(60, 2)]
    #[case(99, 2)]
    #[case(100, 3)]
    fn test_visible_columns(#[case] width: u16, #[case] expected: usize) {
        assert_eq!(visible_columns(width).len(), expected);
    }

    #[test]
    fn test_featured_split_default() -> Result<(), String> {
        let all = testimonials(4);
        let split = featured_split(&all, None).ok_or("no split")?;
        assert_eq!(split.featured.id, "t0");
        assert_eq!(
            split.alternates.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["t1", "t2"]
        );
        Ok(())
    }

    #[test]
    fn test_featured_split_by_identity() -> Result<(), String> {
        let mut all = testimonials(4);
        let split = featured_split(&all, Some("t2")).ok_or("no split")?;
        assert_eq!(split.featured_index, 2);
        assert_eq!(
            split.alternates.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["t0", "t1"]
        );

        // reordering the list keeps the same testimonial featured
        all.reverse();
        let split = featured_split(&all, Some("t2")).ok_or("no split")?;
        assert_eq!(split.featured.id, "t2");
        assert_eq!(split.featured_index, 1);
        Ok(())
    }

    #[test]
    fn test_featured_split_missing_id_falls_back() -> Result<(), String> {
        let all = testimonials(3);
        let split = featured_split(&all, Some("gone")).ok_or("no split")?;
        assert_eq!(split.featured.id, "t0");
        Ok(())
    }

    #[test]
    fn test_featured_split_empty() {
        assert_eq!(featured_split(&[], None), None);
    }

    #[test]
    fn test_floating_limit() {
        let all = testimonials(9);
        assert_eq!(ids(floating(&all)), vec!["t0", "t1", "t2", "t3", "t4", "t5"]);
    }
}
