//! Wall and masonry: cards in one to three columns.

use ratatui::prelude::*;

use super::{stack_cards, LayoutContext, CARD_GAP};

/// How cards are assigned to columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Contiguous runs filled top to bottom, one column after another,
    /// with the tallest column kept as short as possible
    Balanced,
    /// Each card goes to the currently shortest column
    ShortestColumn,
}

/// Columns shown at a given width
pub fn column_count(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    }
}

/// Indices of the cards in each column, in list order.
pub fn distribute(heights: &[u16], columns: usize, flow: Flow) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    match flow {
        Flow::Balanced => balanced(heights, columns),
        Flow::ShortestColumn => shortest_column(heights, columns),
    }
}

fn slot(height: u16) -> u32 {
    u32::from(height) + u32::from(CARD_GAP)
}

/// Fill columns in order, moving on once a card would exceed `limit`.
fn fill(heights: &[u16], columns: usize, limit: u32) -> Option<Vec<Vec<usize>>> {
    let mut assigned: Vec<Vec<usize>> = vec![vec![]];
    let mut filled = 0;

    for (index, height) in heights.iter().enumerate() {
        let height = slot(*height);
        let current = assigned.len() - 1;
        if filled + height > limit && !assigned[current].is_empty() {
            if assigned.len() == columns {
                return None;
            }
            assigned.push(vec![]);
            filled = 0;
        }
        let current = assigned.len() - 1;
        assigned[current].push(index);
        filled += height;
    }
    assigned.resize(columns, vec![]);
    Some(assigned)
}

fn balanced(heights: &[u16], columns: usize) -> Vec<Vec<usize>> {
    let mut low = heights.iter().map(|h| slot(*h)).max().unwrap_or(0);
    let mut high: u32 = heights.iter().map(|h| slot(*h)).sum();

    // smallest column height that fits every card
    while low < high {
        let mid = low + (high - low) / 2;
        if fill(heights, columns, mid).is_some() {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    fill(heights, columns, high).unwrap_or_else(|| {
        let mut single = vec![vec![]; columns];
        single[0] = (0..heights.len()).collect();
        single
    })
}

fn shortest_column(heights: &[u16], columns: usize) -> Vec<Vec<usize>> {
    let mut assigned = vec![vec![]; columns];
    let mut filled = vec![0u32; columns];

    for (index, height) in heights.iter().enumerate() {
        let column = filled
            .iter()
            .enumerate()
            .min_by_key(|(column, filled)| (**filled, *column))
            .map(|(column, _)| column)
            .unwrap_or(0);
        assigned[column].push(index);
        filled[column] += slot(*height);
    }
    assigned
}

pub fn render(ctx: &LayoutContext, area: Rect, buf: &mut Buffer, flow: Flow) {
    let list = ctx.displayed();
    let count = column_count(area.width).min(list.len());
    let column_areas = Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count])
        .spacing(1)
        .split(area);
    let column_width = column_areas.first().map(|c| c.width).unwrap_or(area.width);

    let heights: Vec<u16> = list
        .iter()
        .map(|t| ctx.card(t, 0).calculate_height(column_width))
        .collect();

    for (column_area, indices) in column_areas.iter().zip(distribute(&heights, count, flow)) {
        let cards = indices
            .into_iter()
            .map(|index| ctx.card(&list[index], index))
            .collect();
        stack_cards(cards, *column_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(40, 1)]
    #[case(59, 1)]
    #[case(60, 2)]
    #[case(99, 2)]
    #[case(100, 3)]
    #[case(240, 3)]
    fn test_column_count(#[case] width: u16, #[case] expected: usize) {
        assert_eq!(column_count(width), expected);
    }

    #[test]
    fn test_balanced_fills_columns_top_to_bottom() {
        assert_eq!(
            distribute(&[5; 6], 3, Flow::Balanced),
            vec![vec![0, 1], vec![2, 3], vec![4, 5]]
        );
    }

    #[test]
    fn test_balanced_keeps_runs_contiguous() {
        // the tall card ends the first run
        assert_eq!(
            distribute(&[5, 9, 5, 5, 5], 2, Flow::Balanced),
            vec![vec![0, 1], vec![2, 3, 4]]
        );
    }

    #[test]
    fn test_balanced_leaves_trailing_columns_empty() {
        assert_eq!(
            distribute(&[5, 5], 3, Flow::Balanced),
            vec![vec![0], vec![1], vec![]]
        );
        assert_eq!(distribute(&[], 2, Flow::Balanced), vec![Vec::<usize>::new(), Vec::<usize>::new()]);
    }

    #[test]
    fn test_shortest_column_balances_heights() {
        // column 0 gets the tall card, so the next three go to column 1
        assert_eq!(
            distribute(&[12, 5, 5, 5, 5], 2, Flow::ShortestColumn),
            vec![vec![0, 4], vec![1, 2, 3]]
        );
    }

    #[test]
    fn test_shortest_column_ties_go_left() {
        assert_eq!(
            distribute(&[5, 5, 5], 3, Flow::ShortestColumn),
            vec![vec![0], vec![1], vec![2]]
        );
    }
}
