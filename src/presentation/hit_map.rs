use ratatui::layout::{Position, Rect};

/// Interactive element drawn in the last frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Previous,
    Next,
    Dot(usize),
    Bubble(String),
    Alternate(String),
}

/// Screen regions of the interactive elements of a frame, in draw order.
/// Later regions are on top of earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.area() > 0 {
            self.regions.push((area, target));
        }
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target)
    }

    /// Bubble under the pointer, if any
    pub fn bubble_at(&self, column: u16, row: u16) -> Option<&str> {
        match self.target_at(column, row) {
            Some(HitTarget::Bubble(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn targets(&self) -> impl Iterator<Item = &HitTarget> {
        self.regions.iter().map(|(_, target)| target)
    }

    pub fn area_of(&self, target: &HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| t == target)
            .map(|(area, _)| *area)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
