use std::time::Duration;

/// Fixed period of the carousel auto-advance timer
pub const AUTOPLAY_PERIOD: Duration = Duration::from_secs(4);

/// Carousel position over a list of `len` slides.
///
/// The length is passed on every operation so the position always refers to
/// the current list. An index left out of range by a shrinking list is read
/// as the last slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn has_controls(len: usize) -> bool {
        len > 1
    }

    pub fn current(&self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    pub fn next(&mut self, len: usize) {
        if !Self::has_controls(len) {
            return;
        }
        self.index = (self.current(len) + 1) % len;
    }

    pub fn previous(&mut self, len: usize) {
        if !Self::has_controls(len) {
            return;
        }
        let current = self.current(len);
        self.index = if current == 0 { len - 1 } else { current - 1 };
    }

    /// Jump to a dot indicator; out-of-range targets are ignored.
    pub fn go_to(&mut self, target: usize, len: usize) {
        if Self::has_controls(len) && target < len {
            self.index = target;
        }
    }
}
