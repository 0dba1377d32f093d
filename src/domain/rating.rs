/// Number of star slots rendered for every rating
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Filled,
    Empty,
}

/// Fixed-length star sequence: `rating` filled slots followed by empty ones.
pub fn stars(rating: u8, max: u8) -> Vec<Star> {
    let filled = rating.min(max);
    (0..max)
        .map(|i| if i < filled { Star::Filled } else { Star::Empty })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stars_partial() {
        assert_eq!(
            stars(3, MAX_STARS),
            vec![
                Star::Filled,
                Star::Filled,
                Star::Filled,
                Star::Empty,
                Star::Empty
            ]
        );
    }

    #[test]
    fn test_stars_always_fixed_length() {
        for rating in 0..=10 {
            assert_eq!(stars(rating, MAX_STARS).len(), MAX_STARS as usize);
        }
    }

    #[test]
    fn test_stars_overflow_clamped() {
        assert!(stars(9, MAX_STARS).iter().all(|s| *s == Star::Filled));
    }

    #[test]
    fn test_stars_zero() {
        assert!(stars(0, MAX_STARS).iter().all(|s| *s == Star::Empty));
    }
}
