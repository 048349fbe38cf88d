/// Moves `cursor` by `delta`, wrapping around both ends of a list of `length`.
///
/// A `length` of zero has no valid position, so 0 is returned.
///
/// # Examples
///
/// ```
/// use media_menu_core::cursor::advance;
///
/// assert_eq!(advance(0, -1, 17), 16);
/// assert_eq!(advance(16, 1, 17), 0);
/// ```
#[must_use]
pub fn advance(cursor: usize, delta: isize, length: usize) -> usize {
    if length == 0 {
        return 0;
    }

    let length = length as isize;
    let position = (cursor as isize % length + delta % length) % length;
    position.rem_euclid(length) as usize
}

/// Direction to cycle through the menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

impl CycleDirection {
    #[must_use]
    pub fn delta(self) -> isize {
        match self {
            CycleDirection::Up => -1,
            CycleDirection::Down => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_at_start() {
        assert_eq!(advance(0, -1, 5), 4);
    }

    #[test]
    fn test_advance_wraps_at_end() {
        assert_eq!(advance(4, 1, 5), 0);
    }

    #[test]
    fn test_advance_round_trip() {
        for length in 1..20 {
            for cursor in 0..length {
                let previous = advance(cursor, -1, length);
                assert_eq!(advance(previous, 1, length), cursor);
            }
        }
    }

    #[test]
    fn test_advance_full_cycle_returns_to_start() {
        let mut cursor = 0;
        for _ in 0..17 {
            cursor = advance(cursor, CycleDirection::Down.delta(), 17);
        }
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_advance_single_entry() {
        assert_eq!(advance(0, 1, 1), 0);
        assert_eq!(advance(0, -1, 1), 0);
    }

    #[test]
    fn test_advance_large_delta() {
        assert_eq!(advance(2, -12, 5), 0);
        assert_eq!(advance(2, 13, 5), 0);
    }

    #[test]
    fn test_advance_empty_list() {
        assert_eq!(advance(0, 1, 0), 0);
    }
}
