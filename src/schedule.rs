//! Listening-time budget for the weighted multi-emotion playlist.
//!
//! Maps "number of distinct emotions present" onto a decreasing list of song
//! counts, one per ranked emotion.

/// Most emotions a ranked list may hold.
pub const MAX_EMOTIONS: usize = 5;

/// Count used for a rank position past the end of its row.
pub const DEFAULT_COUNT: usize = 5;

const ROWS: [&[usize]; MAX_EMOTIONS] = [
    &[30],
    &[30, 20],
    &[55, 20, 15],
    &[30, 29, 18, 9],
    &[10, 7, 6, 5, 2],
];

/// Fixed song-count table keyed by the number of ranked emotions.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightSchedule;

impl WeightSchedule {
    /// Row for `emotions` distinct emotions. Values above five use the
    /// five-emotion row, zero yields an empty row.
    #[must_use]
    pub fn counts(emotions: usize) -> &'static [usize] {
        match emotions {
            0 => &[],
            k => ROWS[k.min(MAX_EMOTIONS) - 1],
        }
    }

    /// Count for the emotion ranked at `position` in a list of `emotions`.
    #[must_use]
    pub fn count_at(emotions: usize, position: usize) -> usize {
        Self::counts(emotions)
            .get(position)
            .copied()
            .unwrap_or(DEFAULT_COUNT)
    }

    /// Total number of songs the row for `emotions` asks for.
    #[must_use]
    pub fn total(emotions: usize) -> usize {
        Self::counts(emotions).iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_match_table() {
        assert_eq!(WeightSchedule::counts(1), [30]);
        assert_eq!(WeightSchedule::counts(2), [30, 20]);
        assert_eq!(WeightSchedule::counts(3), [55, 20, 15]);
        assert_eq!(WeightSchedule::counts(4), [30, 29, 18, 9]);
        assert_eq!(WeightSchedule::counts(5), [10, 7, 6, 5, 2]);
    }

    #[test]
    fn test_row_length_matches_emotion_count() {
        for k in 1..=MAX_EMOTIONS {
            assert_eq!(WeightSchedule::counts(k).len(), k);
        }
        assert!(WeightSchedule::counts(0).is_empty());
        assert_eq!(WeightSchedule::counts(9), WeightSchedule::counts(5));
    }

    #[test]
    fn test_totals() {
        assert_eq!(WeightSchedule::total(1), 30);
        assert_eq!(WeightSchedule::total(2), 50);
        assert_eq!(WeightSchedule::total(3), 90);
        assert_eq!(WeightSchedule::total(4), 86);
        assert_eq!(WeightSchedule::total(5), 30);
    }

    #[test]
    fn test_position_past_row_uses_default() {
        assert_eq!(WeightSchedule::count_at(2, 1), 20);
        assert_eq!(WeightSchedule::count_at(2, 2), DEFAULT_COUNT);
        assert_eq!(WeightSchedule::count_at(0, 0), DEFAULT_COUNT);
    }
}
