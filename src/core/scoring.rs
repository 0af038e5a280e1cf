//! Scoring module - line clear rewards, level progression, gravity speed.

use crate::types::{
    BASE_DROP_MS, DROP_DECREMENT_MS, DROP_INTERVAL_MIN_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows in a single lock at the given level.
/// The reward table is multiplied by the level in effect when the clear
/// happens (before any level-up it causes).
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * level
}

/// Level for a total line count. Starts at 1, steps every 10 lines,
/// monotonically non-decreasing.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level: 100ms faster per level above 1,
/// floored at 100ms so the interval never reaches zero.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1) * DROP_DECREMENT_MS)
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_table_at_level_one() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 1), 500);
        assert_eq!(line_clear_points(4, 1), 800);
    }

    #[test]
    fn rewards_scale_with_level() {
        assert_eq!(line_clear_points(1, 2), 200);
        assert_eq!(line_clear_points(4, 2), 1600);
        assert_eq!(line_clear_points(3, 5), 2500);
    }

    #[test]
    fn more_than_four_lines_is_out_of_table() {
        // A piece spans at most 4 rows; anything else scores nothing.
        assert_eq!(line_clear_points(5, 1), 0);
    }

    #[test]
    fn level_steps_every_ten_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(19), 2);
        assert_eq!(level_for_lines(20), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn drop_interval_speeds_up_and_floors() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(3), 800);
        assert_eq!(drop_interval_ms(10), 100);
        // Past the floor the interval stops shrinking.
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(100), 100);
    }
}
