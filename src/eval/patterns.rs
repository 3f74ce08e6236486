//! Pattern scores for line shapes
//!
//! A line shape is the run of same-colored stones through a candidate cell,
//! summarized by its length and how many of its two ends are capped.
//! The same table is used for both colors.

use super::line::LineScan;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row, capped or not
    pub const FIVE: u32 = 10_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: u32 = 1_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: u32 = 100;

    /// Open three: _OOO_
    pub const OPEN_THREE: u32 = 100;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: u32 = 10;

    /// Open two: _OO_
    pub const OPEN_TWO: u32 = 2;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: u32 = 1;
}

/// Score a single line shape.
///
/// Lines of five or more always score [`PatternScore::FIVE`]. Shorter lines
/// capped on both ends, and single stones, score nothing.
#[must_use]
pub fn line_score(scan: LineScan) -> u32 {
    if scan.count >= 5 {
        return PatternScore::FIVE;
    }

    match (scan.count, scan.blocked_ends) {
        (4, 0) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 0) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 0) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(count: u8, blocked_ends: u8) -> LineScan {
        LineScan { count, blocked_ends }
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR >= PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
    }

    #[test]
    fn test_line_score_table() {
        assert_eq!(line_score(shape(5, 0)), 10_000);
        assert_eq!(line_score(shape(5, 1)), 10_000);
        assert_eq!(line_score(shape(5, 2)), 10_000);
        assert_eq!(line_score(shape(4, 0)), 1_000);
        assert_eq!(line_score(shape(4, 1)), 100);
        assert_eq!(line_score(shape(4, 2)), 0);
        assert_eq!(line_score(shape(3, 0)), 100);
        assert_eq!(line_score(shape(3, 1)), 10);
        assert_eq!(line_score(shape(3, 2)), 0);
        assert_eq!(line_score(shape(2, 0)), 2);
        assert_eq!(line_score(shape(2, 1)), 1);
        assert_eq!(line_score(shape(2, 2)), 0);
        assert_eq!(line_score(shape(1, 0)), 0);
        assert_eq!(line_score(shape(1, 2)), 0);
    }

    #[test]
    fn test_overline_counts_as_five() {
        assert_eq!(line_score(shape(6, 0)), PatternScore::FIVE);
        assert_eq!(line_score(shape(9, 2)), PatternScore::FIVE);
    }

    #[test]
    fn test_line_score_monotonic_in_count() {
        for blocked in 0..=2 {
            for count in 1..9 {
                assert!(
                    line_score(shape(count, blocked)) <= line_score(shape(count + 1, blocked)),
                    "score dropped from count {} to {} with {} blocked ends",
                    count,
                    count + 1,
                    blocked
                );
            }
        }
    }

    #[test]
    fn test_line_score_non_increasing_in_blocked_ends() {
        for count in 1..=9 {
            for blocked in 0..2 {
                assert!(
                    line_score(shape(count, blocked)) >= line_score(shape(count, blocked + 1)),
                    "score rose for count {} going from {} to {} blocked ends",
                    count,
                    blocked,
                    blocked + 1
                );
            }
        }
    }
}
