//! Scoring module - points for line clears
//!
//! One lookup, no levels or combos: 1, 2, 3 and 4 lines score 100, 300, 700
//! and 1500. Drops score nothing.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows in a single lock.
///
/// A single piece spans at most four rows, so more than four is not reachable
/// through play; such counts are capped at the four-line value.
pub fn line_clear_score(lines: usize) -> u32 {
    debug_assert!(lines <= LINE_SCORES.len(), "cleared {} lines in one lock", lines);
    match lines {
        0 => 0,
        n => LINE_SCORES[n.min(LINE_SCORES.len()) - 1],
    }
}
