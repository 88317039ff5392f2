//! Scoring module - line clear points, hard drop bonus and drop speed
//!
//! Flat rules: every cleared line is worth the same regardless of how many
//! were cleared at once, and there are no levels. The only speed change is
//! the optional speed-up hook.

use crate::config::SpeedUp;
use crate::types::{HARD_DROP_POINTS_PER_ROW, LINE_CLEAR_POINTS};

/// Points for clearing `lines` rows in one lock
pub fn line_clear_points(lines: usize) -> u32 {
    (lines as u32).saturating_mul(LINE_CLEAR_POINTS)
}

/// Bonus for a hard drop that descended `rows` rows
pub fn hard_drop_points(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Drop interval after a lock that cleared `lines` rows.
///
/// Without a speed-up hook (or with no lines) the interval is unchanged.
/// Otherwise it shrinks by `lines * step_ms`, never below `floor_ms`.
pub fn next_drop_interval(current_ms: u32, lines: usize, speed_up: Option<SpeedUp>) -> u32 {
    match speed_up {
        Some(SpeedUp { step_ms, floor_ms }) if lines > 0 => {
            let reduction = (lines as u32).saturating_mul(step_ms);
            current_ms.saturating_sub(reduction).max(floor_ms)
        }
        _ => current_ms,
    }
}
