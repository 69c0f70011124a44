/// Outcome of asking whether a block of height `needed` still fits
/// between the cursor and the bottom of the content area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f64,
}

/// Centralized fit check used by every flowed primitive.
///
/// * `cursor_y`: The current write position.
/// * `needed`: The height the next block occupies, including its skips.
/// * `max_y`: The lowest position content may reach.
///
/// The boundary is inclusive: a block that ends exactly on `max_y` fits.
pub fn check_fit(cursor_y: f64, needed: f64, max_y: f64) -> BreakAnalysis {
    let available = (max_y - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: cursor_y + needed > max_y,
        remaining_height: available,
    }
}

/// Moves `cursor_y` by `delta`, never above `min_y` and never below `max_y`.
/// A cursor already outside the range is not pulled back into it.
pub fn advance_clamped(cursor_y: f64, delta: f64, min_y: f64, max_y: f64) -> f64 {
    if !delta.is_finite() {
        return cursor_y;
    }
    (cursor_y + delta).clamp(min_y.min(cursor_y), max_y.max(cursor_y))
}
