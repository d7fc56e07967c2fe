//! Progress estimation.
//!
//! Path length is adaptive, so progress is measured against an assumed
//! total. While the quiz is incomplete the estimate never exceeds the
//! ceiling; only a resolved completion reports 100.

/// Percent complete for an unfinished quiz, clamped to `[0, ceiling]`.
pub fn estimate(answers_count: usize, assumed_total: usize, ceiling: u8) -> u8 {
    let ceiling = ceiling.min(99);
    let total = assumed_total.max(1);
    let percent = (answers_count.saturating_mul(100) + total / 2) / total;
    percent.min(ceiling as usize) as u8
}

/// Percent to display given whether the resolver reported completion.
pub fn progress_percent(answers_count: usize, assumed_total: usize, ceiling: u8, completed: bool) -> u8 {
    if completed {
        100
    } else {
        estimate(answers_count, assumed_total, ceiling)
    }
}
