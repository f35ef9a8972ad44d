//! Terminal visualization for habit statistics.

use super::rate::{PeriodState, PeriodStatus};

const FULL_BLOCK: char = '█';
const LIGHT_SHADE: char = '░';
const EMPTY_CELL: char = '·';

/// Render a history strip, one cell per period, oldest on the left.
///
/// `█` marks a completed period, `░` a period tracked as missed and `·` a
/// period with no record.
#[must_use]
pub fn render_history(periods: &[PeriodStatus]) -> String {
    periods
        .iter()
        .map(|p| match p.state {
            PeriodState::Done => FULL_BLOCK,
            PeriodState::Missed => LIGHT_SHADE,
            PeriodState::Untracked => EMPTY_CELL,
        })
        .collect()
}

/// Render a horizontal bar for a percentage in `[0, 100]`.
///
/// # Arguments
///
/// * `percent` - Value to draw; clamped into range
/// * `width` - Width of the bar portion
#[must_use]
pub fn render_rate_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "{}{}",
        FULL_BLOCK.to_string().repeat(filled),
        LIGHT_SHADE.to_string().repeat(width - filled)
    )
}
