//! Statistics command implementation.
//!
//! Handles the stats subcommands: streaks, success rates, reports, the
//! per-owner summary and the history strip.

use chrono::{Days, NaiveDate};
use serde_json::json;

use super::Context;
use crate::cli::args::{OutputFormat, RangeArgs, StatsCommands};
use crate::core::parse_date;
use crate::core::period::{period_start, previous_period};
use crate::error::HabitError;
use crate::features::stats::render_rate_bar;
use crate::output::{format_history, format_report, format_summary, to_json};

const RATE_BAR_WIDTH: usize = 20;

/// Upper bound on the length of a history strip.
pub const MAX_HISTORY_PERIODS: u32 = 1000;

/// Execute stats subcommands.
///
/// # Errors
///
/// Returns `HabitError::NotFound` for an unknown habit,
/// `HabitError::Validation` for unparsable dates, and propagates store
/// failures.
pub fn stats(ctx: &Context<'_>, cmd: StatsCommands) -> Result<String, HabitError> {
    match cmd {
        StatsCommands::Streak { title } => streak(ctx, &title),
        StatsCommands::Rate { title, range } => rate(ctx, &title, &range),
        StatsCommands::Report { title, range } => report(ctx, &title, &range),
        StatsCommands::Summary { range } => {
            let (start, end) = resolve_range(ctx, &range)?;
            let reports = ctx.engine.summary(&ctx.owner, start, end)?;
            format_summary(&reports, &ctx.owner, ctx.format)
        }
        StatsCommands::History { title, periods } => history(ctx, &title, periods),
    }
}

fn streak(ctx: &Context<'_>, title: &str) -> Result<String, HabitError> {
    let habit = ctx.require_habit(title)?;
    let current = ctx.engine.current_streak(&ctx.owner, &habit.title)?;
    let longest = ctx.engine.longest_streak(&ctx.owner, &habit.title)?;

    match ctx.format {
        OutputFormat::Json => to_json(&json!({
            "title": habit.title,
            "frequency": habit.frequency,
            "as_of": ctx.engine.evaluation_date(),
            "current_streak": current,
            "longest_streak": longest,
        })),
        OutputFormat::Pretty => {
            let unit = habit.frequency.period_name();
            Ok(format!(
                "{}: current streak {current} {unit}s (longest {longest} {unit}s)",
                habit.title
            ))
        }
    }
}

fn rate(ctx: &Context<'_>, title: &str, range: &RangeArgs) -> Result<String, HabitError> {
    let (start, end) = resolve_range(ctx, range)?;
    let habit = ctx.require_habit(title)?;
    let percentage = ctx
        .engine
        .success_percentage(&ctx.owner, &habit.title, start, end)?;

    match ctx.format {
        OutputFormat::Json => to_json(&json!({
            "title": habit.title,
            "frequency": habit.frequency,
            "start": start,
            "end": end,
            "success_rate": percentage,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} from {start} to {end}: {percentage:.2}%\n{}",
            habit.title,
            render_rate_bar(percentage, RATE_BAR_WIDTH)
        )),
    }
}

fn report(ctx: &Context<'_>, title: &str, range: &RangeArgs) -> Result<String, HabitError> {
    let (start, end) = resolve_range(ctx, range)?;
    let report = ctx
        .engine
        .progress_report(&ctx.owner, title, start, end)?
        .ok_or_else(|| super::not_found(&ctx.owner, title))?;
    format_report(&report, ctx.format)
}

fn history(ctx: &Context<'_>, title: &str, periods: Option<u32>) -> Result<String, HabitError> {
    let habit = ctx.require_habit(title)?;
    let count = periods.unwrap_or(ctx.config.stats.history_periods).max(1);
    if count > MAX_HISTORY_PERIODS {
        return Err(HabitError::validation(format!(
            "history is limited to {MAX_HISTORY_PERIODS} periods, got {count}"
        )));
    }

    let mut start = period_start(ctx.today, habit.frequency);
    for _ in 1..count {
        start = previous_period(start, habit.frequency).ok_or_else(|| {
            HabitError::validation(format!(
                "{count} {}s before {} is outside the calendar",
                habit.frequency.period_name(),
                ctx.today
            ))
        })?;
    }

    let strip = ctx
        .engine
        .history(&ctx.owner, &habit.title, start, ctx.today)?
        .unwrap_or_default();
    format_history(&habit, &strip, ctx.format)
}

/// Resolve `--from`/`--to`, defaulting to the configured window ending today.
fn resolve_range(ctx: &Context<'_>, range: &RangeArgs) -> Result<(NaiveDate, NaiveDate), HabitError> {
    let end = match &range.to {
        Some(to) => parse_date(to, ctx.today)?,
        None => ctx.today,
    };
    let start = match &range.from {
        Some(from) => parse_date(from, ctx.today)?,
        None => default_start(end, ctx.config.stats.default_range_days),
    };
    Ok((start, end))
}

fn default_start(end: NaiveDate, range_days: u32) -> NaiveDate {
    let back = u64::from(range_days.max(1) - 1);
    end.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}
