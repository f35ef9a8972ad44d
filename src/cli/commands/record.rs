//! Record subcommands: correct, remove and list tracked completions.

use serde_json::json;

use super::Context;
use crate::cli::args::{OutputFormat, RecordCommands};
use crate::core::{parse_completed, parse_date};
use crate::error::HabitError;
use crate::output::{format_records, to_json};

/// Execute record subcommands.
///
/// # Errors
///
/// Returns `HabitError::Validation` for unparsable input and
/// `HabitError::NotFound` for an unknown habit. A missing record is a no-op.
pub fn record(ctx: &Context<'_>, cmd: RecordCommands) -> Result<String, HabitError> {
    match cmd {
        RecordCommands::Edit {
            title,
            date,
            from,
            to,
        } => {
            let date = parse_date(&date, ctx.today)?;
            let from = parse_completed(&from)?;
            let to = parse_completed(&to)?;
            let habit = ctx.require_habit(&title)?;

            let changed = ctx.tracker.edit_completion(&habit, date, from, to)?;
            let completed = if changed { to } else { from };
            match ctx.format {
                OutputFormat::Json => to_json(&json!({
                    "habit": habit.title,
                    "date": date,
                    "changed": changed,
                    "completed": completed,
                })),
                OutputFormat::Pretty if changed => {
                    Ok(format!("Updated {} on {date}: completed={to}", habit.title))
                }
                OutputFormat::Pretty => Ok(format!(
                    "No change for {} on {date}",
                    habit.title
                )),
            }
        }

        RecordCommands::Delete { title, date } => {
            let date = parse_date(&date, ctx.today)?;
            let habit = ctx.require_habit(&title)?;

            let deleted = ctx.tracker.delete_completion(&habit, date)?;
            match ctx.format {
                OutputFormat::Json => to_json(&json!({
                    "habit": habit.title,
                    "date": date,
                    "deleted": deleted,
                })),
                OutputFormat::Pretty if deleted => {
                    Ok(format!("Deleted record: {} on {date}", habit.title))
                }
                OutputFormat::Pretty => Ok(format!("No change for {} on {date}", habit.title)),
            }
        }

        RecordCommands::List { title } => {
            let habit = ctx.require_habit(&title)?;
            let records = ctx.tracker.list_completions(&habit)?;
            format_records(&habit, &records, ctx.format)
        }
    }
}
