//! Habit lifecycle commands: add, list, edit, delete and track.

use serde_json::json;

use super::{not_found, Context};
use crate::cli::args::{AddArgs, EditArgs, OutputFormat, TrackArgs};
use crate::core::{parse_completed, parse_date};
use crate::error::HabitError;
use crate::output::{format_habit, format_habits, to_json};

/// Execute the add command.
///
/// # Errors
///
/// Returns `HabitError::Duplicate` if the title is taken and propagates
/// store failures.
pub fn add(ctx: &Context<'_>, args: AddArgs) -> Result<String, HabitError> {
    let habit = ctx.tracker.create_habit(
        &ctx.owner,
        &args.title,
        &args.description,
        args.frequency.into(),
    )?;

    match ctx.format {
        OutputFormat::Json => to_json(&habit),
        OutputFormat::Pretty => Ok(format!(
            "Created habit: {} ({})",
            habit.title, habit.frequency
        )),
    }
}

/// Execute the list command.
///
/// # Errors
///
/// Propagates store failures.
pub fn list(ctx: &Context<'_>) -> Result<String, HabitError> {
    let habits = ctx.tracker.list_habits(&ctx.owner)?;
    format_habits(&habits, &ctx.owner, ctx.format)
}

/// Execute the edit command; omitted fields keep their current values.
///
/// # Errors
///
/// Returns `HabitError::NotFound` for an unknown habit and
/// `HabitError::Duplicate` when renaming onto another habit's title.
pub fn edit(ctx: &Context<'_>, args: EditArgs) -> Result<String, HabitError> {
    let current = ctx.require_habit(&args.title)?;
    let new_title = args.new_title.unwrap_or_else(|| current.title.clone());
    let new_description = args
        .description
        .unwrap_or_else(|| current.description.clone());
    let new_frequency = args.frequency.map_or(current.frequency, Into::into);

    let updated = ctx.tracker.edit_habit(
        &ctx.owner,
        &current.title,
        &new_title,
        &new_description,
        new_frequency,
    )?;
    if !updated {
        return Err(not_found(&ctx.owner, &args.title));
    }

    let habit = ctx.require_habit(&new_title)?;
    match ctx.format {
        OutputFormat::Json => format_habit(&habit, ctx.format),
        OutputFormat::Pretty => Ok(format!("Updated habit:\n{}", format_habit(&habit, ctx.format)?)),
    }
}

/// Execute the delete command.
///
/// # Errors
///
/// Returns `HabitError::NotFound` for an unknown habit.
pub fn delete(ctx: &Context<'_>, title: &str) -> Result<String, HabitError> {
    if !ctx.tracker.delete_habit(&ctx.owner, title)? {
        return Err(not_found(&ctx.owner, title));
    }

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "deleted": true, "title": title.trim() })),
        OutputFormat::Pretty => Ok(format!("Deleted habit: {}", title.trim())),
    }
}

/// Execute the track command.
///
/// # Errors
///
/// Returns `HabitError::Validation` for a bad date or completion value and
/// `HabitError::NotFound` for an unknown habit.
pub fn track(ctx: &Context<'_>, args: TrackArgs) -> Result<String, HabitError> {
    let date = parse_date(&args.date, ctx.today)?;
    let completed = parse_completed(&args.completed)?;
    let habit = ctx.require_habit(&args.title)?;

    let record = ctx.tracker.track_completion(&habit, date, completed)?;

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "habit": habit.title, "record": record })),
        OutputFormat::Pretty => Ok(format!(
            "{} {} on {}",
            if record.completed { "Completed" } else { "Missed" },
            habit.title,
            record.date
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::FrequencyArg;
    use crate::config::Config;
    use crate::model::Frequency;
    use crate::storage::{MemoryHabitStore, MemoryRecordStore};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 21).unwrap()
    }

    fn add_args(title: &str) -> AddArgs {
        AddArgs {
            title: title.to_string(),
            description: String::new(),
            frequency: FrequencyArg::Daily,
        }
    }

    #[test]
    fn test_add_then_list() {
        let (habits, records, config) =
            (MemoryHabitStore::new(), MemoryRecordStore::new(), Config::default());
        let ctx = Context::new(&habits, &records, &config, "ana".into(), today(), OutputFormat::Pretty);

        let out = add(&ctx, add_args("Go to shower")).unwrap();
        assert_eq!(out, "Created habit: Go to shower (daily)");

        let listed = list(&ctx).unwrap();
        assert!(listed.contains("Go to shower"));
    }

    #[test]
    fn test_add_duplicate_is_error() {
        let (habits, records, config) =
            (MemoryHabitStore::new(), MemoryRecordStore::new(), Config::default());
        let ctx = Context::new(&habits, &records, &config, "ana".into(), today(), OutputFormat::Pretty);

        add(&ctx, add_args("Read")).unwrap();
        let err = add(&ctx, add_args("READ")).unwrap_err();
        assert!(matches!(err, HabitError::Duplicate(_)));
    }

    #[test]
    fn test_edit_keeps_omitted_fields() {
        let (habits, records, config) =
            (MemoryHabitStore::new(), MemoryRecordStore::new(), Config::default());
        let ctx = Context::new(&habits, &records, &config, "ana".into(), today(), OutputFormat::Json);

        add(
            &ctx,
            AddArgs {
                title: "Read".to_string(),
                description: "twenty pages".to_string(),
                frequency: FrequencyArg::Weekly,
            },
        )
        .unwrap();

        edit(
            &ctx,
            EditArgs {
                title: "read".to_string(),
                new_title: Some("Read more".to_string()),
                description: None,
                frequency: None,
            },
        )
        .unwrap();

        let habit = ctx.require_habit("Read more").unwrap();
        assert_eq!(habit.description, "twenty pages");
        assert_eq!(habit.frequency, Frequency::Weekly);
    }

    #[test]
    fn test_edit_unknown_habit_is_not_found() {
        let (habits, records, config) =
            (MemoryHabitStore::new(), MemoryRecordStore::new(), Config::default());
        let ctx = Context::new(&habits, &records, &config, "ana".into(), today(), OutputFormat::Pretty);

        let err = edit(
            &ctx,
            EditArgs {
                title: "Nope".to_string(),
                new_title: None,
                description: None,
                frequency: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, HabitError::NotFound(_)));
    }

    #[test]
    fn test_delete_unknown_habit_is_not_found() {
        let (habits, records, config) =
            (MemoryHabitStore::new(), MemoryRecordStore::new(), Config::default());
        let ctx = Context::new(&habits, &records, &config, "ana".into(), today(), OutputFormat::Pretty);

        assert!(matches!(delete(&ctx, "Nope"), Err(HabitError::NotFound(_))));
    }

    #[test]
    fn test_track_yesterday_and_overwrite() {
        let (habits, records, config) =
            (MemoryHabitStore::new(), MemoryRecordStore::new(), Config::default());
        let ctx = Context::new(&habits, &records, &config, "ana".into(), today(), OutputFormat::Pretty);
        add(&ctx, add_args("Run")).unwrap();

        let track_args = |completed: &str| TrackArgs {
            title: "Run".to_string(),
            date: "yesterday".to_string(),
            completed: completed.to_string(),
        };

        let out = track(&ctx, track_args("yes")).unwrap();
        assert_eq!(out, "Completed Run on 2024-10-20");

        let out = track(&ctx, track_args("no")).unwrap();
        assert_eq!(out, "Missed Run on 2024-10-20");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_track_rejects_bad_date() {
        let (habits, records, config) =
            (MemoryHabitStore::new(), MemoryRecordStore::new(), Config::default());
        let ctx = Context::new(&habits, &records, &config, "ana".into(), today(), OutputFormat::Pretty);
        add(&ctx, add_args("Run")).unwrap();

        let err = track(
            &ctx,
            TrackArgs {
                title: "Run".to_string(),
                date: "2024-13-40".to_string(),
                completed: "true".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, HabitError::Validation(_)));
    }
}
