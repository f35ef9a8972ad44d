use colored::Colorize;

use crate::features::stats::{
    render_history, render_rate_bar, PeriodStatus, ProgressReport,
};
use crate::model::{Habit, HabitRecord};

const RATE_BAR_WIDTH: usize = 20;

/// Format an owner's habits as a pretty table
pub fn format_habits_pretty(habits: &[Habit], owner: &str) -> String {
    if habits.is_empty() {
        return format!("Habits for {owner} (0 items)\n  No habits");
    }

    let mut output = format!("Habits for {owner} ({} items)\n", habits.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in habits {
        let mut line = format!(
            "{} {}",
            habit.title.bold(),
            format!("[{}]", habit.frequency).cyan()
        );
        if !habit.description.is_empty() {
            line.push_str(&format!("  {}", habit.description.dimmed()));
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single habit with all its fields
pub fn format_habit_pretty(habit: &Habit) -> String {
    let mut output = format!("{}\n", habit.title.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), habit.id));
    output.push_str(&format!("  {}: {}\n", "Owner".dimmed(), habit.owner));
    output.push_str(&format!("  {}: {}\n", "Frequency".dimmed(), habit.frequency));
    if !habit.description.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Description".dimmed(), habit.description));
    }
    output
}

/// Format a habit's records, oldest first
pub fn format_records_pretty(habit: &Habit, records: &[HabitRecord]) -> String {
    if records.is_empty() {
        return format!("Records for {} (0 items)\n  No records", habit.title);
    }

    let mut output = format!("Records for {} ({} items)\n", habit.title, records.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for record in records {
        output.push_str(&format_record_line(record));
        output.push('\n');
    }

    output
}

fn format_record_line(record: &HabitRecord) -> String {
    let icon = if record.completed {
        "[x]".green()
    } else {
        "[ ]".red()
    };
    format!("{icon} {}", record.date)
}

/// Format one progress report with a rate bar
pub fn format_report_pretty(report: &ProgressReport) -> String {
    let mut output = report.render();
    output.push('\n');
    output.push_str(&format!(
        "{} {}",
        render_rate_bar(report.success_rate, RATE_BAR_WIDTH).green(),
        rate_label(report.success_rate)
    ));
    output
}

/// Format a table of progress reports for all of an owner's habits
pub fn format_summary_pretty(reports: &[ProgressReport], owner: &str) -> String {
    if reports.is_empty() {
        return format!("Summary for {owner} (0 habits)\n  No habits");
    }

    let mut output = format!("Summary for {owner} ({} habits)\n", reports.len());
    output.push_str(&"─".repeat(70));
    output.push('\n');

    for report in reports {
        output.push_str(&format!(
            "{:<24} {:>3}/{:<3} {} {}  streak {} (best {})\n",
            report.title.bold(),
            report.successful_periods,
            report.total_periods,
            render_rate_bar(report.success_rate, 10).green(),
            rate_label(report.success_rate),
            report.current_streak.to_string().yellow(),
            report.longest_streak
        ));
    }

    output
}

/// Format a history strip, oldest period on the left
pub fn format_history_pretty(habit: &Habit, periods: &[PeriodStatus]) -> String {
    let Some(first) = periods.first() else {
        return format!("History for {}\n  No periods", habit.title);
    };
    let done = periods
        .iter()
        .filter(|p| p.state == crate::features::stats::PeriodState::Done)
        .count();

    format!(
        "History for {} ({}s since {})\n  {}  {done}/{}",
        habit.title,
        habit.frequency.period_name(),
        first.start,
        render_history(periods).green(),
        periods.len()
    )
}

fn rate_label(rate: f64) -> String {
    let label = format!("{rate:>6.2}%");
    if rate >= 80.0 {
        label.green().to_string()
    } else if rate >= 50.0 {
        label.yellow().to_string()
    } else {
        label.red().to_string()
    }
}
