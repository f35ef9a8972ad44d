//! Streak computation over a habit's records.
//!
//! Records arrive in whatever order the store returns them. They are sorted
//! newest first before any scan, then collapsed to the distinct periods that
//! hold a completed record.

use chrono::NaiveDate;

use crate::core::period::{next_period, period_start, previous_period};
use crate::model::{Frequency, HabitRecord};

/// Distinct starts of completed periods on or before `as_of`, newest first.
#[must_use]
pub fn completed_periods_desc(
    records: &[HabitRecord],
    frequency: Frequency,
    as_of: NaiveDate,
) -> Vec<NaiveDate> {
    let mut sorted: Vec<&HabitRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut periods: Vec<NaiveDate> = Vec::new();
    for record in sorted {
        if !record.completed || record.date > as_of {
            continue;
        }
        let start = period_start(record.date, frequency);
        if periods.last() != Some(&start) {
            periods.push(start);
        }
    }
    periods
}

/// Number of consecutive completed periods ending at the current one.
///
/// The period containing `as_of` is still running, so when it has no
/// completed record the count starts from the period before it. Any gap,
/// whether a missing record or one marked not completed, ends the streak.
#[must_use]
pub fn current_streak(records: &[HabitRecord], frequency: Frequency, as_of: NaiveDate) -> u32 {
    if records.is_empty() {
        return 0;
    }

    let periods = completed_periods_desc(records, frequency, as_of);
    let current = period_start(as_of, frequency);

    let mut expected = match periods.first() {
        None => return 0,
        Some(&latest) if latest == current => current,
        Some(_) => match previous_period(current, frequency) {
            Some(previous) => previous,
            None => return 0,
        },
    };

    let mut streak = 0;
    for period in periods {
        if period != expected {
            break;
        }
        streak += 1;
        match previous_period(expected, frequency) {
            Some(previous) => expected = previous,
            None => break,
        }
    }
    streak
}

/// Longest run of consecutive completed periods on or before `as_of`.
#[must_use]
pub fn longest_streak(records: &[HabitRecord], frequency: Frequency, as_of: NaiveDate) -> u32 {
    let mut periods = completed_periods_desc(records, frequency, as_of);
    periods.reverse();

    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for period in periods {
        run = match prev {
            Some(p) if next_period(p, frequency) == Some(period) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(period);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn done(d: &str) -> HabitRecord {
        HabitRecord::new(1, date(d), true)
    }

    fn missed(d: &str) -> HabitRecord {
        HabitRecord::new(1, date(d), false)
    }

    #[test]
    fn test_empty_records_have_no_streak() {
        assert_eq!(current_streak(&[], Frequency::Daily, date("2024-10-21")), 0);
        assert_eq!(longest_streak(&[], Frequency::Daily, date("2024-10-21")), 0);
    }

    #[test]
    fn test_streak_ending_yesterday_counts() {
        let records = [done("2024-10-19"), done("2024-10-20")];
        assert_eq!(current_streak(&records, Frequency::Daily, date("2024-10-21")), 2);
    }

    #[test]
    fn test_streak_including_today() {
        let records = [done("2024-10-19"), done("2024-10-20"), done("2024-10-21")];
        assert_eq!(current_streak(&records, Frequency::Daily, date("2024-10-21")), 3);
    }

    #[test]
    fn test_streak_is_consecutive_not_a_count() {
        // Completed three times but with a gap on the 18th
        let records = [done("2024-10-16"), done("2024-10-17"), done("2024-10-19"), done("2024-10-20")];
        assert_eq!(current_streak(&records, Frequency::Daily, date("2024-10-21")), 2);
    }

    #[test]
    fn test_uncompleted_record_breaks_streak() {
        let records = [done("2024-10-18"), missed("2024-10-19"), done("2024-10-20")];
        assert_eq!(current_streak(&records, Frequency::Daily, date("2024-10-21")), 1);
    }

    #[test]
    fn test_stale_completions_give_zero() {
        let records = [done("2024-10-10"), done("2024-10-11")];
        assert_eq!(current_streak(&records, Frequency::Daily, date("2024-10-21")), 0);
    }

    #[test]
    fn test_unordered_input_matches_sorted_input() {
        let sorted = [done("2024-10-17"), done("2024-10-18"), done("2024-10-19"), done("2024-10-20")];
        let shuffled = [done("2024-10-19"), done("2024-10-17"), done("2024-10-20"), done("2024-10-18")];
        let as_of = date("2024-10-20");
        assert_eq!(
            current_streak(&sorted, Frequency::Daily, as_of),
            current_streak(&shuffled, Frequency::Daily, as_of)
        );
        assert_eq!(current_streak(&shuffled, Frequency::Daily, as_of), 4);
    }

    #[test]
    fn test_future_records_are_ignored() {
        let records = [done("2024-10-20"), done("2024-10-25")];
        assert_eq!(current_streak(&records, Frequency::Daily, date("2024-10-21")), 1);
    }

    #[test]
    fn test_weekly_streak_counts_weeks() {
        // Weeks starting 2024-09-30, 2024-10-07, 2024-10-14; evaluated mid-week on 2024-10-23
        let records = [done("2024-10-02"), done("2024-10-13"), done("2024-10-14"), done("2024-10-18")];
        assert_eq!(current_streak(&records, Frequency::Weekly, date("2024-10-23")), 3);
    }

    #[test]
    fn test_weekly_streak_with_mixed_records_in_one_week() {
        // The week of 2024-10-14 has one miss and one completion: it still counts
        let records = [missed("2024-10-14"), done("2024-10-16"), done("2024-10-09")];
        assert_eq!(current_streak(&records, Frequency::Weekly, date("2024-10-21")), 2);
    }

    #[test]
    fn test_weekly_gap_breaks_streak() {
        let records = [done("2024-09-30"), done("2024-10-14")];
        assert_eq!(current_streak(&records, Frequency::Weekly, date("2024-10-21")), 1);
    }

    #[test]
    fn test_longest_streak() {
        let records = [
            done("2024-10-01"),
            done("2024-10-02"),
            done("2024-10-03"),
            done("2024-10-04"),
            done("2024-10-10"),
            done("2024-10-19"),
            done("2024-10-20"),
        ];
        let as_of = date("2024-10-21");
        assert_eq!(longest_streak(&records, Frequency::Daily, as_of), 4);
        assert_eq!(current_streak(&records, Frequency::Daily, as_of), 2);
    }
}
