use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "habitrack")]
#[command(about = "Track daily and weekly habits, streaks and success rates")]
#[command(long_about = "habitrack - a habit tracker for the command line

Define habits with a daily or weekly frequency, record completions by
date, and see current streaks, success rates and progress reports.

QUICK START:
  habitrack add \"Go to shower\" -f daily      Define a habit
  habitrack track \"Go to shower\"             Mark it done today
  habitrack stats streak \"Go to shower\"      Current streak
  habitrack stats report \"Go to shower\"      Progress report

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

Data lives in ~/.habitrack/ unless HABITRACK_HOME is set.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Owner whose habits are read and written
    ///
    /// Falls back to `general.owner` in the config, then $USER.
    #[arg(short, long, global = true, env = "HABITRACK_USER")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Frequency as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum FrequencyArg {
    Daily,
    Weekly,
}

impl From<FrequencyArg> for crate::model::Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Daily => Self::Daily,
            FrequencyArg::Weekly => Self::Weekly,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Define a new habit
    ///
    /// Titles are unique per owner, ignoring case.
    ///
    /// # Examples
    ///
    ///   habitrack add "Go to shower"
    ///   habitrack add "Call family" -f weekly -d "Sunday evening"
    #[command(alias = "a")]
    Add(AddArgs),

    /// List habits
    #[command(alias = "ls")]
    List,

    /// Change a habit's title, description or frequency
    ///
    /// Omitted fields keep their current values.
    Edit(EditArgs),

    /// Delete a habit and all of its records
    #[command(alias = "rm")]
    Delete {
        /// Title of the habit
        title: String,
    },

    /// Record a completion (or a miss) for a date
    ///
    /// Tracking the same date twice overwrites the earlier record.
    ///
    /// # Examples
    ///
    ///   habitrack track "Go to shower"
    ///   habitrack track "Go to shower" --date yesterday
    ///   habitrack track "Go to shower" --date 2024-10-19 --completed false
    #[command(alias = "t")]
    Track(TrackArgs),

    /// Inspect and correct recorded completions
    Record(RecordArgs),

    /// Streaks, success rates and progress reports
    Stats(StatsArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   habitrack completions bash > ~/.local/share/bash-completion/completions/habitrack
    ///   habitrack completions zsh > ~/.zfunc/_habitrack
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Title of the habit
    pub title: String,

    /// Free-form description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// How often the habit should be performed
    #[arg(short, long, value_enum, default_value = "daily")]
    pub frequency: FrequencyArg,
}

#[derive(Args)]
pub struct EditArgs {
    /// Current title of the habit
    pub title: String,

    /// New title
    #[arg(long = "title", id = "new_title")]
    pub new_title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New frequency
    #[arg(short, long, value_enum)]
    pub frequency: Option<FrequencyArg>,
}

#[derive(Args)]
pub struct TrackArgs {
    /// Title of the habit
    pub title: String,

    /// Date to record: YYYY-MM-DD, today or yesterday
    #[arg(long, default_value = "today")]
    pub date: String,

    /// Whether the habit was completed (true/false, yes/no, done/missed)
    #[arg(short, long, default_value = "true")]
    pub completed: String,
}

#[derive(Args)]
pub struct RecordArgs {
    #[command(subcommand)]
    pub command: RecordCommands,
}

/// Record subcommands.
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Change a record's completion state
    ///
    /// Nothing happens unless a record exists for the date with the
    /// `--from` state.
    Edit {
        /// Title of the habit
        title: String,
        /// Date of the record
        #[arg(long)]
        date: String,
        /// Current completion state
        #[arg(long)]
        from: String,
        /// New completion state
        #[arg(long)]
        to: String,
    },

    /// Delete the record for a date
    Delete {
        /// Title of the habit
        title: String,
        /// Date of the record
        #[arg(long)]
        date: String,
    },

    /// List all records of a habit, oldest first
    List {
        /// Title of the habit
        title: String,
    },
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommands,
}

/// Date range shared by the stats subcommands.
#[derive(Args, Clone, Debug, Default)]
pub struct RangeArgs {
    /// First day of the range (default: `stats.default_range_days` ago)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day of the range (default: today)
    #[arg(long)]
    pub to: Option<String>,
}

/// Statistics subcommands.
#[derive(Subcommand)]
pub enum StatsCommands {
    /// Show the current and longest streak
    Streak {
        /// Title of the habit
        title: String,
    },

    /// Show the success rate over a date range
    Rate {
        /// Title of the habit
        title: String,
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show a full progress report
    Report {
        /// Title of the habit
        title: String,
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show a progress report for every habit
    Summary {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show completion per period as a strip
    ///
    /// One cell per period, oldest on the left: █ done, ░ missed, · untracked.
    History {
        /// Title of the habit
        title: String,
        /// Number of periods to show (default: `stats.history_periods`)
        #[arg(short = 'n', long)]
        periods: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_add_defaults() {
        let cli = Cli::try_parse_from(["habitrack", "add", "Go to shower"]).unwrap();
        if let Commands::Add(args) = cli.command {
            assert_eq!(args.title, "Go to shower");
            assert_eq!(args.description, "");
            assert_eq!(args.frequency, FrequencyArg::Daily);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_add_weekly_with_description() {
        let cli = Cli::try_parse_from([
            "habitrack", "add", "Call family", "-f", "weekly", "-d", "Sunday",
        ])
        .unwrap();
        if let Commands::Add(args) = cli.command {
            assert_eq!(args.frequency, FrequencyArg::Weekly);
            assert_eq!(args.description, "Sunday");
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_add_rejects_unknown_frequency() {
        let result = Cli::try_parse_from(["habitrack", "add", "Read", "-f", "monthly"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_list_alias() {
        let cli = Cli::try_parse_from(["habitrack", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_edit_optional_fields() {
        let cli = Cli::try_parse_from(["habitrack", "edit", "Read", "--title", "Read more"])
            .unwrap();
        if let Commands::Edit(args) = cli.command {
            assert_eq!(args.title, "Read");
            assert_eq!(args.new_title.as_deref(), Some("Read more"));
            assert!(args.description.is_none());
            assert!(args.frequency.is_none());
        } else {
            panic!("Expected Edit command");
        }
    }

    #[test]
    fn test_cli_track_defaults() {
        let cli = Cli::try_parse_from(["habitrack", "track", "Read"]).unwrap();
        if let Commands::Track(args) = cli.command {
            assert_eq!(args.date, "today");
            assert_eq!(args.completed, "true");
        } else {
            panic!("Expected Track command");
        }
    }

    #[test]
    fn test_cli_record_edit() {
        let cli = Cli::try_parse_from([
            "habitrack", "record", "edit", "Read", "--date", "2024-10-19", "--from", "true",
            "--to", "false",
        ])
        .unwrap();
        if let Commands::Record(args) = cli.command {
            if let RecordCommands::Edit { date, from, to, .. } = args.command {
                assert_eq!(date, "2024-10-19");
                assert_eq!(from, "true");
                assert_eq!(to, "false");
            } else {
                panic!("Expected Edit subcommand");
            }
        } else {
            panic!("Expected Record command");
        }
    }

    #[test]
    fn test_cli_record_edit_requires_date() {
        let result = Cli::try_parse_from([
            "habitrack", "record", "edit", "Read", "--from", "true", "--to", "false",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_stats_rate_range() {
        let cli = Cli::try_parse_from([
            "habitrack", "stats", "rate", "Read", "--from", "2024-10-19", "--to", "2024-10-22",
        ])
        .unwrap();
        if let Commands::Stats(args) = cli.command {
            if let StatsCommands::Rate { title, range } = args.command {
                assert_eq!(title, "Read");
                assert_eq!(range.from.as_deref(), Some("2024-10-19"));
                assert_eq!(range.to.as_deref(), Some("2024-10-22"));
            } else {
                panic!("Expected Rate subcommand");
            }
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_cli_stats_summary_without_range() {
        let cli = Cli::try_parse_from(["habitrack", "stats", "summary"]).unwrap();
        if let Commands::Stats(args) = cli.command {
            if let StatsCommands::Summary { range } = args.command {
                assert!(range.from.is_none());
                assert!(range.to.is_none());
            } else {
                panic!("Expected Summary subcommand");
            }
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["habitrack", "list", "-o", "json", "--user", "ana"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.user.as_deref(), Some("ana"));
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["habitrack", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Zsh }
        ));
    }
}
