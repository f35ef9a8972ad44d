use anyhow::{Context as _, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use log::{info, warn};

use habitrack::cli::args::{Cli, Commands};
use habitrack::cli::commands::{self, Context};
use habitrack::config::{Config, Paths};
use habitrack::logging::{flush_logs, init_logging};
use habitrack::storage::{Database, SqliteHabitStore, SqliteRecordStore};

fn main() {
    let result = run();
    flush_logs();
    if let Err(e) = result {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Completions never touch the data directory.
    if let Commands::Completions { shell } = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let paths = Paths::new().context("Failed to resolve data directory")?;
    let config = Config::load(&paths)?;
    config.general.color.apply();

    if config.logging.enabled {
        if let Err(e) = init_logging(&config.logging.level, &paths.logs) {
            eprintln!("{}: logging disabled: {e}", "warning".yellow().bold());
        }
    }

    let db = Database::open(&paths).context("Failed to open habit database")?;
    let habits = SqliteHabitStore::new(&db);
    let records = SqliteRecordStore::new(&db);

    let owner = config.resolve_owner(cli.user.as_deref());
    let format = cli.output.unwrap_or(config.general.default_output);
    let ctx = Context::new(
        &habits,
        &records,
        &config,
        owner,
        Local::now().date_naive(),
        format,
    );

    let result = match cli.command {
        Commands::Add(args) => commands::add(&ctx, args),
        Commands::List => commands::list(&ctx),
        Commands::Edit(args) => commands::edit(&ctx, args),
        Commands::Delete { title } => commands::delete(&ctx, &title),
        Commands::Track(args) => commands::track(&ctx, args),
        Commands::Record(args) => commands::record(&ctx, args.command),
        Commands::Stats(args) => commands::stats(&ctx, args.command),
        Commands::Completions { shell } => commands::completions(shell),
    };

    let output = match result {
        Ok(output) => {
            info!("event=command module=cli status=ok owner={}", ctx.owner);
            output
        }
        Err(e) => {
            warn!(
                "event=command module=cli status=error user_error={} owner={}",
                e.is_user_error(),
                ctx.owner
            );
            return Err(e.into());
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
