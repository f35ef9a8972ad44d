//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::HabitError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `HabitError::Parse` if the generated script is not UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, HabitError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "habitrack", &mut buf);
    String::from_utf8(buf).map_err(|e| HabitError::Parse(format!("UTF-8 error: {e}")))
}

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if script generation fails.
pub fn completions(shell: Shell) -> Result<String, HabitError> {
    generate_completions(shell)
}
