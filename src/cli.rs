//! Command-line interface for organize.
//!
//! This module handles:
//! - Argument parsing (including the legacy `-C` and `-H` spellings)
//! - Diagnostic logging setup
//! - Orchestrating a run and reporting each file as it is processed

use crate::config::{ConfigError, RunConfig, Target};
use crate::file_organizer::{FileOrganizer, FileOutcome, FileReport, OrganizeError, OrganizeReport};
use crate::output::OutputFormatter;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::Path;
use thiserror::Error;
use tracing::Level;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "organize",
    version,
    about = "Organizes files in the specified folder into subdirectories based on file type.",
    disable_help_flag = true
)]
pub struct Args {
    /// Folder to organize; surrounding quotes and whitespace are ignored
    #[arg(value_name = "FOLDER_PATH", conflicts_with = "current")]
    pub folder: Option<OsString>,

    /// Organize files in the current working directory
    #[arg(short = 'c', long = "current", short_alias = 'C')]
    pub current: bool,

    /// Show what would be moved without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print diagnostic details for every entry
    #[arg(short, long)]
    pub verbose: bool,

    /// Show this help message
    // Stands in for the disabled built-in flag so `-H` can alias it. Only
    // clap writes this field.
    #[allow(dead_code)]
    #[arg(short = 'h', long = "help", short_alias = 'H', action = ArgAction::Help)]
    help: Option<bool>,
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrganizeCommand {
    /// No folder given: show usage.
    Help,
    /// Organize a folder.
    Organize {
        target: Target,
        /// If true, simulate the operation without making changes.
        dry_run: bool,
    },
}

impl Args {
    pub fn into_command(self) -> OrganizeCommand {
        let target = if self.current {
            Target::Current
        } else if let Some(folder) = self.folder {
            Target::Path(folder)
        } else {
            return OrganizeCommand::Help;
        };
        OrganizeCommand::Organize {
            target,
            dry_run: self.dry_run,
        }
    }
}

/// Parses arguments from any iterator, as `std::env::args_os` would yield them.
///
/// Help and version requests come back as `Err` with a kind of
/// `DisplayHelp` / `DisplayVersion`, exactly as clap reports them.
pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)
}

/// Prints the usage text to stdout.
pub fn print_help() {
    let mut command = Args::command();
    if let Err(e) = command.print_help() {
        OutputFormatter::error(&format!("Could not print help: {}", e));
    }
}

/// Errors that end a run with a failure exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Error: {0}")]
    Config(#[from] ConfigError),
    #[error("An unexpected error occurred: {0}")]
    Organize(#[from] OrganizeError),
}

/// Installs the stderr diagnostics subscriber.
///
/// Only warnings are shown unless `verbose` is set. Calling this twice is
/// harmless.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolves `target` and organizes it.
///
/// `self_path` is the running executable, which is never moved even when it
/// lives inside the target folder.
///
/// # Examples
///
/// ```no_run
/// use organize::cli::run_cli;
/// use organize::config::Target;
///
/// let self_path = std::env::current_exe().ok();
/// match run_cli(&Target::Current, self_path.as_deref(), false) {
///     Ok(report) => println!("moved {} files", report.moved()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(
    target: &Target,
    self_path: Option<&Path>,
    dry_run: bool,
) -> Result<OrganizeReport, CliError> {
    let config = RunConfig::resolve(target, self_path, dry_run)?;
    organize_directory(&config)
}

/// Organizes an already resolved directory, reporting to the console.
pub fn organize_directory(config: &RunConfig) -> Result<OrganizeReport, CliError> {
    let root = config.root.display();
    if config.dry_run {
        OutputFormatter::dry_run_notice(&format!("Analyzing files in '{}'...", root));
    } else {
        OutputFormatter::info(&format!("Organizing files in '{}'...", root));
    }

    let spinner = OutputFormatter::create_spinner();
    let result = FileOrganizer::default().organize(
        &config.root,
        config.exclude_path.as_deref(),
        config.dry_run,
        |file| {
            spinner.inc(1);
            spinner.set_message(file.name.clone());
            spinner.suspend(|| report_file(file, config.dry_run));
        },
    );
    spinner.finish_and_clear();
    let report = result?;

    if report.entries.is_empty() {
        OutputFormatter::plain("No files found to organize.");
    } else {
        OutputFormatter::summary_table(&report);
    }

    if report.failures() > 0 {
        OutputFormatter::warning("Some files could not be organized. Please review errors above.");
    }

    if config.dry_run {
        OutputFormatter::success("Dry run complete. No files were modified.");
    } else {
        OutputFormatter::success("File organization complete.");
    }

    Ok(report)
}

fn report_file(file: &FileReport, dry_run: bool) {
    match &file.outcome {
        FileOutcome::Moved { category, .. } if dry_run => {
            OutputFormatter::plain(&format!(" - {} → would move to {}/", file.name, category));
        }
        FileOutcome::Moved { category, .. } => {
            OutputFormatter::plain(&format!(" - {} → {}/", file.name, category));
        }
        FileOutcome::SkippedCollision { category } => {
            OutputFormatter::warning(&format!(
                "Skipping '{}': file already exists in '{}' folder.",
                file.name, category
            ));
        }
        FileOutcome::SkippedNoExtension => {
            OutputFormatter::plain(&format!(" - {} (no extension, left in place)", file.name));
        }
        FileOutcome::SkippedSelf => {
            OutputFormatter::plain(&format!(" - {} (running program, left in place)", file.name));
        }
        FileOutcome::Failed { error } => {
            OutputFormatter::error(&format!("Error moving file '{}': {}", file.name, error));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn command(args: &[&str]) -> OrganizeCommand {
        parse_args(args.iter().copied())
            .expect("arguments should parse")
            .into_command()
    }

    #[test]
    fn test_no_arguments_shows_help() {
        assert_eq!(command(&["organize"]), OrganizeCommand::Help);
    }

    #[test]
    fn test_folder_argument_is_kept_raw() {
        assert_eq!(
            command(&["organize", " \"/tmp/my dir\" "]),
            OrganizeCommand::Organize {
                target: Target::Path(" \"/tmp/my dir\" ".into()),
                dry_run: false,
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_folder_argument_is_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let folder = OsString::from_vec(b"/tmp/caf\xe9".to_vec());
        let args = parse_args([OsString::from("organize"), folder.clone()])
            .expect("non-UTF-8 paths should parse");

        assert_eq!(
            args.into_command(),
            OrganizeCommand::Organize {
                target: Target::Path(folder),
                dry_run: false,
            }
        );
    }

    #[test]
    fn test_current_flag_variants() {
        for flag in ["-c", "-C", "--current"] {
            assert_eq!(
                command(&["organize", flag]),
                OrganizeCommand::Organize {
                    target: Target::Current,
                    dry_run: false,
                },
                "flag {}",
                flag
            );
        }
    }

    #[test]
    fn test_dry_run_flag() {
        assert_eq!(
            command(&["organize", "--dry-run", "-c"]),
            OrganizeCommand::Organize {
                target: Target::Current,
                dry_run: true,
            }
        );
    }

    #[test]
    fn test_help_flag_variants() {
        for flag in ["-h", "-H", "--help"] {
            let err = parse_args(["organize", flag]).expect_err("help should short-circuit");
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "flag {}", flag);
            assert!(!err.use_stderr());
        }
    }

    #[test]
    fn test_current_conflicts_with_folder() {
        let err = parse_args(["organize", "-c", "/tmp"]).expect_err("should conflict");
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }
}
