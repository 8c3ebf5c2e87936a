//! organize - sort the files of a folder into category subfolders
//!
//! This library classifies files by extension using a fixed category table,
//! provisions one folder per category, and moves each top-level file into the
//! folder it belongs to, skipping name collisions and the running program.

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod output;

pub use config::{ConfigError, RunConfig, Target, trim_os_path, trim_path};
pub use file_category::{Category, FileMapper};
pub use file_organizer::{
    FileOrganizer, FileOutcome, FileReport, OrganizeError, OrganizeReport, check_folders,
    ensure_folders,
};

pub use cli::{CliError, OrganizeCommand, run_cli};
