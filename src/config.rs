//! Run configuration.
//!
//! The tool has no configuration file and reads no environment variables.
//! Everything a run needs comes from the command line and is resolved here
//! into a [`RunConfig`]:
//!
//! - the target directory (an explicit path or the current directory),
//!   checked for existence and canonicalized
//! - the canonical path of the running executable, so it is never moved
//! - whether the run is a dry run

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while resolving the directory to organize.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The specified path does not exist.
    #[error("The specified path does not exist: '{}'", .0.display())]
    NotFound(PathBuf),
    /// The specified path exists but is not a directory.
    #[error("The specified path is not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),
    /// The path could not be resolved to an absolute location.
    #[error("Could not resolve '{}': {source}", path.display())]
    Resolve { path: PathBuf, source: io::Error },
}

/// Which directory the user asked to organize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The current working directory.
    Current,
    /// A path as typed on the command line, possibly quoted. Not
    /// necessarily valid UTF-8.
    Path(OsString),
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Canonical path of the directory to organize.
    pub root: PathBuf,
    /// Canonical path of the running executable, if it could be resolved.
    pub exclude_path: Option<PathBuf>,
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
}

impl RunConfig {
    /// Resolves `target` into a run configuration.
    ///
    /// `self_path` is the executable path to protect; it is canonicalized
    /// here and dropped with a warning if that fails.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] or [`ConfigError::NotADirectory`]
    /// when the target is unusable, and [`ConfigError::Resolve`] when the
    /// current directory or the canonical path cannot be determined.
    pub fn resolve(
        target: &Target,
        self_path: Option<&Path>,
        dry_run: bool,
    ) -> Result<Self, ConfigError> {
        let folder_path = match target {
            Target::Current => env::current_dir().map_err(|e| ConfigError::Resolve {
                path: PathBuf::from("."),
                source: e,
            })?,
            Target::Path(raw) => trim_os_path(raw),
        };

        if !folder_path.exists() {
            return Err(ConfigError::NotFound(folder_path));
        }
        if !folder_path.is_dir() {
            return Err(ConfigError::NotADirectory(folder_path));
        }

        let root = folder_path
            .canonicalize()
            .map_err(|e| ConfigError::Resolve {
                path: folder_path.clone(),
                source: e,
            })?;

        let exclude_path = self_path.and_then(|path| match path.canonicalize() {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot resolve executable path");
                None
            }
        });

        Ok(Self {
            root,
            exclude_path,
            dry_run,
        })
    }
}

/// Strips surrounding whitespace, then surrounding `"` and `'` characters.
///
/// Handles paths pasted with quotes from a shell or file manager. Input made
/// only of whitespace and quotes becomes an empty string.
///
/// ```
/// use organize::config::trim_path;
///
/// assert_eq!(trim_path("  \"/home/me/Downloads\"\n"), "/home/me/Downloads");
/// assert_eq!(trim_path("'C:\\Users\\me'"), "C:\\Users\\me");
/// ```
pub fn trim_path(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '"' || c == '\'')
}

/// [`trim_path`] for arguments that may not be valid UTF-8.
///
/// UTF-8 input takes the `&str` path. Otherwise, on Unix, the raw bytes are
/// trimmed of ASCII whitespace and quotes; elsewhere the argument is used
/// unchanged.
pub fn trim_os_path(raw: &OsStr) -> PathBuf {
    if let Some(text) = raw.to_str() {
        return PathBuf::from(trim_path(text));
    }

    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(OsStr::from_bytes(trim_path_bytes(raw.as_bytes())))
    }

    #[cfg(not(unix))]
    {
        PathBuf::from(raw)
    }
}

#[cfg(unix)]
fn trim_path_bytes(bytes: &[u8]) -> &[u8] {
    const WHITESPACE: &[u8] = b" \t\n\r\x0b\x0c";
    const QUOTES: &[u8] = b"\"'";
    trim_bytes(trim_bytes(bytes, WHITESPACE), QUOTES)
}

#[cfg(unix)]
fn trim_bytes<'a>(bytes: &'a [u8], set: &[u8]) -> &'a [u8] {
    let start = bytes
        .iter()
        .position(|b| !set.contains(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !set.contains(b))
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}
