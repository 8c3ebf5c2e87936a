//! Moving files into category folders.
//!
//! This module provisions one subfolder per [`Category`] under a base
//! directory and relocates each top-level file into the folder its extension
//! maps to. Collisions are skipped, never overwritten, and a failure on one
//! file does not stop the rest of the batch.

use crate::file_category::{Category, FileMapper};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during file organization operations.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// Failed to create a category directory.
    #[error("Error creating directory {}: {source}", path.display())]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
    /// Something other than a directory occupies a category folder name.
    #[error("Cannot use {} as a category folder: not a directory", path.display())]
    NotADirectory { path: PathBuf },
    /// The base directory could not be listed.
    #[error("Error reading directory {}: {source}", path.display())]
    ReadDirFailed { path: PathBuf, source: io::Error },
    /// Failed to move a file to its category directory.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Ensures every category folder exists directly under `base_path`.
///
/// Existing folders are left alone. The first folder that cannot be created
/// aborts the whole call; nothing should be moved in that case.
pub fn ensure_folders(base_path: &Path) -> OrganizeResult<()> {
    for category in Category::ALL {
        let folder_path = base_path.join(category.dir_name());
        match fs::create_dir(&folder_path) {
            Ok(()) => debug!(path = %folder_path.display(), "created category folder"),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if !folder_path.is_dir() {
                    return Err(OrganizeError::NotADirectory { path: folder_path });
                }
            }
            Err(e) => {
                return Err(OrganizeError::DirectoryCreationFailed {
                    path: folder_path,
                    source: e,
                });
            }
        }
    }
    Ok(())
}

/// Checks that nothing but a directory occupies a category folder name.
///
/// Creates nothing. A dry run uses this to fail where [`ensure_folders`]
/// would.
pub fn check_folders(base_path: &Path) -> OrganizeResult<()> {
    for category in Category::ALL {
        let folder_path = base_path.join(category.dir_name());
        if fs::symlink_metadata(&folder_path).is_ok() && !folder_path.is_dir() {
            return Err(OrganizeError::NotADirectory { path: folder_path });
        }
    }
    Ok(())
}

/// What happened to a single file during a run.
#[derive(Debug)]
pub enum FileOutcome {
    /// Moved (or, in a dry run, would be moved) to `destination`.
    Moved {
        category: Category,
        destination: PathBuf,
    },
    /// A file with the same name already exists in the category folder.
    SkippedCollision { category: Category },
    /// The file name has no extension.
    SkippedNoExtension,
    /// The file is the running executable.
    SkippedSelf,
    /// The move itself failed.
    Failed { error: OrganizeError },
}

/// Outcome for one file, reported as soon as it is known.
#[derive(Debug)]
pub struct FileReport {
    /// The file name, lossily converted for display.
    pub name: String,
    /// The path the file had when it was scanned.
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// All per-file outcomes of one run, in scan order.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub entries: Vec<FileReport>,
    /// True when nothing was actually touched.
    pub dry_run: bool,
}

impl OrganizeReport {
    pub fn moved(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Moved { .. }))
    }

    pub fn collisions(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::SkippedCollision { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                FileOutcome::SkippedCollision { .. }
                    | FileOutcome::SkippedNoExtension
                    | FileOutcome::SkippedSelf
            )
        })
    }

    pub fn failures(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    /// Number of moved files per category folder name.
    pub fn category_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for entry in &self.entries {
            if let FileOutcome::Moved { category, .. } = entry.outcome {
                *counts.entry(category.dir_name().to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

/// Organizes the top level of a directory into category folders.
#[derive(Debug, Clone, Default)]
pub struct FileOrganizer {
    mapper: FileMapper,
}

impl FileOrganizer {
    pub fn new(mapper: FileMapper) -> Self {
        Self { mapper }
    }

    /// Organizes `base_path`, calling `on_file` for every regular file as soon
    /// as its outcome is known.
    ///
    /// Only direct entries are visited; subdirectories, including the
    /// category folders, are never descended into or moved. `exclude_path`
    /// should be the canonical path of the running executable.
    ///
    /// In a dry run no folders are created and no files are moved, but
    /// collisions against already existing category folders are still
    /// detected, and a non-directory in place of a category folder fails
    /// the run just as it would for real.
    ///
    /// # Errors
    ///
    /// Fails only if the category folders cannot be provisioned or the base
    /// directory cannot be listed. Per-file failures are reported as
    /// [`FileOutcome::Failed`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use organize::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let organizer = FileOrganizer::default();
    /// let report = organizer
    ///     .organize(Path::new("/home/user/Downloads"), None, false, |file| {
    ///         println!("{}: {:?}", file.name, file.outcome);
    ///     })
    ///     .expect("organization failed");
    /// println!("moved {} files", report.moved());
    /// ```
    pub fn organize<F>(
        &self,
        base_path: &Path,
        exclude_path: Option<&Path>,
        dry_run: bool,
        mut on_file: F,
    ) -> OrganizeResult<OrganizeReport>
    where
        F: FnMut(&FileReport),
    {
        if dry_run {
            check_folders(base_path)?;
        } else {
            ensure_folders(base_path)?;
        }

        let entries = fs::read_dir(base_path).map_err(|e| OrganizeError::ReadDirFailed {
            path: base_path.to_path_buf(),
            source: e,
        })?;

        let mut report = OrganizeReport {
            entries: Vec::new(),
            dry_run,
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();

            // Follows symlinks: a link to a file is moved, a link to a directory is not.
            if !path.is_file() {
                debug!(path = %path.display(), "not a regular file, ignoring");
                continue;
            }

            let outcome = self.process_file(base_path, &path, exclude_path, dry_run);
            let file_report = FileReport {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                outcome,
            };
            on_file(&file_report);
            report.entries.push(file_report);
        }

        Ok(report)
    }

    fn process_file(
        &self,
        base_path: &Path,
        file_path: &Path,
        exclude_path: Option<&Path>,
        dry_run: bool,
    ) -> FileOutcome {
        if let Some(exclude) = exclude_path
            && is_same_file(file_path, exclude)
        {
            debug!(path = %file_path.display(), "skipping the running executable");
            return FileOutcome::SkippedSelf;
        }

        let Some(category) = self.mapper.classify_path(file_path) else {
            debug!(path = %file_path.display(), "no extension, leaving in place");
            return FileOutcome::SkippedNoExtension;
        };

        // file_path came from read_dir, so it always has a final component.
        let Some(file_name) = file_path.file_name() else {
            return FileOutcome::SkippedNoExtension;
        };
        let destination = base_path.join(category.dir_name()).join(file_name);

        // symlink_metadata so a dangling link at the destination still counts.
        if fs::symlink_metadata(&destination).is_ok() {
            return FileOutcome::SkippedCollision { category };
        }

        if dry_run {
            return FileOutcome::Moved {
                category,
                destination,
            };
        }

        // Not atomic with the check above; a file created in between is overwritten on Unix.
        match fs::rename(file_path, &destination) {
            Ok(()) => {
                debug!(
                    from = %file_path.display(),
                    to = %destination.display(),
                    "moved"
                );
                FileOutcome::Moved {
                    category,
                    destination,
                }
            }
            Err(e) => FileOutcome::Failed {
                error: OrganizeError::FileMoveFailure {
                    from: file_path.to_path_buf(),
                    to: destination,
                    source: e,
                },
            },
        }
    }
}

fn is_same_file(path: &Path, canonical_other: &Path) -> bool {
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    resolved == canonical_other
}
