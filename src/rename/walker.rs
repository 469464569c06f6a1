//! Directory walk: plan the kebab-case names, then apply the renames

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::ValueEnum;
use tracing::{debug, info, warn};

use super::{kebab_file_name, RenameError};
use crate::report::RenameSummary;

/// What to do when the kebab-case name is already taken by another entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CollisionPolicy {
    /// Leave the source untouched and keep going
    #[default]
    Skip,
    /// Abort the run with [`RenameError::Collision`]
    Error,
    /// Rename anyway and let the filesystem decide
    Overwrite,
}

/// Options for applying a rename plan
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    /// Report what would happen without touching the filesystem
    pub dry_run: bool,
    pub on_collision: CollisionPolicy,
}

/// A single file name and the name it should get
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub from: String,
    pub to: String,
}

impl PlannedRename {
    pub fn new(name: &str) -> Self {
        Self {
            from: name.to_string(),
            to: kebab_file_name(name),
        }
    }

    /// True when the name is already kebab-case
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// All candidate renames for one directory, sorted by source name
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub directory: PathBuf,
    pub entries: Vec<PlannedRename>,
    pub skipped_dirs: usize,
    pub skipped_non_utf8: usize,
}

/// Result of handling one planned entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: String, to: String },
    Unchanged { name: String },
    Collision { from: String, to: String },
}

/// List the direct entries of `dir` and compute their kebab-case names.
///
/// Directories are skipped. Symlinks are planned like regular files, even when
/// they point at a directory. Names that are not valid UTF-8 are skipped.
pub fn plan_directory(dir: &Path) -> Result<RenamePlan, RenameError> {
    let metadata = fs::metadata(dir).map_err(|e| RenameError::from_io(dir, e))?;
    if !metadata.is_dir() {
        return Err(RenameError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    info!("Scanning {}", dir.display());

    let mut entries = Vec::new();
    let mut skipped_dirs = 0;
    let mut skipped_non_utf8 = 0;

    for entry in fs::read_dir(dir).map_err(|e| RenameError::from_io(dir, e))? {
        let entry = entry.map_err(|e| RenameError::from_io(dir, e))?;
        let path = entry.path();

        // DirEntry::file_type does not follow symlinks
        let file_type = entry
            .file_type()
            .map_err(|e| RenameError::from_entry_io(&path, e))?;
        if file_type.is_dir() {
            debug!("Skipping directory {}", path.display());
            skipped_dirs += 1;
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!("Skipping non UTF-8 file name {:?}", file_name);
            skipped_non_utf8 += 1;
            continue;
        };

        let planned = PlannedRename::new(name);
        debug!("Planned {} -> {}", planned.from, planned.to);
        entries.push(planned);
    }

    entries.sort_by(|a, b| a.from.cmp(&b.from));

    Ok(RenamePlan {
        directory: dir.to_path_buf(),
        entries,
        skipped_dirs,
        skipped_non_utf8,
    })
}

/// Apply a plan, calling `on_outcome` for every entry as it is handled.
///
/// The first filesystem error aborts the loop. Entries renamed before the
/// failure stay renamed.
pub fn apply_plan<F>(
    plan: &RenamePlan,
    options: &RenameOptions,
    mut on_outcome: F,
) -> Result<RenameSummary, RenameError>
where
    F: FnMut(&RenameOutcome),
{
    let start = Instant::now();
    let mut summary = RenameSummary::new(plan, options.dry_run);

    // Names taken and freed so far, so dry runs see the same state a real run would
    let mut claimed: HashSet<&str> = HashSet::new();
    let mut vacated: HashSet<&str> = HashSet::new();

    for planned in &plan.entries {
        if planned.is_noop() {
            let outcome = RenameOutcome::Unchanged {
                name: planned.from.clone(),
            };
            summary.record(&outcome);
            on_outcome(&outcome);
            continue;
        }

        let source = plan.directory.join(&planned.from);
        let target = plan.directory.join(&planned.to);

        let taken = claimed.contains(planned.to.as_str())
            || (!vacated.contains(planned.to.as_str()) && target_taken(&source, &target));

        if taken {
            match options.on_collision {
                CollisionPolicy::Skip => {
                    warn!(
                        "Not renaming {} -> {}: target already exists",
                        planned.from, planned.to
                    );
                    let outcome = RenameOutcome::Collision {
                        from: planned.from.clone(),
                        to: planned.to.clone(),
                    };
                    summary.record(&outcome);
                    on_outcome(&outcome);
                    continue;
                }
                CollisionPolicy::Error => {
                    return Err(RenameError::Collision {
                        from: planned.from.clone(),
                        to: planned.to.clone(),
                    });
                }
                CollisionPolicy::Overwrite => {
                    warn!("Overwriting {} with {}", planned.to, planned.from);
                }
            }
        }

        if !options.dry_run {
            fs::rename(&source, &target).map_err(|e| {
                RenameError::from_rename(&source, &planned.from, &planned.to, e)
            })?;
        }

        claimed.insert(planned.to.as_str());
        vacated.insert(planned.from.as_str());

        let outcome = RenameOutcome::Renamed {
            from: planned.from.clone(),
            to: planned.to.clone(),
        };
        summary.record(&outcome);
        on_outcome(&outcome);
    }

    summary.set_elapsed(start.elapsed());
    Ok(summary)
}

/// Plan and apply in one go
pub fn rename_directory<F>(
    dir: &Path,
    options: &RenameOptions,
    on_outcome: F,
) -> Result<RenameSummary, RenameError>
where
    F: FnMut(&RenameOutcome),
{
    let plan = plan_directory(dir)?;
    apply_plan(&plan, options, on_outcome)
}

/// Whether `target` names an existing entry other than `source` itself.
///
/// On case-insensitive filesystems `Readme` and `readme` are the same entry,
/// which is not a collision.
fn target_taken(source: &Path, target: &Path) -> bool {
    match fs::symlink_metadata(target) {
        Ok(_) => !same_entry(source, target),
        Err(_) => false,
    }
}

#[cfg(unix)]
fn same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_entry(a: &Path, b: &Path) -> bool {
    match (a.file_name(), b.file_name()) {
        (Some(a), Some(b)) => {
            a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
        }
        _ => false,
    }
}
