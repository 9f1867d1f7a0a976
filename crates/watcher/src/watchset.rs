//! Watched paths and their last observed modification times
//!
//! Directories are expanded once at construction; files created later under
//! a watched directory are never picked up.

use crate::error::{Result, WatchError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::debug;
use walkdir::WalkDir;

/// Regular files, plus symlinks that do not resolve to a directory
fn is_watchable(entry: &walkdir::DirEntry) -> bool {
    if entry.path_is_symlink() {
        !entry.path().is_dir()
    } else {
        entry.file_type().is_file()
    }
}

/// Mtime assigned to every path before its first poll
pub const BASELINE: u64 = 0;

/// Mapping from watched file to its last observed mtime (Unix seconds)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSet {
    entries: BTreeMap<PathBuf, u64>,
}

impl WatchSet {
    /// Build a watch set from file and directory arguments
    ///
    /// Directories are walked recursively and contribute every file beneath
    /// them, never themselves. Symlinks are not descended into; a symlink is
    /// watched unless it points at a directory, so a dangling link is kept
    /// and fails the first poll. Fails on the first argument that is
    /// neither a file nor a directory; nothing is returned in that case.
    pub fn build<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for path in paths {
            let path = path.as_ref();

            if path.is_dir() {
                for entry in WalkDir::new(path).follow_links(false) {
                    let entry = entry?;

                    if !is_watchable(&entry) {
                        continue;
                    }

                    entries.insert(entry.into_path(), BASELINE);
                }
            } else if path.is_file() {
                entries.insert(path.to_path_buf(), BASELINE);
            } else {
                return Err(WatchError::NotFound {
                    path: path.to_path_buf(),
                });
            }
        }

        debug!("Watching {} files", entries.len());
        Ok(Self { entries })
    }

    /// Stat every watched file and record those whose mtime moved forward
    ///
    /// The first failing stat aborts the cycle. A missing file is fatal, it
    /// is never dropped from the set.
    pub fn poll(&mut self) -> Result<PollResult> {
        let mut changed = Vec::new();

        for (path, last) in self.entries.iter_mut() {
            let current = mtime_secs(path)?;

            if current > *last {
                *last = current;
                changed.push(path.clone());
            }
        }

        Ok(PollResult { changed })
    }

    /// Last observed mtime for `path`, if it is watched
    pub fn get(&self, path: &Path) -> Option<u64> {
        self.entries.get(path).copied()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate over (path, mtime) pairs in path order
    pub fn iter(&self) -> impl Iterator<Item = (&Path, u64)> {
        self.entries.iter().map(|(path, mtime)| (path.as_path(), *mtime))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Paths whose mtime advanced during one poll cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollResult {
    changed: Vec<PathBuf>,
}

impl PollResult {
    /// Changed paths in path order
    pub fn paths(&self) -> &[PathBuf] {
        &self.changed
    }

    pub fn len(&self) -> usize {
        self.changed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.changed
    }
}

/// Modification time of `path` in whole seconds since the Unix epoch
///
/// Times before the epoch collapse to the baseline.
fn mtime_secs(path: &Path) -> Result<u64> {
    let modified = std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|source| WatchError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(modified
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(BASELINE))
}
