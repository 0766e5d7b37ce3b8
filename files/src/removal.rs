// Best-effort deletion of files and directory trees.
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// How hard to try when a delete fails for a reason other than the path being gone.
/// Virus scanners and indexers on some platforms hold files open for a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalPolicy {
    pub attempts: u32,
    pub delay_ms: u64,
}

impl Default for RemovalPolicy {
    fn default() -> Self {
        RemovalPolicy {
            attempts: 10,
            delay_ms: 100,
        }
    }
}

impl RemovalPolicy {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// What happened to a path handed to [`Remover`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Nothing existed at the path.
    Absent,
    /// A directory was given where a file was expected.
    NotAFile,
    Removed,
    /// The path (or something under it) still exists after all attempts.
    Failed,
}

impl Removal {
    pub fn is_removed(self) -> bool {
        self == Removal::Removed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Removal::Absent => "absent",
            Removal::NotAFile => "not-a-file",
            Removal::Removed => "removed",
            Removal::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Remover {
    policy: RemovalPolicy,
}

impl Remover {
    pub fn new(policy: RemovalPolicy) -> Self {
        Remover { policy }
    }

    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    /// Deletes a single file or symlink. Directories are refused.
    pub fn remove_file(&self, path: &Path) -> Removal {
        match fs::symlink_metadata(path) {
            Err(_) => Removal::Absent,
            Ok(meta) if meta.is_dir() => Removal::NotAFile,
            Ok(_) => self.delete_with_retry(path, |p| fs::remove_file(p)),
        }
    }

    /// Deletes a directory with everything below it, depth first.
    ///
    /// Symlinks are removed, never followed. The walk stops at the first member
    /// that cannot be removed and the whole call reports [`Removal::Failed`].
    /// A plain file is removed as if passed to [`Remover::remove_file`].
    pub fn remove_tree(&self, path: &Path) -> Removal {
        self.remove_tree_with(path, &|p: &Path, is_dir: bool| {
            if is_dir {
                fs::remove_dir(p)
            } else {
                fs::remove_file(p)
            }
        })
    }

    /// Tree removal with the per-entry delete supplied by the caller; `true` marks a directory.
    fn remove_tree_with(&self, path: &Path, delete: &dyn Fn(&Path, bool) -> io::Result<()>) -> Removal {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(_) => return Removal::Absent,
        };
        if !meta.is_dir() {
            return self.remove_file(path);
        }

        for entry in WalkDir::new(path).follow_links(false).contents_first(true) {
            let entry = match entry {
                Ok(entry) => entry,
                // Vanished between listing and visiting.
                Err(e) if e.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) => continue,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Cannot walk directory for removal");
                    return Removal::Failed;
                }
            };
            let is_dir = entry.file_type().is_dir();
            match self.delete_with_retry(entry.path(), |p| delete(p, is_dir)) {
                Removal::Removed | Removal::Absent => {}
                Removal::NotAFile | Removal::Failed => return Removal::Failed,
            }
        }
        Removal::Removed
    }

    fn delete_with_retry<F>(&self, path: &Path, delete: F) -> Removal
    where
        F: Fn(&Path) -> io::Result<()>,
    {
        let attempts = self.policy.attempts.max(1);
        for attempt in 1..=attempts {
            match delete(path) {
                Ok(()) => {
                    debug!(path = %path.display(), "Removed");
                    return Removal::Removed;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Removal::Absent,
                Err(e) if attempt == attempts => {
                    warn!(path = %path.display(), attempts, error = %e, "Giving up on removal");
                }
                Err(e) => {
                    debug!(path = %path.display(), attempt, error = %e, "Removal failed, retrying");
                    thread::sleep(self.policy.delay());
                }
            }
        }
        Removal::Failed
    }
}
