//! Directory identity tracking used to break symlink cycles.

use std::collections::HashSet;
use std::fs::Metadata;
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DirId {
    #[cfg(unix)]
    Inode { dev: u64, ino: u64 },
    #[cfg(not(unix))]
    Canonical(std::path::PathBuf),
}

impl DirId {
    #[cfg(unix)]
    fn of(_path: &Path, metadata: &Metadata) -> Option<Self> {
        use std::os::unix::fs::MetadataExt;
        Some(DirId::Inode {
            dev: metadata.dev(),
            ino: metadata.ino(),
        })
    }

    #[cfg(not(unix))]
    fn of(path: &Path, _metadata: &Metadata) -> Option<Self> {
        path.canonicalize().ok().map(DirId::Canonical)
    }
}

/// Set of directories already descended into during one scan.
#[derive(Debug, Default)]
pub(crate) struct VisitedDirs {
    seen: Mutex<HashSet<DirId>>,
}

impl VisitedDirs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record `path` and return `true` if this is the first time it was seen.
    ///
    /// Directories whose identity cannot be determined always count as new.
    pub(crate) fn first_visit(&self, path: &Path, metadata: &Metadata) -> bool {
        let Some(id) = DirId::of(path, metadata) else {
            return true;
        };
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id)
    }
}
