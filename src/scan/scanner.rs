//! Scanner - fans a directory listing out over a rayon pool

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::entry::Entry;
use crate::error::{Error, Result};

use super::config::ScanConfig;
use super::visited::VisitedDirs;

/// Lists the children of one directory.
type ReadChildren = fn(&Path) -> io::Result<Vec<PathBuf>>;

/// Scan `path` with the default configuration.
pub fn scan(path: &Path, recurse: bool) -> Result<Vec<Entry>> {
    Scanner::new(ScanConfig::default()).scan(path, recurse)
}

/// Directory scanner with a bounded worker pool.
///
/// One scanner can be reused for any number of scans; the pool is built once.
pub struct Scanner {
    config: ScanConfig,
    pool: Option<rayon::ThreadPool>,
    read_children: ReadChildren,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        let pool = if config.jobs == 0 {
            None
        } else {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(config.jobs)
                .thread_name(|i| format!("grove-scan-{i}"))
                .build()
            {
                Ok(pool) => Some(pool),
                Err(e) => {
                    // Fall back to rayon's global pool if custom pool creation fails
                    warn!(jobs = config.jobs, error = %e, "could not build scan pool, using global pool");
                    None
                }
            }
        };
        Self {
            config,
            pool,
            read_children,
        }
    }

    #[cfg(test)]
    fn with_reader(mut self, reader: ReadChildren) -> Self {
        self.read_children = reader;
        self
    }

    /// List `path` and, if `recurse` is set, everything below it.
    ///
    /// Only a failure to list `path` itself is an error. Unreadable
    /// subdirectories are logged and contribute no entries. The order of the
    /// returned entries is not defined.
    pub fn scan(&self, path: &Path, recurse: bool) -> Result<Vec<Entry>> {
        let children = (self.read_children)(path).map_err(|source| Error::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;

        let visited = VisitedDirs::new();
        if self.config.follow_links {
            if let Ok(meta) = fs::metadata(path) {
                visited.first_visit(path, &meta);
            }
        }

        let entries = match &self.pool {
            Some(pool) => pool.install(|| self.fan_out(children, recurse, &visited)),
            None => self.fan_out(children, recurse, &visited),
        };

        debug!(
            path = %path.display(),
            recurse,
            count = entries.len(),
            "scan complete"
        );
        Ok(entries)
    }

    /// Run units wave by wave: every child of the current wave is one unit,
    /// and the directories those units list make up the next wave.
    fn fan_out(&self, children: Vec<PathBuf>, recurse: bool, visited: &VisitedDirs) -> Vec<Entry> {
        let mut entries = Vec::new();
        let mut wave = children;
        let mut depth = 0usize;

        while !wave.is_empty() {
            let (found, nested): (Vec<Entry>, Vec<Vec<PathBuf>>) = wave
                .into_par_iter()
                .filter_map(|child| self.scan_entry(child, recurse, visited))
                .unzip();
            entries.extend(found);
            wave = nested.into_iter().flatten().collect();
            depth += 1;
        }

        debug!(depth, "fan-out drained");
        entries
    }

    /// One unit of work: the entry itself and, when descending, the children
    /// of the directory it names.
    fn scan_entry(
        &self,
        path: PathBuf,
        recurse: bool,
        visited: &VisitedDirs,
    ) -> Option<(Entry, Vec<PathBuf>)> {
        let metadata = match self.entry_metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping entry with unreadable metadata");
                return None;
            }
        };

        let name = path.file_name()?.to_string_lossy().into_owned();
        let entry = Entry::from_metadata(name, &metadata);

        if !recurse || !metadata.is_dir() {
            return Some((entry, Vec::new()));
        }

        if self.config.follow_links && !visited.first_visit(&path, &metadata) {
            debug!(path = %path.display(), "directory already visited, not descending");
            return Some((entry, Vec::new()));
        }

        match (self.read_children)(&path) {
            Ok(nested) => Some((entry, nested)),
            Err(source) => {
                let err = Error::SubtreeRead { path, source };
                warn!("{err}");
                Some((entry, Vec::new()))
            }
        }
    }

    fn entry_metadata(&self, path: &Path) -> io::Result<Metadata> {
        if self.config.follow_links {
            // Broken links still get reported, as the link itself
            fs::metadata(path).or_else(|_| fs::symlink_metadata(path))
        } else {
            fs::symlink_metadata(path)
        }
    }
}

/// Read the children of a directory, skipping entries that fail to read.
///
/// Only paths are kept so the directory handle is closed before the
/// children are processed.
fn read_children(path: &Path) -> io::Result<Vec<PathBuf>> {
    let children = fs::read_dir(path)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .collect();
    Ok(children)
}
