//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a tree `depth` levels deep with `width` files and `width`
    /// subdirectories at every level.
    pub fn wide(depth: usize, width: usize) -> Self {
        let tree = Self::new();
        tree.fill(tree.path().to_path_buf(), depth, width);
        tree
    }

    fn fill(&self, dir: PathBuf, depth: usize, width: usize) {
        for i in 0..width {
            fs::write(dir.join(format!("file_{}.txt", i)), "x".repeat(i))
                .expect("Failed to write file");
        }
        if depth == 0 {
            return;
        }
        for i in 0..width {
            let sub = dir.join(format!("dir_{}", i));
            fs::create_dir(&sub).expect("Failed to create dir");
            self.fill(sub, depth - 1, width);
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with `content`, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_tree_shape() {
        let tree = TestTree::wide(1, 2);
        // 2 files + 2 dirs at the top, 2 files inside each dir
        assert!(tree.path().join("file_1.txt").exists());
        assert!(tree.path().join("dir_0/file_0.txt").exists());
        assert!(tree.path().join("dir_1/file_1.txt").exists());
        assert!(!tree.path().join("dir_0/dir_0").exists());
    }

    #[test]
    fn test_add_file_creates_parents() {
        let tree = TestTree::new();
        let path = tree.add_file("a/b/c.txt", "hi");
        assert_eq!(fs::read_to_string(path).unwrap(), "hi");
    }
}
