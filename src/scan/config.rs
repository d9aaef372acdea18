//! Configuration types for the scanner

/// Configuration for scanning behavior.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Number of worker threads used for a scan.
    /// 0 = auto-detect (use all available cores)
    /// N = dedicated pool with N worker threads
    pub jobs: usize,
    /// Traverse symbolic links to directories. Cycles are detected and cut.
    pub follow_links: bool,
}
