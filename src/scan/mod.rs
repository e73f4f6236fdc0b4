//! Large source file detection.
//!
//! Walks the configured source directories and ranks matching files by
//! line count. Unreadable files are skipped rather than treated as errors:
//! the ranking is advisory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

/// Directories scanned when none are configured.
pub const DEFAULT_SCAN_DIRS: &[&str] = &["components", "app"];

/// Source extensions considered by the scan.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Directory names never descended into.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".expo",
    "dist",
    "build",
    "web-build",
    "coverage",
    ".next",
];

/// Number of files kept when no limit is configured.
pub const DEFAULT_LIMIT: usize = 20;

/// What to scan and how many results to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directories to walk, relative to the scan root.
    pub directories: Vec<PathBuf>,
    /// File extensions to count, without the dot.
    pub extensions: Vec<String>,
    /// Directory names skipped below each scanned directory.
    pub ignored_dirs: Vec<String>,
    /// Maximum number of records returned.
    pub limit: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directories: DEFAULT_SCAN_DIRS.iter().map(PathBuf::from).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ScanConfig {
    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    fn is_ignored_dir(&self, entry: &walkdir::DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        self.ignored_dirs.iter().any(|ignored| ignored == name.as_ref())
    }
}

/// Size information for one source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSize {
    /// File name without directories.
    pub name: String,
    /// Path relative to the scan root.
    pub path: String,
    pub lines: usize,
    /// Size on disk in kilobytes, two decimals.
    pub size_kb: f64,
}

/// Scans every configured directory under `root` and returns the largest
/// files by line count, largest first, truncated to `config.limit`.
///
/// Missing directories contribute nothing. A file reached through
/// overlapping directories is counted once.
pub fn find_large_files(root: &Path, config: &ScanConfig) -> Vec<FileSize> {
    let mut found = BTreeMap::new();

    for dir in &config.directories {
        let dir = root.join(dir);
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "Scan directory missing, skipping");
            continue;
        }
        scan_directory(root, &dir, config, &mut found);
    }

    let mut files: Vec<FileSize> = found.into_values().collect();
    files.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.path.cmp(&b.path)));
    files.truncate(config.limit);
    files
}

/// Walks one directory, keying records by relative path.
///
/// The ignore list applies below `dir` only; `dir` itself is always walked.
fn scan_directory(
    root: &Path,
    dir: &Path,
    config: &ScanConfig,
    files: &mut BTreeMap<String, FileSize>,
) {
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !config.is_ignored_dir(e))
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() || !config.matches_extension(path) {
            continue;
        }

        match measure_file(root, path) {
            Ok(record) => {
                files.entry(record.path.clone()).or_insert(record);
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable file");
            }
        }
    }
}

fn measure_file(root: &Path, path: &Path) -> std::io::Result<FileSize> {
    let content = fs::read_to_string(path)?;
    let bytes = fs::metadata(path)?.len();

    let relative: PathBuf = path.strip_prefix(root).unwrap_or(path).components().collect();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(FileSize {
        name,
        path: relative.display().to_string(),
        lines: content.lines().count(),
        size_kb: round_kb(bytes),
    })
}

/// Bytes to kilobytes, rounded to two decimals.
fn round_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}
