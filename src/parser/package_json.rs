//! Parser for npm package.json manifests.
//!
//! This module loads a manifest from disk and flattens its dependency
//! groups into the normalized [`Dependency`] list the reports work from.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::{Dependency, DependencyType, PackageJson};

/// Errors that can occur while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No file exists at the manifest path.
    #[error("package.json not found at {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("Failed to read file: {0}")]
    IoError(#[from] io::Error),

    /// The content is not a valid manifest document.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a package.json file from a file path.
///
/// A missing file is reported as [`ParseError::NotFound`] so callers can
/// tell it apart from a file that exists but is unreadable.
pub fn parse_file(path: &Path) -> ParseResult<PackageJson> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ParseError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ParseError::IoError(e),
    })?;

    let pkg = parse_str(&content)?;
    tracing::info!(
        path = %path.display(),
        production = pkg.production_count(),
        development = pkg.dev_count(),
        "Parsed manifest"
    );
    Ok(pkg)
}

/// Parses a package.json from a string.
///
/// # Example
///
/// ```
/// use bundlescope::parser::package_json::parse_str;
///
/// let pkg = parse_str(r#"{"devDependencies": {"jest": "^29.0.0"}}"#).unwrap();
/// assert_eq!(pkg.dev_count(), 1);
/// ```
pub fn parse_str(content: &str) -> ParseResult<PackageJson> {
    let pkg: PackageJson = serde_json::from_str(content)?;
    Ok(pkg)
}

/// Merges both dependency groups into one list ordered by name.
///
/// A package is marked as a development dependency when it appears in
/// `devDependencies`, whether or not it is also a production dependency.
///
/// # Example
///
/// ```
/// use bundlescope::parser::package_json::{parse_str, merge_dependencies};
///
/// let pkg = parse_str(r#"{
///     "dependencies": {"react": "18.2.0", "expo": "~51.0.0"},
///     "devDependencies": {"jest": "^29.0.0"}
/// }"#).unwrap();
///
/// let deps = merge_dependencies(&pkg);
/// let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
/// assert_eq!(names, ["expo", "jest", "react"]);
/// assert!(deps[1].is_dev());
/// ```
pub fn merge_dependencies(pkg: &PackageJson) -> Vec<Dependency> {
    pkg.combined()
        .into_iter()
        .map(|(name, version)| {
            let dep_type = if pkg.dev_dependencies.contains_key(name) {
                DependencyType::Development
            } else {
                DependencyType::Production
            };
            Dependency::new(name, version, dep_type)
        })
        .collect()
}

/// Splits dependencies into (production, development) lists.
pub fn group_by_type(deps: &[Dependency]) -> (Vec<&Dependency>, Vec<&Dependency>) {
    deps.iter().partition(|d| !d.is_dev())
}
