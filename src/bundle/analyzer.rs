//! Heavy dependency detection against the manifest.

use serde::Serialize;

use crate::catalog::{HeavyPackage, HEAVY_PACKAGES};
use crate::parser::{group_by_type, merge_dependencies, Dependency, PackageJson};
use crate::scan::FileSize;

/// One heavy-table entry with its installation status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeavyDependency {
    /// Position in the heavy table, starting at 1.
    pub rank: usize,
    /// npm package name.
    pub name: &'static str,
    /// Estimated minified size in kilobytes.
    pub size_kb: u32,
    /// What the package is for.
    pub category: &'static str,
    /// Whether the manifest declares the package in either group.
    pub installed: bool,
    /// Lighter package covering the same need.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative: Option<&'static str>,
}

impl HeavyDependency {
    fn from_entry(rank: usize, entry: &HeavyPackage, installed: bool) -> Self {
        Self {
            rank,
            name: entry.name,
            size_kb: entry.size_kb,
            category: entry.category,
            installed,
            alternative: entry.alternative,
        }
    }
}

/// Everything the bundle analyzer derives from one manifest and one scan.
#[derive(Debug, Clone)]
pub struct BundleAnalysis {
    /// All declared dependencies, ordered by name.
    pub dependencies: Vec<Dependency>,
    /// The full heavy table in rank order.
    pub heavy: Vec<HeavyDependency>,
    /// Sum of `size_kb` over installed heavy packages.
    pub installed_heavy_kb: u32,
    /// Largest source files, largest first.
    pub large_files: Vec<FileSize>,
}

impl BundleAnalysis {
    /// Runs the heavy-package check against `pkg` using the built-in table.
    pub fn new(pkg: &PackageJson, large_files: Vec<FileSize>) -> Self {
        Self::with_table(pkg, HEAVY_PACKAGES, large_files)
    }

    /// Same as [`BundleAnalysis::new`] with an explicit heavy table.
    pub fn with_table(pkg: &PackageJson, table: &[HeavyPackage], large_files: Vec<FileSize>) -> Self {
        let dependencies = merge_dependencies(pkg);

        let heavy: Vec<HeavyDependency> = table
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                HeavyDependency::from_entry(i + 1, entry, pkg.is_installed(entry.name))
            })
            .collect();

        let installed_heavy_kb = heavy
            .iter()
            .filter(|h| h.installed)
            .map(|h| h.size_kb)
            .sum();

        Self {
            dependencies,
            heavy,
            installed_heavy_kb,
            large_files,
        }
    }

    /// Returns the production dependencies, ordered by name.
    pub fn production(&self) -> Vec<&Dependency> {
        group_by_type(&self.dependencies).0
    }

    /// Returns the development dependencies, ordered by name.
    pub fn development(&self) -> Vec<&Dependency> {
        group_by_type(&self.dependencies).1
    }

    /// Installed heavy packages that have a lighter alternative.
    pub fn replaceable(&self) -> impl Iterator<Item = &HeavyDependency> {
        self.heavy
            .iter()
            .filter(|h| h.installed && h.alternative.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_single_heavy_package_total() {
        let pkg = parse_str(r#"{"dependencies": {"react-native-maps": "1.0.0"}}"#).unwrap();
        let analysis = BundleAnalysis::new(&pkg, Vec::new());

        let maps = analysis
            .heavy
            .iter()
            .find(|h| h.name == "react-native-maps")
            .unwrap();
        assert!(maps.installed);
        assert_eq!(analysis.installed_heavy_kb, 250);
        assert_eq!(analysis.heavy.iter().filter(|h| h.installed).count(), 1);
    }

    #[test]
    fn test_dev_dependencies_count_as_installed() {
        let pkg = parse_str(
            r#"{"dependencies": {"axios": "^1.6.0"}, "devDependencies": {"lodash": "^4.17.21"}}"#,
        )
        .unwrap();
        let analysis = BundleAnalysis::new(&pkg, Vec::new());

        assert_eq!(analysis.installed_heavy_kb, 30 + 70);
    }

    #[test]
    fn test_empty_manifest() {
        let pkg = parse_str("{}").unwrap();
        let analysis = BundleAnalysis::new(&pkg, Vec::new());

        assert!(analysis.dependencies.is_empty());
        assert_eq!(analysis.installed_heavy_kb, 0);
        assert_eq!(analysis.heavy.len(), HEAVY_PACKAGES.len());
        assert!(analysis.heavy.iter().all(|h| !h.installed));
    }

    #[test]
    fn test_ranks_follow_table_order() {
        let table = [
            HeavyPackage {
                name: "a",
                size_kb: 10,
                category: "X",
                alternative: None,
            },
            HeavyPackage {
                name: "b",
                size_kb: 5,
                category: "Y",
                alternative: Some("c"),
            },
        ];
        let pkg = parse_str(r#"{"dependencies": {"b": "1.0.0"}}"#).unwrap();
        let analysis = BundleAnalysis::with_table(&pkg, &table, Vec::new());

        assert_eq!(analysis.heavy[0].rank, 1);
        assert_eq!(analysis.heavy[1].rank, 2);
        assert_eq!(analysis.installed_heavy_kb, 5);

        let replaceable: Vec<_> = analysis.replaceable().map(|h| h.name).collect();
        assert_eq!(replaceable, ["b"]);
    }

    #[test]
    fn test_partition_counts() {
        let pkg = parse_str(
            r#"{"dependencies": {"react": "18.2.0", "expo": "~51.0.0"}, "devDependencies": {"jest": "^29.7.0"}}"#,
        )
        .unwrap();
        let analysis = BundleAnalysis::new(&pkg, Vec::new());

        assert_eq!(analysis.production().len(), 2);
        assert_eq!(analysis.development().len(), 1);
    }
}
