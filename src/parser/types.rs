//! Shared types for manifest parsing.
//!
//! This module defines the data structures used to represent a
//! package.json manifest and the dependencies it declares.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The subset of a package.json file needed for reporting.
///
/// Dependency maps are ordered by package name so every listing derived
/// from them is stable across runs.
///
/// # Example
///
/// ```
/// use bundlescope::parser::types::PackageJson;
///
/// let json = r#"{"name": "my-app", "dependencies": {"react": "18.2.0"}}"#;
/// let pkg: PackageJson = serde_json::from_str(json).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// assert_eq!(pkg.production_count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageJson {
    /// The name of the package.
    pub name: Option<String>,

    /// The version of the package.
    pub version: Option<String>,

    /// Production dependencies required at runtime.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    /// Development-only dependencies (testing, building, etc.).
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Number of production dependencies.
    pub fn production_count(&self) -> usize {
        self.dependencies.len()
    }

    /// Number of development dependencies.
    pub fn dev_count(&self) -> usize {
        self.dev_dependencies.len()
    }

    /// Returns true if `name` is declared in either group.
    pub fn is_installed(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Returns true if `name` is a production dependency.
    pub fn is_production(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// Production and development dependencies combined.
    ///
    /// A package declared in both groups keeps its development version.
    pub fn combined(&self) -> BTreeMap<&str, &str> {
        self.dependencies
            .iter()
            .chain(self.dev_dependencies.iter())
            .map(|(name, version)| (name.as_str(), version.as_str()))
            .collect()
    }
}

/// Categorizes the type of dependency relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyType {
    /// Production dependencies - shipped with the application.
    Production,

    /// Development dependencies - never part of the bundle.
    Development,
}

impl DependencyType {
    /// Returns a short label for the dependency type.
    pub fn label(&self) -> &'static str {
        match self {
            DependencyType::Production => "prod",
            DependencyType::Development => "dev",
        }
    }
}

/// A single declared dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// The package name (e.g., "react", "expo-router").
    pub name: String,

    /// The version specifier (e.g., "^18.0.0", "~1.2.3").
    pub version: String,

    /// The group this dependency was declared in.
    pub dep_type: DependencyType,
}

impl Dependency {
    /// Creates a new Dependency instance.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        dep_type: DependencyType,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dep_type,
        }
    }

    /// Returns true if this is a development dependency.
    pub fn is_dev(&self) -> bool {
        self.dep_type == DependencyType::Development
    }
}
