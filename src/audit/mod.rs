//! Dependency audit against the fixed reference tables.
//!
//! Three independent checks, all pure name lookups against the manifest:
//! packages that may be unused, groups of packages that duplicate each
//! other, and packages that could be deferred from the initial load.

pub mod report;

use crate::catalog::{
    AuditAction, DuplicateGroup, LazyLoadCandidate, UnusedCandidate, DUPLICATE_GROUPS,
    LAZY_LOAD_CANDIDATES, UNUSED_CANDIDATES,
};
use crate::parser::{DependencyType, PackageJson};

pub use report::{AuditReport, AuditSummary};

/// An unused-candidate entry that is actually declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedFinding {
    pub name: &'static str,
    /// Declared version specifier.
    pub version: String,
    /// Production when declared in `dependencies`, otherwise development.
    pub dep_type: DependencyType,
    pub reason: &'static str,
    pub action: AuditAction,
}

/// A duplicate group with the members the manifest declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFinding {
    pub group: &'static DuplicateGroup,
    /// Members of the group present in the manifest, in table order.
    pub installed: Vec<&'static str>,
}

impl DuplicateFinding {
    /// True when more than one member of the group is declared.
    pub fn is_redundant(&self) -> bool {
        self.installed.len() > 1
    }
}

/// The results of all three audit checks.
#[derive(Debug, Clone)]
pub struct DependencyAudit {
    pub production_count: usize,
    pub dev_count: usize,
    /// Size of production ∪ development.
    pub total_count: usize,
    pub unused: Vec<UnusedFinding>,
    /// One entry per duplicate group, including groups with no member installed.
    pub duplicates: Vec<DuplicateFinding>,
    /// Installed lazy-load table entries, lazy or not.
    pub lazy_load: Vec<&'static LazyLoadCandidate>,
}

impl DependencyAudit {
    /// Audits `pkg` against the built-in tables.
    pub fn new(pkg: &PackageJson) -> Self {
        Self::with_tables(pkg, UNUSED_CANDIDATES, DUPLICATE_GROUPS, LAZY_LOAD_CANDIDATES)
    }

    /// Audits `pkg` against explicit tables.
    pub fn with_tables(
        pkg: &PackageJson,
        unused: &'static [UnusedCandidate],
        duplicates: &'static [DuplicateGroup],
        lazy_load: &'static [LazyLoadCandidate],
    ) -> Self {
        let combined = pkg.combined();

        let unused = unused
            .iter()
            .filter_map(|candidate| {
                let version = combined.get(candidate.name)?;
                let dep_type = if pkg.is_production(candidate.name) {
                    DependencyType::Production
                } else {
                    DependencyType::Development
                };
                Some(UnusedFinding {
                    name: candidate.name,
                    version: version.to_string(),
                    dep_type,
                    reason: candidate.reason,
                    action: candidate.action,
                })
            })
            .collect();

        let duplicates = duplicates
            .iter()
            .map(|group| DuplicateFinding {
                group,
                installed: group
                    .packages
                    .iter()
                    .copied()
                    .filter(|name| combined.contains_key(name))
                    .collect(),
            })
            .collect();

        let lazy_load = lazy_load
            .iter()
            .filter(|candidate| combined.contains_key(candidate.name))
            .collect();

        Self {
            production_count: pkg.production_count(),
            dev_count: pkg.dev_count(),
            total_count: combined.len(),
            unused,
            duplicates,
            lazy_load,
        }
    }

    /// Installed candidates flagged for lazy loading.
    pub fn lazy(&self) -> impl Iterator<Item = &'static LazyLoadCandidate> + '_ {
        self.lazy_load.iter().copied().filter(|c| c.lazy)
    }

    /// Installed weight that lazy loading would move out of the initial load.
    pub fn deferrable_kb(&self) -> u32 {
        self.lazy().map(|c| c.size_kb).sum()
    }
}
