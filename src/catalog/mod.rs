//! Reference tables of packages known ahead of time.
//!
//! Nothing here is discovered at runtime: every table is a `'static` slice
//! matched against manifest entries by package name only.

mod audit;
mod heavy;

use serde::Serialize;

pub use audit::{DUPLICATE_GROUPS, LAZY_LOAD_CANDIDATES, RECOMMENDATIONS, UNUSED_CANDIDATES};
pub use heavy::HEAVY_PACKAGES;

/// A library known to add significant weight to the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeavyPackage {
    /// npm package name.
    pub name: &'static str,
    /// Estimated minified size in kilobytes.
    pub size_kb: u32,
    /// What the package is for (e.g., "Maps", "Dates").
    pub category: &'static str,
    /// A lighter package that covers the same need, if one exists.
    pub alternative: Option<&'static str>,
}

/// What to do about a package that may no longer be needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    /// Check whether the package is still imported.
    Review,
    /// Safe to drop from the manifest.
    Remove,
    /// Confirm the package is only used where expected.
    Verify,
}

impl AuditAction {
    /// Returns the upper-case label shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            AuditAction::Review => "REVIEW",
            AuditAction::Remove => "REMOVE",
            AuditAction::Verify => "VERIFY",
        }
    }
}

/// A package suspected to be no longer needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnusedCandidate {
    /// npm package name.
    pub name: &'static str,
    /// Why the package is suspected.
    pub reason: &'static str,
    /// Recommended follow-up.
    pub action: AuditAction,
}

/// Packages that solve the same problem; usually only one should stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Package names considered interchangeable.
    pub packages: &'static [&'static str],
    /// Why the group is redundant.
    pub reason: &'static str,
    /// Which member to keep, or how to consolidate.
    pub recommendation: &'static str,
    /// Descriptive only, never computed.
    pub estimated_savings: &'static str,
}

/// A package that can be kept out of the initial load path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LazyLoadCandidate {
    /// npm package name.
    pub name: &'static str,
    /// `false` means the package stays in the core bundle.
    pub lazy: bool,
    /// Estimated minified size in kilobytes.
    pub size_kb: u32,
    /// What the package provides to the app.
    pub purpose: &'static str,
    /// When the deferred chunk should be fetched.
    pub trigger: &'static str,
}

/// The fixed three-tier recommendation list attached to every audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    /// Actions to take right away.
    pub immediate: &'static [&'static str],
    /// Actions for the next optimization phase.
    pub next_phase: &'static [&'static str],
    /// Actions that close out the optimization work.
    pub final_phase: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_heavy_table_sorted_by_weight() {
        assert!(HEAVY_PACKAGES
            .windows(2)
            .all(|w| w[0].size_kb >= w[1].size_kb));
    }

    #[test]
    fn test_react_native_maps_weight() {
        let maps = HEAVY_PACKAGES
            .iter()
            .find(|p| p.name == "react-native-maps")
            .unwrap();
        assert_eq!(maps.size_kb, 250);
    }

    #[test]
    fn test_tables_have_unique_names() {
        let heavy: HashSet<_> = HEAVY_PACKAGES.iter().map(|p| p.name).collect();
        assert_eq!(heavy.len(), HEAVY_PACKAGES.len());

        let unused: HashSet<_> = UNUSED_CANDIDATES.iter().map(|c| c.name).collect();
        assert_eq!(unused.len(), UNUSED_CANDIDATES.len());

        let lazy: HashSet<_> = LAZY_LOAD_CANDIDATES.iter().map(|c| c.name).collect();
        assert_eq!(lazy.len(), LAZY_LOAD_CANDIDATES.len());
    }

    #[test]
    fn test_duplicate_groups_have_several_members() {
        assert!(DUPLICATE_GROUPS.iter().all(|g| g.packages.len() >= 2));
    }

    #[test]
    fn test_recommendation_tiers_populated() {
        assert!(!RECOMMENDATIONS.immediate.is_empty());
        assert!(!RECOMMENDATIONS.next_phase.is_empty());
        assert!(!RECOMMENDATIONS.final_phase.is_empty());
    }

    #[test]
    fn test_audit_action_serializes_uppercase() {
        let json = serde_json::to_string(&AuditAction::Verify).unwrap();
        assert_eq!(json, "\"VERIFY\"");
        assert_eq!(AuditAction::Remove.label(), "REMOVE");
    }
}
