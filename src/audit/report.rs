//! Serializable audit report.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::DependencyAudit;
use crate::bundle::DependencyCounts;
use crate::catalog::{Recommendations, RECOMMENDATIONS};

pub const AUDIT_PHASE: &str = "Phase 2: Bundle Optimization";
pub const AUDIT_WEEK: &str = "Week 1";
pub const AUDIT_DAY: &str = "Day 2";

/// A duplicate group as written to the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    /// Every member of the group.
    pub packages: &'static [&'static str],
    /// Members the manifest declares, in table order.
    pub installed: Vec<&'static str>,
    pub reason: &'static str,
    pub recommendation: &'static str,
    pub estimated_savings: &'static str,
}

/// Headline numbers for the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    /// Installed packages from the unused table.
    pub unused_candidates: usize,
    /// Groups with more than one member installed.
    pub redundant_groups: usize,
    /// Installed weight flagged for lazy loading.
    pub lazy_load_kb: u32,
}

/// The document written to `dependency-audit.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// RFC 3339 UTC generation time.
    pub timestamp: String,
    pub phase: &'static str,
    pub week: &'static str,
    pub day: &'static str,
    pub dependencies: DependencyCounts,
    pub summary: AuditSummary,
    /// Names of installed unused candidates.
    pub unused_candidates: Vec<&'static str>,
    /// Every duplicate group with its installed subset.
    pub duplicates: Vec<DuplicateEntry>,
    /// Names of installed candidates flagged for lazy loading.
    pub lazy_load_candidates: Vec<&'static str>,
    pub recommendations: Recommendations,
}

impl AuditReport {
    /// Builds the report from a finished audit, stamped with `generated_at`.
    pub fn new(audit: &DependencyAudit, generated_at: DateTime<Utc>) -> Self {
        let duplicates: Vec<DuplicateEntry> = audit
            .duplicates
            .iter()
            .map(|d| DuplicateEntry {
                packages: d.group.packages,
                installed: d.installed.clone(),
                reason: d.group.reason,
                recommendation: d.group.recommendation,
                estimated_savings: d.group.estimated_savings,
            })
            .collect();

        Self {
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            phase: AUDIT_PHASE,
            week: AUDIT_WEEK,
            day: AUDIT_DAY,
            dependencies: DependencyCounts {
                total: audit.total_count,
                production: audit.production_count,
                development: audit.dev_count,
            },
            summary: AuditSummary {
                unused_candidates: audit.unused.len(),
                redundant_groups: audit.duplicates.iter().filter(|d| d.is_redundant()).count(),
                lazy_load_kb: audit.deferrable_kb(),
            },
            unused_candidates: audit.unused.iter().map(|u| u.name).collect(),
            duplicates,
            lazy_load_candidates: audit.lazy().map(|c| c.name).collect(),
            recommendations: RECOMMENDATIONS,
        }
    }
}
