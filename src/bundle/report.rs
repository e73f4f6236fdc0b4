//! Serializable bundle report.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::analyzer::{BundleAnalysis, HeavyDependency};
use crate::scan::FileSize;

/// Optimization phase the bundle report belongs to.
pub const BUNDLE_PHASE: &str = "Phase 2: Bundle Optimization";
pub const BUNDLE_WEEK: &str = "Week 1";
pub const BUNDLE_STATUS: &str = "BASELINE_CAPTURED";

/// Fixed size estimate. Real figures need a production build.
pub static ESTIMATED_SIZE: EstimatedSize = EstimatedSize {
    web_initial: "~2.5-3.5 MB (unminified)",
    native_js: "~4-6 MB",
    note: "Rough estimate; run a production export for measured sizes",
};

/// Qualitative bundle size figures, not measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimatedSize {
    /// Initial web bundle.
    pub web_initial: &'static str,
    /// Native JavaScript bundle.
    pub native_js: &'static str,
    pub note: &'static str,
}

/// Declared dependency counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DependencyCounts {
    /// Distinct packages across both groups.
    pub total: usize,
    /// Packages counted as production (not also declared as dev).
    pub production: usize,
    /// Packages declared in `devDependencies`.
    pub development: usize,
}

/// The heavy-package table with its installed totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeavySection {
    /// Every table entry, in rank order.
    pub packages: Vec<HeavyDependency>,
    /// Number of entries the manifest declares.
    pub installed_count: usize,
    /// Sum of `size_kb` over installed entries.
    pub installed_total_kb: u32,
}

/// The document written to `bundle-analysis.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleReport {
    /// RFC 3339 UTC generation time.
    pub timestamp: String,
    pub phase: &'static str,
    pub week: &'static str,
    pub dependencies: DependencyCounts,
    pub heavy_dependencies: HeavySection,
    pub estimated_size: EstimatedSize,
    /// Largest source files, largest first.
    pub large_files: Vec<FileSize>,
    pub status: &'static str,
}

impl BundleReport {
    /// Builds the report from a finished analysis, stamped with `generated_at`.
    pub fn new(analysis: &BundleAnalysis, generated_at: DateTime<Utc>) -> Self {
        let production = analysis.production().len();
        let development = analysis.development().len();

        Self {
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            phase: BUNDLE_PHASE,
            week: BUNDLE_WEEK,
            dependencies: DependencyCounts {
                total: production + development,
                production,
                development,
            },
            heavy_dependencies: HeavySection {
                packages: analysis.heavy.clone(),
                installed_count: analysis.heavy.iter().filter(|h| h.installed).count(),
                installed_total_kb: analysis.installed_heavy_kb,
            },
            estimated_size: ESTIMATED_SIZE,
            large_files: analysis.large_files.clone(),
            status: BUNDLE_STATUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_report_json_shape() {
        let pkg = parse_str(
            r#"{"dependencies": {"react-native-maps": "1.0.0"}, "devDependencies": {"jest": "^29.7.0"}}"#,
        )
        .unwrap();
        let analysis = BundleAnalysis::new(&pkg, Vec::new());
        let report = BundleReport::new(&analysis, fixed_time());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["timestamp"], "2026-01-15T09:30:00.000Z");
        assert_eq!(json["dependencies"]["total"], 2);
        assert_eq!(json["dependencies"]["production"], 1);
        assert_eq!(json["dependencies"]["development"], 1);
        assert_eq!(json["heavy_dependencies"]["installed_total_kb"], 250);
        assert_eq!(json["heavy_dependencies"]["installed_count"], 1);
        assert_eq!(json["status"], BUNDLE_STATUS);

        let maps = json["heavy_dependencies"]["packages"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == "react-native-maps")
            .unwrap();
        assert_eq!(maps["installed"], true);
        assert_eq!(maps["size_kb"], 250);
    }

    #[test]
    fn test_empty_manifest_report() {
        let pkg = parse_str("{}").unwrap();
        let analysis = BundleAnalysis::new(&pkg, Vec::new());
        let json = serde_json::to_value(BundleReport::new(&analysis, fixed_time())).unwrap();

        assert_eq!(json["dependencies"]["total"], 0);
        assert_eq!(json["heavy_dependencies"]["installed_total_kb"], 0);
        assert!(json["large_files"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_reports_differ_only_by_timestamp() {
        let pkg = parse_str(r#"{"dependencies": {"lodash": "^4.17.21"}}"#).unwrap();
        let analysis = BundleAnalysis::new(&pkg, Vec::new());

        let mut first = BundleReport::new(&analysis, fixed_time());
        let second = BundleReport::new(&analysis, Utc::now());
        assert_ne!(first, second);

        first.timestamp = second.timestamp.clone();
        assert_eq!(first, second);
    }
}
