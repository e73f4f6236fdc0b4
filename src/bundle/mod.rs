//! Bundle weight analysis.
//!
//! Checks the manifest against the table of known heavy libraries and
//! pairs the result with the large-file scan to produce a
//! [`BundleReport`].
//!
//! # Example
//!
//! ```ignore
//! use bundlescope::bundle::{BundleAnalysis, BundleReport};
//! use bundlescope::scan::{find_large_files, ScanConfig};
//!
//! let files = find_large_files(root, &ScanConfig::default());
//! let analysis = BundleAnalysis::new(&pkg, files);
//! println!("Heavy packages installed: {} KB", analysis.installed_heavy_kb);
//!
//! let report = BundleReport::new(&analysis, chrono::Utc::now());
//! ```

pub mod analyzer;
pub mod report;

pub use analyzer::{BundleAnalysis, HeavyDependency};
pub use report::{BundleReport, DependencyCounts, EstimatedSize, HeavySection};

/// Formats a kilobyte figure for display.
///
/// ```
/// use bundlescope::bundle::format_kb;
///
/// assert_eq!(format_kb(250.0), "250 KB");
/// assert_eq!(format_kb(1536.0), "1.50 MB");
/// ```
pub fn format_kb(kb: f64) -> String {
    const MB: f64 = 1024.0;

    if kb >= MB {
        format!("{:.2} MB", kb / MB)
    } else if kb.fract() == 0.0 {
        format!("{} KB", kb)
    } else {
        format!("{:.1} KB", kb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(0.0), "0 KB");
        assert_eq!(format_kb(12.34), "12.3 KB");
        assert_eq!(format_kb(1024.0), "1.00 MB");
    }
}
