//! Human-readable console rendering.
//!
//! Fixed-width text with status glyphs. Not meant to be parsed; use the
//! JSON report for that.

use std::io::{self, Write};

use crossterm::style::{style, Color, Stylize};

use crate::audit::DependencyAudit;
use crate::bundle::{format_kb, BundleAnalysis};
use crate::catalog::{AuditAction, RECOMMENDATIONS};

/// Optional ANSI styling for status markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    /// Creates a palette; `color = false` yields plain text.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            style(text).with(Color::Cyan).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn good(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    fn warn(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    fn bad(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    fn muted(&self, text: &str) -> String {
        self.paint(text, Color::DarkGrey)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

/// Renders analysis results as console text.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    palette: Palette,
}

impl ConsoleRenderer {
    /// Creates a renderer using the given palette.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Writes the bundle analysis: dependency counts, the heavy table with
    /// its installed total, lighter alternatives, production dependencies
    /// and, when any were found, the largest source files.
    pub fn render_bundle<W: Write>(&self, analysis: &BundleAnalysis, w: &mut W) -> io::Result<()> {
        let p = &self.palette;
        let production = analysis.production();
        let development = analysis.development();

        writeln!(w, "{}", p.heading("📦 Bundle Analysis"))?;
        writeln!(w, "{}", "=".repeat(60))?;
        writeln!(w)?;

        writeln!(w, "{}", p.heading("📊 Dependencies"))?;
        writeln!(w, "   Production:  {}", production.len())?;
        writeln!(w, "   Development: {}", development.len())?;
        writeln!(w)?;

        writeln!(w, "{}", p.heading("🏋️  Heavy Dependencies"))?;
        for heavy in &analysis.heavy {
            let marker = if heavy.installed {
                p.warn("● installed")
            } else {
                p.muted("○ not installed")
            };
            writeln!(
                w,
                "   {:>2}. {:<28} {:>8}  {:<14} {}",
                heavy.rank,
                heavy.name,
                format_kb(heavy.size_kb as f64),
                heavy.category,
                marker
            )?;
        }
        writeln!(
            w,
            "   Installed heavy total: {}",
            p.warn(&format_kb(analysis.installed_heavy_kb as f64))
        )?;

        let replaceable: Vec<_> = analysis.replaceable().collect();
        if !replaceable.is_empty() {
            writeln!(w)?;
            writeln!(w, "{}", p.heading("💡 Lighter Alternatives"))?;
            for heavy in replaceable {
                if let Some(alternative) = heavy.alternative {
                    writeln!(w, "   {} → {}", heavy.name, p.good(alternative))?;
                }
            }
        }
        writeln!(w)?;

        writeln!(w, "{}", p.heading("📋 Production Dependencies"))?;
        if production.is_empty() {
            writeln!(w, "   {}", p.muted("(none)"))?;
        }
        for dep in &production {
            writeln!(w, "   {:<40} {}", dep.name, dep.version)?;
        }

        if !analysis.large_files.is_empty() {
            writeln!(w)?;
            writeln!(
                w,
                "{}",
                p.heading(&format!(
                    "📁 Largest Source Files (top {})",
                    analysis.large_files.len()
                ))
            )?;
            writeln!(w, "   {:>6}  {:>10}  {}", "Lines", "Size", "Path")?;
            for file in &analysis.large_files {
                writeln!(
                    w,
                    "   {:>6}  {:>10}  {}",
                    file.lines,
                    format_kb(file.size_kb),
                    file.path
                )?;
            }
        }

        Ok(())
    }

    /// Writes the audit: unused candidates, duplicate groups, lazy-load
    /// candidates and the fixed recommendation tiers.
    pub fn render_audit<W: Write>(&self, audit: &DependencyAudit, w: &mut W) -> io::Result<()> {
        let p = &self.palette;

        writeln!(w, "{}", p.heading("🔍 Dependency Audit"))?;
        writeln!(w, "{}", "=".repeat(60))?;
        writeln!(
            w,
            "   Total: {}  (production {}, development {})",
            audit.total_count, audit.production_count, audit.dev_count
        )?;
        writeln!(w)?;

        writeln!(w, "{}", p.heading("🗑️  Potentially Unused"))?;
        if audit.unused.is_empty() {
            writeln!(w, "   {}", p.good("✓ none installed"))?;
        }
        for finding in &audit.unused {
            let action = match finding.action {
                AuditAction::Remove => p.bad(finding.action.label()),
                AuditAction::Review => p.warn(finding.action.label()),
                AuditAction::Verify => p.muted(finding.action.label()),
            };
            writeln!(
                w,
                "   [{}] {}@{} ({})",
                action,
                finding.name,
                finding.version,
                finding.dep_type.label()
            )?;
            writeln!(w, "            {}", finding.reason)?;
        }
        writeln!(w)?;

        writeln!(w, "{}", p.heading("👯 Duplicate Groups"))?;
        for finding in &audit.duplicates {
            let group = finding.group;
            let installed = if finding.installed.is_empty() {
                p.muted("none")
            } else if finding.is_redundant() {
                p.warn(&format!("⚠ {}", finding.installed.join(", ")))
            } else {
                p.good(&finding.installed.join(", "))
            };
            writeln!(w, "   {}", group.packages.join(" / "))?;
            writeln!(w, "      Installed:      {}", installed)?;
            writeln!(w, "      Reason:         {}", group.reason)?;
            writeln!(w, "      Recommendation: {}", group.recommendation)?;
            writeln!(w, "      Est. savings:   {}", group.estimated_savings)?;
        }
        writeln!(w)?;

        writeln!(w, "{}", p.heading("⏳ Lazy-load Candidates"))?;
        if audit.lazy_load.is_empty() {
            writeln!(w, "   {}", p.muted("(none installed)"))?;
        }
        for candidate in &audit.lazy_load {
            let mode = if candidate.lazy {
                p.good("LAZY")
            } else {
                p.muted("CORE")
            };
            writeln!(
                w,
                "   [{}] {:<28} {:>8}  {}",
                mode,
                candidate.name,
                format_kb(candidate.size_kb as f64),
                candidate.purpose
            )?;
            writeln!(w, "          Trigger: {}", candidate.trigger)?;
        }
        writeln!(
            w,
            "   Deferrable weight: {}",
            format_kb(audit.deferrable_kb() as f64)
        )?;
        writeln!(w)?;

        writeln!(w, "{}", p.heading("✅ Recommendations"))?;
        let tiers = [
            ("Immediate", RECOMMENDATIONS.immediate),
            ("Next phase", RECOMMENDATIONS.next_phase),
            ("Final phase", RECOMMENDATIONS.final_phase),
        ];
        for (title, items) in tiers {
            writeln!(w, "   {}:", title)?;
            for item in items {
                writeln!(w, "     - {}", item)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use crate::scan::FileSize;

    fn render_bundle(json: &str, large_files: Vec<FileSize>) -> String {
        let pkg = parse_str(json).unwrap();
        let analysis = BundleAnalysis::new(&pkg, large_files);
        let mut out = Vec::new();
        ConsoleRenderer::default()
            .render_bundle(&analysis, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn render_audit(json: &str) -> String {
        let pkg = parse_str(json).unwrap();
        let audit = DependencyAudit::new(&pkg);
        let mut out = Vec::new();
        ConsoleRenderer::default()
            .render_audit(&audit, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bundle_lists_heavy_status() {
        let out = render_bundle(
            r#"{"dependencies": {"react-native-maps": "1.0.0", "moment": "^2.29.4"}}"#,
            Vec::new(),
        );

        let maps_line = out.lines().find(|l| l.contains("react-native-maps")).unwrap();
        assert!(maps_line.contains("250 KB"));
        assert!(maps_line.contains("● installed"));
        assert!(out.contains("Installed heavy total: 540 KB"));
        assert!(out.contains("moment → dayjs"));
        assert!(!out.contains("\u{1b}["));
    }

    #[test]
    fn test_bundle_large_files_table_only_when_present() {
        let out = render_bundle("{}", Vec::new());
        assert!(!out.contains("Largest Source Files"));
        assert!(out.contains("(none)"));

        let out = render_bundle(
            "{}",
            vec![FileSize {
                name: "Map.tsx".to_string(),
                path: "components/Map.tsx".to_string(),
                lines: 812,
                size_kb: 31.5,
            }],
        );
        assert!(out.contains("Largest Source Files (top 1)"));
        assert!(out.contains("components/Map.tsx"));
        assert!(out.contains("812"));
    }

    #[test]
    fn test_audit_sections() {
        let out = render_audit(
            r#"{"dependencies": {"moment": "^2.29.4", "react-native-maps": "1.14.0"},
                "devDependencies": {"lodash": "^4.17.21"}}"#,
        );

        assert!(out.contains("[REMOVE] moment@^2.29.4 (prod)"));
        assert!(out.contains("[REVIEW] lodash@^4.17.21 (dev)"));
        assert!(out.contains("[LAZY] react-native-maps"));
        assert!(out.contains("Trigger: Opening a map screen"));
        assert!(out.contains("Immediate:"));
        assert!(out.contains("Final phase:"));
    }

    #[test]
    fn test_audit_empty_manifest() {
        let out = render_audit("{}");
        assert!(out.contains("✓ none installed"));
        assert!(out.contains("(none installed)"));
        assert!(out.contains("Deferrable weight: 0 KB"));
    }

    #[test]
    fn test_palette_keeps_text() {
        assert!(Palette::new(true).good("ok").contains("ok"));
        assert_eq!(Palette::plain().good("ok"), "ok");
        assert_eq!(Palette::plain().heading("title"), "title");
    }
}
