//! Shared output formatting for scan reports.

use anyhow::Result;
use std::fmt::Write;
use wcag_lint_core::ScanReport;

use crate::OutputFormat;

/// Print a scan report in the specified format.
pub fn print(report: &ScanReport, format: OutputFormat) -> Result<()> {
    print!("{}", render(report, format)?);
    Ok(())
}

/// Render a scan report in the specified format.
pub fn render(report: &ScanReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report)?,
        OutputFormat::Compact => render_compact(report),
    })
}

fn render_text(report: &ScanReport) -> String {
    let mut out = report.format_report();
    if !report.is_clean() {
        out.push_str("\nThese are automated hints. Manual testing is still required.\n");
    }
    for path in &report.files_failed {
        let _ = writeln!(out, "Could not scan {}", path.display());
    }
    out
}

fn render_json(report: &ScanReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

fn render_compact(report: &ScanReport) -> String {
    let mut out = String::new();
    for v in report.violations.iter().chain(&report.warnings) {
        let _ = writeln!(
            out,
            "{}:{}:{}: {} [{}] {}",
            v.location.file.display(),
            v.location.line,
            v.location.column,
            v.severity,
            v.rule,
            v.message,
        );
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wcag_lint_core::{Location, Severity, Violation};

    fn report() -> ScanReport {
        let mut report = ScanReport::new();
        report.extend([
            Violation::new(
                "heading-hierarchy",
                Severity::Low,
                Location::new(PathBuf::from("src/Page.tsx"), 4, 7),
                "Use semantic heading levels, not className for sizing",
                "1.3.1 Info and Relationships (Level A)",
            ),
            Violation::new(
                "image-alt",
                Severity::Critical,
                Location::new(PathBuf::from("src/Logo.tsx"), 1, 0),
                "Image has no alt attribute",
                "1.1.1 Non-text Content (Level A)",
            )
            .with_code("<img src={logo} />"),
        ]);
        report.files_scanned = 2;
        report
    }

    #[test]
    fn compact_lists_violations_before_warnings() {
        let out = render(&report(), OutputFormat::Compact).unwrap();
        insta::assert_snapshot!(out, @r"
        src/Logo.tsx:1:0: critical [image-alt] Image has no alt attribute
        src/Page.tsx:4:7: low [heading-hierarchy] Use semantic heading levels, not className for sizing
        ");
    }

    #[test]
    fn json_round_trips() {
        let out = render(&report(), OutputFormat::Json).unwrap();
        let parsed: ScanReport = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.violations.len(), 1);
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.files_scanned, 2);
        assert!(out.contains("\"severity\": \"critical\""));
    }

    #[test]
    fn clean_text_report_has_no_hint() {
        let mut clean = ScanReport::new();
        clean.files_scanned = 3;
        let out = render(&clean, OutputFormat::Text).unwrap();
        assert_eq!(out, "No accessibility issues found in 3 file(s)\n");
    }

    #[test]
    fn text_report_names_failed_files() {
        let mut failed = report();
        failed.files_failed.push(PathBuf::from("src/Broken.tsx"));
        let out = render(&failed, OutputFormat::Text).unwrap();
        assert!(out.contains("Manual testing is still required"));
        assert!(out.ends_with("Could not scan src/Broken.tsx\n"));
    }
}
