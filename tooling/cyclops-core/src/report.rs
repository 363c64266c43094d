// tooling/cyclops-core/src/report.rs
//
// Per-file analysis results and their text / JSON renderings.

use serde::Serialize;

use crate::complexity::MethodMetrics;
use crate::rules::Offense;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub methods: Vec<MethodMetrics>,
    /// Ordered by location.
    pub offenses: Vec<Offense>,
}

impl FileReport {
    pub fn has_offenses(&self) -> bool {
        !self.offenses.is_empty()
    }
}

/// Offenses in the `path:line:column: S: Rule: message` form.
pub fn render_offenses(report: &FileReport) -> String {
    let mut out = String::new();
    for offense in &report.offenses {
        out.push_str(&format!(
            "{}:{}: {}: {}: {}\n",
            report.path, offense.location, offense.severity, offense.rule, offense.message
        ));
    }
    out
}

/// Render plain-text report
pub fn render_text_report(report: &FileReport, max: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!("  File    : {}\n", report.path));
    out.push_str(&format!("  Methods : {}\n", report.methods.len()));
    out.push_str(&format!("  Offenses: {}\n\n", report.offenses.len()));

    if !report.methods.is_empty() {
        out.push_str("┌──────────────────────────┬──────┬────────┬───────────┬─────────┬──────────┐\n");
        out.push_str("│ Method                   │ CC   │ Params │ Decisions │ Returns │ Status   │\n");
        out.push_str("├──────────────────────────┼──────┼────────┼───────────┼─────────┼──────────┤\n");
        for m in &report.methods {
            let status = if m.complexity > i64::from(max) { "TOO HIGH" } else { "OK" };
            out.push_str(&format!(
                "│ {:<24} │ {:>4} │ {:>6} │ {:>9} │ {:>7} │ {:<8} │\n",
                truncate(&m.name, 24),
                m.complexity,
                m.param_count,
                m.decision_points,
                m.explicit_returns,
                status,
            ));
        }
        out.push_str("└──────────────────────────┴──────┴────────┴───────────┴─────────┴──────────┘\n\n");
    }

    if report.has_offenses() {
        out.push_str("  OFFENSES:\n");
        for line in render_offenses(report).lines() {
            out.push_str(&format!("  {}\n", line));
        }
        out.push('\n');
    }

    out.push_str(&format!("  Max cyclomatic complexity: {}\n", max));
    out
}

/// Render JSON report
pub fn render_json_report(reports: &[FileReport]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{}…", head)
    }
}
