//! Audit-findings report state and severity tallies.

#[cfg(test)]
#[path = "findings_test.rs"]
mod findings_test;

use crate::net::types::{AuditFinding, AuditFindingsReport};

/// State for the findings page: one report at a time.
#[derive(Clone, Debug, Default)]
pub struct FindingsState {
    pub report: Option<AuditFindingsReport>,
    pub generating: bool,
    pub error: Option<String>,
}

/// Severity tallies recomputed from the findings themselves.
///
/// The report carries its own counts, but they come from the same generation
/// pass as the findings and have been observed to disagree; the rendered
/// badges use this local tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Tally findings by severity level, case-insensitively.
///
/// Unknown levels are counted as low rather than dropped so the tallies
/// always sum to the number of findings.
#[must_use]
pub fn severity_counts(findings: &[AuditFinding]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for finding in findings {
        match finding.severity.level.to_ascii_uppercase().as_str() {
            "CRITICAL" => counts.critical += 1,
            "HIGH" => counts.high += 1,
            "MEDIUM" => counts.medium += 1,
            _ => counts.low += 1,
        }
    }
    counts
}
