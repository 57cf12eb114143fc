use super::*;
use crate::net::types::FindingSeverity;

fn finding(level: &str) -> AuditFinding {
    AuditFinding {
        id: None,
        title: "finding".to_owned(),
        description: "description".to_owned(),
        severity: FindingSeverity {
            level: level.to_owned(),
            impact_score: 5.0,
            remediation_timeframe: None,
            business_impact: None,
            technical_impact: None,
        },
        impact_score: 5.0,
        status: None,
        control_reference: None,
        standard: None,
        evidence: None,
        priority: None,
        recommended_timeline: None,
        affected_controls: Vec::new(),
        remediation_steps: Vec::new(),
    }
}

#[test]
fn default_state_has_no_report() {
    let state = FindingsState::default();
    assert!(state.report.is_none());
    assert!(!state.generating);
}

#[test]
fn severity_counts_tallies_each_level_case_insensitively() {
    let findings = vec![
        finding("CRITICAL"),
        finding("critical"),
        finding("High"),
        finding("MEDIUM"),
        finding("low"),
    ];
    let counts = severity_counts(&findings);
    assert_eq!(counts.critical, 2);
    assert_eq!(counts.high, 1);
    assert_eq!(counts.medium, 1);
    assert_eq!(counts.low, 1);
}

#[test]
fn severity_counts_folds_unknown_levels_into_low() {
    let counts = severity_counts(&[finding("INFORMATIONAL"), finding("")]);
    assert_eq!(counts.low, 2);
    assert_eq!(counts.critical + counts.high + counts.medium + counts.low, 2);
}

#[test]
fn severity_counts_of_empty_report_is_zero() {
    assert_eq!(severity_counts(&[]), SeverityCounts::default());
}
