//! Risk-assessment state and score classification.

#[cfg(test)]
#[path = "risk_test.rs"]
mod risk_test;

use crate::net::types::RiskAssessment;

/// State for the risk dashboard page.
#[derive(Clone, Debug, Default)]
pub struct RiskState {
    pub assessment: Option<RiskAssessment>,
    pub history: Vec<RiskAssessment>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Risk level band for a 0–100 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Minimal,
}

impl RiskLevel {
    /// Classify a 0–100 risk score into a band.
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Critical
        } else if score >= 60.0 {
            Self::High
        } else if score >= 40.0 {
            Self::Medium
        } else if score >= 20.0 {
            Self::Low
        } else {
            Self::Minimal
        }
    }

    /// Parse a backend level name; unknown names map to `Minimal`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "CRITICAL" => Self::Critical,
            "HIGH" => Self::High,
            "MEDIUM" => Self::Medium,
            "LOW" => Self::Low,
            _ => Self::Minimal,
        }
    }

    /// CSS modifier class for badges and bars.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Critical => "risk--critical",
            Self::High => "risk--high",
            Self::Medium => "risk--medium",
            Self::Low => "risk--low",
            Self::Minimal => "risk--minimal",
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Minimal => "MINIMAL",
        }
    }
}
