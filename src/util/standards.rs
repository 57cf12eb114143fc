//! The compliance standards offered by pickers across the app.

#[cfg(test)]
#[path = "standards_test.rs"]
mod standards_test;

/// One selectable compliance standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandardOption {
    /// Backend key (e.g. `"ISO_27001"`).
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Short tagline for picker cards.
    pub description: &'static str,
}

/// Standards offered by upload, analysis, findings, and checklist pickers.
pub const COMPLIANCE_STANDARDS: [StandardOption; 3] = [
    StandardOption {
        value: "ISO_27001",
        label: "ISO 27001:2022",
        description: "Information security management system requirements",
    },
    StandardOption {
        value: "GDPR",
        label: "GDPR",
        description: "EU General Data Protection Regulation compliance",
    },
    StandardOption {
        value: "HIPAA",
        label: "HIPAA",
        description: "Health Insurance Portability and Accountability Act",
    },
];

/// Display label for a standard key; the key itself when unknown.
#[must_use]
pub fn standard_label(value: &str) -> &str {
    COMPLIANCE_STANDARDS
        .iter()
        .find(|s| s.value == value)
        .map_or(value, |s| s.label)
}
