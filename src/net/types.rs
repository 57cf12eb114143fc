//! Wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Every response is decoded into one of these types at the
//! boundary; a decoding failure is reported as a backend failure rather than
//! trusted as loose JSON at call sites. Fields the backend may omit carry
//! `#[serde(default)]`, and integer fields it is known to emit as floats go
//! through a tolerant deserializer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================
// Chat
// =============================================================

/// Request body for `POST /api/chat/message`.
///
/// `conversation_id` is serialized even when `None`: the first turn of a
/// session must carry an explicit `conversationId: null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's utterance, already trimmed.
    pub message: String,
    /// Server-issued conversation handle from the prior turn, if any.
    pub conversation_id: Option<i64>,
    /// Free-form UI context hint (e.g. `"chat-page"`), forwarded verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Compliance standard hint (e.g. `"ISO_27001"`), forwarded verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
}

/// Success body for `POST /api/chat/message`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Conversation handle to carry on subsequent turns. Required: a body
    /// without it fails decoding and takes the failure path.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub conversation_id: i64,
    /// Assistant reply text.
    pub message: String,
    /// ISO 8601 generation time, when the server supplies one.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A canned question seeding an empty conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedQuestion {
    /// The question text inserted into the input on click.
    pub question: String,
    /// Display category label.
    pub category: String,
    /// Emoji shown next to the question.
    pub icon: String,
}

// =============================================================
// Documents
// =============================================================

/// A stored compliance document as returned by `/api/documents`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDocument {
    /// Unique document identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Original upload filename.
    pub file_name: String,
    /// MIME type recorded at upload.
    pub file_type: String,
    /// Size in bytes.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub file_size: i64,
    /// Compliance standard the document was uploaded under.
    pub standard: String,
    /// Processing status (e.g. `"UPLOADED"`, `"ANALYZED"`).
    pub status: String,
    /// Attribution recorded at upload.
    pub uploaded_by: String,
    /// Text extracted by the backend, once processed.
    #[serde(default)]
    pub extracted_text: Option<String>,
    /// ISO 8601 creation time.
    pub created_at: String,
    /// ISO 8601 last-update time.
    pub updated_at: String,
}

// =============================================================
// Document analysis
// =============================================================

/// Result of `POST /api/analysis/analyze-document`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Identifier echoed by the analysis service (opaque string).
    #[serde(default)]
    pub document_id: String,
    /// Name of the analyzed document.
    pub document_name: String,
    /// Standard the document was analyzed against.
    pub standard: String,
    /// ISO 8601 analysis time.
    #[serde(default)]
    pub analyzed_at: String,
    /// Headline score and summary.
    pub overall_assessment: OverallAssessment,
    /// Issues requiring attention, ordered by the backend.
    #[serde(default)]
    pub critical_flags: Vec<CriticalFlag>,
    /// Non-blocking improvement suggestions.
    #[serde(default)]
    pub improvements: Vec<ImprovementSuggestion>,
    /// Gaps against the selected standard's controls.
    #[serde(default)]
    pub compliance_gaps: Vec<ComplianceGap>,
    /// Identified risk areas.
    #[serde(default)]
    pub risk_areas: Vec<RiskArea>,
}

/// Headline assessment of an analyzed document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAssessment {
    /// Score as reported by the backend (free-form string, e.g. `"72/100"`).
    pub score: String,
    /// Qualitative rating (e.g. `"Needs Improvement"`).
    pub rating: String,
    /// One-paragraph summary.
    pub summary: String,
    /// Count of critical issues found.
    #[serde(default, deserialize_with = "deserialize_i64_from_number_opt")]
    pub critical_issues: Option<i64>,
    /// Count of warnings found.
    #[serde(default, deserialize_with = "deserialize_i64_from_number_opt")]
    pub warnings: Option<i64>,
    /// Count of recommendations made.
    #[serde(default, deserialize_with = "deserialize_i64_from_number_opt")]
    pub recommendations: Option<i64>,
}

/// A critical issue flagged during analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalFlag {
    pub id: String,
    pub severity: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub affected_controls: Vec<String>,
}

/// A non-blocking improvement suggestion from analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementSuggestion {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub benefit: String,
    #[serde(default)]
    pub effort: String,
}

/// A gap against a specific control of the selected standard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceGap {
    pub control_id: String,
    pub control_name: String,
    pub requirement: String,
    #[serde(default)]
    pub current_state: String,
    #[serde(default)]
    pub expected_state: String,
    #[serde(default)]
    pub gap: String,
    #[serde(default)]
    pub remediation_steps: Vec<String>,
}

/// A risk area identified during analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskArea {
    pub id: String,
    pub risk_level: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub likelihood: String,
    #[serde(default)]
    pub mitigation_actions: Vec<String>,
}

// =============================================================
// Audit findings
// =============================================================

/// Severity of a single audit finding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingSeverity {
    /// Level name (`"CRITICAL"`, `"HIGH"`, `"MEDIUM"`, `"LOW"`).
    pub level: String,
    /// Numeric impact score.
    #[serde(default)]
    pub impact_score: f64,
    /// Recommended remediation window (e.g. `"30 days"`).
    #[serde(default)]
    pub remediation_timeframe: Option<String>,
    #[serde(default)]
    pub business_impact: Option<String>,
    #[serde(default)]
    pub technical_impact: Option<String>,
}

/// One step of a finding's remediation plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationStep {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub step_number: i64,
    pub action: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A single audit finding inside a generated report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFinding {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub severity: FindingSeverity,
    #[serde(default)]
    pub impact_score: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub control_reference: Option<String>,
    #[serde(default)]
    pub standard: Option<String>,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub recommended_timeline: Option<String>,
    #[serde(default)]
    pub affected_controls: Vec<String>,
    #[serde(default)]
    pub remediation_steps: Vec<RemediationStep>,
}

/// A generated audit-findings report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFindingsReport {
    #[serde(default, deserialize_with = "deserialize_i64_from_number_opt")]
    pub document_id: Option<i64>,
    pub document_name: String,
    pub compliance_framework: String,
    #[serde(default)]
    pub findings: Vec<AuditFinding>,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_findings: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub critical_count: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub high_count: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub medium_count: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub low_count: i64,
    #[serde(default)]
    pub executive_summary: String,
    #[serde(default)]
    pub overall_risk_level: Option<String>,
    #[serde(default)]
    pub compliance_status: Option<String>,
    #[serde(default)]
    pub compliance_score: Option<f64>,
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub priority_recommendations: Vec<String>,
    #[serde(default)]
    pub quick_wins: Vec<String>,
}

/// Envelope the findings endpoints wrap their report in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FindingsEnvelope {
    /// The actual report.
    pub data: AuditFindingsReport,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================
// Checklists
// =============================================================

/// A generated compliance checklist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Display name of the standard (e.g. `"ISO 27001:2022"`).
    pub standard_name: String,
    /// Standard key (e.g. `"ISO_27001"`).
    pub standard: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_items: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub completed_items: i64,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub generated_by: String,
}

/// One requirement row of a checklist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Position of the item within its checklist, used for status updates.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub item_number: i64,
    pub requirement: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Export format for checklist templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    /// File extension for a downloaded template.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "xlsx",
        }
    }

    /// MIME type for the blob handed to the browser.
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

/// Request body for `POST /api/checklists/generate-template`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChecklistTemplateRequest {
    /// Standard key (e.g. `"ISO_27001"`).
    pub standard: String,
    /// Requested export format.
    pub format: ExportFormat,
}

// =============================================================
// Grammar
// =============================================================

/// Request body for `POST /api/grammar/correct`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarCorrectionRequest {
    pub text: String,
    pub language: String,
    pub return_suggestions: bool,
}

/// A single grammar correction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarCorrection {
    /// Text span as written.
    pub original: String,
    /// Proposed replacement.
    pub corrected: String,
    /// Correction category (spelling, grammar, style...).
    #[serde(rename = "type")]
    pub correction_type: String,
    /// Human-readable explanation.
    #[serde(default)]
    pub message: String,
    /// Byte offset of the span in the original text.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub offset: i64,
    /// Length of the span.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub length: i64,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// Success body for `POST /api/grammar/correct`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarCorrectionResponse {
    pub original_text: String,
    pub corrected_text: String,
    #[serde(default)]
    pub corrections: Vec<GrammarCorrection>,
    pub language: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub processing_time_ms: i64,
}

// =============================================================
// Risk assessments
// =============================================================

/// A risk assessment for one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub overall_risk_score: f64,
    pub overall_risk_level: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recommendations: String,
    #[serde(default)]
    pub assessed_by: String,
    #[serde(default)]
    pub findings: Vec<RiskFinding>,
    pub created_at: String,
    pub updated_at: String,
}

/// One categorized finding inside a risk assessment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFinding {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub category: String,
    pub finding: String,
    pub risk_score: f64,
    pub risk_level: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub mitigation: String,
}

// =============================================================
// Tolerant numeric deserialization
// =============================================================

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_i64_from_number_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    deserialize_i64_from_number(value).map(Some).map_err(D::Error::custom)
}
