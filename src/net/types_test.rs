use super::*;

// =============================================================
// Chat wire contract
// =============================================================

#[test]
fn chat_request_serializes_null_conversation_id_on_first_turn() {
    let request = ChatRequest {
        message: "hello".to_owned(),
        conversation_id: None,
        context: None,
        standard: None,
    };
    let json = serde_json::to_value(&request).expect("should serialize");
    assert_eq!(json["conversationId"], serde_json::Value::Null);
    assert!(json.get("context").is_none());
    assert!(json.get("standard").is_none());
}

#[test]
fn chat_request_serializes_hints_and_adopted_id() {
    let request = ChatRequest {
        message: "hello".to_owned(),
        conversation_id: Some(42),
        context: Some("chat-page".to_owned()),
        standard: Some("ISO_27001".to_owned()),
    };
    let json = serde_json::to_value(&request).expect("should serialize");
    assert_eq!(json["conversationId"], 42);
    assert_eq!(json["context"], "chat-page");
    assert_eq!(json["standard"], "ISO_27001");
}

#[test]
fn chat_response_decodes_with_and_without_timestamp() {
    let with: ChatResponse = serde_json::from_value(serde_json::json!({
        "conversationId": 101,
        "message": "Article 32 requires...",
        "timestamp": "2024-01-01T00:00:00Z"
    }))
    .expect("should decode");
    assert_eq!(with.conversation_id, 101);
    assert_eq!(with.timestamp.as_deref(), Some("2024-01-01T00:00:00Z"));

    let without: ChatResponse = serde_json::from_value(serde_json::json!({
        "conversationId": 7,
        "message": "hi"
    }))
    .expect("should decode");
    assert_eq!(without.timestamp, None);
}

#[test]
fn chat_response_requires_conversation_id() {
    let result = serde_json::from_value::<ChatResponse>(serde_json::json!({
        "message": "hi"
    }));
    assert!(result.is_err());
}

#[test]
fn chat_response_accepts_float_encoded_conversation_id() {
    let response: ChatResponse = serde_json::from_value(serde_json::json!({
        "conversationId": 101.0,
        "message": "hi"
    }))
    .expect("should decode");
    assert_eq!(response.conversation_id, 101);
}

// =============================================================
// Documents
// =============================================================

#[test]
fn audit_document_decodes_camel_case_payload() {
    let doc: AuditDocument = serde_json::from_value(serde_json::json!({
        "id": 3,
        "fileName": "policy.pdf",
        "fileType": "application/pdf",
        "fileSize": 10_240,
        "standard": "ISO_27001",
        "status": "UPLOADED",
        "uploadedBy": "system",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .expect("should decode");
    assert_eq!(doc.id, 3);
    assert_eq!(doc.file_name, "policy.pdf");
    assert_eq!(doc.extracted_text, None);
}

// =============================================================
// Findings envelope
// =============================================================

#[test]
fn findings_envelope_unwraps_report_and_tolerates_missing_counts() {
    let envelope: FindingsEnvelope = serde_json::from_value(serde_json::json!({
        "data": {
            "documentName": "policy.pdf",
            "complianceFramework": "GDPR",
            "findings": [{
                "title": "No encryption at rest",
                "description": "Storage is unencrypted.",
                "severity": { "level": "CRITICAL", "impactScore": 9.1 }
            }],
            "totalFindings": 1,
            "criticalCount": 1,
            "executiveSummary": "One critical gap."
        },
        "status": "success",
        "message": "ok"
    }))
    .expect("should decode");

    let report = envelope.data;
    assert_eq!(report.compliance_framework, "GDPR");
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].severity.level, "CRITICAL");
    assert_eq!(report.high_count, 0);
    assert_eq!(report.document_id, None);
}

// =============================================================
// Checklists
// =============================================================

#[test]
fn checklist_decodes_with_items() {
    let checklist: Checklist = serde_json::from_value(serde_json::json!({
        "id": 5,
        "standardName": "ISO 27001:2022",
        "standard": "ISO_27001",
        "totalItems": 2,
        "completedItems": 1,
        "items": [
            { "id": 1, "itemNumber": 1, "requirement": "Access control policy", "completed": true, "priority": "HIGH" },
            { "id": 2, "itemNumber": 2, "requirement": "Asset inventory", "completed": false, "priority": "MEDIUM" }
        ],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z",
        "generatedBy": "system"
    }))
    .expect("should decode");
    assert_eq!(checklist.items.len(), 2);
    assert_eq!(checklist.items[0].item_number, 1);
    assert!(checklist.items[0].completed);
}

#[test]
fn export_format_serializes_uppercase_and_maps_file_metadata() {
    assert_eq!(serde_json::to_value(ExportFormat::Pdf).expect("should serialize"), "PDF");
    assert_eq!(serde_json::to_value(ExportFormat::Excel).expect("should serialize"), "EXCEL");
    assert_eq!(ExportFormat::Pdf.extension(), "pdf");
    assert_eq!(ExportFormat::Excel.extension(), "xlsx");
    assert_eq!(ExportFormat::Pdf.mime(), "application/pdf");
}

// =============================================================
// Grammar
// =============================================================

#[test]
fn grammar_response_decodes_corrections_with_type_field() {
    let response: GrammarCorrectionResponse = serde_json::from_value(serde_json::json!({
        "originalText": "Thiss is wrong.",
        "correctedText": "This is wrong.",
        "corrections": [{
            "original": "Thiss",
            "corrected": "This",
            "type": "spelling",
            "message": "Possible typo",
            "offset": 0,
            "length": 5
        }],
        "language": "en",
        "processingTimeMs": 120
    }))
    .expect("should decode");
    assert_eq!(response.corrections.len(), 1);
    assert_eq!(response.corrections[0].correction_type, "spelling");
    assert_eq!(response.corrections[0].offset, 0);
    assert_eq!(response.processing_time_ms, 120);
}

// =============================================================
// Risk
// =============================================================

#[test]
fn risk_assessment_decodes_nested_findings() {
    let assessment: RiskAssessment = serde_json::from_value(serde_json::json!({
        "id": 11,
        "overallRiskScore": 62.5,
        "overallRiskLevel": "HIGH",
        "summary": "Several gaps.",
        "recommendations": "Encrypt backups.",
        "assessedBy": "system",
        "findings": [{
            "id": 1,
            "category": "Data Protection",
            "finding": "Backups unencrypted",
            "riskScore": 80.0,
            "riskLevel": "CRITICAL",
            "impact": "Data exposure",
            "mitigation": "Enable encryption"
        }],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }))
    .expect("should decode");
    assert_eq!(assessment.findings.len(), 1);
    assert!((assessment.overall_risk_score - 62.5).abs() < f64::EPSILON);
}
