use super::*;

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(api_url("/api/documents"), format!("{}/api/documents", api_base()));
}

#[test]
fn static_paths_match_the_backend_contract() {
    assert_eq!(CHAT_MESSAGE_PATH, "/api/chat/message");
    assert_eq!(DOCUMENTS_PATH, "/api/documents");
    assert_eq!(DOCUMENTS_RECENT_PATH, "/api/documents/recent");
    assert_eq!(DOCUMENT_UPLOAD_PATH, "/api/documents/upload");
    assert_eq!(ANALYZE_DOCUMENT_PATH, "/api/analysis/analyze-document");
    assert_eq!(FINDINGS_FROM_TEXT_PATH, "/api/audit-findings/generate-from-text");
    assert_eq!(CHECKLISTS_PATH, "/api/checklists");
    assert_eq!(CHECKLIST_TEMPLATE_PATH, "/api/checklists/generate-template");
    assert_eq!(GRAMMAR_CORRECT_PATH, "/api/grammar/correct");
    assert_eq!(GRAMMAR_LANGUAGES_PATH, "/api/grammar/languages");
}

#[test]
fn document_endpoints_format_expected_paths() {
    assert_eq!(document_endpoint(3), "/api/documents/3");
    assert_eq!(document_view_endpoint(3), "/api/documents/3/view");
    assert_eq!(document_download_endpoint(3), "/api/documents/3/download");
    assert_eq!(document_analyze_endpoint(3), "/api/documents/3/analyze");
}

#[test]
fn findings_generate_endpoint_carries_query_params() {
    assert_eq!(
        findings_generate_endpoint(7, "GDPR"),
        "/api/audit-findings/generate?documentId=7&framework=GDPR"
    );
}

#[test]
fn checklist_endpoints_format_expected_paths() {
    assert_eq!(checklist_endpoint(5), "/api/checklists/5");
    assert_eq!(checklist_generate_endpoint(9), "/api/checklists/generate/9");
    assert_eq!(checklists_by_document_endpoint(9), "/api/checklists/document/9");
    assert_eq!(checklist_item_endpoint(5, 2, true), "/api/checklists/5/items/2?completed=true");
}

#[test]
fn risk_endpoints_format_expected_paths() {
    assert_eq!(risk_assess_endpoint(4), "/api/risk-assessments/assess/4");
    assert_eq!(risk_by_document_endpoint(4), "/api/risk-assessments/document/4");
}
