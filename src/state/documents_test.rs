use super::*;

fn doc(id: i64, standard: &str, status: &str) -> AuditDocument {
    AuditDocument {
        id,
        file_name: format!("doc-{id}.pdf"),
        file_type: "application/pdf".to_owned(),
        file_size: 1024,
        standard: standard.to_owned(),
        status: status.to_owned(),
        uploaded_by: "system".to_owned(),
        extracted_text: None,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn default_state_is_empty_and_not_loading() {
    let state = DocumentsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn by_standard_and_by_status_filter_the_inventory() {
    let state = DocumentsState {
        items: vec![
            doc(1, "ISO_27001", "UPLOADED"),
            doc(2, "GDPR", "ANALYZED"),
            doc(3, "ISO_27001", "ANALYZED"),
        ],
        ..DocumentsState::default()
    };

    let iso = state.by_standard("ISO_27001");
    assert_eq!(iso.len(), 2);
    assert!(iso.iter().all(|d| d.standard == "ISO_27001"));

    assert_eq!(state.by_status("ANALYZED").len(), 2);
    assert_eq!(state.status_count("UPLOADED"), 1);
    assert_eq!(state.status_count("FAILED"), 0);
}

#[test]
fn validate_upload_accepts_a_normal_pdf() {
    assert_eq!(validate_upload("policy.pdf", "application/pdf", 10_240), Ok(()));
}

#[test]
fn validate_upload_rejects_missing_or_empty_files() {
    assert!(validate_upload("", "application/pdf", 10).is_err());
    assert!(validate_upload("policy.pdf", "application/pdf", 0).is_err());
}

#[test]
fn validate_upload_rejects_oversized_files() {
    let err = validate_upload("huge.pdf", "application/pdf", FILE_SIZE_LIMIT + 1)
        .expect_err("should reject oversized file");
    assert!(err.contains("50 MB"));
}

#[test]
fn validate_upload_rejects_unsupported_types() {
    let err = validate_upload("notes.txt", "text/plain", 10).expect_err("should reject text file");
    assert!(err.contains("Unsupported"));
}

#[test]
fn size_limit_boundary_is_inclusive() {
    assert_eq!(validate_upload("edge.pdf", "application/pdf", FILE_SIZE_LIMIT), Ok(()));
}
