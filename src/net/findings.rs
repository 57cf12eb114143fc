//! REST calls for audit-finding generation.
//!
//! The findings endpoints wrap their report in a `{ data, status, message }`
//! envelope; it is unwrapped here so views only ever see the report.

#![allow(clippy::unused_async)]

use serde::Serialize;

use crate::net::error::ApiError;
use crate::net::types::AuditFindingsReport;
#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::net::types::FindingsEnvelope;

/// Request body for `POST /api/audit-findings/generate-from-text`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateFromTextRequest<'a> {
    document_text: &'a str,
    framework: &'a str,
    file_name: &'a str,
}

/// Generate an audit-findings report from pasted document text.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn generate_from_text(document_text: &str, framework: &str, file_name: &str) -> Result<AuditFindingsReport, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = GenerateFromTextRequest {
            document_text,
            framework,
            file_name,
        };
        let envelope: FindingsEnvelope = api::post_json(api::FINDINGS_FROM_TEXT_PATH, &request).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = GenerateFromTextRequest {
            document_text,
            framework,
            file_name,
        };
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Generate an audit-findings report for an already-stored document.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn generate_for_document(document_id: i64, framework: &str) -> Result<AuditFindingsReport, ApiError> {
    #[cfg(feature = "csr")]
    {
        let envelope: FindingsEnvelope =
            api::post_for_json(&api::findings_generate_endpoint(document_id, framework)).await?;
        Ok(envelope.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (document_id, framework);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}
