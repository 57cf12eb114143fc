//! Backend base URL, endpoint builders, and shared request plumbing.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`. Host-side: the
//! builders stay available for unit tests while the request helpers are
//! compiled out entirely.
//!
//! ERROR HANDLING
//! ==============
//! Every helper funnels failures into [`ApiError`]: transport errors from
//! `gloo-net`, non-2xx statuses (with the optional `message` field read from
//! the error body), and schema mismatches on 2xx bodies.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use serde::Serialize;
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
use crate::net::error::ApiError;

/// Backend origin used when no compile-time override is set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Backend origin, overridable at compile time via `AUDITIQ_API_BASE`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("AUDITIQ_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Absolute URL for a backend path.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

// =============================================================
// Endpoint builders
// =============================================================

#[cfg(any(test, feature = "csr"))]
pub(crate) const CHAT_MESSAGE_PATH: &str = "/api/chat/message";
#[cfg(any(test, feature = "csr"))]
pub(crate) const DOCUMENTS_PATH: &str = "/api/documents";
#[cfg(any(test, feature = "csr"))]
pub(crate) const DOCUMENTS_RECENT_PATH: &str = "/api/documents/recent";
#[cfg(any(test, feature = "csr"))]
pub(crate) const DOCUMENT_UPLOAD_PATH: &str = "/api/documents/upload";
#[cfg(any(test, feature = "csr"))]
pub(crate) const ANALYZE_DOCUMENT_PATH: &str = "/api/analysis/analyze-document";
#[cfg(any(test, feature = "csr"))]
pub(crate) const FINDINGS_FROM_TEXT_PATH: &str = "/api/audit-findings/generate-from-text";
#[cfg(any(test, feature = "csr"))]
pub(crate) const CHECKLISTS_PATH: &str = "/api/checklists";
#[cfg(any(test, feature = "csr"))]
pub(crate) const CHECKLIST_TEMPLATE_PATH: &str = "/api/checklists/generate-template";
#[cfg(any(test, feature = "csr"))]
pub(crate) const GRAMMAR_CORRECT_PATH: &str = "/api/grammar/correct";
#[cfg(any(test, feature = "csr"))]
pub(crate) const GRAMMAR_LANGUAGES_PATH: &str = "/api/grammar/languages";

#[cfg(any(test, feature = "csr"))]
pub(crate) fn document_endpoint(id: i64) -> String {
    format!("/api/documents/{id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn document_view_endpoint(id: i64) -> String {
    format!("/api/documents/{id}/view")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn document_download_endpoint(id: i64) -> String {
    format!("/api/documents/{id}/download")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn document_analyze_endpoint(id: i64) -> String {
    format!("/api/documents/{id}/analyze")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn findings_generate_endpoint(document_id: i64, framework: &str) -> String {
    format!("/api/audit-findings/generate?documentId={document_id}&framework={framework}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn checklist_endpoint(id: i64) -> String {
    format!("/api/checklists/{id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn checklist_generate_endpoint(document_id: i64) -> String {
    format!("/api/checklists/generate/{document_id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn checklists_by_document_endpoint(document_id: i64) -> String {
    format!("/api/checklists/document/{document_id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn checklist_item_endpoint(checklist_id: i64, item_number: i64, completed: bool) -> String {
    format!("/api/checklists/{checklist_id}/items/{item_number}?completed={completed}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn risk_assess_endpoint(document_id: i64) -> String {
    format!("/api/risk-assessments/assess/{document_id}")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn risk_by_document_endpoint(document_id: i64) -> String {
    format!("/api/risk-assessments/document/{document_id}")
}

// =============================================================
// Request plumbing (browser only)
// =============================================================

#[cfg(feature = "csr")]
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log::debug!("GET {path}");
    let response = gloo_net::http::Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_json(response).await
}

#[cfg(feature = "csr")]
pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("POST {path}");
    let response = gloo_net::http::Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_json(response).await
}

/// POST with no body, decoding a JSON response.
#[cfg(feature = "csr")]
pub(crate) async fn post_for_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log::debug!("POST {path}");
    let response = gloo_net::http::Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_json(response).await
}

/// PUT with no body, decoding a JSON response.
#[cfg(feature = "csr")]
pub(crate) async fn put_for_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log::debug!("PUT {path}");
    let response = gloo_net::http::Request::put(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_json(response).await
}

#[cfg(feature = "csr")]
pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    log::debug!("DELETE {path}");
    let response = gloo_net::http::Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    ensure_ok(&response).await
}

/// GET returning raw bytes (document view/download).
#[cfg(feature = "csr")]
pub(crate) async fn get_blob(path: &str) -> Result<Vec<u8>, ApiError> {
    log::debug!("GET {path} (blob)");
    let response = gloo_net::http::Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_blob(response).await
}

/// POST a JSON body, returning raw bytes (template export).
#[cfg(feature = "csr")]
pub(crate) async fn post_json_for_blob<B: Serialize>(path: &str, body: &B) -> Result<Vec<u8>, ApiError> {
    log::debug!("POST {path} (blob)");
    let response = gloo_net::http::Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_blob(response).await
}

/// POST multipart form data (uploads), decoding a JSON response.
#[cfg(feature = "csr")]
pub(crate) async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    log::debug!("POST {path} (multipart)");
    let response = gloo_net::http::Request::post(&api_url(path))
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_json(response).await
}

#[cfg(feature = "csr")]
async fn decode_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    ensure_ok(&response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn decode_blob(response: gloo_net::http::Response) -> Result<Vec<u8>, ApiError> {
    ensure_ok(&response).await?;
    response.binary().await.map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "csr")]
async fn ensure_ok(response: &gloo_net::http::Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(response.status(), &body))
}
