//! REST calls for document risk assessments.

#![allow(clippy::unused_async)]

use crate::net::error::ApiError;
use crate::net::types::RiskAssessment;
#[cfg(feature = "csr")]
use crate::net::api;

#[cfg(not(feature = "csr"))]
fn off_browser<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available outside the browser".to_owned()))
}

/// Run a fresh risk assessment over a stored document.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn assess_document(document_id: i64) -> Result<RiskAssessment, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_for_json(&api::risk_assess_endpoint(document_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = document_id;
        off_browser()
    }
}

/// Fetch the prior assessments for a document, newest first per the backend.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_assessments_for_document(document_id: i64) -> Result<Vec<RiskAssessment>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(&api::risk_by_document_endpoint(document_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = document_id;
        off_browser()
    }
}
