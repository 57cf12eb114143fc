//! REST calls for document upload, listing, retrieval, and analysis.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`. Host-side: stubs
//! reporting the browser-only boundary, so pure logic stays natively
//! testable.

#![allow(clippy::unused_async)]

use crate::net::error::ApiError;
use crate::net::types::AuditDocument;
#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::net::types::AnalysisResult;

#[cfg(not(feature = "csr"))]
fn off_browser<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available outside the browser".to_owned()))
}

/// Fetch every stored document from `GET /api/documents`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_documents() -> Result<Vec<AuditDocument>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(api::DOCUMENTS_PATH).await
    }
    #[cfg(not(feature = "csr"))]
    {
        off_browser()
    }
}

/// Fetch the recent-documents list for the dashboard.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_recent_documents() -> Result<Vec<AuditDocument>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(api::DOCUMENTS_RECENT_PATH).await
    }
    #[cfg(not(feature = "csr"))]
    {
        off_browser()
    }
}

/// Fetch one document by id.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_document(id: i64) -> Result<AuditDocument, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(&api::document_endpoint(id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        off_browser()
    }
}

/// Delete a document.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn delete_document(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        api::delete(&api::document_endpoint(id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        off_browser()
    }
}

/// Ask the backend to (re)process a stored document.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn analyze_stored_document(id: i64) -> Result<AuditDocument, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_for_json(&api::document_analyze_endpoint(id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        off_browser()
    }
}

/// Fetch a document's bytes for inline viewing.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn view_document(id: i64) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_blob(&api::document_view_endpoint(id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        off_browser()
    }
}

/// Fetch a document's bytes for a forced download.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn download_document(id: i64) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_blob(&api::document_download_endpoint(id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        off_browser()
    }
}

/// Upload a document under a compliance standard via multipart form data.
///
/// # Errors
///
/// Returns an [`ApiError`] when the form cannot be built or the request or
/// decoding fails.
#[cfg(feature = "csr")]
pub async fn upload_document(file: &web_sys::File, standard: &str, uploaded_by: &str) -> Result<AuditDocument, ApiError> {
    let form = multipart_with_file(file)?;
    form.append_with_str("standard", standard)
        .map_err(|_| ApiError::Transport("failed to build upload form".to_owned()))?;
    form.append_with_str("uploadedBy", uploaded_by)
        .map_err(|_| ApiError::Transport("failed to build upload form".to_owned()))?;
    api::post_form(api::DOCUMENT_UPLOAD_PATH, form).await
}

/// Run the ad-hoc AI analysis on a file that has not been stored yet.
///
/// # Errors
///
/// Returns an [`ApiError`] when the form cannot be built or the request or
/// decoding fails.
#[cfg(feature = "csr")]
pub async fn analyze_file(file: &web_sys::File, standard: &str) -> Result<AnalysisResult, ApiError> {
    let form = multipart_with_file(file)?;
    form.append_with_str("standard", standard)
        .map_err(|_| ApiError::Transport("failed to build upload form".to_owned()))?;
    api::post_form(api::ANALYZE_DOCUMENT_PATH, form).await
}

#[cfg(feature = "csr")]
fn multipart_with_file(file: &web_sys::File) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("failed to build upload form".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Transport("failed to build upload form".to_owned()))?;
    Ok(form)
}
