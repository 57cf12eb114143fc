//! REST calls for checklist generation, item tracking, and template export.

#![allow(clippy::unused_async)]

use crate::net::error::ApiError;
use crate::net::types::{Checklist, ChecklistTemplateRequest, ExportFormat};
#[cfg(feature = "csr")]
use crate::net::api;

#[cfg(not(feature = "csr"))]
fn off_browser<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available outside the browser".to_owned()))
}

/// Fetch every stored checklist.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_checklists() -> Result<Vec<Checklist>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(api::CHECKLISTS_PATH).await
    }
    #[cfg(not(feature = "csr"))]
    {
        off_browser()
    }
}

/// Fetch the checklists generated from one document.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn fetch_checklists_for_document(document_id: i64) -> Result<Vec<Checklist>, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(&api::checklists_by_document_endpoint(document_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = document_id;
        off_browser()
    }
}

/// Generate a checklist from a stored document.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn generate_checklist(document_id: i64) -> Result<Checklist, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_for_json(&api::checklist_generate_endpoint(document_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = document_id;
        off_browser()
    }
}

/// Toggle one checklist item, returning the updated checklist.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decoding fails.
pub async fn update_item_status(checklist_id: i64, item_number: i64, completed: bool) -> Result<Checklist, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::put_for_json(&api::checklist_item_endpoint(checklist_id, item_number, completed)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (checklist_id, item_number, completed);
        off_browser()
    }
}

/// Delete a checklist.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn delete_checklist(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        api::delete(&api::checklist_endpoint(id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        off_browser()
    }
}

/// Generate a downloadable checklist template for a standard.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn generate_template(standard: &str, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = ChecklistTemplateRequest {
            standard: standard.to_owned(),
            format,
        };
        api::post_json_for_blob(api::CHECKLIST_TEMPLATE_PATH, &request).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ChecklistTemplateRequest {
            standard: standard.to_owned(),
            format,
        };
        off_browser()
    }
}
