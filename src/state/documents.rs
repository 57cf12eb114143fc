//! Document inventory state and client-side upload validation.
//!
//! DESIGN
//! ======
//! The full inventory is fetched per view and filtered locally; filter
//! helpers live here so the list page renders without re-querying the
//! server. Upload validation runs before any request is built, so oversized
//! or unsupported files never reach the network.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::types::AuditDocument;

/// Largest accepted upload, in bytes (50 MB).
pub const FILE_SIZE_LIMIT: u64 = 50 * 1024 * 1024;

/// MIME types the backend can extract text from.
pub const SUPPORTED_FILE_TYPES: [&str; 5] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];

/// Shared document inventory state backed by the documents API.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub items: Vec<AuditDocument>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DocumentsState {
    /// Documents uploaded under the given standard.
    #[must_use]
    pub fn by_standard(&self, standard: &str) -> Vec<&AuditDocument> {
        self.items.iter().filter(|d| d.standard == standard).collect()
    }

    /// Documents currently in the given processing status.
    #[must_use]
    pub fn by_status(&self, status: &str) -> Vec<&AuditDocument> {
        self.items.iter().filter(|d| d.status == status).collect()
    }

    /// Count of documents in the given processing status.
    #[must_use]
    pub fn status_count(&self, status: &str) -> usize {
        self.items.iter().filter(|d| d.status == status).count()
    }
}

/// Validate an upload candidate before any request is built.
///
/// # Errors
///
/// Returns a user-facing message when the file is empty, oversized, or of an
/// unsupported type.
pub fn validate_upload(file_name: &str, mime_type: &str, size: u64) -> Result<(), String> {
    if file_name.trim().is_empty() || size == 0 {
        return Err("Please select a document to upload".to_owned());
    }
    if size > FILE_SIZE_LIMIT {
        return Err("File exceeds the 50 MB upload limit".to_owned());
    }
    if !SUPPORTED_FILE_TYPES.contains(&mime_type) {
        return Err("Unsupported file type; upload a PDF, Word, or Excel document".to_owned());
    }
    Ok(())
}
