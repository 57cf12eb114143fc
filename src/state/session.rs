//! Explicit session object for attribution fields.
//!
//! DESIGN
//! ======
//! Instead of ambient auth state, the session is a plain value provided via
//! context, loaded from `localStorage` once at startup and persisted on
//! change (see `util::session`). Backend calls that record attribution
//! (`uploadedBy`, `generatedBy`) read it by reference.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Who is using this browser session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Display name recorded on uploads and generated artifacts.
    pub name: String,
    /// Organization label, free-form.
    pub organization: String,
    /// Role label, free-form.
    pub role: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            name: "system".to_owned(),
            organization: String::new(),
            role: "COMPLIANCE_OFFICER".to_owned(),
        }
    }
}

impl Session {
    /// Attribution string for backend `uploadedBy`/`generatedBy` fields.
    #[must_use]
    pub fn attribution(&self) -> &str {
        if self.name.trim().is_empty() { "system" } else { &self.name }
    }
}
