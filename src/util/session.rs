//! Session persistence over `localStorage`.
//!
//! Load once at startup, save on change; both best-effort. Off-browser both
//! fall back to defaults / no-ops so server-side and test builds stay
//! deterministic.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "auditiq_session";

use crate::state::session::Session;

/// Read the persisted session, or the default when absent or unreadable.
#[must_use]
pub fn load() -> Session {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Session::default();
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                if let Ok(session) = serde_json::from_str(&raw) {
                    return session;
                }
            }
        }
        Session::default()
    }
    #[cfg(not(feature = "csr"))]
    {
        Session::default()
    }
}

/// Persist the session. Best-effort: storage failures are ignored.
pub fn save(session: &Session) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(raw) = serde_json::to_string(session) {
                    let _ = storage.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
    }
}
