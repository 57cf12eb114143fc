//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, storage,
//! blob URLs) from page and component logic to keep the latter testable.

pub mod download;
pub mod format;
pub mod session;
pub mod standards;
pub mod time;
