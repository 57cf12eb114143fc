//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and shared interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod chat_widget;
pub mod document_card;
pub mod document_upload;
pub mod message_bubble;
pub mod navbar;
pub mod toast_tray;
