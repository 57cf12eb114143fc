//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `error` the client-observable failure
//! taxonomy, `api` the shared request plumbing, and the remaining modules
//! wrap one backend service each. `chat_client` additionally owns the
//! conversation turn flow.

pub mod api;
pub mod chat_client;
pub mod checklists;
pub mod documents;
pub mod error;
pub mod findings;
pub mod grammar;
pub mod risk;
pub mod types;
