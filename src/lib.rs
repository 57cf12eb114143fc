//! # auditiq-client
//!
//! Leptos + WASM front end for the AuditIQ compliance-document dashboard.
//! Every feature is a thin view over the external backend HTTP API: document
//! upload/listing/viewing, AI document analysis, audit-finding generation,
//! checklist generation/export, a grammar checker, and a chat assistant
//! (full page plus floating widget).
//!
//! This crate contains pages, components, application state, the wire DTOs,
//! and the REST client layer. Browser-only code compiles under the `csr`
//! feature; the default build keeps the pure state/protocol logic natively
//! testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
