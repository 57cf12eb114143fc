//! Application state modules.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one view's state as a plain struct with pure transition
//! methods, exercised by a sibling `*_test.rs` file. The structs never touch
//! the network or the DOM; pages wrap them in `RwSignal`s (`session` and
//! `ui` app-wide via context, the rest page-local). Each chat surface owns
//! its own independent `chat` instance.

pub mod chat;
pub mod checklists;
pub mod documents;
pub mod findings;
pub mod grammar;
pub mod risk;
pub mod session;
pub mod ui;
