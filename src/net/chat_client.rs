//! Conversation client: drives one chat turn against the backend and keeps a
//! surface's transcript and conversation id consistent.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both chat surfaces (the full page and the floating widget) submit turns
//! through [`submit_turn`]; the two-phase transcript transitions themselves
//! live in [`crate::state::chat`]. Chat generation can be slow, so the
//! request gets a much longer deadline than the rest of the API surface.

#[cfg(test)]
#[path = "chat_client_test.rs"]
mod chat_client_test;

use leptos::prelude::RwSignal;

use crate::state::chat::ChatState;
#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::net::error::ApiError;
#[cfg(feature = "csr")]
use crate::net::types::{ChatRequest, ChatResponse};
use crate::net::types::SuggestedQuestion;

/// Deadline for one chat exchange, generous enough for slow generation.
pub const CHAT_TIMEOUT_SECS: u64 = 120;

/// Submit one conversation turn for the given surface.
///
/// Phase 1 runs synchronously: the user's message is echoed into the
/// transcript before any network activity, and the call is a no-op when the
/// trimmed text is empty or a turn is already in flight. Phase 2 resolves in
/// a background task and appends the assistant reply (or a synthetic error
/// reply on failure, leaving the conversation id untouched).
pub fn submit_turn(chat: RwSignal<ChatState>, pending_text: &str, context: Option<&str>, standard: Option<&str>) {
    use leptos::prelude::Update;

    let mut request = None;
    chat.update(|c| {
        request = c.begin_turn(pending_text, context, standard, &crate::util::time::now_iso());
    });
    let Some(request) = request else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = send_chat_request(&request).await;
        if let Err(error) = &outcome {
            log::warn!("chat turn failed: {error}");
        }
        chat.update(|c| c.complete_turn(outcome, &crate::util::time::now_iso()));
    });
    #[cfg(not(feature = "csr"))]
    let _ = request;
}

/// POST the turn to `/api/chat/message`, enforcing the chat deadline.
///
/// A timeout is reported as a transport failure, indistinguishable from any
/// other network error to the caller.
#[cfg(feature = "csr")]
async fn send_chat_request(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    use futures::FutureExt;

    let call = api::post_json::<_, ChatResponse>(api::CHAT_MESSAGE_PATH, request).fuse();
    let deadline = gloo_timers::future::sleep(std::time::Duration::from_secs(CHAT_TIMEOUT_SECS)).fuse();
    futures::pin_mut!(call, deadline);

    futures::select! {
        outcome = call => outcome,
        () = deadline => Err(ApiError::Transport(format!("timed out after {CHAT_TIMEOUT_SECS}s"))),
    }
}

/// Seed questions for an empty conversation.
///
/// A local, infallible provider: the list is fixed regardless of the hints,
/// and there is nothing to await and nothing that can fail.
#[must_use]
pub fn suggested_questions(_context: Option<&str>, _standard: Option<&str>) -> Vec<SuggestedQuestion> {
    vec![
        SuggestedQuestion {
            question: "What are the key requirements?".to_owned(),
            category: "Requirements".to_owned(),
            icon: "📋".to_owned(),
        },
        SuggestedQuestion {
            question: "How do I implement this control?".to_owned(),
            category: "Implementation".to_owned(),
            icon: "🔧".to_owned(),
        },
        SuggestedQuestion {
            question: "What are the best practices?".to_owned(),
            category: "Best Practices".to_owned(),
            icon: "✨".to_owned(),
        },
    ]
}
