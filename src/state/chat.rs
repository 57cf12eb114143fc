//! Conversation state for the chat surfaces (full page and floating widget).
//!
//! DESIGN
//! ======
//! One turn is a two-phase append. `begin_turn` pushes the user's message,
//! enters `Sending`, and hands back the request payload; `complete_turn`
//! pushes the assistant (or error) reply and returns to `Idle`. The
//! transcript is append-only: entries are never mutated or removed, and a
//! turn always grows it by exactly two messages whether the backend call
//! succeeded or not. Each chat surface owns an independent `ChatState`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::ApiError;
use crate::net::types::{ChatRequest, ChatResponse};

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Opaque unique identifier (UUID string, locally generated).
    pub id: String,
    /// Author of the entry.
    pub role: Role,
    /// Plain message text (assistant entries may contain markdown).
    pub content: String,
    /// ISO 8601 creation time: submission time for user entries, server time
    /// (falling back to receipt time) for assistant entries.
    pub timestamp: String,
}

/// Send phase for the at-most-one-in-flight guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendPhase {
    #[default]
    Idle,
    Sending,
}

/// Transcript, conversation handle, and in-flight guard for one chat surface.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Chronologically ordered, append-only transcript.
    pub messages: Vec<ChatMessage>,
    /// Server-issued conversation handle; `None` until the first successful
    /// turn, then carried on every subsequent request.
    pub conversation_id: Option<i64>,
    /// `Sending` while a turn's network call is outstanding.
    pub phase: SendPhase,
}

impl ChatState {
    /// Phase 1 of a turn: append the user's message and produce the request
    /// payload to send.
    ///
    /// Returns `None` without touching any state when the trimmed input is
    /// empty or another turn is still in flight. The returned request carries
    /// the current conversation id (`None` on the first turn) and the
    /// optional `context`/`standard` hints verbatim.
    pub fn begin_turn(
        &mut self,
        pending_text: &str,
        context: Option<&str>,
        standard: Option<&str>,
        now_iso: &str,
    ) -> Option<ChatRequest> {
        if self.phase == SendPhase::Sending {
            return None;
        }
        let text = pending_text.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage {
            id: new_message_id(),
            role: Role::User,
            content: text.to_owned(),
            timestamp: now_iso.to_owned(),
        });
        self.phase = SendPhase::Sending;

        Some(ChatRequest {
            message: text.to_owned(),
            conversation_id: self.conversation_id,
            context: context.map(str::to_owned),
            standard: standard.map(str::to_owned),
        })
    }

    /// Phase 2 of a turn: append the resolved reply and return to `Idle`.
    ///
    /// On success the assistant message takes the response's text and
    /// timestamp (receipt time when the server omits one) and the response's
    /// conversation id replaces the current handle. On failure a synthetic
    /// assistant apology carrying the error text is appended instead and the
    /// conversation id is left untouched, so a failed turn cannot corrupt
    /// continuity.
    pub fn complete_turn(&mut self, outcome: Result<ChatResponse, ApiError>, now_iso: &str) {
        match outcome {
            Ok(response) => {
                let timestamp = response
                    .timestamp
                    .unwrap_or_else(|| now_iso.to_owned());
                self.messages.push(ChatMessage {
                    id: new_message_id(),
                    role: Role::Assistant,
                    content: response.message,
                    timestamp,
                });
                self.conversation_id = Some(response.conversation_id);
            }
            Err(error) => {
                self.messages.push(ChatMessage {
                    id: new_message_id(),
                    role: Role::Assistant,
                    content: format!("I apologize, but I encountered an error: {error}"),
                    timestamp: now_iso.to_owned(),
                });
            }
        }
        self.phase = SendPhase::Idle;
    }

    /// Whether a turn is currently outstanding.
    #[must_use]
    pub fn sending(&self) -> bool {
        self.phase == SendPhase::Sending
    }

    /// Reset the whole surface: transcript and conversation id go together.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.conversation_id = None;
        self.phase = SendPhase::Idle;
    }
}

fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
