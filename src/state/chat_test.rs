use super::*;

const T0: &str = "2024-01-01T00:00:00Z";
const T1: &str = "2024-01-01T00:00:05Z";

fn ok_response(conversation_id: i64, message: &str, timestamp: Option<&str>) -> ChatResponse {
    ChatResponse {
        conversation_id,
        message: message.to_owned(),
        timestamp: timestamp.map(str::to_owned),
    }
}

// =============================================================
// begin_turn
// =============================================================

#[test]
fn begin_turn_appends_user_message_and_enters_sending() {
    let mut state = ChatState::default();
    let request = state.begin_turn("hello", None, None, T0).expect("should produce a request");

    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "hello");
    assert_eq!(state.messages[0].timestamp, T0);
    assert!(state.sending());
    assert_eq!(request.message, "hello");
}

#[test]
fn begin_turn_trims_input_before_echoing() {
    let mut state = ChatState::default();
    let request = state.begin_turn("  hi there  ", None, None, T0).expect("should produce a request");
    assert_eq!(state.messages[0].content, "hi there");
    assert_eq!(request.message, "hi there");
}

#[test]
fn begin_turn_is_noop_on_empty_or_whitespace_input() {
    let mut state = ChatState::default();
    assert!(state.begin_turn("", None, None, T0).is_none());
    assert!(state.begin_turn("   \n\t ", None, None, T0).is_none());
    assert!(state.messages.is_empty());
    assert_eq!(state.conversation_id, None);
    assert!(!state.sending());
}

#[test]
fn begin_turn_refuses_while_sending() {
    let mut state = ChatState::default();
    assert!(state.begin_turn("first", None, None, T0).is_some());
    assert!(state.begin_turn("second", None, None, T0).is_none());
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn first_turn_carries_null_conversation_id() {
    let mut state = ChatState::default();
    let request = state.begin_turn("hello", None, None, T0).expect("should produce a request");
    assert_eq!(request.conversation_id, None);
}

#[test]
fn later_turns_carry_adopted_conversation_id() {
    let mut state = ChatState::default();
    state.begin_turn("one", None, None, T0);
    state.complete_turn(Ok(ok_response(42, "hi", None)), T1);

    let request = state.begin_turn("two", None, None, T1).expect("should produce a request");
    assert_eq!(request.conversation_id, Some(42));
}

#[test]
fn begin_turn_forwards_context_and_standard_verbatim() {
    let mut state = ChatState::default();
    let request = state
        .begin_turn("hello", Some("chat-page"), Some("ISO_27001"), T0)
        .expect("should produce a request");
    assert_eq!(request.context.as_deref(), Some("chat-page"));
    assert_eq!(request.standard.as_deref(), Some("ISO_27001"));
}

// =============================================================
// complete_turn
// =============================================================

#[test]
fn turn_grows_transcript_by_exactly_two_on_success() {
    let mut state = ChatState::default();
    let before = state.messages.len();
    state.begin_turn("hello", None, None, T0);
    state.complete_turn(Ok(ok_response(1, "hi", None)), T1);
    assert_eq!(state.messages.len(), before + 2);
}

#[test]
fn turn_grows_transcript_by_exactly_two_on_failure() {
    let mut state = ChatState::default();
    let before = state.messages.len();
    state.begin_turn("hello", None, None, T0);
    state.complete_turn(Err(ApiError::Transport("connection refused".to_owned())), T1);
    assert_eq!(state.messages.len(), before + 2);
    assert_eq!(state.messages[1].role, Role::Assistant);
}

#[test]
fn successful_response_overwrites_conversation_id() {
    let mut state = ChatState {
        conversation_id: Some(7),
        ..ChatState::default()
    };
    state.begin_turn("hello", None, None, T0);
    state.complete_turn(Ok(ok_response(42, "hi", None)), T1);
    assert_eq!(state.conversation_id, Some(42));
    assert!(!state.sending());
}

#[test]
fn failure_preserves_conversation_id() {
    let mut state = ChatState {
        conversation_id: Some(7),
        ..ChatState::default()
    };
    state.begin_turn("hello", None, None, T0);
    state.complete_turn(Err(ApiError::Status { status: 500, message: "boom".to_owned() }), T1);
    assert_eq!(state.conversation_id, Some(7));
    assert!(!state.sending());
}

#[test]
fn assistant_timestamp_prefers_server_value() {
    let mut state = ChatState::default();
    state.begin_turn("hello", None, None, T0);
    state.complete_turn(Ok(ok_response(1, "hi", Some("2024-06-01T12:00:00Z"))), T1);
    assert_eq!(state.messages[1].timestamp, "2024-06-01T12:00:00Z");
}

#[test]
fn assistant_timestamp_falls_back_to_receipt_time() {
    let mut state = ChatState::default();
    state.begin_turn("hello", None, None, T0);
    state.complete_turn(Ok(ok_response(1, "hi", None)), T1);
    assert_eq!(state.messages[1].timestamp, T1);
}

#[test]
fn user_message_precedes_reply_with_earlier_or_equal_timestamp() {
    let mut state = ChatState::default();
    state.begin_turn("hello", None, None, T0);
    state.complete_turn(Ok(ok_response(1, "hi", None)), T1);

    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert!(state.messages[0].timestamp <= state.messages[1].timestamp);
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

// =============================================================
// End-to-end turn scenarios
// =============================================================

#[test]
fn gdpr_scenario_success() {
    let mut state = ChatState::default();
    let request = state
        .begin_turn("What is GDPR Article 32?", None, None, T0)
        .expect("should produce a request");
    assert_eq!(request.conversation_id, None);

    state.complete_turn(
        Ok(ok_response(101, "Article 32 requires...", Some("2024-01-01T00:00:00Z"))),
        T1,
    );

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "What is GDPR Article 32?");
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, "Article 32 requires...");
    assert_eq!(state.conversation_id, Some(101));
}

#[test]
fn timeout_scenario_failure() {
    let mut state = ChatState {
        conversation_id: Some(5),
        ..ChatState::default()
    };
    state.begin_turn("test", None, None, T0);
    state.complete_turn(Err(ApiError::Transport("timeout".to_owned())), T1);

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "test");
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert!(state.messages[1].content.contains("timeout"));
    assert_eq!(state.conversation_id, Some(5));
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_clears_transcript_and_conversation_id_together() {
    let mut state = ChatState::default();
    state.begin_turn("hello", None, None, T0);
    state.complete_turn(Ok(ok_response(9, "hi", None)), T1);

    state.reset();
    assert!(state.messages.is_empty());
    assert_eq!(state.conversation_id, None);
    assert!(!state.sending());
}
