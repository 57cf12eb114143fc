use super::*;

#[test]
fn suggested_questions_is_fixed_and_non_empty_for_any_hints() {
    let none = suggested_questions(None, None);
    let hinted = suggested_questions(Some("chat-page"), Some("ISO_27001"));

    assert_eq!(none.len(), 3);
    assert_eq!(none, hinted);
    for suggestion in &none {
        assert!(!suggestion.question.is_empty());
        assert!(!suggestion.category.is_empty());
        assert!(!suggestion.icon.is_empty());
    }
}

#[test]
fn chat_deadline_is_generous() {
    assert_eq!(CHAT_TIMEOUT_SECS, 120);
}
