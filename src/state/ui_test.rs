use super::*;

#[test]
fn default_state_has_widget_closed_and_no_toasts() {
    let state = UiState::default();
    assert!(!state.widget_open);
    assert!(state.toasts.is_empty());
}

#[test]
fn push_toast_assigns_increasing_ids() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Info, "one");
    let b = state.push_toast(ToastKind::Success, "two");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].text, "one");
}

#[test]
fn push_toast_evicts_oldest_at_cap() {
    let mut state = UiState::default();
    for i in 0..=TOAST_CAP {
        state.push_toast(ToastKind::Error, format!("t{i}"));
    }
    assert_eq!(state.toasts.len(), TOAST_CAP);
    assert_eq!(state.toasts[0].text, "t1");
}

#[test]
fn dismiss_toast_removes_only_the_matching_notice() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Info, "keep");
    let b = state.push_toast(ToastKind::Error, "drop");
    state.dismiss_toast(b);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, a);

    // Unknown ids are a no-op.
    state.dismiss_toast(999);
    assert_eq!(state.toasts.len(), 1);
}
