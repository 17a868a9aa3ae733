use super::*;

#[test]
fn chat_state_default_is_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn push_user_message_appends_in_order() {
    let mut state = ChatState::default();
    state.push_user_message("first", 1.0);
    state.push_user_message("second", 2.0);

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].content, "first");
    assert_eq!(state.messages[1].content, "second");
    assert!(state.messages.iter().all(|m| m.from_user));
}

#[test]
fn push_user_message_trims_content() {
    let mut state = ChatState::default();
    state.push_user_message("  hello  ", 1.0);
    assert_eq!(state.messages[0].content, "hello");
}

#[test]
fn push_user_message_ignores_blank_input() {
    let mut state = ChatState::default();
    state.push_user_message("", 1.0);
    state.push_user_message("   ", 2.0);
    assert!(state.messages.is_empty());
}

#[test]
fn push_user_message_assigns_unique_ids() {
    let mut state = ChatState::default();
    state.push_user_message("a", 1.0);
    state.push_user_message("b", 2.0);
    assert_ne!(state.messages[0].id, state.messages[1].id);
}
