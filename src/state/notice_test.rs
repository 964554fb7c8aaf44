use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.error("first");
    let b = state.success("second");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].level, NoticeLevel::Success);
}

#[test]
fn repeated_newest_message_is_collapsed() {
    let mut state = NoticeState::default();
    let a = state.error("Could not reach the server.");
    let b = state.error("Could not reach the server.");
    assert_eq!(a, b);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn same_text_at_other_level_is_kept() {
    let mut state = NoticeState::default();
    state.error("Saved");
    state.success("Saved");
    assert_eq!(state.items.len(), 2);
}

#[test]
fn stack_is_capped_keeping_newest() {
    let mut state = NoticeState::default();
    for i in 0..(MAX_NOTICES + 2) {
        state.error(format!("failure {i}"));
    }
    assert_eq!(state.items.len(), MAX_NOTICES);
    assert_eq!(state.items.last().unwrap().message, format!("failure {}", MAX_NOTICES + 1));
    assert_eq!(state.items[0].message, "failure 2");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.error("a");
    let b = state.error("b");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
    state.clear();
    assert!(state.items.is_empty());
}

#[test]
fn css_modifier_per_level() {
    assert_eq!(NoticeLevel::Error.css_modifier(), "notice--error");
    assert_eq!(NoticeLevel::default(), NoticeLevel::Info);
}
