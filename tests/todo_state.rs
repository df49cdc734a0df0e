use std::collections::HashSet;

use eframe_todo::{TodoError, TodoIcon, TodoId, TodoState};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Helper to create a state holding A, B and C in that order
fn create_test_state() -> (TodoState, [TodoId; 3]) {
    let mut state = TodoState::new();
    let a = state.add_item("A", None).id();
    let b = state.add_item("B", Some(TodoIcon::Event)).id();
    let c = state.add_item("C", Some(TodoIcon::Done)).id();
    (state, [a, b, c])
}

fn descriptions(state: &TodoState) -> Vec<&str> {
    state.items().iter().map(|item| item.description()).collect()
}

#[test]
fn test_add_item_appends_with_unique_ids() {
    let mut state = TodoState::new();
    let mut ids = HashSet::new();
    for i in 0..100 {
        let item = state.add_item(format!("task {}", i), None);
        assert!(ids.insert(item.id()), "duplicate id {}", item.id());
    }

    assert_eq!(state.len(), 100);
    assert_eq!(state.items()[0].description(), "task 0");
    assert_eq!(state.items()[99].description(), "task 99");
}

#[test]
fn test_add_item_defaults_icon_and_accepts_empty_text() {
    let mut state = TodoState::new();
    let item = state.add_item("", None);

    assert_eq!(item.icon(), TodoIcon::Square);
    assert_eq!(item.icon(), TodoIcon::default());
    assert_eq!(item.description(), "");
    assert_eq!(state.get(item.id()), Some(&item));
}

#[test]
fn test_add_item_leaves_editing_untouched() {
    let (mut state, [_, b, _]) = create_test_state();
    state.begin_edit(b).unwrap();

    state.add_item("D", None);

    assert_eq!(state.editing_index(), Some(1));
    assert_eq!(state.current_edit_item().unwrap().id(), b);
}

#[test]
fn test_length_tracks_adds_minus_removes() {
    let (mut state, [a, _, c]) = create_test_state();
    state.add_item("D", None);
    state.remove_item(a);
    state.remove_item(c);

    assert_eq!(state.len(), 4 - 2);
    assert_eq!(descriptions(&state), vec!["B", "D"]);
}

#[test]
fn test_double_remove_is_noop() {
    let (mut state, [a, _, _]) = create_test_state();
    state.remove_item(a);
    let before = state.items().to_vec();

    state.remove_item(a);

    assert_eq!(state.items(), before.as_slice());
    assert_eq!(state.len(), 2);
}

#[test]
fn test_begin_edit_selects_item() {
    let (mut state, [_, _, c]) = create_test_state();
    assert!(state.current_edit_item().is_none());

    state.begin_edit(c).unwrap();

    assert!(state.is_editing());
    assert_eq!(state.current_edit_item().unwrap().id(), c);
    assert_eq!(state.editing_index(), Some(2));
}

#[test]
fn test_begin_edit_supersedes_previous_edit() {
    let (mut state, [a, b, _]) = create_test_state();
    state.begin_edit(a).unwrap();
    state.begin_edit(b).unwrap();

    assert_eq!(state.current_edit_item().unwrap().id(), b);
}

#[test]
fn test_begin_edit_unknown_id_fails_without_changes() {
    let (mut state, [a, _, _]) = create_test_state();
    state.begin_edit(a).unwrap();
    let before = state.items().to_vec();

    let other = TodoState::new().add_item("elsewhere", None).id();
    let result = state.begin_edit(other);

    assert_eq!(result, Err(TodoError::NotFound(other)));
    assert_eq!(state.items(), before.as_slice());
    assert_eq!(state.current_edit_item().unwrap().id(), a);
}

#[test]
fn test_update_keeps_id_and_changes_content() {
    let (mut state, [_, b, _]) = create_test_state();
    state.begin_edit(b).unwrap();

    state
        .update_editing_item(Some("Buy books".to_string()), None)
        .unwrap();

    let item = state.current_edit_item().unwrap();
    assert_eq!(item.id(), b);
    assert_eq!(item.description(), "Buy books");
    assert_eq!(item.icon(), TodoIcon::Event);

    state.update_editing_item(None, Some(TodoIcon::Privacy)).unwrap();
    let item = state.current_edit_item().unwrap();
    assert_eq!(item.id(), b);
    assert_eq!(item.description(), "Buy books");
    assert_eq!(item.icon(), TodoIcon::Privacy);

    // Position is unchanged
    assert_eq!(descriptions(&state), vec!["A", "Buy books", "C"]);
}

#[test]
fn test_update_without_edit_is_illegal_state() {
    let (mut state, _) = create_test_state();

    let result = state.update_editing_item(Some("x".to_string()), None);

    assert!(matches!(result, Err(TodoError::IllegalState(_))));
    assert_eq!(descriptions(&state), vec!["A", "B", "C"]);
}

#[test]
fn test_update_after_end_edit_is_illegal_state() {
    let (mut state, [a, _, _]) = create_test_state();
    state.begin_edit(a).unwrap();
    state.end_edit();

    let result = state.update_editing_item(None, Some(TodoIcon::Trash));
    assert!(matches!(result, Err(TodoError::IllegalState(_))));
}

#[test]
fn test_removing_edit_target_clears_editing() {
    let (mut state, [_, b, _]) = create_test_state();
    state.begin_edit(b).unwrap();

    state.remove_item(b);

    assert!(state.current_edit_item().is_none());
    assert_eq!(state.editing_index(), None);
    assert!(!state.is_editing());
}

#[test]
fn test_removing_earlier_item_keeps_edit_target() {
    let (mut state, [a, b, c]) = create_test_state();
    state.begin_edit(b).unwrap();
    assert_eq!(state.current_edit_item().unwrap().description(), "B");

    state.remove_item(a);

    let ids: Vec<TodoId> = state.items().iter().map(|item| item.id()).collect();
    assert_eq!(ids, vec![b, c]);
    assert_eq!(state.current_edit_item().unwrap().id(), b);
    assert_eq!(state.editing_index(), Some(0));
}

#[test]
fn test_removing_later_item_keeps_edit_index() {
    let (mut state, [_, b, c]) = create_test_state();
    state.begin_edit(b).unwrap();

    state.remove_item(c);

    assert_eq!(state.editing_index(), Some(1));
    assert_eq!(state.current_edit_item().unwrap().id(), b);
}

#[test]
fn test_end_edit_is_idempotent() {
    let (mut state, [a, _, _]) = create_test_state();
    state.end_edit();
    assert!(state.current_edit_item().is_none());

    state.begin_edit(a).unwrap();
    state.end_edit();
    state.end_edit();
    assert!(state.current_edit_item().is_none());
    assert_eq!(state.len(), 3);
}

#[test]
fn test_seeded_state() {
    let mut rng = StdRng::seed_from_u64(11);
    let state = TodoState::seeded(5, &mut rng);

    assert_eq!(state.len(), 5);
    assert!(!state.is_editing());
    for item in state.items() {
        assert!(!item.description().is_empty());
        assert_eq!(state.position(item.id()).map(|i| &state.items()[i]), Some(item));
    }
}
