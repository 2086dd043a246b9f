//! Tests for the shared state store.

use std::sync::{Arc, Mutex};

use chooser::state::StateStore;
use chooser_data::{StateLookup, Value};

#[test]
fn test_update_merges_keys() {
    let state = StateStore::with_values([("$a", "1")]);

    state.update([("$b", "2")]);

    assert_eq!(state.text("$a"), "1");
    assert_eq!(state.text("$b"), "2");
    assert_eq!(state.text("$missing"), "");
}

#[test]
fn test_clones_share_storage() {
    let state = StateStore::new();
    let other = state.clone();

    other.update([("$radio", "x")]);

    assert_eq!(state.get("$radio"), Some(Value::from("x")));
    assert!(state.is_dirty());
    state.clear_dirty();
    assert!(!other.is_dirty());
}

#[test]
fn test_clone_with_is_hypothetical() {
    let state = StateStore::with_values([("$radio", "a"), ("$other", "o")]);

    let what_if = state.clone_with([("$radio", "b")]);

    assert_eq!(what_if.text("$radio"), "b");
    assert_eq!(what_if.lookup("$other"), Some(&Value::from("o")));
    assert_eq!(state.text("$radio"), "a");
    assert!(!state.is_dirty());
}

#[test]
fn test_subscribers_receive_written_keys() {
    let state = StateStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let id = state.subscribe(move |keys| log.lock().unwrap().push(keys.to_vec()));

    state.update([("$a", "1"), ("$b", "2")]);
    state.unsubscribe(id);
    state.update([("$c", "3")]);

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![vec!["$a".to_string(), "$b".to_string()]]);
}

#[test]
fn test_empty_update_does_not_notify() {
    let state = StateStore::new();
    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    state.subscribe(move |_| *counter.lock().unwrap() += 1);

    state.update(Vec::<(String, String)>::new());
    state.remove("$never-set");

    assert_eq!(*count.lock().unwrap(), 0);
    assert!(!state.is_dirty());
}

#[test]
fn test_remove_clears_key() {
    let state = StateStore::with_values([("$radio", "a")]);

    state.remove("$radio");

    assert_eq!(state.get("$radio"), None);
    assert!(state.snapshot().is_empty());
}
