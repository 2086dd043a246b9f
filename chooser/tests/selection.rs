//! Tests for default adoption, highlighting and click handling.

use std::cell::Cell;
use std::sync::{Arc, Mutex};

use chooser::prelude::*;
use chooser_data::{ContentFilter, DataError, MatchCache, StateLookup};

/// Wraps a table and counts how often it is queried.
struct CountingSource {
    table: Table,
    calls: Cell<usize>,
}

impl CountingSource {
    fn new(table: Table) -> Self {
        Self {
            table,
            calls: Cell::new(0),
        }
    }
}

impl DataSource for CountingSource {
    fn has_matching_rows(
        &self,
        filters: &[ContentFilter],
        state: &dyn StateLookup,
        cache: &mut MatchCache,
    ) -> Result<bool, DataError> {
        self.calls.set(self.calls.get() + 1);
        self.table.has_matching_rows(filters, state, cache)
    }
}

fn ab_radio() -> Radio {
    Radio::new(RadioConfig::new())
        .with_option("A", "a")
        .with_option("B", "b")
}

/// Rows only exist for sheet "b", so option "a" is never valid.
fn only_b_rows() -> Table {
    Table::from_rows([
        Row::new().set("sheet", "b").set("label", "one"),
        Row::new().set("sheet", "b").set("label", "two"),
    ])
}

fn sheet_filter() -> FilterDef {
    FilterDef::new("sheet", FilterOp::Equals, "$radio")
}

fn highlighted_values(view: &ChooserView) -> Vec<&str> {
    view.highlighted().map(|e| e.value.as_str()).collect()
}

// ============================================================================
// Default adoption
// ============================================================================

#[test]
fn test_default_adopts_first_valid_option() {
    let mut radio = ab_radio();
    let state = StateStore::new();

    let view = radio.render(&state, &Table::new());

    assert_eq!(state.text("$radio"), "a");
    assert_eq!(state.text("$secondaryRadio"), "a");
    assert_eq!(highlighted_values(&view), vec!["a"]);
}

#[test]
fn test_no_double_default() {
    let mut radio = ab_radio();
    let state = StateStore::new();
    radio.render(&state, &Table::new());

    let first = radio.render(&state, &Table::new());
    first.click(1, &state);
    assert_eq!(state.text("$radio"), "b");

    let view = radio.render(&state, &Table::new());
    assert_eq!(state.text("$radio"), "b");
    assert_eq!(state.text("$secondaryRadio"), "b");
    assert_eq!(highlighted_values(&view), vec!["b"]);
}

#[test]
fn test_existing_value_is_not_overwritten() {
    let mut radio = ab_radio();
    let state = StateStore::with_values([("$radio", "b")]);

    radio.render(&state, &Table::new());

    assert_eq!(state.text("$radio"), "b");
    // No adoption happened, so the secondary key was never written
    assert_eq!(state.get("$secondaryRadio"), None);
}

#[test]
fn test_default_skips_invalid_and_empty_options() {
    let mut radio = Radio::new(RadioConfig::new())
        .with_option("A", "a")
        .with_option("Blank", "")
        .with_option("B", "b")
        .with_filter(sheet_filter());
    let state = StateStore::new();

    let view = radio.render(&state, &only_b_rows());

    assert_eq!(state.text("$radio"), "b");
    assert!(view.entries[0].disabled);
    assert_eq!(highlighted_values(&view), vec!["b"]);
}

#[test]
fn test_default_adoption_writes_once_per_pass() {
    let mut radio = ab_radio();
    let state = StateStore::new();
    let writes = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&writes);
    state.subscribe(move |_| *counter.lock().unwrap() += 1);

    radio.render(&state, &Table::new());
    radio.render(&state, &Table::new());

    assert_eq!(*writes.lock().unwrap(), 1);
}

#[test]
fn test_no_valid_options_adopts_nothing() {
    let mut radio = ab_radio().with_filter(sheet_filter());
    let state = StateStore::new();

    let view = radio.render(&state, &Table::new());

    assert!(view.entries.iter().all(|e| e.disabled));
    assert_eq!(state.get("$radio"), None);
    assert!(!state.is_dirty());
}

// ============================================================================
// Highlighting
// ============================================================================

#[test]
fn test_first_index_highlight_fallback() {
    let mut radio = Radio::new(RadioConfig::new().with_state_names("", "$secondaryRadio"))
        .with_option("A", "a")
        .with_option("B", "b")
        .with_option("C", "c");
    let state = StateStore::new();

    let view = radio.render(&state, &Table::new());

    let flags: Vec<bool> = view.entries.iter().map(|e| e.highlighted).collect();
    assert_eq!(flags, vec![true, false, false]);
    assert_eq!(state.get("$secondaryRadio"), None);
}

#[test]
fn test_highlight_uses_configured_colors() {
    let mut radio = Radio::new(RadioConfig::new().with_colors("red", "white"))
        .with_option("A", "a")
        .with_option("B", "b");
    let state = StateStore::new();

    let view = radio.render(&state, &Table::new());

    assert_eq!(view.entries[0].background, "red");
    assert_eq!(view.entries[1].background, "white");
}

#[test]
fn test_duplicate_values_highlight_together() {
    let mut radio = ab_radio().with_option("Also A", "a");
    let state = StateStore::with_values([("$radio", "a")]);

    let view = radio.render(&state, &Table::new());

    let indices: Vec<usize> = view.highlighted().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn test_unknown_current_highlights_nothing() {
    let mut radio = ab_radio();
    let state = StateStore::with_values([("$radio", "zzz")]);

    let view = radio.render(&state, &Table::new());

    assert_eq!(view.highlighted().count(), 0);
}

#[test]
fn test_disabled_first_option_not_highlighted_after_adoption() {
    let mut radio = ab_radio().with_filter(sheet_filter());
    let state = StateStore::new();

    let view = radio.render(&state, &only_b_rows());

    assert!(view.entries[0].disabled);
    assert!(!view.entries[0].highlighted);
    assert!(view.entries[1].highlighted);
    assert_eq!(highlighted_values(&view), vec!["b"]);
}

// ============================================================================
// Clicks
// ============================================================================

#[test]
fn test_click_updates_both_keys_atomically() {
    let mut radio = ab_radio().with_option("C", "c");
    let state = StateStore::new();
    let view = radio.render(&state, &Table::new());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let observer = state.clone();
    let log = Arc::clone(&seen);
    state.subscribe(move |keys| {
        log.lock().unwrap().push((
            keys.to_vec(),
            observer.text("$radio"),
            observer.text("$secondaryRadio"),
        ));
    });

    assert!(view.click(2, &state));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (keys, primary, secondary) = &seen[0];
    assert_eq!(keys, &vec!["$radio".to_string(), "$secondaryRadio".to_string()]);
    assert_eq!(primary, "c");
    assert_eq!(secondary, "c");
}

#[test]
fn test_click_on_disabled_option_is_ignored() {
    let mut radio = ab_radio().with_filter(sheet_filter());
    let state = StateStore::new();

    let view = radio.render(&state, &only_b_rows());
    assert!(view.entries[0].disabled);
    assert_eq!(state.text("$radio"), "b");

    state.clear_dirty();
    assert!(!view.click(0, &state));
    assert_eq!(state.text("$radio"), "b");
    assert!(!state.is_dirty());
}

#[test]
fn test_click_out_of_range_is_ignored() {
    let mut radio = ab_radio();
    let state = StateStore::new();
    let view = radio.render(&state, &Table::new());

    assert!(!view.click(9, &state));
    assert_eq!(state.text("$radio"), "a");
}

#[test]
fn test_custom_state_keys() {
    let mut radio = Radio::new(RadioConfig::new().with_state_names("$topic", "$lastTopic"))
        .with_option("X", "x")
        .with_option("Y", "y");
    let state = StateStore::new();

    let view = radio.render(&state, &Table::new());
    view.click(1, &state);

    assert_eq!(state.text("$topic"), "y");
    assert_eq!(state.text("$lastTopic"), "y");
    assert_eq!(state.get("$radio"), None);
}

#[test]
fn test_external_clear_restarts_default_adoption() {
    let mut radio = ab_radio();
    let state = StateStore::new();
    let view = radio.render(&state, &Table::new());
    view.click(1, &state);

    state.remove("$radio");
    radio.render(&state, &Table::new());

    assert_eq!(state.text("$radio"), "a");
    assert_eq!(state.text("$secondaryRadio"), "a");
}

// ============================================================================
// Validity probing
// ============================================================================

#[test]
fn test_no_filters_never_queries_data_source() {
    let mut radio = ab_radio();
    let source = CountingSource::new(Table::new());
    let state = StateStore::new();

    let view = radio.render(&state, &source);

    assert_eq!(source.calls.get(), 0);
    assert!(view.entries.iter().all(|e| !e.disabled));
}

#[test]
fn test_one_query_per_option_per_pass() {
    let mut radio = ab_radio().with_filter(sheet_filter());
    let source = CountingSource::new(only_b_rows());
    let state = StateStore::new();

    radio.render(&state, &source);
    assert_eq!(source.calls.get(), 2);

    radio.render(&state, &source);
    assert_eq!(source.calls.get(), 4);
}

#[test]
fn test_legend_and_name() {
    let mut radio = ab_radio();
    let state = StateStore::new();

    let view = radio.render(&state, &Table::new());
    assert_eq!(view.legend, None);
    assert_eq!(view.name, "$radio");

    radio.config.label = "Pick one".into();
    let view = radio.render(&state, &Table::new());
    assert_eq!(view.legend.as_deref(), Some("Pick one"));
    assert_eq!(view.name, "Pick one");
}

#[test]
fn test_view_carries_configured_name_and_scale() {
    let mut radio = Radio::new(
        RadioConfig::new()
            .with_name("topic")
            .with_label("Pick one")
            .with_scale(2.0),
    )
    .with_option("A", "a");
    let state = StateStore::new();

    let view = radio.render(&state, &Table::new());

    assert_eq!(view.name, "topic");
    assert_eq!(view.scale, 2.0);
    assert_eq!(view.legend.as_deref(), Some("Pick one"));
}

#[test]
fn test_entry_lookup_by_index() {
    let mut radio = ab_radio();
    let state = StateStore::new();

    let view = radio.render(&state, &Table::new());

    let entry = view.entry(1).unwrap();
    assert_eq!(entry.label, "B");
    assert_eq!(entry.value, "b");
    assert!(view.entry(9).is_none());
}
