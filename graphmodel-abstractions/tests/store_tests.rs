use graphmodel_abstractions::store::{
    backing_store_factory, BackingStore, BackingStoreExt, InMemoryBackingStore, StoreCallback,
    StoreValue,
};
use graphmodel_abstractions::StoreError;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

type Events = Arc<Mutex<Vec<(String, Option<StoreValue>, Option<StoreValue>)>>>;

fn recording_callback() -> (StoreCallback, Events) {
    let events: Events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let callback: StoreCallback = Arc::new(move |key, previous, current| {
        sink.lock()
            .unwrap()
            .push((key.to_owned(), previous.cloned(), current.cloned()));
    });
    (callback, events)
}

// ── Get & set ────────────────────────────────────────────────────

#[test]
fn set_then_get_returns_value() {
    let mut store = InMemoryBackingStore::new();
    store.set("displayName", StoreValue::String("Laptop".into())).unwrap();
    assert_eq!(
        store.get("displayName").unwrap(),
        Some(&StoreValue::String("Laptop".into()))
    );
}

#[test]
fn get_missing_key_is_none() {
    let store = InMemoryBackingStore::new();
    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn keys_are_trimmed() {
    let mut store = InMemoryBackingStore::new();
    store.set("  title ", StoreValue::String("x".into())).unwrap();
    assert!(store.get("title").unwrap().is_some());
    assert!(store.get(" title").unwrap().is_some());
}

#[test]
fn empty_key_is_rejected() {
    let mut store = InMemoryBackingStore::new();
    assert_eq!(store.get(""), Err(StoreError::EmptyKey));
    assert_eq!(store.get("   "), Err(StoreError::EmptyKey));
    assert_eq!(store.set("", StoreValue::Null), Err(StoreError::EmptyKey));
    assert!(store.is_empty());
}

#[test]
fn get_as_checks_type() {
    let mut store = InMemoryBackingStore::new();
    store.set_property("count", 42_i32);
    assert_eq!(store.get_as::<i32>("count").unwrap(), Some(42));
    assert_eq!(store.get_as::<i64>("count").unwrap(), Some(42));

    let err = store.get_as::<String>("count").unwrap_err();
    assert_eq!(
        err,
        StoreError::TypeMismatch {
            key: "count".into(),
            expected: "string",
            found: "int",
        }
    );
}

#[test]
fn property_swallows_mismatch_as_none() {
    let mut store = InMemoryBackingStore::new();
    store.set_property("flag", true);
    assert_eq!(store.property::<String>("flag"), None);
    assert_eq!(store.property::<bool>("flag"), Some(true));
}

#[test]
fn null_reads_as_none() {
    let mut store = InMemoryBackingStore::new();
    store.set_property::<Option<String>>("title", None);
    assert_eq!(store.get("title").unwrap(), Some(&StoreValue::Null));
    assert_eq!(store.get_as::<String>("title").unwrap(), None);
}

#[test]
fn collections_convert_elementwise() {
    let mut store = InMemoryBackingStore::new();
    store.set_property("categories", vec!["Red".to_string(), "Blue".to_string()]);
    assert_eq!(
        store.property::<Vec<String>>("categories"),
        Some(vec!["Red".to_string(), "Blue".to_string()])
    );
    assert_eq!(store.property::<Vec<bool>>("categories"), None);
}

#[test]
fn enumerate_is_sorted_by_key() {
    let mut store = InMemoryBackingStore::new();
    store.set_property("zeta", 1_i64);
    store.set_property("alpha", 2_i64);
    store.set_property("mid", 3_i64);
    let keys: Vec<&str> = store.enumerate().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn clear_drops_values() {
    let mut store = InMemoryBackingStore::new();
    store.set_property("a", 1_i64);
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.get("a").unwrap(), None);
}

// ── Change tracking ──────────────────────────────────────────────

#[test]
fn new_store_tracks_sets_as_changes() {
    let mut store = InMemoryBackingStore::new();
    assert!(store.initialization_completed());
    store.set_property("title", "Buy milk");
    assert!(store.is_changed("title"));
}

#[test]
fn sets_during_initialization_are_not_changes() {
    let mut store = InMemoryBackingStore::new();
    store.set_initialization_completed(false);
    store.set_property("title", "Buy milk");
    store.set_initialization_completed(true);
    assert!(!store.is_changed("title"));

    store.set_property("title", "Buy bread");
    assert!(store.is_changed("title"));
}

#[test]
fn setting_same_scalar_is_not_a_change() {
    let mut store = InMemoryBackingStore::new();
    store.set_initialization_completed(false);
    store.set_property("title", "same");
    store.set_initialization_completed(true);

    store.set_property("title", "same");
    assert!(!store.is_changed("title"));
}

#[test]
fn return_only_changed_values_hides_unchanged_keys() {
    let mut store = InMemoryBackingStore::new();
    store.set_initialization_completed(false);
    store.set_property("id", "abc");
    store.set_initialization_completed(true);
    store.set_property("title", "new");

    store.set_return_only_changed_values(true);
    assert_eq!(store.get("id").unwrap(), None);
    assert!(store.get("title").unwrap().is_some());
    let keys: Vec<&str> = store.enumerate().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["title"]);

    store.set_return_only_changed_values(false);
    assert!(store.get("id").unwrap().is_some());
}

#[test]
fn keys_changed_to_null_are_enumerated() {
    let mut store = InMemoryBackingStore::new();
    store.set_initialization_completed(false);
    store.set_property("description", "old");
    store.set_property("version", 3_i32);
    store.set_initialization_completed(true);

    store.set_property::<Option<String>>("description", None);
    assert_eq!(
        store.enumerate_keys_for_values_changed_to_null(),
        vec!["description".to_string()]
    );
}

#[test]
fn clearing_initialization_marks_everything_changed() {
    let mut store = InMemoryBackingStore::new();
    store.set_initialization_completed(false);
    store.set_property("a", 1_i64);
    store.set_initialization_completed(true);
    assert!(!store.is_changed("a"));

    store.set_initialization_completed(false);
    assert!(store.is_changed("a"));
}

// ── Subscriptions ────────────────────────────────────────────────

#[test]
fn subscribers_see_previous_and_current() {
    let mut store = InMemoryBackingStore::new();
    let (callback, events) = recording_callback();
    store.subscribe(callback);

    store.set_property("title", "first");
    store.set_property("title", "second");

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], ("title".into(), None, Some(StoreValue::String("first".into()))));
    assert_eq!(
        events[1],
        (
            "title".into(),
            Some(StoreValue::String("first".into())),
            Some(StoreValue::String("second".into()))
        )
    );
}

#[test]
fn unchanged_set_does_not_notify() {
    let mut store = InMemoryBackingStore::new();
    let (callback, events) = recording_callback();
    store.subscribe(callback);

    store.set_property("n", 1_i64);
    store.set_property("n", 1_i64);
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut store = InMemoryBackingStore::new();
    let (callback, events) = recording_callback();
    let id = store.subscribe(callback);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_property("n", 1_i64);
    assert!(events.lock().unwrap().is_empty());
}

#[test]
fn subscribe_with_id_replaces_existing() {
    let mut store = InMemoryBackingStore::new();
    let (first, first_events) = recording_callback();
    let (second, second_events) = recording_callback();
    let id = store.subscribe(first);
    store.subscribe_with_id(id, second);

    store.set_property("n", 1_i64);
    assert!(first_events.lock().unwrap().is_empty());
    assert_eq!(second_events.lock().unwrap().len(), 1);
}

#[test]
fn clear_keeps_subscribers() {
    let mut store = InMemoryBackingStore::new();
    let (callback, events) = recording_callback();
    store.subscribe(callback);
    store.clear();
    store.set_property("n", 1_i64);
    assert_eq!(events.lock().unwrap().len(), 1);
}

// ── Factory & cloning ────────────────────────────────────────────

#[test]
fn default_factory_creates_empty_in_memory_store() {
    let store = backing_store_factory().create();
    assert!(store.enumerate().is_empty());
    assert!(store.initialization_completed());
}

#[test]
fn boxed_store_clone_is_independent() {
    let mut original: Box<dyn BackingStore> = Box::new(InMemoryBackingStore::new());
    original.set_property("a", 1_i64);
    let mut copy = original.clone();
    copy.set_property("a", 2_i64);

    assert_eq!(original.property::<i64>("a"), Some(1));
    assert_eq!(copy.property::<i64>("a"), Some(2));
}

// ── Properties ───────────────────────────────────────────────────

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,12}").unwrap()
}

proptest! {
    /// Keys written after initialization are exactly the changed keys.
    #[test]
    fn changed_keys_match_post_init_writes(
        initial in prop::collection::btree_map(key_strategy(), any::<i64>(), 0..8),
        updates in prop::collection::btree_map(key_strategy(), any::<i64>(), 0..8),
    ) {
        let mut store = InMemoryBackingStore::new();
        store.set_initialization_completed(false);
        for (key, value) in &initial {
            store.set_property(key, *value);
        }
        store.set_initialization_completed(true);
        for (key, value) in &updates {
            store.set_property(key, *value);
        }

        for (key, value) in &updates {
            let expected = initial.get(key) != Some(value);
            prop_assert_eq!(store.is_changed(key), expected);
        }
        for key in initial.keys().filter(|key| !updates.contains_key(*key)) {
            prop_assert!(!store.is_changed(key));
        }
    }

    /// With changes-only on, enumerate never yields an unchanged key.
    #[test]
    fn changes_only_enumerate_is_subset(
        writes in prop::collection::vec((key_strategy(), any::<bool>(), any::<i64>()), 0..16),
    ) {
        let mut store = InMemoryBackingStore::new();
        for (key, during_init, value) in &writes {
            store.set_initialization_completed(!*during_init);
            store.set_property(key, *value);
        }
        store.set_return_only_changed_values(true);
        for (key, _) in store.enumerate() {
            prop_assert!(store.is_changed(key));
        }
    }
}
