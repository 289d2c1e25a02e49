use super::{normalize_key, BackingStore, StoreCallback, StoreValue, SubscriptionId};
use crate::StoreResult;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

/// The default [`BackingStore`]: values and change flags in ordered maps.
///
/// A new store starts with initialization completed, so values set by the
/// caller are tracked as changes. Deserializers clear the flag while they
/// populate a model and set it again when done, leaving nothing flagged.
/// Storing a model or collection of models after initialization marks
/// every property of those models as changed.
pub struct InMemoryBackingStore {
    values: BTreeMap<String, StoreValue>,
    /// Key -> whether the value was set after initialization completed.
    changed: BTreeMap<String, bool>,
    subscribers: BTreeMap<SubscriptionId, StoreCallback>,
    initialization_completed: bool,
    return_only_changed_values: AtomicBool,
}

impl InMemoryBackingStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            changed: BTreeMap::new(),
            subscribers: BTreeMap::new(),
            initialization_completed: true,
            return_only_changed_values: AtomicBool::new(false),
        }
    }

    /// Number of stored keys, changed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `key` is flagged as changed.
    #[must_use]
    pub fn is_changed(&self, key: &str) -> bool {
        self.changed.get(key.trim()).copied().unwrap_or(false)
    }

    fn visible(&self, key: &str) -> bool {
        !self.return_only_changed_values() || self.changed.get(key).copied().unwrap_or(false)
    }
}

impl Default for InMemoryBackingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryBackingStore {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            changed: self.changed.clone(),
            subscribers: self.subscribers.clone(),
            initialization_completed: self.initialization_completed,
            return_only_changed_values: AtomicBool::new(self.return_only_changed_values()),
        }
    }
}

impl fmt::Debug for InMemoryBackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBackingStore")
            .field("values", &self.values)
            .field("changed", &self.changed)
            .field("subscribers", &self.subscribers.len())
            .field("initialization_completed", &self.initialization_completed)
            .field("return_only_changed_values", &self.return_only_changed_values())
            .finish()
    }
}

/// Objects and collections always count as changed; scalars compare by value.
fn has_changed(current: Option<&StoreValue>, next: &StoreValue) -> bool {
    match (current, next) {
        (None, _) => true,
        (_, StoreValue::Object(_) | StoreValue::Collection(_)) => true,
        (Some(current), next) => current != next,
    }
}

impl BackingStore for InMemoryBackingStore {
    fn get(&self, key: &str) -> StoreResult<Option<&StoreValue>> {
        let key = normalize_key(key)?;
        if !self.visible(key) {
            return Ok(None);
        }
        Ok(self.values.get(key))
    }

    fn set(&mut self, key: &str, mut value: StoreValue) -> StoreResult<()> {
        let key = normalize_key(key)?;
        if !has_changed(self.values.get(key), &value) {
            return Ok(());
        }

        // A touched nested model is written whole, so all of its properties are dirty.
        if self.initialization_completed {
            value.for_each_model_mut(&mut |model| {
                model
                    .backing_store_mut()
                    .set_initialization_completed(false);
            });
        }

        self.changed
            .insert(key.to_owned(), self.initialization_completed);
        let previous = self.values.insert(key.to_owned(), value);

        if !self.subscribers.is_empty() {
            let current = self.values.get(key);
            for callback in self.subscribers.values() {
                callback(key, previous.as_ref(), current);
            }
        }
        Ok(())
    }

    fn enumerate(&self) -> Vec<(&str, &StoreValue)> {
        self.values
            .iter()
            .filter(|(key, _)| self.visible(key))
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }

    fn enumerate_keys_for_values_changed_to_null(&self) -> Vec<String> {
        self.values
            .iter()
            .filter(|(key, value)| value.is_null() && self.is_changed(key))
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn subscribe(&mut self, callback: StoreCallback) -> SubscriptionId {
        let id = Uuid::new_v4();
        self.subscribers.insert(id, callback);
        id
    }

    fn subscribe_with_id(&mut self, id: SubscriptionId, callback: StoreCallback) {
        self.subscribers.insert(id, callback);
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    fn clear(&mut self) {
        self.values.clear();
        self.changed.clear();
    }

    fn initialization_completed(&self) -> bool {
        self.initialization_completed
    }

    fn set_initialization_completed(&mut self, completed: bool) {
        self.initialization_completed = completed;
        for (key, value) in &mut self.values {
            value.for_each_model_mut(&mut |model| {
                model
                    .backing_store_mut()
                    .set_initialization_completed(completed);
            });
            self.changed.insert(key.clone(), !completed);
        }
    }

    fn return_only_changed_values(&self) -> bool {
        self.return_only_changed_values.load(Ordering::Relaxed)
    }

    fn set_return_only_changed_values(&self, value: bool) {
        self.return_only_changed_values
            .store(value, Ordering::Relaxed);
        for nested in self.values.values() {
            nested.for_each_model(&mut |model| {
                model.backing_store().set_return_only_changed_values(value);
            });
        }
    }

    fn clone_box(&self) -> Box<dyn BackingStore> {
        Box::new(self.clone())
    }
}
