//! Backing stores: string-keyed property containers behind every model.
//!
//! Models never hold property fields directly. Accessors read and write a
//! [`BackingStore`], which also records which keys changed after
//! initialization so that writers can emit PATCH-style payloads.

mod factory;
mod in_memory;
mod value;

pub use factory::{
    backing_store_factory, set_backing_store_factory, BackingStoreFactory,
    InMemoryBackingStoreFactory,
};
pub use in_memory::InMemoryBackingStore;
pub use value::{FromStoreValue, IntoStoreValue, StoreValue};

use crate::{StoreError, StoreResult};
use std::fmt;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

/// Identifies a store subscription.
pub type SubscriptionId = Uuid;

/// Called with `(key, previous, current)` whenever a stored value changes.
pub type StoreCallback =
    Arc<dyn Fn(&str, Option<&StoreValue>, Option<&StoreValue>) + Send + Sync>;

/// A property container with change tracking.
pub trait BackingStore: fmt::Debug + Send + Sync {
    /// Returns the value stored under `key`.
    ///
    /// With [`return_only_changed_values`](Self::return_only_changed_values)
    /// on, keys not flagged as changed read as absent.
    fn get(&self, key: &str) -> StoreResult<Option<&StoreValue>>;

    /// Stores `value` under `key`, notifying subscribers when it differs
    /// from the current value.
    fn set(&mut self, key: &str, value: StoreValue) -> StoreResult<()>;

    /// All visible `(key, value)` pairs, sorted by key.
    fn enumerate(&self) -> Vec<(&str, &StoreValue)>;

    /// Changed keys whose current value is [`StoreValue::Null`].
    fn enumerate_keys_for_values_changed_to_null(&self) -> Vec<String>;

    fn subscribe(&mut self, callback: StoreCallback) -> SubscriptionId;

    fn subscribe_with_id(&mut self, id: SubscriptionId, callback: StoreCallback);

    /// Returns true if a subscription was removed.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Drops every value and change flag. Subscriptions are kept.
    fn clear(&mut self);

    fn initialization_completed(&self) -> bool;

    /// Marks every stored key as unchanged (`true`) or changed (`false`)
    /// and forwards the flag to nested models.
    fn set_initialization_completed(&mut self, completed: bool);

    fn return_only_changed_values(&self) -> bool;

    /// Toggled through a shared reference while a model is being written.
    fn set_return_only_changed_values(&self, value: bool);

    fn clone_box(&self) -> Box<dyn BackingStore>;
}

impl Clone for Box<dyn BackingStore> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Typed access on top of [`BackingStore`].
pub trait BackingStoreExt: BackingStore {
    /// Reads `key` as `T`. Absent and `Null` values read as `Ok(None)`.
    fn get_as<T: FromStoreValue>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get(key)? {
            None | Some(StoreValue::Null) => Ok(None),
            Some(value) => T::from_store_value(value)
                .map(Some)
                .ok_or_else(|| StoreError::TypeMismatch {
                    key: key.trim().to_owned(),
                    expected: T::EXPECTED,
                    found: value.kind(),
                }),
        }
    }

    /// Accessor form of [`get_as`](Self::get_as): failures are logged and
    /// read as `None`.
    fn property<T: FromStoreValue>(&self, key: &str) -> Option<T> {
        match self.get_as(key) {
            Ok(value) => value,
            Err(e) => {
                error!(%key, "backing store read failed: {e}");
                None
            }
        }
    }

    /// Accessor form of [`set`](BackingStore::set): failures are logged.
    fn set_property<T: IntoStoreValue>(&mut self, key: &str, value: T) {
        if let Err(e) = self.set(key, value.into_store_value()) {
            error!(%key, "backing store write failed: {e}");
        }
    }
}

impl<S: BackingStore + ?Sized> BackingStoreExt for S {}

/// Trims a key and rejects blank ones.
pub(crate) fn normalize_key(key: &str) -> StoreResult<&str> {
    let key = key.trim();
    if key.is_empty() {
        Err(StoreError::EmptyKey)
    } else {
        Ok(key)
    }
}
