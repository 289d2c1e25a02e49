//! Process-wide choice of backing store for newly constructed models.

use super::{BackingStore, InMemoryBackingStore};
use std::fmt;
use std::sync::OnceLock;

/// Creates the backing store a new model starts with.
pub trait BackingStoreFactory: fmt::Debug + Send + Sync {
    fn create(&self) -> Box<dyn BackingStore>;
}

/// Factory producing [`InMemoryBackingStore`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct InMemoryBackingStoreFactory;

impl BackingStoreFactory for InMemoryBackingStoreFactory {
    fn create(&self) -> Box<dyn BackingStore> {
        Box::new(InMemoryBackingStore::new())
    }
}

static FACTORY: OnceLock<Box<dyn BackingStoreFactory>> = OnceLock::new();

/// Installs the factory used by every model constructor.
///
/// Only the first call wins; later calls hand the factory back.
pub fn set_backing_store_factory(
    factory: Box<dyn BackingStoreFactory>,
) -> Result<(), Box<dyn BackingStoreFactory>> {
    FACTORY.set(factory)
}

/// The installed factory, defaulting to [`InMemoryBackingStoreFactory`].
pub fn backing_store_factory() -> &'static dyn BackingStoreFactory {
    FACTORY
        .get_or_init(|| Box::new(InMemoryBackingStoreFactory))
        .as_ref()
}
