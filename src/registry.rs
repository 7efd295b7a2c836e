//! Type-keyed service registry.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{FakeError, FakeResult};
use crate::key::ServiceKey;

/// Type-erased shared service handle.
///
/// Every registry payload is the service's `Arc<T>` handle itself, boxed as
/// `Arc<dyn Any>`. Storing the handle (rather than the value) keeps sized
/// types and trait objects uniform: `get` downcasts to `Arc<T>` and clones
/// the inner handle, so repeated lookups observe the same instance.
pub type AnyService = Arc<dyn Any + Send + Sync>;

/// Downcasts a registry payload back to the `Arc<T>` handle it was stored as.
///
/// A mismatch means the entry was registered through the type-erased API with
/// a payload that does not match its key; the original argument was invalid.
pub(crate) fn downcast_shared<T>(any: AnyService) -> FakeResult<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    any.downcast::<Arc<T>>()
        .map(|shared| (*shared).clone())
        .map_err(|_| FakeError::InvalidArgument("service"))
}

// Vec for the first entries (cache-friendly linear scan), HashMap past the
// threshold. Test containers rarely hold more than a handful of services.
const SMALL_THRESHOLD: usize = 16;

#[derive(Default)]
struct Entries {
    small: Vec<(ServiceKey, AnyService)>,
    large: HashMap<ServiceKey, AnyService>,
}

impl Entries {
    fn get(&self, key: &ServiceKey) -> Option<&AnyService> {
        for (k, service) in &self.small {
            if k == key {
                return Some(service);
            }
        }
        self.large.get(key)
    }

    fn insert(&mut self, key: ServiceKey, service: AnyService) {
        if let Some(pos) = self.small.iter().position(|(k, _)| k == &key) {
            self.small[pos] = (key, service);
        } else if self.large.contains_key(&key) || self.small.len() >= SMALL_THRESHOLD {
            self.large.insert(key, service);
        } else {
            self.small.push((key, service));
        }
    }
}

/// Mapping from requested type to a previously supplied instance.
///
/// Re-registering a key replaces the previous entry (last writer wins). No
/// validation ties the payload to the key; the typed layers uphold that
/// contract. Lookups and mutation go through a lock so the owning container
/// is `Send + Sync`.
pub(crate) struct ServiceRegistry {
    entries: Mutex<Entries>,
}

impl ServiceRegistry {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(Entries::default()),
        }
    }

    /// Stores or overwrites the entry for `key`.
    pub(crate) fn register(&self, key: ServiceKey, service: AnyService) {
        self.entries.lock().insert(key, service);
    }

    /// Returns the stored instance for `key`, if any. Absence is a normal
    /// outcome, not an error.
    pub(crate) fn try_resolve(&self, key: &ServiceKey) -> Option<AnyService> {
        self.entries.lock().get(key).cloned()
    }

    /// Returns the stored instance for `key`, synthesizing and caching one
    /// when absent.
    ///
    /// The synthesizer runs outside the lock, so it may itself consult the
    /// registry. If another writer registers the key in the meantime, the
    /// registered instance wins and the synthesized one is dropped.
    pub(crate) fn resolve_or_synthesize(
        &self,
        key: &ServiceKey,
        synthesize: &dyn Fn() -> AnyService,
    ) -> AnyService {
        if let Some(existing) = self.try_resolve(key) {
            return existing;
        }
        let fresh = synthesize();
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(key) {
            return existing.clone();
        }
        entries.insert(*key, fresh.clone());
        fresh
    }
}
