use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use chooser_data::{StateLookup, Value};

type Subscriber = Arc<dyn Fn(&[String]) + Send + Sync>;

/// Handle returned by [`StateStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// Shared key/value state with interior mutability.
///
/// `StateStore` is the application-wide mapping that choosers read their
/// current selection from and write selection changes into. It uses
/// `Arc<RwLock<..>>` internally, so clones are cheap and all clones observe
/// the same values.
///
/// Writes go through [`update`](Self::update), which merges a batch of keys
/// under a single lock and then notifies subscribers once with every key
/// written. Observers never see half of a batch.
///
/// # Example
///
/// ```
/// use chooser::state::StateStore;
///
/// let state = StateStore::new();
/// state.update([("$radio", "a"), ("$secondaryRadio", "a")]);
/// assert_eq!(state.text("$radio"), "a");
///
/// // Try a hypothetical value without touching the real state
/// let what_if = state.clone_with([("$radio", "b")]);
/// assert_eq!(what_if.text("$radio"), "b");
/// assert_eq!(state.text("$radio"), "a");
/// ```
pub struct StateStore {
    inner: Arc<RwLock<HashMap<String, Value>>>,
    dirty: Arc<AtomicBool>,
    subscribers: Arc<RwLock<Vec<(SubscriptionId, Subscriber)>>>,
}

impl StateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            dirty: Arc::new(AtomicBool::new(false)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with values
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let store = Self::new();
        if let Ok(mut guard) = store.inner.write() {
            guard.extend(values.into_iter().map(|(k, v)| (k.into(), v.into())));
        }
        store
    }

    /// Get a clone of the value stored under `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner
            .read()
            .map(|guard| guard.get(key).cloned())
            .unwrap_or_else(|poisoned| poisoned.into_inner().get(key).cloned())
    }

    /// Get the text form of `key`, empty when unset
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(|v| v.text()).unwrap_or_default()
    }

    /// Merge `values` into the store and notify subscribers.
    ///
    /// All keys are written under one lock; subscribers run after the lock
    /// is released and receive the written keys in order.
    pub fn update<K, V>(&self, values: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut keys = Vec::new();
        if let Ok(mut guard) = self.inner.write() {
            for (k, v) in values {
                let k = k.into();
                guard.insert(k.clone(), v.into());
                keys.push(k);
            }
        }
        if keys.is_empty() {
            return;
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.notify(&keys);
    }

    /// Remove `key` from the store
    pub fn remove(&self, key: &str) {
        let removed = self
            .inner
            .write()
            .map(|mut guard| guard.remove(key).is_some())
            .unwrap_or(false);
        if removed {
            self.dirty.store(true, Ordering::SeqCst);
            self.notify(&[key.to_string()]);
        }
    }

    /// Produce a hypothetical copy of the current state with `overrides`
    /// applied. The store itself is not modified.
    pub fn clone_with<K, V>(&self, overrides: impl IntoIterator<Item = (K, V)>) -> StateSnapshot
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut snapshot = self.snapshot();
        snapshot
            .values
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        snapshot
    }

    /// Copy the current state
    pub fn snapshot(&self) -> StateSnapshot {
        let values = self
            .inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone());
        StateSnapshot { values }
    }

    /// Register a callback invoked after every update
    pub fn subscribe<F>(&self, f: F) -> SubscriptionId
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        if let Ok(mut guard) = self.subscribers.write() {
            guard.push((id, Arc::new(f)));
        }
        id
    }

    /// Remove a previously registered callback
    pub fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut guard) = self.subscribers.write() {
            guard.retain(|(sid, _)| *sid != id);
        }
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn notify(&self, keys: &[String]) {
        // Clone the list so callbacks may subscribe or update without deadlocking
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .read()
            .map(|guard| guard.iter().map(|(_, f)| Arc::clone(f)).collect())
            .unwrap_or_default();
        for f in subscribers {
            f(keys);
        }
    }
}

impl Clone for StateStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subscribers = self.subscribers.read().map(|g| g.len()).unwrap_or(0);
        f.debug_struct("StateStore")
            .field("values", &self.snapshot().values)
            .field("dirty", &self.is_dirty())
            .field("subscribers", &subscribers)
            .finish()
    }
}

/// An immutable copy of shared state, possibly with hypothetical overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateSnapshot {
    values: HashMap<String, Value>,
}

impl StateSnapshot {
    /// Get the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get the text form of `key`, empty when unset
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(Value::text).unwrap_or_default()
    }

    /// Number of keys in the snapshot
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the snapshot holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StateLookup for StateSnapshot {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}
