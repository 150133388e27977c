//! Key-value persistence behind the session store.
//!
//! The browser build writes to `window.localStorage`. Hosts without one get
//! `NoopStorage`, which cannot hold a session. Tests use an in-memory map.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::rc::Rc;

/// Minimal string store. Write failures are logged and swallowed.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Whether writes are kept at all. The session store refuses to sign in
    /// on top of a store that answers `false`.
    fn persistent(&self) -> bool {
        true
    }
}

/// Store for hosts without `localStorage`: reads miss, writes vanish.
#[derive(Clone, Copy, Default)]
pub struct NoopStorage;

impl KeyValueStore for NoopStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}

    fn persistent(&self) -> bool {
        false
    }
}

/// In-memory store. Clones share the same map.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        for (key, value) in entries {
            storage.set(key, value);
        }
        storage
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;

    /// `window.localStorage`.
    pub struct BrowserStorage {
        inner: web_sys::Storage,
    }

    impl BrowserStorage {
        /// `None` when there is no window or the browser denies access.
        pub fn open() -> Option<Self> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .map(|inner| Self { inner })
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            if self.inner.set_item(key, value).is_err() {
                tracing::warn!(key, "failed to write to localStorage");
            }
        }

        fn remove(&self, key: &str) {
            if self.inner.remove_item(key).is_err() {
                tracing::warn!(key, "failed to remove from localStorage");
            }
        }
    }
}

/// `localStorage` in a browser that grants it, `NoopStorage` everywhere else.
pub fn default_storage() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = BrowserStorage::open() {
            return Box::new(storage);
        }
        tracing::warn!("localStorage unavailable; sign-in is disabled");
    }
    Box::new(NoopStorage)
}
