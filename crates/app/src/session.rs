//! The single source of truth for who is signed in.
//!
//! `SessionStore` owns the current identity and bearer token, mirrors both to
//! persistent storage, and pushes every change to its subscribers. It is
//! cheap to clone; clones share state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dioxus::prelude::*;
use shared_types::{AppError, Identity};

use crate::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user_data";

type Listener = Rc<dyn Fn(Option<&Identity>)>;

struct Inner {
    storage: Box<dyn KeyValueStore>,
    identity: Option<Identity>,
    token: Option<String>,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionStore {
    /// Hydrate from storage.
    ///
    /// A stored identity that fails to parse is treated as signed out and
    /// both entries are purged. A token without an identity, or the reverse,
    /// is also signed out but left in place.
    pub fn init(storage: impl KeyValueStore + 'static) -> Self {
        Self::with_boxed(Box::new(storage))
    }

    pub fn with_boxed(storage: Box<dyn KeyValueStore>) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let identity = match storage.get(USER_KEY) {
            Some(raw) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(err) => {
                    tracing::warn!(error = %err, "stored identity is corrupt; clearing session");
                    storage.remove(TOKEN_KEY);
                    storage.remove(USER_KEY);
                    return Self::from_parts(storage, None, None);
                }
            },
            None => None,
        };

        if identity.is_some() != token.is_some() {
            tracing::debug!("partial session in storage; starting signed out");
        }
        Self::from_parts(storage, identity, token)
    }

    fn from_parts(
        storage: Box<dyn KeyValueStore>,
        identity: Option<Identity>,
        token: Option<String>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                storage,
                identity,
                token,
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    /// The signed-in identity. `None` unless a token is also held.
    pub fn current(&self) -> Option<Identity> {
        let inner = self.inner.borrow();
        match (&inner.identity, &inner.token) {
            (Some(identity), Some(_)) => Some(identity.clone()),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<String> {
        let inner = self.inner.borrow();
        match (&inner.identity, &inner.token) {
            (Some(_), Some(token)) => Some(token.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        let inner = self.inner.borrow();
        inner.identity.is_some() && inner.token.is_some()
    }

    /// Persist a fresh session and notify subscribers.
    ///
    /// Fails without touching the store or its subscribers when the backing
    /// storage does not persist, or the identity cannot be serialized.
    pub fn set(&self, token: &str, identity: Identity) -> Result<(), AppError> {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.storage.persistent() {
                tracing::warn!("no persistent storage; refusing to start a session");
                return Err(AppError::storage("persistent storage unavailable"));
            }
            let json = serde_json::to_string(&identity).map_err(|err| {
                tracing::error!(error = %err, "failed to serialize identity");
                AppError::storage("identity could not be serialized")
            })?;
            inner.storage.set(TOKEN_KEY, token);
            inner.storage.set(USER_KEY, &json);
            inner.token = Some(token.to_string());
            inner.identity = Some(identity);
        }
        self.notify();
        Ok(())
    }

    /// Drop the session everywhere. Subscribers are notified even if the
    /// store was already empty.
    pub fn clear(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.storage.remove(TOKEN_KEY);
            inner.storage.remove(USER_KEY);
            inner.token = None;
            inner.identity = None;
        }
        self.notify();
    }

    /// Register a listener. It is called immediately with the current value,
    /// then on every `set`/`clear` until the returned guard is dropped.
    pub fn subscribe(&self, listener: impl Fn(Option<&Identity>) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, listener.clone()));
            id
        };
        let current = self.current();
        listener(current.as_ref());
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn notify(&self) {
        // Snapshot first so listeners may re-enter the store.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        let current = self.current();
        for listener in listeners {
            listener(current.as_ref());
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
pub struct Subscription {
    store: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

/// The store provided at the root of the app.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

/// Reactive view of the current identity, kept in sync for as long as the
/// calling component is mounted.
pub fn use_current_identity() -> Signal<Option<Identity>> {
    let session = use_session();
    let initial = session.clone();
    let identity = use_signal(move || initial.current());
    use_hook(move || {
        Rc::new(session.subscribe(move |next| {
            let mut identity = identity;
            if (*identity.peek()).as_ref() != next {
                identity.set(next.cloned());
            }
        }))
    });
    identity
}

/// Whether a session is active, re-evaluated on every session change.
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    let identity = use_current_identity();
    identity.read().is_some() && session.is_authenticated()
}
