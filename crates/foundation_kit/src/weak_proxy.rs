//! Non-owning proxy for delegate-style callback targets.
//!
//! Holding a target through a `WeakProxy` instead of an `Arc` breaks
//! reference cycles: once every owning `Arc` is dropped the target is
//! destroyed and `object()` returns `None`.

use std::fmt;
use std::sync::{Arc, Weak};

pub struct WeakProxy<T> {
    object: Weak<T>,
}

impl<T> WeakProxy<T> {
    pub fn new(object: &Arc<T>) -> Self {
        Self {
            object: Arc::downgrade(object),
        }
    }

    /// Upgrade to a strong reference if the target is still alive
    pub fn object(&self) -> Option<Arc<T>> {
        self.object.upgrade()
    }

    /// Point the proxy at a different target
    pub fn set(&mut self, object: &Arc<T>) {
        self.object = Arc::downgrade(object);
    }

    pub fn is_alive(&self) -> bool {
        self.object.strong_count() > 0
    }
}

impl<T> Default for WeakProxy<T> {
    fn default() -> Self {
        Self { object: Weak::new() }
    }
}

impl<T> Clone for WeakProxy<T> {
    fn clone(&self) -> Self {
        Self {
            object: self.object.clone(),
        }
    }
}

impl<T> fmt::Debug for WeakProxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakProxy")
            .field("alive", &self.is_alive())
            .finish()
    }
}

impl<T> From<&Arc<T>> for WeakProxy<T> {
    fn from(object: &Arc<T>) -> Self {
        Self::new(object)
    }
}
