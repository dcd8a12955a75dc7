#![forbid(unsafe_code)]

//! Single-fire completion cell.

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Box<dyn FnOnce(&T)>;

/// A single-fire, single-threaded completion cell.
///
/// `Promise` is the deferred result of an asynchronous operation: it starts
/// pending, is completed exactly once, and notifies subscribers in
/// registration order. Clones share the same underlying cell.
///
/// # Failure modes
///
/// - `complete` after completion returns `false` and drops the value.
/// - `get` on a pending promise returns `None` (no blocking, no panic).
pub struct Promise<T> {
    inner: Rc<RefCell<PromiseInner<T>>>,
}

struct PromiseInner<T> {
    value: Option<T>,
    callbacks: Vec<Callback<T>>,
}

impl<T> Clone for Promise<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for Promise<T> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<T> Promise<T> {
    /// Create a pending promise.
    pub fn pending() -> Self {
        Self {
            inner: Rc::new(RefCell::new(PromiseInner {
                value: None,
                callbacks: Vec::new(),
            })),
        }
    }

    /// Whether the promise has completed.
    pub fn is_complete(&self) -> bool {
        self.inner.borrow().value.is_some()
    }
}

impl<T: Clone> Promise<T> {
    /// Complete the promise, running queued callbacks in registration order.
    ///
    /// The first completion wins; later calls return `false`.
    pub fn complete(&self, value: T) -> bool {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            if inner.value.is_some() {
                return false;
            }
            inner.value = Some(value.clone());
            std::mem::take(&mut inner.callbacks)
        };
        // No borrow is held while callbacks run, so a callback may freely
        // re-enter `get`/`is_complete`/`on_complete`.
        for callback in callbacks {
            callback(&value);
        }
        true
    }

    /// A clone of the completed value, or `None` while pending.
    pub fn get(&self) -> Option<T> {
        self.inner.borrow().value.clone()
    }

    /// Subscribe to completion. Runs immediately if already complete.
    pub fn on_complete(&self, callback: impl FnOnce(&T) + 'static) {
        let completed = {
            let mut inner = self.inner.borrow_mut();
            match inner.value {
                Some(_) => inner.value.clone(),
                None => {
                    inner.callbacks.push(Box::new(callback));
                    return;
                }
            }
        };
        if let Some(value) = completed {
            callback(&value);
        }
    }
}
