//! Observer registry with explicit, cancellable subscriptions.
//!
//! Every `subscribe` returns a [`Subscription`] handle. Releasing the handle
//! (explicitly via [`Subscription::release`] or implicitly on drop) removes
//! the observer; after that the observer is never invoked again, even if a
//! notification round is already in progress.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier of a registered observer, unique per registry.
pub type ObserverId = u64;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Handle for a registered observer.
///
/// The release action runs at most once.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Unregister the observer.
    pub fn release(mut self) {
        self.run_release();
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

struct Inner<T> {
    next_id: Cell<ObserverId>,
    entries: RefCell<Vec<(ObserverId, Callback<T>)>>,
}

impl<T> Inner<T> {
    fn is_registered(&self, id: ObserverId) -> bool {
        self.entries.borrow().iter().any(|(entry_id, _)| *entry_id == id)
    }

    fn remove(&self, id: ObserverId) {
        self.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
    }
}

/// Single-threaded list of observers for values of type `T`.
///
/// Cloning the registry shares the same observer list.
pub struct ObserverRegistry<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for ObserverRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> ObserverRegistry<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                next_id: Cell::new(1),
                entries: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register `callback` and return its id together with the release handle.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> (ObserverId, Subscription) {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .entries
            .borrow_mut()
            .push((id, Rc::new(callback)));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        let subscription = Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.remove(id);
            }
        });

        (id, subscription)
    }

    pub fn is_registered(&self, id: ObserverId) -> bool {
        self.inner.is_registered(id)
    }

    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `value` to every registered observer, in registration order.
    ///
    /// Observers may subscribe or release during delivery; an observer
    /// released mid-round is skipped.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<(ObserverId, Callback<T>)> = self
            .inner
            .entries
            .borrow()
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in snapshot {
            if self.inner.is_registered(id) {
                callback(value);
            }
        }
    }

    /// Deliver `value` to a single observer if it is still registered.
    ///
    /// Returns `false` when the observer has already been released.
    pub fn notify_one(&self, id: ObserverId, value: &T) -> bool {
        let callback = self
            .inner
            .entries
            .borrow()
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, callback)| Rc::clone(callback));

        match callback {
            Some(callback) => {
                callback(value);
                true
            }
            None => false,
        }
    }
}
