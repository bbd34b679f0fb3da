//! Fakes shared by the unit tests of this crate.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::shared::observers::Subscription;
use crate::shared::storage::{KeyValueStorage, StorageError};
use crate::shared::theme::{PresentationSink, Theme};
use crate::system::auth::{
    AuthError, Credentials, Identity, IdentityProvider, Persistence, SessionCallback,
};
use crate::system::session::{SessionListener, SessionState};

pub const ADMIN_EMAIL: &str = "admin@rental.example";
pub const ADMIN_PASSWORD: &str = "correct horse";

pub fn identity(email: &str) -> Identity {
    Identity {
        uid: format!("uid-{}", email),
        email: email.to_string(),
    }
}

struct FakeObserver {
    callback: Rc<dyn Fn(Option<&Identity>)>,
    released: Rc<Cell<bool>>,
}

/// Identity provider double. Records every interaction, including attempts
/// to notify observers that were already released.
pub struct FakeProvider {
    accounts: RefCell<HashMap<String, String>>,
    observers: RefCell<Vec<FakeObserver>>,
    current: RefCell<Option<Identity>>,
    persistence: Cell<Option<Persistence>>,
    reject_persistence: bool,
    unavailable: Cell<bool>,
    hold_sign_in: Cell<bool>,
    hold_sign_out: Cell<bool>,
    muted: Cell<bool>,
    subscribe_calls: Cell<u32>,
    unsubscribe_calls: Rc<Cell<u32>>,
    post_release_attempts: Cell<u32>,
    sign_in_calls: Cell<u32>,
    sign_out_calls: Cell<u32>,
}

impl FakeProvider {
    pub fn new() -> Self {
        let provider = Self {
            accounts: RefCell::new(HashMap::new()),
            observers: RefCell::new(Vec::new()),
            current: RefCell::new(None),
            persistence: Cell::new(None),
            reject_persistence: false,
            unavailable: Cell::new(false),
            hold_sign_in: Cell::new(false),
            hold_sign_out: Cell::new(false),
            muted: Cell::new(false),
            subscribe_calls: Cell::new(0),
            unsubscribe_calls: Rc::new(Cell::new(0)),
            post_release_attempts: Cell::new(0),
            sign_in_calls: Cell::new(0),
            sign_out_calls: Cell::new(0),
        };
        provider.with_account(ADMIN_EMAIL, ADMIN_PASSWORD)
    }

    pub fn with_account(self, email: &str, password: &str) -> Self {
        self.accounts
            .borrow_mut()
            .insert(email.to_string(), password.to_string());
        self
    }

    pub fn rejecting_persistence(mut self) -> Self {
        self.reject_persistence = true;
        self
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Make sign-in yield once before answering.
    pub fn hold_sign_in(&self, hold: bool) {
        self.hold_sign_in.set(hold);
    }

    /// Make sign-out yield once before answering.
    pub fn hold_sign_out(&self, hold: bool) {
        self.hold_sign_out.set(hold);
    }

    /// Stop sign-in/sign-out from notifying observers.
    pub fn mute_notifications(&self, muted: bool) {
        self.muted.set(muted);
    }

    /// Deliver a session change to every observer ever registered.
    pub fn emit(&self, identity: Option<Identity>) {
        let observers: Vec<(Rc<dyn Fn(Option<&Identity>)>, bool)> = self
            .observers
            .borrow()
            .iter()
            .map(|o| (Rc::clone(&o.callback), o.released.get()))
            .collect();

        for (callback, released) in observers {
            if released {
                self.post_release_attempts
                    .set(self.post_release_attempts.get() + 1);
            } else {
                callback(identity.as_ref());
            }
        }
    }

    fn announce(&self, identity: Option<Identity>) {
        *self.current.borrow_mut() = identity.clone();
        if !self.muted.get() {
            self.emit(identity);
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    pub fn persistence(&self) -> Option<Persistence> {
        self.persistence.get()
    }

    pub fn active_observers(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|o| !o.released.get())
            .count()
    }

    pub fn subscribe_calls(&self) -> u32 {
        self.subscribe_calls.get()
    }

    pub fn unsubscribe_calls(&self) -> u32 {
        self.unsubscribe_calls.get()
    }

    pub fn post_release_attempts(&self) -> u32 {
        self.post_release_attempts.get()
    }

    pub fn sign_in_calls(&self) -> u32 {
        self.sign_in_calls.get()
    }

    pub fn sign_out_calls(&self) -> u32 {
        self.sign_out_calls.get()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    async fn sign_in_with_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Identity, AuthError> {
        self.sign_in_calls.set(self.sign_in_calls.get() + 1);
        if self.hold_sign_in.get() {
            tokio::task::yield_now().await;
        }
        if self.unavailable.get() {
            return Err(AuthError::ProviderUnavailable("fake outage".to_string()));
        }

        let matches = self
            .accounts
            .borrow()
            .get(&credentials.email)
            .is_some_and(|password| *password == credentials.password);
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let signed_in = identity(&credentials.email);
        self.announce(Some(signed_in.clone()));
        Ok(signed_in)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        if self.hold_sign_out.get() {
            tokio::task::yield_now().await;
        }
        if self.unavailable.get() {
            return Err(AuthError::ProviderUnavailable("fake outage".to_string()));
        }
        self.announce(None);
        Ok(())
    }

    fn subscribe(&self, callback: SessionCallback) -> Subscription {
        self.subscribe_calls.set(self.subscribe_calls.get() + 1);
        let released = Rc::new(Cell::new(false));
        self.observers.borrow_mut().push(FakeObserver {
            callback: Rc::from(callback),
            released: Rc::clone(&released),
        });

        let unsubscribe_calls = Rc::clone(&self.unsubscribe_calls);
        Subscription::new(move || {
            released.set(true);
            unsubscribe_calls.set(unsubscribe_calls.get() + 1);
        })
    }

    fn set_persistence(&self, persistence: Persistence) -> Result<(), AuthError> {
        if self.reject_persistence {
            return Err(AuthError::ProviderUnavailable(
                "persistence not supported".to_string(),
            ));
        }
        self.persistence.set(Some(persistence));
        Ok(())
    }
}

/// Collects every published session state.
#[derive(Clone, Default)]
pub struct StateLog {
    states: Rc<RefCell<Vec<SessionState>>>,
}

impl StateLog {
    pub fn listener(&self) -> SessionListener {
        let states = Rc::clone(&self.states);
        Rc::new(move |state| states.borrow_mut().push(state))
    }

    pub fn states(&self) -> Vec<SessionState> {
        self.states.borrow().clone()
    }
}

/// Presentation sink that remembers every applied theme.
#[derive(Clone, Default)]
pub struct RecordingSink {
    applied: Rc<RefCell<Vec<Theme>>>,
}

impl RecordingSink {
    pub fn applied(&self) -> Vec<Theme> {
        self.applied.borrow().clone()
    }
}

impl PresentationSink for RecordingSink {
    fn apply(&self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }
}

/// Storage that is never available.
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
