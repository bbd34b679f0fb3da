//! Session controller: authentication status for the admin shell.
//!
//! The controller subscribes once to the identity provider and recomputes
//! [`SessionState`] from every notification. `is_authenticated` is a pure
//! function of the latest notified identity and the authorization policy;
//! `is_checking` turns off on the first notification and never turns back
//! on for the lifetime of the controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::shared::observers::Subscription;
use crate::system::auth::{
    AuthError, AuthorizationPolicy, Credentials, Identity, IdentityProvider, Persistence,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub is_checking: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            is_checking: true,
        }
    }
}

/// Receives every new [`SessionState`].
pub type SessionListener = Rc<dyn Fn(SessionState)>;

/// `true` iff an identity is present and the policy admits it.
pub fn evaluate(policy: &dyn AuthorizationPolicy, identity: Option<&Identity>) -> bool {
    identity.is_some_and(|identity| policy.is_authorized(identity))
}

struct Shared {
    state: Cell<SessionState>,
    listener: SessionListener,
}

impl Shared {
    fn publish(&self, next: SessionState) {
        let previous = self.state.replace(next);
        if previous == next {
            return;
        }
        if previous.is_authenticated != next.is_authenticated {
            log::info!(
                "Session {}",
                if next.is_authenticated {
                    "authenticated"
                } else {
                    "ended"
                }
            );
        }
        (self.listener)(next);
    }

    fn settle(&self, is_authenticated: bool) {
        self.publish(SessionState {
            is_authenticated,
            is_checking: false,
        });
    }
}

pub struct SessionController<P: ?Sized> {
    provider: Rc<P>,
    policy: Rc<dyn AuthorizationPolicy>,
    shared: Rc<Shared>,
    subscription: RefCell<Option<Subscription>>,
    torn_down: Cell<bool>,
    login_pending: Cell<bool>,
    pending: Cell<u32>,
    /// Bumped by every logout; a login started before it must not publish.
    logout_epoch: Cell<u64>,
}

impl<P: IdentityProvider + ?Sized + 'static> SessionController<P> {
    pub fn new(
        provider: Rc<P>,
        policy: Rc<dyn AuthorizationPolicy>,
        listener: SessionListener,
    ) -> Self {
        Self {
            provider,
            policy,
            shared: Rc::new(Shared {
                state: Cell::new(SessionState::default()),
                listener,
            }),
            subscription: RefCell::new(None),
            torn_down: Cell::new(false),
            login_pending: Cell::new(false),
            pending: Cell::new(0),
            logout_epoch: Cell::new(0),
        }
    }

    /// Request session-scoped persistence and register the one observer.
    ///
    /// A second call while subscribed, or any call after `teardown`, does
    /// nothing.
    pub fn mount(&self) {
        if self.torn_down.get() || self.subscription.borrow().is_some() {
            return;
        }

        if let Err(e) = self.provider.set_persistence(Persistence::Session) {
            log::warn!("Could not switch to session-scoped persistence: {}", e);
        }

        let shared = Rc::clone(&self.shared);
        let policy = Rc::clone(&self.policy);
        let subscription = self.provider.subscribe(Box::new(move |identity| {
            log::debug!("Identity notification (present: {})", identity.is_some());
            shared.settle(evaluate(policy.as_ref(), identity));
        }));

        *self.subscription.borrow_mut() = Some(subscription);
    }

    /// Release the identity subscription. Safe to call more than once.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        let subscription = self.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.release();
            log::debug!("Session subscription released");
        }
    }

    /// Verify credentials, then authorize the returned identity.
    ///
    /// Every failure leaves the session unauthenticated and not checking.
    /// Rejected while another login or a logout is in flight. A logout
    /// issued meanwhile wins: the provider is signed back out and the login
    /// fails.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if self.login_pending.get() || self.pending.get() > 0 {
            return Err(AuthError::OperationInProgress);
        }
        self.login_pending.set(true);
        self.begin();
        let epoch = self.logout_epoch.get();

        let mut outcome = self.verify_and_authorize(credentials).await;
        if outcome.is_ok() && self.logout_epoch.get() != epoch {
            if let Err(e) = self.provider.sign_out().await {
                log::warn!("Sign-out of superseded sign-in failed: {}", e);
            }
            outcome = Err(AuthError::OperationInProgress);
        }

        self.finish();
        self.login_pending.set(false);

        match &outcome {
            Ok(()) => self.settle(true),
            Err(e) => {
                log::warn!("Sign-in rejected: {}", e);
                self.settle(false);
            }
        }
        outcome
    }

    async fn verify_and_authorize(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let identity = self.provider.sign_in_with_credentials(credentials).await?;
        if self.policy.is_authorized(&identity) {
            return Ok(());
        }

        if let Err(e) = self.provider.sign_out().await {
            log::warn!("Sign-out of unauthorized identity failed: {}", e);
        }
        Err(AuthError::UnauthorizedIdentity)
    }

    /// Sign out and drop to unauthenticated without waiting for the
    /// provider's confirmation. A provider error is returned for logging;
    /// the local transition happens regardless. Never rejected.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.logout_epoch.set(self.logout_epoch.get() + 1);
        self.begin();
        self.settle(false);

        let result = self.provider.sign_out().await;
        self.finish();
        self.settle(false);

        if let Err(e) = &result {
            log::warn!("Provider sign-out failed: {}", e);
        }
        result
    }

    fn begin(&self) {
        self.pending.set(self.pending.get() + 1);
    }

    fn finish(&self) {
        self.pending.set(self.pending.get().saturating_sub(1));
    }

    /// Publish a settled state, unless the controller has been torn down.
    fn settle(&self, is_authenticated: bool) {
        if self.torn_down.get() {
            log::debug!("Session result dropped after teardown");
            return;
        }
        self.shared.settle(is_authenticated);
    }

    pub fn state(&self) -> SessionState {
        self.shared.state.get()
    }

    /// A login or logout is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending.get() > 0
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.borrow().is_some()
    }
}
