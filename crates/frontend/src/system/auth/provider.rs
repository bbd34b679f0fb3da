//! `IdentityProvider` backed by the hosted Identity Toolkit REST API.
//!
//! The service only verifies credentials; the session record and change
//! notifications live in `SessionStore`, token expiry is timed here.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::Utc;
use contracts::shared::config::AppConfig;
use contracts::shared::observers::Subscription;
use contracts::system::auth::session_store::SessionStore;
use contracts::system::auth::wire::StoredSession;
use contracts::system::auth::{
    AuthError, Credentials, Identity, IdentityProvider, Persistence, SessionCallback,
};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use super::api;
use crate::shared::storage::BrowserStorage;

struct Inner {
    base_url: String,
    api_key: String,
    store: SessionStore<BrowserStorage, BrowserStorage>,
    expiry_armed_for: Cell<Option<u64>>,
}

impl Inner {
    /// End the session when its token expires, unless it changed meanwhile.
    fn arm_expiry(inner: &Rc<Inner>, session: &StoredSession, generation: u64) {
        if inner.expiry_armed_for.get() == Some(generation) {
            return;
        }
        inner.expiry_armed_for.set(Some(generation));

        let delay_ms = session
            .remaining(Utc::now())
            .num_milliseconds()
            .clamp(0, i64::from(u32::MAX)) as u32;
        let inner = Rc::clone(inner);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            inner.store.expire(generation);
        });
    }
}

pub struct IdentityToolkitProvider {
    inner: Rc<Inner>,
}

impl IdentityToolkitProvider {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                base_url: config.identity_base_url().to_string(),
                api_key: config.identity.api_key.clone(),
                store: SessionStore::new(BrowserStorage::local(), BrowserStorage::session()),
                expiry_armed_for: Cell::new(None),
            }),
        }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for IdentityToolkitProvider {
    async fn sign_in_with_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Identity, AuthError> {
        let response =
            api::sign_in_with_password(&self.inner.base_url, &self.inner.api_key, credentials)
                .await?;
        let session = response.into_session(Utc::now());

        let generation = self.inner.store.establish(&session);
        Inner::arm_expiry(&self.inner, &session, generation);
        Ok(session.identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.inner.store.end();
        Ok(())
    }

    fn subscribe(&self, callback: SessionCallback) -> Subscription {
        let (id, subscription) = self
            .inner
            .store
            .subscribe(move |identity: &Option<Identity>| callback(identity.as_ref()));

        let inner = Rc::clone(&self.inner);
        spawn_local(async move {
            if let Some(session) = inner.store.deliver_current(id, Utc::now()) {
                let generation = inner.store.generation();
                Inner::arm_expiry(&inner, &session, generation);
            }
        });

        subscription
    }

    fn set_persistence(&self, persistence: Persistence) -> Result<(), AuthError> {
        self.inner.store.set_persistence(persistence);
        Ok(())
    }
}
