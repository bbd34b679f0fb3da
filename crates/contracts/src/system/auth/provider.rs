use async_trait::async_trait;

use super::{AuthError, Credentials, Identity, Persistence};
use crate::shared::observers::Subscription;

/// Session-change observer. `None` means nobody is signed in.
pub type SessionCallback = Box<dyn Fn(Option<&Identity>)>;

/// Operations consumed from the hosted identity service.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Verify credentials and start a session.
    async fn sign_in_with_credentials(&self, credentials: &Credentials)
        -> Result<Identity, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Register an observer of session changes. The provider delivers the
    /// current session to it at least once, asynchronously.
    fn subscribe(&self, callback: SessionCallback) -> Subscription;

    fn set_persistence(&self, persistence: Persistence) -> Result<(), AuthError>;
}
