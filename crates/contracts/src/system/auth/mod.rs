pub mod policy;
pub mod provider;
pub mod session_store;
pub mod wire;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use policy::{AdminPolicy, AuthorizationPolicy};
pub use provider::{IdentityProvider, SessionCallback};

/// The one message shown for any failed sign-in.
pub const GENERIC_LOGIN_ERROR: &str = "Sign-in failed. Check your email and password.";

/// Identity reported by the identity provider. Read-only for this app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

impl Identity {
    /// Identifier compared by the authorization policy.
    pub fn unique_identifier(&self) -> &str {
        &self.email
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where the provider keeps a signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persistence {
    /// Discarded when the tab/process ends.
    Session,
    /// Survives restarts.
    Local,
    /// Kept in memory only.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("identity is not authorized for this application")]
    UnauthorizedIdentity,
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("another sign-in or sign-out is in progress")]
    OperationInProgress,
}

impl AuthError {
    /// Text for the login form. Failure modes are not distinguished.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials
            | AuthError::UnauthorizedIdentity
            | AuthError::ProviderUnavailable(_)
            | AuthError::OperationInProgress => GENERIC_LOGIN_ERROR,
        }
    }
}
