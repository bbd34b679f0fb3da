//! Request/response bodies of the hosted Identity Toolkit REST API and the
//! session record kept by the browser adapter.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{AuthError, Credentials, Identity};

/// Token lifetime assumed when the service omits or garbles `expiresIn`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

impl<'a> SignInRequest<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
            return_secure_token: true,
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub local_id: String,
    pub email: String,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<String>,
}

impl SignInResponse {
    pub fn identity(&self) -> Identity {
        Identity {
            uid: self.local_id.clone(),
            email: self.email.clone(),
        }
    }

    pub fn into_session(self, now: DateTime<Utc>) -> StoredSession {
        let lifetime = self
            .expires_in
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS);

        StoredSession {
            identity: self.identity(),
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_at: now + Duration::seconds(lifetime),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    pub message: String,
}

/// Codes the service uses for a bad email/password pair or a blocked account.
const CREDENTIAL_FAILURES: &[&str] = &[
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
    "INVALID_EMAIL",
    "MISSING_PASSWORD",
    "USER_DISABLED",
];

/// Map a non-2xx sign-in response to an [`AuthError`].
pub fn classify_failure(status: u16, body: &str) -> AuthError {
    let code = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|response| {
            response
                .error
                .message
                .split([' ', ':'])
                .next()
                .unwrap_or_default()
                .to_string()
        });

    match code {
        Some(code) if status == 400 && CREDENTIAL_FAILURES.contains(&code.as_str()) => {
            AuthError::InvalidCredentials
        }
        Some(code) => AuthError::ProviderUnavailable(format!("{} ({})", code, status)),
        None => AuthError::ProviderUnavailable(format!("HTTP {}", status)),
    }
}

/// Signed-in session as persisted by the browser adapter.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub identity: Identity,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}

impl fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSession")
            .field("identity", &self.identity)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_request_uses_camel_case() {
        let credentials = Credentials::new("admin@rental.example", "pw");
        let json = serde_json::to_value(SignInRequest::new(&credentials)).unwrap();

        assert_eq!(json["email"], "admin@rental.example");
        assert_eq!(json["returnSecureToken"], true);
    }

    #[test]
    fn test_response_becomes_session() {
        let body = r#"{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "abc",
            "email": "admin@rental.example",
            "displayName": "",
            "idToken": "token",
            "registered": true,
            "refreshToken": "refresh",
            "expiresIn": "3600"
        }"#;
        let response: SignInResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session(now());

        assert_eq!(session.identity.uid, "abc");
        assert_eq!(session.identity.email, "admin@rental.example");
        assert_eq!(session.expires_at, now() + Duration::hours(1));
        assert!(!session.is_expired(now()));
        assert!(session.is_expired(now() + Duration::hours(1)));
        assert_eq!(session.remaining(now() + Duration::hours(2)), Duration::zero());
    }

    #[test]
    fn test_missing_lifetime_uses_default() {
        let body = r#"{"localId":"abc","email":"a@b.c","idToken":"t","expiresIn":"soon"}"#;
        let response: SignInResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session(now());

        assert_eq!(
            session.expires_at,
            now() + Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS)
        );
    }

    #[test]
    fn test_classify_credential_failures() {
        for message in [
            "INVALID_PASSWORD",
            "EMAIL_NOT_FOUND",
            "INVALID_LOGIN_CREDENTIALS",
            "USER_DISABLED : The user account has been disabled by an administrator.",
        ] {
            let body = format!(r#"{{"error":{{"code":400,"message":"{}"}}}}"#, message);
            assert_eq!(classify_failure(400, &body), AuthError::InvalidCredentials);
        }
    }

    #[test]
    fn test_classify_service_failures() {
        let throttled =
            r#"{"error":{"code":400,"message":"TOO_MANY_ATTEMPTS_TRY_LATER : Try again later."}}"#;
        assert!(matches!(
            classify_failure(400, throttled),
            AuthError::ProviderUnavailable(_)
        ));
        assert!(matches!(
            classify_failure(503, "<html>unavailable</html>"),
            AuthError::ProviderUnavailable(_)
        ));
        let bad_key = r#"{"error":{"code":400,"message":"API_KEY_INVALID"}}"#;
        assert!(matches!(
            classify_failure(400, bad_key),
            AuthError::ProviderUnavailable(_)
        ));
    }

    #[test]
    fn test_session_debug_hides_tokens() {
        let body = r#"{"localId":"abc","email":"a@b.c","idToken":"secret-token","refreshToken":"secret-refresh"}"#;
        let response: SignInResponse = serde_json::from_str(body).unwrap();
        let printed = format!("{:?}", response.into_session(now()));

        assert!(!printed.contains("secret"));
    }
}
