use contracts::system::auth::wire::{classify_failure, SignInRequest, SignInResponse};
use contracts::system::auth::{AuthError, Credentials};
use gloo_net::http::Request;

/// Verify email/password with the hosted identity service.
pub async fn sign_in_with_password(
    base_url: &str,
    api_key: &str,
    credentials: &Credentials,
) -> Result<SignInResponse, AuthError> {
    let url = format!(
        "{}/v1/accounts:signInWithPassword?key={}",
        base_url,
        urlencoding::encode(api_key)
    );
    let request = SignInRequest::new(credentials);

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| AuthError::ProviderUnavailable(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| AuthError::ProviderUnavailable(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(classify_failure(status, &body));
    }

    response
        .json::<SignInResponse>()
        .await
        .map_err(|e| AuthError::ProviderUnavailable(format!("Failed to parse response: {}", e)))
}
