//! Hosted Auth Provider Client
//!
//! Password sign-in against the hosted auth service. The provider answers
//! every token request with `{ error, session }` where exactly one side is
//! populated; errors carry a free-text `message` that is classified into
//! [`AuthError`] at this boundary.
//!
//! The session blob is persisted in LocalStorage so a signed-in user
//! survives a reload. Components never see tokens, only the nullable
//! current user.

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use super::AuthError;

const SESSION_STORAGE_KEY: &str = "prospecta.session";

/// The signed-in user, as the auth provider reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Provider session. Opaque to the rest of the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// Contract with the auth provider.
///
/// The UI works against this trait so the provider can be swapped out
/// (or mocked) without touching the screens.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Exchanges credentials for a session. Exactly one request per call;
    /// failures are never retried here.
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;

    /// The current user, or `None` when no session is held.
    fn current_user(&self) -> Option<AuthUser>;

    /// Drops the held session.
    fn sign_out(&self);
}

/// Client for the hosted auth service.
#[derive(Debug, Clone)]
pub struct HostedAuthClient {
    /// Auth API base URL
    base_url: String,
}

impl HostedAuthClient {
    /// Create a new auth client
    pub fn new(url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Get the password-grant token endpoint URL
    fn token_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base_url)
    }
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    error: Option<ProviderError>,
    #[serde(default)]
    session: Option<AuthSession>,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

#[async_trait(?Send)]
impl AuthProvider for HostedAuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = Request::post(&self.token_url())
            .header("Content-Type", "application/json")
            .json(&PasswordGrant { email, password })
            .map_err(|e| AuthError::ConnectionFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::ConnectionFailed(e.to_string()))?;

        // The provider reports sign-in failures in the body, with a
        // non-2xx status. Read the body first; only fall back to the bare
        // status when there is no parseable body at all.
        let status = response.status();
        let body: TokenResponse = match response.json().await {
            Ok(body) => body,
            Err(_) if status >= 400 => {
                return Err(AuthError::ConnectionFailed(format!("HTTP {}", status)));
            }
            Err(e) => return Err(AuthError::InvalidResponse(e.to_string())),
        };

        if let Some(error) = body.error {
            return Err(AuthError::from_provider_message(&error.message));
        }

        let session = body.session.ok_or_else(|| {
            AuthError::InvalidResponse("neither a session nor an error in the response".to_string())
        })?;

        if LocalStorage::set(SESSION_STORAGE_KEY, &session).is_err() {
            tracing::warn!("failed to persist the session; sign-in will not survive a reload");
        }

        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        LocalStorage::get::<AuthSession>(SESSION_STORAGE_KEY)
            .ok()
            .map(|session| session.user)
    }

    fn sign_out(&self) {
        LocalStorage::delete(SESSION_STORAGE_KEY);
    }
}
