//! External Collaborator Clients
//!
//! This module holds the clients for the two services the UI depends on:
//!
//! - **Auth provider**: hosted authentication, reached over HTTP. Owns the
//!   session; the UI only ever observes "current user present or absent".
//! - **Record store**: persistence for captured leads.
//!
//! Both are thin HTTP wrappers; all session/token handling stays inside
//! [`HostedAuthClient`] and never leaks into components.

mod auth;
mod records;

pub use auth::{AuthProvider, AuthSession, AuthUser, HostedAuthClient};
pub use records::{LeadRecord, RecordsClient, RecordsError};

/// Error types for auth provider operations.
///
/// The provider describes failures with a free-text message; the two
/// messages the UI reacts to specifically are pinned down here as typed
/// kinds, so components match on the kind instead of on strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("account suspended")]
    AccountSuspended,

    #[error("invalid login credentials")]
    InvalidCredentials,

    /// Any other provider-described error, passed through verbatim.
    #[error("{0}")]
    Provider(String),

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Classifies a provider error message.
    ///
    /// Matching is exact and case-sensitive: the provider's contract is the
    /// literal message text, and anything unrecognized is surfaced to the
    /// user unchanged.
    pub fn from_provider_message(message: &str) -> Self {
        match message {
            "account suspended" => AuthError::AccountSuspended,
            "invalid login credentials" => AuthError::InvalidCredentials,
            other => AuthError::Provider(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_messages_map_to_typed_kinds() {
        assert_eq!(
            AuthError::from_provider_message("account suspended"),
            AuthError::AccountSuspended
        );
        assert_eq!(
            AuthError::from_provider_message("invalid login credentials"),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        assert!(matches!(
            AuthError::from_provider_message("Account Suspended"),
            AuthError::Provider(_)
        ));
        assert!(matches!(
            AuthError::from_provider_message("account suspended "),
            AuthError::Provider(_)
        ));
    }

    #[test]
    fn unknown_messages_pass_through_verbatim() {
        let err = AuthError::from_provider_message("quota exceeded");
        assert_eq!(err, AuthError::Provider("quota exceeded".to_string()));
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
