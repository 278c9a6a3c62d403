//! Global State Management
//!
//! This module manages the global application state: the nullable current
//! user and the collaborator clients the screens call through.

use leptos::*;

use crate::client::{AuthError, AuthProvider, AuthUser, HostedAuthClient, RecordsClient};

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Currently signed-in user, if any. Mirrors the auth provider's
    /// session; components treat it as read-only.
    pub user: RwSignal<Option<AuthUser>>,

    /// Auth provider client
    auth: HostedAuthClient,

    /// Record store client
    records: RecordsClient,
}

impl AppState {
    /// Create the app state against the window origin, restoring any
    /// session the auth provider still holds.
    pub fn new() -> Self {
        let base_url = base_url();
        let auth = HostedAuthClient::new(&base_url);
        let records = RecordsClient::new(&base_url);
        let user = create_rw_signal(auth.current_user());

        Self { user, auth, records }
    }

    /// Signs in through the auth provider and reflects the new session in
    /// the user signal.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.auth.sign_in(email, password).await?;
        self.user.set(self.auth.current_user());
        Ok(())
    }

    /// Drops the provider session and clears the user signal.
    pub fn sign_out(&self) {
        self.auth.sign_out();
        self.user.set(None);
    }

    /// Get the record store client
    pub fn records(&self) -> RecordsClient {
        self.records.clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}
