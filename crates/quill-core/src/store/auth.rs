//! Auth slice: session identity and the login/logout operations.
//!
//! Same shape as the blog slice, one notch simpler: a single mutation pair
//! and one tracked request kind. Logout has no network leg and therefore no
//! failure mode; a session cache that fails to clear is logged, not
//! surfaced.

use quill_types::{Credentials, LoginResponse, User};

use super::Store;
use super::status::{RequestKind, Requests};
use crate::api::ApiResult;
use crate::session::Session;

const FAIL_LOGIN: &str = "Login failed";

/// Auth slice state.
#[derive(Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub requests: Requests,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slice from a restored session.
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            requests: Requests::default(),
        }
    }

    /// Applies a state mutation.
    pub fn apply(&mut self, mutation: AuthMutation) {
        match mutation {
            AuthMutation::LoggedIn(user) => {
                self.user = Some(*user);
                self.is_authenticated = true;
            }
            AuthMutation::LoggedOut => {
                self.user = None;
                self.is_authenticated = false;
            }
        }
    }

    /// Returns the recorded login error, if any.
    pub fn error(&self) -> Option<&str> {
        self.requests.error(RequestKind::Login)
    }
}

/// State transitions of the auth slice.
#[derive(Debug)]
pub enum AuthMutation {
    LoggedIn(Box<User>),
    LoggedOut,
}

impl Store {
    /// Exchanges credentials for a session. On success the bearer token
    /// goes onto the client, the session is persisted, and the account is
    /// returned; on failure the error is recorded under
    /// [`RequestKind::Login`].
    ///
    /// # Errors
    /// Returns the normalized API error (also recorded in the slice).
    pub async fn login(&mut self, credentials: &Credentials) -> ApiResult<User> {
        self.auth.requests.state_mut(RequestKind::Login).start();
        match self
            .client
            .post::<LoginResponse, _>("/auth/login", credentials)
            .await
        {
            Ok(response) => {
                self.client.set_token(response.token.clone());
                let session = Session {
                    token: response.token,
                    user: response.user.clone(),
                };
                if let Err(err) = session.save() {
                    tracing::warn!(error = %err, "failed to persist session cache");
                }
                self.auth
                    .apply(AuthMutation::LoggedIn(Box::new(response.user.clone())));
                self.auth.requests.state_mut(RequestKind::Login).succeed();
                Ok(response.user)
            }
            Err(err) => {
                let err = err.with_fallback(FAIL_LOGIN);
                self.auth
                    .requests
                    .state_mut(RequestKind::Login)
                    .fail(err.message.clone());
                Err(err)
            }
        }
    }

    /// Ends the session: drops the bearer token, removes the session cache,
    /// and resets the auth slice.
    pub fn logout(&mut self) {
        self.client.clear_token();
        if let Err(err) = Session::clear() {
            tracing::warn!(error = %err, "failed to remove session cache");
        }
        self.auth.apply(AuthMutation::LoggedOut);
    }

    /// Clears the recorded login error.
    pub fn clear_auth_error(&mut self) {
        self.auth
            .requests
            .state_mut(RequestKind::Login)
            .clear_error();
    }
}
