//! Application store.
//!
//! One [`Store`] owns the API client and both state slices (blog, auth).
//! The application root holds it and passes `&mut Store` to consumers; all
//! state mutation flows through the named operations defined in the slice
//! modules, never through direct field writes from outside.

pub mod auth;
pub mod blog;
pub mod status;

use anyhow::Result;
use quill_types::Blog;

use crate::api::ApiClient;
use crate::config::Config;
use crate::session::Session;
use auth::AuthState;
use blog::BlogState;

/// Application state container.
pub struct Store {
    client: ApiClient,
    pub blog: BlogState,
    pub auth: AuthState,
}

impl Store {
    /// Creates a store with no session.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            blog: BlogState::new(),
            auth: AuthState::new(),
        }
    }

    /// Creates a store, resuming a previously persisted session if one is
    /// supplied: the bearer token goes onto the client and the cached user
    /// seeds the auth slice.
    pub fn with_session(mut client: ApiClient, session: Option<Session>) -> Self {
        let auth = match session {
            Some(session) => {
                client.set_token(session.token);
                AuthState::authenticated(session.user)
            }
            None => AuthState::new(),
        };

        Self {
            client,
            blog: BlogState::new(),
            auth,
        }
    }

    /// Builds a store from configuration, restoring the persisted session
    /// when one exists. An unreadable session file is treated as logged-out
    /// rather than a startup failure.
    ///
    /// # Errors
    /// Returns an error if the client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ApiClient::new(config)?;
        let session = Session::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unreadable session cache");
            None
        });
        Ok(Self::with_session(client, session))
    }

    /// Read access to the underlying client, for consumers that talk to the
    /// API outside the store (public profiles, account stats).
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns true if the current session owns the given blog.
    ///
    /// Typed id equality only. This gates UX affordances (showing edit
    /// buttons, redirecting away from the edit form); the server enforces
    /// authorship on its own for the actual mutations.
    pub fn owns(&self, blog: &Blog) -> bool {
        self.auth
            .user
            .as_ref()
            .is_some_and(|user| user.id == blog.author.id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use quill_types::{Author, BlogId, User, UserId};

    use super::*;

    fn client() -> ApiClient {
        let config = Config {
            base_url: "http://127.0.0.1:9/api".to_string(),
            ..Config::default()
        };
        ApiClient::new(&config).unwrap()
    }

    fn user(id: &str) -> User {
        User {
            id: UserId::from(id),
            username: "mara".to_string(),
            email: "mara@example.com".to_string(),
            avatar: None,
            bio: None,
        }
    }

    fn blog_by(author_id: &str) -> Blog {
        let at = Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap();
        Blog {
            id: BlogId::from("b1"),
            title: "post".to_string(),
            content: "body".to_string(),
            excerpt: None,
            tags: Vec::new(),
            featured_image: None,
            author: Author {
                id: UserId::from(author_id),
                username: "mara".to_string(),
                avatar: None,
                bio: None,
            },
            published: true,
            views: 0,
            likes: Vec::new(),
            is_liked: false,
            comments: Vec::new(),
            created_at: at,
            updated_at: at,
        }
    }

    /// Ownership is typed id equality against the session user.
    #[test]
    fn test_owns_compares_typed_ids() {
        let session = Session {
            token: "tok".to_string(),
            user: user("u1"),
        };
        let store = Store::with_session(client(), Some(session));

        assert!(store.owns(&blog_by("u1")));
        assert!(!store.owns(&blog_by("u2")));
    }

    #[test]
    fn test_logged_out_store_owns_nothing() {
        let store = Store::new(client());
        assert!(!store.owns(&blog_by("u1")));
    }

    #[test]
    fn test_with_session_restores_identity_and_token() {
        let session = Session {
            token: "tok".to_string(),
            user: user("u1"),
        };
        let store = Store::with_session(client(), Some(session));

        assert!(store.auth.is_authenticated);
        assert!(store.client().has_token());
    }

    #[test]
    fn test_without_session_starts_logged_out() {
        let store = Store::with_session(client(), None);
        assert!(!store.auth.is_authenticated);
        assert!(!store.client().has_token());
    }
}
