//! User endpoints consumed outside the store.
//!
//! Public profile pages and the account dashboard read these directly from
//! the client; nothing here touches shared state.

use quill_types::{Profile, UserId, UserStats};

use crate::api::{ApiClient, ApiResult};

/// Fetches a public profile with its blog count.
///
/// # Errors
/// Returns the normalized API error.
pub async fn get_profile(client: &ApiClient, id: &UserId) -> ApiResult<Profile> {
    client
        .get(&format!("/users/profile/{id}"))
        .await
        .map_err(|err| err.with_fallback("Failed to fetch profile"))
}

/// Fetches aggregate stats for the authenticated account.
///
/// # Errors
/// Returns the normalized API error.
pub async fn get_stats(client: &ApiClient) -> ApiResult<UserStats> {
    client
        .get("/users/stats")
        .await
        .map_err(|err| err.with_fallback("Failed to fetch stats"))
}
