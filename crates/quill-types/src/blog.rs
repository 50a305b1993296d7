//! Blog and comment wire types, plus the request/response envelopes the
//! blog endpoints speak.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{BlogId, CommentId, UserId};
use crate::pagination::Pagination;
use crate::user::Author;

/// A comment on a blog post. Append-only; the API never edits or removes
/// them through this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: CommentId,
    pub content: String,
    /// Populated author. The API's field name for this is `user`.
    pub user: Author,
    pub created_at: DateTime<Utc>,
}

/// A blog post with populated author.
///
/// List endpoints omit `comments`; only the detail endpoint populates it.
/// `is_liked` is derived server-side relative to the requesting session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: BlogId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub author: Author,
    pub published: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: Vec<UserId>,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of a blog list: `{ blogs, pagination }`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogListPage {
    pub blogs: Vec<Blog>,
    pub pagination: Pagination,
}

/// Envelope for create/update responses: `{ blog }`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogEnvelope {
    pub blog: Blog,
}

/// Envelope for the add-comment response: `{ comment }`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentEnvelope {
    pub comment: Comment,
}

/// Outcome of a like toggle: the full like collection and whether the
/// requesting session now likes the post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeOutcome {
    pub likes: Vec<UserId>,
    pub is_liked: bool,
}

/// Body for `POST /blogs`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub published: bool,
}

/// Partial update body for `PUT /blogs/:id`. Unset fields are left alone
/// by the server, so `None` must not serialize.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// Body for `POST /blogs/:id/comments`.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
}
