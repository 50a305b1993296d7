//! Wire and domain types for the quill blog client.
//!
//! Everything here mirrors the JSON the API speaks: camelCase fields,
//! Mongo-style `_id` identifiers, populated author references. No I/O.

pub mod blog;
pub mod ids;
pub mod pagination;
pub mod query;
pub mod user;

pub use blog::{
    Blog, BlogEnvelope, BlogListPage, BlogPatch, Comment, CommentEnvelope, LikeOutcome, NewBlog,
    NewComment,
};
pub use ids::{BlogId, CommentId, UserId};
pub use pagination::Pagination;
pub use query::{ListQuery, MyBlogsQuery};
pub use user::{Author, Credentials, LoginResponse, Profile, User, UserStats};
