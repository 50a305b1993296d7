//! Blog slice: feed, detail, and owner-scoped lists plus the operations
//! that drive them.
//!
//! State transitions are expressed as [`BlogMutation`] values applied by
//! [`BlogState::apply`], which keeps the reducer pure and testable without a
//! server. The async operations on [`Store`] wrap each API call in the keyed
//! pending/settled status transitions and feed successful payloads through
//! `apply`.

use quill_types::{
    Blog, BlogEnvelope, BlogId, BlogListPage, BlogPatch, Comment, CommentEnvelope, LikeOutcome,
    ListQuery, MyBlogsQuery, NewBlog, NewComment, Pagination,
};

use super::Store;
use super::status::{RequestKind, Requests};
use crate::api::ApiResult;

const FAIL_FETCH_BLOGS: &str = "Failed to fetch blogs";
const FAIL_FETCH_BLOG: &str = "Failed to fetch blog";
const FAIL_CREATE: &str = "Failed to create blog";
const FAIL_UPDATE: &str = "Failed to update blog";
const FAIL_DELETE: &str = "Failed to delete blog";
const FAIL_FETCH_MINE: &str = "Failed to fetch your blogs";
const FAIL_LIKE: &str = "Failed to like blog";
const FAIL_COMMENT: &str = "Failed to add comment";

// ============================================================================
// State
// ============================================================================

/// Blog slice state.
///
/// `blogs` holds the last feed/home page, `my_blogs` the last owner-scoped
/// page; `pagination` describes whichever list fetch succeeded most
/// recently. `current_blog` is the detail record, comments included.
#[derive(Debug, Default)]
pub struct BlogState {
    pub blogs: Vec<Blog>,
    pub current_blog: Option<Blog>,
    pub my_blogs: Vec<Blog>,
    pub pagination: Pagination,
    pub requests: Requests,
}

impl BlogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any blog operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.requests.is_any_in_flight()
    }

    /// Applies a state mutation.
    pub fn apply(&mut self, mutation: BlogMutation) {
        match mutation {
            BlogMutation::FeedLoaded(page) => {
                self.blogs = page.blogs;
                self.pagination = page.pagination;
            }
            BlogMutation::DetailLoaded(blog) => {
                self.current_blog = Some(*blog);
            }
            BlogMutation::Created(blog) => {
                self.blogs.insert(0, *blog);
            }
            BlogMutation::Updated(blog) => {
                if let Some(entry) = self.blogs.iter_mut().find(|b| b.id == blog.id) {
                    *entry = (*blog).clone();
                }
                if let Some(current) = &mut self.current_blog
                    && current.id == blog.id
                {
                    *current = *blog;
                }
            }
            BlogMutation::Deleted(id) => {
                self.blogs.retain(|b| b.id != id);
                self.my_blogs.retain(|b| b.id != id);
                if self.current_blog.as_ref().is_some_and(|b| b.id == id) {
                    self.current_blog = None;
                }
            }
            BlogMutation::MineLoaded(page) => {
                self.my_blogs = page.blogs;
                self.pagination = page.pagination;
            }
            // The owner-scoped list keeps its like counts until the next
            // list_my_blogs fetch.
            BlogMutation::Liked { id, outcome } => {
                if let Some(entry) = self.blogs.iter_mut().find(|b| b.id == id) {
                    entry.likes = outcome.likes.clone();
                    entry.is_liked = outcome.is_liked;
                }
                if let Some(current) = &mut self.current_blog
                    && current.id == id
                {
                    current.likes = outcome.likes;
                    current.is_liked = outcome.is_liked;
                }
            }
            BlogMutation::CommentAdded { id, comment } => {
                if let Some(current) = &mut self.current_blog
                    && current.id == id
                {
                    current.comments.push(comment);
                }
            }
            BlogMutation::ClearBlogs => {
                self.blogs.clear();
                self.pagination = Pagination::default();
            }
            BlogMutation::ClearCurrentBlog => {
                self.current_blog = None;
            }
        }
    }
}

/// State transitions of the blog slice.
#[derive(Debug)]
pub enum BlogMutation {
    /// A feed page arrived: replaces `blogs` and `pagination`.
    FeedLoaded(BlogListPage),
    /// A detail record arrived: replaces `current_blog`.
    DetailLoaded(Box<Blog>),
    /// A blog was created: prepends to `blogs`.
    Created(Box<Blog>),
    /// A blog was updated: replaces the match in `blogs` and, when the id
    /// matches, `current_blog`.
    Updated(Box<Blog>),
    /// A blog was deleted: removed from both lists; `current_blog` cleared
    /// when it matched.
    Deleted(BlogId),
    /// An owner-scoped page arrived: replaces `my_blogs` and `pagination`.
    MineLoaded(BlogListPage),
    /// A like toggled: the server's like collection and flag apply to the
    /// matches in `blogs` and `current_blog`.
    Liked { id: BlogId, outcome: LikeOutcome },
    /// A comment was accepted: appended to `current_blog` when the id
    /// matches.
    CommentAdded { id: BlogId, comment: Comment },
    ClearBlogs,
    ClearCurrentBlog,
}

// ============================================================================
// Operations
// ============================================================================

impl Store {
    /// Fetches a feed page. On success `blogs` and `pagination` are
    /// replaced; on failure the previous page stays and the error is
    /// recorded under [`RequestKind::ListBlogs`].
    ///
    /// # Errors
    /// Returns the normalized API error (also recorded in the slice).
    pub async fn list_blogs(&mut self, query: &ListQuery) -> ApiResult<()> {
        self.blog.requests.state_mut(RequestKind::ListBlogs).start();
        match self
            .client
            .get_with_query::<BlogListPage, _>("/blogs", query)
            .await
        {
            Ok(page) => {
                self.blog.apply(BlogMutation::FeedLoaded(page));
                self.blog.requests.state_mut(RequestKind::ListBlogs).succeed();
                Ok(())
            }
            Err(err) => {
                let err = err.with_fallback(FAIL_FETCH_BLOGS);
                self.blog
                    .requests
                    .state_mut(RequestKind::ListBlogs)
                    .fail(err.message.clone());
                Err(err)
            }
        }
    }

    /// Fetches one blog with populated author and comments into
    /// `current_blog`.
    ///
    /// # Errors
    /// Returns the normalized API error (also recorded in the slice).
    pub async fn get_blog(&mut self, id: &BlogId) -> ApiResult<()> {
        self.blog.requests.state_mut(RequestKind::GetBlog).start();
        match self.client.get::<Blog>(&format!("/blogs/{id}")).await {
            Ok(blog) => {
                self.blog.apply(BlogMutation::DetailLoaded(Box::new(blog)));
                self.blog.requests.state_mut(RequestKind::GetBlog).succeed();
                Ok(())
            }
            Err(err) => {
                let err = err.with_fallback(FAIL_FETCH_BLOG);
                self.blog
                    .requests
                    .state_mut(RequestKind::GetBlog)
                    .fail(err.message.clone());
                Err(err)
            }
        }
    }

    /// Creates a blog (draft or published). The server's record is
    /// prepended to `blogs` and returned.
    ///
    /// # Errors
    /// Returns the normalized API error; the slice is left untouched.
    pub async fn create_blog(&mut self, draft: &NewBlog) -> ApiResult<Blog> {
        self.blog.requests.state_mut(RequestKind::CreateBlog).start();
        match self.client.post::<BlogEnvelope, _>("/blogs", draft).await {
            Ok(envelope) => {
                self.blog
                    .apply(BlogMutation::Created(Box::new(envelope.blog.clone())));
                self.blog
                    .requests
                    .state_mut(RequestKind::CreateBlog)
                    .succeed();
                Ok(envelope.blog)
            }
            Err(err) => {
                self.blog
                    .requests
                    .state_mut(RequestKind::CreateBlog)
                    .settle();
                Err(err.with_fallback(FAIL_CREATE))
            }
        }
    }

    /// Applies a partial update. The server's record replaces the match in
    /// `blogs` (and `current_blog` when it matches) and is returned.
    ///
    /// # Errors
    /// Returns the normalized API error; the slice is left untouched.
    pub async fn update_blog(&mut self, id: &BlogId, patch: &BlogPatch) -> ApiResult<Blog> {
        self.blog.requests.state_mut(RequestKind::UpdateBlog).start();
        match self
            .client
            .put::<BlogEnvelope, _>(&format!("/blogs/{id}"), patch)
            .await
        {
            Ok(envelope) => {
                self.blog
                    .apply(BlogMutation::Updated(Box::new(envelope.blog.clone())));
                self.blog
                    .requests
                    .state_mut(RequestKind::UpdateBlog)
                    .succeed();
                Ok(envelope.blog)
            }
            Err(err) => {
                self.blog
                    .requests
                    .state_mut(RequestKind::UpdateBlog)
                    .settle();
                Err(err.with_fallback(FAIL_UPDATE))
            }
        }
    }

    /// Deletes a blog and drops it from both lists; `current_blog` is
    /// cleared when it was the deleted record.
    ///
    /// # Errors
    /// Returns the normalized API error; the slice is left untouched (both
    /// lists retain the entry, no error is recorded).
    pub async fn delete_blog(&mut self, id: &BlogId) -> ApiResult<()> {
        self.blog.requests.state_mut(RequestKind::DeleteBlog).start();
        match self.client.delete(&format!("/blogs/{id}")).await {
            Ok(()) => {
                self.blog.apply(BlogMutation::Deleted(id.clone()));
                self.blog
                    .requests
                    .state_mut(RequestKind::DeleteBlog)
                    .succeed();
                Ok(())
            }
            Err(err) => {
                self.blog
                    .requests
                    .state_mut(RequestKind::DeleteBlog)
                    .settle();
                Err(err.with_fallback(FAIL_DELETE))
            }
        }
    }

    /// Fetches a page of the session owner's blogs (published, drafts, or
    /// all).
    ///
    /// # Errors
    /// Returns the normalized API error (also recorded in the slice).
    pub async fn list_my_blogs(&mut self, query: &MyBlogsQuery) -> ApiResult<()> {
        self.blog
            .requests
            .state_mut(RequestKind::ListMyBlogs)
            .start();
        match self
            .client
            .get_with_query::<BlogListPage, _>("/users/my-blogs", query)
            .await
        {
            Ok(page) => {
                self.blog.apply(BlogMutation::MineLoaded(page));
                self.blog
                    .requests
                    .state_mut(RequestKind::ListMyBlogs)
                    .succeed();
                Ok(())
            }
            Err(err) => {
                let err = err.with_fallback(FAIL_FETCH_MINE);
                self.blog
                    .requests
                    .state_mut(RequestKind::ListMyBlogs)
                    .fail(err.message.clone());
                Err(err)
            }
        }
    }

    /// Toggles the session user's like. The server's like collection and
    /// flag are applied to the matching entries and returned.
    ///
    /// # Errors
    /// Returns the normalized API error; the slice is left untouched.
    pub async fn like_blog(&mut self, id: &BlogId) -> ApiResult<LikeOutcome> {
        self.blog.requests.state_mut(RequestKind::LikeBlog).start();
        match self
            .client
            .post_empty::<LikeOutcome>(&format!("/blogs/{id}/like"))
            .await
        {
            Ok(outcome) => {
                self.blog.apply(BlogMutation::Liked {
                    id: id.clone(),
                    outcome: outcome.clone(),
                });
                self.blog.requests.state_mut(RequestKind::LikeBlog).succeed();
                Ok(outcome)
            }
            Err(err) => {
                self.blog.requests.state_mut(RequestKind::LikeBlog).settle();
                Err(err.with_fallback(FAIL_LIKE))
            }
        }
    }

    /// Posts a comment. The server's record is appended to
    /// `current_blog.comments` when the detail record is the commented
    /// blog, and returned either way.
    ///
    /// # Errors
    /// Returns the normalized API error; the slice is left untouched.
    pub async fn add_comment(&mut self, id: &BlogId, content: &str) -> ApiResult<Comment> {
        self.blog.requests.state_mut(RequestKind::AddComment).start();
        let body = NewComment {
            content: content.to_string(),
        };
        match self
            .client
            .post::<CommentEnvelope, _>(&format!("/blogs/{id}/comments"), &body)
            .await
        {
            Ok(envelope) => {
                self.blog.apply(BlogMutation::CommentAdded {
                    id: id.clone(),
                    comment: envelope.comment.clone(),
                });
                self.blog
                    .requests
                    .state_mut(RequestKind::AddComment)
                    .succeed();
                Ok(envelope.comment)
            }
            Err(err) => {
                self.blog
                    .requests
                    .state_mut(RequestKind::AddComment)
                    .settle();
                Err(err.with_fallback(FAIL_COMMENT))
            }
        }
    }

    /// Resets the feed list and pagination to their initial values.
    pub fn clear_blogs(&mut self) {
        self.blog.apply(BlogMutation::ClearBlogs);
    }

    /// Drops the detail record.
    pub fn clear_current_blog(&mut self) {
        self.blog.apply(BlogMutation::ClearCurrentBlog);
    }

    /// Clears the recorded error for one operation kind.
    pub fn clear_blog_error(&mut self, kind: RequestKind) {
        self.blog.requests.state_mut(kind).clear_error();
    }
}
