//! Per-operation request status.
//!
//! Loading and error state is keyed by operation kind instead of a single
//! shared flag, so a slow detail fetch settling late cannot clobber the
//! status of an unrelated list fetch. Completions still apply to the data
//! slices independently; only the status bookkeeping is isolated here.

/// The operations whose in-flight/error status is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    ListBlogs,
    GetBlog,
    CreateBlog,
    UpdateBlog,
    DeleteBlog,
    ListMyBlogs,
    LikeBlog,
    AddComment,
    Login,
}

/// Status of one operation kind (mutated only by the owning store).
#[derive(Debug, Default, Clone)]
pub struct RequestState {
    pub in_flight: bool,
    pub error: Option<String>,
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Pending transition: marks the request in flight and clears any error
    /// left by a previous attempt.
    pub fn start(&mut self) {
        self.in_flight = true;
        self.error = None;
    }

    /// Fulfilled transition.
    pub fn succeed(&mut self) {
        self.in_flight = false;
        self.error = None;
    }

    /// Rejected transition for read operations: the failure is recorded.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.error = Some(message.into());
    }

    /// Rejected transition for mutations: the failure is surfaced to the
    /// caller instead of being recorded here.
    pub fn settle(&mut self) {
        self.in_flight = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// One [`RequestState`] per operation kind.
#[derive(Debug, Default, Clone)]
pub struct Requests {
    pub list_blogs: RequestState,
    pub get_blog: RequestState,
    pub create_blog: RequestState,
    pub update_blog: RequestState,
    pub delete_blog: RequestState,
    pub list_my_blogs: RequestState,
    pub like_blog: RequestState,
    pub add_comment: RequestState,
    pub login: RequestState,
}

impl Requests {
    pub fn state(&self, kind: RequestKind) -> &RequestState {
        match kind {
            RequestKind::ListBlogs => &self.list_blogs,
            RequestKind::GetBlog => &self.get_blog,
            RequestKind::CreateBlog => &self.create_blog,
            RequestKind::UpdateBlog => &self.update_blog,
            RequestKind::DeleteBlog => &self.delete_blog,
            RequestKind::ListMyBlogs => &self.list_my_blogs,
            RequestKind::LikeBlog => &self.like_blog,
            RequestKind::AddComment => &self.add_comment,
            RequestKind::Login => &self.login,
        }
    }

    pub fn state_mut(&mut self, kind: RequestKind) -> &mut RequestState {
        match kind {
            RequestKind::ListBlogs => &mut self.list_blogs,
            RequestKind::GetBlog => &mut self.get_blog,
            RequestKind::CreateBlog => &mut self.create_blog,
            RequestKind::UpdateBlog => &mut self.update_blog,
            RequestKind::DeleteBlog => &mut self.delete_blog,
            RequestKind::ListMyBlogs => &mut self.list_my_blogs,
            RequestKind::LikeBlog => &mut self.like_blog,
            RequestKind::AddComment => &mut self.add_comment,
            RequestKind::Login => &mut self.login,
        }
    }

    /// Convenience for the kind of error the caller is interested in.
    pub fn error(&self, kind: RequestKind) -> Option<&str> {
        self.state(kind).error.as_deref()
    }

    pub fn is_any_in_flight(&self) -> bool {
        self.list_blogs.is_in_flight()
            || self.get_blog.is_in_flight()
            || self.create_blog.is_in_flight()
            || self.update_blog.is_in_flight()
            || self.delete_blog.is_in_flight()
            || self.list_my_blogs.is_in_flight()
            || self.like_blog.is_in_flight()
            || self.add_comment.is_in_flight()
            || self.login.is_in_flight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_clears_previous_error() {
        let mut state = RequestState::default();
        state.fail("boom");
        assert_eq!(state.error.as_deref(), Some("boom"));

        state.start();
        assert!(state.is_in_flight());
        assert!(state.error.is_none());
    }

    /// Status is keyed: settling one kind leaves the others alone.
    #[test]
    fn test_kinds_are_independent() {
        let mut requests = Requests::default();
        requests.state_mut(RequestKind::ListBlogs).start();
        requests.state_mut(RequestKind::GetBlog).start();

        requests.state_mut(RequestKind::GetBlog).fail("not found");

        assert!(requests.state(RequestKind::ListBlogs).is_in_flight());
        assert!(requests.error(RequestKind::ListBlogs).is_none());
        assert_eq!(requests.error(RequestKind::GetBlog), Some("not found"));
        assert!(requests.is_any_in_flight());
    }

    /// Mutations settle without recording an error.
    #[test]
    fn test_settle_leaves_no_error() {
        let mut state = RequestState::default();
        state.start();
        state.settle();
        assert!(!state.is_in_flight());
        assert!(state.error.is_none());
    }
}
