//! Client-side form validation.
//!
//! Runs before a mutation is dispatched so bad input never reaches the
//! store or the wire. This is a convenience layer only; the server applies
//! its own validation and the store surfaces whatever it rejects.

use quill_types::{BlogPatch, Credentials, NewBlog};

pub const TITLE_MAX_CHARS: usize = 200;
pub const CONTENT_MIN_CHARS: usize = 50;
pub const COMMENT_MAX_CHARS: usize = 1000;
pub const PASSWORD_MIN_CHARS: usize = 6;

/// One rejected field with a display-ready message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validates a blog about to be created. Returns every violation, not just
/// the first.
pub fn validate_new_blog(draft: &NewBlog) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_title(&draft.title, &mut errors);
    check_content(&draft.content, &mut errors);
    errors
}

/// Validates a partial update. Only fields the patch actually sets are
/// checked.
pub fn validate_blog_patch(patch: &BlogPatch) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(title) = &patch.title {
        check_title(title, &mut errors);
    }
    if let Some(content) = &patch.content {
        check_content(content, &mut errors);
    }
    errors
}

/// Validates a comment body.
pub fn validate_comment(content: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if content.trim().is_empty() {
        errors.push(FieldError::new("content", "Comment is required"));
    } else if content.chars().count() > COMMENT_MAX_CHARS {
        errors.push(FieldError::new(
            "content",
            format!("Comment must be less than {COMMENT_MAX_CHARS} characters"),
        ));
    }
    errors
}

/// Validates login credentials.
pub fn validate_credentials(credentials: &Credentials) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let email = credentials.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !looks_like_email(email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }

    if credentials.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if credentials.password.chars().count() < PASSWORD_MIN_CHARS {
        errors.push(FieldError::new(
            "password",
            format!("Password must be at least {PASSWORD_MIN_CHARS} characters"),
        ));
    }

    errors
}

/// Parses a free-form comma-separated tag input into a trimmed,
/// de-duplicated list.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for raw in input.split(',') {
        let tag = raw.trim();
        if tag.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn check_title(title: &str, errors: &mut Vec<FieldError>) {
    if title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.push(FieldError::new(
            "title",
            format!("Title must be less than {TITLE_MAX_CHARS} characters"),
        ));
    }
}

fn check_content(content: &str, errors: &mut Vec<FieldError>) {
    if content.trim().is_empty() {
        errors.push(FieldError::new("content", "Content is required"));
    } else if content.chars().count() < CONTENT_MIN_CHARS {
        errors.push(FieldError::new(
            "content",
            format!("Content must be at least {CONTENT_MIN_CHARS} characters"),
        ));
    }
}

// Minimal structural check: something before and after a single-position
// `@`, and a dot in the domain part.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            content: content.to_string(),
            excerpt: None,
            tags: Vec::new(),
            featured_image: None,
            published: false,
        }
    }

    const LONG_ENOUGH: &str =
        "This content is comfortably longer than the fifty character minimum.";

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_new_blog(&draft("Title", LONG_ENOUGH)).is_empty());
    }

    #[test]
    fn test_blank_title_rejected() {
        let errors = validate_new_blog(&draft("   ", LONG_ENOUGH));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_title_length_bound() {
        let long_title = "t".repeat(TITLE_MAX_CHARS + 1);
        let errors = validate_new_blog(&draft(&long_title, LONG_ENOUGH));
        assert_eq!(errors[0].field, "title");

        let at_limit = "t".repeat(TITLE_MAX_CHARS);
        assert!(validate_new_blog(&draft(&at_limit, LONG_ENOUGH)).is_empty());
    }

    #[test]
    fn test_short_content_rejected() {
        let errors = validate_new_blog(&draft("Title", "too short"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "content");
    }

    #[test]
    fn test_patch_checks_only_set_fields() {
        let patch = BlogPatch {
            title: Some(String::new()),
            ..BlogPatch::default()
        };
        let errors = validate_blog_patch(&patch);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");

        assert!(validate_blog_patch(&BlogPatch::default()).is_empty());
    }

    #[test]
    fn test_comment_bounds() {
        assert_eq!(validate_comment("  ")[0].field, "content");
        assert!(validate_comment("fair point").is_empty());
        assert_eq!(
            validate_comment(&"c".repeat(COMMENT_MAX_CHARS + 1))[0].field,
            "content"
        );
    }

    #[test]
    fn test_credentials_bounds() {
        let ok = Credentials {
            email: "mara@example.com".to_string(),
            password: "hunter2x".to_string(),
        };
        assert!(validate_credentials(&ok).is_empty());

        let bad_email = Credentials {
            email: "not-an-email".to_string(),
            password: "hunter2x".to_string(),
        };
        assert_eq!(validate_credentials(&bad_email)[0].field, "email");

        let short_password = Credentials {
            email: "mara@example.com".to_string(),
            password: "abc".to_string(),
        };
        assert_eq!(validate_credentials(&short_password)[0].field, "password");
    }

    #[test]
    fn test_parse_tags_trims_and_dedupes() {
        assert_eq!(
            parse_tags(" rust, async , ,rust,tokio "),
            vec!["rust", "async", "tokio"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }
}
