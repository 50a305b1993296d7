//! Query-string parameter sets for the list endpoints.
//!
//! Only set fields serialize, so `GET /blogs?page=1&limit=12` stays free of
//! empty parameters the server would otherwise have to ignore.

use serde::Serialize;

use crate::ids::UserId;

/// Filters for `GET /blogs`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Restrict to a single author (used by public profile views).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserId>,
}

/// Filters for `GET /users/my-blogs`.
///
/// `published` is tri-state: `None` means all, `Some(true)` published only,
/// `Some(false)` drafts only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MyBlogsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_do_not_serialize() {
        let q = ListQuery {
            page: Some(1),
            limit: Some(12),
            ..ListQuery::default()
        };
        let value = serde_json::to_value(&q).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["page"], 1);
        assert_eq!(obj["limit"], 12);
    }

    #[test]
    fn test_drafts_filter_serializes_false() {
        let q = MyBlogsQuery {
            published: Some(false),
            ..MyBlogsQuery::default()
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value.as_object().unwrap()["published"], false);
    }
}
