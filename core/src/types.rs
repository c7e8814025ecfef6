//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client surface stays decoupled from Axum internals. Integration
//! tests catch any schema drift between the two crates.
//!
//! The list endpoints answer with either a `{"posts": [...]}` envelope or a
//! bare array depending on the backend build; `PostListBody` absorbs both.
//! The search endpoint answers with a bare array only — see
//! `PostClient::parse_search_posts`.

use serde::{Deserialize, Serialize};

/// A single blog post returned by the API. Server-owned: `id` and `date`
/// are assigned on creation and never by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

/// Request payload for creating a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Request payload for updating an existing post. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl PostPatch {
    /// True when no field is set, i.e. the patch serializes to `{}`.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none() && self.date.is_none()
    }
}

/// Post attribute the server can sort a listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
    Author,
    Date,
}

impl SortField {
    /// Wire name used in the `?sort=` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Content => "content",
            SortField::Author => "author",
            SortField::Date => "date",
        }
    }
}

/// Sort order for a listing. Listings read newest-first, so descending is
/// the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Wire name used in the `?direction=` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Body shape of the list endpoints: `{"posts": [...]}` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PostListBody {
    Enveloped { posts: Vec<Post> },
    Bare(Vec<Post>),
}

impl PostListBody {
    /// Collapse either shape into the post collection.
    pub fn into_posts(self) -> Vec<Post> {
        match self {
            PostListBody::Enveloped { posts } => posts,
            PostListBody::Bare(posts) => posts,
        }
    }
}
