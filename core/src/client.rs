//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.
//!
//! The two listing endpoints (`/posts`, sorted `/posts`) tolerate both the
//! `{"posts": [...]}` envelope and a bare array; `/posts/search` is parsed
//! as a bare array only. The backend has shipped both shapes, and the search
//! route never grew the envelope — the asymmetry is part of the contract.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewPost, Post, PostListBody, PostPatch, SortDirection, SortField};

/// Synchronous, stateless client for the posts API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct PostClient {
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/posts", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_sorted_posts(&self, field: SortField, direction: SortDirection) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!(
                "{}/posts?sort={}&direction={}",
                self.base_url,
                field.as_str(),
                direction.as_str()
            ),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build a search request. A query parameter is emitted only for a
    /// non-empty filter, with the value percent-encoded.
    pub fn build_search_posts(&self, title: Option<&str>, content: Option<&str>) -> HttpRequest {
        let mut params = Vec::new();
        if let Some(t) = title.filter(|t| !t.is_empty()) {
            params.push(format!("title={}", urlencoding::encode(t)));
        }
        if let Some(c) = content.filter(|c| !c.is_empty()) {
            params.push(format!("content={}", urlencoding::encode(c)));
        }

        let path = if params.is_empty() {
            format!("{}/posts/search", self.base_url)
        } else {
            format!("{}/posts/search?{}", self.base_url, params.join("&"))
        };

        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_post(&self, input: &NewPost) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/posts", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_post(&self, id: u64, patch: &PostPatch) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(patch).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/posts/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_post(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/posts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_status(&response, 200)?;
        let body: PostListBody = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(body.into_posts())
    }

    pub fn parse_sorted_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        self.parse_list_posts(response)
    }

    /// Search responses are a bare array — no `{"posts": ...}` unwrap here.
    pub fn parse_search_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// The backend answers a delete with 200 and a JSON confirmation message;
    /// the body is not inspected.
    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PostClient {
        PostClient::new("http://localhost:5002/api")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_posts_produces_correct_request() {
        let req = client().build_list_posts();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5002/api/posts");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_sorted_posts_produces_correct_request() {
        let req = client().build_sorted_posts(SortField::Date, SortDirection::Desc);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:5002/api/posts?sort=date&direction=desc"
        );
    }

    #[test]
    fn build_search_posts_title_only() {
        let req = client().build_search_posts(Some("foo"), Some(""));
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5002/api/posts/search?title=foo");
    }

    #[test]
    fn build_search_posts_encodes_values() {
        let req = client().build_search_posts(Some("hello world"), Some("a&b"));
        assert_eq!(
            req.path,
            "http://localhost:5002/api/posts/search?title=hello%20world&content=a%26b"
        );
    }

    #[test]
    fn build_search_posts_no_filters() {
        let req = client().build_search_posts(None, None);
        assert_eq!(req.path, "http://localhost:5002/api/posts/search");
    }

    #[test]
    fn build_create_post_produces_correct_request() {
        let input = NewPost {
            title: "First".to_string(),
            content: "Hello".to_string(),
            author: "ada".to_string(),
        };
        let req = client().build_create_post(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5002/api/posts");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "First");
        assert_eq!(body["content"], "Hello");
        assert_eq!(body["author"], "ada");
    }

    #[test]
    fn build_update_post_sends_only_set_fields() {
        let patch = PostPatch {
            title: Some("Renamed".to_string()),
            ..PostPatch::default()
        };
        let req = client().build_update_post(3, &patch).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:5002/api/posts/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Renamed");
        assert!(body.get("content").is_none());
        assert!(body.get("author").is_none());
        assert!(body.get("date").is_none());
    }

    #[test]
    fn build_delete_post_produces_correct_request() {
        let req = client().build_delete_post(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:5002/api/posts/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_posts_enveloped() {
        let posts = client()
            .parse_list_posts(ok(
                r#"{"posts":[{"id":1,"title":"A","content":"c","author":"x","date":"2024-01-01"}]}"#,
            ))
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);
    }

    #[test]
    fn parse_list_posts_bare_array() {
        let posts = client()
            .parse_list_posts(ok(
                r#"[{"id":1,"title":"A","content":"c","author":"x","date":"2024-01-01"}]"#,
            ))
            .unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn parse_search_posts_rejects_envelope() {
        let err = client()
            .parse_search_posts(ok(r#"{"posts":[]}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_search_posts_bare_array() {
        let posts = client().parse_search_posts(ok("[]")).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn parse_create_post_success() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":4,"title":"New","content":"c","author":"x","date":"2024-06-01"}"#
                .to_string(),
        };
        let post = client().parse_create_post(response).unwrap();
        assert_eq!(post.id, 4);
        assert_eq!(post.date, "2024-06-01");
    }

    #[test]
    fn parse_create_post_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_create_post(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_post_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"error":"Post with id 99 not found"}"#.to_string(),
        };
        let err = client().parse_update_post(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_post_ignores_message_body() {
        let result = client().parse_delete_post(ok(
            r#"{"message":"Post with id 2 has been deleted successfully."}"#,
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn parse_delete_post_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_delete_post(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PostClient::new("http://localhost:5002/api/");
        let req = client.build_list_posts();
        assert_eq!(req.path, "http://localhost:5002/api/posts");
    }

    #[test]
    fn parse_list_posts_bad_json() {
        let err = client().parse_list_posts(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
