//! The post list controller: configuration, fetching, and rendering.
//!
//! # Design
//! `Session` wires the persisted config, the request builder/parser, the
//! host's transport, and the view together. The transport is the single I/O
//! seam — everything else stays deterministic. Error policy: every failure
//! is logged and swallowed, the view keeps its previous render, nothing is
//! retried.
//!
//! Mutations fire their request and then, independently, a follow-up
//! fetch-all. Nothing orders the two against concurrent sessions; a racing
//! refresh may or may not observe the mutation.

use crate::client::PostClient;
use crate::config::ConfigStore;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::render;
use crate::types::{NewPost, Post, PostPatch, SortDirection, SortField};
use crate::view::ViewState;

/// Executes an `HttpRequest` built by the core. Implemented by the host:
/// a ureq agent in tests, a C callback behind the FFI, a browser shell.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// One client session: the configured base URL, the rendered post list, and
/// the local interaction state attached to it.
pub struct Session<T: Transport> {
    config: ConfigStore,
    base_url: String,
    client: PostClient,
    transport: T,
    view: ViewState,
}

impl<T: Transport> Session<T> {
    /// Start a session from a previously persisted config. The saved base
    /// URL, when present, becomes the working one.
    pub fn new(config: ConfigStore, transport: T) -> Self {
        let base_url = config.base_url().unwrap_or_default().to_string();
        Self {
            client: PostClient::new(&base_url),
            config,
            base_url,
            transport,
            view: ViewState::new(),
        }
    }

    /// True once a base URL has been configured. Hosts skip the initial
    /// fetch when this is false.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the session at a different backend. Takes effect on the next
    /// operation; persisted on the next `load_posts`.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim().to_string();
        self.client = PostClient::new(&self.base_url);
    }

    /// Fetch all posts and render them, persisting the working base URL
    /// first. On failure the previous render stays untouched.
    pub fn load_posts(&mut self) {
        self.config.set_base_url(&self.base_url);
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to persist base URL");
        }
        let request = self.client.build_list_posts();
        self.fetch_and_render(request, PostClient::parse_list_posts, "load posts");
    }

    /// Fetch posts sorted by `field` and render them.
    pub fn load_sorted_posts(&mut self, field: SortField, direction: SortDirection) {
        let request = self.client.build_sorted_posts(field, direction);
        self.fetch_and_render(request, PostClient::parse_sorted_posts, "load sorted posts");
    }

    /// Search posts by title and/or content substring and render the result.
    /// Empty queries are not sent.
    pub fn search_posts(&mut self, title_query: &str, content_query: &str) {
        let request = self
            .client
            .build_search_posts(Some(title_query), Some(content_query));
        self.fetch_and_render(request, PostClient::parse_search_posts, "search posts");
    }

    /// Create a post, then refresh the whole list so the render reflects the
    /// server-assigned id and date. No optimistic update.
    pub fn add_post(&mut self, title: &str, content: &str, author: &str) {
        let input = NewPost {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        };
        let created = self
            .client
            .build_create_post(&input)
            .and_then(|req| self.transport.execute(&req))
            .and_then(|resp| self.client.parse_create_post(resp));
        match created {
            Ok(post) => {
                tracing::debug!(id = post.id, "post created");
                self.load_posts();
            }
            Err(e) => tracing::warn!(error = %e, "failed to add post"),
        }
    }

    /// Delete a post. The refresh runs whether or not the delete succeeded;
    /// a failed delete simply re-renders the unchanged server state.
    pub fn delete_post(&mut self, id: u64) {
        let request = self.client.build_delete_post(id);
        let deleted = self
            .transport
            .execute(&request)
            .and_then(|resp| self.client.parse_delete_post(resp));
        if let Err(e) = deleted {
            tracing::warn!(error = %e, id, "failed to delete post");
        }
        self.load_posts();
    }

    /// Update a post with whichever of the given fields are non-empty after
    /// trimming; the others are left untouched on the server. On success the
    /// open edit form closes and the list refreshes.
    pub fn update_post(&mut self, id: u64, title: &str, content: &str, author: &str, date: &str) {
        let patch = PostPatch {
            title: non_empty(title),
            content: non_empty(content),
            author: non_empty(author),
            date: non_empty(date),
        };
        let updated = self
            .client
            .build_update_post(id, &patch)
            .and_then(|req| self.transport.execute(&req))
            .and_then(|resp| self.client.parse_update_post(resp));
        match updated {
            Ok(_) => {
                self.view.hide_update_form(id);
                self.load_posts();
            }
            Err(e) => tracing::warn!(error = %e, id, "failed to update post"),
        }
    }

    /// The rendered view. Local interaction (likes, comments, edit forms)
    /// goes through `view_mut`.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Project the current view to HTML markup.
    pub fn html(&self) -> maud::Markup {
        render::post_list(&self.view)
    }

    fn fetch_and_render<F>(&mut self, request: HttpRequest, parse: F, operation: &str)
    where
        F: FnOnce(&PostClient, HttpResponse) -> Result<Vec<Post>, ApiError>,
    {
        let result = self
            .transport
            .execute(&request)
            .and_then(|resp| parse(&self.client, resp));
        match result {
            Ok(posts) => self.view.render(posts),
            Err(e) => {
                tracing::warn!(error = %e, operation, "request failed; keeping previous view");
            }
        }
    }
}

/// Trim `value`; `None` when nothing is left.
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
