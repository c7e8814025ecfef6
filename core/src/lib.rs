//! Client core for a blog posts service.
//!
//! # Overview
//! Builds `HttpRequest` values, parses `HttpResponse` values, and maintains
//! the rendered post list without touching the network (host-does-IO
//! pattern). The host executes the actual HTTP round-trips, making the core
//! fully deterministic and testable.
//!
//! # Design
//! - `PostClient` is stateless — it holds only `base_url`. Each operation is
//!   split into `build_*` (produces request) and `parse_*` (consumes
//!   response), so the I/O boundary is explicit.
//! - `ViewState` keeps the rendered blocks plus local-only interaction state
//!   (likes, comments, edit forms); it resets on every render.
//! - `Session` is the controller tying config, client, transport, and view
//!   together with a log-and-continue error policy.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod render;
pub mod session;
pub mod types;
pub mod view;

pub use client::PostClient;
pub use config::ConfigStore;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{Session, Transport};
pub use types::{NewPost, Post, PostListBody, PostPatch, SortDirection, SortField};
pub use view::{EditForm, PostBlock, ViewState};
