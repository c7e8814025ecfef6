use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

/// Envelope shape of the list endpoint. Search answers with a bare array.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

/// Create payload. Fields are optional so missing ones produce a 400 with
/// an error body instead of an extractor rejection.
#[derive(Deserialize)]
pub struct CreatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

pub type Db = Arc<RwLock<Vec<Post>>>;

type ApiError = (StatusCode, Json<ErrorBody>);

fn bad_request(msg: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: msg.to_string(),
        }),
    )
}

fn not_found(id: u64) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: format!("Post with id {id} not found"),
        }),
    )
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/search", get(search_posts))
        .route("/posts/{id}", axum::routing::put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<PostList>, ApiError> {
    let mut posts = db.read().await.clone();

    if let Some(sort) = params.sort.as_deref() {
        if !matches!(sort, "title" | "content" | "author" | "date") {
            return Err(bad_request("invalid sort field"));
        }
        let descending = match params.direction.as_deref() {
            Some("asc") => false,
            Some("desc") | None => true,
            Some(_) => return Err(bad_request("invalid sort direction")),
        };
        posts.sort_by(|a, b| field_key(a, sort).cmp(field_key(b, sort)));
        if descending {
            posts.reverse();
        }
    }

    Ok(Json(PostList { posts }))
}

fn field_key<'a>(post: &'a Post, field: &str) -> &'a str {
    match field {
        "title" => &post.title,
        "content" => &post.content,
        "author" => &post.author,
        _ => &post.date,
    }
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<CreatePost>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let title = input.title.unwrap_or_default();
    let content = input.content.unwrap_or_default();
    let author = input.author.unwrap_or_default();
    if title.trim().is_empty() || content.trim().is_empty() || author.trim().is_empty() {
        return Err(bad_request("title, content and author are required"));
    }

    let mut posts = db.write().await;
    let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let post = Post {
        id,
        title,
        content,
        author,
        date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
    };
    posts.push(post.clone());
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdatePost>,
) -> Result<Json<Post>, ApiError> {
    let mut posts = db.write().await;
    let post = posts
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| not_found(id))?;
    if let Some(title) = input.title {
        post.title = title;
    }
    if let Some(content) = input.content {
        post.content = content;
    }
    if let Some(author) = input.author {
        post.author = author;
    }
    if let Some(date) = input.date {
        post.date = date;
    }
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<MessageBody>, ApiError> {
    let mut posts = db.write().await;
    let before = posts.len();
    posts.retain(|p| p.id != id);
    if posts.len() == before {
        return Err(not_found(id));
    }
    Ok(Json(MessageBody {
        message: format!("Post with id {id} has been deleted successfully."),
    }))
}

async fn search_posts(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Post>> {
    let title_query = params.title.unwrap_or_default().to_lowercase();
    let content_query = params.content.unwrap_or_default().to_lowercase();

    let posts = db
        .read()
        .await
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&title_query)
                && p.content.to_lowercase().contains(&content_query)
        })
        .cloned()
        .collect();
    Json(posts)
}
