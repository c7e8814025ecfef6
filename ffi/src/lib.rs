//! C-ABI wrapper around `blog-core`.
//!
//! # Overview
//! Exposes the full posts API surface through `extern "C"` functions so any
//! host with a C FFI — a native shell, an embedded browser runtime — can
//! build and parse HTTP requests/responses without linking to serde
//! directly. The host performs the actual network I/O between `build` and
//! `parse`, exactly as the Rust `Transport` seam does.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiPostResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `blog_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use blog_core::http::HttpResponse;
use blog_core::types::{NewPost, PostPatch};

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `PostClient` bound to `base_url`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `blog_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn blog_client_new(base_url: *const c_char) -> *mut FfiPostClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or("");
        let client = blog_core::PostClient::new(url);
        Box::into_raw(Box::new(FfiPostClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `PostClient` created by `blog_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn blog_client_free(client: *mut FfiPostClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Read a nullable C string into an owned `Option<String>`.
fn opt_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(
            unsafe { CStr::from_ptr(ptr) }
                .to_str()
                .unwrap_or("")
                .to_string(),
        )
    }
}

/// Build an HTTP request for listing all posts.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `blog_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn blog_build_list_posts(client: *const FfiPostClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let req = client.inner.build_list_posts();
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for a sorted listing.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn blog_build_sorted_posts(
    client: *const FfiPostClient,
    field: FfiSortField,
    direction: FfiSortDirection,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let req = client.inner.build_sorted_posts(field.into(), direction.into());
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for searching posts.
///
/// `title` and `content` may each be null or empty to skip that filter.
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn blog_build_search_posts(
    client: *const FfiPostClient,
    title: *const c_char,
    content: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let title = opt_string(title);
        let content = opt_string(content);
        let req = client
            .inner
            .build_search_posts(title.as_deref(), content.as_deref());
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for creating a new post.
///
/// Returns null if `client`, `title`, `content`, or `author` is null, or if
/// serialization fails.
#[unsafe(no_mangle)]
pub extern "C" fn blog_build_create_post(
    client: *const FfiPostClient,
    title: *const c_char,
    content: *const c_char,
    author: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || title.is_null() || content.is_null() || author.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let input = NewPost {
            title: unsafe { CStr::from_ptr(title) }.to_str().unwrap_or("").to_string(),
            content: unsafe { CStr::from_ptr(content) }.to_str().unwrap_or("").to_string(),
            author: unsafe { CStr::from_ptr(author) }.to_str().unwrap_or("").to_string(),
        };
        match client.inner.build_create_post(&input) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for a partial update of post `id`.
///
/// Each of `title`, `content`, `author`, and `date` may be null to leave
/// that field untouched on the server; non-null values are sent verbatim.
/// Returns null if `client` is null or if serialization fails.
#[unsafe(no_mangle)]
pub extern "C" fn blog_build_update_post(
    client: *const FfiPostClient,
    id: u64,
    title: *const c_char,
    content: *const c_char,
    author: *const c_char,
    date: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let patch = PostPatch {
            title: opt_string(title),
            content: opt_string(content),
            author: opt_string(author),
            date: opt_string(date),
        };
        match client.inner.build_update_post(id, &patch) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for deleting post `id`.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn blog_build_delete_post(
    client: *const FfiPostClient,
    id: u64,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let req = client.inner.build_delete_post(id);
        FfiHttpRequest::from_core(req)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as an empty string.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_str()
            .unwrap_or("")
            .to_string()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

macro_rules! guard_parse_args {
    ($client:ident, $response:ident) => {
        if $client.is_null() {
            return FfiPostResult::null_arg("client");
        }
        if $response.is_null() {
            return FfiPostResult::null_arg("response");
        }
    };
}

/// Parse an HTTP response from a list-posts request. Accepts both the
/// `{"posts": [...]}` envelope and a bare array.
///
/// Returns a result with `data_tag = PostList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn blog_parse_list_posts(
    client: *const FfiPostClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPostResult {
    catch_unwind(|| {
        guard_parse_args!(client, response);
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_list_posts(ffi_response_to_core(resp)) {
            Ok(posts) => FfiPostResult::ok_post_list(posts),
            Err(e) => FfiPostResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPostResult::panic("panic in blog_parse_list_posts"))
}

/// Parse an HTTP response from a sorted listing request.
///
/// Returns a result with `data_tag = PostList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn blog_parse_sorted_posts(
    client: *const FfiPostClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPostResult {
    catch_unwind(|| {
        guard_parse_args!(client, response);
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_sorted_posts(ffi_response_to_core(resp)) {
            Ok(posts) => FfiPostResult::ok_post_list(posts),
            Err(e) => FfiPostResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPostResult::panic("panic in blog_parse_sorted_posts"))
}

/// Parse an HTTP response from a search request. The body must be a bare
/// array; the listing envelope is rejected.
///
/// Returns a result with `data_tag = PostList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn blog_parse_search_posts(
    client: *const FfiPostClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPostResult {
    catch_unwind(|| {
        guard_parse_args!(client, response);
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_search_posts(ffi_response_to_core(resp)) {
            Ok(posts) => FfiPostResult::ok_post_list(posts),
            Err(e) => FfiPostResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPostResult::panic("panic in blog_parse_search_posts"))
}

/// Parse an HTTP response from a create-post request.
///
/// Returns a result with `data_tag = Post` on success (status 201).
#[unsafe(no_mangle)]
pub extern "C" fn blog_parse_create_post(
    client: *const FfiPostClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPostResult {
    catch_unwind(|| {
        guard_parse_args!(client, response);
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_create_post(ffi_response_to_core(resp)) {
            Ok(post) => FfiPostResult::ok_post(post),
            Err(e) => FfiPostResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPostResult::panic("panic in blog_parse_create_post"))
}

/// Parse an HTTP response from an update-post request.
///
/// Returns a result with `data_tag = Post` on success.
#[unsafe(no_mangle)]
pub extern "C" fn blog_parse_update_post(
    client: *const FfiPostClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPostResult {
    catch_unwind(|| {
        guard_parse_args!(client, response);
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_update_post(ffi_response_to_core(resp)) {
            Ok(post) => FfiPostResult::ok_post(post),
            Err(e) => FfiPostResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPostResult::panic("panic in blog_parse_update_post"))
}

/// Parse an HTTP response from a delete-post request. The confirmation
/// body is ignored.
///
/// Returns a result with `data_tag = None` on success (status 200).
#[unsafe(no_mangle)]
pub extern "C" fn blog_parse_delete_post(
    client: *const FfiPostClient,
    response: *const FfiHttpResponse,
) -> *mut FfiPostResult {
    catch_unwind(|| {
        guard_parse_args!(client, response);
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_delete_post(ffi_response_to_core(resp)) {
            Ok(()) => FfiPostResult::ok_empty(),
            Err(e) => FfiPostResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPostResult::panic("panic in blog_parse_delete_post"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `blog_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn blog_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.path.is_null() {
            drop(unsafe { CString::from_raw(req.path) });
        }
        if !req.body.is_null() {
            drop(unsafe { CString::from_raw(req.body) });
        }
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Vec::from_raw_parts(req.headers, req.headers_len as usize, req.headers_len as usize)
            };
            for h in headers {
                if !h.key.is_null() {
                    drop(unsafe { CString::from_raw(h.key) });
                }
                if !h.value.is_null() {
                    drop(unsafe { CString::from_raw(h.value) });
                }
            }
        }
    });
}

/// Free an `FfiPostResult` returned by any `blog_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn blog_free_result(result: *mut FfiPostResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::Post => {
                    let post = unsafe { Box::from_raw(result.data as *mut FfiPost) };
                    free_ffi_post_fields(&post);
                }
                FfiDataTag::PostList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiPostList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items = unsafe {
                            Vec::from_raw_parts(list.items, list.len as usize, list.len as usize)
                        };
                        for item in &items {
                            free_ffi_post_fields(item);
                        }
                    }
                }
                FfiDataTag::None => {}
            }
        }
    });
}

/// Free the C-string fields of an `FfiPost` (but not the struct itself).
fn free_ffi_post_fields(post: &FfiPost) {
    if !post.title.is_null() {
        drop(unsafe { CString::from_raw(post.title) });
    }
    if !post.content.is_null() {
        drop(unsafe { CString::from_raw(post.content) });
    }
    if !post.author.is_null() {
        drop(unsafe { CString::from_raw(post.author) });
    }
    if !post.date.is_null() {
        drop(unsafe { CString::from_raw(post.date) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn blog_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn new_client() -> *mut FfiPostClient {
        let url = CString::new("http://localhost:5002/api").unwrap();
        let client = blog_client_new(url.as_ptr());
        assert!(!client.is_null());
        client
    }

    #[test]
    fn client_new_and_free() {
        let client = new_client();
        blog_client_free(client);
    }

    #[test]
    fn client_new_null_returns_null() {
        let client = blog_client_new(std::ptr::null());
        assert!(client.is_null());
    }

    #[test]
    fn client_free_null_is_safe() {
        blog_client_free(std::ptr::null_mut());
    }

    #[test]
    fn build_list_posts_returns_correct_request() {
        let client = new_client();
        let req = blog_build_list_posts(client);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert!(matches!(req_ref.method, FfiHttpMethod::Get));

        let path = unsafe { CStr::from_ptr(req_ref.path) }.to_str().unwrap();
        assert_eq!(path, "http://localhost:5002/api/posts");

        assert!(req_ref.body.is_null());
        assert_eq!(req_ref.headers_len, 0);

        blog_free_request(req);
        blog_client_free(client);
    }

    #[test]
    fn build_list_posts_null_client_returns_null() {
        let req = blog_build_list_posts(std::ptr::null());
        assert!(req.is_null());
    }

    #[test]
    fn build_sorted_posts_encodes_query() {
        let client = new_client();
        let req = blog_build_sorted_posts(client, FfiSortField::Date, FfiSortDirection::Desc);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        let path = unsafe { CStr::from_ptr(req_ref.path) }.to_str().unwrap();
        assert_eq!(path, "http://localhost:5002/api/posts?sort=date&direction=desc");

        blog_free_request(req);
        blog_client_free(client);
    }

    #[test]
    fn build_search_posts_skips_null_filters() {
        let client = new_client();
        let title = CString::new("foo").unwrap();
        let req = blog_build_search_posts(client, title.as_ptr(), std::ptr::null());
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        let path = unsafe { CStr::from_ptr(req_ref.path) }.to_str().unwrap();
        assert_eq!(path, "http://localhost:5002/api/posts/search?title=foo");

        blog_free_request(req);
        blog_client_free(client);
    }

    #[test]
    fn build_create_post_produces_post_with_json_body() {
        let client = new_client();
        let title = CString::new("First").unwrap();
        let content = CString::new("Hello").unwrap();
        let author = CString::new("ada").unwrap();
        let req = blog_build_create_post(client, title.as_ptr(), content.as_ptr(), author.as_ptr());
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert!(matches!(req_ref.method, FfiHttpMethod::Post));
        assert_eq!(req_ref.headers_len, 1);
        assert!(!req_ref.body.is_null());

        let body_str = unsafe { CStr::from_ptr(req_ref.body) }.to_str().unwrap();
        let body: serde_json::Value = serde_json::from_str(body_str).unwrap();
        assert_eq!(body["title"], "First");
        assert_eq!(body["content"], "Hello");
        assert_eq!(body["author"], "ada");

        blog_free_request(req);
        blog_client_free(client);
    }

    #[test]
    fn build_create_post_null_field_returns_null() {
        let client = new_client();
        let title = CString::new("First").unwrap();
        let req =
            blog_build_create_post(client, title.as_ptr(), std::ptr::null(), std::ptr::null());
        assert!(req.is_null());
        blog_client_free(client);
    }

    #[test]
    fn build_update_post_title_only() {
        let client = new_client();
        let title = CString::new("New title").unwrap();
        let req = blog_build_update_post(
            client,
            1,
            title.as_ptr(),
            std::ptr::null(),
            std::ptr::null(),
            std::ptr::null(),
        );
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert!(matches!(req_ref.method, FfiHttpMethod::Put));
        let path = unsafe { CStr::from_ptr(req_ref.path) }.to_str().unwrap();
        assert_eq!(path, "http://localhost:5002/api/posts/1");

        let body_str = unsafe { CStr::from_ptr(req_ref.body) }.to_str().unwrap();
        let body: serde_json::Value = serde_json::from_str(body_str).unwrap();
        assert_eq!(body["title"], "New title");
        assert!(body.get("content").is_none());
        assert!(body.get("author").is_none());
        assert!(body.get("date").is_none());

        blog_free_request(req);
        blog_client_free(client);
    }

    #[test]
    fn build_delete_post_produces_delete_request() {
        let client = new_client();
        let req = blog_build_delete_post(client, 9);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert!(matches!(req_ref.method, FfiHttpMethod::Delete));
        let path = unsafe { CStr::from_ptr(req_ref.path) }.to_str().unwrap();
        assert_eq!(path, "http://localhost:5002/api/posts/9");

        blog_free_request(req);
        blog_client_free(client);
    }

    #[test]
    fn parse_list_posts_envelope() {
        let client = new_client();
        let body = CString::new(
            r#"{"posts":[{"id":1,"title":"First","content":"a","author":"x","date":"2024-01-01"},{"id":2,"title":"Second","content":"b","author":"y","date":"2024-01-02"}]}"#,
        )
        .unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = blog_parse_list_posts(client, &resp);
        assert!(!result.is_null());

        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(r.error_message.is_null());
        assert!(matches!(r.data_tag, FfiDataTag::PostList));

        let list = unsafe { &*(r.data as *const FfiPostList) };
        assert_eq!(list.len, 2);

        let items = unsafe { std::slice::from_raw_parts(list.items, list.len as usize) };
        assert_eq!(items[0].id, 1);
        let title0 = unsafe { CStr::from_ptr(items[0].title) }.to_str().unwrap();
        assert_eq!(title0, "First");
        let date1 = unsafe { CStr::from_ptr(items[1].date) }.to_str().unwrap();
        assert_eq!(date1, "2024-01-02");

        blog_free_result(result);
        blog_client_free(client);
    }

    #[test]
    fn parse_list_posts_empty_bare_array() {
        let client = new_client();
        let body = CString::new("[]").unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = blog_parse_list_posts(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        let list = unsafe { &*(r.data as *const FfiPostList) };
        assert_eq!(list.len, 0);

        blog_free_result(result);
        blog_client_free(client);
    }

    #[test]
    fn parse_search_posts_rejects_envelope() {
        let client = new_client();
        let body = CString::new(r#"{"posts":[]}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = blog_parse_search_posts(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Deserialization));
        assert!(!r.error_message.is_null());

        blog_free_result(result);
        blog_client_free(client);
    }

    #[test]
    fn parse_create_post_success() {
        let client = new_client();
        let body = CString::new(
            r#"{"id":1,"title":"New","content":"c","author":"x","date":"2024-06-01"}"#,
        )
        .unwrap();
        let resp = FfiHttpResponse {
            status: 201,
            body: body.as_ptr(),
        };
        let result = blog_parse_create_post(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(matches!(r.data_tag, FfiDataTag::Post));

        let post = unsafe { &*(r.data as *const FfiPost) };
        assert_eq!(post.id, 1);
        let date = unsafe { CStr::from_ptr(post.date) }.to_str().unwrap();
        assert_eq!(date, "2024-06-01");

        blog_free_result(result);
        blog_client_free(client);
    }

    #[test]
    fn parse_delete_post_success() {
        let client = new_client();
        let body =
            CString::new(r#"{"message":"Post with id 1 has been deleted successfully."}"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = blog_parse_delete_post(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(matches!(r.data_tag, FfiDataTag::None));
        assert!(r.data.is_null());

        blog_free_result(result);
        blog_client_free(client);
    }

    #[test]
    fn parse_delete_post_not_found() {
        let client = new_client();
        let body = CString::new("").unwrap();
        let resp = FfiHttpResponse {
            status: 404,
            body: body.as_ptr(),
        };
        let result = blog_parse_delete_post(client, &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NotFound));
        assert_eq!(r.http_status, 404);
        assert!(!r.error_message.is_null());

        blog_free_result(result);
        blog_client_free(client);
    }

    #[test]
    fn parse_null_client_returns_null_arg() {
        let body = CString::new("[]").unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = blog_parse_list_posts(std::ptr::null(), &resp);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NullArg));

        blog_free_result(result);
    }

    #[test]
    fn parse_null_response_returns_null_arg() {
        let client = new_client();
        let result = blog_parse_list_posts(client, std::ptr::null());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NullArg));

        blog_free_result(result);
        blog_client_free(client);
    }

    #[test]
    fn free_request_null_is_safe() {
        blog_free_request(std::ptr::null_mut());
    }

    #[test]
    fn free_result_null_is_safe() {
        blog_free_result(std::ptr::null_mut());
    }

    #[test]
    fn free_string_null_is_safe() {
        blog_free_string(std::ptr::null_mut());
    }
}
