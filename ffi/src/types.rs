//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use blog_core::error::ApiError;
use blog_core::http::HttpMethod;
use blog_core::types::{SortDirection, SortField};

/// Opaque handle to a `PostClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiPostClient {
    pub(crate) inner: blog_core::PostClient,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

/// Post attribute the server can sort a listing by.
#[repr(C)]
pub enum FfiSortField {
    Title = 0,
    Content = 1,
    Author = 2,
    Date = 3,
}

impl From<FfiSortField> for SortField {
    fn from(f: FfiSortField) -> Self {
        match f {
            FfiSortField::Title => SortField::Title,
            FfiSortField::Content => SortField::Content,
            FfiSortField::Author => SortField::Author,
            FfiSortField::Date => SortField::Date,
        }
    }
}

/// Sort order for a listing.
#[repr(C)]
pub enum FfiSortDirection {
    Asc = 0,
    Desc = 1,
}

impl From<FfiSortDirection> for SortDirection {
    fn from(d: FfiSortDirection) -> Self {
        match d {
            FfiSortDirection::Asc => SortDirection::Asc,
            FfiSortDirection::Desc => SortDirection::Desc,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `blog_build_*` functions. The C caller executes the request
/// and passes the response back through `blog_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: blog_core::HttpRequest) -> *mut Self {
        let path = CString::new(req.path).unwrap().into_raw();
        let body = match req.body {
            Some(b) => CString::new(b).unwrap().into_raw(),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let mut ffi_headers: Vec<FfiHeader> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: CString::new(k).unwrap().into_raw(),
                    value: CString::new(v).unwrap().into_raw(),
                })
                .collect();
            let ptr = ffi_headers.as_mut_ptr();
            std::mem::forget(ffi_headers);
            ptr
        };

        let ffi_req = Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            body,
        });
        Box::into_raw(ffi_req)
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `blog_parse_*` function. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiPostResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    NotFound = 1,
    Http = 2,
    Deserialization = 3,
    Serialization = 4,
    Transport = 5,
    Panic = 6,
    NullArg = 7,
}

/// Tag that tells `blog_free_result` what `FfiPostResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Post = 1,
    PostList = 2,
}

/// A single post exposed to C.
#[repr(C)]
pub struct FfiPost {
    pub id: u64,
    pub title: *mut c_char,
    pub content: *mut c_char,
    pub author: *mut c_char,
    pub date: *mut c_char,
}

impl FfiPost {
    fn from_core(post: blog_core::Post) -> Self {
        FfiPost {
            id: post.id,
            title: CString::new(post.title).unwrap().into_raw(),
            content: CString::new(post.content).unwrap().into_raw(),
            author: CString::new(post.author).unwrap().into_raw(),
            date: CString::new(post.date).unwrap().into_raw(),
        }
    }
}

/// A list of posts exposed to C.
#[repr(C)]
pub struct FfiPostList {
    pub items: *mut FfiPost,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiPostResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiPostResult {
    /// Build a success result carrying a single `FfiPost`.
    pub(crate) fn ok_post(post: blog_core::Post) -> *mut Self {
        let ffi_post = Box::new(FfiPost::from_core(post));
        let result = Box::new(FfiPostResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::Post,
            data: Box::into_raw(ffi_post) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying an `FfiPostList`.
    pub(crate) fn ok_post_list(posts: Vec<blog_core::Post>) -> *mut Self {
        let len = posts.len() as u32;
        let mut ffi_posts: Vec<FfiPost> = posts.into_iter().map(FfiPost::from_core).collect();

        let items = if ffi_posts.is_empty() {
            std::ptr::null_mut()
        } else {
            let ptr = ffi_posts.as_mut_ptr();
            std::mem::forget(ffi_posts);
            ptr
        };

        let ffi_list = Box::new(FfiPostList { items, len });
        let result = Box::new(FfiPostResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::PostList,
            data: Box::into_raw(ffi_list) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result with no data payload (e.g. delete).
    pub(crate) fn ok_empty() -> *mut Self {
        let result = Box::new(FfiPostResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status, msg) = match &err {
            ApiError::NotFound => (FfiErrorCode::NotFound, 404u16, err.to_string()),
            ApiError::Http { status, .. } => (FfiErrorCode::Http, *status, err.to_string()),
            ApiError::Deserialization(_) => (FfiErrorCode::Deserialization, 0, err.to_string()),
            ApiError::Serialization(_) => (FfiErrorCode::Serialization, 0, err.to_string()),
            ApiError::Transport(_) => (FfiErrorCode::Transport, 0, err.to_string()),
        };

        let result = Box::new(FfiPostResult {
            error_code,
            error_message: CString::new(msg).unwrap().into_raw(),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        let msg = format!("null argument: {name}");
        let result = Box::new(FfiPostResult {
            error_code: FfiErrorCode::NullArg,
            error_message: CString::new(msg).unwrap().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        let result = Box::new(FfiPostResult {
            error_code: FfiErrorCode::Panic,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}
