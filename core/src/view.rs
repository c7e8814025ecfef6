//! Rendered view of the post list plus its local-only interaction state.
//!
//! # Design
//! `ViewState` is the in-memory post container. A render fully replaces all
//! blocks from scratch, in server-supplied order — no diffing, no
//! reconciliation. Likes, comments, pending input, and open forms live in
//! explicit per-post structs rather than in the markup, and their lifetime
//! is a single render: they reset on every refresh and never reach the
//! server.

use crate::types::Post;

/// Pre-filled contents of a post's inline edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

/// One rendered post plus its local-only state.
#[derive(Debug, Clone)]
pub struct PostBlock {
    pub post: Post,
    /// Like counter. Starts at 0 on every render, lost on refresh.
    pub like_count: u32,
    /// Locally added comments, oldest first. Lost on refresh.
    pub comments: Vec<String>,
    /// Pending text of the inline add-comment input.
    pub comment_input: String,
    /// Whether the comment section is visible.
    pub comments_open: bool,
    /// The inline edit form, when open for this post.
    pub edit_form: Option<EditForm>,
}

impl PostBlock {
    fn new(post: Post) -> Self {
        Self {
            post,
            like_count: 0,
            comments: Vec::new(),
            comment_input: String::new(),
            comments_open: false,
            edit_form: None,
        }
    }
}

/// The post container: every rendered block, in server-supplied order.
///
/// Invariant: at most one edit form is open across all blocks.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    blocks: Vec<PostBlock>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire view with fresh blocks for `posts`. All local
    /// state (likes, comments, open forms) is discarded.
    pub fn render(&mut self, posts: Vec<Post>) {
        self.blocks = posts.into_iter().map(PostBlock::new).collect();
    }

    pub fn blocks(&self) -> &[PostBlock] {
        &self.blocks
    }

    pub fn block(&self, id: u64) -> Option<&PostBlock> {
        self.blocks.iter().find(|b| b.post.id == id)
    }

    fn block_mut(&mut self, id: u64) -> Option<&mut PostBlock> {
        self.blocks.iter_mut().find(|b| b.post.id == id)
    }

    /// Increment the like counter by one. Purely local; no request is built.
    pub fn like_post(&mut self, id: u64) {
        if let Some(block) = self.block_mut(id) {
            block.like_count += 1;
        }
    }

    /// Flip the comment section's visibility.
    pub fn toggle_comment_section(&mut self, id: u64) {
        if let Some(block) = self.block_mut(id) {
            block.comments_open = !block.comments_open;
        }
    }

    /// Stage text in the add-comment input.
    pub fn set_comment_input(&mut self, id: u64, text: &str) {
        if let Some(block) = self.block_mut(id) {
            block.comment_input = text.to_string();
        }
    }

    /// Append the trimmed pending comment and clear the input. Empty or
    /// whitespace-only input is a no-op. Comments never reach the server.
    pub fn add_comment(&mut self, id: u64) {
        if let Some(block) = self.block_mut(id) {
            let text = block.comment_input.trim();
            if text.is_empty() {
                return;
            }
            let comment = text.to_string();
            block.comments.push(comment);
            block.comment_input.clear();
        }
    }

    /// Open the edit form for `id`, pre-filled with the literal strings
    /// passed in, closing any other open form first.
    pub fn show_update_form(&mut self, id: u64, title: &str, content: &str, author: &str, date: &str) {
        for block in &mut self.blocks {
            if block.post.id != id {
                block.edit_form = None;
            }
        }
        if let Some(block) = self.block_mut(id) {
            block.edit_form = Some(EditForm {
                title: title.to_string(),
                content: content.to_string(),
                author: author.to_string(),
                date: date.to_string(),
            });
        }
    }

    /// Close the edit form for `id` if it is open.
    pub fn hide_update_form(&mut self, id: u64) {
        if let Some(block) = self.block_mut(id) {
            block.edit_form = None;
        }
    }

    /// Id of the post whose edit form is currently open, if any.
    pub fn open_edit_form(&self) -> Option<u64> {
        self.blocks
            .iter()
            .find(|b| b.edit_form.is_some())
            .map(|b| b.post.id)
    }
}
