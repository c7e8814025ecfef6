//! HTML projection of the view state.
//!
//! Element ids follow a fixed per-post scheme (`like-count-{id}`,
//! `comments-{id}`, `comment-input-{id}`, `comment-list-{id}`,
//! `update-form-{id}`, `update-{field}-{id}`) so a host shell can address
//! individual controls. The `onclick` hooks name the host-side handlers.
//! All post text goes through maud's default escaping.

use maud::{html, Markup};

use crate::view::{PostBlock, ViewState};

/// Render the whole post container. Every call produces the full markup
/// from scratch; the host replaces the previous container wholesale.
pub fn post_list(view: &ViewState) -> Markup {
    html! {
        div id="post-container" {
            @for block in view.blocks() {
                (post_block(block))
            }
        }
    }
}

/// Render a single post block with its delete, edit, like, and comment
/// controls.
pub fn post_block(block: &PostBlock) -> Markup {
    let post = &block.post;
    let id = post.id;

    html! {
        div class="post" {
            h2 { (post.title) }
            p { strong { "By:" } " " (post.author) " | " strong { "Date:" } " " (post.date) }
            p { (post.content) }
            button onclick={ "deletePost(" (id) ")" } { "Delete" }
            button onclick={ "toggleUpdateForm(" (id) ")" } { "Edit" }
            button onclick={ "likePost(" (id) ")" } {
                "Like (" span id={ "like-count-" (id) } { (block.like_count) } ")"
            }
            button onclick={ "toggleCommentSection(" (id) ")" } { "Comment" }
            (update_form(block))
            (comment_section(block))
        }
    }
}

/// The inline edit form. Pre-filled from the open form's literal strings
/// when visible, from the post's current fields otherwise.
fn update_form(block: &PostBlock) -> Markup {
    let id = block.post.id;
    let (title, content, author, date) = match &block.edit_form {
        Some(form) => (
            form.title.as_str(),
            form.content.as_str(),
            form.author.as_str(),
            form.date.as_str(),
        ),
        None => (
            block.post.title.as_str(),
            block.post.content.as_str(),
            block.post.author.as_str(),
            block.post.date.as_str(),
        ),
    };

    html! {
        div id={ "update-form-" (id) } class="update-form"
            style=[block.edit_form.is_none().then_some("display:none")] {
            input type="text" id={ "update-title-" (id) } value=(title);
            textarea id={ "update-content-" (id) } { (content) }
            input type="text" id={ "update-author-" (id) } value=(author);
            input type="text" id={ "update-date-" (id) } value=(date);
            button onclick={ "updatePost(" (id) ")" } { "Save" }
            button onclick={ "hideUpdateForm(" (id) ")" } { "Cancel" }
        }
    }
}

/// The comment section: add-comment input plus the locally kept list.
fn comment_section(block: &PostBlock) -> Markup {
    let id = block.post.id;

    html! {
        div id={ "comments-" (id) } class="comments-section"
            style=[(!block.comments_open).then_some("display:none")] {
            input type="text" id={ "comment-input-" (id) }
                placeholder="Write a comment..." value=(block.comment_input);
            button onclick={ "addComment(" (id) ")" } { "Submit" }
            div id={ "comment-list-" (id) } {
                @for comment in &block.comments {
                    p { (comment) }
                }
            }
        }
    }
}
