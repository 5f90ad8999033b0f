//! Post-list state and the reducer that applies request outcomes.
//!
//! DESIGN
//! ======
//! Each remote operation is modelled as a tagged action carrying its
//! `Result` payload, and `apply` is the single writer for every field. The
//! three in-flight flags are independent; overlapping operations touch
//! disjoint fields. List and single-post fetches carry generation counters
//! so a completion that arrives after its view navigated away (or after a
//! newer request started) is dropped instead of clobbering fresh state.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use crate::error::Error;
use crate::net::types::Post;

/// Posts per page. A fetch returning exactly this many rows is what flips
/// `has_more` on.
pub const PAGE_SIZE: usize = 5;

/// Fields touched by a successful update, patched into the matching post.
/// Owner and creation timestamp are never client-mutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdatedPost {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Post-list state for the home, create, and update views.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogState {
    /// Current page of the owner's posts, most recent first.
    pub posts: Vec<Post>,
    /// 1-based page number. Never clamped against the end of the data;
    /// paging past it just yields an empty page.
    pub page: u32,
    /// Fixed page window size.
    pub page_size: usize,
    /// Heuristic: the last fetch filled the whole page window.
    pub has_more: bool,
    /// List fetch in flight.
    pub fetching: bool,
    /// Create in flight.
    pub creating: bool,
    /// Update in flight.
    pub updating: bool,
    /// Last error from any operation; overwritten on the next attempt.
    pub error: Option<String>,
    /// Post loaded for the update view, if any.
    pub selected: Option<Post>,
    /// Generation of the newest list fetch; stale completions are dropped.
    pub fetch_seq: u64,
    /// Generation of the newest single-post fetch.
    pub select_seq: u64,
}

impl Default for BlogState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            page: 1,
            page_size: PAGE_SIZE,
            has_more: true,
            fetching: false,
            creating: false,
            updating: false,
            error: None,
            selected: None,
            fetch_seq: 0,
            select_seq: 0,
        }
    }
}

/// A request-lifecycle event applied to `BlogState`.
#[derive(Clone, Debug)]
pub enum BlogAction {
    /// List fetch dispatched; bumps `fetch_seq`.
    FetchStarted,
    /// List fetch settled. `seq` must match the current generation or the
    /// whole action is ignored.
    FetchFinished {
        seq: u64,
        page: u32,
        result: Result<Vec<Post>, Error>,
    },
    /// Create dispatched.
    CreateStarted,
    /// Create settled; the created row is prepended without a refetch.
    CreateFinished(Result<Post, Error>),
    /// Update dispatched. The prior error is deliberately left in place.
    UpdateStarted,
    /// Update settled; on success the matching in-memory post is patched.
    UpdateFinished(Result<UpdatedPost, Error>),
    /// Single-post fetch dispatched; bumps `select_seq`.
    SelectStarted,
    /// Single-post fetch settled, same staleness rule as `FetchFinished`.
    SelectFinished {
        seq: u64,
        result: Result<Post, Error>,
    },
    /// Delete settled; carries the deleted id on success.
    DeleteFinished(Result<i64, Error>),
    /// Synchronous page change. Unclamped; the home view triggers the fetch.
    PageChanged(u32),
}

/// Apply one action. The only writer for every `BlogState` field.
pub fn apply(state: &mut BlogState, action: BlogAction) {
    match action {
        BlogAction::FetchStarted => {
            state.fetch_seq += 1;
            state.fetching = true;
            state.error = None;
        }
        BlogAction::FetchFinished { seq, page, result } => {
            if seq != state.fetch_seq {
                return;
            }
            state.fetching = false;
            match result {
                Ok(posts) => {
                    state.has_more = posts.len() == state.page_size;
                    state.posts = posts;
                    state.page = page;
                }
                Err(err) => state.error = Some(err.message()),
            }
        }
        BlogAction::CreateStarted => {
            state.creating = true;
            state.error = None;
        }
        BlogAction::CreateFinished(result) => {
            state.creating = false;
            match result {
                Ok(post) => state.posts.insert(0, post),
                Err(err) => state.error = Some(err.message()),
            }
        }
        BlogAction::UpdateStarted => state.updating = true,
        BlogAction::UpdateFinished(result) => {
            state.updating = false;
            match result {
                Ok(updated) => {
                    if let Some(post) = state.posts.iter_mut().find(|p| p.id == updated.id) {
                        post.title = updated.title;
                        post.content = updated.content;
                    }
                }
                Err(err) => state.error = Some(err.message()),
            }
        }
        BlogAction::SelectStarted => state.select_seq += 1,
        BlogAction::SelectFinished { seq, result } => {
            if seq != state.select_seq {
                return;
            }
            match result {
                Ok(post) => state.selected = Some(post),
                Err(err) => state.error = Some(err.message()),
            }
        }
        BlogAction::DeleteFinished(result) => match result {
            Ok(id) => {
                state.posts.retain(|p| p.id != id);
                if state.selected.as_ref().is_some_and(|p| p.id == id) {
                    state.selected = None;
                }
                state.error = None;
            }
            Err(err) => state.error = Some(err.message()),
        },
        BlogAction::PageChanged(page) => state.page = page,
    }
}
