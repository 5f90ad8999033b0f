use super::*;
use crate::net::types::Post;
use uuid::Uuid;

fn owner() -> Uuid {
    "6cd7c29b-0313-4b8a-9e73-4a2b3d1f00aa".parse().unwrap()
}

fn post(id: i64, title: &str) -> Post {
    Post {
        id,
        title: title.to_owned(),
        content: format!("content {id}"),
        user_id: owner(),
        username: "writer".to_owned(),
        created_at: format!("2026-01-{:02}T12:00:00Z", id),
    }
}

fn fetched(state: &mut BlogState, page: u32, posts: Vec<Post>) {
    apply(state, BlogAction::FetchStarted);
    let seq = state.fetch_seq;
    apply(state, BlogAction::FetchFinished { seq, page, result: Ok(posts) });
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_starts_on_page_one_with_room_ahead() {
    let state = BlogState::default();
    assert!(state.posts.is_empty());
    assert_eq!(state.page, 1);
    assert_eq!(state.page_size, PAGE_SIZE);
    assert!(state.has_more);
    assert!(state.error.is_none());
    assert!(state.selected.is_none());
}

#[test]
fn default_has_nothing_in_flight() {
    let state = BlogState::default();
    assert!(!state.fetching);
    assert!(!state.creating);
    assert!(!state.updating);
}

// =============================================================
// List fetch lifecycle
// =============================================================

#[test]
fn fetch_started_marks_fetching_and_clears_error() {
    let mut state = BlogState { error: Some("old".to_owned()), ..BlogState::default() };
    apply(&mut state, BlogAction::FetchStarted);
    assert!(state.fetching);
    assert!(state.error.is_none());
}

#[test]
fn fetch_finished_replaces_posts_and_records_page() {
    let mut state = BlogState::default();
    fetched(&mut state, 2, vec![post(7, "seven"), post(6, "six")]);
    assert!(!state.fetching);
    assert_eq!(state.page, 2);
    assert_eq!(state.posts.len(), 2);
    assert_eq!(state.posts[0].id, 7);
}

#[test]
fn full_page_sets_has_more() {
    let mut state = BlogState::default();
    fetched(&mut state, 1, (1..=5).map(|id| post(id, "t")).collect());
    assert!(state.has_more);
}

#[test]
fn partial_page_clears_has_more() {
    let mut state = BlogState::default();
    fetched(&mut state, 2, vec![post(6, "six"), post(7, "seven")]);
    assert!(!state.has_more);
}

#[test]
fn empty_page_clears_has_more() {
    let mut state = BlogState::default();
    fetched(&mut state, 9, Vec::new());
    assert!(state.posts.is_empty());
    assert!(!state.has_more);
}

#[test]
fn seven_posts_paginate_as_five_then_two() {
    // pageSize 5, owner has 7 posts.
    let all: Vec<Post> = (1..=7).rev().map(|id| post(id, "t")).collect();
    let mut state = BlogState::default();

    fetched(&mut state, 1, all[..5].to_vec());
    assert_eq!(state.posts.len(), 5);
    assert!(state.has_more);

    apply(&mut state, BlogAction::PageChanged(2));
    fetched(&mut state, 2, all[5..].to_vec());
    assert_eq!(state.posts.len(), 2);
    assert!(!state.has_more);
}

#[test]
fn fetch_failure_surfaces_message_and_stops_fetching() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::FetchStarted);
    let seq = state.fetch_seq;
    apply(
        &mut state,
        BlogAction::FetchFinished { seq, page: 1, result: Err(Error::Remote("boom".to_owned())) },
    );
    assert!(!state.fetching);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn stale_fetch_completion_is_dropped() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::FetchStarted);
    let stale_seq = state.fetch_seq;
    // A newer fetch starts before the first one lands.
    apply(&mut state, BlogAction::FetchStarted);
    apply(
        &mut state,
        BlogAction::FetchFinished { seq: stale_seq, page: 1, result: Ok(vec![post(1, "old")]) },
    );
    assert!(state.posts.is_empty());
    assert!(state.fetching);

    let seq = state.fetch_seq;
    apply(&mut state, BlogAction::FetchFinished { seq, page: 1, result: Ok(vec![post(2, "new")]) });
    assert_eq!(state.posts[0].id, 2);
    assert!(!state.fetching);
}

// =============================================================
// Create lifecycle
// =============================================================

#[test]
fn create_started_marks_creating_and_clears_error() {
    let mut state = BlogState { error: Some("old".to_owned()), ..BlogState::default() };
    apply(&mut state, BlogAction::CreateStarted);
    assert!(state.creating);
    assert!(state.error.is_none());
}

#[test]
fn created_post_is_prepended_once() {
    let mut state = BlogState::default();
    fetched(&mut state, 1, vec![post(1, "old")]);
    apply(&mut state, BlogAction::CreateStarted);
    apply(&mut state, BlogAction::CreateFinished(Ok(post(2, "new"))));
    assert!(!state.creating);
    assert_eq!(state.posts.iter().filter(|p| p.id == 2).count(), 1);
    assert_eq!(state.posts[0].id, 2);
    assert_eq!(state.posts[1].id, 1);
}

#[test]
fn create_failure_surfaces_message() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::CreateStarted);
    apply(&mut state, BlogAction::CreateFinished(Err(Error::Unauthenticated)));
    assert!(!state.creating);
    assert_eq!(state.error.as_deref(), Some("User not authenticated"));
}

#[test]
fn create_in_flight_does_not_block_a_list_fetch() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::CreateStarted);
    apply(&mut state, BlogAction::FetchStarted);
    assert!(state.creating);
    assert!(state.fetching);

    let seq = state.fetch_seq;
    apply(&mut state, BlogAction::FetchFinished { seq, page: 1, result: Ok(vec![post(1, "t")]) });
    assert!(state.creating);
    assert!(!state.fetching);
}

// =============================================================
// Update lifecycle
// =============================================================

#[test]
fn update_started_keeps_the_prior_error() {
    let mut state = BlogState { error: Some("old".to_owned()), ..BlogState::default() };
    apply(&mut state, BlogAction::UpdateStarted);
    assert!(state.updating);
    assert_eq!(state.error.as_deref(), Some("old"));
}

#[test]
fn update_patches_title_and_content_only() {
    let mut state = BlogState::default();
    fetched(&mut state, 1, vec![post(1, "before"), post(2, "other")]);
    apply(&mut state, BlogAction::UpdateStarted);
    apply(
        &mut state,
        BlogAction::UpdateFinished(Ok(UpdatedPost {
            id: 1,
            title: "after".to_owned(),
            content: "rewritten".to_owned(),
        })),
    );
    assert!(!state.updating);
    let updated = state.posts.iter().find(|p| p.id == 1).unwrap();
    assert_eq!(updated.title, "after");
    assert_eq!(updated.content, "rewritten");
    // Owner and creation timestamp are untouched.
    assert_eq!(updated.user_id, owner());
    assert_eq!(updated.created_at, "2026-01-01T12:00:00Z");
    assert_eq!(state.posts[1].title, "other");
}

#[test]
fn update_of_a_post_not_in_the_page_is_a_no_op() {
    let mut state = BlogState::default();
    fetched(&mut state, 1, vec![post(1, "t")]);
    apply(
        &mut state,
        BlogAction::UpdateFinished(Ok(UpdatedPost {
            id: 99,
            title: "x".to_owned(),
            content: "y".to_owned(),
        })),
    );
    assert_eq!(state.posts[0].title, "t");
}

#[test]
fn update_failure_keeps_the_backend_text_verbatim() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::UpdateStarted);
    apply(
        &mut state,
        BlogAction::UpdateFinished(Err(Error::Remote("403 Forbidden: row policy".to_owned()))),
    );
    assert!(!state.updating);
    assert_eq!(state.error.as_deref(), Some("403 Forbidden: row policy"));
    assert!(crate::error::is_access_denied(state.error.as_deref().unwrap()));
}

// =============================================================
// Single-post fetch
// =============================================================

#[test]
fn select_finished_sets_selected() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::SelectStarted);
    let seq = state.select_seq;
    apply(&mut state, BlogAction::SelectFinished { seq, result: Ok(post(4, "picked")) });
    assert_eq!(state.selected.as_ref().unwrap().id, 4);
}

#[test]
fn select_failure_surfaces_message() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::SelectStarted);
    let seq = state.select_seq;
    apply(
        &mut state,
        BlogAction::SelectFinished { seq, result: Err(Error::Remote("not found".to_owned())) },
    );
    assert!(state.selected.is_none());
    assert_eq!(state.error.as_deref(), Some("not found"));
}

#[test]
fn stale_select_completion_is_dropped() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::SelectStarted);
    let stale_seq = state.select_seq;
    apply(&mut state, BlogAction::SelectStarted);
    apply(&mut state, BlogAction::SelectFinished { seq: stale_seq, result: Ok(post(1, "stale")) });
    assert!(state.selected.is_none());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_removes_the_post_from_the_page() {
    let mut state = BlogState::default();
    fetched(&mut state, 1, vec![post(1, "a"), post(2, "b")]);
    apply(&mut state, BlogAction::DeleteFinished(Ok(1)));
    assert_eq!(state.posts.len(), 1);
    assert_eq!(state.posts[0].id, 2);
}

#[test]
fn deleting_the_selected_post_clears_selection_and_error() {
    let mut state = BlogState {
        selected: Some(post(3, "picked")),
        error: Some("old".to_owned()),
        ..BlogState::default()
    };
    apply(&mut state, BlogAction::DeleteFinished(Ok(3)));
    assert!(state.selected.is_none());
    assert!(state.error.is_none());
}

#[test]
fn deleting_another_post_keeps_the_selection() {
    let mut state = BlogState { selected: Some(post(3, "picked")), ..BlogState::default() };
    apply(&mut state, BlogAction::DeleteFinished(Ok(4)));
    assert_eq!(state.selected.as_ref().unwrap().id, 3);
}

#[test]
fn delete_failure_surfaces_message() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::DeleteFinished(Err(Error::Remote("gone wrong".to_owned()))));
    assert_eq!(state.error.as_deref(), Some("gone wrong"));
}

// =============================================================
// Page changes
// =============================================================

#[test]
fn page_change_is_unclamped_and_fetches_nothing() {
    let mut state = BlogState::default();
    apply(&mut state, BlogAction::PageChanged(99));
    assert_eq!(state.page, 99);
    assert!(!state.fetching);
}
