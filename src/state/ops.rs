//! Asynchronous store operations against the Supabase client.
//!
//! Each operation dispatches its pending action, awaits the remote call,
//! and applies the tagged completion through the reducer. Operations whose
//! callers need to branch on settlement (create, update) also return the
//! outcome; the rest surface failures only through the shared error field.

use leptos::prelude::*;
use uuid::Uuid;

use super::blog::{BlogAction, BlogState, UpdatedPost, apply};
use crate::error::Error;
use crate::net::SupabaseClient;
use crate::net::types::{PostPatch, new_post_for};

/// Fetch the current page of the owner's posts into the store.
pub async fn fetch_posts(client: &SupabaseClient, blog: RwSignal<BlogState>, owner: Uuid) {
    blog.update(|s| apply(s, BlogAction::FetchStarted));
    let (seq, page, page_size) = blog.with_untracked(|s| (s.fetch_seq, s.page, s.page_size));
    let result = client.posts_for_owner(owner, page, page_size).await;
    blog.update(|s| apply(s, BlogAction::FetchFinished { seq, page, result }));
}

/// Create a post for the authenticated user and prepend it to the store.
///
/// # Errors
///
/// `Error::Unauthenticated` when no user is signed in (no insert is
/// issued), or `Error::Remote` from the backend. The same error also lands
/// in the shared error field.
pub async fn create_post(
    client: &SupabaseClient,
    blog: RwSignal<BlogState>,
    title: String,
    content: String,
) -> Result<(), Error> {
    blog.update(|s| apply(s, BlogAction::CreateStarted));
    let result = insert_new_post(client, title, content).await;
    let outcome = result.clone().map(|_| ());
    blog.update(|s| apply(s, BlogAction::CreateFinished(result)));
    outcome
}

async fn insert_new_post(
    client: &SupabaseClient,
    title: String,
    content: String,
) -> Result<crate::net::types::Post, Error> {
    let user = client.current_user().await;
    let new_post = new_post_for(user.as_ref(), title, content)?;
    let mut rows = client.insert_post(&new_post).await?;
    if rows.is_empty() {
        return Err(Error::Remote("insert returned no rows".to_owned()));
    }
    Ok(rows.remove(0))
}

/// Patch one post's title and content, mirroring the change into the store.
///
/// # Errors
///
/// `Error::Remote` carrying the backend's text verbatim, so the caller can
/// distinguish authorization denials from other failures.
pub async fn update_post(
    client: &SupabaseClient,
    blog: RwSignal<BlogState>,
    id: i64,
    title: String,
    content: String,
) -> Result<(), Error> {
    blog.update(|s| apply(s, BlogAction::UpdateStarted));
    let result = client
        .update_post(id, &PostPatch { title, content })
        .await
        .map(|post| UpdatedPost { id: post.id, title: post.title, content: post.content });
    let outcome = result.clone().map(|_| ());
    blog.update(|s| apply(s, BlogAction::UpdateFinished(result)));
    outcome
}

/// Load one post into the store's selection for the update view.
pub async fn select_post(client: &SupabaseClient, blog: RwSignal<BlogState>, id: i64) {
    blog.update(|s| apply(s, BlogAction::SelectStarted));
    let seq = blog.with_untracked(|s| s.select_seq);
    let result = client.post_by_id(id).await;
    blog.update(|s| apply(s, BlogAction::SelectFinished { seq, result }));
}

/// Delete one post and drop it from the store.
pub async fn delete_post(client: &SupabaseClient, blog: RwSignal<BlogState>, id: i64) {
    let result = client.delete_post(id).await.map(|()| id);
    blog.update(|s| apply(s, BlogAction::DeleteFinished(result)));
}
