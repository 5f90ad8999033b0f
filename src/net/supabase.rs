//! REST client for the Supabase auth and data endpoints.
//!
//! Browser builds issue real HTTP calls via `gloo-net`; the request-shaping
//! helpers below are pure so they stay host-testable.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response is folded into `Error::Remote` carrying the
//! message text the backend supplied, so callers can show it verbatim and
//! the update flow can substring-match authorization denials.

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use serde::Deserialize;
use uuid::Uuid;

#[cfg(feature = "csr")]
use super::types::{NewPost, Post, PostPatch, Session, User};
use crate::config::Config;
#[cfg(feature = "csr")]
use crate::error::Error;

/// Thin handle over the Supabase REST surface.
///
/// Holds only the project URL and anon key; the session token is read from
/// local storage per request so every handle sees the same identity.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.supabase_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.url)
    }

    fn posts_endpoint(&self, query: &str) -> String {
        format!("{}/rest/v1/posts?{query}", self.url)
    }
}

/// Zero-based inclusive item window for a 1-based page number.
fn page_range(page: u32, page_size: usize) -> (usize, usize) {
    let from = (page.saturating_sub(1) as usize) * page_size;
    (from, from + page_size - 1)
}

/// `Range` header value in PostgREST item units.
fn range_header(from: usize, to: usize) -> String {
    format!("{from}-{to}")
}

/// Query string for one owner's posts, most recent first.
fn owner_posts_query(owner: Uuid) -> String {
    format!("select=*&user_id=eq.{owner}&order=created_at.desc")
}

/// Query string selecting a single post row.
fn post_by_id_query(id: i64) -> String {
    format!("select=*&id=eq.{id}")
}

/// Filter string for writes scoped to one row.
fn id_filter(id: i64) -> String {
    format!("id=eq.{id}")
}

/// Extract a human-readable message from a Supabase error body.
///
/// The auth and data services disagree on the field name (`message`, `msg`,
/// `error_description`), so take whichever is present and fall back to the
/// HTTP status.
fn remote_error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        msg: Option<String>,
        error_description: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed
            .message
            .or(parsed.msg)
            .or(parsed.error_description)
            .filter(|m| !m.is_empty())
        {
            return message;
        }
    }
    format!("request failed: {status}")
}

#[cfg(feature = "csr")]
fn to_remote(err: gloo_net::Error) -> Error {
    Error::Remote(err.to_string())
}

#[cfg(feature = "csr")]
async fn into_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, Error> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Remote(remote_error_message(status, &body)));
    }
    resp.json::<T>().await.map_err(to_remote)
}

#[cfg(feature = "csr")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), Error> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Remote(remote_error_message(status, &body)));
    }
    Ok(())
}

#[cfg(feature = "csr")]
impl SupabaseClient {
    fn bearer(&self) -> Option<String> {
        crate::util::persist::load_session().map(|s| format!("Bearer {}", s.access_token))
    }

    fn authed(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        let builder = builder.header("apikey", &self.anon_key);
        match self.bearer() {
            Some(bearer) => builder.header("Authorization", &bearer),
            None => builder,
        }
    }

    /// Sign in with email and password; persists the returned session.
    ///
    /// # Errors
    ///
    /// `Error::Remote` with the backend's message on bad credentials or
    /// network failure.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, Error> {
        let url = format!("{}?grant_type=password", self.auth_endpoint("token"));
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(to_remote)?
            .send()
            .await
            .map_err(to_remote)?;
        let session: Session = into_json(resp).await?;
        crate::util::persist::store_session(&session);
        Ok(session)
    }

    /// Register a new account, recording the display username as metadata.
    ///
    /// Returns the session when the project auto-confirms sign-ups, `None`
    /// when confirmation is pending.
    ///
    /// # Errors
    ///
    /// `Error::Remote` with the backend's message.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<Option<Session>, Error> {
        let resp = gloo_net::http::Request::post(&self.auth_endpoint("signup"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "data": { "username": username }
            }))
            .map_err(to_remote)?
            .send()
            .await
            .map_err(to_remote)?;
        let body: serde_json::Value = into_json(resp).await?;
        if body.get("access_token").is_some() {
            let session: Session = serde_json::from_value(body).map_err(|e| Error::Remote(e.to_string()))?;
            crate::util::persist::store_session(&session);
            return Ok(Some(session));
        }
        Ok(None)
    }

    /// Revoke the session server-side and drop the stored copy. Best effort;
    /// the local session is cleared even when the revoke call fails.
    pub async fn sign_out(&self) {
        if let Some(bearer) = self.bearer() {
            let _ = gloo_net::http::Request::post(&self.auth_endpoint("logout"))
                .header("apikey", &self.anon_key)
                .header("Authorization", &bearer)
                .send()
                .await;
        }
        crate::util::persist::clear_session();
    }

    /// The persisted session, if one exists and has not expired.
    pub fn current_session(&self) -> Option<Session> {
        crate::util::persist::load_session()
    }

    /// Fetch the authenticated user from the auth service.
    /// Returns `None` when no session is stored or the token is rejected.
    pub async fn current_user(&self) -> Option<User> {
        let bearer = self.bearer()?;
        let resp = gloo_net::http::Request::get(&self.auth_endpoint("user"))
            .header("apikey", &self.anon_key)
            .header("Authorization", &bearer)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }

    /// One page of the owner's posts, most recent first.
    ///
    /// # Errors
    ///
    /// `Error::Remote` with the backend's message.
    pub async fn posts_for_owner(
        &self,
        owner: Uuid,
        page: u32,
        page_size: usize,
    ) -> Result<Vec<Post>, Error> {
        let (from, to) = page_range(page, page_size);
        let url = self.posts_endpoint(&owner_posts_query(owner));
        let resp = self
            .authed(gloo_net::http::Request::get(&url))
            .header("Range-Unit", "items")
            .header("Range", &range_header(from, to))
            .send()
            .await
            .map_err(to_remote)?;
        into_json(resp).await
    }

    /// Fetch a single post by id.
    ///
    /// # Errors
    ///
    /// `Error::Remote` when the row is absent, hidden by row policy, or the
    /// request fails.
    pub async fn post_by_id(&self, id: i64) -> Result<Post, Error> {
        let url = self.posts_endpoint(&post_by_id_query(id));
        let resp = self
            .authed(gloo_net::http::Request::get(&url))
            .header("Accept", "application/vnd.pgrst.object+json")
            .send()
            .await
            .map_err(to_remote)?;
        into_json(resp).await
    }

    /// Insert a new post and return the created row(s).
    ///
    /// # Errors
    ///
    /// `Error::Remote` with the backend's message.
    pub async fn insert_post(&self, new_post: &NewPost) -> Result<Vec<Post>, Error> {
        let url = format!("{}/rest/v1/posts", self.url);
        let resp = self
            .authed(gloo_net::http::Request::post(&url))
            .header("Prefer", "return=representation")
            .json(new_post)
            .map_err(to_remote)?
            .send()
            .await
            .map_err(to_remote)?;
        into_json(resp).await
    }

    /// Patch title/content of one post and return the updated row.
    ///
    /// # Errors
    ///
    /// `Error::Remote` carrying the backend's text verbatim; row-policy
    /// rejections surface here for the caller to classify.
    pub async fn update_post(&self, id: i64, patch: &PostPatch) -> Result<Post, Error> {
        let url = self.posts_endpoint(&id_filter(id));
        let resp = self
            .authed(gloo_net::http::Request::patch(&url))
            .header("Prefer", "return=representation")
            .header("Accept", "application/vnd.pgrst.object+json")
            .json(patch)
            .map_err(to_remote)?
            .send()
            .await
            .map_err(to_remote)?;
        into_json(resp).await
    }

    /// Delete one post by id.
    ///
    /// # Errors
    ///
    /// `Error::Remote` with the backend's message.
    pub async fn delete_post(&self, id: i64) -> Result<(), Error> {
        let url = self.posts_endpoint(&id_filter(id));
        let resp = self
            .authed(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(to_remote)?;
        expect_ok(resp).await
    }
}
