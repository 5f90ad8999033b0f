//! Wire DTOs for the Supabase auth and data endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the hosted service returns so serde handles
//! the whole boundary; nothing here is computed client-side except the
//! author label fallback.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// A blog post row from the `posts` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned row id.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub content: String,
    /// Owning user; immutable, set at creation from the authenticated identity.
    pub user_id: Uuid,
    /// Denormalized display label captured at creation time.
    #[serde(default)]
    pub username: String,
    /// Server-assigned creation timestamp (ISO-8601); immutable.
    pub created_at: String,
}

/// Insert body for a new post. The id and timestamp are server-assigned.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub username: String,
}

/// Patch body for an update; only title and content are client-mutable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
}

/// An authenticated user as returned by `/auth/v1/user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Sign-in email, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata recorded at sign-up.
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// The slice of sign-up metadata this client reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Display username chosen at registration.
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    /// Display label for authored posts: metadata username, else email.
    pub fn author_label(&self) -> String {
        self.user_metadata
            .username
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_default()
    }
}

/// A live credential state issued by the auth service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for authenticated requests.
    pub access_token: String,
    /// Token used to mint a fresh access token; unused by this client.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Absolute expiry in Unix seconds, when the service provides one.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// The identity this session belongs to.
    pub user: User,
}

/// Build the insert body for a new post, requiring an authenticated author.
///
/// # Errors
///
/// `Error::Unauthenticated` when no user is present; no insert request can
/// be built (or issued) without one.
pub fn new_post_for(user: Option<&User>, title: String, content: String) -> Result<NewPost, Error> {
    let user = user.ok_or(Error::Unauthenticated)?;
    Ok(NewPost {
        title,
        content,
        user_id: user.id,
        username: user.author_label(),
    })
}
