//! Session persistence in `localStorage`.
//!
//! The stored session is the only state that survives a reload. Reads drop
//! expired sessions so guards never trust a dead token. Requires a browser
//! environment; host builds only see the expiry predicate.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

#[cfg(feature = "csr")]
use crate::net::types::Session;

#[cfg(feature = "csr")]
const SESSION_KEY: &str = "blogs.session";

/// True when a session expiry is at or before `now_secs`. Sessions without
/// a recorded expiry are treated as live; the backend still rejects a stale
/// token on use.
pub fn session_is_expired(expires_at: Option<i64>, now_secs: i64) -> bool {
    expires_at.is_some_and(|at| at <= now_secs)
}

/// Persist the session for later mounts and reloads.
#[cfg(feature = "csr")]
pub fn store_session(session: &Session) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(json) = serde_json::to_string(session) {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
    }
}

/// Read the stored session, dropping it when expired or unparseable.
#[cfg(feature = "csr")]
pub fn load_session() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(SESSION_KEY).ok()??;
    let Ok(session) = serde_json::from_str::<Session>(&json) else {
        let _ = storage.remove_item(SESSION_KEY);
        return None;
    };
    let now_secs = (js_sys::Date::now() / 1000.0) as i64;
    if session_is_expired(session.expires_at, now_secs) {
        let _ = storage.remove_item(SESSION_KEY);
        return None;
    }
    Some(session)
}

/// Forget the stored session.
#[cfg(feature = "csr")]
pub fn clear_session() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
