//! Page-level views, one per navigable route.

pub mod create_post;
pub mod home;
pub mod login;
pub mod register;
pub mod update_post;
