//! Supabase REST client and wire DTOs.

pub mod supabase;
pub mod types;

pub use supabase::SupabaseClient;
