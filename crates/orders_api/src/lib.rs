pub mod helpers;
pub mod supabase_orders_api;

pub use crate::supabase_orders_api::{ApiData, RetrySettings, SupabaseOrdersApi};
