//! HTTP client and shared payload types for the stub trading API.

mod client;
mod types;

pub use client::ApiClient;
pub use types::*;
