pub mod client;

pub use crate::domain::ports::TokenProvider;
pub use crate::utils::error::Result;
pub use client::{ApiClient, RequestOptions};
