pub mod api;
pub mod auth;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use auth::{InMemorySession, NoToken, SessionTokenProvider, StaticToken};
pub use config::ClientConfig;
pub use core::{ApiClient, RequestOptions};
pub use domain::ports::{IdentitySession, TokenProvider};
pub use utils::error::{ApiError, Result};
