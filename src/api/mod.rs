//! One wrapper per backend resource group. Each method is a single call into
//! [`ApiClient::request`](crate::ApiClient::request) with a fixed endpoint.

pub mod analytics;
pub mod auth;
pub mod compare;
pub mod notifications;
pub mod pantry;
pub mod receipts;

pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use compare::CompareApi;
pub use notifications::NotificationsApi;
pub use pantry::PantryApi;
pub use receipts::ReceiptsApi;
