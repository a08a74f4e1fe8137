use crate::core::client::{ApiClient, RequestOptions};
use crate::utils::error::Result;
use serde_json::Value;

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn setup_profile(&self, preferences: Value) -> Result<Value> {
        self.client
            .request(
                "/api/auth/setup-profile",
                RequestOptions::post().json_value(preferences),
            )
            .await
    }

    pub async fn me(&self) -> Result<Value> {
        self.client
            .request("/api/auth/me", RequestOptions::get())
            .await
    }

    pub async fn update_profile(&self, data: Value) -> Result<Value> {
        self.client
            .request(
                "/api/auth/profile",
                RequestOptions::put().json_value(data),
            )
            .await
    }
}
