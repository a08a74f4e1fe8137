use crate::core::client::{ApiClient, RequestOptions};
use crate::utils::error::Result;
use serde_json::Value;

pub const DEFAULT_TREND_DAYS: u32 = 14;

pub struct AnalyticsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AnalyticsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Daily spending series over the last `days` (14 when `None`).
    pub async fn spending(&self, days: Option<u32>) -> Result<Value> {
        let days = days.unwrap_or(DEFAULT_TREND_DAYS);
        self.client
            .request(
                "/api/analytics/spending",
                RequestOptions::get().query("days", days),
            )
            .await
    }

    pub async fn calories(&self, days: Option<u32>) -> Result<Value> {
        let days = days.unwrap_or(DEFAULT_TREND_DAYS);
        self.client
            .request(
                "/api/analytics/calories",
                RequestOptions::get().query("days", days),
            )
            .await
    }

    pub async fn waste(&self) -> Result<Value> {
        self.client
            .request("/api/analytics/waste", RequestOptions::get())
            .await
    }

    pub async fn savings(&self) -> Result<Value> {
        self.client
            .request("/api/analytics/savings", RequestOptions::get())
            .await
    }

    pub async fn today(&self) -> Result<Value> {
        self.client
            .request("/api/analytics/today", RequestOptions::get())
            .await
    }
}
