use crate::core::client::{ApiClient, RequestOptions};
use crate::domain::model::PantryItem;
use crate::utils::error::Result;
use serde_json::Value;

pub const DEFAULT_EXPIRING_DAYS: u32 = 3;

pub struct PantryApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PantryApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    fn list_options(category: Option<&str>) -> RequestOptions {
        match category {
            Some(category) if !category.is_empty() => {
                RequestOptions::get().query("category", category)
            }
            _ => RequestOptions::get(),
        }
    }

    pub async fn list(&self, category: Option<&str>) -> Result<Value> {
        self.client
            .request("/api/pantry/", Self::list_options(category))
            .await
    }

    pub async fn list_items(&self, category: Option<&str>) -> Result<Vec<PantryItem>> {
        self.client
            .request_as("/api/pantry/", Self::list_options(category))
            .await
    }

    /// Items expiring within `days` (3 when `None`).
    pub async fn expiring(&self, days: Option<u32>) -> Result<Value> {
        let days = days.unwrap_or(DEFAULT_EXPIRING_DAYS);
        self.client
            .request("/api/pantry/expiring", RequestOptions::get().query("days", days))
            .await
    }

    pub async fn expiring_items(&self, days: Option<u32>) -> Result<Vec<PantryItem>> {
        let days = days.unwrap_or(DEFAULT_EXPIRING_DAYS);
        self.client
            .request_as("/api/pantry/expiring", RequestOptions::get().query("days", days))
            .await
    }

    pub async fn add(&self, item: Value) -> Result<Value> {
        self.client
            .request("/api/pantry/", RequestOptions::post().json_value(item))
            .await
    }

    pub async fn update(&self, item_id: &str, data: Value) -> Result<Value> {
        self.client
            .request(
                &format!("/api/pantry/{}", item_id),
                RequestOptions::put().json_value(data),
            )
            .await
    }

    pub async fn consume(&self, item_id: &str) -> Result<Value> {
        self.client
            .request(
                &format!("/api/pantry/{}/consume", item_id),
                RequestOptions::post(),
            )
            .await
    }

    pub async fn delete(&self, item_id: &str) -> Result<Value> {
        self.client
            .request(&format!("/api/pantry/{}", item_id), RequestOptions::delete())
            .await
    }
}
