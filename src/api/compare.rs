use crate::core::client::{ApiClient, RequestOptions};
use crate::domain::model::{ComparisonRequest, ComparisonResponse, DeliveryItem};
use crate::utils::error::Result;
use serde_json::Value;

pub struct CompareApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CompareApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    fn analyze_options(
        delivery_item: &DeliveryItem,
        image_base64: Option<&str>,
    ) -> Result<RequestOptions> {
        let body = ComparisonRequest {
            delivery_item: delivery_item.clone(),
            image_base64: image_base64.map(str::to_string),
        };
        RequestOptions::post().json(&body)
    }

    pub async fn analyze(
        &self,
        delivery_item: &DeliveryItem,
        image_base64: Option<&str>,
    ) -> Result<Value> {
        self.client
            .request(
                "/api/compare/analyze",
                Self::analyze_options(delivery_item, image_base64)?,
            )
            .await
    }

    /// [`analyze`](Self::analyze) decoded into the savings/calorie view the
    /// comparison card renders.
    pub async fn analyze_typed(
        &self,
        delivery_item: &DeliveryItem,
        image_base64: Option<&str>,
    ) -> Result<ComparisonResponse> {
        self.client
            .request_as(
                "/api/compare/analyze",
                Self::analyze_options(delivery_item, image_base64)?,
            )
            .await
    }

    pub async fn history(&self) -> Result<Value> {
        self.client
            .request("/api/compare/history", RequestOptions::get())
            .await
    }

    pub async fn get(&self, comparison_id: &str) -> Result<Value> {
        self.client
            .request(
                &format!("/api/compare/{}", comparison_id),
                RequestOptions::get(),
            )
            .await
    }
}
