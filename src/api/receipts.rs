use crate::core::client::{ApiClient, RequestOptions};
use crate::domain::model::ReceiptUpload;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;

pub struct ReceiptsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReceiptsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Submits a receipt photo for OCR. The backend answers with the parsed
    /// receipt (store, items, totals).
    pub async fn upload(
        &self,
        image_base64: &str,
        purchase_date: Option<DateTime<Utc>>,
    ) -> Result<Value> {
        let body = ReceiptUpload {
            image_base64: image_base64.to_string(),
            purchase_date,
        };
        self.client
            .request("/api/receipts/upload", RequestOptions::post().json(&body)?)
            .await
    }

    pub async fn list(&self) -> Result<Value> {
        self.client
            .request("/api/receipts/", RequestOptions::get())
            .await
    }

    pub async fn get(&self, receipt_id: &str) -> Result<Value> {
        self.client
            .request(&format!("/api/receipts/{}", receipt_id), RequestOptions::get())
            .await
    }

    pub async fn update(&self, receipt_id: &str, data: Value) -> Result<Value> {
        self.client
            .request(
                &format!("/api/receipts/{}", receipt_id),
                RequestOptions::put().json_value(data),
            )
            .await
    }

    pub async fn delete(&self, receipt_id: &str) -> Result<Value> {
        self.client
            .request(
                &format!("/api/receipts/{}", receipt_id),
                RequestOptions::delete(),
            )
            .await
    }
}
