use crate::core::client::{ApiClient, RequestOptions};
use crate::domain::model::PushTokenRegistration;
use crate::utils::error::Result;
use serde_json::Value;

pub struct NotificationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NotificationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Project id the caller passes to the push service when requesting the
    /// token it then hands to [`register_device`](Self::register_device).
    pub fn push_project_id(&self) -> Option<&'a str> {
        self.client.push_project_id()
    }

    /// Lists notifications; the `unread_only` filter is only sent when set.
    pub async fn list(&self, unread_only: bool) -> Result<Value> {
        let options = if unread_only {
            RequestOptions::get().query("unread_only", true)
        } else {
            RequestOptions::get()
        };
        self.client.request("/api/notifications/", options).await
    }

    pub async fn mark_read(&self, notification_id: &str) -> Result<Value> {
        self.client
            .request(
                &format!("/api/notifications/{}/read", notification_id),
                RequestOptions::put(),
            )
            .await
    }

    pub async fn register_token(&self, expo_push_token: &str) -> Result<Value> {
        let body = PushTokenRegistration {
            expo_push_token: expo_push_token.to_string(),
        };
        self.client
            .request(
                "/api/notifications/register-token",
                RequestOptions::post().json(&body)?,
            )
            .await
    }

    /// Registers this device's push token at startup. A backend failure is
    /// logged and reported as `false`; it never aborts the caller.
    pub async fn register_device(&self, expo_push_token: &str) -> bool {
        match self.register_token(expo_push_token).await {
            Ok(_) => {
                tracing::info!("Push token registered with backend");
                true
            }
            Err(e) => {
                tracing::error!("Error registering push token: {}", e);
                false
            }
        }
    }

    pub async fn send_test(&self) -> Result<Value> {
        self.client
            .request("/api/notifications/test", RequestOptions::post())
            .await
    }
}
