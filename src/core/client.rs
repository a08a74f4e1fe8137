use crate::api::{AnalyticsApi, AuthApi, CompareApi, NotificationsApi, PantryApi, ReceiptsApi};
use crate::auth::NoToken;
use crate::config::ClientConfig;
use crate::domain::ports::TokenProvider;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::Validate;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Method, extra headers, query parameters and JSON body of one call.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json_value(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json<T: Serialize>(self, body: &T) -> Result<Self> {
        Ok(self.json_value(serde_json::to_value(body)?))
    }
}

/// Authenticated JSON client for the pantry backend.
///
/// Cheap to clone; clones share the connection pool and token provider.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    push_project_id: Option<String>,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("push_project_id", &self.push_project_id)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.normalized_base_url().to_string(),
            push_project_id: config.push_project_id.clone(),
            tokens,
        })
    }

    /// Client that never sends an `Authorization` header.
    pub fn unauthenticated(config: &ClientConfig) -> Result<Self> {
        Self::new(config, Arc::new(NoToken))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Project id to request this device's push token with, if configured.
    pub fn push_project_id(&self) -> Option<&str> {
        self.push_project_id.as_deref()
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Sends one request to `base_url + endpoint` and returns the JSON body.
    ///
    /// Non-2xx answers become [`ApiError::Http`] carrying the backend's error
    /// message. A `204 No Content` yields `Value::Null`.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value> {
        let token = self.tokens.current_token().await;
        let headers = build_headers(options.headers, token.as_deref());
        let url = self.url_for(endpoint);

        tracing::debug!(
            "📡 {} {} (authenticated: {})",
            options.method,
            url,
            headers.contains_key(AUTHORIZATION)
        );

        let mut request = self.http.request(options.method, &url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        tracing::debug!("📡 {} responded with {}", url, response.status());

        read_json(response).await
    }

    /// Like [`request`](Self::request), decoding the body into `T`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let value = self.request(endpoint, options).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn receipts(&self) -> ReceiptsApi<'_> {
        ReceiptsApi::new(self)
    }

    pub fn pantry(&self) -> PantryApi<'_> {
        PantryApi::new(self)
    }

    pub fn compare(&self) -> CompareApi<'_> {
        CompareApi::new(self)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(self)
    }

    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi::new(self)
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }
}

/// JSON content type first, caller headers on top, bearer token last.
///
/// A token that is blank or not a valid header value is dropped, same as
/// having no token at all.
fn build_headers(extra: HeaderMap, token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in extra.iter() {
        headers.insert(name.clone(), value.clone());
    }

    let token = token.map(str::trim).filter(|t| !t.is_empty());
    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => {
                tracing::warn!("Token is not a valid header value, continuing without token: {}", e);
            }
        }
    }

    headers
}

async fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = error_message(status, &body);
        tracing::debug!("❌ Request failed with {}: {}", status.as_u16(), message);
        return Err(ApiError::Http {
            status: status.as_u16(),
            message,
        });
    }

    if status == StatusCode::NO_CONTENT && body.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&body)?)
}

/// Human-readable message for a failed response.
///
/// Prefers the backend's `detail` field, then `message`. Every fallback names
/// the status code.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let code = status.as_u16();

    let parsed: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return format!("Request failed (HTTP {})", code),
    };

    let field = parsed
        .get("detail")
        .filter(|v| !v.is_null())
        .or_else(|| parsed.get("message").filter(|v| !v.is_null()));

    match field {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::String(_)) | None => format!("HTTP {}", code),
        Some(other) => other.to_string(),
    }
}
