use anyhow::Result;
use httpmock::prelude::*;
use pantry_client::auth::{InMemorySession, SessionTokenProvider};
use pantry_client::{ApiClient, ApiError, ClientConfig, NoToken};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_pantry_list_by_category_returns_body_verbatim() -> Result<()> {
    let server = MockServer::start_async().await;
    let body = json!([{"item_id": "1", "name": "Milk"}]);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/pantry/")
                .query_param("category", "produce");
            then.status(200).json_body(body.clone());
        })
        .await;

    let client = ApiClient::unauthenticated(&ClientConfig::new(server.base_url()))?;
    let result = client.pantry().list(Some("produce")).await?;

    mock.assert_async().await;
    assert_eq!(result, body);

    let items = client.pantry().list_items(Some("produce")).await?;
    assert_eq!(items[0].item_id, "1");
    assert_eq!(items[0].name, "Milk");
    assert_eq!(serde_json::to_value(&items)?, body);
    Ok(())
}

#[tokio::test]
async fn test_receipt_upload_not_found_uses_detail() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/receipts/upload");
            then.status(404).json_body(json!({"detail": "not found"}));
        })
        .await;

    let client = ApiClient::unauthenticated(&ClientConfig::new(server.base_url()))?;
    let err = client
        .receipts()
        .upload("aGVsbG8=", None)
        .await
        .expect_err("404 must fail");

    assert_eq!(err.to_string(), "not found");
    assert_eq!(err.status(), Some(404));
    Ok(())
}

#[tokio::test]
async fn test_me_without_session_reports_status_on_unparseable_401() -> Result<()> {
    let server = MockServer::start_async().await;
    let with_auth = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/auth/me")
                .header_exists("authorization");
            then.status(200).json_body(json!({"uid": "should-not-happen"}));
        })
        .await;
    let without_auth = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(401).body("Unauthorized");
        })
        .await;

    let tokens = Arc::new(SessionTokenProvider::<InMemorySession>::unconfigured());
    let client = ApiClient::new(&ClientConfig::new(server.base_url()), tokens)?;
    let err = client.auth().me().await.expect_err("401 must fail");

    assert!(matches!(err, ApiError::Http { status: 401, .. }));
    assert!(err.to_string().contains("401"));
    assert!(err.is_unauthorized());
    assert_eq!(with_auth.hits_async().await, 0);
    assert_eq!(without_auth.hits_async().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_session_token_is_read_per_request() -> Result<()> {
    let server = MockServer::start_async().await;
    let session = InMemorySession::new();
    let client = ApiClient::new(
        &ClientConfig::new(server.base_url()),
        Arc::new(SessionTokenProvider::new(session.clone())),
    )?;

    let mut anonymous = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(401).json_body(json!({"detail": "Missing authentication token"}));
        })
        .await;

    let err = client.auth().me().await.expect_err("anonymous call must fail");
    assert_eq!(err.to_string(), "Missing authentication token");
    anonymous.assert_async().await;
    anonymous.delete_async().await;

    let signed_in = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/auth/me")
                .header("authorization", "Bearer fresh-id-token");
            then.status(200).json_body(json!({"uid": "u1"}));
        })
        .await;

    session.sign_in("fresh-id-token").await;
    assert_eq!(client.auth().me().await?["uid"], "u1");

    // no mock matches a request without the header
    session.sign_out().await;
    let err = client.auth().me().await.expect_err("signed out call must fail");
    assert_eq!(err.status(), Some(404));

    assert_eq!(signed_in.hits_async().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_timeout_surfaces_as_transport_error() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/analytics/today");
            then.status(200)
                .delay(std::time::Duration::from_secs(3))
                .json_body(json!({}));
        })
        .await;

    let config = ClientConfig::new(server.base_url()).with_timeout_seconds(1);
    let client = ApiClient::new(&config, Arc::new(NoToken))?;
    let err = client.analytics().today().await.expect_err("must time out");

    match &err {
        ApiError::Transport(inner) => assert!(inner.is_timeout()),
        other => panic!("expected transport error, got {:?}", other),
    }
    Ok(())
}
