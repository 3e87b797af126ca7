//! Integration tests for the API client against a mocked server.

use rice_fetcher::{Error, PostSource, RedditApi};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "token_type": "bearer",
            "expires_in": 3600,
        })))
        .mount(server)
        .await;
}

async fn connect(server: &MockServer) -> Result<RedditApi, Error> {
    RedditApi::with_endpoints(
        "id",
        "secret",
        "rice-fetcher-tests/1.0",
        &format!("{}/api/v1/access_token", server.uri()),
        &server.uri(),
    )
    .await
}

#[tokio::test]
async fn test_rejected_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/access_token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = connect(&server).await;
    assert!(matches!(result, Err(Error::Authentication(_))));
}

#[tokio::test]
async fn test_get_post_decodes_listing() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/by_id/t3_q1w2e3"))
        .and(header("authorization", "bearer tok"))
        .and(header("user-agent", "rice-fetcher-tests/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "Listing",
            "data": {
                "children": [{
                    "kind": "t3",
                    "data": {
                        "id": "q1w2e3",
                        "author": "bob",
                        "title": "[dwm] minimal",
                        "permalink": "/r/unixporn/comments/q1w2e3/dwm_minimal/",
                        "created_utc": 1650000000.0,
                        "score": 77,
                        "num_comments": 5,
                        "selftext": "",
                        "url": "https://i.redd.it/q1w2e3.png",
                        "is_gallery": null,
                        "unknown_field": { "ignored": true },
                    }
                }]
            }
        })))
        .mount(&server)
        .await;

    let api = connect(&server).await.unwrap();
    let post = api.get_post("q1w2e3").await.unwrap();

    assert_eq!(post.id, "q1w2e3");
    assert_eq!(post.author.as_deref(), Some("bob"));
    assert_eq!(post.score, 77);
    assert_eq!(post.url.as_deref(), Some("https://i.redd.it/q1w2e3.png"));
    assert!(!post.is_gallery());
}

#[tokio::test]
async fn test_get_post_empty_listing() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/by_id/t3_missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "Listing",
            "data": { "children": [] }
        })))
        .mount(&server)
        .await;

    let api = connect(&server).await.unwrap();
    let result = api.get_post("missing").await;

    assert!(matches!(result, Err(Error::PostNotFound(id)) if id == "missing"));
}

#[tokio::test]
async fn test_get_post_server_error() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/by_id/t3_boom"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = connect(&server).await.unwrap();
    let result = api.get_post("boom").await;

    assert!(matches!(result, Err(Error::Api(_))));
}
