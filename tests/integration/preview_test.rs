//! Integration tests for the public preview surface.

mod helpers;

use axum::http::{StatusCode, header};
use uuid::Uuid;

use draftshare_core::traits::PolicySource;
use draftshare_core::types::ExpirationPolicy;

fn with_token(link: &url::Url, token: &str) -> url::Url {
    let pairs: Vec<(String, String)> = link
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "_mfpp" { token.to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    let mut tampered = link.clone();
    tampered.query_pairs_mut().clear().extend_pairs(pairs);
    tampered
}

#[tokio::test]
async fn test_registered_draft_renders() {
    let app = helpers::TestApp::new().await;
    let id = app.create_document(42, "post", "draft", Uuid::new_v4()).await;
    app.state.registry.enable(id).await.unwrap();

    let link = app.preview_link(id).await;
    assert!(link.as_str().starts_with("https://drafts.example.com/?p=42&preview=true&_mfpp="));

    let response = app.visit(&link).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("First page"));
    assert!(response.text.contains("status-publish"));
    assert!(response.text.contains("noindex"));

    assert_eq!(response.headers["x-robots-tag"], "noindex");
    let cache_control = response.headers[header::CACHE_CONTROL].to_str().unwrap();
    assert!(cache_control.contains("no-cache"));
    assert!(response.headers.contains_key(header::EXPIRES));
}

#[tokio::test]
async fn test_pagination_stays_inside_preview() {
    let app = helpers::TestApp::new().await;
    let id = app.create_document(7, "page", "pending", Uuid::new_v4()).await;
    app.state.registry.enable(id).await.unwrap();

    let link = app.preview_link(id).await;
    assert!(link.as_str().contains("page_id=7"));

    let first = app.visit(&link).await;
    assert_eq!(first.status, StatusCode::OK);
    assert!(first.text.contains("page_id=7"));
    assert!(first.text.contains("page=2"));
    assert!(!first.text.contains("href=\"https://drafts.example.com/draft-7/\""));

    let mut second = link.clone();
    second.query_pairs_mut().append_pair("page", "2");
    let response = app.visit(&second).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Second page"));
    assert!(!response.text.contains("First page"));
}

#[tokio::test]
async fn test_tampered_token_is_expired() {
    let app = helpers::TestApp::new().await;
    let id = app.create_document(42, "post", "draft", Uuid::new_v4()).await;
    app.state.registry.enable(id).await.unwrap();

    let link = with_token(&app.preview_link(id).await, "0000000000");
    let response = app.visit(&link).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.text, "This link has expired!");
}

#[tokio::test]
async fn test_token_for_other_document_is_expired() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let first = app.create_document(42, "post", "draft", author).await;
    let second = app.create_document(43, "post", "draft", author).await;
    app.state.registry.enable(first).await.unwrap();
    app.state.registry.enable(second).await.unwrap();

    let link = app.preview_link(first).await;
    let token = link
        .query_pairs()
        .find(|(k, _)| k == "_mfpp")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    let borrowed = with_token(&app.preview_link(second).await, &token);

    let response = app.visit(&borrowed).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unregistered_draft_is_refused() {
    let app = helpers::TestApp::new().await;
    let id = app.create_document(42, "post", "draft", Uuid::new_v4()).await;
    app.state.registry.enable(id).await.unwrap();
    let link = app.preview_link(id).await;

    app.state.registry.disable(id).await.unwrap();
    let response = app.visit(&link).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text, "No public draft preview available!");
}

#[tokio::test]
async fn test_published_document_redirects() {
    let app = helpers::TestApp::new().await;
    let id = app.create_document(42, "post", "draft", Uuid::new_v4()).await;
    app.state.registry.enable(id).await.unwrap();
    let link = app.preview_link(id).await;

    app.documents.set_status(id, "publish").await;
    let response = app.visit(&link).await;
    assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers[header::LOCATION],
        "https://drafts.example.com/draft-42/"
    );
}

#[tokio::test]
async fn test_policy_change_invalidates_links() {
    let app = helpers::TestApp::new().await;
    let id = app.create_document(42, "post", "draft", Uuid::new_v4()).await;
    app.state.registry.enable(id).await.unwrap();
    let link = app.preview_link(id).await;
    assert_eq!(app.visit(&link).await.status, StatusCode::OK);

    app.policy
        .update_policy(&ExpirationPolicy::parse(0, "00:01").unwrap())
        .await
        .unwrap();
    assert_eq!(app.visit(&link).await.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_non_preview_request_is_not_found() {
    let app = helpers::TestApp::new().await;
    app.create_document(42, "post", "draft", Uuid::new_v4()).await;

    let response = app.request("GET", "/?p=42", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/?p=42&preview=true", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
