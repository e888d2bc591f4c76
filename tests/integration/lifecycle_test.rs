//! Integration tests for the save and status-transition hooks.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use draftshare_core::types::EditorRole;

#[tokio::test]
async fn test_save_with_checkbox_enables_preview() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let id = app.create_document(42, "post", "draft", author).await;
    let token = app.login(author, EditorRole::Author);

    let response = app
        .request(
            "POST",
            "/api/documents/42/saved",
            Some(json!({
                "share_draft_pages": true,
                "original_post_status": "draft",
                "form_token": app.form_token(author, id),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["outcome"], "enabled");
    assert_eq!(response.body["data"]["changed"], true);
    assert!(app.state.registry.is_enabled(id).await.unwrap());

    let response = app
        .request(
            "POST",
            "/api/documents/42/saved",
            Some(json!({
                "share_draft_pages": false,
                "original_post_status": "draft",
                "form_token": app.form_token(author, id),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.body["data"]["outcome"], "disabled");
    assert!(!app.state.registry.is_enabled(id).await.unwrap());
}

#[tokio::test]
async fn test_publishing_save_wins_over_checkbox() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let id = app.create_document(42, "post", "publish", author).await;
    let token = app.login(author, EditorRole::Author);

    let response = app
        .request(
            "POST",
            "/api/documents/42/saved",
            Some(json!({
                "share_draft_pages": true,
                "original_post_status": "draft",
                "form_token": app.form_token(author, id),
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["outcome"], "publish_superseded");
    assert!(response.body["data"]["warning"].is_string());
    assert!(app.store.raw_ids().await.is_empty());
}

#[tokio::test]
async fn test_autosave_leaves_registry_alone() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let id = app.create_document(42, "post", "draft", author).await;
    let token = app.login(author, EditorRole::Author);

    let response = app
        .request(
            "POST",
            "/api/documents/42/saved",
            Some(json!({
                "share_draft_pages": true,
                "form_token": app.form_token(author, id),
                "autosave": true,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["outcome"], "skipped");
    assert!(!app.state.registry.is_enabled(id).await.unwrap());
}

#[tokio::test]
async fn test_forged_save_rejected_but_trash_still_revokes() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let id = app.create_document(42, "post", "draft", author).await;
    let token = app.login(author, EditorRole::Author);
    app.state.registry.enable(id).await.unwrap();
    app.documents.set_status(id, "trash").await;

    let response = app
        .request(
            "POST",
            "/api/documents/42/saved",
            Some(json!({ "share_draft_pages": true, "form_token": "forged" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "ANTI_FORGERY");
    assert!(!app.state.registry.is_enabled(id).await.unwrap());
}

#[tokio::test]
async fn test_transition_to_publish_revokes_and_link_redirects() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let id = app.create_document(42, "post", "future", author).await;
    let token = app.login(author, EditorRole::Author);
    app.state.registry.enable(id).await.unwrap();
    let link = app.preview_link(id).await;

    let response = app
        .request(
            "POST",
            "/api/documents/42/transition",
            Some(json!({ "old_status": "draft", "new_status": "pending" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["revoked"], false);
    assert!(app.state.registry.is_enabled(id).await.unwrap());

    app.documents.set_status(id, "publish").await;
    let response = app
        .request(
            "POST",
            "/api/documents/42/transition",
            Some(json!({ "old_status": "future", "new_status": "publish" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["revoked"], true);
    assert!(app.store.raw_ids().await.is_empty());

    let visit = app.visit(&link).await;
    assert_eq!(visit.status, StatusCode::MOVED_PERMANENTLY);
}

#[tokio::test]
async fn test_transition_validation_and_bad_id() {
    let app = helpers::TestApp::new().await;
    let token = app.login(Uuid::new_v4(), EditorRole::Admin);

    let response = app
        .request(
            "POST",
            "/api/documents/42/transition",
            Some(json!({ "old_status": "draft", "new_status": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/documents/zero/transition",
            Some(json!({ "new_status": "publish" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
