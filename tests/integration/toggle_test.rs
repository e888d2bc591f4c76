//! Integration tests for the editor preview toggle and panel.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

use draftshare_core::types::EditorRole;

#[tokio::test]
async fn test_toggle_on_then_off() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let id = app.create_document(42, "post", "draft", author).await;
    let token = app.login(author, EditorRole::Author);
    let nonce = app.form_token(author, id);

    let response = app
        .post_form(
            "/api/preview/toggle",
            &[("post_ID", "42"), ("checked", "true"), ("_wpnonce", &nonce)],
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "enabled");
    let preview_url = response.body["data"]["preview_url"].as_str().unwrap();
    assert!(preview_url.contains("p=42&preview=true&_mfpp="));
    assert_eq!(app.store.raw_ids().await, vec![42]);

    let visit = app.visit(&url::Url::parse(preview_url).unwrap()).await;
    assert_eq!(visit.status, StatusCode::OK);

    let response = app
        .post_form(
            "/api/preview/toggle",
            &[("post_ID", "42"), ("checked", "false"), ("_wpnonce", &nonce)],
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "disabled");
    assert!(app.store.raw_ids().await.is_empty());
}

#[tokio::test]
async fn test_toggle_error_codes() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let id = app.create_document(42, "post", "draft", author).await;
    let token = app.login(author, EditorRole::Author);
    let nonce = app.form_token(author, id);

    let response = app
        .post_form("/api/preview/toggle", &[("post_ID", "42")], &token)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["data"], "incomplete_data");

    let response = app
        .post_form(
            "/api/preview/toggle",
            &[("post_ID", "42"), ("checked", "true"), ("_wpnonce", "0123456789")],
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["data"], "invalid_nonce");

    let response = app
        .post_form(
            "/api/preview/toggle",
            &[("post_ID", "42"), ("checked", "false"), ("_wpnonce", &nonce)],
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["data"], "unknown_status");

    app.store.set_reject_saves(true);
    let response = app
        .post_form(
            "/api/preview/toggle",
            &[("post_ID", "42"), ("checked", "true"), ("_wpnonce", &nonce)],
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["data"], "not_saved");
}

#[tokio::test]
async fn test_toggle_requires_edit_rights() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let id = app.create_document(42, "post", "draft", author).await;

    let stranger = Uuid::new_v4();
    let token = app.login(stranger, EditorRole::Contributor);
    let nonce = app.form_token(stranger, id);

    let response = app
        .post_form(
            "/api/preview/toggle",
            &[("post_ID", "42"), ("checked", "true"), ("_wpnonce", &nonce)],
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["data"], "cannot_edit");

    let editor = Uuid::new_v4();
    let token = app.login(editor, EditorRole::Editor);
    let nonce = app.form_token(editor, id);
    let response = app
        .post_form(
            "/api/preview/toggle",
            &[("post_ID", "42"), ("checked", "true"), ("_wpnonce", &nonce)],
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_toggle_needs_editor_token() {
    let app = helpers::TestApp::new().await;
    let response = app
        .post_form(
            "/api/preview/toggle",
            &[("post_ID", "42"), ("checked", "true")],
            "not-a-jwt",
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_panel_and_registrations() {
    let app = helpers::TestApp::new().await;
    let author = Uuid::new_v4();
    let id = app.create_document(42, "post", "draft", author).await;
    let token = app.login(author, EditorRole::Author);

    let response = app
        .request("GET", "/api/documents/42/preview", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["enabled"], false);
    let nonce = response.body["data"]["form_token"].as_str().unwrap().to_string();

    let response = app
        .post_form(
            "/api/preview/toggle",
            &[("post_ID", "42"), ("checked", "true"), ("_wpnonce", &nonce)],
            &token,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/documents/42/preview", None, Some(&token))
        .await;
    assert_eq!(response.body["data"]["enabled"], true);
    assert!(response.body["data"]["preview_url"].is_string());

    let response = app
        .request("GET", "/api/preview/registrations", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["count"], 1);
    assert_eq!(response.body["data"]["document_ids"][0], id.get());
}

#[tokio::test]
async fn test_expiration_settings_admin_only() {
    let app = helpers::TestApp::new().await;
    let admin = app.login(Uuid::new_v4(), EditorRole::Admin);
    let author = app.login(Uuid::new_v4(), EditorRole::Author);

    let response = app
        .request("GET", "/api/settings/expiration", None, Some(&author))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            "/api/settings/expiration",
            Some(serde_json::json!({ "days": 3, "time_of_day": "06:30" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["days"], 3);
    assert_eq!(response.body["data"]["validity_span_seconds"], 3 * 86_400 + 6 * 3600 + 1800);

    let response = app
        .request(
            "PUT",
            "/api/settings/expiration",
            Some(serde_json::json!({ "days": 400, "time_of_day": "00:00" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
