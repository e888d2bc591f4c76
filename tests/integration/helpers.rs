//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;
use uuid::Uuid;

use draftshare_api::{AppState, Collaborators, build_app};
use draftshare_auth::jwt::JwtEncoder;
use draftshare_auth::nonce::FormTokenGuard;
use draftshare_core::config::AppConfig;
use draftshare_core::types::{Document, DocumentId, DocumentType, EditorRole, ExpirationPolicy};
use draftshare_database::{MemoryDocumentSource, MemoryPolicySource, MemoryRegistryStore};

/// Test application backed by in-memory collaborators
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Application state, for calling services directly
    pub state: AppState,
    /// Application config
    pub config: AppConfig,
    /// Registry storage
    pub store: MemoryRegistryStore,
    /// Documents the app can see
    pub documents: MemoryDocumentSource,
    /// Expiration settings
    pub policy: MemoryPolicySource,
}

impl TestApp {
    /// Create a new test application with a one-day expiration policy
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "test-jwt-secret".to_string();
        config.auth.nonce_secret = "test-nonce-secret".to_string();
        config.auth.form_token_secret = "test-form-secret".to_string();
        config.preview.base_url = "https://drafts.example.com/".to_string();

        let store = MemoryRegistryStore::new();
        let documents = MemoryDocumentSource::new();
        let policy = MemoryPolicySource::new(
            ExpirationPolicy::parse(1, "00:00").expect("valid policy"),
        );

        let state = AppState::build(
            config.clone(),
            Collaborators {
                registry_store: Arc::new(store.clone()),
                documents: Arc::new(documents.clone()),
                policy: Arc::new(policy.clone()),
                db_pool: None,
            },
        )
        .expect("Failed to build state");

        Self {
            router: build_app(state.clone()),
            state,
            config,
            store,
            documents,
            policy,
        }
    }

    /// Insert a document and return its id
    pub async fn create_document(
        &self,
        raw_id: u64,
        doc_type: &str,
        status: &str,
        author: Uuid,
    ) -> DocumentId {
        let id = DocumentId::new(raw_id).expect("positive id");
        self.documents
            .insert(Document {
                id,
                doc_type: DocumentType::from(doc_type),
                status: status.to_string(),
                author_id: Some(author),
                title: format!("Draft {raw_id}"),
                permalink: format!("https://drafts.example.com/draft-{raw_id}/"),
                pages: vec!["<p>First page</p>".to_string(), "<p>Second page</p>".to_string()],
            })
            .await;
        id
    }

    /// Issue an editor access token
    pub fn login(&self, user_id: Uuid, role: EditorRole) -> String {
        JwtEncoder::new(&self.config.auth)
            .generate_access_token(user_id, role, "tester")
            .expect("Failed to issue token")
            .0
    }

    /// Anti-forgery token for `user_id` editing `id`
    pub fn form_token(&self, user_id: Uuid, id: DocumentId) -> String {
        FormTokenGuard::new(
            &self.config.auth.form_token_secret,
            self.config.auth.form_token_lifetime_seconds,
        )
        .expect("Failed to build form guard")
        .issue(user_id, id, Utc::now().timestamp())
    }

    /// A fresh preview link for `id`, as the editor would share it
    pub async fn preview_link(&self, id: DocumentId) -> Url {
        let document = self
            .state
            .documents
            .find_document(id)
            .await
            .expect("lookup")
            .expect("document exists");
        self.state
            .authorizer
            .build_link(&document, Utc::now().timestamp())
            .await
            .expect("Failed to build link")
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        self.send(req.body(Body::from(body_str)).expect("Failed to build request"))
            .await
    }

    /// Make a form-encoded POST to the test app
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)], token: &str) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// GET a preview URL the way a visitor would, keeping only path and query
    pub async fn visit(&self, link: &Url) -> TestResponse {
        let uri = match link.query() {
            Some(query) => format!("{}?{query}", link.path()),
            None => link.path().to_string(),
        };
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` for non-JSON responses
    pub body: Value,
    /// Raw body text
    pub text: String,
}
