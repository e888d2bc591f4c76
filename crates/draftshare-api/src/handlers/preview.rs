//! Public preview surface.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;

use draftshare_core::error::AppError;
use draftshare_core::types::DocumentId;
use draftshare_service::{PreviewGrant, PreviewOutcome};

use crate::error::ApiError;
use crate::state::AppState;

const NO_CACHE: &str = "no-cache, must-revalidate, max-age=0, no-store, private";
const EXPIRED_DATE: &str = "Wed, 11 Jan 1984 05:00:00 GMT";

/// GET /?p=<id>|page_id=<id>[&post_type=<type>]&preview=true&<token_param>=<token>[&page=N]
pub async fn open_preview(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let id = params
        .get("page_id")
        .or_else(|| params.get("p"))
        .and_then(|raw| raw.parse::<DocumentId>().ok())
        .ok_or_else(|| AppError::not_found("Nothing to preview"))?;

    if !params.get("preview").is_some_and(|v| !v.is_empty()) {
        return Err(AppError::not_found("Nothing to preview").into());
    }

    let token = params
        .get(state.authorizer.token_param())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::not_found("Nothing to preview"))?;

    let page = params
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(1);

    let now = Utc::now().timestamp();
    match state.authorizer.open_preview(id, token, now).await? {
        PreviewOutcome::Redirect { location } => {
            Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
        }
        PreviewOutcome::Render(grant) => Ok(render(&grant, page)),
    }
}

fn render(grant: &PreviewGrant, page: usize) -> Response {
    let document = &grant.document;
    let total = document.pages.len().max(1);
    let page = page.clamp(1, total);
    let body = document.pages.get(page - 1).map(String::as_str).unwrap_or_default();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    if grant.noindex {
        html.push_str("<meta name='robots' content='noindex, nofollow' />");
    }
    html.push_str(&format!("<title>{}</title></head>\n", escape(&document.title)));
    html.push_str(&format!(
        "<body class=\"status-{}\"><article><h1>{}</h1>\n{}\n</article>\n",
        escape(&document.status),
        escape(&document.title),
        body
    ));

    if total > 1 {
        html.push_str("<nav class=\"page-links\">");
        for n in 1..=total {
            if n == page {
                html.push_str(&format!("<span class=\"current\">{n}</span>"));
            } else {
                let link = format!("<a href=\"{}\">{n}</a>", escape(&document.permalink));
                html.push_str(&grant.rewrite_page_link(&link, n));
            }
        }
        html.push_str("</nav>\n");
    }
    html.push_str("</body></html>\n");

    let mut response = Html(html).into_response();
    let headers = response.headers_mut();
    if grant.noindex {
        headers.insert("x-robots-tag", HeaderValue::from_static("noindex"));
    }
    if grant.no_cache {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
        headers.insert(header::EXPIRES, HeaderValue::from_static(EXPIRED_DATE));
    }
    response
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
