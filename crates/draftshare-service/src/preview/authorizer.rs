//! Preview link issuance and inbound preview authorization.

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use draftshare_auth::nonce::{TokenCodec, Verification};
use draftshare_core::error::AppError;
use draftshare_core::result::AppResult;
use draftshare_core::traits::{DocumentSource, PolicySource};
use draftshare_core::types::document::PUBLISH_STATUS;
use draftshare_core::types::{Document, DocumentId, PublishedStatuses};

use super::link::{LinkBuilder, with_page};
use super::pagination::rewrite_hrefs;
use super::registry::AccessRegistry;

/// Prefix of the token context for a document's preview links.
pub const PREVIEW_CONTEXT_PREFIX: &str = "share_draft_pages_";

/// Outcome of checking an inbound preview request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// Token accepted and document registered.
    Allowed(Verification),
    /// Token did not verify.
    Expired,
    /// Token verified but the document is not registered.
    NotRegistered,
}

/// How the visitor's preview request is answered.
#[derive(Debug, Clone)]
pub enum PreviewOutcome {
    /// The document has gone live; send the visitor to its permalink.
    Redirect {
        /// Published address.
        location: String,
    },
    /// Render the draft.
    Render(PreviewGrant),
}

/// A draft cleared for rendering, with the overrides that apply to it.
#[derive(Debug, Clone)]
pub struct PreviewGrant {
    /// The document, with its status overridden to `publish`. The stored
    /// status is untouched.
    pub document: Document,
    /// Which tick the token matched.
    pub verification: Verification,
    /// Preview link the pagination links point to.
    pub link: Url,
    /// Comments and pings are closed on previews.
    pub comments_open: bool,
    /// Previews must not be indexed.
    pub noindex: bool,
    /// Previews must not be cached.
    pub no_cache: bool,
}

impl PreviewGrant {
    /// Preview link for page `page` of a paginated document.
    pub fn page_link(&self, page: usize) -> Url {
        with_page(&self.link, page)
    }

    /// Rewrite a rendered pagination link for page `page` so it stays
    /// inside the preview.
    pub fn rewrite_page_link(&self, html: &str, page: usize) -> String {
        rewrite_hrefs(html, self.page_link(page).as_str())
    }
}

/// Issues preview links and decides inbound preview requests.
#[derive(Debug, Clone)]
pub struct PreviewAuthorizer {
    codec: TokenCodec,
    registry: AccessRegistry,
    documents: Arc<dyn DocumentSource>,
    policy: Arc<dyn PolicySource>,
    links: LinkBuilder,
    published: PublishedStatuses,
}

impl PreviewAuthorizer {
    /// Creates a new authorizer.
    pub fn new(
        codec: TokenCodec,
        registry: AccessRegistry,
        documents: Arc<dyn DocumentSource>,
        policy: Arc<dyn PolicySource>,
        links: LinkBuilder,
        published: PublishedStatuses,
    ) -> Self {
        Self {
            codec,
            registry,
            documents,
            policy,
            links,
            published,
        }
    }

    /// Name of the query parameter carrying the token.
    pub fn token_param(&self) -> &str {
        self.links.token_param()
    }

    /// A fresh preview link for `document`.
    pub async fn build_link(&self, document: &Document, now: i64) -> AppResult<Url> {
        let policy = self.policy.current_policy().await?;
        let token = self.codec.issue(&context(document.id), &policy, now);
        Ok(self.links.build(document, &token))
    }

    /// Check `token` for `id`, then the registry.
    pub async fn authorize(&self, id: DocumentId, token: &str, now: i64) -> AppResult<Authorization> {
        let verification = self.verify_token(id, token, now).await?;
        if !verification.is_valid() {
            return Ok(Authorization::Expired);
        }
        if !self.registry.is_enabled(id).await? {
            return Ok(Authorization::NotRegistered);
        }
        Ok(Authorization::Allowed(verification))
    }

    /// Answer a visitor's preview request.
    ///
    /// An invalid token fails with `LinkExpired`. A valid token for a
    /// document that has since been published redirects to the permalink,
    /// whether or not it is still registered. Otherwise an unregistered
    /// document fails with `NotRegistered`.
    pub async fn open_preview(
        &self,
        id: DocumentId,
        token: &str,
        now: i64,
    ) -> AppResult<PreviewOutcome> {
        let verification = match self.authorize(id, token, now).await? {
            Authorization::Expired => {
                info!(document_id = %id, "Preview token rejected");
                return Err(AppError::link_expired());
            }
            Authorization::NotRegistered => None,
            Authorization::Allowed(verification) => Some(verification),
        };

        let Some(document) = self.documents.find_document(id).await? else {
            warn!(document_id = %id, "Preview requested for unknown document");
            return Err(AppError::not_registered());
        };

        if self.published.contains(&document.status) {
            debug!(document_id = %id, "Document is live, redirecting to permalink");
            return Ok(PreviewOutcome::Redirect {
                location: document.permalink,
            });
        }

        let Some(verification) = verification else {
            info!(document_id = %id, "Preview requested for unregistered document");
            return Err(AppError::not_registered());
        };

        let link = self.build_link(&document, now).await?;
        let mut document = document;
        document.status = PUBLISH_STATUS.to_string();

        debug!(document_id = %id, ?verification, "Serving public preview");
        Ok(PreviewOutcome::Render(PreviewGrant {
            document,
            verification,
            link,
            comments_open: false,
            noindex: true,
            no_cache: true,
        }))
    }

    async fn verify_token(&self, id: DocumentId, token: &str, now: i64) -> AppResult<Verification> {
        let policy = self.policy.current_policy().await?;
        Ok(self.codec.verify(token, &context(id), &policy, now))
    }
}

fn context(id: DocumentId) -> String {
    format!("{PREVIEW_CONTEXT_PREFIX}{id}")
}
