//! Preview link construction.

use url::Url;

use draftshare_core::error::AppError;
use draftshare_core::types::{Document, DocumentType};

/// Builds preview URLs on the site base URL.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: Url,
    token_param: String,
}

impl LinkBuilder {
    /// Creates a builder. Fails if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, token_param: impl Into<String>) -> Result<Self, AppError> {
        let base = Url::parse(base_url)
            .map_err(|e| AppError::configuration(format!("Invalid preview base URL: {e}")))?;
        Ok(Self {
            base,
            token_param: token_param.into(),
        })
    }

    /// Name of the query parameter carrying the token.
    pub fn token_param(&self) -> &str {
        &self.token_param
    }

    /// Preview link for `document` carrying `token`.
    ///
    /// Pages are addressed by `page_id`, posts by `p`, and every other type
    /// by `p` plus `post_type`.
    pub fn build(&self, document: &Document, token: &str) -> Url {
        let mut url = self.base.clone();
        {
            let mut query = url.query_pairs_mut();
            let id = document.id.to_string();
            match &document.doc_type {
                DocumentType::Page => {
                    query.append_pair("page_id", &id);
                }
                DocumentType::Post => {
                    query.append_pair("p", &id);
                }
                DocumentType::Custom(name) => {
                    query.append_pair("p", &id);
                    query.append_pair("post_type", name);
                }
            }
            query.append_pair("preview", "true");
            query.append_pair(&self.token_param, token);
        }
        url
    }
}

/// `link` with its `page` parameter set to `page`.
pub fn with_page(link: &Url, page: usize) -> Url {
    let pairs: Vec<(String, String)> = link
        .query_pairs()
        .filter(|(key, _)| key != "page")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut url = link.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair("page", &page.to_string());
    url
}
