use std::time::Duration;

use tracing::info;
use ureq::{http::header::CONTENT_TYPE, Agent};

use crate::error::FetchError;

pub trait Fetch {
    /// Performs exactly one request for `url` and returns the body as text.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

/// Content types that can carry an inline script. A response without a
/// `Content-Type` header is treated as text.
pub fn is_text_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/")
        || matches!(
            mime.as_str(),
            "application/xhtml+xml" | "application/xml" | "application/javascript"
        )
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        info!(url, "fetching maptiler source");
        let mut res = self
            .agent
            .get(url)
            .call()
            .map_err(|source| FetchError::Transport {
                url: url.into(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.into(),
                status: status.as_u16(),
            });
        }

        if let Some(content_type) = res.headers().get(CONTENT_TYPE) {
            let content_type = String::from_utf8_lossy(content_type.as_bytes()).into_owned();
            if !is_text_content_type(&content_type) {
                return Err(FetchError::ContentType {
                    url: url.into(),
                    content_type,
                });
            }
        }

        let body = res
            .body_mut()
            .read_to_string()
            .map_err(|source| FetchError::Body {
                url: url.into(),
                source,
            })?;
        info!(url, bytes = body.len(), "fetched maptiler source");
        Ok(body)
    }
}
