use crate::error::AnalyzeError;
use anyhow::{Context, Result};
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;
use url::Url;

/// Default user agent sent with every page fetch
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; MetaScout/1.0)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Common HTTP headers used for all requests
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Creates a reqwest client with browser-like headers and the given timeout and user agent
pub fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_static(ACCEPT_LANGUAGE),
    );

    let client = ClientBuilder::new()
        .user_agent(user_agent)
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(client)
}

/// Parses `url` and accepts it only for the http and https schemes
pub fn validate_url(url: &str) -> Result<Url, AnalyzeError> {
    if url.trim().is_empty() {
        return Err(AnalyzeError::MissingUrl);
    }

    let parsed = Url::parse(url).map_err(|_| AnalyzeError::InvalidUrl)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(AnalyzeError::InvalidUrl),
    }
}

/// Fetches the page body; any non-2xx status is reported as an upstream failure
pub async fn fetch_html(client: &Client, url: &Url) -> Result<String, AnalyzeError> {
    let response = client.get(url.as_str()).send().await?;
    let status = response.status();

    if !status.is_success() {
        tracing::warn!(url = %url, status = status.as_u16(), "Upstream returned an error status");
        return Err(AnalyzeError::Upstream {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown status").to_string(),
        });
    }

    if let Some(content_type) = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        let ct_lower = content_type.to_lowercase();
        if !ct_lower.contains("text/html") && !ct_lower.contains("application/xhtml") {
            tracing::warn!(
                url = %url,
                content_type = %content_type,
                "Non-HTML content type detected, parsing may fail"
            );
        }
    }

    Ok(response.text().await?)
}
