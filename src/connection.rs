//! Authenticated transport shared by every client.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Method, Request};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Error, Result};
use crate::query::QueryParams;

/// Production API root.
pub const DEFAULT_URL: &str = "https://www.pivotaltracker.com/services/v5";

const TOKEN_HEADER: HeaderName = HeaderName::from_static("x-trackertoken");

const PAGINATION_TOTAL: &str = "x-tracker-pagination-total";
const PAGINATION_RETURNED: &str = "x-tracker-pagination-returned";
const PAGINATION_OFFSET: &str = "x-tracker-pagination-offset";

/// Counts describing a partial list response.
///
/// Endpoints that return a single resource send no pagination headers, which
/// leaves every field at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
    pub returned: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            total: header_count(headers, PAGINATION_TOTAL),
            returned: header_count(headers, PAGINATION_RETURNED),
            offset: header_count(headers, PAGINATION_OFFSET),
        }
    }
}

fn header_count(headers: &HeaderMap, name: &str) -> u64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// The API token and base URL every request is built from.
///
/// Nothing in a `Connection` changes after construction, so a single one can
/// be shared across tasks behind an `Arc`.
#[derive(Debug)]
pub struct Connection {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

impl Connection {
    pub fn new(token: SecretString) -> Self {
        Self::with_base_url(token, DEFAULT_URL)
    }

    /// The base URL is only validated when a request is built from it.
    pub fn with_base_url(token: SecretString, base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), token, base_url)
    }

    /// Uses a preconfigured `reqwest::Client`, e.g. one with a timeout or a
    /// proxy.
    pub fn with_client(
        client: reqwest::Client,
        token: SecretString,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            token,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds an authenticated request for `path` below the base URL.
    pub fn create_request(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
    ) -> Result<Request> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&raw)?;
        if !query.is_empty() {
            url.set_query(Some(&query.encode()));
        }

        let mut token = HeaderValue::from_str(self.token.expose_secret())?;
        token.set_sensitive(true);

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(TOKEN_HEADER, token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(request)
    }

    /// Sends `request` and decodes a JSON body into `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<(T, Pagination)> {
        let (body, pagination) = self.send(request).await?;
        let value = serde_json::from_str(&body)?;
        Ok((value, pagination))
    }

    /// Sends `request` and ignores whatever body comes back.
    pub async fn execute_without_body(&self, request: Request) -> Result<Pagination> {
        let (_, pagination) = self.send(request).await?;
        Ok(pagination)
    }

    #[instrument(skip_all, fields(method = %request.method(), path = %request.url().path()))]
    async fn send(&self, request: Request) -> Result<(String, Pagination)> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        let pagination = Pagination::from_headers(response.headers());
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(Error::Http { status, body });
        }

        Ok((body, pagination))
    }
}
