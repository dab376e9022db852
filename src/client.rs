use anyhow::Context;
use reqwest::{Client, Method, RequestBuilder};

use crate::errors::ApiError;

pub const BASE_URL_ENV: &str = "RECIPE_API_URL";

/// Credentialed HTTP client. The cookie store carries the session cookie, so
/// every request after login is authenticated the way the backend expects.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(ApiClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV)
            .with_context(|| format!("{BASE_URL_ENV} must be set"))?;
        Self::new(base_url).context("failed to build HTTP client")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }
}
