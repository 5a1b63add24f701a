//! Shared HTTP client for the platform's web endpoints.

use std::time::Duration;

use reqwest::{header, Client, Response};

use crate::api::types::{MediaListingResponse, TimelineMedia};
use crate::config::Config;
use crate::error::{Error, Result};

/// Platform root every request is issued against.
pub const PLATFORM_ROOT: &str = "https://www.instagram.com";

/// HTTP client carrying the session cookie, fixed user agent, optional
/// proxy, and the per-request timeout. Built once per run and shared
/// read-only by the extractor, the paginator, and every download worker.
pub struct InstagramApi {
    client: Client,
    root: String,
    session_id: String,
}

impl InstagramApi {
    /// Build the shared client from the run configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_platform_root(config, PLATFORM_ROOT)
    }

    /// Build the client against a non-default platform root. The test
    /// suite points this at a local mock server.
    pub fn with_platform_root(config: &Config, root: impl Into<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.session.user_agent)
            .timeout(Duration::from_secs(config.options.timeout_seconds));

        if let Some(proxy_url) = &config.session.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::Config(format!("invalid proxy '{}': {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            root: root.into(),
            session_id: config.session.session_id.clone(),
        })
    }

    fn session_cookie(&self) -> String {
        format!("sessionid={}", self.session_id)
    }

    /// Make a GET request with the session cookie attached.
    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::COOKIE, self.session_cookie())
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Fetch the rendered profile page for a username.
    pub async fn fetch_profile_page(&self, username: &str) -> Result<String> {
        let url = format!("{}/{}", self.root, username);
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "profile page for '{}' returned HTTP {}",
                username, status
            )));
        }

        Ok(response.text().await?)
    }

    /// Fetch a platform asset (a JavaScript bundle) by its absolute path.
    pub async fn fetch_asset(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.root, path);
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "asset {} returned HTTP {}",
                path, status
            )));
        }

        Ok(response.text().await?)
    }

    /// Fetch one page of a profile's timeline media.
    ///
    /// The `variables` payload keeps the exact key order the web app
    /// sends: `{"id":...,"first":...,"after":...}`.
    pub async fn fetch_timeline_page(
        &self,
        signature: &str,
        user_id: &str,
        page_size: u32,
        cursor: &str,
    ) -> Result<TimelineMedia> {
        let url = format!("{}/graphql/query/", self.root);
        let variables = format!(
            r#"{{"id":"{}","first":{},"after":"{}"}}"#,
            user_id, page_size, cursor
        );
        tracing::debug!("GET {} variables={}", url, variables);

        let response = self
            .client
            .get(&url)
            .query(&[("query_hash", signature), ("variables", variables.as_str())])
            .header(header::COOKIE, self.session_cookie())
            .send()
            .await?;

        let text = response.text().await?;
        let listing: MediaListingResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Upstream(format!("media listing is not valid JSON: {}", e)))?;

        // The endpoint reports auth failures, throttling, and schema drift
        // all through this one flag.
        if listing.status != "ok" {
            return Err(Error::Upstream(format!(
                "media listing status '{}'",
                listing.status
            )));
        }

        listing
            .data
            .and_then(|data| data.user)
            .map(|user| user.edge_owner_to_timeline_media)
            .ok_or_else(|| Error::SchemaMismatch("media listing is missing data.user".into()))
    }

    /// GET a media URL for download. Non-success statuses are reported as
    /// download failures so the caller can skip the item.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.get(url).await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        Ok(response)
    }
}
