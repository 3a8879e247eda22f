//! Session client
//!
//! A [`Session`] owns one HTTP client and the cookie jar behind it. Every
//! request issued through the same session carries the cookies the server
//! set on earlier responses, which is what binds the CSRF token to the
//! login that follows it.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use url::Url;

use crate::config::{Config, Credentials};
use crate::error::{HutError, Result, Step};
use crate::utils::UrlUtils;

pub mod cookie;

pub use cookie::{cookie_value, XSRF_COOKIE, XSRF_HEADER};

/// Cookie-carrying HTTP session against one base host
#[derive(Debug)]
pub struct Session {
    client: Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl Session {
    /// Create a session with an empty cookie jar and the configured default headers
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = UrlUtils::validate_base_url(&config.base_url)?;
        let jar = Arc::new(Jar::default());

        let client = ClientBuilder::new()
            .cookie_provider(Arc::clone(&jar))
            .default_headers(config.default_headers()?)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(HutError::Http)?;

        debug!("initialized session for {}", base_url);

        Ok(Self {
            client,
            jar,
            base_url,
        })
    }

    /// Absolute URL for an API path on the session's host
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        UrlUtils::join_path(&self.base_url, path)
    }

    /// GET the CSRF endpoint and read the `XSRF-TOKEN` cookie it sets.
    ///
    /// Returns `Ok(None)` when the server answered 2xx without setting the
    /// cookie; the caller decides what to do with a missing token.
    pub async fn fetch_csrf_token(&self, csrf_path: &str) -> Result<Option<String>> {
        let url = self.endpoint(csrf_path)?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HutError::Status {
                step: Step::Csrf,
                status,
                url: url.to_string(),
            });
        }

        // Looked up against the CSRF URL so cookies scoped to its path are found too.
        Ok(self.cookie_for(&url, XSRF_COOKIE))
    }

    /// POST form-encoded credentials, echoing `token` in the `X-XSRF-TOKEN` header.
    ///
    /// A `None` token sends the request without the header.
    pub async fn login(
        &self,
        login_path: &str,
        credentials: &Credentials,
        token: Option<&str>,
    ) -> Result<()> {
        let url = self.endpoint(login_path)?;
        debug!("POST {} as {}", url, credentials.username);

        let mut request = self.client.post(url.clone()).form(&[
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ]);
        if let Some(token) = token {
            request = request.header(XSRF_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HutError::Status {
                step: Step::Login,
                status,
                url: url.to_string(),
            });
        }

        Ok(())
    }

    /// GET an API path and parse the body as JSON, whatever the status code
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.endpoint(path)?;
        self.get_json_at(url).await
    }

    /// Like [`Session::get_json`] for a fully built URL (query strings, encoded segments)
    pub async fn get_json_at(&self, url: Url) -> Result<Value> {
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Value of a cookie the jar would send to the base URL
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.cookie_for(&self.base_url, name)
    }

    fn cookie_for(&self, url: &Url, name: &str) -> Option<String> {
        let header = self.jar.cookies(url)?;
        let header = header.to_str().ok()?;
        cookie_value(header, name)
    }
}
