//! Configuration management for hutres

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, REFERER, USER_AGENT};

use crate::error::{HutError, Result};
use crate::utils::UrlUtils;

/// Host of the hut reservation service
pub const DEFAULT_BASE_URL: &str = "https://www.hut-reservation.org";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";

/// Account used to log in to the reservation service
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reject empty usernames or passwords before anything hits the network
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(HutError::Config("username is empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(HutError::Config("password is empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Output configuration
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub file: Option<PathBuf>,
    /// Emit a single JSON document instead of labeled lines
    pub json: bool,
    pub pretty: bool,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub credentials: Credentials,
    pub user_agent: String,
    pub accept: String,
    /// Defaults to `<base_url>/login`
    pub referer: Option<String>,
    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            referer: None,
            headers: HashMap::new(),
            timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(10),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Referer sent with every request, built from the validated base URL
    pub fn referer(&self) -> Result<String> {
        match &self.referer {
            Some(referer) => Ok(referer.clone()),
            None => {
                let base_url = UrlUtils::validate_base_url(&self.base_url)?;
                Ok(UrlUtils::join_path(&base_url, "login")?.to_string())
            }
        }
    }

    /// Build the header set attached to every request of a session
    pub fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(&self.user_agent)?);
        headers.insert(ACCEPT, header_value(&self.accept)?);
        headers.insert(REFERER, header_value(&self.referer()?)?);

        for (key, value) in &self.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| HutError::Config(format!("Invalid header name '{}': {}", key, e)))?;
            headers.insert(name, header_value(value)?);
        }

        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| HutError::Config(format!("Invalid header value '{}': {}", value, e)))
}
