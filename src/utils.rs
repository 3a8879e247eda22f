//! Utility functions and helpers

use crate::error::{HutError, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// URL validation and parsing utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Validate a service base URL, defaulting to https when no scheme is given
    pub fn validate_base_url(input: &str) -> Result<Url> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(HutError::InvalidUrl("base URL is empty".to_string()));
        }

        let url_str = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let url = Url::parse(&url_str)
            .map_err(|e| HutError::InvalidUrl(format!("Invalid URL '{}': {}", input, e)))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(HutError::InvalidUrl(format!(
                    "Unsupported scheme '{}' in '{}'",
                    other, input
                )))
            }
        }
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(HutError::InvalidUrl(format!("Invalid URL '{}': no host", input)));
        }

        Ok(url)
    }

    /// Append an absolute API path to a base URL, keeping any base path prefix
    pub fn join_path(base: &Url, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|e| HutError::InvalidUrl(format!("Invalid URL '{}': {}", joined, e)))
    }
}

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand tilde (~) in file paths
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home_dir) = dirs::home_dir() {
                Ok(home_dir.join(rest))
            } else {
                Err(HutError::Config(
                    "Cannot determine home directory".to_string(),
                ))
            }
        } else {
            Ok(PathBuf::from(path))
        }
    }
}

/// String utilities
pub struct StringUtils;

impl StringUtils {
    /// Parse `key: value` header strings
    pub fn parse_header(input: &str) -> Result<(String, String)> {
        match input.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(HutError::Config(format!(
                "Invalid header format: '{}'. Expected 'key: value'",
                input
            ))),
        }
    }

    /// Parse timeout values (supports suffixes like 's', 'm', 'h')
    pub fn parse_timeout(input: &str) -> Result<Duration> {
        if let Ok(seconds) = input.parse::<u64>() {
            return Ok(Duration::from_secs(seconds));
        }

        let (number_part, suffix) = if let Some(stripped) = input.strip_suffix('s') {
            (stripped, 1)
        } else if let Some(stripped) = input.strip_suffix('m') {
            (stripped, 60)
        } else if let Some(stripped) = input.strip_suffix('h') {
            (stripped, 3600)
        } else {
            return Err(HutError::Config(format!(
                "Invalid timeout format: '{}'. Use number with optional suffix (s/m/h)",
                input
            )));
        };

        let number: u64 = number_part
            .parse()
            .map_err(|_| HutError::Config(format!("Invalid timeout number: '{}'", number_part)))?;

        let seconds = number
            .checked_mul(suffix)
            .ok_or_else(|| HutError::Config(format!("Timeout too large: '{}'", input)))?;

        Ok(Duration::from_secs(seconds))
    }
}
