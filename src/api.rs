//! Hut reservation API calls
//!
//! [`HutReservation`] owns a single [`Session`] and runs the login sequence
//! on it, so the token sent at login always comes from the same cookie jar.

use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::config::{Config, Credentials};
use crate::error::{HutError, Result};
use crate::session::Session;

pub const CSRF_PATH: &str = "/api/v1/csrf";
pub const LOGIN_PATH: &str = "/api/v1/users/login";
pub const CURRENT_USER_PATH: &str = "/api/v1/manage/currentUser";
pub const HUTS_LIST_PATH: &str = "/api/v1/manage/hutsList";
pub const HUT_INFO_PATH: &str = "/api/v1/reservation/hutInfo";
pub const HUT_AVAILABILITY_PATH: &str = "/api/v1/reservation/getHutAvailability";

/// Everything a full run retrieves
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub csrf_token: Option<String>,
    pub current_user: Value,
    pub huts: Value,
}

/// Client for the hut reservation service
#[derive(Debug)]
pub struct HutReservation {
    session: Session,
    credentials: Credentials,
}

impl HutReservation {
    /// Validate the credentials and open a fresh session
    pub fn new(config: &Config) -> Result<Self> {
        config.credentials.validate()?;
        let session = Session::new(config)?;
        Ok(Self {
            session,
            credentials: config.credentials.clone(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// GET the CSRF endpoint; `None` when the server set no `XSRF-TOKEN` cookie
    pub async fn csrf_token(&self) -> Result<Option<String>> {
        let token = self.session.fetch_csrf_token(CSRF_PATH).await?;
        match &token {
            Some(token) => info!("CSRF token initial: {}", token),
            None => warn!("server did not set an XSRF-TOKEN cookie, logging in without one"),
        }
        Ok(token)
    }

    /// Log in on this client's session with a token it fetched itself
    pub async fn login(&self, token: Option<&str>) -> Result<()> {
        self.session
            .login(LOGIN_PATH, &self.credentials, token)
            .await?;
        info!("logged in as {}", self.credentials.username);
        Ok(())
    }

    /// Fetch a CSRF token and log in with it; returns the token that was used
    pub async fn authenticate(&self) -> Result<Option<String>> {
        let token = self.csrf_token().await?;
        self.login(token.as_deref()).await?;
        Ok(token)
    }

    pub async fn current_user(&self) -> Result<Value> {
        self.session.get_json(CURRENT_USER_PATH).await
    }

    pub async fn huts_list(&self) -> Result<Value> {
        self.session.get_json(HUTS_LIST_PATH).await
    }

    pub async fn hut_info(&self, hut_id: &str) -> Result<Value> {
        let hut_id = checked_hut_id(hut_id)?;
        let mut url = self.session.endpoint(HUT_INFO_PATH)?;
        url.path_segments_mut()
            .map_err(|_| {
                HutError::InvalidUrl(format!("cannot append hut id to {}", HUT_INFO_PATH))
            })?
            .push(hut_id);
        self.session.get_json_at(url).await
    }

    pub async fn hut_availability(&self, hut_id: &str) -> Result<Value> {
        let hut_id = checked_hut_id(hut_id)?;
        let mut url = self.session.endpoint(HUT_AVAILABILITY_PATH)?;
        url.query_pairs_mut()
            .append_pair("hutId", hut_id)
            .append_pair("step", "WIZARD");
        self.session.get_json_at(url).await
    }

    /// CSRF token, login, current user, huts list, in that order
    pub async fn overview(&self) -> Result<Overview> {
        let csrf_token = self.authenticate().await?;
        let current_user = self.current_user().await?;
        let huts = self.huts_list().await?;

        Ok(Overview {
            csrf_token,
            current_user,
            huts,
        })
    }
}

fn checked_hut_id(hut_id: &str) -> Result<&str> {
    let hut_id = hut_id.trim();
    if hut_id.is_empty() {
        return Err(HutError::Config("hut id is empty".to_string()));
    }
    Ok(hut_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_rejects_missing_credentials() {
        let err = HutReservation::new(&Config::default()).expect_err("no credentials");
        assert!(matches!(err, HutError::Config(_)));
    }

    #[test]
    fn new_rejects_bad_base_url() {
        let config = Config {
            base_url: "ftp://www.hut-reservation.org".to_string(),
            credentials: Credentials::new("test@test.net", "password"),
            ..Config::default()
        };
        let err = HutReservation::new(&config).expect_err("bad url");
        assert!(matches!(err, HutError::InvalidUrl(_)));
    }

    #[test]
    fn checked_hut_id_trims_and_rejects_blank() {
        assert_eq!(checked_hut_id(" 42 ").expect("id"), "42");
        assert!(checked_hut_id("  ").is_err());
    }

    #[test]
    fn overview_serializes_camel_case() {
        let overview = Overview {
            csrf_token: Some("abc".to_string()),
            current_user: json!({"username": "test@test.net"}),
            huts: json!([]),
        };
        assert_eq!(
            serde_json::to_value(&overview).expect("serialize"),
            json!({
                "csrfToken": "abc",
                "currentUser": {"username": "test@test.net"},
                "huts": []
            })
        );
    }
}
