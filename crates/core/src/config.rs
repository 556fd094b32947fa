//! Record store configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store client.
//! Request handling never reads process-wide environment variables, which keeps the lookup
//! path testable with fakes.

use crate::constants::{DEFAULT_API_URL, DEFAULT_TABLE, DEFAULT_TIMEOUT_SECS};
use crate::{ReferralError, ReferralResult};
use std::fmt;
use std::time::Duration;

/// Record store configuration resolved at startup.
#[derive(Clone)]
pub struct ReferralConfig {
    base_id: String,
    token: String,
    table: String,
    api_url: String,
    request_timeout: Duration,
}

impl ReferralConfig {
    /// Create a new `ReferralConfig`.
    ///
    /// Both the base identifier and the token are required. The error does not say which one
    /// is missing beyond the internal message, which is only ever logged.
    pub fn new(
        base_id: Option<String>,
        token: Option<String>,
        table: String,
        api_url: String,
        request_timeout: Duration,
    ) -> ReferralResult<Self> {
        let base_id = non_empty(base_id)
            .ok_or_else(|| ReferralError::Configuration("record store base id is not set".into()))?;
        let token = non_empty(token)
            .ok_or_else(|| ReferralError::Configuration("record store token is not set".into()))?;

        if table.trim().is_empty() {
            return Err(ReferralError::Configuration(
                "record store table cannot be empty".into(),
            ));
        }

        Ok(Self {
            base_id,
            token,
            table,
            api_url: api_url.trim_end_matches('/').to_string(),
            request_timeout,
        })
    }

    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl fmt::Debug for ReferralConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferralConfig")
            .field("base_id", &self.base_id)
            .field("token", &"***")
            .field("table", &self.table)
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Table name from an optional string value, falling back to the default table.
pub fn table_from_env_value(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| DEFAULT_TABLE.to_string())
}

/// API URL from an optional string value, falling back to the public Airtable endpoint.
pub fn api_url_from_env_value(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Parse the outbound request timeout from an optional string of whole seconds.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn timeout_from_env_value(value: Option<String>) -> ReferralResult<Duration> {
    let secs = non_empty(value)
        .map(|v| {
            v.parse::<u64>().map_err(|_| {
                ReferralError::Configuration(format!("invalid timeout in seconds: {v}"))
            })
        })
        .transpose()?
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    if secs == 0 {
        return Err(ReferralError::Configuration(
            "timeout must be at least one second".into(),
        ));
    }

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_id: Option<&str>, token: Option<&str>) -> ReferralResult<ReferralConfig> {
        ReferralConfig::new(
            base_id.map(String::from),
            token.map(String::from),
            DEFAULT_TABLE.into(),
            "https://api.airtable.com/v0/".into(),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn requires_base_id_and_token() {
        assert!(matches!(
            config(None, Some("tok")),
            Err(ReferralError::Configuration(_))
        ));
        assert!(matches!(
            config(Some("app1"), Some("   ")),
            Err(ReferralError::Configuration(_))
        ));
        assert!(config(Some("app1"), Some("tok")).is_ok());
    }

    #[test]
    fn trims_trailing_slash_from_api_url() {
        let cfg = config(Some("app1"), Some("tok")).expect("valid config");
        assert_eq!(cfg.api_url(), "https://api.airtable.com/v0");
    }

    #[test]
    fn debug_output_redacts_token() {
        let cfg = config(Some("app1"), Some("patSecretToken")).expect("valid config");
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("app1"));
        assert!(!rendered.contains("patSecretToken"));
    }

    #[test]
    fn env_values_fall_back_to_defaults() {
        assert_eq!(table_from_env_value(None), DEFAULT_TABLE);
        assert_eq!(table_from_env_value(Some(" ".into())), DEFAULT_TABLE);
        assert_eq!(table_from_env_value(Some("Referrals".into())), "Referrals");
        assert_eq!(api_url_from_env_value(None), DEFAULT_API_URL);
        assert_eq!(
            timeout_from_env_value(None).expect("default timeout"),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn rejects_bad_timeouts() {
        assert!(timeout_from_env_value(Some("soon".into())).is_err());
        assert!(timeout_from_env_value(Some("0".into())).is_err());
        assert_eq!(
            timeout_from_env_value(Some("3".into())).expect("parsed"),
            Duration::from_secs(3)
        );
    }
}
