//! Record store access.
//!
//! [`RecordStore`] is the seam between the lookup service and the external tabular store, so
//! the service can run against an in-memory fake in tests. [`AirtableStore`] is the production
//! client: one authenticated `GET` per lookup, no retries and no caching.

use crate::config::ReferralConfig;
use crate::keys::RecordId;
use crate::record::ReferralRecord;
use crate::{ReferralError, ReferralResult};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Read access to referral records by internal identifier.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a single record.
    ///
    /// # Errors
    /// Returns `NotFound` when the store has no record with this identifier, `Upstream` for any
    /// other non-success status, and `Transport`/`Decode` for network or payload failures.
    async fn fetch(&self, id: &RecordId) -> ReferralResult<ReferralRecord>;
}

/// Wire shape of a single record returned by the store.
#[derive(Deserialize)]
struct StoreRecord {
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Airtable-backed record store.
pub struct AirtableStore {
    client: reqwest::Client,
    base_url: Url,
    config: ReferralConfig,
}

impl AirtableStore {
    /// Create a client for the configured base and table.
    ///
    /// # Errors
    /// Returns `Configuration` if the API URL is not an absolute hierarchical URL, or `Transport`
    /// if the HTTP client cannot be built.
    pub fn new(config: ReferralConfig) -> ReferralResult<Self> {
        let base_url = Url::parse(config.api_url())
            .map_err(|e| ReferralError::Configuration(format!("invalid record store url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ReferralError::Configuration(
                "record store url cannot carry a path".into(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// URL of a single record: `{api_url}/{base_id}/{table}/{record_id}`.
    ///
    /// Each part is pushed as one path segment, so a key containing `/` or `?` cannot reach a
    /// different resource.
    fn record_url(&self, id: &RecordId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([self.config.base_id(), self.config.table(), id.as_str()]);
        }
        url
    }
}

#[async_trait]
impl RecordStore for AirtableStore {
    async fn fetch(&self, id: &RecordId) -> ReferralResult<ReferralRecord> {
        debug!(record_id = %id, "fetching referral record");

        let resp = self
            .client
            .get(self.record_url(id))
            .bearer_auth(self.config.token())
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ReferralError::NotFound {
                key: id.public_key().to_string(),
            });
        }
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(ReferralError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let body = resp.bytes().await?;
        parse_record_body(&body)
    }
}

/// Decode a single-record response body.
fn parse_record_body(body: &[u8]) -> ReferralResult<ReferralRecord> {
    let record: StoreRecord = serde_json::from_slice(body).map_err(ReferralError::Decode)?;
    Ok(ReferralRecord::from_fields(&record.fields))
}
