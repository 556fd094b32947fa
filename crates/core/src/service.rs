//! Referral lookup and phone verification.

use crate::constants::VERIFY_ACTION;
use crate::keys::RecordId;
use crate::privacy::{mask_name, phones_match};
use crate::record::ReferralRecord;
use crate::store::RecordStore;
use crate::{ReferralError, ReferralResult};
use std::sync::Arc;
use tracing::{info, warn};

/// What the requester asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Confirm the record exists and show a masked name.
    Exists,
    /// Disclose the full referral once the requester's phone matches.
    Verify,
}

impl Action {
    /// Parse the optional action parameter. Anything other than `verify` selects `Exists`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(VERIFY_ACTION) => Action::Verify,
            _ => Action::Exists,
        }
    }
}

/// Raw lookup parameters as received from a caller.
#[derive(Clone, Debug, Default)]
pub struct LookupRequest {
    pub key: Option<String>,
    pub phone: Option<String>,
    pub action: Option<String>,
}

/// Successful lookup result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    Exists { masked_name: String },
    Verified(Box<ReferralRecord>),
}

/// Stateless lookup service over a [`RecordStore`].
#[derive(Clone)]
pub struct ReferralService {
    store: Arc<dyn RecordStore>,
}

impl ReferralService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Resolve a public key and answer an existence check or a verification request.
    ///
    /// The record is fetched before the phone is checked, so an unknown key is reported as not
    /// found even when the phone is missing.
    ///
    /// # Errors
    /// - `MissingKey` if `key` is absent or empty.
    /// - `MissingPhone` if verification is requested without a phone number.
    /// - `PhoneMismatch` if the normalised phone numbers differ.
    /// - Any store error from [`RecordStore::fetch`].
    pub async fn lookup(&self, request: LookupRequest) -> ReferralResult<LookupOutcome> {
        let key = present(request.key).ok_or(ReferralError::MissingKey)?;
        let action = Action::parse(request.action.as_deref());

        info!(key = %key, ?action, "referral lookup");
        let record = self.store.fetch(&RecordId::from_public_key(&key)).await?;

        match action {
            Action::Verify => {
                let phone = present(request.phone).ok_or(ReferralError::MissingPhone)?;
                if !phones_match(&phone, &record.requester_phone) {
                    warn!(key = %key, "phone verification failed");
                    return Err(ReferralError::PhoneMismatch { key });
                }
                Ok(LookupOutcome::Verified(Box::new(record)))
            }
            Action::Exists => Ok(LookupOutcome::Exists {
                masked_name: mask_name(&record.patient_name),
            }),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
