//! # Referral Core
//!
//! Core business logic for the referral lookup service.
//!
//! This crate resolves a public referral key to a record in the external record store and
//! decides what may be disclosed:
//! - Public key to internal identifier mapping (`keys`)
//! - Record model read from the store's field map (`record`)
//! - Name masking and phone normalisation (`privacy`)
//! - Record store seam and the Airtable client (`store`)
//! - The lookup/verification flow (`service`)
//!
//! **No API concerns**: HTTP routing, CORS and response shaping belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod keys;
pub mod privacy;
pub mod record;
pub mod service;
pub mod store;

pub use config::ReferralConfig;
pub use constants::VERIFY_ACTION;
pub use error::{ReferralError, ReferralResult};
pub use keys::RecordId;
pub use privacy::{mask_name, normalize_phone, phones_match};
pub use record::{Recommendation, ReferralRecord};
pub use service::{Action, LookupOutcome, LookupRequest, ReferralService};
pub use store::{AirtableStore, RecordStore};
