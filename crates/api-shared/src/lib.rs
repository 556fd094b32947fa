//! # API Shared
//!
//! Shared wire types for the referral lookup APIs.
//!
//! Contains:
//! - JSON response bodies (`LookupRes`, `ExistsRes`, `VerifyRes`, `ReferralData`, `ErrorRes`)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the CLI so both print exactly the same payloads.

pub mod health;

pub use health::HealthService;

use referral_core::ReferralRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Answer to an existence check: never carries more than the masked name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExistsRes {
    pub exists: bool,
    pub masked_name: String,
}

/// Answer to a successful phone verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VerifyRes {
    pub success: bool,
    pub data: ReferralData,
}

/// Successful lookup body: an existence check or a verified referral.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LookupRes {
    Verified(VerifyRes),
    Exists(ExistsRes),
}

/// Full referral payload. Every field is always present, empty when the store has no value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReferralData {
    pub patient_name: String,
    pub disease_name: String,
    pub disease_code: String,
    pub referral_note: String,
    pub hospital1: String,
    pub department1: String,
    pub specialist1: String,
    pub appointment1: String,
    pub doctor_profile1: String,
    pub recommend_reason1: String,
    pub hospital2: String,
    pub department2: String,
    pub specialist2: String,
    pub appointment2: String,
    pub doctor_profile2: String,
    pub recommend_reason2: String,
    pub hospital3: String,
    pub department3: String,
    pub specialist3: String,
    pub appointment3: String,
    pub doctor_profile3: String,
    pub recommend_reason3: String,
}

impl From<&ReferralRecord> for ReferralData {
    fn from(record: &ReferralRecord) -> Self {
        let [r1, r2, r3] = &record.recommendations;
        Self {
            patient_name: record.patient_name.clone(),
            disease_name: record.disease_name.clone(),
            disease_code: record.disease_code.clone(),
            referral_note: record.referral_note.clone(),
            hospital1: r1.hospital.clone(),
            department1: r1.department.clone(),
            specialist1: r1.specialist_name.clone(),
            appointment1: r1.appointment_info.clone(),
            doctor_profile1: r1.doctor_profile.clone(),
            recommend_reason1: r1.recommend_reason.clone(),
            hospital2: r2.hospital.clone(),
            department2: r2.department.clone(),
            specialist2: r2.specialist_name.clone(),
            appointment2: r2.appointment_info.clone(),
            doctor_profile2: r2.doctor_profile.clone(),
            recommend_reason2: r2.recommend_reason.clone(),
            hospital3: r3.hospital.clone(),
            department3: r3.department.clone(),
            specialist3: r3.specialist_name.clone(),
            appointment3: r3.appointment_info.clone(),
            doctor_profile3: r3.doctor_profile.clone(),
            recommend_reason3: r3.recommend_reason.clone(),
        }
    }
}

/// Error body returned to callers. Internal detail is never placed here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Mirrored record store status, present only for upstream failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}
