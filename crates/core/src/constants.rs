//! Constants used throughout the referral core crate.
//!
//! Store column names live here so the record model and the store client agree on them.

/// Fixed prefix of every internal record identifier in the record store.
pub const RECORD_ID_PREFIX: &str = "rec";

/// Character used to hide all but the first character of a patient name.
pub const MASK_CHAR: char = '*';

/// Action value that selects the phone verification path.
pub const VERIFY_ACTION: &str = "verify";

/// Number of recommendation groups carried by every referral.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Default Airtable REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Default table holding referral records.
pub const DEFAULT_TABLE: &str = "RequestSpecialist";

/// Default outbound request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const FIELD_PATIENT_NAME: &str = "PatientName";
pub const FIELD_DISEASE_NAME: &str = "DiseaseName";
pub const FIELD_DISEASE_CODE: &str = "DiseaseCode";
pub const FIELD_REFERRAL_NOTE: &str = "ReferralNote";
pub const FIELD_REQUESTER_PHONE: &str = "RequesterPhone";

// Recommendation columns are suffixed with the group number (1-based), e.g. `Hospital2`.
pub const FIELD_HOSPITAL: &str = "Hospital";
pub const FIELD_DEPARTMENT: &str = "Department";
pub const FIELD_SPECIALIST: &str = "Specialist";
pub const FIELD_APPOINTMENT: &str = "Appointment";
pub const FIELD_DOCTOR_PROFILE: &str = "DoctorProfile";
pub const FIELD_RECOMMEND_REASON: &str = "RecommendReason";
