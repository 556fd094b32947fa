//! Referral record model.
//!
//! Records are owned by the external record store and are read-only here. The store returns a
//! loosely typed field map; every field this crate cares about is read leniently so a missing or
//! oddly typed column degrades to an empty string instead of failing the request.

use crate::constants::{
    FIELD_APPOINTMENT, FIELD_DEPARTMENT, FIELD_DISEASE_CODE, FIELD_DISEASE_NAME,
    FIELD_DOCTOR_PROFILE, FIELD_HOSPITAL, FIELD_PATIENT_NAME, FIELD_RECOMMEND_REASON,
    FIELD_REFERRAL_NOTE, FIELD_REQUESTER_PHONE, FIELD_SPECIALIST, RECOMMENDATION_COUNT,
};
use serde_json::{Map, Value};

/// One recommended specialist for a referral.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recommendation {
    pub hospital: String,
    pub department: String,
    pub specialist_name: String,
    pub appointment_info: String,
    pub doctor_profile: String,
    pub recommend_reason: String,
}

/// A patient referral as stored in the record store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferralRecord {
    pub patient_name: String,
    pub disease_name: String,
    pub disease_code: String,
    pub referral_note: String,
    pub requester_phone: String,
    pub recommendations: [Recommendation; RECOMMENDATION_COUNT],
}

impl ReferralRecord {
    /// Build a record from the store's field map.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |name: &str| field_text(fields.get(name));
        let recommendation = |n: usize| Recommendation {
            hospital: text(&format!("{FIELD_HOSPITAL}{n}")),
            department: text(&format!("{FIELD_DEPARTMENT}{n}")),
            specialist_name: text(&format!("{FIELD_SPECIALIST}{n}")),
            appointment_info: text(&format!("{FIELD_APPOINTMENT}{n}")),
            doctor_profile: text(&format!("{FIELD_DOCTOR_PROFILE}{n}")),
            recommend_reason: text(&format!("{FIELD_RECOMMEND_REASON}{n}")),
        };

        Self {
            patient_name: text(FIELD_PATIENT_NAME),
            disease_name: text(FIELD_DISEASE_NAME),
            disease_code: text(FIELD_DISEASE_CODE),
            referral_note: text(FIELD_REFERRAL_NOTE),
            requester_phone: text(FIELD_REQUESTER_PHONE),
            recommendations: [recommendation(1), recommendation(2), recommendation(3)],
        }
    }
}

/// Read a store value as text.
///
/// Strings pass through, numbers and booleans use their JSON text, and anything else
/// (null, arrays, objects, or a missing column) reads as empty.
fn field_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn reads_patient_and_recommendation_columns() {
        let record = ReferralRecord::from_fields(&fields(json!({
            "PatientName": "Kim Minsu",
            "DiseaseName": "Thyroid nodule",
            "DiseaseCode": "E04.1",
            "ReferralNote": "Needs FNA",
            "RequesterPhone": "010-1234-5678",
            "Hospital1": "Seoul General",
            "Department1": "Endocrinology",
            "Specialist1": "Dr. Lee",
            "Appointment1": "Tue AM",
            "DoctorProfile1": "20 years",
            "RecommendReason1": "Thyroid specialist",
            "Hospital3": "Busan Medical",
        })));

        assert_eq!(record.patient_name, "Kim Minsu");
        assert_eq!(record.disease_code, "E04.1");
        assert_eq!(record.referral_note, "Needs FNA");
        assert_eq!(record.requester_phone, "010-1234-5678");
        assert_eq!(record.recommendations[0].specialist_name, "Dr. Lee");
        assert_eq!(record.recommendations[0].recommend_reason, "Thyroid specialist");
        assert_eq!(record.recommendations[1], Recommendation::default());
        assert_eq!(record.recommendations[2].hospital, "Busan Medical");
        assert_eq!(record.recommendations[2].department, "");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let record = ReferralRecord::from_fields(&Map::new());
        assert_eq!(record, ReferralRecord::default());
    }

    #[test]
    fn non_string_values_are_read_leniently() {
        let record = ReferralRecord::from_fields(&fields(json!({
            "PatientName": null,
            "RequesterPhone": 1012345678,
            "DiseaseCode": true,
            "Hospital1": ["recLinked"],
            "Department1": { "name": "x" },
        })));

        assert_eq!(record.patient_name, "");
        assert_eq!(record.requester_phone, "1012345678");
        assert_eq!(record.disease_code, "true");
        assert_eq!(record.recommendations[0].hospital, "");
        assert_eq!(record.recommendations[0].department, "");
    }
}
