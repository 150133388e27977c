use serde::{Deserialize, Serialize};

/// A medication the patient is currently taking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// One diagnosed condition in the patient's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistoryEntry {
    #[serde(default)]
    pub condition: String,
    /// ISO-8601 date or timestamp.
    #[serde(default)]
    pub diagnosis_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Allergies arrive either as bare names or as detailed objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Allergy {
    Name(String),
    Detailed {
        allergen: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        severity: Option<String>,
    },
}

impl Allergy {
    pub fn allergen(&self) -> &str {
        match self {
            Allergy::Name(name) => name,
            Allergy::Detailed { allergen, .. } => allergen,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// Patient record owned by the backend; the client only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub medical_history: Vec<MedicalHistoryEntry>,
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_info: Option<InsuranceInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
}

/// Body returned by `GET /api/patients/{profileId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub patient: Option<PatientRecord>,
}
