use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Account role controlling which dashboard a user gets.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Patient,
    Doctor,
    Admin,
}

impl UserRole {
    /// Parse a role string. Unknown values default to Patient.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "doctor" => UserRole::Doctor,
            "admin" => UserRole::Admin,
            _ => UserRole::Patient,
        }
    }

    /// Lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Patient => "patient",
            UserRole::Doctor => "doctor",
            UserRole::Admin => "admin",
        }
    }

    /// Human-readable label for the header.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Patient => "Paciente",
            UserRole::Doctor => "Médico",
            UserRole::Admin => "Administrador",
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(UserRole::from_str_or_default(&raw))
    }
}

/// The authenticated user's public profile, as returned by the login endpoint
/// and persisted in local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: UserRole,
    /// Links the account to its patient or doctor record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

impl Identity {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Up to two uppercase initials, falling back to the email's first letter.
    pub fn initials(&self) -> String {
        let from_name: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .collect();
        if from_name.is_empty() {
            self.email.chars().take(1).collect::<String>().to_uppercase()
        } else {
            from_name.to_uppercase()
        }
    }

    /// A usable profile reference, ignoring blank ids.
    pub fn profile_ref(&self) -> Option<&str> {
        self.profile_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Informe um email válido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Informe sua senha"))]
    pub password: String,
}

/// Body returned by `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn identity() -> Identity {
        Identity {
            id: "u-1".into(),
            email: "ana@example.com".into(),
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            role: UserRole::Patient,
            profile_id: Some("p-9".into()),
        }
    }

    #[test]
    fn identity_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(identity()).unwrap();
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["lastName"], "Souza");
        assert_eq!(json["profileId"], "p-9");
        assert_eq!(json["role"], "patient");
    }

    #[test]
    fn identity_deserializes_login_payload_without_profile() {
        let json = r#"{"id":"7","email":"x@y.com","firstName":"Rui","lastName":"Lima","role":"doctor"}"#;
        let parsed: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.role, UserRole::Doctor);
        assert_eq!(parsed.profile_id, None);
        assert_eq!(parsed.profile_ref(), None);
    }

    #[test]
    fn unknown_role_falls_back_to_patient() {
        let json = r#"{"id":"7","email":"x@y.com","role":"nurse"}"#;
        let parsed: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.role, UserRole::Patient);
        assert_eq!(UserRole::from_str_or_default("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Patient);
    }

    #[test]
    fn blank_profile_id_is_not_a_reference() {
        let mut user = identity();
        user.profile_id = Some("   ".into());
        assert_eq!(user.profile_ref(), None);
    }

    #[test]
    fn full_name_and_initials() {
        let user = identity();
        assert_eq!(user.full_name(), "Ana Souza");
        assert_eq!(user.initials(), "AS");

        let nameless = Identity {
            first_name: String::new(),
            last_name: String::new(),
            ..identity()
        };
        assert_eq!(nameless.full_name(), "");
        assert_eq!(nameless.initials(), "A");
    }

    #[test]
    fn login_response_tolerates_missing_fields() {
        let parsed: LoginResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.token.is_none());
        assert!(parsed.user.is_none());
    }

    #[test]
    fn login_request_validation() {
        let bad = LoginRequest {
            email: "not-an-email".into(),
            password: String::new(),
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));

        let good = LoginRequest {
            email: "ana@example.com".into(),
            password: "secret".into(),
        };
        assert!(good.validate().is_ok());
    }
}
