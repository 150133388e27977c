use serde::{Deserialize, Serialize};

/// Remote endpoints the client talks to.
///
/// Every field defaults so a missing or partial `config.toml` still yields
/// a working client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base of the authentication service; `/login` is appended.
    pub auth_base_url: String,
    pub register_url: String,
    /// Base of the patient service; `/{profileId}` is appended.
    pub patients_base_url: String,
    pub doctors_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base_url: "https://tciz3mxmuh.execute-api.us-east-2.amazonaws.com".to_string(),
            register_url: "https://dibx20qa50.execute-api.us-east-2.amazonaws.com/api/auth/register"
                .to_string(),
            patients_base_url: "https://ewidx5waq3.execute-api.us-east-2.amazonaws.com/api/patients"
                .to_string(),
            doctors_url: "https://tciz3mxmuh.execute-api.us-east-2.amazonaws.com/init".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn login_url(&self) -> String {
        format!("{}/login", self.auth_base_url.trim_end_matches('/'))
    }

    pub fn patient_url(&self, profile_id: &str) -> String {
        format!(
            "{}/{}",
            self.patients_base_url.trim_end_matches('/'),
            profile_id
        )
    }
}

/// Defaults for the doctor directory on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DirectoryConfig {
    pub page_size: i64,
    pub search_debounce_ms: u64,
    pub default_specialty: Option<String>,
    pub accepting_only: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            search_debounce_ms: 300,
            default_specialty: None,
            accepting_only: true,
        }
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub directory: DirectoryConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
