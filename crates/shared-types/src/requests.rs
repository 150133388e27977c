use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::error::AppError;
use crate::models::UserRole;

/// Blood types offered by the registration form.
pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

const CPF_DIGITS: usize = 11;

/// Patient-specific registration fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    /// Digits only.
    pub cpf: String,
    pub date_of_birth: String,
    pub blood_type: String,
}

/// Doctor-specific registration fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub crm: String,
    pub specialties: Vec<String>,
    pub consultation_price: f64,
    pub consultation_duration: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RegisterProfile {
    Patient(PatientProfile),
    Doctor(DoctorProfile),
}

/// Payload for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: UserRole,
    #[serde(flatten)]
    pub profile: RegisterProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Raw state of the registration form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Default, Validate)]
pub struct RegistrationForm {
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    #[validate(email(message = "Informe um email válido"))]
    pub email: String,
    pub phone: String,
    #[validate(length(min = 6, message = "A senha deve ter pelo menos 6 caracteres"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "As senhas não coincidem"))]
    pub confirm_password: String,

    pub cpf: String,
    pub date_of_birth: String,
    pub blood_type: String,

    pub crm: String,
    pub specialties: Vec<String>,
    pub consultation_price: String,
    pub consultation_duration: String,
}

impl RegistrationForm {
    /// Start an empty form for the given account type.
    pub fn for_role(role: UserRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Add a specialty, ignoring blanks and exact duplicates.
    pub fn add_specialty(&mut self, raw: &str) -> bool {
        let specialty = raw.trim();
        if specialty.is_empty() || self.specialties.iter().any(|s| s == specialty) {
            return false;
        }
        self.specialties.push(specialty.to_string());
        true
    }

    pub fn remove_specialty(&mut self, index: usize) {
        if index < self.specialties.len() {
            self.specialties.remove(index);
        }
    }

    /// Validate every field and build the request payload.
    ///
    /// Errors carry one message per offending field, keyed by field name.
    pub fn to_request(&self) -> Result<RegisterRequest, AppError> {
        let mut field_errors: HashMap<String, String> = match self.validate() {
            Ok(()) => HashMap::new(),
            Err(errors) => AppError::from(errors).field_errors,
        };

        let mut require = |field: &str, value: &str, message: &str| {
            if value.trim().is_empty() {
                field_errors
                    .entry(field.to_string())
                    .or_insert_with(|| message.to_string());
            }
        };
        require("first_name", &self.first_name, "Informe seu nome");
        require("last_name", &self.last_name, "Informe seu sobrenome");
        require("email", &self.email, "Informe seu email");
        require("phone", &self.phone, "Informe seu telefone");
        require("password", &self.password, "Informe uma senha");

        let profile = match self.role {
            UserRole::Doctor => self.doctor_profile(&mut field_errors),
            _ => self.patient_profile(&mut field_errors),
        };

        if !field_errors.is_empty() {
            return Err(AppError::validation("Validation failed", field_errors));
        }
        let profile =
            profile.ok_or_else(|| AppError::validation("Validation failed", HashMap::new()))?;

        Ok(RegisterRequest {
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role,
            profile,
        })
    }

    fn patient_profile(&self, errors: &mut HashMap<String, String>) -> Option<RegisterProfile> {
        let cpf = digits_only(&self.cpf);
        if cpf.len() != CPF_DIGITS {
            errors.insert("cpf".into(), "O CPF deve ter 11 dígitos".into());
        }
        if self.date_of_birth.trim().is_empty() {
            errors.insert("date_of_birth".into(), "Informe sua data de nascimento".into());
        }
        if !BLOOD_TYPES.contains(&self.blood_type.trim()) {
            errors.insert("blood_type".into(), "Selecione o tipo sanguíneo".into());
        }

        Some(RegisterProfile::Patient(PatientProfile {
            cpf,
            date_of_birth: self.date_of_birth.trim().to_string(),
            blood_type: self.blood_type.trim().to_string(),
        }))
    }

    fn doctor_profile(&self, errors: &mut HashMap<String, String>) -> Option<RegisterProfile> {
        if self.crm.trim().is_empty() {
            errors.insert("crm".into(), "Informe seu CRM".into());
        }
        if self.specialties.is_empty() {
            errors.insert("specialties".into(), "Adicione ao menos uma especialidade".into());
        }
        let price = self
            .consultation_price
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0);
        if price.is_none() {
            errors.insert("consultation_price".into(), "Informe o valor da consulta".into());
        }
        let duration = self
            .consultation_duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| *d > 0);
        if duration.is_none() {
            errors.insert(
                "consultation_duration".into(),
                "Informe a duração da consulta".into(),
            );
        }

        Some(RegisterProfile::Doctor(DoctorProfile {
            crm: self.crm.trim().to_string(),
            specialties: self.specialties.clone(),
            consultation_price: price?,
            consultation_duration: duration?,
        }))
    }
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply the progressive CPF mask `000.000.000-00` to whatever was typed.
///
/// Non-digits are dropped and input beyond 11 digits is ignored.
pub fn format_cpf(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(CPF_DIGITS).collect();
    let mut out = String::with_capacity(14);
    for (i, c) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}
