//! Dashboard figures derived from a patient record.

use chrono::{DateTime, Utc};
use shared_types::{AppError, Identity, PatientRecord};

use crate::api::PatientApi;
use crate::format_helpers::{format_time_ago, parse_date};

const MAX_ACTIVITIES: usize = 4;
const RECENT_LABEL: &str = "Atualizado recentemente";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsuranceStatus {
    Active,
    Expired,
    NotInformed,
}

impl InsuranceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InsuranceStatus::Active => "Ativo",
            InsuranceStatus::Expired => "Expirado",
            InsuranceStatus::NotInformed => "Não informado",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub action: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub medication_count: usize,
    pub condition_count: usize,
    pub allergy_count: usize,
    pub insurance: InsuranceStatus,
    pub activities: Vec<Activity>,
}

/// What the dashboard renders once the record is in.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub identity: Identity,
    pub patient: PatientRecord,
    pub view: DashboardViewModel,
}

pub fn insurance_status(record: &PatientRecord, now: DateTime<Utc>) -> InsuranceStatus {
    let valid_until = record
        .insurance_info
        .as_ref()
        .and_then(|info| info.valid_until.as_deref())
        .and_then(parse_date);

    match valid_until {
        None => InsuranceStatus::NotInformed,
        Some(date) if date < now => InsuranceStatus::Expired,
        Some(_) => InsuranceStatus::Active,
    }
}

/// Newest diagnoses first, then the synthetic summary lines on top.
pub fn recent_activities(record: &PatientRecord, now: DateTime<Utc>) -> Vec<Activity> {
    let mut history: Vec<_> = record
        .medical_history
        .iter()
        .map(|entry| (parse_date(&entry.diagnosis_date), entry))
        .collect();
    // `None` sorts below every date, so reversing puts undated entries last.
    history.sort_by(|(a, _), (b, _)| b.cmp(a));

    let mut activities: Vec<Activity> = history
        .into_iter()
        .map(|(date, entry)| Activity {
            action: format!("Diagnóstico: {}", entry.condition),
            time: date
                .map(|d| format_time_ago(d, now))
                .unwrap_or_else(|| "Data não informada".to_string()),
        })
        .collect();

    if !record.medications.is_empty() {
        activities.insert(
            0,
            Activity {
                action: format!("{} medicação(ões) ativa(s)", record.medications.len()),
                time: RECENT_LABEL.to_string(),
            },
        );
    }
    if !record.allergies.is_empty() {
        activities.insert(
            0,
            Activity {
                action: format!("{} alergia(s) registrada(s)", record.allergies.len()),
                time: RECENT_LABEL.to_string(),
            },
        );
    }

    activities.truncate(MAX_ACTIVITIES);
    activities
}

pub fn derive_dashboard(record: &PatientRecord, now: DateTime<Utc>) -> DashboardViewModel {
    DashboardViewModel {
        medication_count: record.medications.len(),
        condition_count: record.medical_history.len(),
        allergy_count: record.allergies.len(),
        insurance: insurance_status(record, now),
        activities: recent_activities(record, now),
    }
}

/// Resolve the signed-in patient's record and derive the view model.
///
/// Errors carry a message ready to show; no request is made without a
/// profile reference.
pub async fn load_dashboard<P: PatientApi>(
    api: &P,
    identity: Option<&Identity>,
    now: DateTime<Utc>,
) -> Result<DashboardData, AppError> {
    let identity = identity.ok_or_else(|| AppError::unauthorized("Usuário não autenticado"))?;
    let profile_id = identity
        .profile_ref()
        .ok_or_else(|| AppError::not_found("Perfil do paciente não encontrado"))?;

    let response = api.get_patient(profile_id).await.map_err(|err| {
        tracing::error!(error = %err, "failed to load patient record");
        AppError {
            message: err.friendly_message(),
            ..err
        }
    })?;

    match response.patient {
        Some(patient) if response.success => {
            let view = derive_dashboard(&patient, now);
            Ok(DashboardData {
                identity: identity.clone(),
                patient,
                view,
            })
        }
        _ => Err(AppError::data_shape("Dados do paciente não encontrados")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use shared_types::{
        Allergy, AppErrorKind, InsuranceInfo, MedicalHistoryEntry, Medication, PatientResponse,
        UserRole,
    };
    use std::cell::Cell;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn iso(date: DateTime<Utc>) -> String {
        date.to_rfc3339()
    }

    fn medication(name: &str) -> Medication {
        Medication {
            name: name.into(),
            ..Default::default()
        }
    }

    fn diagnosis(condition: &str, date: String) -> MedicalHistoryEntry {
        MedicalHistoryEntry {
            condition: condition.into(),
            diagnosis_date: date,
            notes: None,
        }
    }

    fn insured_until(valid_until: Option<&str>) -> PatientRecord {
        PatientRecord {
            insurance_info: Some(InsuranceInfo {
                provider: Some("Unimed".into()),
                policy_number: None,
                valid_until: valid_until.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn medications_line_leads_when_no_allergies() {
        let record = PatientRecord {
            medications: vec![medication("A"), medication("B")],
            medical_history: vec![diagnosis("Flu", iso(now() - Duration::days(10)))],
            ..Default::default()
        };
        let activities = recent_activities(&record, now());
        assert_eq!(
            activities,
            vec![
                Activity {
                    action: "2 medicação(ões) ativa(s)".into(),
                    time: "Atualizado recentemente".into(),
                },
                Activity {
                    action: "Diagnóstico: Flu".into(),
                    time: "10 dias atrás".into(),
                },
            ]
        );
    }

    #[test]
    fn allergy_line_ends_up_first_and_feed_is_capped() {
        let record = PatientRecord {
            medications: vec![medication("A")],
            allergies: vec![Allergy::Name("Dipirona".into())],
            medical_history: vec![
                diagnosis("Asma", iso(now() - Duration::days(400))),
                diagnosis("Gripe", iso(now() - Duration::days(3))),
                diagnosis("Rinite", iso(now() - Duration::days(60))),
            ],
            ..Default::default()
        };
        let actions: Vec<String> = recent_activities(&record, now())
            .into_iter()
            .map(|a| a.action)
            .collect();
        assert_eq!(
            actions,
            vec![
                "1 alergia(s) registrada(s)",
                "1 medicação(ões) ativa(s)",
                "Diagnóstico: Gripe",
                "Diagnóstico: Rinite",
            ]
        );
    }

    #[test]
    fn undated_history_sorts_last() {
        let record = PatientRecord {
            medical_history: vec![
                diagnosis("Sem data", "desconhecida".into()),
                diagnosis("Recente", "2025-06-01".into()),
            ],
            ..Default::default()
        };
        let activities = recent_activities(&record, now());
        assert_eq!(activities[0].action, "Diagnóstico: Recente");
        assert_eq!(activities[1].action, "Diagnóstico: Sem data");
        assert_eq!(activities[1].time, "Data não informada");
    }

    #[test]
    fn insurance_status_variants() {
        assert_eq!(
            insurance_status(&insured_until(Some("2030-01-01")), now()),
            InsuranceStatus::Active
        );
        assert_eq!(
            insurance_status(&insured_until(Some("2020-01-01")), now()),
            InsuranceStatus::Expired
        );
        assert_eq!(
            insurance_status(&insured_until(None), now()),
            InsuranceStatus::NotInformed
        );
        assert_eq!(
            insurance_status(&PatientRecord::default(), now()),
            InsuranceStatus::NotInformed
        );
        assert_eq!(InsuranceStatus::Expired.label(), "Expirado");
    }

    #[test]
    fn counts_come_straight_from_the_record() {
        let record = PatientRecord {
            medications: vec![medication("A"), medication("B"), medication("C")],
            allergies: vec![Allergy::Name("Látex".into())],
            ..Default::default()
        };
        let view = derive_dashboard(&record, now());
        assert_eq!(view.medication_count, 3);
        assert_eq!(view.condition_count, 0);
        assert_eq!(view.allergy_count, 1);
        assert_eq!(view.insurance, InsuranceStatus::NotInformed);
    }

    struct FakePatients {
        response: Result<PatientResponse, AppError>,
        calls: Cell<usize>,
    }

    impl PatientApi for FakePatients {
        async fn get_patient(&self, _profile_id: &str) -> Result<PatientResponse, AppError> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    fn fake(response: Result<PatientResponse, AppError>) -> FakePatients {
        FakePatients {
            response,
            calls: Cell::new(0),
        }
    }

    fn patient_identity(profile_id: Option<&str>) -> Identity {
        Identity {
            id: "u1".into(),
            email: "ana@example.com".into(),
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            role: UserRole::Patient,
            profile_id: profile_id.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn missing_profile_skips_the_request() {
        let api = fake(Ok(PatientResponse {
            success: true,
            patient: Some(PatientRecord::default()),
        }));
        let identity = patient_identity(None);
        let err = load_dashboard(&api, Some(&identity), now()).await.unwrap_err();
        assert_eq!(err.message, "Perfil do paciente não encontrado");
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn no_identity_is_unauthenticated() {
        let api = fake(Err(AppError::server("unused")));
        let err = load_dashboard(&api, None, now()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Usuário não autenticado");
    }

    #[tokio::test]
    async fn unsuccessful_body_is_a_data_error() {
        let api = fake(Ok(PatientResponse {
            success: false,
            patient: None,
        }));
        let identity = patient_identity(Some("p1"));
        let err = load_dashboard(&api, Some(&identity), now()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::DataShape);
        assert_eq!(err.message, "Dados do paciente não encontrados");
    }

    #[tokio::test]
    async fn api_errors_carry_friendly_text() {
        let api = fake(Err(AppError::from_status(500, "")));
        let identity = patient_identity(Some("p1"));
        let err = load_dashboard(&api, Some(&identity), now()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ServerError);
        assert_eq!(err.message, "Erro no servidor. Tente novamente mais tarde.");
    }

    #[tokio::test]
    async fn loads_and_derives() {
        let record = PatientRecord {
            medications: vec![medication("A")],
            ..insured_until(Some("2030-01-01"))
        };
        let api = fake(Ok(PatientResponse {
            success: true,
            patient: Some(record.clone()),
        }));
        let identity = patient_identity(Some("p1"));
        let data = load_dashboard(&api, Some(&identity), now()).await.unwrap();
        assert_eq!(data.patient, record);
        assert_eq!(data.view.insurance, InsuranceStatus::Active);
        assert_eq!(data.view.medication_count, 1);
        assert_eq!(api.calls.get(), 1);
    }
}
