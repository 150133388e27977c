//! HTTP access to the remote services.
//!
//! Every request goes through [`ApiClient::request`], which attaches the
//! session's bearer token when one is held. Responses are decoded by
//! [`decode_response`] so status mapping lives in one place.

use reqwest::Method;
use serde::de::DeserializeOwned;
use shared_types::{
    ApiConfig, AppError, DoctorPage, DoctorQuery, LoginRequest, LoginResponse, PatientResponse,
    RegisterRequest, RegisterResponse,
};

use crate::session::SessionStore;

#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, AppError>;
}

#[allow(async_fn_in_trait)]
pub trait RegistrationApi {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, AppError>;
}

#[allow(async_fn_in_trait)]
pub trait DirectoryApi {
    async fn list_doctors(&self, query: &DoctorQuery) -> Result<DoctorPage, AppError>;
}

#[allow(async_fn_in_trait)]
pub trait PatientApi {
    async fn get_patient(&self, profile_id: &str) -> Result<PatientResponse, AppError>;
}

/// Shared HTTP client. Clones share the connection pool and session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    /// Start a request, with `Authorization: Bearer` when signed in.
    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T, AppError> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        decode_response(status, &body)
    }
}

impl AuthApi for ApiClient {
    #[tracing::instrument(skip_all)]
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, AppError> {
        let url = self.config.login_url();
        self.send(self.request(Method::POST, &url).json(credentials)).await
    }
}

impl RegistrationApi for ApiClient {
    #[tracing::instrument(skip_all, fields(role = request.role.as_str()))]
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
        let builder = self
            .request(Method::POST, &self.config.register_url)
            .json(request);
        self.send(builder).await
    }
}

impl DirectoryApi for ApiClient {
    #[tracing::instrument(skip_all, fields(page = query.page))]
    async fn list_doctors(&self, query: &DoctorQuery) -> Result<DoctorPage, AppError> {
        let builder = self
            .request(Method::GET, &self.config.doctors_url)
            .query(&query.to_pairs());
        self.send(builder).await
    }
}

impl PatientApi for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn get_patient(&self, profile_id: &str) -> Result<PatientResponse, AppError> {
        let url = self.config.patient_url(profile_id);
        self.send(self.request(Method::GET, &url)).await
    }
}

/// Map a status and raw body to a typed result.
///
/// Non-2xx statuses become categorized errors; a 2xx body that does not
/// match `T` is a data-shape error.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AppError> {
    if !(200..300).contains(&status) {
        let err = AppError::from_status(status, body);
        tracing::warn!(status, kind = %err.kind, "request failed");
        return Err(err);
    }
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "unexpected response body");
        AppError::data_shape(e.to_string())
    })
}

fn transport_error(err: reqwest::Error) -> AppError {
    match err.status() {
        Some(status) => AppError::from_status(status.as_u16(), ""),
        None => {
            tracing::warn!(error = %err, "request did not reach the server");
            AppError::connectivity(err.to_string())
        }
    }
}

/// The client provided at the root of the app.
pub fn use_api() -> ApiClient {
    dioxus::prelude::use_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{TOKEN_KEY, USER_KEY};
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;
    use reqwest::header::AUTHORIZATION;
    use shared_types::{AppErrorKind, Identity, UserRole};

    fn client(storage: MemoryStorage) -> ApiClient {
        ApiClient::new(ApiConfig::default(), SessionStore::init(storage))
    }

    fn signed_in_storage() -> MemoryStorage {
        let identity = Identity {
            id: "u1".into(),
            email: "ana@example.com".into(),
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            role: UserRole::Patient,
            profile_id: Some("p1".into()),
        };
        let json = serde_json::to_string(&identity).unwrap();
        MemoryStorage::with_entries([(TOKEN_KEY, "abc123"), (USER_KEY, json.as_str())])
    }

    #[test]
    fn attaches_bearer_when_signed_in() {
        let api = client(signed_in_storage());
        let request = api
            .request(Method::GET, "https://api.test/patients/p1")
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc123"
        );
    }

    #[test]
    fn omits_authorization_when_signed_out() {
        let api = client(MemoryStorage::new());
        let request = api
            .request(Method::GET, "https://api.test/doctors")
            .build()
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn directory_query_lands_in_url() {
        let api = client(MemoryStorage::new());
        let query = DoctorQuery {
            specialty: Some("Cardiologia".into()),
            is_accepting_patients: Some(true),
            page: 1,
            limit: 10,
            search: None,
        };
        let request = api
            .request(Method::GET, "https://api.test/init")
            .query(&query.to_pairs())
            .build()
            .unwrap();
        assert_eq!(
            request.url().query(),
            Some("specialty=Cardiologia&isAcceptingPatients=true&page=1&limit=10")
        );
    }

    #[test]
    fn decodes_success_body() {
        let page: DoctorPage =
            decode_response(200, r#"{"success":true,"doctors":[],"total":0}"#).unwrap();
        assert!(page.success);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn malformed_success_body_is_data_shape() {
        let err = decode_response::<PatientResponse>(200, "<html>").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::DataShape);
    }

    #[test]
    fn error_statuses_are_categorized() {
        let cases = [
            (401, AppErrorKind::Unauthorized),
            (404, AppErrorKind::NotFound),
            (409, AppErrorKind::Conflict),
            (500, AppErrorKind::ServerError),
            (503, AppErrorKind::ServerError),
        ];
        for (status, kind) in cases {
            let err = decode_response::<LoginResponse>(status, "").unwrap_err();
            assert_eq!(err.kind, kind, "status {status}");
        }
    }

    #[test]
    fn bad_request_keeps_server_message() {
        let err =
            decode_response::<RegisterResponse>(400, r#"{"message":"CPF inválido"}"#).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.friendly_message(), "CPF inválido");
    }
}
