use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    ValidationError,
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    /// The request never reached the server (HTTP status 0).
    Connectivity,
    ServerError,
    /// The server answered 2xx but the payload lacks expected fields.
    DataShape,
    /// The session could not be written to persistent storage.
    Storage,
    Unknown,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Connectivity => write!(f, "Connectivity"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
            AppErrorKind::DataShape => write!(f, "DataShape"),
            AppErrorKind::Storage => write!(f, "Storage"),
            AppErrorKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Structured error shared by the API client and every view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Connectivity, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ServerError, message)
    }

    pub fn data_shape(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::DataShape, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Storage, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unknown, message)
    }

    /// Categorize a finished HTTP exchange by status code.
    ///
    /// `body` is the raw response text; when it carries a JSON `message`
    /// (or `error`) field that text becomes the error message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty());

        let kind = match status {
            0 => AppErrorKind::Connectivity,
            400 | 422 => AppErrorKind::BadRequest,
            401 | 403 => AppErrorKind::Unauthorized,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            500..=599 => AppErrorKind::ServerError,
            _ => AppErrorKind::Unknown,
        };

        let message = server_message.unwrap_or_else(|| format!("HTTP {status}"));
        Self::new(kind, message)
    }

    /// User-facing text for this error.
    ///
    /// Bad requests and unknown failures show the server's message when it
    /// sent one; every other category has a fixed text.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::ValidationError => {
                "Por favor, preencha todos os campos obrigatórios corretamente.".to_string()
            }
            AppErrorKind::Unauthorized => "Email ou senha incorretos. Tente novamente.".to_string(),
            AppErrorKind::Conflict => "Este email já está cadastrado.".to_string(),
            AppErrorKind::NotFound => "Registro não encontrado.".to_string(),
            AppErrorKind::Connectivity => {
                "Não foi possível conectar ao servidor. Verifique sua conexão.".to_string()
            }
            AppErrorKind::ServerError => {
                "Erro no servidor. Tente novamente mais tarde.".to_string()
            }
            AppErrorKind::DataShape => "Não foi possível carregar os dados.".to_string(),
            AppErrorKind::Storage => {
                "Não foi possível salvar sua sessão neste navegador.".to_string()
            }
            AppErrorKind::BadRequest => self
                .server_message()
                .unwrap_or("Dados inválidos. Verifique as informações.")
                .to_string(),
            AppErrorKind::Unknown => self
                .server_message()
                .unwrap_or("Algo deu errado. Tente novamente.")
                .to_string(),
        }
    }

    /// The message, unless it is the synthetic `HTTP <status>` placeholder.
    fn server_message(&self) -> Option<&str> {
        if self.message.is_empty() || self.message.starts_with("HTTP ") {
            None
        } else {
            Some(&self.message)
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Valor inválido para {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
