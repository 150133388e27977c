//! Sign-in and sign-out on top of the session store.

use shared_types::{AppError, Identity, LoginRequest};
use validator::Validate;

use crate::api::AuthApi;
use crate::routes::Route;
use crate::session::SessionStore;

pub struct AuthGateway<A> {
    api: A,
    session: SessionStore,
}

impl<A: AuthApi> AuthGateway<A> {
    pub fn new(api: A, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Validate, submit, and on success start a session.
    ///
    /// The session is only written when the backend reports success and
    /// returns both a token and a user. Anything else leaves it untouched,
    /// as does a host without persistent storage.
    pub async fn login(&self, credentials: LoginRequest) -> Result<Identity, AppError> {
        let credentials = LoginRequest {
            email: credentials.email.trim().to_string(),
            password: credentials.password,
        };
        credentials.validate()?;

        let response = self.api.login(&credentials).await?;
        match (response.success, response.token, response.user) {
            (true, Some(token), Some(user)) if !token.is_empty() => {
                self.session.set(&token, user.clone())?;
                tracing::info!(user_id = %user.id, role = user.role.as_str(), "signed in");
                Ok(user)
            }
            (true, _, _) => {
                tracing::warn!("login succeeded without token or user");
                Err(AppError::data_shape("login response missing token or user"))
            }
            (false, _, _) => Err(AppError::unauthorized(
                response
                    .message
                    .unwrap_or_else(|| "invalid credentials".to_string()),
            )),
        }
    }

    /// End the session. Returns where the caller should navigate.
    pub fn logout(&self) -> Route {
        self.session.clear();
        tracing::info!("signed out");
        Route::Login {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{TOKEN_KEY, USER_KEY};
    use crate::storage::{KeyValueStore, MemoryStorage, NoopStorage};
    use pretty_assertions::assert_eq;
    use shared_types::{AppErrorKind, LoginResponse, UserRole};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FakeAuth {
        response: Result<LoginResponse, AppError>,
        calls: Cell<usize>,
    }

    impl FakeAuth {
        fn returning(response: Result<LoginResponse, AppError>) -> Self {
            Self {
                response,
                calls: Cell::new(0),
            }
        }
    }

    impl AuthApi for &FakeAuth {
        async fn login(&self, _credentials: &LoginRequest) -> Result<LoginResponse, AppError> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    fn user() -> Identity {
        Identity {
            id: "u1".into(),
            email: "ana@example.com".into(),
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            role: UserRole::Patient,
            profile_id: Some("p1".into()),
        }
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "ana@example.com".into(),
            password: "secret".into(),
        }
    }

    fn ok_response() -> LoginResponse {
        LoginResponse {
            success: true,
            token: Some("tok-1".into()),
            user: Some(user()),
            message: None,
        }
    }

    #[tokio::test]
    async fn successful_login_persists_and_broadcasts() {
        let storage = MemoryStorage::new();
        let session = SessionStore::init(storage.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = session.subscribe(move |u| sink.borrow_mut().push(u.cloned()));

        let fake = FakeAuth::returning(Ok(ok_response()));
        let gateway = AuthGateway::new(&fake, session.clone());
        let signed_in = gateway.login(credentials()).await.unwrap();

        assert_eq!(signed_in, user());
        assert_eq!(*seen.borrow(), vec![None, Some(user())]);
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
        let stored: Identity = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(stored, user());
    }

    #[tokio::test]
    async fn rejected_login_leaves_session_alone() {
        let session = SessionStore::init(MemoryStorage::new());
        let fake = FakeAuth::returning(Ok(LoginResponse {
            success: false,
            token: None,
            user: None,
            message: Some("Credenciais inválidas".into()),
        }));
        let gateway = AuthGateway::new(&fake, session.clone());

        let err = gateway.login(credentials()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn success_without_token_is_not_a_session() {
        let session = SessionStore::init(MemoryStorage::new());
        let fake = FakeAuth::returning(Ok(LoginResponse {
            token: None,
            ..ok_response()
        }));
        let gateway = AuthGateway::new(&fake, session.clone());

        let err = gateway.login(credentials()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::DataShape);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn transport_failure_is_passed_through() {
        let session = SessionStore::init(MemoryStorage::new());
        let fake = FakeAuth::returning(Err(AppError::connectivity("offline")));
        let gateway = AuthGateway::new(&fake, session.clone());

        let err = gateway.login(credentials()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Connectivity);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn login_without_persistent_storage_fails() {
        let session = SessionStore::init(NoopStorage);
        let fake = FakeAuth::returning(Ok(ok_response()));
        let gateway = AuthGateway::new(&fake, session.clone());

        let err = gateway.login(credentials()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Storage);
        assert_eq!(fake.calls.get(), 1);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_api() {
        let session = SessionStore::init(MemoryStorage::new());
        let fake = FakeAuth::returning(Ok(ok_response()));
        let gateway = AuthGateway::new(&fake, session);

        let err = gateway
            .login(LoginRequest {
                email: "not-an-email".into(),
                password: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));
        assert_eq!(fake.calls.get(), 0);
    }

    #[tokio::test]
    async fn email_is_trimmed_before_validation() {
        let session = SessionStore::init(MemoryStorage::new());
        let fake = FakeAuth::returning(Ok(ok_response()));
        let gateway = AuthGateway::new(&fake, session.clone());

        gateway
            .login(LoginRequest {
                email: "  ana@example.com ".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(fake.calls.get(), 1);
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_clears_and_points_to_login() {
        let storage = MemoryStorage::new();
        let session = SessionStore::init(storage.clone());
        session.set("tok", user()).unwrap();
        let fake = FakeAuth::returning(Ok(ok_response()));
        let gateway = AuthGateway::new(&fake, session.clone());

        assert_eq!(gateway.logout(), Route::Login {});
        assert!(!session.is_authenticated());
        assert!(!storage.contains(TOKEN_KEY));
        assert!(!storage.contains(USER_KEY));
    }

    #[test]
    fn logout_when_signed_out_still_notifies() {
        let session = SessionStore::init(MemoryStorage::new());
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let _sub = session.subscribe(move |_| counter.set(counter.get() + 1));
        let fake = FakeAuth::returning(Ok(ok_response()));

        AuthGateway::new(&fake, session).logout();
        assert_eq!(count.get(), 2);
    }
}
