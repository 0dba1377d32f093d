//! Account access gateway
//!
//! Thin wrappers over the managed backend's auth and `users` table. Every
//! operation returns a normalized response with the error as data; nothing
//! here fails with `Err` once the gateway exists. Only setting the gateway
//! up can fail, see [`init`].

pub mod backend;
pub mod error;
pub mod rest;
pub mod session;
pub mod username;

use once_cell::sync::OnceCell;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

pub use backend::{AuthBackend, AuthData, Session, User, UserAttributes};
pub use error::{BackendError, GatewayError};
pub use rest::RestBackend;
pub use session::SessionStore;
pub use username::{validate_username_format, UsernameCheck};

use crate::infrastructure::config::BackendConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub data: Option<AuthData>,
    pub error: Option<BackendError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignOutResponse {
    pub error: Option<BackendError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: Option<User>,
    pub error: Option<BackendError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,
    pub error: Option<BackendError>,
}

/// Auth operations against one backend, holding the current session
#[derive(Debug)]
pub struct AccountGateway<B> {
    backend: B,
    session: RwLock<Option<Session>>,
    store: Option<SessionStore>,
}

impl<B: AuthBackend> AccountGateway<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: RwLock::new(None),
            store: None,
        }
    }

    /// Persist the session in `store`, starting from what it holds now
    pub fn with_session_store(mut self, store: SessionStore) -> Self {
        self.session = RwLock::new(store.load());
        self.store = Some(store);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    async fn set_session(&self, session: Option<Session>) {
        if let Some(store) = &self.store {
            let persisted = match &session {
                Some(session) => store.save(session),
                None => store.clear(),
            };
            if let Err(e) = persisted {
                log::warn!("Failed to persist session: {e:#}");
            }
        }
        *self.session.write().await = session;
    }

    /// Register an account. A session, when the backend hands one out, is
    /// kept as the current one.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &SecretString,
        attributes: Option<&UserAttributes>,
    ) -> AuthResponse {
        match self.backend.sign_up(email, password, attributes).await {
            Ok(data) => {
                if data.session.is_some() {
                    self.set_session(data.session.clone()).await;
                } else {
                    log::info!("Signed up {email}; waiting for email confirmation");
                }
                AuthResponse {
                    data: Some(data),
                    error: None,
                }
            }
            Err(error) => {
                log::warn!("Sign-up failed: {error}");
                AuthResponse {
                    data: None,
                    error: Some(error),
                }
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &SecretString) -> AuthResponse {
        match self.backend.sign_in_with_password(email, password).await {
            Ok(session) => {
                self.set_session(Some(session.clone())).await;
                AuthResponse {
                    data: Some(AuthData {
                        user: Some(session.user.clone()),
                        session: Some(session),
                    }),
                    error: None,
                }
            }
            Err(error) => {
                log::warn!("Sign-in failed: {error}");
                AuthResponse {
                    data: None,
                    error: Some(error),
                }
            }
        }
    }

    /// End the current session. Signing out while signed out is not an
    /// error, and neither is a session the backend already forgot.
    pub async fn sign_out(&self) -> SignOutResponse {
        let Some(session) = self.session().await else {
            return SignOutResponse { error: None };
        };
        match self.backend.sign_out(&session.access_token).await {
            Err(error) if !error.is_session_gone() => {
                log::warn!("Sign-out failed: {error}");
                SignOutResponse { error: Some(error) }
            }
            _ => {
                self.set_session(None).await;
                SignOutResponse { error: None }
            }
        }
    }

    /// The signed-in user as the backend sees it now
    pub async fn get_current_user(&self) -> CurrentUserResponse {
        let Some(session) = self.session().await else {
            return CurrentUserResponse {
                user: None,
                error: Some(BackendError::session_missing()),
            };
        };
        match self.backend.get_user(&session.access_token).await {
            Ok(user) => CurrentUserResponse {
                user: Some(user),
                error: None,
            },
            Err(error) => CurrentUserResponse {
                user: None,
                error: Some(error),
            },
        }
    }

    /// Whether no `users` row has this username. Failures report the name as
    /// taken and carry the error.
    pub async fn check_username_availability(&self, username: &str) -> Availability {
        match self.backend.find_username(username).await {
            Ok(row) => Availability {
                available: row.is_none(),
                error: None,
            },
            Err(error) => {
                log::error!("Error checking username: {error}");
                Availability {
                    available: false,
                    error: Some(error),
                }
            }
        }
    }

    pub fn validate_username_format(&self, username: &str) -> UsernameCheck {
        validate_username_format(username)
    }
}

static GATEWAY: OnceCell<AccountGateway<RestBackend>> = OnceCell::new();

/// Set up the process-wide gateway from configuration.
///
/// Fails when the URL or anon key is missing, before any request is made.
pub fn init(
    config: &BackendConfig,
    store: Option<SessionStore>,
) -> Result<&'static AccountGateway<RestBackend>, GatewayError> {
    let backend = RestBackend::from_config(config)?;
    let gateway = match store {
        Some(store) => AccountGateway::new(backend).with_session_store(store),
        None => AccountGateway::new(backend),
    };
    GATEWAY
        .set(gateway)
        .map_err(|_| GatewayError::AlreadyInitialized)?;
    global()
}

pub fn global() -> Result<&'static AccountGateway<RestBackend>, GatewayError> {
    GATEWAY.get().ok_or(GatewayError::NotInitialized)
}
