//! Builders and fakes shared by unit and integration tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    core::state::AppState,
    domain::{
        testimonial::Testimonial,
        widget::{AnimationStyle, WidgetConfig, WidgetSettings, WidgetType},
    },
    infrastructure::{
        config::Config,
        gateway::{AuthBackend, AuthData, BackendError, Session, User, UserAttributes},
    },
};

/// `n` testimonials with ids `t0..`, distinct quotes and names
pub fn testimonials(n: usize) -> Vec<Testimonial> {
    (0..n)
        .map(|i| {
            Testimonial::new(
                format!("t{i}"),
                5 - (i % 3) as u8,
                format!("Testimonial number {i}"),
                format!("Client {i}"),
            )
        })
        .collect()
}

/// Widget of `widget_type` without entrance effects, so frames are stable
pub fn still_widget(widget_type: WidgetType) -> WidgetConfig {
    WidgetConfig::new(widget_type).with_settings(WidgetSettings {
        animation_style: AnimationStyle::None,
        ..Default::default()
    })
}

/// App state on the default configuration with `widget` and `n` testimonials
pub fn app_state(widget: WidgetConfig, n: usize) -> AppState {
    let config = Config {
        widget,
        ..Config::defaults().unwrap_or_default()
    };
    AppState::new_with_config(config, testimonials(n))
}

pub fn sample_user(email: &str) -> User {
    User {
        id: format!("user-{email}"),
        email: Some(email.to_string()),
        user_metadata: UserAttributes::new(),
        created_at: Some("2024-01-01T00:00:00Z".into()),
        confirmed_at: None,
    }
}

pub fn sample_session(email: &str) -> Session {
    Session {
        access_token: format!("access-{email}"),
        refresh_token: format!("refresh-{email}"),
        token_type: "bearer".into(),
        expires_in: Some(3600),
        expires_at: None,
        user: sample_user(email),
    }
}

#[derive(Debug, Default)]
struct Accounts {
    passwords: HashMap<String, String>,
    users: HashMap<String, User>,
    sessions: HashMap<String, String>,
    usernames: HashSet<String>,
    issued: usize,
}

/// In-memory [`AuthBackend`]. Clones share their accounts.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    accounts: Arc<Mutex<Accounts>>,
    fail_lookups: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_usernames<'a>(self, usernames: impl IntoIterator<Item = &'a str>) -> Self {
        self.accounts()
            .usernames
            .extend(usernames.into_iter().map(String::from));
        self
    }

    /// Make every username lookup fail
    pub fn failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }

    /// Forget every issued token, as an expiry or admin revoke would
    pub fn revoke_all_sessions(&self) {
        self.accounts().sessions.clear();
    }

    fn accounts(&self) -> MutexGuard<'_, Accounts> {
        self.accounts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn issue(accounts: &mut Accounts, user: &User) -> Session {
        accounts.issued += 1;
        let token = format!("token-{}", accounts.issued);
        accounts.sessions.insert(token.clone(), user.id.clone());
        Session {
            access_token: token,
            refresh_token: format!("refresh-{}", accounts.issued),
            token_type: "bearer".into(),
            expires_in: Some(3600),
            expires_at: None,
            user: user.clone(),
        }
    }

    fn invalid_token() -> BackendError {
        BackendError::new("invalid JWT: unable to parse or verify signature")
            .with_status(401)
            .with_code("bad_jwt")
    }
}

#[async_trait]
impl AuthBackend for MemoryBackend {
    async fn sign_up(
        &self,
        email: &str,
        password: &SecretString,
        attributes: Option<&UserAttributes>,
    ) -> Result<AuthData, BackendError> {
        let mut accounts = self.accounts();
        if accounts.users.contains_key(email) {
            return Err(BackendError::new("User already registered")
                .with_status(422)
                .with_code("user_already_exists"));
        }
        if password.expose_secret().chars().count() < 6 {
            return Err(BackendError::new("Password should be at least 6 characters.")
                .with_status(422)
                .with_code("weak_password"));
        }

        let user = User {
            id: format!("user-{}", accounts.users.len() + 1),
            email: Some(email.to_string()),
            user_metadata: attributes.cloned().unwrap_or_default(),
            created_at: None,
            confirmed_at: None,
        };
        if let Some(username) = user.user_metadata.get("username").and_then(|v| v.as_str()) {
            accounts.usernames.insert(username.to_string());
        }
        accounts
            .passwords
            .insert(email.to_string(), password.expose_secret().to_string());
        accounts.users.insert(email.to_string(), user.clone());
        let session = Self::issue(&mut accounts, &user);

        Ok(AuthData {
            user: Some(user),
            session: Some(session),
        })
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Session, BackendError> {
        let mut accounts = self.accounts();
        let matches = accounts
            .passwords
            .get(email)
            .is_some_and(|stored| stored == password.expose_secret());
        let user = accounts.users.get(email).cloned();
        match user {
            Some(user) if matches => Ok(Self::issue(&mut accounts, &user)),
            _ => Err(BackendError::new("Invalid login credentials")
                .with_status(400)
                .with_code("invalid_credentials")),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        self.accounts()
            .sessions
            .remove(access_token)
            .map(|_| ())
            .ok_or_else(Self::invalid_token)
    }

    async fn get_user(&self, access_token: &str) -> Result<User, BackendError> {
        let accounts = self.accounts();
        let user_id = accounts
            .sessions
            .get(access_token)
            .ok_or_else(Self::invalid_token)?;
        accounts
            .users
            .values()
            .find(|user| &user.id == user_id)
            .cloned()
            .ok_or_else(|| BackendError::new("User not found").with_status(404))
    }

    async fn find_username(&self, username: &str) -> Result<Option<String>, BackendError> {
        if self.fail_lookups {
            return Err(BackendError::new("error sending request for url"));
        }
        Ok(self
            .accounts()
            .usernames
            .get(username)
            .cloned())
    }
}
