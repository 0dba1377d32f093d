//! HTTP client for the Supabase REST contract: GoTrue under `/auth/v1`,
//! PostgREST under `/rest/v1`.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    backend::{AuthBackend, AuthData, Session, User, UserAttributes},
    error::{BackendError, GatewayError},
};
use crate::infrastructure::config::BackendConfig;

const TIMEOUT: Duration = Duration::from_secs(30);

pub struct RestBackend {
    client: Client,
    base_url: String,
    anon_key: SecretString,
}

impl std::fmt::Debug for RestBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestBackend")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RestBackend {
    /// Both the URL and the anon key are required.
    pub fn from_config(config: &BackendConfig) -> Result<Self, GatewayError> {
        let url = config.url.trim();
        let anon_key = match (url.is_empty(), &config.anon_key) {
            (false, Some(anon_key)) if !anon_key.expose_secret().is_empty() => anon_key.clone(),
            _ => {
                return Err(GatewayError::Configuration(
                    "backend.url and backend.anon_key must both be set".into(),
                ))
            }
        };
        Url::parse(url).map_err(|e| GatewayError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        log::info!("Account backend at {url}");

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    /// PostgREST query for the rows of `users` with exactly this username
    pub fn username_query_url(&self, username: &str) -> String {
        format!(
            "{}/rest/v1/users?select=username&username=eq.{}",
            self.base_url,
            utf8_percent_encode(username, NON_ALPHANUMERIC)
        )
    }

    /// `apikey` plus a bearer token: the user's when signed in, else the anon key
    fn authorize(&self, builder: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
        let anon_key = self.anon_key.expose_secret();
        builder
            .header("apikey", anon_key)
            .bearer_auth(access_token.unwrap_or(anon_key))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, BackendError> {
        let response = builder.send().await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(parse_error_body(status, &body))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
    error_code: Option<String>,
    code: Option<Value>,
}

/// Turn a non-success response into a [`BackendError`]. GoTrue and PostgREST
/// use different field names for the same things.
pub fn parse_error_body(status: u16, body: &str) -> BackendError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .msg
        .or(parsed.message)
        .or(parsed.error_description)
        .or(parsed.error.clone())
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    let code = parsed
        .error_code
        .or_else(|| match parsed.code {
            Some(Value::String(code)) => Some(code),
            _ => None,
        })
        .or(parsed.error);

    let error = BackendError::new(message).with_status(status);
    match code {
        Some(code) => error.with_code(code),
        None => error,
    }
}

#[derive(Debug, Deserialize)]
struct UsernameRow {
    username: String,
}

#[async_trait]
impl AuthBackend for RestBackend {
    async fn sign_up(
        &self,
        email: &str,
        password: &SecretString,
        attributes: Option<&UserAttributes>,
    ) -> Result<AuthData, BackendError> {
        let body = json!({
            "email": email,
            "password": password.expose_secret(),
            "data": attributes,
        });
        let request = self.authorize(self.client.post(self.auth_url("signup")), None);
        let value: Value = self.send(request.json(&body)).await?.json().await?;

        // with email confirmation on, the bare user comes back instead of a session
        if value.get("access_token").is_some() {
            let session: Session = serde_json::from_value(value)
                .map_err(|e| BackendError::new(format!("Unexpected sign-up response: {e}")))?;
            Ok(AuthData {
                user: Some(session.user.clone()),
                session: Some(session),
            })
        } else {
            let user: User = serde_json::from_value(value)
                .map_err(|e| BackendError::new(format!("Unexpected sign-up response: {e}")))?;
            Ok(AuthData {
                user: Some(user),
                session: None,
            })
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<Session, BackendError> {
        let body = json!({ "email": email, "password": password.expose_secret() });
        let request = self.authorize(
            self.client.post(self.auth_url("token?grant_type=password")),
            None,
        );
        Ok(self.send(request.json(&body)).await?.json().await?)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), BackendError> {
        let request = self.authorize(self.client.post(self.auth_url("logout")), Some(access_token));
        self.send(request).await?;
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<User, BackendError> {
        let request = self.authorize(self.client.get(self.auth_url("user")), Some(access_token));
        Ok(self.send(request).await?.json().await?)
    }

    async fn find_username(&self, username: &str) -> Result<Option<String>, BackendError> {
        let request = self.authorize(self.client.get(self.username_query_url(username)), None);
        let rows: Vec<UsernameRow> = self.send(request).await?.json().await?;
        match rows.len() {
            0 | 1 => Ok(rows.into_iter().next().map(|row| row.username)),
            n => Err(BackendError::new(format!(
                "JSON object requested, multiple ({n}) rows returned"
            ))
            .with_status(406)
            .with_code("PGRST116")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn config(url: &str, anon_key: Option<&str>) -> BackendConfig {
        BackendConfig {
            url: url.to_string(),
            anon_key: anon_key.map(|key| SecretString::from(key.to_string())),
        }
    }

    #[rstest]
    #[case("", Some("key"))]
    #[case("https://abc.supabase.co", None)]
    #[case("", None)]
    fn test_missing_settings_are_fatal(#[case] url: &str, #[case] anon_key: Option<&str>) {
        let result = RestBackend::from_config(&config(url, anon_key));
        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[test]
    fn test_invalid_url() {
        let result = RestBackend::from_config(&config("not a url", Some("key")));
        assert!(matches!(result, Err(GatewayError::InvalidUrl { .. })));
    }

    #[test]
    fn test_username_query_is_encoded() -> Result<(), GatewayError> {
        let backend = RestBackend::from_config(&config("https://abc.supabase.co/", Some("key")))?;
        assert_eq!(backend.base_url(), "https://abc.supabase.co");
        assert_eq!(
            backend.username_query_url("a&b=c"),
            "https://abc.supabase.co/rest/v1/users?select=username&username=eq.a%26b%3Dc"
        );
        Ok(())
    }

    #[test]
    fn test_parse_gotrue_error() {
        let error = parse_error_body(
            400,
            r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
        );
        assert_eq!(
            error,
            BackendError::new("Invalid login credentials")
                .with_status(400)
                .with_code("invalid_credentials")
        );
    }

    #[test]
    fn test_parse_postgrest_error() {
        let error = parse_error_body(
            404,
            r#"{"code":"42P01","message":"relation \"public.users\" does not exist"}"#,
        );
        assert_eq!(error.code.as_deref(), Some("42P01"));
        assert_eq!(error.message, "relation \"public.users\" does not exist");
    }

    #[test]
    fn test_parse_unreadable_body() {
        let error = parse_error_body(502, "<html>Bad gateway</html>");
        assert_eq!(error.message, "Request failed with status 502");
        assert_eq!(error.status, Some(502));
    }
}
