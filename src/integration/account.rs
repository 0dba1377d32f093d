//! The `account` subcommand: one gateway operation per invocation, printed
//! as JSON.

use std::io::BufRead;

use color_eyre::eyre::{eyre, Result};
use secrecy::SecretString;
use serde_json::Value;

use crate::{
    infrastructure::{
        cli::AccountCommand,
        config::Config,
        gateway::{self, AccountGateway, AuthBackend, SessionStore, UserAttributes},
    },
    utils::get_data_dir,
};

/// Run `command` against the configured backend and print the result.
///
/// Format validation needs no backend; every other action fails here when
/// the backend settings are incomplete.
pub async fn run(command: AccountCommand, config: &Config) -> Result<()> {
    let output = match command {
        AccountCommand::ValidateUsername { username } => {
            serde_json::to_value(gateway::validate_username_format(&username))?
        }
        command => {
            let command = with_password(command, read_password)?;
            let store = SessionStore::in_dir(&get_data_dir());
            let gateway = gateway::init(&config.backend, Some(store))?;
            execute(gateway, command).await?
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Run one action and return its normalized response
pub async fn execute<B: AuthBackend>(
    gateway: &AccountGateway<B>,
    command: AccountCommand,
) -> Result<Value> {
    let value = match command {
        AccountCommand::SignUp {
            email,
            password,
            username,
            attrs,
        } => {
            let password = required_password(password)?;
            let attributes = attributes(username, attrs);
            let attributes = (!attributes.is_empty()).then_some(&attributes);
            serde_json::to_value(gateway.sign_up(&email, &password, attributes).await)?
        }
        AccountCommand::SignIn { email, password } => {
            let password = required_password(password)?;
            serde_json::to_value(gateway.sign_in(&email, &password).await)?
        }
        AccountCommand::SignOut => serde_json::to_value(gateway.sign_out().await)?,
        AccountCommand::Whoami => serde_json::to_value(gateway.get_current_user().await)?,
        AccountCommand::CheckUsername { username } => {
            serde_json::to_value(gateway.check_username_availability(&username).await)?
        }
        AccountCommand::ValidateUsername { username } => {
            serde_json::to_value(gateway.validate_username_format(&username))?
        }
    };
    Ok(value)
}

/// Fill in a missing password of sign-up and sign-in from `read`
pub fn with_password(
    command: AccountCommand,
    read: impl FnOnce() -> Result<String>,
) -> Result<AccountCommand> {
    let command = match command {
        AccountCommand::SignUp {
            email,
            password: None,
            username,
            attrs,
        } => AccountCommand::SignUp {
            email,
            password: Some(read()?),
            username,
            attrs,
        },
        AccountCommand::SignIn {
            email,
            password: None,
        } => AccountCommand::SignIn {
            email,
            password: Some(read()?),
        },
        command => command,
    };
    Ok(command)
}

fn read_password() -> Result<String> {
    eprint!("Password: ");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn required_password(password: Option<String>) -> Result<SecretString> {
    password
        .filter(|password| !password.is_empty())
        .map(SecretString::from)
        .ok_or_else(|| eyre!("A password is required"))
}

/// Profile attributes from `--username` and `--attr` pairs
fn attributes(username: Option<String>, attrs: Vec<(String, String)>) -> UserAttributes {
    let mut attributes: UserAttributes = attrs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    if let Some(username) = username {
        attributes.insert("username".into(), Value::String(username));
    }
    attributes
}
