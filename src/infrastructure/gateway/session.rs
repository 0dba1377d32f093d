//! Session persistence between invocations.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{Result, WrapErr};

use super::backend::Session;

pub const SESSION_FILE: &str = "session.json";

/// JSON file holding the signed-in session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store inside `dir` under the default file name
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored session; an unreadable file counts as signed out
    pub fn load(&self) -> Option<Session> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Failed to read session {}: {e}", self.path.display());
                return None;
            }
        };
        serde_json::from_str(&json)
            .inspect_err(|e| log::warn!("Ignoring corrupt session {}: {e}", self.path.display()))
            .ok()
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
            .wrap_err_with(|| format!("Failed to write session {}", self.path.display()))?;
        restrict_permissions(&self.path)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e)
                .wrap_err_with(|| format!("Failed to remove session {}", self.path.display())),
            _ => Ok(()),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
