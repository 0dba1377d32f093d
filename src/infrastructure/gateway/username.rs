use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 20;

pub const TOO_SHORT: &str = "Username must be at least 3 characters.";
pub const TOO_LONG: &str = "Username cannot be more than 20 characters.";
pub const BAD_CHARACTERS: &str = "Use only lowercase letters, numbers, and hyphens.";

lazy_static! {
    static ref USERNAME: Option<Regex> = Regex::new(r"^[a-z0-9-]{3,20}$").ok();
}

/// Outcome of [`validate_username_format`]; `message` is empty when valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameCheck {
    pub valid: bool,
    pub message: String,
}

impl UsernameCheck {
    fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Check a username locally. Length is counted in UTF-16 code units, as
/// browsers count it, and checked before the character set.
pub fn validate_username_format(username: &str) -> UsernameCheck {
    let length = username.encode_utf16().count();
    if length < MIN_LENGTH {
        UsernameCheck::invalid(TOO_SHORT)
    } else if length > MAX_LENGTH {
        UsernameCheck::invalid(TOO_LONG)
    } else if !USERNAME.as_ref().is_some_and(|re| re.is_match(username)) {
        UsernameCheck::invalid(BAD_CHARACTERS)
    } else {
        UsernameCheck {
            valid: true,
            message: String::new(),
        }
    }
}
