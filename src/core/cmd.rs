use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    Suspend,
}

/// Elm-like command definitions
/// Represents side effects the pure update function asks the runtime to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),
    /// Request a render outside the regular frame cadence
    RequestRender,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            Cmd::Tui(..) | Cmd::RequestRender => 0,
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),
            Cmd::None => 255,
        }
    }

    pub fn log_info(message: impl Into<String>) -> Cmd {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    pub fn log_error(message: impl Into<String>) -> Cmd {
        Cmd::LogError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flattens_trivial_cases() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::RequestRender]), Cmd::RequestRender);
        assert_eq!(
            Cmd::batch(vec![Cmd::RequestRender, Cmd::None]),
            Cmd::Batch(vec![Cmd::RequestRender, Cmd::None])
        );
    }

    #[test]
    fn test_priority() {
        assert_eq!(Cmd::RequestRender.priority(), 0);
        assert_eq!(Cmd::log_info("x").priority(), 4);
        assert_eq!(
            Cmd::Batch(vec![Cmd::log_error("x"), Cmd::Tui(TuiCommand::Suspend)]).priority(),
            0
        );
        assert_eq!(Cmd::None.priority(), 255);
    }
}
