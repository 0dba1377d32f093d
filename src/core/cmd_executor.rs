use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Command executor that forwards Elm commands to the runtime's channels
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::Tui(tui_cmd) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(tui_cmd.clone())?;
                } else {
                    log::warn!("CmdExecutor: TUI sender not configured; dropping {:?}", tui_cmd);
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    rtx.send(())?;
                }
            }

            Cmd::LogError { message } => {
                log::error!("{}", message);
            }

            Cmd::LogInfo { message } => {
                log::info!("{}", message);
            }

            Cmd::Batch(commands) => {
                let mut ordered: Vec<&Cmd> = commands.iter().collect();
                ordered.sort_by_key(|cmd| cmd.priority());
                for cmd in ordered {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, logging failures instead of stopping
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::Tui(tc) => match tc {
                TuiCommand::Suspend => "Tui(Suspend)".to_string(),
                TuiCommand::Resize { .. } => "Tui(Resize)".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_executor() -> (
        CmdExecutor,
        mpsc::UnboundedReceiver<TuiCommand>,
        mpsc::UnboundedReceiver<()>,
    ) {
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_tui_sender(tui_tx);
        executor.set_render_request_sender(render_tx);
        (executor, tui_rx, render_rx)
    }

    #[test]
    fn test_execute_resize() -> Result<()> {
        let (executor, mut tui_rx, _render_rx) = create_test_executor();

        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        }))?;

        assert_eq!(
            tui_rx.try_recv()?,
            TuiCommand::Resize {
                width: 80,
                height: 24
            }
        );
        Ok(())
    }

    #[test]
    fn test_execute_render_request() -> Result<()> {
        let (executor, _tui_rx, mut render_rx) = create_test_executor();

        executor.execute_command(&Cmd::RequestRender)?;

        render_rx.try_recv()?;
        Ok(())
    }

    #[test]
    fn test_execute_none() -> Result<()> {
        let (executor, mut tui_rx, mut render_rx) = create_test_executor();

        executor.execute_command(&Cmd::None)?;

        assert!(tui_rx.try_recv().is_err());
        assert!(render_rx.try_recv().is_err());
        Ok(())
    }

    #[test]
    fn test_execute_batch_in_priority_order() -> Result<()> {
        let (executor, mut tui_rx, _render_rx) = create_test_executor();

        executor.execute_command(&Cmd::Batch(vec![
            Cmd::log_info("first in list"),
            Cmd::Tui(TuiCommand::Suspend),
            Cmd::Tui(TuiCommand::Resize {
                width: 100,
                height: 50,
            }),
        ]))?;

        assert_eq!(tui_rx.try_recv()?, TuiCommand::Suspend);
        assert_eq!(
            tui_rx.try_recv()?,
            TuiCommand::Resize {
                width: 100,
                height: 50
            }
        );
        Ok(())
    }

    #[test]
    fn test_execute_commands_reports_failures() {
        let (executor, tui_rx, _render_rx) = create_test_executor();
        drop(tui_rx);

        let log = executor.execute_commands(&[Cmd::log_info("hello"), Cmd::Tui(TuiCommand::Suspend)]);

        assert_eq!(log.len(), 2);
        assert!(log[0].starts_with("✓ Executed: LogInfo"));
        assert!(log[1].starts_with("✗ Failed to execute Tui(Suspend)"));
    }
}
