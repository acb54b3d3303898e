use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::Cmd,
        msg::{copy::CopyMsg, Msg},
    },
    infrastructure::{clipboard::ClipboardWriter, copy_repository::CopyRepository},
};

/// Command executor that runs Elm commands against the data service and
/// the clipboard, reporting outcomes back as messages
#[derive(Clone)]
pub struct CmdExecutor {
    repository: Arc<dyn CopyRepository>,
    clipboard: Option<Arc<dyn ClipboardWriter>>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    cancel_token: CancellationToken,
}

impl CmdExecutor {
    pub fn new(repository: Arc<dyn CopyRepository>, msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            repository,
            clipboard: None,
            msg_tx,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    /// Execute a single command.
    ///
    /// `BuildCopy` is spawned onto the tokio runtime and must be called from
    /// within one; the result arrives later as `CopyMsg::BuildFinished`.
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::BuildCopy { token, request } => {
                let token = *token;
                let request = request.clone();
                let repository = Arc::clone(&self.repository);
                let msg_tx = self.msg_tx.clone();
                let cancel_token = self.cancel_token.clone();
                log::debug!("Building copy #{} for {} column(s)", token.0, request.columns().len());

                tokio::spawn(async move {
                    let result = tokio::select! {
                        _ = cancel_token.cancelled() => {
                            log::debug!("Copy build #{} cancelled", token.0);
                            return;
                        }
                        result = repository.build_copy(&request) => result,
                    };
                    if msg_tx
                        .send(Msg::Copy(CopyMsg::BuildFinished { token, result }))
                        .is_err()
                    {
                        log::debug!("Copy build #{} finished after runtime shut down", token.0);
                    }
                });
            }

            Cmd::WriteClipboard { text } => {
                let outcome = match &self.clipboard {
                    Some(clipboard) => clipboard.write_text(text).map_err(|e| e.to_string()),
                    None => {
                        log::warn!("WriteClipboard ignored: no clipboard configured");
                        Err("no clipboard configured".to_string())
                    }
                };
                let msg = match outcome {
                    Ok(()) => CopyMsg::ClipboardWritten,
                    Err(e) => CopyMsg::ClipboardWriteFailed(e),
                };
                self.msg_tx.send(Msg::Copy(msg))?;
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Abandon builds still in flight
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
