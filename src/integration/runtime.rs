use std::{collections::VecDeque, sync::Arc, time::Duration};

use color_eyre::eyre::{eyre, Result};
use tokio::{sync::mpsc, time::Instant};

use crate::{
    core::{
        cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    domain::selection::SelectionMode,
    infrastructure::{clipboard::ClipboardWriter, copy_repository::CopyRepository},
};

/// Owns the application state and drives the translate, update and execute loop
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a Runtime that only queues commands
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a Runtime that executes commands against `repository` and, if
    /// given, the clipboard
    pub fn new_with_executor(
        initial_state: AppState,
        repository: Arc<dyn CopyRepository>,
        clipboard: Option<Arc<dyn ClipboardWriter>>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        let executor = CmdExecutor::new(repository, runtime.msg_tx.clone());
        runtime.cmd_executor = Some(match clipboard {
            Some(clipboard) => executor.with_clipboard(clipboard),
            None => executor,
        });
        runtime
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        let commands = self.pending_commands();
        let Some(executor) = &self.cmd_executor else {
            return Err(eyre!(
                "No command executor available, {} command(s) dropped",
                commands.len()
            ));
        };
        if commands.is_empty() {
            return Ok(vec![]);
        }
        executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Processing {msg:?}");
        }
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate a raw message against the current state and process the
    /// result immediately, so the next raw message sees its effect
    pub fn process_raw_message(&mut self, raw_msg: RawMsg) -> Vec<Cmd> {
        if !raw_msg.is_frequent() {
            log::debug!("Translating {raw_msg:?}");
        }
        translate_raw_to_domain(raw_msg, &self.state)
            .into_iter()
            .flat_map(|msg| self.process_message(msg))
            .collect()
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            all_commands.extend(self.process_raw_message(raw_msg));
        }
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            all_commands.extend(self.process_raw_message(raw_msg));
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Run update cycles until no copy build or clipboard write is
    /// outstanding, waiting for executor results as they arrive
    pub async fn settle(&mut self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            self.run_update_cycle()?;
            if !self.state.copy.is_busy() {
                return Ok(());
            }
            match tokio::time::timeout_at(deadline, self.msg_rx.recv()).await {
                Ok(Some(msg)) => self.msg_queue.push_back(msg),
                Ok(None) => return Err(eyre!("message channel closed")),
                Err(_) => {
                    return Err(eyre!(
                        "timed out after {timeout:?} waiting for the copy surface"
                    ))
                }
            }
        }
    }

    /// Cancel outstanding builds
    pub fn shutdown(&self) {
        if let Some(executor) = &self.cmd_executor {
            executor.shutdown();
        }
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            selection_mode: self.state.selection.mode(),
            is_copy_busy: self.state.copy.is_busy(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub selection_mode: SelectionMode,
    pub is_copy_busy: bool,
    pub has_executor: bool,
}
