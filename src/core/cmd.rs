use serde::{Deserialize, Serialize};

use crate::domain::copy::{CopyRequest, RequestToken};

/// Elm-like command definitions
/// Represents side effects (network round-trips, clipboard access, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Data service
    BuildCopy {
        token: RequestToken,
        request: CopyRequest,
    },

    // OS clipboard
    WriteClipboard {
        text: String,
    },

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Human-readable command name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::BuildCopy { token, .. } => format!("BuildCopy(#{})", token.0),
            Cmd::WriteClipboard { .. } => "WriteClipboard".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::None => "None".to_string(),
        }
    }
}
