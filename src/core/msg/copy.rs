use serde::{Deserialize, Serialize};

use crate::domain::copy::{CopyError, RequestToken};

/// Messages for the clipboard builder and the copy surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyMsg {
    /// A build request came back; applied only if `token` is still pending
    BuildFinished {
        token: RequestToken,
        result: Result<String, CopyError>,
    },
    ToggleStripHeader,
    Confirm,
    Dismiss,
    ClipboardWritten,
    ClipboardWriteFailed(String),
}

impl CopyMsg {
    pub fn is_frequent(&self) -> bool {
        false
    }
}
