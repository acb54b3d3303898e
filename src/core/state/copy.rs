//! Clipboard builder and copy surface state.
//!
//! Every build request is tagged with a fresh [`RequestToken`]. Only the
//! response carrying the most recent token is applied; anything older is
//! dropped when it arrives, whatever order the responses come back in.

use crate::{
    core::{cmd::Cmd, msg::copy::CopyMsg},
    domain::copy::{ClipboardPayload, CopyRequest, RequestToken},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopySurfaceState {
    last_token: RequestToken,
    pending: Option<RequestToken>,
    last_request: Option<CopyRequest>,
    pub payload: Option<ClipboardPayload>,
    pub error: Option<String>,
    /// Transient clipboard write failure; the payload stays for a retry
    pub write_error: Option<String>,
    pub strip_header: bool,
    writing: bool,
}

impl CopySurfaceState {
    pub fn new(strip_header: bool) -> Self {
        Self {
            strip_header,
            ..Default::default()
        }
    }

    pub fn pending(&self) -> Option<RequestToken> {
        self.pending
    }

    pub fn last_request(&self) -> Option<&CopyRequest> {
        self.last_request.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.payload.as_ref().map(|p| p.text.as_str())
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Waiting on the data service or the OS clipboard
    pub fn is_busy(&self) -> bool {
        self.pending.is_some() || self.writing
    }

    /// A clipboard write has been issued and not yet reported back
    pub fn is_writing(&self) -> bool {
        self.writing
    }

    pub fn is_visible(&self) -> bool {
        self.pending.is_some() || self.payload.is_some() || self.error.is_some()
    }

    /// Start a build for a freshly committed selection
    pub fn request(&mut self, request: CopyRequest) -> Vec<Cmd> {
        self.payload = None;
        self.issue(request)
    }

    /// Forget the current build and close the surface. A response still in
    /// flight will find its token stale and be dropped.
    pub fn invalidate(&mut self) {
        self.pending = None;
        self.last_request = None;
        self.payload = None;
        self.error = None;
        self.write_error = None;
        self.writing = false;
    }

    fn issue(&mut self, request: CopyRequest) -> Vec<Cmd> {
        let token = self.last_token.next();
        self.last_token = token;
        let request = request.with_headers(!self.strip_header);

        self.pending = Some(token);
        self.last_request = Some(request.clone());
        self.error = None;
        self.write_error = None;

        vec![Cmd::BuildCopy { token, request }]
    }

    /// Copy-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: CopyMsg) -> Vec<Cmd> {
        match msg {
            CopyMsg::BuildFinished { token, result } => {
                if self.pending != Some(token) {
                    log::debug!(
                        "Dropping stale copy response #{} (pending: {:?})",
                        token.0,
                        self.pending
                    );
                    return vec![];
                }
                self.pending = None;
                match result {
                    Ok(text) => {
                        self.payload = Some(ClipboardPayload { text });
                        self.error = None;
                        vec![]
                    }
                    Err(e) => {
                        self.payload = None;
                        self.error = Some(e.to_string());
                        vec![Cmd::LogError {
                            message: format!("Copy build #{} failed: {e}", token.0),
                        }]
                    }
                }
            }

            CopyMsg::ToggleStripHeader => {
                self.strip_header = !self.strip_header;
                match self.last_request.clone() {
                    Some(request) => self.issue(request),
                    None => vec![],
                }
            }

            CopyMsg::Confirm => match &self.payload {
                Some(payload) if !self.writing => {
                    self.writing = true;
                    self.write_error = None;
                    vec![Cmd::WriteClipboard {
                        text: payload.text.clone(),
                    }]
                }
                _ => vec![],
            },

            CopyMsg::Dismiss => {
                self.invalidate();
                vec![]
            }

            CopyMsg::ClipboardWritten | CopyMsg::ClipboardWriteFailed(_) if !self.writing => {
                log::debug!("Dropping clipboard result for a surface that moved on");
                vec![]
            }

            CopyMsg::ClipboardWritten => {
                let copied = self.payload.as_ref().map_or(0, |p| p.text.len());
                self.invalidate();
                vec![Cmd::LogInfo {
                    message: format!("Copied {copied} bytes to clipboard"),
                }]
            }

            CopyMsg::ClipboardWriteFailed(error) => {
                self.writing = false;
                self.write_error = Some(error.clone());
                vec![Cmd::LogError {
                    message: format!("Clipboard write failed: {error}"),
                }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::copy::{ColumnCopyRequest, CopyError};
    use pretty_assertions::assert_eq;

    fn column_request() -> CopyRequest {
        CopyRequest::Columns(ColumnCopyRequest {
            data_id: "1".to_string(),
            columns: vec!["col1".to_string(), "col2".to_string()],
            include_headers: true,
        })
    }

    fn issued_token(cmds: &[Cmd]) -> RequestToken {
        match cmds {
            [Cmd::BuildCopy { token, .. }] => *token,
            other => panic!("expected a single BuildCopy, got {other:?}"),
        }
    }

    fn finished(token: RequestToken, text: &str) -> CopyMsg {
        CopyMsg::BuildFinished {
            token,
            result: Ok(text.to_string()),
        }
    }

    #[test]
    fn test_copy_surface_default() {
        let state = CopySurfaceState::default();
        assert!(!state.is_visible());
        assert!(!state.is_busy());
        assert_eq!(state.text(), None);
    }

    #[test]
    fn test_request_then_success() {
        let mut state = CopySurfaceState::default();
        let token = issued_token(&state.request(column_request()));
        assert!(state.is_visible());
        assert!(state.is_loading());

        let cmds = state.update(finished(token, "col1\tcol2\n1\t2"));
        assert!(cmds.is_empty());
        assert_eq!(state.text(), Some("col1\tcol2\n1\t2"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_tokens_increase() {
        let mut state = CopySurfaceState::default();
        let first = issued_token(&state.request(column_request()));
        let second = issued_token(&state.request(column_request()));
        assert!(second > first);
        assert_eq!(state.pending(), Some(second));
    }

    #[test]
    fn test_stale_response_is_dropped_in_either_order() {
        // late response of the superseded request
        let mut state = CopySurfaceState::default();
        let first = issued_token(&state.request(column_request()));
        let second = issued_token(&state.request(column_request()));
        state.update(finished(second, "second"));
        assert!(state.update(finished(first, "first")).is_empty());
        assert_eq!(state.text(), Some("second"));

        // superseded response arrives before the current one
        let mut state = CopySurfaceState::default();
        let first = issued_token(&state.request(column_request()));
        let second = issued_token(&state.request(column_request()));
        state.update(finished(first, "first"));
        assert_eq!(state.text(), None);
        assert!(state.is_loading());
        state.update(finished(second, "second"));
        assert_eq!(state.text(), Some("second"));
    }

    #[test]
    fn test_failure_clears_payload() {
        let mut state = CopySurfaceState::default();
        let token = issued_token(&state.request(column_request()));
        state.update(finished(token, "old"));

        let token = issued_token(&state.update(CopyMsg::ToggleStripHeader));
        // the previous text stays up while the variant loads
        assert_eq!(state.text(), Some("old"));

        let cmds = state.update(CopyMsg::BuildFinished {
            token,
            result: Err(CopyError::Server("No data".to_string())),
        });
        assert_eq!(state.text(), None);
        assert_eq!(state.error.as_deref(), Some("No data"));
        assert!(matches!(cmds.as_slice(), [Cmd::LogError { .. }]));
        assert!(state.is_visible());
    }

    #[test]
    fn test_strip_header_reissues_without_headers() {
        let mut state = CopySurfaceState::default();
        let first = issued_token(&state.request(column_request()));
        state.update(finished(first, "col1\tcol2\n1\t2"));

        let cmds = state.update(CopyMsg::ToggleStripHeader);
        assert!(state.strip_header);
        match cmds.as_slice() {
            [Cmd::BuildCopy { token, request }] => {
                assert!(*token > first);
                assert!(!request.include_headers());
                assert_eq!(request.columns(), column_request().columns());
            }
            other => panic!("unexpected commands: {other:?}"),
        }

        // toggling back asks for headers again
        let cmds = state.update(CopyMsg::ToggleStripHeader);
        assert!(matches!(
            cmds.as_slice(),
            [Cmd::BuildCopy { request, .. }] if request.include_headers()
        ));
    }

    #[test]
    fn test_strip_header_applies_to_next_request() {
        let mut state = CopySurfaceState::new(true);
        let cmds = state.request(column_request());
        assert!(matches!(
            cmds.as_slice(),
            [Cmd::BuildCopy { request, .. }] if !request.include_headers()
        ));
    }

    #[test]
    fn test_strip_header_without_request_only_toggles() {
        let mut state = CopySurfaceState::default();
        assert!(state.update(CopyMsg::ToggleStripHeader).is_empty());
        assert!(state.strip_header);
    }

    #[test]
    fn test_confirm_writes_clipboard() {
        let mut state = CopySurfaceState::default();
        let token = issued_token(&state.request(column_request()));
        state.update(finished(token, "a\tb"));

        let cmds = state.update(CopyMsg::Confirm);
        assert_eq!(
            cmds,
            vec![Cmd::WriteClipboard {
                text: "a\tb".to_string()
            }]
        );
        assert!(state.is_busy());
        // a second confirm while writing is ignored
        assert!(state.update(CopyMsg::Confirm).is_empty());

        state.update(CopyMsg::ClipboardWritten);
        assert!(!state.is_visible());
        assert!(!state.is_busy());
        assert_eq!(state.last_request(), None);
    }

    #[test]
    fn test_confirm_without_payload_is_ignored() {
        let mut state = CopySurfaceState::default();
        state.request(column_request());
        assert!(state.update(CopyMsg::Confirm).is_empty());
    }

    #[test]
    fn test_write_failure_keeps_payload() {
        let mut state = CopySurfaceState::default();
        let token = issued_token(&state.request(column_request()));
        state.update(finished(token, "a\tb"));
        state.update(CopyMsg::Confirm);

        state.update(CopyMsg::ClipboardWriteFailed("denied".to_string()));
        assert_eq!(state.text(), Some("a\tb"));
        assert_eq!(state.write_error.as_deref(), Some("denied"));

        // retry without re-fetching
        let cmds = state.update(CopyMsg::Confirm);
        assert!(matches!(cmds.as_slice(), [Cmd::WriteClipboard { .. }]));
        assert_eq!(state.write_error, None);
    }

    #[test]
    fn test_write_result_after_dismiss_is_dropped() {
        let mut state = CopySurfaceState::default();
        let token = issued_token(&state.request(column_request()));
        state.update(finished(token, "a\tb"));
        state.update(CopyMsg::Confirm);
        assert!(state.is_writing());

        state.update(CopyMsg::Dismiss);
        assert!(!state.is_writing());
        assert!(state.update(CopyMsg::ClipboardWritten).is_empty());
        assert!(state
            .update(CopyMsg::ClipboardWriteFailed("denied".to_string()))
            .is_empty());
        assert_eq!(state.write_error, None);
    }

    #[test]
    fn test_write_result_keeps_newer_build() {
        let mut state = CopySurfaceState::default();
        let token = issued_token(&state.request(column_request()));
        state.update(finished(token, "old"));
        state.update(CopyMsg::Confirm);

        state.invalidate();
        let newer = issued_token(&state.request(column_request()));
        state.update(CopyMsg::ClipboardWritten);

        assert_eq!(state.pending(), Some(newer));
        assert!(state.last_request().is_some());
        state.update(finished(newer, "new"));
        assert_eq!(state.text(), Some("new"));
    }

    #[test]
    fn test_dismiss_drops_in_flight_response() {
        let mut state = CopySurfaceState::default();
        let token = issued_token(&state.request(column_request()));
        state.update(CopyMsg::Dismiss);
        assert!(!state.is_visible());

        state.update(finished(token, "late"));
        assert_eq!(state.text(), None);
    }
}
