//! In-memory stand-ins for the data service and the OS clipboard.
//!
//! Used by unit tests, the integration tests under `tests/` and benches.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use futures::future::BoxFuture;

use crate::{
    domain::copy::{
        ClipboardError, ColumnCopyRequest, CopyError, CopyRequest, RowCopyRequest, RowSpan,
    },
    infrastructure::{clipboard::ClipboardWriter, copy_repository::CopyRepository},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Text the stub service answers with.
///
/// Cells read `{column}{row}`, tab separated; column copies list each
/// column once per line under the header.
pub fn render_copy_text(request: &CopyRequest) -> String {
    let mut lines = Vec::new();
    match request {
        CopyRequest::Rows(req) => {
            if req.include_headers {
                lines.push(req.columns.join("\t"));
            }
            let rows: Vec<usize> = match &req.rows {
                RowSpan::Range(range) => range.normalized().indices().collect(),
                RowSpan::Rows(rows) => rows.clone(),
            };
            for row in rows {
                let cells: Vec<String> = req.columns.iter().map(|c| format!("{c}{row}")).collect();
                lines.push(cells.join("\t"));
            }
        }
        CopyRequest::Columns(req) => {
            if req.include_headers {
                lines.push(req.columns.join("\t"));
            }
            let cells: Vec<String> = req.columns.iter().map(|c| format!("{c}*")).collect();
            lines.push(cells.join("\t"));
        }
    }
    lines.join("\n")
}

/// Scriptable data service
#[derive(Debug, Default)]
pub struct StubCopyRepository {
    delays: Mutex<VecDeque<Duration>>,
    failure: Mutex<Option<CopyError>>,
    requests: Mutex<Vec<CopyRequest>>,
}

impl StubCopyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the n-th call after `delays[n]`; calls past the list answer at once
    pub fn with_delays(delays: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            delays: Mutex::new(delays.into_iter().collect()),
            ..Default::default()
        }
    }

    /// Fail every call with `error`
    pub fn failing(error: CopyError) -> Self {
        Self {
            failure: Mutex::new(Some(error)),
            ..Default::default()
        }
    }

    pub fn set_failure(&self, error: Option<CopyError>) {
        *lock(&self.failure) = error;
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<CopyRequest> {
        lock(&self.requests).clone()
    }

    async fn respond(&self, request: CopyRequest) -> Result<String, CopyError> {
        let delay = lock(&self.delays).pop_front();
        lock(&self.requests).push(request.clone());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let failure = lock(&self.failure).clone();
        match failure {
            Some(error) => Err(error),
            None => Ok(render_copy_text(&request)),
        }
    }
}

impl CopyRepository for StubCopyRepository {
    fn build_row_copy<'a>(
        &'a self,
        request: &'a RowCopyRequest,
    ) -> BoxFuture<'a, Result<String, CopyError>> {
        Box::pin(self.respond(CopyRequest::Rows(request.clone())))
    }

    fn build_column_copy<'a>(
        &'a self,
        request: &'a ColumnCopyRequest,
    ) -> BoxFuture<'a, Result<String, CopyError>> {
        Box::pin(self.respond(CopyRequest::Columns(request.clone())))
    }
}

/// Clipboard that records writes instead of touching the OS
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    failure: Mutex<Option<ClipboardError>>,
    written: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ClipboardError) -> Self {
        Self {
            failure: Mutex::new(Some(error)),
            ..Default::default()
        }
    }

    pub fn set_failure(&self, error: Option<ClipboardError>) {
        *lock(&self.failure) = error;
    }

    pub fn written(&self) -> Vec<String> {
        lock(&self.written).clone()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(error) = lock(&self.failure).clone() {
            return Err(error);
        }
        lock(&self.written).push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::IndexRange;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_row_range() {
        let request = CopyRequest::Rows(RowCopyRequest {
            data_id: "1".to_string(),
            columns: vec!["a".to_string(), "b".to_string()],
            rows: RowSpan::Range(IndexRange::new(3, 2)),
            include_headers: true,
        });
        assert_eq!(render_copy_text(&request), "a\tb\na2\tb2\na3\tb3");
    }

    #[test]
    fn test_render_columns_without_headers() {
        let request = CopyRequest::Columns(ColumnCopyRequest {
            data_id: "1".to_string(),
            columns: vec!["a".to_string()],
            include_headers: false,
        });
        assert_eq!(render_copy_text(&request), "a*");
    }

    #[tokio::test]
    async fn test_stub_records_and_fails() {
        let repo = StubCopyRepository::failing(CopyError::Server("boom".to_string()));
        let request = ColumnCopyRequest {
            data_id: "1".to_string(),
            columns: vec!["a".to_string()],
            include_headers: true,
        };
        let result = repo.build_column_copy(&request).await;
        assert_eq!(result, Err(CopyError::Server("boom".to_string())));
        assert_eq!(repo.requests(), vec![CopyRequest::Columns(request)]);
    }

    #[test]
    fn test_memory_clipboard() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("x").unwrap();
        clipboard.set_failure(Some(ClipboardError::Denied("no".to_string())));
        assert!(clipboard.write_text("y").is_err());
        assert_eq!(clipboard.written(), vec!["x".to_string()]);
    }
}
