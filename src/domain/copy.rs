//! Clipboard export requests and results.
//!
//! The text placed on the clipboard is always produced by the data service;
//! nothing here formats cell values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::selection::IndexRange;

/// Identifies one clipboard build; later tokens supersede earlier ones
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RequestToken(pub u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Rows covered by a row-oriented export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowSpan {
    /// Contiguous, 1-based, inclusive
    Range(IndexRange),
    /// Explicit rows in click order
    Rows(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCopyRequest {
    pub data_id: String,
    pub columns: Vec<String>,
    pub rows: RowSpan,
    pub include_headers: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCopyRequest {
    pub data_id: String,
    pub columns: Vec<String>,
    pub include_headers: bool,
}

/// One of the two export requests the data service understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyRequest {
    Rows(RowCopyRequest),
    Columns(ColumnCopyRequest),
}

impl CopyRequest {
    pub fn include_headers(&self) -> bool {
        match self {
            CopyRequest::Rows(req) => req.include_headers,
            CopyRequest::Columns(req) => req.include_headers,
        }
    }

    pub fn with_headers(mut self, include_headers: bool) -> Self {
        match &mut self {
            CopyRequest::Rows(req) => req.include_headers = include_headers,
            CopyRequest::Columns(req) => req.include_headers = include_headers,
        }
        self
    }

    pub fn columns(&self) -> &[String] {
        match self {
            CopyRequest::Rows(req) => &req.columns,
            CopyRequest::Columns(req) => &req.columns,
        }
    }
}

/// What a committed selection exports, before it is bound to a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyScope {
    Rows { columns: Vec<String>, rows: RowSpan },
    Columns { columns: Vec<String> },
}

impl CopyScope {
    pub fn into_request(self, data_id: &str, include_headers: bool) -> CopyRequest {
        match self {
            CopyScope::Rows { columns, rows } => CopyRequest::Rows(RowCopyRequest {
                data_id: data_id.to_string(),
                columns,
                rows,
                include_headers,
            }),
            CopyScope::Columns { columns } => CopyRequest::Columns(ColumnCopyRequest {
                data_id: data_id.to_string(),
                columns,
                include_headers,
            }),
        }
    }
}

/// Text ready for the OS clipboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardPayload {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CopyError {
    /// The data service answered with `success: false`
    #[error("{0}")]
    Server(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Response body shared by both export endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CopyResponse {
    pub success: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CopyResponse {
    pub fn into_result(self) -> Result<String, CopyError> {
        match (self.success, self.text, self.error) {
            (true, Some(text), _) => Ok(text),
            (true, None, _) => Err(CopyError::InvalidResponse(
                "success without text".to_string(),
            )),
            (false, _, Some(error)) => Err(CopyError::Server(error)),
            (false, _, None) => Err(CopyError::Server("unknown server error".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write denied: {0}")]
    Denied(String),
}
