//! Access to the data service that renders clipboard text.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Url;

use crate::domain::copy::{
    ColumnCopyRequest, CopyError, CopyRequest, CopyResponse, RowCopyRequest, RowSpan,
};

/// Export endpoints of the data service.
///
/// Implementations return the exact text to put on the clipboard; cell
/// formatting is entirely the service's business.
pub trait CopyRepository: Send + Sync {
    fn build_row_copy<'a>(
        &'a self,
        request: &'a RowCopyRequest,
    ) -> BoxFuture<'a, Result<String, CopyError>>;

    fn build_column_copy<'a>(
        &'a self,
        request: &'a ColumnCopyRequest,
    ) -> BoxFuture<'a, Result<String, CopyError>>;

    /// Dispatch on the request variant
    fn build_copy<'a>(&'a self, request: &'a CopyRequest) -> BoxFuture<'a, Result<String, CopyError>> {
        match request {
            CopyRequest::Rows(req) => self.build_row_copy(req),
            CopyRequest::Columns(req) => self.build_column_copy(req),
        }
    }
}

/// D-Tale style HTTP data service
pub struct HttpCopyRepository {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpCopyRepository {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CopyError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CopyError::Transport(format!("invalid base url {base_url:?}: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(format!("gridclip/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| CopyError::Transport(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// `GET {base}/dtale/build-row-copy/{data_id}?columns=[..]&start=..&end=..&headers=..`
    pub fn row_copy_url(&self, request: &RowCopyRequest) -> Result<Url, CopyError> {
        let mut url = self.endpoint("build-row-copy", &request.data_id)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("columns", &json_list(&request.columns)?);
            match &request.rows {
                RowSpan::Range(range) => {
                    let range = range.normalized();
                    query.append_pair("start", &range.start.to_string());
                    query.append_pair("end", &range.end.to_string());
                }
                RowSpan::Rows(rows) => {
                    query.append_pair("rows", &json_list(rows)?);
                }
            }
            query.append_pair("headers", bool_param(request.include_headers));
        }
        Ok(url)
    }

    /// `GET {base}/dtale/build-column-copy/{data_id}?columns=[..]&headers=..`
    pub fn column_copy_url(&self, request: &ColumnCopyRequest) -> Result<Url, CopyError> {
        let mut url = self.endpoint("build-column-copy", &request.data_id)?;
        url.query_pairs_mut()
            .append_pair("columns", &json_list(&request.columns)?)
            .append_pair("headers", bool_param(request.include_headers));
        Ok(url)
    }

    fn endpoint(&self, route: &str, data_id: &str) -> Result<Url, CopyError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CopyError::Transport(format!("base url {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["dtale", route, data_id]);
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<String, CopyError> {
        log::debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CopyError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CopyError::Transport(format!("HTTP {status}")));
        }
        let body: CopyResponse = response
            .json()
            .await
            .map_err(|e| CopyError::InvalidResponse(e.to_string()))?;
        body.into_result()
    }
}

impl CopyRepository for HttpCopyRepository {
    fn build_row_copy<'a>(
        &'a self,
        request: &'a RowCopyRequest,
    ) -> BoxFuture<'a, Result<String, CopyError>> {
        Box::pin(async move {
            let url = self.row_copy_url(request)?;
            self.fetch(url).await
        })
    }

    fn build_column_copy<'a>(
        &'a self,
        request: &'a ColumnCopyRequest,
    ) -> BoxFuture<'a, Result<String, CopyError>> {
        Box::pin(async move {
            let url = self.column_copy_url(request)?;
            self.fetch(url).await
        })
    }
}

fn json_list<T: serde::Serialize>(items: &[T]) -> Result<String, CopyError> {
    serde_json::to_string(items).map_err(|e| CopyError::InvalidResponse(e.to_string()))
}

fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
