//! HTTP record store client
//!
//! Talks to the packaging lookup-store API over HTTPS. Maps transport and
//! status failures into [`StoreError`] so nothing upstream sees reqwest
//! types. No retry or backoff here: the orchestrator owns that policy.

use crate::adapters::store::models::QueryRecordsResponse;
use crate::adapters::store::traits::{RecordPage, RecordStore};
use crate::config::schema::StoreConfig;
use crate::domain::ids::JobId;
use crate::domain::record::FileRecord;
use crate::domain::result::Result;
use crate::domain::token::PageToken;
use crate::domain::{PorterError, StoreError};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::time::Duration;

/// Page size used when draining a whole result set
const DRAIN_PAGE_SIZE: usize = 1000;

/// HTTP gateway to the packaging lookup store
pub struct HttpRecordStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpRecordStore {
    /// Creates a client from the store configuration
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the HTTP client cannot be built.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                PorterError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    async fn fetch_page(
        &self,
        job_id: &JobId,
        context: &str,
        token: Option<&PageToken>,
        chunk_size: usize,
    ) -> Result<QueryRecordsResponse> {
        let url = format!("{}/api/v1/records", self.config.base_url.trim_end_matches('/'));

        let mut request = self
            .client
            .get(&url)
            .query(&[
                ("context", job_id.context_key(context)),
                ("rowsPerPage", chunk_size.to_string()),
            ]);

        if let Some(token) = token {
            request = request.query(&[("token", token.as_str())]);
        }

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout(e.to_string())
            } else if e.is_connect() {
                StoreError::ConnectionFailed(e.to_string())
            } else {
                StoreError::QueryFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let err = match status.as_u16() {
                401 | 403 => StoreError::AuthenticationFailed(message),
                code if status.is_server_error() => StoreError::ServerError {
                    status: code,
                    message,
                },
                code => StoreError::ClientError {
                    status: code,
                    message,
                },
            };
            return Err(err.into());
        }

        let body: QueryRecordsResponse = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

        Ok(body)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn query(&self, job_id: &JobId, context: &str) -> Result<Vec<FileRecord>> {
        let mut records = Vec::new();
        let mut token: Option<PageToken> = None;

        loop {
            let page = self
                .fetch_page(job_id, context, token.as_ref(), DRAIN_PAGE_SIZE)
                .await?;
            records.extend(page.results);

            match page.next_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        tracing::debug!(
            job_id = %job_id,
            context = context,
            count = records.len(),
            "Fetched full record set from store"
        );

        Ok(records)
    }

    async fn query_page(
        &self,
        job_id: &JobId,
        context: &str,
        token: Option<&PageToken>,
        chunk_size: usize,
    ) -> Result<RecordPage> {
        let page = self.fetch_page(job_id, context, token, chunk_size).await?;
        Ok(RecordPage {
            records: page.results,
            next_token: page.next_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_for(url: &str) -> HttpRecordStore {
        HttpRecordStore::new(StoreConfig {
            base_url: url.to_string(),
            token: None,
            timeout_seconds: 5,
            context: "file".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_query_page_parses_window() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/records")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("context".into(), "pkg.01ABC__file".into()),
                mockito::Matcher::UrlEncoded("rowsPerPage".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "results": [
                        {
                            "bucket": "b",
                            "key": "pkg/fastq/run1/a.fastq.gz",
                            "relativePath": "fastq/run1/a.fastq.gz",
                            "ingestId": "0193f6a0-1111-7000-8000-000000000001"
                        }
                    ],
                    "nextToken": "tok-1"
                }"#,
            )
            .create_async()
            .await;

        let store = store_for(&server.url());
        let job_id = JobId::new("pkg.01ABC").unwrap();
        let page = store.query_page(&job_id, "file", None, 2).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.next_token, Some(PageToken::new("tok-1")));
    }

    #[tokio::test]
    async fn test_query_drains_all_pages() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/api/v1/records")
            .match_query(mockito::Matcher::AllOf(vec![mockito::Matcher::UrlEncoded(
                "context".into(),
                "pkg.01ABC__file".into(),
            )]))
            .with_status(200)
            .with_body(
                r#"{
                    "results": [{
                        "bucket": "b",
                        "key": "k1",
                        "relativePath": "fastq/run1/a.gz",
                        "ingestId": "0193f6a0-1111-7000-8000-000000000001"
                    }],
                    "nextToken": "tok-1"
                }"#,
            )
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/api/v1/records")
            .match_query(mockito::Matcher::AllOf(vec![mockito::Matcher::UrlEncoded(
                "token".into(),
                "tok-1".into(),
            )]))
            .with_status(200)
            .with_body(
                r#"{
                    "results": [{
                        "bucket": "b",
                        "key": "k2",
                        "relativePath": "fastq/run1/b.gz",
                        "ingestId": "0193f6a0-1111-7000-8000-000000000002"
                    }]
                }"#,
            )
            .expect(1)
            .create_async()
            .await;

        let store = store_for(&server.url());
        let job_id = JobId::new("pkg.01ABC").unwrap();
        let records = store.query(&job_id, "file").await.unwrap();

        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_server_error_maps_to_store_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/records")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let store = store_for(&server.url());
        let job_id = JobId::new("pkg.01ABC").unwrap();
        let err = store.query_page(&job_id, "file", None, 10).await.unwrap_err();
        assert!(matches!(
            err,
            PorterError::Store(StoreError::ServerError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication_failed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/records")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let store = store_for(&server.url());
        let job_id = JobId::new("pkg.01ABC").unwrap();
        let err = store.query_page(&job_id, "file", None, 10).await.unwrap_err();
        assert!(matches!(
            err,
            PorterError::Store(StoreError::AuthenticationFailed(_))
        ));
    }
}
