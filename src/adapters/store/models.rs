//! Wire models of the lookup-store HTTP API

use crate::domain::record::FileRecord;
use crate::domain::token::PageToken;
use serde::Deserialize;

/// Response body of `GET /api/v1/records`
///
/// The continuation field is omitted entirely on the last page; an absent
/// field is terminal, never an error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRecordsResponse {
    /// Records in this window
    #[serde(default)]
    pub results: Vec<FileRecord>,

    /// Continuation token for the next window
    #[serde(default)]
    pub next_token: Option<PageToken>,
}
