//! Opaque pagination continuation token
//!
//! The lookup store pages a keyed index by returning a last-evaluated key with
//! each window. Porter never interprets the key: it is carried verbatim back
//! into the next page query. The start of every window sequence is the absent
//! token, so a sequence of N windows is `[None, Some(t1), .., Some(tN-1)]`.

use serde::{Deserialize, Serialize};

/// An opaque continuation token returned by the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(String);

impl PageToken {
    /// Wraps a raw token value
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PageToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}
