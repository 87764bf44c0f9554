//! Validated destination base URI
//!
//! Both manifest variants are addressed by a caller-supplied base location,
//! e.g. `s3://pipeline-cache/push/2024-06-01/` for an object-store folder push
//! or `icav2://project-id/shared/` for a CMS prefix push. The base is parsed
//! once up front; a wrong scheme or a missing component is a validation error
//! naming the offending part.

use crate::domain::errors::PorterError;
use crate::domain::result::Result;
use url::Url;

/// A parsed, validated destination base URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationUri {
    scheme: String,
    host: String,
    /// Path with leading and trailing slashes trimmed; may contain inner `/`
    path: String,
}

impl DestinationUri {
    /// Parses and validates a destination base URI
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw URI string supplied by the caller
    /// * `expected_scheme` - The scheme the active manifest variant requires
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming `scheme`, `host` or `path` when
    /// the corresponding component is wrong or missing.
    pub fn parse(raw: &str, expected_scheme: &str) -> Result<Self> {
        let url = Url::parse(raw).map_err(|e| {
            PorterError::validation("destinationBaseUri", format!("not a valid URI: {e}"))
        })?;

        if url.scheme() != expected_scheme {
            return Err(PorterError::validation(
                "scheme",
                format!(
                    "destination must be a {expected_scheme}:// URI, got '{}'",
                    url.scheme()
                ),
            ));
        }

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                PorterError::validation(
                    "host",
                    format!("destination '{raw}' has no bucket or project component"),
                )
            })?
            .to_string();

        let path = url.path().trim_matches('/').to_string();
        if path.is_empty() {
            return Err(PorterError::validation(
                "path",
                format!("destination '{raw}' has no path component"),
            ));
        }

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            path,
        })
    }

    /// The URI scheme
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The bucket / project component
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The base path, without leading or trailing slashes
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Destination key for a folder beneath the base path
    ///
    /// Yields `{basePath}/{folder}/` with no leading slash and exactly one
    /// trailing slash.
    pub fn folder_key(&self, folder: &str) -> String {
        let folder = folder.trim_matches('/');
        if folder.is_empty() {
            format!("{}/", self.path)
        } else {
            format!("{}/{}/", self.path, folder)
        }
    }

    /// Full destination URI for a folder beneath the base path
    pub fn folder_uri(&self, folder: &str) -> String {
        format!("{}://{}/{}", self.scheme, self.host, self.folder_key(folder))
    }
}

impl std::fmt::Display for DestinationUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}/{}/", self.scheme, self.host, self.path)
    }
}
