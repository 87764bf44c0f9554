//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the identifiers Porter works
//! with. Each type ensures type safety and validates format on construction,
//! so a `PortalRunId` can never be confused with an `InstrumentRunId`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Packaging job identifier newtype wrapper
///
/// Identifies one packaging job in the lookup store. Typically a ULID with a
/// `pkg.` prefix, but the exact shape is owned by the packaging service.
///
/// # Examples
///
/// ```
/// use porter::domain::ids::JobId;
/// use std::str::FromStr;
///
/// let job_id = JobId::from_str("pkg.01K23Y6V4RNE15G3K0DN8XRDYQ").unwrap();
/// assert_eq!(job_id.as_str(), "pkg.01K23Y6V4RNE15G3K0DN8XRDYQ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

impl JobId {
    /// Creates a new JobId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Job ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the job ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The context key-condition value the lookup store indexes on,
    /// `{jobId}__{context}`.
    pub fn context_key(&self, context: &str) -> String {
        format!("{}__{}", self.0, context)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Instrument run identifier newtype wrapper
///
/// Keys primary (raw per-run sequencing) data. Derived from the second
/// segment of a `fastq/` relative path, e.g. `240101_A01052_0001_BH5LJVDSX7`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstrumentRunId(String);

impl InstrumentRunId {
    /// Creates a new InstrumentRunId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Instrument run ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the instrument run ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for InstrumentRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InstrumentRunId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for InstrumentRunId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Portal run identifier newtype wrapper
///
/// Keys secondary (workflow output) data. A portal run ID is exactly eight
/// decimal digits followed by eight lowercase hexadecimal characters, e.g.
/// `20240101abcdef12`. Construction enforces this shape.
///
/// # Examples
///
/// ```
/// use porter::domain::ids::PortalRunId;
///
/// let run_id = PortalRunId::new("20240101abcdef12").unwrap();
/// assert_eq!(run_id.as_str(), "20240101abcdef12");
///
/// assert!(PortalRunId::new("not-a-portal-run-id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PortalRunId(String);

impl PortalRunId {
    /// Creates a new PortalRunId from a string
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is exactly 8 decimal digits
    /// followed by 8 lowercase hex characters.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if !Self::is_valid(&id) {
            return Err(format!(
                "Invalid portal run ID '{id}': expected 8 digits followed by 8 lowercase hex characters"
            ));
        }
        Ok(Self(id))
    }

    /// Whether a string fully matches the portal run ID token shape
    pub fn is_valid(candidate: &str) -> bool {
        if candidate.len() != 16 {
            return false;
        }
        let (date, hex) = candidate.split_at(8);
        date.bytes().all(|b| b.is_ascii_digit())
            && hex
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    /// Returns the portal run ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PortalRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PortalRunId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PortalRunId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_creation() {
        let id = JobId::new("pkg.01K23Y6V4RNE15G3K0DN8XRDYQ").unwrap();
        assert_eq!(id.as_str(), "pkg.01K23Y6V4RNE15G3K0DN8XRDYQ");
    }

    #[test]
    fn test_job_id_empty_fails() {
        assert!(JobId::new("").is_err());
        assert!(JobId::new("   ").is_err());
    }

    #[test]
    fn test_job_id_context_key() {
        let id = JobId::new("pkg.01ABC").unwrap();
        assert_eq!(id.context_key("file"), "pkg.01ABC__file");
    }

    #[test]
    fn test_job_id_from_str() {
        let id: JobId = "pkg.01ABC".parse().unwrap();
        assert_eq!(id.as_str(), "pkg.01ABC");
    }

    #[test]
    fn test_instrument_run_id_creation() {
        let id = InstrumentRunId::new("240101_A01052_0001_BH5LJVDSX7").unwrap();
        assert_eq!(id.as_str(), "240101_A01052_0001_BH5LJVDSX7");
    }

    #[test]
    fn test_instrument_run_id_empty_fails() {
        assert!(InstrumentRunId::new("").is_err());
    }

    #[test]
    fn test_instrument_run_id_ordering() {
        let a = InstrumentRunId::new("240101_A1").unwrap();
        let b = InstrumentRunId::new("240202_B2").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_portal_run_id_creation() {
        let id = PortalRunId::new("20240101abcdef12").unwrap();
        assert_eq!(id.as_str(), "20240101abcdef12");
    }

    #[test]
    fn test_portal_run_id_rejects_bad_shapes() {
        // too short
        assert!(PortalRunId::new("20240101abc").is_err());
        // uppercase hex
        assert!(PortalRunId::new("20240101ABCDEF12").is_err());
        // non-digit date part
        assert!(PortalRunId::new("2024010xabcdef12").is_err());
        // trailing garbage
        assert!(PortalRunId::new("20240101abcdef12x").is_err());
    }

    #[test]
    fn test_portal_run_id_is_valid_full_match_only() {
        assert!(PortalRunId::is_valid("20240101abcdef12"));
        assert!(!PortalRunId::is_valid("20240101abcdef12-extra"));
    }

    #[test]
    fn test_portal_run_id_serialization() {
        let id = PortalRunId::new("20240101abcdef12").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PortalRunId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
