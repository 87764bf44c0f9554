//! Result type alias for Porter
//!
//! This module provides a convenient Result type alias that uses PorterError
//! as the error type.

use super::errors::PorterError;

/// Result type alias for Porter operations
///
/// This is a convenience type alias that uses `PorterError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use porter::domain::result::Result;
/// use porter::domain::errors::PorterError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PorterError::validation("jobId", "must not be empty"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PorterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::PorterError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(PorterError::Other("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
