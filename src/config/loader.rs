//! Configuration loader with TOML parsing and environment variable substitution

use super::schema::PorterConfig;
use crate::config::secret_string;
use crate::domain::errors::PorterError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into `PorterConfig`
/// 4. Applies `PORTER_*` environment variable overrides
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use porter::config::load_config;
///
/// let config = load_config("porter.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PorterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PorterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PorterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PorterConfig = toml::from_str(&contents)
        .map_err(|e| PorterError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        PorterError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error naming every referenced environment variable that is not
/// set.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is valid");
    let mut missing_vars = Vec::new();

    let result = re
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    missing_vars.push(var_name.to_string());
                    String::new()
                }
            }
        })
        .into_owned();

    if !missing_vars.is_empty() {
        return Err(PorterError::Configuration(format!(
            "Missing environment variable(s): {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `PORTER_*` environment variable overrides
///
/// Overrides are applied after file parsing so a deployment can inject the
/// store token and endpoint without touching the TOML.
fn apply_env_overrides(config: &mut PorterConfig) {
    if let Ok(base_url) = std::env::var("PORTER_STORE_BASE_URL") {
        config.store.base_url = base_url;
    }
    if let Ok(token) = std::env::var("PORTER_STORE_TOKEN") {
        config.store.token = Some(secret_string(token));
    }
    if let Ok(log_level) = std::env::var("PORTER_LOG_LEVEL") {
        config.application.log_level = log_level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_minimal_config() {
        let file = write_config(
            r#"
            [store]
            base_url = "https://lookup.example.org"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.store.base_url, "https://lookup.example.org");
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = load_config("does-not-exist.toml").unwrap_err();
        assert!(matches!(err, PorterError::Configuration(_)));
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let file = write_config("store = base_url =");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, PorterError::Configuration(_)));
    }

    #[test]
    fn test_substitute_env_vars_replaces_value() {
        std::env::set_var("PORTER_TEST_SUB_VAR", "substituted");
        let result = substitute_env_vars("value = \"${PORTER_TEST_SUB_VAR}\"").unwrap();
        assert_eq!(result, "value = \"substituted\"");
        std::env::remove_var("PORTER_TEST_SUB_VAR");
    }

    #[test]
    fn test_substitute_env_vars_reports_missing_by_name() {
        let err = substitute_env_vars("value = \"${PORTER_TEST_MISSING_VAR}\"").unwrap_err();
        assert!(err.to_string().contains("PORTER_TEST_MISSING_VAR"));
    }

    #[test]
    fn test_validation_failure_surfaces() {
        let file = write_config(
            r#"
            [store]
            base_url = "https://lookup.example.org"

            [push]
            chunk_size = 0
            "#,
        );

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("chunk_size"));
    }
}
