//! Init command implementation
//!
//! Writes a starter configuration file with commented defaults.

use clap::Args;
use std::path::Path;

const STARTER_CONFIG: &str = r#"# Porter configuration

[application]
name = "porter"
log_level = "info"

[store]
# Base URL of the packaging lookup-store API
base_url = "https://lookup.example.org"
# Bearer token; keep it out of the file and in the environment
token = "${PORTER_STORE_TOKEN}"
timeout_seconds = 30
context = "file"

[push]
# "folder" for object-store folder pushes, "prefix" for CMS prefix pushes
manifest_variant = "folder"
object_store_scheme = "s3"
prefix_scheme = "icav2"
chunk_size = 100

[logging]
file_enabled = false
file_path = "logs"
file_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let path = Path::new(config_path);

        if path.exists() && !self.force {
            eprintln!("{config_path} already exists; use --force to overwrite");
            return Ok(2);
        }

        std::fs::write(path, STARTER_CONFIG)?;
        println!("Wrote starter configuration to {config_path}");
        println!("Set PORTER_STORE_TOKEN in the environment before running plan commands.");
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_writes_parseable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("porter.toml");
        let args = InitArgs { force: false };

        std::env::set_var("PORTER_STORE_TOKEN", "test-token");
        let code = args.execute(path.to_str().unwrap()).await.unwrap();
        assert_eq!(code, 0);

        let config = crate::config::load_config(&path).unwrap();
        assert_eq!(config.application.name, "porter");
        std::env::remove_var("PORTER_STORE_TOKEN");
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("porter.toml");
        std::fs::write(&path, "existing").unwrap();

        let args = InitArgs { force: false };
        let code = args.execute(path.to_str().unwrap()).await.unwrap();
        assert_eq!(code, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }
}
