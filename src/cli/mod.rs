//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Porter using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Porter - Data Relocation Planning Tool
#[derive(Parser, Debug)]
#[command(name = "porter")]
#[command(version, about, long_about = None)]
#[command(author = "Porter Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "porter.toml", env = "PORTER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PORTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count relocation groups or build one group's push manifest
    Plan(commands::plan::PlanArgs),

    /// Enumerate pagination window start tokens for a job
    Windows(commands::windows::WindowsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_plan() {
        let cli = Cli::parse_from([
            "porter",
            "plan",
            "--job-id",
            "job-1",
            "--destination",
            "s3://bucket/out",
            "--count",
        ]);
        assert_eq!(cli.config, "porter.toml");
        match cli.command {
            Commands::Plan(args) => {
                assert_eq!(args.job_id, "job-1");
                assert!(args.count);
                assert!(args.index.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_plan_with_index() {
        let cli = Cli::parse_from([
            "porter",
            "plan",
            "--job-id",
            "job-1",
            "--destination",
            "s3://bucket/out",
            "--index",
            "3",
        ]);
        match cli.command {
            Commands::Plan(args) => assert_eq!(args.index, Some(3)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from([
            "porter",
            "--config",
            "custom.toml",
            "windows",
            "--job-id",
            "job-1",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Windows(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from([
            "porter",
            "--log-level",
            "debug",
            "windows",
            "--job-id",
            "job-1",
        ]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["porter", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["porter", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
