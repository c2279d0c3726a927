//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vendorsim")]
#[command(about = "Vendor API simulators for integration testing", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a YAML config file (defaults merge vendorsim.yaml and
    /// VENDORSIM_* environment variables)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the logistics CRM simulator
    Logistics {
        /// Override the configured listen port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the telephony simulator
    Telephony {
        /// Override the configured listen port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run both simulators concurrently
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_port_override() {
        let cli = Cli::parse_from(["vendorsim", "logistics", "--port", "18080"]);
        match cli.command {
            Commands::Logistics { port } => assert_eq!(port, Some(18080)),
            _ => panic!("expected logistics subcommand"),
        }
    }

    #[test]
    fn parses_global_config_path() {
        let cli = Cli::parse_from(["vendorsim", "all", "--config", "custom.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        assert!(matches!(cli.command, Commands::All));
    }
}
