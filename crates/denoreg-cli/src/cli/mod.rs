//! CLI for the denoreg module redirector.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use denoreg_core::config;
use std::path::PathBuf;

use commands::{run_providers, run_resolve, run_serve, ServeOverrides};

/// Top-level CLI for the denoreg redirector.
#[derive(Debug, Parser)]
#[command(name = "denoreg")]
#[command(about = "denoreg: module URL redirector for git hosting providers", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/denoreg/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log to stderr instead of ~/.local/state/denoreg/denoreg.log.
    #[arg(long, global = true)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the HTTP redirector.
    Serve {
        /// Port to listen on (overrides PORT and the config file).
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default 0.0.0.0).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Legacy package database (JSON). Defaults to the bundled dataset.
        #[arg(long, value_name = "PATH")]
        database: Option<PathBuf>,
    },

    /// Show how a request path resolves, without fetching anything.
    Resolve {
        /// Request path, e.g. /std@0.3.0/fs/mod.ts
        path: String,

        /// Legacy package database (JSON). Defaults to the bundled dataset.
        #[arg(long, value_name = "PATH")]
        database: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List supported hosting providers and their URL templates.
    Providers,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load()?,
        };
        cfg.apply_env()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Serve {
                port,
                bind,
                database,
            } => {
                let overrides = ServeOverrides {
                    port,
                    bind,
                    database,
                };
                run_serve(overrides.apply(cfg)).await?
            }
            CliCommand::Resolve {
                path,
                database,
                json,
            } => {
                let database = database.or(cfg.database);
                run_resolve(&path, database.as_deref(), json)?
            }
            CliCommand::Providers => run_providers(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
