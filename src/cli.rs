//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ServiceKind};

#[derive(Debug, Parser)]
#[command(name = "counter-sync", version, about = "Counter with debounced remote sync")]
pub struct Cli {
    /// Path to config file (defaults to the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the debounce window in milliseconds
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the counter HTTP API
    Serve {
        /// Bind address (host:port)
        #[arg(long)]
        bind: Option<String>,

        /// Artificial latency added to counter routes, in milliseconds
        #[arg(long)]
        latency_ms: Option<u64>,
    },
    /// Interactive counter session on stdin
    Demo {
        /// Base URL of a running counter server; uses the simulated backend if omitted
        #[arg(long)]
        remote: Option<String>,

        /// Delay of the simulated backend, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

impl Cli {
    /// Fold command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(debounce_ms) = self.debounce_ms {
            config.sync.debounce_ms = debounce_ms;
        }

        match &self.command {
            Command::Serve { bind, latency_ms } => {
                if let Some(bind) = bind {
                    config.server.bind_addr = bind.clone();
                }
                if let Some(latency_ms) = latency_ms {
                    config.server.latency_ms = *latency_ms;
                }
            }
            Command::Demo { remote, delay_ms } => {
                if let Some(remote) = remote {
                    config.service.kind = ServiceKind::Http;
                    config.service.base_url = remote.clone();
                }
                if let Some(delay_ms) = delay_ms {
                    config.service.simulated_delay_ms = *delay_ms;
                }
            }
        }
    }
}
