use std::path::PathBuf;

use clap::Parser;

/// Translated speech synthesis service
#[derive(Debug, Parser)]
#[command(name = "reo", about = "Translate text into a minority language and speak it")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "reo.toml", env = "REO_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "REO_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info", env = "REO_LOG")]
    pub log: String,
}
