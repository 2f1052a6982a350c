use std::path::PathBuf;

use clap::Parser;

/// A terminal wallet interface for the Phantasma and Neo networks
#[derive(Parser, Debug)]
#[command(name = "specter", version, about = "A terminal wallet interface for the Phantasma and Neo networks", long_about = None)]
pub struct Cli {
    /// Path to the settings file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Log filter, overriding RUST_LOG (e.g. "debug" or "specter=trace")
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}
