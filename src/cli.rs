//! Command-line interface.
//!
//! Exported from the library so the `xtask` man-page generator can reuse
//! the same definitions.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::version;

/// Full-screen terminal splash: glitch noise settles into character art.
#[derive(Debug, Parser)]
#[command(name = "gridfall", version = version::version(), about, long_about = None)]
pub struct Cli {
    /// Skip the splash animation entirely
    #[arg(long)]
    pub no_splash: bool,

    /// Seed for the random source (fixed seed = reproducible run)
    #[arg(long, value_name = "U64")]
    pub seed: Option<u64>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color palette preset: midnight, phosphor, mono
    #[arg(long, value_name = "NAME")]
    pub palette: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Create the default config file if it does not exist and exit
    #[arg(long)]
    pub init_config: bool,

    /// Print shell completions to stdout and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}
