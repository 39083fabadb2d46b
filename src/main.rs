//! gridfall binary: run the splash on the current terminal.
//!
//! Logging goes to stderr through `tracing` and is off by default; set
//! `RUST_LOG` (and redirect stderr, e.g. `2>gridfall.log`) to inspect a
//! run without corrupting the animation.

use std::io;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gridfall::cli::Cli;
use gridfall::config::SplashConfig;
use gridfall::splash;
use gridfall::theme::Palette;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "gridfall", &mut io::stdout());
        return Ok(());
    }

    if cli.init_config {
        let path = SplashConfig::config_path()?;
        if path.exists() {
            println!("config already exists at {}", path.display());
        } else {
            SplashConfig::default().save()?;
            println!("wrote {}", path.display());
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => SplashConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SplashConfig::load().context("failed to load config")?,
    };

    if let Some(name) = &cli.palette {
        match Palette::by_name(name) {
            Some(palette) => config.apply_palette(&palette),
            None => bail!(
                "unknown palette '{}' (available: {})",
                name,
                Palette::names().join(", ")
            ),
        }
    }

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if cli.no_splash {
        debug!("splash bypassed via --no-splash");
        return Ok(());
    }

    if !atty::is(atty::Stream::Stdout) {
        bail!("stdout is not a terminal; pass --no-splash for non-interactive use");
    }
    if terminal_size::terminal_size().is_none() {
        bail!("could not determine the terminal size");
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    debug!(seed, "seed for this run");

    splash::run(&config, seed)?;
    Ok(())
}
