//! Swatch CLI
//!
//! Command-line front end for theme tokens and brand assets:
//! - `swatch init` - write swatch.toml and a starter theme
//! - `swatch export` - generate CSS, tailwind config or JSON
//! - `swatch apply` - project a theme onto the style root
//! - `swatch convert` - inspect a color in every model
//! - `swatch detect` / `recolor` / `variants` - work on SVG files
//! - `swatch logo` - manage the logos stored in the theme

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("swatch=debug,swatch_brand=debug,swatch_theme=debug,swatch_export=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swatch=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli, &mut out)
}
