//! CLI entry point for geoids
//!
//! # Examples
//!
//! ```bash
//! geoids --ids geoname:4163334,osmnode:12
//! geoids --types venue,address --ids venue:1
//! printf 'geoname:1\nbogus:2\n' | geoids
//! ```
//!
//! Sanitized identifiers are printed on stdout, errors on stderr. The exit status
//! is non-zero when at least one request was rejected.

use std::{io, process::ExitCode};

use clap::Parser;
use geoids_cli::{Args, run};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("off"))?;
    fmt().with_writer(io::stderr).with_target(false).with_env_filter(filter).init();

    let args = Args::parse();
    let all_accepted = run(args, io::stdin().lock(), &mut io::stdout(), &mut io::stderr()).await?;

    Ok(if all_accepted { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
