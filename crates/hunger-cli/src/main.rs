// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! hunger CLI entrypoint.
//!
//! Prints a single greeting line and exits.
//!
//! # Usage
//! ```text
//! hunger [anything...]
//! ```
//!
//! Arguments are accepted and ignored, including `--help` and `--version`.
//! Stdout receives exactly `howdy\n`; diagnostics, if any, go to stderr.
//! The CLI exits with code `0` on success and non-zero if stdout cannot be
//! written.

use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use hunger_core::{write_greeting, ConfigService, EmbeddedConfigStore, GreetingConfig, GREETING_KEY};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug, Default)]
#[command(
    name = "hunger",
    disable_help_flag = true,
    disable_version_flag = true,
    ignore_errors = true
)]
struct Args {
    /// Collected and discarded.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<OsString>,
}

fn main() -> Result<()> {
    init_tracing()?;

    // Nothing on the command line changes behavior, so a parse failure is
    // treated the same as no arguments.
    let args = Args::try_parse().unwrap_or_default();
    debug!(count = args.ignored.len(), "ignoring arguments");

    let config: GreetingConfig = ConfigService::new(EmbeddedConfigStore::builtin())
        .load_or_default(GREETING_KEY)
        .context("loading embedded greeting config")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    greet(&mut out, &config)
}

fn greet<W: Write>(out: &mut W, config: &GreetingConfig) -> Result<()> {
    write_greeting(out, config).context("writing greeting to stdout")
}

fn init_tracing() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default tracing subscriber")
}
