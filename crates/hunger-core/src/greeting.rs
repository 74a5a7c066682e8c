// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The one line the CLI prints.

use std::io::{self, Write};

use tracing::trace;

use crate::config::GreetingConfig;

/// Default greeting text.
pub const GREETING: &str = "howdy";

/// Write the configured greeting followed by `\n`, then flush.
pub fn write_greeting<W: Write>(out: &mut W, config: &GreetingConfig) -> io::Result<()> {
    trace!(text = %config.text, "writing greeting");
    writeln!(out, "{}", config.text)?;
    out.flush()
}
