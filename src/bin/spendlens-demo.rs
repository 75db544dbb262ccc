//! Prints the reference insight reports to stdout.

use chrono::Utc;
use spendlens::config::CONFIG;
use spendlens::demo::{REFERENCE_INSIGHTS, render_all};
use spendlens::utils::logging::init_tracing;
use std::io::{self, Write};
use tracing::debug;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&CONFIG.basic.loglevel);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let envelopes = render_all(&mut out, &REFERENCE_INSIGHTS, Utc::now())?;
    out.flush()?;

    for envelope in &envelopes {
        debug!(
            report_type = envelope.report_type,
            envelope = %serde_json::to_string(envelope)?,
            "Demo report envelope"
        );
    }
    Ok(())
}
