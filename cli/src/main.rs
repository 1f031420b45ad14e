//! Fetch `/hi` from the fixed origin once and print what happened.
//!
//! The process exits 0 whether or not the request succeeded; a transport
//! failure is reported on stdout like any other outcome.

use std::io;

use anyhow::{Context, Result};
use hi_core::{write_report, Requester};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let outcome = Requester::new().perform();
    if let Err(err) = &outcome {
        log::debug!("reporting transport failure: {err:?}");
    }

    write_report(io::stdout().lock(), &outcome).context("failed to write report to stdout")?;
    Ok(())
}
