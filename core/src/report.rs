//! Text printed for a request outcome.

use std::io::{self, Write};

use crate::error::RequestError;
use crate::http::HttpResponse;

/// Render an outcome as the lines written to stdout.
///
/// A response of any status renders as `Status: {status}\nBody:\n{body}`;
/// an error renders as its message. Both end with a single newline.
pub fn render(outcome: &Result<HttpResponse, RequestError>) -> String {
    match outcome {
        Ok(response) => format!("Status: {}\nBody:\n{}\n", response.status, response.body),
        Err(err) => format!("{err}\n"),
    }
}

/// Write the rendered outcome to `out` in one call and flush it.
pub fn write_report<W: Write>(
    mut out: W,
    outcome: &Result<HttpResponse, RequestError>,
) -> io::Result<()> {
    out.write_all(render(outcome).as_bytes())?;
    out.flush()
}
