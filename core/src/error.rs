//! Transport failures.
//!
//! # Design
//! Every way the exchange can fail before a status line arrives collapses
//! into `RequestError`. The variants only pick a clearer message; callers
//! print the error and never branch on it. HTTP status codes are never
//! errors.

use std::io;

use thiserror::Error;

/// Why a request produced no response.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The exchange did not finish within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The origin's host name did not resolve. Holds the resolver's message.
    #[error("host not found: {0}")]
    HostNotFound(String),

    /// No connection could be opened to the resolved address.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Anything else the HTTP library reports: TLS, malformed response,
    /// body read failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<ureq::Error> for RequestError {
    fn from(err: ureq::Error) -> Self {
        let message = err.to_string();
        match &err {
            ureq::Error::Timeout(_) => RequestError::Timeout(message),
            ureq::Error::HostNotFound => {
                RequestError::HostNotFound("resolver returned no addresses".to_string())
            }
            ureq::Error::ConnectionFailed => RequestError::Connect(message),
            ureq::Error::Io(io_err) if is_lookup_failure(io_err) => {
                RequestError::HostNotFound(io_err.to_string())
            }
            ureq::Error::Io(io_err) => RequestError::from_io(io_err.kind(), message),
            _ => RequestError::Transport(message),
        }
    }
}

impl RequestError {
    fn from_io(kind: io::ErrorKind, message: String) -> Self {
        match kind {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => RequestError::Timeout(message),
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::AddrNotAvailable => RequestError::Connect(message),
            _ => RequestError::Transport(message),
        }
    }
}

/// std reports getaddrinfo failures with an uncategorized kind, so the
/// message prefix is the only marker.
fn is_lookup_failure(err: &io::Error) -> bool {
    err.to_string().starts_with("failed to lookup address information")
}
