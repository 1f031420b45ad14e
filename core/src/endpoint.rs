//! The fixed endpoint the `hi` binary talks to.

use std::time::Duration;

/// Scheme and host of the remote server.
pub const ORIGIN: &str = "http://yhirose.github.io";

/// Path requested on `ORIGIN`.
pub const PATH: &str = "/hi";

/// Upper bound on the whole exchange: resolve, connect, send and receive.
pub const TIMEOUT: Duration = Duration::from_millis(10);

/// Sent as the `User-Agent` header on every request.
pub const USER_AGENT: &str = concat!("hi/", env!("CARGO_PKG_VERSION"));
