//! Local stand-in for the remote origin, used by tests.
//!
//! Serves canned plain-text responses covering each outcome the `hi`
//! binary reports: a normal page, a missing page, a redirect, a page slower
//! than a short client timeout and a body larger than ureq's default limit.

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

/// How long `/slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_millis(500);

/// Size of the `/large` body, past ureq's default 10 MiB read limit.
pub const LARGE_BODY_LEN: usize = 11 * 1024 * 1024;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Loopback address to serve on, from the value of `PORT` if given.
pub fn listen_addr(port: Option<&str>) -> Result<SocketAddr, ParseIntError> {
    let port = match port {
        Some(port) => port.trim().parse()?,
        None => DEFAULT_PORT,
    };
    Ok(SocketAddr::from((Ipv4Addr::LOCALHOST, port)))
}

pub fn app() -> Router {
    Router::new()
        .route("/hi", get(hi))
        .route("/missing", get(missing))
        .route("/moved", get(moved))
        .route("/slow", get(slow))
        .route("/large", get(large))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn hi() -> &'static str {
    "hello"
}

async fn missing() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

async fn moved() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/hi")], "moved")
}

async fn slow() -> &'static str {
    tokio::time::sleep(SLOW_DELAY).await;
    "late"
}

async fn large() -> String {
    "a".repeat(LARGE_BODY_LEN)
}
