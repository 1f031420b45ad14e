//! One-shot HTTP GET against a fixed endpoint.
//!
//! # Overview
//! `Requester` describes a single GET request as plain data (`HttpRequest`),
//! executes it with a blocking `ureq` agent and hands back either an
//! `HttpResponse` or a `RequestError`. `report` turns that outcome into the
//! exact text the `hi` binary prints.
//!
//! # Design
//! - The endpoint (origin, path, timeout) is compile-time constant; see
//!   `endpoint`. Tests point a `Requester` at a local server instead.
//! - Any HTTP status is a successful exchange. Only transport failures
//!   (DNS, connect, TLS, timeout, malformed response) produce an error.
//! - Types use owned `String` / `Vec` fields so outcomes can be rendered and
//!   compared without borrowing from the agent.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod report;

pub use client::Requester;
pub use error::RequestError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use report::{render, write_report};
