//! HTTP request and response values.
//!
//! # Design
//! `Requester` builds an `HttpRequest` before touching the network, so the
//! exact method, URL and headers can be checked without a server. The
//! `HttpResponse` it returns owns everything it carries; nothing borrows from
//! the `ureq` agent once `perform` has returned.

use std::fmt;

/// HTTP method for a request. Only GET is ever issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Origin joined with path, e.g. `http://yhirose.github.io/hi`.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// A completed HTTP exchange. Any status code lands here, 404 and 500
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
