//! The single GET request and its execution.
//!
//! # Design
//! `Requester` holds the origin, path and timeout and nothing else. It is
//! split the same way as the output it drives: `build_request` produces the
//! request as plain data, `perform` executes it once with a fresh blocking
//! `ureq` agent. No agent outlives a call, so there is no pooling and no
//! state carried between calls.

use std::time::Duration;

use crate::endpoint;
use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Issues one GET request and returns its outcome.
#[derive(Debug, Clone)]
pub struct Requester {
    origin: String,
    path: String,
    timeout: Duration,
}

impl Requester {
    /// Requester for the fixed endpoint in `endpoint`.
    pub fn new() -> Self {
        Self::with_origin(endpoint::ORIGIN)
    }

    /// Same path and timeout as `new`, against another origin.
    pub fn with_origin(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            path: endpoint::PATH.to_string(),
            timeout: endpoint::TIMEOUT,
        }
    }

    /// Replace the path requested on the origin.
    pub fn path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    /// Replace the bound on the whole exchange.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build_request(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{}", self.origin, self.path),
            headers: vec![("user-agent".to_string(), endpoint::USER_AGENT.to_string())],
        }
    }

    /// Execute the request, blocking until a response arrives or the
    /// timeout elapses.
    ///
    /// Every status code is returned as `Ok`. Redirects are reported as-is
    /// rather than followed. The body is read in full with no size cap.
    pub fn perform(&self) -> Result<HttpResponse, RequestError> {
        let request = self.build_request();
        log::debug!("{} {} (timeout {:?})", request.method, request.url, self.timeout);

        let outcome = execute(&request, self.timeout);
        match &outcome {
            Ok(response) => log::debug!("{} answered {}", request.url, response.status),
            Err(err) => log::warn!("{} failed: {err}", request.url),
        }
        outcome
    }
}

impl Default for Requester {
    fn default() -> Self {
        Self::new()
    }
}

fn execute(request: &HttpRequest, timeout: Duration) -> Result<HttpResponse, RequestError> {
    let agent = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .max_redirects(0)
        .build()
        .new_agent();

    let mut builder = match request.method {
        HttpMethod::Get => agent.get(request.url.as_str()),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder.call()?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    // The body is reported whole, however large.
    let bytes = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_vec()?;

    Ok(HttpResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
