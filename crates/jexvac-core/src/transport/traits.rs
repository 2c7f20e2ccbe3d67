//! Transport trait definition.

use crate::transport::errors::TransportError;
use crate::transport::types::{HttpResponse, Method};

/// Sends one HTTP request and returns its status and body.
///
/// Implementations must not treat non-2xx statuses as errors: callers decide
/// what a status means. `Err` is reserved for requests that produced no
/// response at all (refused connection, timeout, unreadable body).
pub trait HttpTransport {
    fn send(&self, method: Method, url: &str) -> Result<HttpResponse, TransportError>;
}
