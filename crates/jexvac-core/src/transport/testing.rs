//! In-memory transport double for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::transport::errors::TransportError;
use crate::transport::traits::HttpTransport;
use crate::transport::types::{HttpResponse, Method};

/// Replays canned responses keyed by method and URL and records every call.
///
/// Routes without a canned response behave like a closed port. When several
/// responses are queued for one route they are returned in order, and the
/// last one repeats.
#[derive(Default)]
pub struct FakeTransport {
    routes: RefCell<HashMap<(Method, String), VecDeque<HttpResponse>>>,
    calls: RefCell<Vec<(Method, String)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: Method, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .borrow_mut()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(HttpResponse::new(status, body));
        self
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.calls.borrow().clone()
    }

    pub fn calls_with(&self, method: Method) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(m, _)| *m == method)
            .map(|(_, url)| url.clone())
            .collect()
    }
}

impl HttpTransport for FakeTransport {
    fn send(&self, method: Method, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push((method, url.to_string()));

        let mut routes = self.routes.borrow_mut();
        let Some(queue) = routes.get_mut(&(method, url.to_string())) else {
            return Err(TransportError::RequestFailed {
                url: url.to_string(),
                message: "connection refused".to_string(),
            });
        };

        let response = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };

        response.ok_or_else(|| TransportError::RequestFailed {
            url: url.to_string(),
            message: "connection refused".to_string(),
        })
    }
}
