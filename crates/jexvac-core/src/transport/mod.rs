//! HTTP plumbing for the Joplin Web Clipper API.
//!
//! Everything above this module only needs "send a request, get status and
//! body". [`HttpTransport`] is that seam; [`ReqwestTransport`] is the real
//! blocking implementation.

pub mod blocking;
pub mod errors;
#[cfg(test)]
pub(crate) mod testing;
pub mod traits;
pub mod types;

pub use blocking::ReqwestTransport;
pub use errors::TransportError;
pub use traits::HttpTransport;
pub use types::{Endpoint, HttpResponse, Method};
