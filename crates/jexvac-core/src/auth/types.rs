use serde::Deserialize;
use std::fmt;

/// The only `status` value of `/auth/check` that grants a token.
pub const ACCEPTED_STATUS: &str = "accepted";

/// Where the token used for a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Supplied by the operator on the command line.
    Provided,
    /// Read from the token cache.
    Cached,
    /// Minted by the request/approve/check handshake.
    Handshake,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Provided => write!(f, "provided"),
            TokenSource::Cached => write!(f, "cached"),
            TokenSource::Handshake => write!(f, "handshake"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedToken {
    pub token: String,
    pub source: TokenSource,
}

/// Body of `POST /auth`.
#[derive(Debug, Deserialize)]
pub(crate) struct PendingAuth {
    pub auth_token: String,
}
