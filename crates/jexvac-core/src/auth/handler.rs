use tracing::{error, info, warn};

use crate::auth::errors::AuthError;
use crate::auth::store::TokenStore;
use crate::auth::traits::ApprovalGate;
use crate::auth::types::{ACCEPTED_STATUS, AuthorizedToken, PendingAuth, TokenSource};
use crate::transport::{Endpoint, HttpTransport, Method};

/// Resolve the API token for a run.
///
/// Priority: `provided_token` verbatim, then the cached token, then a fresh
/// handshake whose accepted response replaces the cache. Neither a provided
/// nor a cached token is validated against the service.
pub fn authorize(
    transport: &dyn HttpTransport,
    endpoint: &Endpoint,
    provided_token: Option<&str>,
    store: &dyn TokenStore,
    gate: &dyn ApprovalGate,
) -> Result<AuthorizedToken, AuthError> {
    if let Some(token) = provided_token {
        info!(event = "core.auth.token_provided");
        return Ok(AuthorizedToken {
            token: token.to_string(),
            source: TokenSource::Provided,
        });
    }

    if let Some(token) = store.load()? {
        info!(event = "core.auth.token_cached");
        return Ok(AuthorizedToken {
            token,
            source: TokenSource::Cached,
        });
    }

    info!(event = "core.auth.handshake_started", port = endpoint.port());

    let response = request_token(transport, endpoint, gate)?;
    let token = response
        .get("token")
        .and_then(|t| t.as_str())
        .ok_or(AuthError::MissingToken)?
        .to_string();

    store.save(&response)?;

    info!(event = "core.auth.handshake_completed");

    Ok(AuthorizedToken {
        token,
        source: TokenSource::Handshake,
    })
}

/// Run the request/approve/check handshake and return the accepted
/// `/auth/check` response as-is.
///
/// Blocks on `gate` between the two requests.
pub fn request_token(
    transport: &dyn HttpTransport,
    endpoint: &Endpoint,
    gate: &dyn ApprovalGate,
) -> Result<serde_json::Value, AuthError> {
    let response = transport.send(Method::Post, &endpoint.url("/auth"))?;
    if !response.is_success() {
        error!(
            event = "core.auth.request_failed",
            status = response.status
        );
        return Err(AuthError::RequestFailed {
            status: response.status,
        });
    }

    let pending: PendingAuth =
        serde_json::from_str(&response.body).map_err(|e| AuthError::InvalidResponse {
            message: format!("POST /auth: {}", e),
        })?;

    info!(event = "core.auth.approval_waiting");
    gate.wait_for_approval()?;

    let check_url = endpoint.url(&format!("/auth/check?auth_token={}", pending.auth_token));
    let response = transport.send(Method::Get, &check_url)?;
    if !response.is_success() {
        error!(event = "core.auth.check_failed", status = response.status);
        return Err(AuthError::CheckFailed {
            status: response.status,
        });
    }

    let checked: serde_json::Value =
        serde_json::from_str(&response.body).map_err(|e| AuthError::InvalidResponse {
            message: format!("GET /auth/check: {}", e),
        })?;

    let status = checked
        .get("status")
        .and_then(|s| s.as_str())
        .unwrap_or_default();
    if status != ACCEPTED_STATUS {
        warn!(event = "core.auth.not_accepted", status = status);
        return Err(AuthError::NotAccepted {
            status: status.to_string(),
        });
    }

    Ok(checked)
}
