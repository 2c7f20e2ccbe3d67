use crate::auth::errors::AuthError;

/// Blocks until the operator has approved the pending token in Joplin.
///
/// Called once per handshake, between requesting a token and checking its
/// status. There is no timeout: the run waits as long as the operator does.
pub trait ApprovalGate {
    fn wait_for_approval(&self) -> Result<(), AuthError>;
}
