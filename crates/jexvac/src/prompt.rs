use std::io::{self, BufRead, Write};

use jexvac_core::{ApprovalGate, AuthError};
use tracing::info;

/// Waits on stdin for the operator to approve the token in Joplin.
pub struct TerminalApprovalGate;

impl ApprovalGate for TerminalApprovalGate {
    fn wait_for_approval(&self) -> Result<(), AuthError> {
        let aborted = |e: io::Error| AuthError::ApprovalAborted {
            message: e.to_string(),
        };

        println!("Token requested. Please check the Joplin app to grant access.");
        print!("Press Enter after granting access... ");
        io::stdout().flush().map_err(aborted)?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input).map_err(aborted)?;
        if read == 0 {
            return Err(AuthError::ApprovalAborted {
                message: "stdin closed before access was granted".to_string(),
            });
        }

        info!(event = "cli.approval_confirmed");
        Ok(())
    }
}
