pub mod errors;
pub mod handler;
pub mod store;
pub mod traits;
pub mod types;

pub use errors::AuthError;
pub use handler::{authorize, request_token};
pub use store::{FileTokenStore, TokenStore};
pub use traits::ApprovalGate;
pub use types::{ACCEPTED_STATUS, AuthorizedToken, TokenSource};
