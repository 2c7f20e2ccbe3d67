pub mod handler;

pub use handler::{PING_SIGNATURE, resolve_port};
