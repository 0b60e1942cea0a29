//! Bot command layer.
//!
//! Turns input lines into calls on a [`ContactService`](crate::services::ContactService)
//! and renders the replies:
//! - **parser**: command words and input tokenizing
//! - **handlers**: per-command execution and reply text

pub mod handlers;
pub mod parser;

pub use handlers::{dispatch, Reply};
pub use parser::{parse_input, Command};
