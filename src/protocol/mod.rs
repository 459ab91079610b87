//! Command interpreter for the line protocol.
//!
//! One request line maps to exactly one response line. The interpreter
//! parses the line into a [`Command`], dispatches it to the task store,
//! and renders the outcome as a [`Response`]. Every failure is recovered
//! here and rendered as a response string; nothing propagates to the
//! transport as a fatal error.

mod command;
mod interpreter;
mod response;

pub use command::{Command, ParseCommandError};
pub use interpreter::CommandInterpreter;
pub use response::Response;
