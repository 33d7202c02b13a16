//! Interactive command session
//!
//! Parses command lines, dispatches them to the `Player` and renders
//! results and errors as text.

mod command;
mod config;
mod runner;

pub use command::{Command, CommandError, HELP_TEXT, INVALID_COMMAND};
pub use config::SessionConfig;
pub use runner::Session;
