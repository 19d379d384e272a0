//! Command dispatch and handlers.

pub mod generate;
pub mod replay;

use crate::cli::{Command, GenerateArgs};

/// Dispatch a parsed command to its handler.
///
/// No command means a default `generate`.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: Option<&Command>) -> Result<(), String> {
    match command {
        None => generate::run(&GenerateArgs::default()),
        Some(Command::Generate(args)) => generate::run(args),
        Some(Command::Replay { dir }) => replay::run(dir),
    }
}
