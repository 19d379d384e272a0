//! Core library entry for the `coordseq` CLI.
//!
//! `coordseq` renders a strip of objects as one
//! `<object id=".." coordinates=".." uid=".." />` element. The entropy it
//! consumes (step offsets and identifiers) comes through the traits in
//! [`ports`], so runs can be seeded, recorded and replayed.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod generator;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version land here too; they are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(cli.command.as_ref())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_propagates_command_errors() {
        let err = run(["coordseq", "replay", "/nonexistent/coordseq/run"]).unwrap_err();
        assert!(err.contains("Failed to read request file"));
    }

    #[test]
    fn run_treats_help_as_success() {
        assert!(run(["coordseq", "--help"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        assert!(run(["coordseq", "unknown"]).is_err());
    }
}
