//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generator::{GenerateRequest, Variant};

/// Top-level CLI parser for `coordseq`.
///
/// With no subcommand, generates a strip using the default variant.
#[derive(Debug, Parser)]
#[command(name = "coordseq", version, about = "Generate object-strip XML fragments")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a strip and print it.
    Generate(GenerateArgs),
    /// Re-run a recorded generation from its cassette directory.
    Replay {
        /// Directory written by a `COORDSEQ_RECORD` run.
        dir: PathBuf,
    },
}

/// Options for `coordseq generate`. Omitted values fall back to the
/// variant's defaults.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Strip flavour.
    #[arg(long, value_enum, default_value_t = Variant::Fixed)]
    pub variant: Variant,
    /// Initial x cursor.
    #[arg(long, allow_hyphen_values = true)]
    pub start_x: Option<i64>,
    /// Shared y coordinate.
    #[arg(long, allow_hyphen_values = true)]
    pub start_y: Option<i64>,
    /// Number of objects.
    #[arg(long, allow_hyphen_values = true)]
    pub count: Option<i64>,
    /// Seed for reproducible offsets and identifiers.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    /// Resolve the arguments into a concrete request.
    #[must_use]
    pub fn request(&self) -> GenerateRequest {
        let defaults = GenerateRequest::defaults(self.variant);
        GenerateRequest {
            variant: self.variant,
            start_x: self.start_x.unwrap_or(defaults.start_x),
            start_y: self.start_y.unwrap_or(defaults.start_y),
            count: self.count.unwrap_or(defaults.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use crate::generator::{GenerateRequest, Variant};
    use clap::Parser;

    #[test]
    fn no_subcommand_is_accepted() {
        let cli = Cli::parse_from(["coordseq"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_without_flags_uses_variant_defaults() {
        let cli = Cli::parse_from(["coordseq", "generate", "--variant", "scatter"]);
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.request(), GenerateRequest::defaults(Variant::Scatter));
        assert!(args.seed.is_none());
    }

    #[test]
    fn generate_accepts_negative_values() {
        let cli = Cli::parse_from([
            "coordseq", "generate", "--start-x", "-20", "--start-y", "7", "--count", "-1",
            "--seed", "3",
        ]);
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        let request = args.request();
        assert_eq!(request.variant, Variant::Fixed);
        assert_eq!((request.start_x, request.start_y, request.count), (-20, 7, -1));
        assert_eq!(args.seed, Some(3));
    }

    #[test]
    fn parses_replay_directory() {
        let cli = Cli::parse_from(["coordseq", "replay", "runs/one"]);
        assert!(matches!(cli.command, Some(Command::Replay { ref dir }) if dir.ends_with("one")));
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["coordseq", "generate", "--variant", "zigzag"]).is_err());
    }
}
