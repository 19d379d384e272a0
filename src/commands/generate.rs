//! `coordseq generate` command.

use std::env;
use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::context::ServiceContext;
use crate::generator::{generate_object_node, GenerateRequest};

/// Environment variable naming a directory to record port interactions into.
pub const RECORD_ENV: &str = "COORDSEQ_RECORD";

/// Execute the `generate` command and print the strip.
///
/// When `COORDSEQ_RECORD` is set to a directory path, the request and all
/// port interactions are recorded there for a later `replay`.
///
/// # Errors
///
/// Returns an error string if generation or recording fails.
pub fn run(args: &GenerateArgs) -> Result<(), String> {
    let record_dir = env::var_os(RECORD_ENV).map(PathBuf::from);
    println!("{}", render(args, record_dir)?);
    Ok(())
}

/// Generate the strip for `args`, recording into `record_dir` when given.
///
/// # Errors
///
/// Returns an error string if generation or recording fails.
pub fn render(args: &GenerateArgs, record_dir: Option<PathBuf>) -> Result<String, String> {
    let request = args.request();
    let base = args.seed.map_or_else(ServiceContext::live, ServiceContext::seeded);

    match record_dir {
        Some(dir) => run_recorded(&request, base, dir),
        None => generate_object_node(&request, &base),
    }
}

/// Generate through recording adapters and write the session to `dir`.
///
/// The session is finished even when generation fails.
///
/// # Errors
///
/// Returns an error string if generation fails or the recording cannot be
/// written.
pub fn run_recorded(
    request: &GenerateRequest,
    base: ServiceContext,
    dir: PathBuf,
) -> Result<String, String> {
    let (ctx, session) = ServiceContext::recording_at(base, dir)?;
    session.save_request(request)?;

    let result = generate_object_node(request, &ctx);

    // Adapters hold recorder references until the context is gone.
    drop(ctx);
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());

    result
}
