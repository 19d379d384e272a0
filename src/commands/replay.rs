//! `coordseq replay` command.

use std::path::Path;

use crate::cassette::config::CassetteConfig;
use crate::cassette::session::load_request;
use crate::context::ServiceContext;
use crate::generator::generate_object_node;

/// Execute the `replay` command and print the reproduced strip.
///
/// # Errors
///
/// Returns an error string if the recording cannot be loaded or generation
/// fails.
pub fn run(dir: &Path) -> Result<(), String> {
    println!("{}", replay(dir)?);
    Ok(())
}

/// Reproduce the strip recorded in `dir`.
///
/// # Errors
///
/// Returns an error string if the request or a cassette cannot be loaded,
/// generation fails, or the request leaves recorded interactions unused.
pub fn replay(dir: &Path) -> Result<String, String> {
    let request = load_request(dir)?;
    let ctx = ServiceContext::replaying_from(&CassetteConfig::from_dir(dir))?;
    let output = generate_object_node(&request, &ctx)?;

    let unused = ctx.unreplayed();
    if unused > 0 {
        return Err(format!(
            "Replay of {} left {unused} recorded interactions unused; \
             the request does not match the cassettes",
            dir.display()
        ));
    }
    Ok(output)
}
