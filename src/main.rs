//! Binary entrypoint for the `coordseq` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is fine; COORDSEQ_RECORD may come from the real environment.
    let _ = dotenvy::dotenv();

    match coordseq::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
