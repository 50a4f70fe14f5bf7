//! Binary entrypoint for the `placemaps` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    placemaps::logging::init();
    match placemaps::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
