#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match fpdiff::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("fpdiff: {e}");
            ExitCode::from(2)
        }
    }
}
