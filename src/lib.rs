#![forbid(unsafe_code)]

pub mod cli;
pub mod diff;
pub mod format;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod refusal;
pub mod source;

/// Run the fpdiff pipeline. Returns exit code (0 or 2).
pub fn run() -> Result<u8, Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    let args = match cli::args::Args::parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(if err.use_stderr() { 2 } else { 0 });
        }
    };

    logging::init(logging::LOG_ENV, logging::CLI_DEFAULT_FILTER);

    let result = orchestrator::run(&args)?;
    let stream = cli::exit::output_stream(result.outcome);

    match stream {
        cli::exit::OutputStream::Stdout => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", result.output)?;
            stdout.flush()?;
        }
        cli::exit::OutputStream::Stderr => {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "{}", result.output)?;
            stderr.flush()?;
        }
    }

    Ok(cli::exit::exit_code(result.outcome))
}
