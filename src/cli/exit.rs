//! Exit codes & stdout/stderr routing.

/// Domain outcome produced by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Report,
    Refusal,
}

/// Target stream for output emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Exit code for a given outcome. Usage errors from clap also exit with 2.
pub fn exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Report => 0,
        Outcome::Refusal => 2,
    }
}

/// Reports go to stdout, refusal diagnostics to stderr.
pub fn output_stream(outcome: Outcome) -> OutputStream {
    match outcome {
        Outcome::Report => OutputStream::Stdout,
        Outcome::Refusal => OutputStream::Stderr,
    }
}
