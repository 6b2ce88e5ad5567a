//! Pipeline orchestration: open → pair → accumulate → report

use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::cli::args::Args;
use crate::cli::exit::Outcome;
use crate::diff::accumulator::ErrorAccumulator;
use crate::output::report::render_report;
use crate::refusal::details::{FileSide, RefusalKind};
use crate::source::byte_order::ByteOrder;
use crate::source::pair::{PairSource, PairStep};

pub struct PipelineResult {
    pub outcome: Outcome,
    pub output: String,
}

impl PipelineResult {
    fn report(output: String) -> Self {
        Self {
            outcome: Outcome::Report,
            output,
        }
    }

    fn refusal(kind: &RefusalKind) -> Self {
        tracing::debug!(code = %kind.code(), reason = kind.code().reason(), ?kind, "comparison refused");
        Self {
            outcome: Outcome::Refusal,
            output: kind.render_line(),
        }
    }
}

pub fn run(args: &Args) -> Result<PipelineResult, Box<dyn Error>> {
    let first = match open_source(&args.first, FileSide::First) {
        Ok(file) => file,
        Err(kind) => return Ok(PipelineResult::refusal(&kind)),
    };
    let second = match open_source(&args.second, FileSide::Second) {
        Ok(file) => file,
        Err(kind) => return Ok(PipelineResult::refusal(&kind)),
    };

    Ok(compare(first, second, args.byte_order))
}

/// Drive the pair loop over two readers and render the outcome.
pub fn compare<A: Read, B: Read>(first: A, second: B, order: ByteOrder) -> PipelineResult {
    let mut source = PairSource::new(first, second, order);
    let mut acc = ErrorAccumulator::new();

    loop {
        match source.next_pair() {
            Ok(PairStep::Pair { a, b }) => acc.observe(a, b),
            Ok(PairStep::End) => break,
            Ok(PairStep::LengthMismatch) => {
                return PipelineResult::refusal(&RefusalKind::LengthMismatch {
                    compared: source.position(),
                });
            }
            Err(fault) => return PipelineResult::refusal(&RefusalKind::ReadFault(fault)),
        }
    }

    tracing::info!(count = acc.count(), "comparison complete");
    PipelineResult::report(render_report(&acc.report()).join("\n"))
}

fn open_source(path: &Path, side: FileSide) -> Result<BufReader<File>, RefusalKind> {
    match File::open(path) {
        Ok(file) => {
            tracing::debug!(side = side.as_str(), path = %path.display(), "opened input");
            Ok(BufReader::new(file))
        }
        Err(err) => Err(RefusalKind::Open {
            file: side,
            path: path.display().to_string(),
            error: err.to_string(),
        }),
    }
}
