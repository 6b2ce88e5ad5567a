//! Refusal detail payloads.
//!
//! Every refusal renders as exactly one diagnostic line for stderr.

use crate::refusal::codes::RefusalCode;
use crate::source::pair::ReadFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSide {
    First,
    Second,
}

impl FileSide {
    pub fn as_str(self) -> &'static str {
        match self {
            FileSide::First => "file1",
            FileSide::Second => "file2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefusalKind {
    Open {
        file: FileSide,
        path: String,
        error: String,
    },
    LengthMismatch {
        /// Pairs compared before one side ran out.
        compared: u64,
    },
    ReadFault(ReadFault),
}

impl RefusalKind {
    pub fn code(&self) -> RefusalCode {
        match self {
            RefusalKind::Open { .. } => RefusalCode::Open,
            RefusalKind::LengthMismatch { .. } => RefusalCode::LengthMismatch,
            RefusalKind::ReadFault(_) => RefusalCode::ReadFault,
        }
    }

    /// The single stderr line for this refusal.
    pub fn render_line(&self) -> String {
        match self {
            RefusalKind::Open { file, path, .. } => {
                format!("Error: {} {} cannot be open.", file.as_str(), path)
            }
            RefusalKind::LengthMismatch { .. } => "Error: file length not equal.".to_string(),
            RefusalKind::ReadFault(fault) => format!("Error: {fault}"),
        }
    }
}
