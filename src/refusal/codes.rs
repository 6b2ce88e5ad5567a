use std::fmt;

/// Reasons a comparison ends without a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefusalCode {
    Open,
    LengthMismatch,
    ReadFault,
}

impl RefusalCode {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            RefusalCode::Open => "E_OPEN",
            RefusalCode::LengthMismatch => "E_LENGTH",
            RefusalCode::ReadFault => "E_READ",
        }
    }

    /// A short, stable reason label for logs.
    #[inline]
    pub const fn reason(self) -> &'static str {
        match self {
            RefusalCode::Open => "input cannot be opened",
            RefusalCode::LengthMismatch => "inputs differ in length",
            RefusalCode::ReadFault => "truncated record or read error",
        }
    }
}

impl fmt::Display for RefusalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
