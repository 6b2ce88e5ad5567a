//! Lock-step reader over two float32 streams.
//!
//! Each step pulls exactly one record from each side. Clean exhaustion of both
//! sides ends the comparison; one side running dry first is a length mismatch;
//! a truncated record or an I/O error is a read fault.

use std::fmt;
use std::io::{self, ErrorKind, Read};

use crate::source::byte_order::{ByteOrder, RECORD_LEN};

/// Result of one successful lock-step read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairStep {
    Pair { a: f32, b: f32 },
    End,
    LengthMismatch,
}

/// Read failure distinct from clean exhaustion.
///
/// `first` and `second` are the bytes obtained for the failing record on each
/// side (0 to 4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFault {
    pub first: usize,
    pub second: usize,
    pub error: Option<String>,
}

impl fmt::Display for ReadFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file read error({}, {})", self.first, self.second)?;
        if let Some(error) = &self.error {
            write!(f, ": {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ReadFault {}

#[derive(Debug)]
enum Record {
    Value(f32),
    Exhausted,
    Truncated(usize),
    Failed(usize, io::Error),
}

impl Record {
    fn bytes(&self) -> usize {
        match self {
            Record::Value(_) => RECORD_LEN,
            Record::Exhausted => 0,
            Record::Truncated(n) | Record::Failed(n, _) => *n,
        }
    }
}

pub struct PairSource<A, B> {
    first: A,
    second: B,
    order: ByteOrder,
    position: u64,
}

impl<A: Read, B: Read> PairSource<A, B> {
    pub fn new(first: A, second: B, order: ByteOrder) -> Self {
        Self {
            first,
            second,
            order,
            position: 0,
        }
    }

    /// Number of pairs yielded so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Pull the next pair. Both sides are always read, even if the first is
    /// already exhausted.
    pub fn next_pair(&mut self) -> Result<PairStep, ReadFault> {
        let a = read_record(&mut self.first, self.order);
        let b = read_record(&mut self.second, self.order);

        match (a, b) {
            (Record::Value(a), Record::Value(b)) => {
                self.position += 1;
                Ok(PairStep::Pair { a, b })
            }
            (Record::Exhausted, Record::Exhausted) => Ok(PairStep::End),
            (Record::Value(_), Record::Exhausted) | (Record::Exhausted, Record::Value(_)) => {
                Ok(PairStep::LengthMismatch)
            }
            (a, b) => {
                let error = match (&a, &b) {
                    (Record::Failed(_, err), _) | (_, Record::Failed(_, err)) => {
                        Some(err.to_string())
                    }
                    _ => None,
                };
                Err(ReadFault {
                    first: a.bytes(),
                    second: b.bytes(),
                    error,
                })
            }
        }
    }
}

fn read_record<R: Read>(reader: &mut R, order: ByteOrder) -> Record {
    let mut buf = [0u8; RECORD_LEN];
    let mut filled = 0;
    while filled < RECORD_LEN {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Record::Failed(filled, err),
        }
    }
    match filled {
        0 => Record::Exhausted,
        RECORD_LEN => Record::Value(order.decode(buf)),
        n => Record::Truncated(n),
    }
}
