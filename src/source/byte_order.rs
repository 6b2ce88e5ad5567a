//! Byte order of 4-byte float records.

use std::fmt;
use std::str::FromStr;

/// Width of one record in bytes.
pub const RECORD_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Native,
    Little,
    Big,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownByteOrder(pub String);

impl ByteOrder {
    pub const ALL: [ByteOrder; 3] = [ByteOrder::Native, ByteOrder::Little, ByteOrder::Big];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            ByteOrder::Native => "native",
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        }
    }

    #[inline]
    pub fn decode(self, bytes: [u8; RECORD_LEN]) -> f32 {
        match self {
            ByteOrder::Native => f32::from_ne_bytes(bytes),
            ByteOrder::Little => f32::from_le_bytes(bytes),
            ByteOrder::Big => f32::from_be_bytes(bytes),
        }
    }

    #[inline]
    pub fn encode(self, value: f32) -> [u8; RECORD_LEN] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown byte order '{}' (expected native, little or big)",
            self.0
        )
    }
}

impl std::error::Error for UnknownByteOrder {}

impl FromStr for ByteOrder {
    type Err = UnknownByteOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" | "ne" => Ok(ByteOrder::Native),
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" => Ok(ByteOrder::Big),
            _ => Err(UnknownByteOrder(s.to_string())),
        }
    }
}
