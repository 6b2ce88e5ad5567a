use std::path::PathBuf;

use clap::Parser;

use crate::source::byte_order::ByteOrder;

/// CLI argument parsing & validation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fpdiff",
    about = "Compare two binary float32 files and report absolute and relative error statistics.",
    override_usage = "fpdiff <FILE1> <FILE2> [--byte-order <native|little|big>]"
)]
pub struct Args {
    /// Reference sequence of 4-byte floats.
    #[arg(value_name = "FILE1")]
    pub first: PathBuf,

    /// Sequence compared against FILE1.
    #[arg(value_name = "FILE2")]
    pub second: PathBuf,

    /// Byte order of the 4-byte records (default: native).
    #[arg(
        long,
        value_name = "ORDER",
        default_value_t = ByteOrder::Native,
        value_parser = parse_byte_order
    )]
    pub byte_order: ByteOrder,
}

impl Args {
    pub fn new(first: PathBuf, second: PathBuf, byte_order: ByteOrder) -> Self {
        Self {
            first,
            second,
            byte_order,
        }
    }

    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

fn parse_byte_order(raw: &str) -> Result<ByteOrder, String> {
    raw.parse::<ByteOrder>().map_err(|err| err.to_string())
}
