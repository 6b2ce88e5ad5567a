#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use fpdiff::cli::args::Args;
use fpdiff::source::byte_order::ByteOrder;
use tempfile::NamedTempFile;

/// Write `values` as native-endian float32 records to a temp file.
pub fn float_file(values: &[f32]) -> NamedTempFile {
    bytes_file(&encode(values, ByteOrder::Native))
}

pub fn bytes_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

pub fn encode(values: &[f32], order: ByteOrder) -> Vec<u8> {
    values.iter().flat_map(|v| order.encode(*v)).collect()
}

pub fn args_for(first: &NamedTempFile, second: &NamedTempFile) -> Args {
    Args::new(
        PathBuf::from(first.path()),
        PathBuf::from(second.path()),
        ByteOrder::Native,
    )
}
