use crate::TrackKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "unexpected end of VMD data at offset {offset}: needed {needed} bytes, {remaining} remaining"
    )]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("invalid VMD magic: {:?}", String::from_utf8_lossy(.found))]
    BadMagic { found: [u8; 30] },

    #[error(
        "{kind} record count {count} needs {record_size} bytes each but only {remaining} bytes remain"
    )]
    OversizedCount {
        kind: TrackKind,
        count: u32,
        record_size: usize,
        remaining: usize,
    },

    #[error("invalid camera perspective value {value} at frame {frame} (expected 0 or 1)")]
    InvalidPerspectiveValue { frame: u32, value: u8 },

    #[error("failed to read VMD file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
