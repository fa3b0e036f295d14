use std::io;

use thiserror::Error;

/// Failures raised by the record codec and version handling.
///
/// These never propagate to a resolution caller; stores treat an undecodable
/// record as absent and let the next indexing pass rewrite it.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Reading or writing record bytes failed, including truncated input.
    #[error("index record I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The `icon_type` token was neither `FILE` nor `FOLDER`.
    #[error("unknown icon type token '{0}' in index record")]
    UnknownIconType(String),

    /// A string field exceeds the 16-bit length prefix of the record layout.
    #[error("string field of {0} bytes exceeds the 65535-byte record limit")]
    StringTooLong(usize),

    /// A string field held bytes that are not valid UTF-8.
    #[error("index record string field is not valid UTF-8")]
    InvalidUtf8,

    /// The record was written under a different layout version.
    #[error("stored index version {found} does not match current version {expected}")]
    VersionMismatch {
        /// Version stamped on the stored record.
        found: u32,
        /// Version the running code expects.
        expected: u32,
    },
}
