//! Byte-encoding detection and decoding to UTF-8 text.
//!
//! Classification runs in priority order: byte-order marks first, then a full
//! UTF-8 validity scan, then the Latin fallbacks. The 0x80–0x9F range decides
//! between Windows-1252 and ISO-8859-1: those bytes are undefined in
//! ISO-8859-1 but map to printable characters (curly quotes, em dash) in
//! Windows-1252, so their presence is the stronger signal.

use std::path::Path;

use encoding_rs::{UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};

use crate::error::{IngestError, Result};

/// The encoding a byte buffer was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    Utf8,
    /// Pure 7-bit input; decodes identically under UTF-8.
    Ascii,
    Windows1252,
    Iso8859_1,
}

impl SourceEncoding {
    /// Human-readable label reported alongside the decoded text.
    pub fn label(self) -> &'static str {
        match self {
            SourceEncoding::Utf8Bom => "UTF-8 (BOM)",
            SourceEncoding::Utf16Le => "UTF-16 LE",
            SourceEncoding::Utf16Be => "UTF-16 BE",
            SourceEncoding::Utf8 => "UTF-8",
            SourceEncoding::Ascii => "ASCII/UTF-8",
            SourceEncoding::Windows1252 => "Windows-1252 (converted to UTF-8)",
            SourceEncoding::Iso8859_1 => "ISO-8859-1 (converted to UTF-8)",
        }
    }
}

/// Decoded text plus the encoding it was classified as.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    pub encoding: SourceEncoding,
}

/// Classify and decode a raw byte buffer.
///
/// Single-pass classifier with no retry. The classification itself cannot
/// fail: every buffer falls into one of the branches, and the Latin decoders
/// are total over all byte values. Malformed UTF-16 payloads decode with
/// replacement characters rather than aborting.
pub fn decode(bytes: &[u8]) -> Decoded {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        let (text, _) = UTF_8.decode_with_bom_removal(bytes);
        return Decoded {
            text: text.into_owned(),
            encoding: SourceEncoding::Utf8Bom,
        };
    }
    if bytes.starts_with(&[0xFF, 0xFE]) {
        let (text, _) = UTF_16LE.decode_with_bom_removal(bytes);
        return Decoded {
            text: text.into_owned(),
            encoding: SourceEncoding::Utf16Le,
        };
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let (text, _) = UTF_16BE.decode_with_bom_removal(bytes);
        return Decoded {
            text: text.into_owned(),
            encoding: SourceEncoding::Utf16Be,
        };
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        let encoding = if bytes.iter().all(u8::is_ascii) {
            SourceEncoding::Ascii
        } else {
            SourceEncoding::Utf8
        };
        return Decoded {
            text: text.to_string(),
            encoding,
        };
    }

    let has_c1_byte = bytes.iter().any(|&byte| (0x80..=0x9F).contains(&byte));
    // Windows-1252 and ISO-8859-1 agree on every byte outside 0x80-0x9F, so
    // one decoder covers both labels once the classification is made.
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    let encoding = if has_c1_byte {
        SourceEncoding::Windows1252
    } else {
        SourceEncoding::Iso8859_1
    };
    tracing::debug!(encoding = encoding.label(), "decoded legacy Latin bytes");
    Decoded {
        text: text.into_owned(),
        encoding,
    }
}

/// Read a file and decode its bytes.
pub fn decode_path(path: &Path) -> Result<Decoded> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    Ok(decode(&bytes))
}
