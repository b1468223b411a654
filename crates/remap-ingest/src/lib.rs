//! Ingestion for delimited text: byte decoding, delimiter detection and
//! CSV parsing/serialization.
//!
//! The pipeline runs bytes → [`decode`] → text → [`detect_delimiter`] →
//! [`parse`] → [`remap_model::ParsedTable`]. All three stages are pure,
//! single-pass functions; decoding and detection never fail, and parsing is
//! deliberately lenient because hand-edited or re-exported CSVs are the
//! common input.

pub mod decode;
pub mod detect;
pub mod error;
pub mod table;

pub use decode::{Decoded, SourceEncoding, decode, decode_path};
pub use detect::detect_delimiter;
pub use error::{IngestError, Result};
pub use table::{parse, stringify, write_delimited};
