//! Core data model for tabular remapping.
//!
//! This crate defines the value types shared by the ingestion, transformation,
//! configuration and output crates:
//!
//! - [`ParsedTable`]: an immutable header/row snapshot of a delimited document
//! - [`ColumnMapping`]: the full per-column configuration (rename, type,
//!   transformation, value conversions, inclusion)
//! - [`Transformation`]: the second-stage transformation as an explicit tagged
//!   variant, parsed once from its spec-string form
//! - [`Delimiter`] / [`DecimalSeparator`]: the supported field delimiters and
//!   numeric conventions
//!
//! Everything here is a plain value: snapshots are replaced wholesale by the
//! caller, never mutated in place by concurrent actors.

pub mod delimiter;
pub mod error;
pub mod mapping;
pub mod table;
pub mod transformation;

pub use delimiter::{DecimalSeparator, Delimiter};
pub use error::{ModelError, Result};
pub use mapping::{ColumnMapping, ColumnType, ValueConversion};
pub use table::ParsedTable;
pub use transformation::{DEFAULT_DATE_FORMAT, Transformation};
