//! Portable mapping configuration documents.
//!
//! A [`MappingConfig`] is a projection of a [`remap_model::ColumnMapping`]
//! list: absence from `mappings` means excluded, absence from
//! `typeTransformations` means the default string type. Export produces the
//! document; import validates it against a target table's headers with a
//! fixed fail-fast checklist and rebuilds the full mapping list, or rejects
//! the document atomically.

pub mod document;
pub mod error;
pub mod export;
pub mod import;

pub use document::{CONFIG_VERSION, MappingConfig, select_config};
pub use error::ValidationError;
pub use export::export;
pub use import::{ImportOutcome, ImportState, Importer, import, import_document};
