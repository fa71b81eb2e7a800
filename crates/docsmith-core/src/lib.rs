//! Core mapping contracts for docsmith.
//!
//! This crate defines the index-mapping data model shared by the synthesis
//! engine and the CLI: the typed field tree parsed from a mapping file, and
//! the rules for resolving incomplete field declarations.

pub mod error;
pub mod mapping;

pub use error::{Error, Result};
pub use mapping::{FieldSpec, FieldType, IndexMapping, Properties};
