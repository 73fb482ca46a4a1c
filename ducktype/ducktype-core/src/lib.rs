//! Engine-neutral data type model for catalog-reported type strings.
//!
//! This crate provides the typed representation produced by
//! `ducktype-parser` and keyed on by `ducktype-dialect`. It contains no
//! parsing logic of its own.

mod types;

pub use types::{DataType, PrimitiveType, StructField, StructFields};
