//! Per-dialect type rendering overrides.
//!
//! Downstream rendering code consults [`TypeOverrides`] before falling back
//! to its generic mapping: the registry answers "when targeting dialect D,
//! render kind K as this instead". The parser never reads this registry; its
//! only obligation is to produce the right [`DataType`](ducktype_core::DataType)
//! variant to key off.

mod overrides;

pub use overrides::{OverrideKey, TypeKind, TypeOverrides};
