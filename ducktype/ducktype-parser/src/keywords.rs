//! Declared keyword-alias table for the scalar alternation.
//!
//! DuckDB spells most scalar types several ways (`bigint`/`int8`/`long`);
//! every alias in a group maps to the same [`DataType`]. The table is
//! matched first-group-wins in declaration order, so it carries an ordering
//! contract: whenever one group's alias extends another group's alias across
//! a word boundary (`"timestamp with time zone"` vs `"timestamp"`), the
//! longer group must be declared first. Within a group, matching is also
//! protected by an identifier-boundary check, so `"int"` never matches a
//! prefix of `"integer"`. The contract is enforced by
//! `tests/keywords.rs::alias_table_orders_word_prefix_groups_longest_first`.

use ducktype_core::{DataType, PrimitiveType};

/// Target of one keyword-alias group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Primitive(PrimitiveType),
    Interval,
    /// UTC-pinned timestamp with the given fractional-second scale.
    Timestamp(Option<u8>),
}

impl ScalarKind {
    /// Construct the [`DataType`] this alias group parses to.
    pub fn data_type(&self) -> DataType {
        match self {
            ScalarKind::Primitive(p) => DataType::Primitive(*p),
            ScalarKind::Interval => DataType::Interval,
            ScalarKind::Timestamp(scale) => DataType::timestamp_utc(*scale),
        }
    }
}

/// Keyword-alias groups in match order. DuckDB's `int8` is the 64-bit
/// integer, not the 8-bit one; `tinyint`/`int1` is the 8-bit type.
pub static SCALAR_GROUPS: &[(&[&str], ScalarKind)] = &[
    (&["interval"], ScalarKind::Interval),
    (
        &["bigint", "int8", "long"],
        ScalarKind::Primitive(PrimitiveType::I64),
    ),
    (
        &["boolean", "bool", "logical"],
        ScalarKind::Primitive(PrimitiveType::Bool),
    ),
    (
        &["blob", "bytea", "binary", "varbinary"],
        ScalarKind::Primitive(PrimitiveType::Binary),
    ),
    (
        &["double", "float8"],
        ScalarKind::Primitive(PrimitiveType::F64),
    ),
    (
        &["real", "float4", "float"],
        ScalarKind::Primitive(PrimitiveType::F32),
    ),
    (
        &["smallint", "int2", "short"],
        ScalarKind::Primitive(PrimitiveType::I16),
    ),
    (
        &["timestamp with time zone", "timestamp_tz", "datetime"],
        ScalarKind::Timestamp(None),
    ),
    (
        &["timestamp_sec", "timestamp_s"],
        ScalarKind::Timestamp(Some(0)),
    ),
    (&["timestamp_ms"], ScalarKind::Timestamp(Some(3))),
    (&["timestamp_us"], ScalarKind::Timestamp(Some(6))),
    (&["timestamp_ns"], ScalarKind::Timestamp(Some(9))),
    (&["timestamp"], ScalarKind::Timestamp(None)),
    (&["date"], ScalarKind::Primitive(PrimitiveType::Date)),
    (&["time"], ScalarKind::Primitive(PrimitiveType::Time)),
    (
        &["tinyint", "int1"],
        ScalarKind::Primitive(PrimitiveType::I8),
    ),
    (
        &["integer", "int4", "int", "signed"],
        ScalarKind::Primitive(PrimitiveType::I32),
    ),
    (&["ubigint"], ScalarKind::Primitive(PrimitiveType::U64)),
    (&["usmallint"], ScalarKind::Primitive(PrimitiveType::U16)),
    (&["uinteger"], ScalarKind::Primitive(PrimitiveType::U32)),
    (&["utinyint"], ScalarKind::Primitive(PrimitiveType::U8)),
    (&["uuid"], ScalarKind::Primitive(PrimitiveType::Uuid)),
    (
        &["varchar", "char", "bpchar", "text", "string"],
        ScalarKind::Primitive(PrimitiveType::String),
    ),
    (&["json"], ScalarKind::Primitive(PrimitiveType::Json)),
];
