use std::collections::HashMap;

use ducktype_core::{DataType, PrimitiveType};

/// Discriminant used to key overrides, one per renderable type kind.
///
/// Covers every [`DataType`] variant (primitives flattened out so individual
/// kinds like [`TypeKind::Uuid`] can be overridden) plus the network-address
/// kinds downstream type systems carry but the catalog parser never
/// produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Binary,
    String,
    Date,
    Time,
    Uuid,
    Json,
    Interval,
    Timestamp,
    Decimal,
    Array,
    Map,
    Struct,
    MacAddr,
    Inet,
}

impl TypeKind {
    /// The kind a parsed [`DataType`] is keyed under.
    pub fn of(data_type: &DataType) -> TypeKind {
        match data_type {
            DataType::Primitive(p) => match p {
                PrimitiveType::Bool => TypeKind::Bool,
                PrimitiveType::I8 => TypeKind::I8,
                PrimitiveType::I16 => TypeKind::I16,
                PrimitiveType::I32 => TypeKind::I32,
                PrimitiveType::I64 => TypeKind::I64,
                PrimitiveType::U8 => TypeKind::U8,
                PrimitiveType::U16 => TypeKind::U16,
                PrimitiveType::U32 => TypeKind::U32,
                PrimitiveType::U64 => TypeKind::U64,
                PrimitiveType::F32 => TypeKind::F32,
                PrimitiveType::F64 => TypeKind::F64,
                PrimitiveType::Binary => TypeKind::Binary,
                PrimitiveType::String => TypeKind::String,
                PrimitiveType::Date => TypeKind::Date,
                PrimitiveType::Time => TypeKind::Time,
                PrimitiveType::Uuid => TypeKind::Uuid,
                PrimitiveType::Json => TypeKind::Json,
            },
            DataType::Interval => TypeKind::Interval,
            DataType::Timestamp { .. } => TypeKind::Timestamp,
            DataType::Decimal { .. } => TypeKind::Decimal,
            DataType::Array(_) => TypeKind::Array,
            DataType::Map { .. } => TypeKind::Map,
            DataType::Struct(_) => TypeKind::Struct,
        }
    }
}

impl From<&DataType> for TypeKind {
    fn from(data_type: &DataType) -> Self {
        TypeKind::of(data_type)
    }
}

/// Key identifying a (target dialect, type kind) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverrideKey {
    pub dialect: String,
    pub kind: TypeKind,
}

impl OverrideKey {
    pub fn new(dialect: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            dialect: dialect.into(),
            kind,
        }
    }
}

/// Registry of substitute renderings for types a target dialect cannot
/// express natively.
#[derive(Debug, Clone, Default)]
pub struct TypeOverrides {
    entries: HashMap<OverrideKey, String>,
}

impl TypeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the stock DuckDB substitutions: UUID renders via
    /// the native UUID type, network-address kinds fall back to text.
    pub fn builtin() -> Self {
        let mut overrides = Self::new();
        overrides.register("duckdb", TypeKind::Uuid, "UUID");
        overrides.register("duckdb", TypeKind::MacAddr, "TEXT");
        overrides.register("duckdb", TypeKind::Inet, "TEXT");
        overrides
    }

    /// Register a rendering for a (dialect, kind) pair, replacing any
    /// previous entry.
    pub fn register(
        &mut self,
        dialect: impl Into<String>,
        kind: TypeKind,
        rendering: impl Into<String>,
    ) {
        self.entries
            .insert(OverrideKey::new(dialect, kind), rendering.into());
    }

    /// Look up the override for a (dialect, kind) pair, if one is
    /// registered.
    pub fn lookup(&self, dialect: &str, kind: TypeKind) -> Option<&str> {
        self.entries
            .get(&OverrideKey::new(dialect, kind))
            .map(String::as_str)
    }

    /// Look up the override a parsed type is subject to under the given
    /// dialect.
    pub fn lookup_type(&self, dialect: &str, data_type: &DataType) -> Option<&str> {
        self.lookup(dialect, TypeKind::of(data_type))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
