use std::ops::Deref;

/// Scalar types that carry no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
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
    /// Unbounded UTF-8 string (`varchar` and friends).
    String,
    Date,
    Time,
    Uuid,
    Json,
}

/// A data type as reported by an engine catalog, in engine-neutral form.
///
/// Values are immutable once constructed; the parser produces a fresh,
/// acyclic tree per call and never retains back-references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Primitive(PrimitiveType),
    /// Interval with no unit or precision captured from the source text.
    Interval,
    Timestamp {
        /// `Some("UTC")` whenever the source indicates a zoned or
        /// fixed-sub-second-precision timestamp.
        timezone: Option<String>,
        /// Fractional-second digits (0, 3, 6 or 9); `None` for unspecified.
        scale: Option<u8>,
    },
    Decimal {
        precision: u32,
        scale: u32,
    },
    Array(Box<DataType>),
    Map {
        key: Box<DataType>,
        value: Box<DataType>,
    },
    /// Ordered fields; duplicate names are legal and preserved as-is.
    Struct(StructFields),
}

impl DataType {
    /// Timestamp pinned to UTC, as produced for every timestamp alias.
    pub fn timestamp_utc(scale: Option<u8>) -> Self {
        DataType::Timestamp {
            timezone: Some("UTC".to_string()),
            scale,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, DataType::Primitive(_))
    }

    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            DataType::Array(_) | DataType::Map { .. } | DataType::Struct(_)
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::Primitive(p) => p.type_name(),
            DataType::Interval => "interval",
            DataType::Timestamp { .. } => "timestamp",
            DataType::Decimal { .. } => "decimal",
            DataType::Array(_) => "array",
            DataType::Map { .. } => "map",
            DataType::Struct(_) => "struct",
        }
    }
}

impl PrimitiveType {
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
            PrimitiveType::Binary => "binary",
            PrimitiveType::String => "string",
            PrimitiveType::Date => "date",
            PrimitiveType::Time => "time",
            PrimitiveType::Uuid => "uuid",
            PrimitiveType::Json => "json",
        }
    }
}

/// Typed collection of [`StructField`] preserving declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructFields(pub Vec<StructField>);

impl StructFields {
    pub fn new(fields: Vec<StructField>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[StructField] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StructField> {
        self.0.iter()
    }
}

impl From<Vec<StructField>> for StructFields {
    fn from(value: Vec<StructField>) -> Self {
        Self(value)
    }
}

impl From<StructFields> for Vec<StructField> {
    fn from(value: StructFields) -> Self {
        value.0
    }
}

impl AsRef<[StructField]> for StructFields {
    fn as_ref(&self) -> &[StructField] {
        self.as_slice()
    }
}

impl Deref for StructFields {
    type Target = [StructField];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// A single named field inside a struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    pub data_type: DataType,
}

impl StructField {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}
