//! Parser for DuckDB catalog type strings.
//!
//! Turns type declarations as reported by the catalog or query-plan
//! introspection (`"DECIMAL(10,2)"`, `"MAP(VARCHAR, BIGINT)"`,
//! `"STRUCT(a INT, b VARCHAR)[]"`) into the engine-neutral
//! [`DataType`](ducktype_core::DataType) tree.
//!
//! # Pipeline
//!
//! ```text
//! catalog type string
//!   └─ parse_type / parse_type_with_defaults
//!       └─ nom grammar (keywords::SCALAR_GROUPS + composite productions)
//!           └─ DataType
//! ```
//!
//! Parsing is a pure function of the input text and the decimal defaults;
//! calls are independent and safe to run concurrently.

mod error;
pub mod keywords;
mod parser;

pub use error::ParseError;
pub use parser::{DecimalDefaults, parse_type, parse_type_with_defaults};
