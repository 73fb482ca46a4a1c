use ducktype_core::{DataType, PrimitiveType};
use ducktype_dialect::{TypeKind, TypeOverrides};

#[test]
fn builtin_duckdb_overrides() {
    let overrides = TypeOverrides::builtin();
    assert_eq!(overrides.lookup("duckdb", TypeKind::Uuid), Some("UUID"));
    assert_eq!(overrides.lookup("duckdb", TypeKind::MacAddr), Some("TEXT"));
    assert_eq!(overrides.lookup("duckdb", TypeKind::Inet), Some("TEXT"));
    assert_eq!(overrides.len(), 3);
}

#[test]
fn lookup_misses_unregistered_pairs() {
    let overrides = TypeOverrides::builtin();
    assert_eq!(overrides.lookup("duckdb", TypeKind::I64), None);
    assert_eq!(overrides.lookup("sqlite", TypeKind::Uuid), None);
    assert!(TypeOverrides::new().is_empty());
}

#[test]
fn register_and_replace() {
    let mut overrides = TypeOverrides::new();
    overrides.register("sqlite", TypeKind::Uuid, "TEXT");
    assert_eq!(overrides.lookup("sqlite", TypeKind::Uuid), Some("TEXT"));

    overrides.register("sqlite", TypeKind::Uuid, "BLOB");
    assert_eq!(overrides.lookup("sqlite", TypeKind::Uuid), Some("BLOB"));
    assert_eq!(overrides.len(), 1);
}

#[test]
fn lookup_type_keys_off_the_parsed_variant() {
    let overrides = TypeOverrides::builtin();
    let uuid = DataType::Primitive(PrimitiveType::Uuid);
    assert_eq!(overrides.lookup_type("duckdb", &uuid), Some("UUID"));

    let nested = DataType::Array(Box::new(uuid));
    // The override keys off the outermost variant only.
    assert_eq!(overrides.lookup_type("duckdb", &nested), None);
}

#[test]
fn kind_of_covers_every_variant() {
    assert_eq!(
        TypeKind::of(&DataType::Primitive(PrimitiveType::Json)),
        TypeKind::Json
    );
    assert_eq!(TypeKind::of(&DataType::Interval), TypeKind::Interval);
    assert_eq!(
        TypeKind::of(&DataType::timestamp_utc(Some(3))),
        TypeKind::Timestamp
    );
    assert_eq!(
        TypeKind::of(&DataType::Decimal {
            precision: 10,
            scale: 2
        }),
        TypeKind::Decimal
    );
    assert_eq!(
        TypeKind::from(&DataType::Map {
            key: Box::new(DataType::Primitive(PrimitiveType::String)),
            value: Box::new(DataType::Interval),
        }),
        TypeKind::Map
    );
}
