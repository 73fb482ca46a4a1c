use ducktype_core::{DataType, PrimitiveType, StructField, StructFields};

#[test]
fn timestamp_utc_pins_timezone() {
    let ts = DataType::timestamp_utc(Some(9));
    match ts {
        DataType::Timestamp { timezone, scale } => {
            assert_eq!(timezone.as_deref(), Some("UTC"));
            assert_eq!(scale, Some(9));
        }
        other => panic!("Expected timestamp, got {other:?}"),
    }
}

#[test]
fn primitive_and_nested_classification() {
    assert!(DataType::Primitive(PrimitiveType::I64).is_primitive());
    assert!(!DataType::Primitive(PrimitiveType::I64).is_nested());

    let array = DataType::Array(Box::new(DataType::Primitive(PrimitiveType::Bool)));
    assert!(array.is_nested());
    assert!(!array.is_primitive());

    // Parameterized scalars are neither primitive nor nested.
    let decimal = DataType::Decimal {
        precision: 18,
        scale: 3,
    };
    assert!(!decimal.is_primitive());
    assert!(!decimal.is_nested());
}

#[test]
fn type_names() {
    assert_eq!(DataType::Primitive(PrimitiveType::Uuid).type_name(), "uuid");
    assert_eq!(DataType::Interval.type_name(), "interval");
    assert_eq!(DataType::timestamp_utc(None).type_name(), "timestamp");
    assert_eq!(
        DataType::Struct(StructFields::default()).type_name(),
        "struct"
    );
}

#[test]
fn struct_fields_preserve_order_and_duplicates() {
    let fields: StructFields = vec![
        StructField::new("a", DataType::Primitive(PrimitiveType::I32)),
        StructField::new("a", DataType::Primitive(PrimitiveType::String)),
    ]
    .into();

    assert_eq!(fields.len(), 2);
    assert!(!fields.is_empty());
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a", "a"]);
    // Deref gives slice indexing.
    assert_eq!(fields[1].data_type, DataType::Primitive(PrimitiveType::String));

    let back: Vec<StructField> = fields.into();
    assert_eq!(back.len(), 2);
}
