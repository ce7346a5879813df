use docmap_schema::{
    Cardinality, DataType, IndexingType, PropertyDescriptor, SchemaError, TokenizerType,
    SNIPPET_OFFSET_DISABLED,
};

// ── Shorthand constructors ───────────────────────────────────────

#[test]
fn string_shorthand_uses_default_hints() {
    let p = PropertyDescriptor::string("title", Cardinality::Optional);
    assert_eq!(p.name(), "title");
    assert_eq!(p.data_type(), DataType::String);
    assert_eq!(p.cardinality(), Cardinality::Optional);
    assert_eq!(p.indexing_type(), IndexingType::NONE);
    assert_eq!(p.tokenizer_type(), TokenizerType::PLAIN);
    assert_eq!(p.snippet_offset_percent(), SNIPPET_OFFSET_DISABLED);
    assert!(p.document_schema_type().is_none());
}

#[test]
fn scalar_shorthands_set_data_type() {
    assert_eq!(
        PropertyDescriptor::int64("n", Cardinality::Required).data_type(),
        DataType::Int64
    );
    assert_eq!(
        PropertyDescriptor::double("d", Cardinality::Required).data_type(),
        DataType::Double
    );
    assert_eq!(
        PropertyDescriptor::boolean("b", Cardinality::Optional).data_type(),
        DataType::Boolean
    );
    assert_eq!(
        PropertyDescriptor::bytes("blob", Cardinality::Repeated).data_type(),
        DataType::Bytes
    );
}

#[test]
fn document_shorthand_names_nested_type() {
    let p = PropertyDescriptor::document("sender", "Person", Cardinality::Optional);
    assert_eq!(p.data_type(), DataType::Document);
    assert_eq!(p.document_schema_type(), Some("Person"));
}

// ── Builder validation ───────────────────────────────────────────

#[test]
fn builder_passes_hints_through() {
    let p = PropertyDescriptor::builder("body")
        .data_type(DataType::String)
        .cardinality(Cardinality::Repeated)
        .indexing_type(IndexingType::PREFIXES)
        .tokenizer_type(TokenizerType(7))
        .snippet_offset_percent(25.0)
        .build()
        .unwrap();

    assert_eq!(p.indexing_type(), IndexingType::PREFIXES);
    assert_eq!(p.tokenizer_type(), TokenizerType(7));
    assert_eq!(p.snippet_offset_percent(), 25.0);
}

#[test]
fn snippet_offset_bounds_are_inclusive() {
    for percent in [0.0, 100.0, SNIPPET_OFFSET_DISABLED] {
        assert!(PropertyDescriptor::builder("body")
            .snippet_offset_percent(percent)
            .build()
            .is_ok());
    }
}

#[test]
fn snippet_offset_out_of_range_fails_at_construction() {
    for percent in [-0.5, 100.01, -2.0, f32::NAN, f32::INFINITY] {
        let err = PropertyDescriptor::builder("body")
            .snippet_offset_percent(percent)
            .build()
            .unwrap_err();
        assert!(
            matches!(err, SchemaError::InvalidConfiguration(_)),
            "percent {percent} should be rejected"
        );
    }
}

#[test]
fn document_property_requires_schema_type() {
    let err = PropertyDescriptor::builder("sender")
        .data_type(DataType::Document)
        .build()
        .unwrap_err();
    assert!(matches!(err, SchemaError::InvalidConfiguration(_)));
}

#[test]
fn non_document_property_rejects_schema_type() {
    let err = PropertyDescriptor::builder("sender")
        .data_type(DataType::String)
        .document_schema_type("Person")
        .build()
        .unwrap_err();
    assert!(matches!(err, SchemaError::InvalidConfiguration(_)));
}

#[test]
fn builder_defaults_to_optional_string() {
    let p = PropertyDescriptor::builder("x").build().unwrap();
    assert_eq!(p, PropertyDescriptor::string("x", Cardinality::Optional));
}

// ── Codes ────────────────────────────────────────────────────────

#[test]
fn data_type_codes_roundtrip() {
    for t in DataType::ALL {
        assert_eq!(DataType::from_code(t.code()), Some(t));
    }
    assert_eq!(DataType::from_code(0), None);
    assert_eq!(DataType::from_code(7), None);
}

#[test]
fn cardinality_codes_match_store_constants() {
    assert_eq!(Cardinality::Repeated.code(), 1);
    assert_eq!(Cardinality::Optional.code(), 2);
    assert_eq!(Cardinality::Required.code(), 3);
    for c in Cardinality::ALL {
        assert_eq!(Cardinality::from_code(c.code()), Some(c));
    }
}

#[test]
fn cardinality_scalar_classification() {
    assert!(Cardinality::Required.is_scalar());
    assert!(Cardinality::Optional.is_scalar());
    assert!(!Cardinality::Repeated.is_scalar());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn descriptor_serializes_snake_case() {
    let p = PropertyDescriptor::double("price", Cardinality::Required);
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["data_type"], "double");
    assert_eq!(json["cardinality"], "required");
    assert_eq!(json["indexing_type"], 0);
    assert!(json.get("document_schema_type").is_none());
}

#[test]
fn descriptor_deserialize_validates_offset() {
    let json = r#"{"name": "t", "data_type": "string", "cardinality": "optional",
                   "snippet_offset_percent": 150.0}"#;
    assert!(serde_json::from_str::<PropertyDescriptor>(json).is_err());
}
