//! Import validation and export/import round-trip tests.

use remap_config::{ImportState, Importer, ValidationError, export, import, select_config};
use remap_model::{
    ColumnMapping, ColumnType, DecimalSeparator, Delimiter, Transformation, ValueConversion,
};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn sample_mappings() -> Vec<ColumnMapping> {
    let mut name = ColumnMapping::identity("name");
    name.target_column = "full_name".to_string();
    name.transformation = Some(Transformation::Uppercase);

    let mut age = ColumnMapping::identity("age");
    age.source_type = ColumnType::Integer;

    let mut title = ColumnMapping::identity("title");
    title.conversions = vec![
        ValueConversion::new("Mr", "male"),
        ValueConversion::new("Ms", "female"),
    ];

    let notes = ColumnMapping::excluded("notes");

    vec![name, age, title, notes]
}

#[test]
fn export_import_round_trips() {
    let original = sample_mappings();
    let config = export(
        &original,
        Delimiter::Comma,
        Delimiter::Semicolon,
        DecimalSeparator::Comma,
    );
    let document = config.to_json_pretty().unwrap();

    let outcome = import(&document, &headers(&["name", "age", "title", "notes"])).unwrap();
    assert_eq!(outcome.config.input_delimiter, Delimiter::Comma);
    assert_eq!(outcome.config.output_delimiter, Delimiter::Semicolon);
    assert_eq!(outcome.config.decimal_separator, DecimalSeparator::Comma);
    assert_eq!(outcome.mappings, original);
}

#[test]
fn unnamed_columns_become_excluded_identity_mappings() {
    let document = r#"{"version":"1.0","mappings":{"a":"renamed"}}"#;
    let outcome = import(document, &headers(&["a", "b"])).unwrap();
    assert_eq!(outcome.mappings.len(), 2);
    assert!(outcome.mappings[0].include);
    assert_eq!(outcome.mappings[0].target_column, "renamed");
    assert!(!outcome.mappings[1].include);
    assert_eq!(outcome.mappings[1].target_column, "b");
}

#[test]
fn rejects_non_object_document() {
    assert_eq!(
        import("[1,2]", &headers(&["a"])).unwrap_err(),
        ValidationError::NotAnObject
    );
}

#[test]
fn rejects_invalid_json() {
    assert!(matches!(
        import("{not json", &headers(&["a"])).unwrap_err(),
        ValidationError::InvalidJson { .. }
    ));
}

#[test]
fn rejects_wrong_version() {
    let document = r#"{"version":"2.0","mappings":{}}"#;
    assert!(matches!(
        import(document, &headers(&["a"])).unwrap_err(),
        ValidationError::UnsupportedVersion { .. }
    ));
}

#[test]
fn rejects_missing_or_array_mappings() {
    let missing = r#"{"version":"1.0"}"#;
    assert_eq!(
        import(missing, &headers(&["a"])).unwrap_err(),
        ValidationError::MappingsNotAnObject
    );
    let array = r#"{"version":"1.0","mappings":["a"]}"#;
    assert_eq!(
        import(array, &headers(&["a"])).unwrap_err(),
        ValidationError::MappingsNotAnObject
    );
}

#[test]
fn rejects_non_string_mapping_target() {
    let document = r#"{"version":"1.0","mappings":{"a":1}}"#;
    assert_eq!(
        import(document, &headers(&["a"])).unwrap_err(),
        ValidationError::MappingTargetNotAString {
            column: "a".to_string()
        }
    );
}

#[test]
fn rejects_unknown_column_type() {
    let document = r#"{"version":"1.0","mappings":{"a":"a"},"typeTransformations":{"a":"decimal"}}"#;
    assert!(matches!(
        import(document, &headers(&["a"])).unwrap_err(),
        ValidationError::InvalidColumnType { .. }
    ));
}

#[test]
fn rejects_bad_transformation_grammar() {
    let document = r#"{"version":"1.0","mappings":{"a":"a"},"transformations":{"a":"reverse"}}"#;
    assert!(matches!(
        import(document, &headers(&["a"])).unwrap_err(),
        ValidationError::InvalidTransformation { .. }
    ));

    let too_many = r#"{"version":"1.0","mappings":{"a":"a"},"transformations":{"a":"date:x:y:z"}}"#;
    assert!(matches!(
        import(too_many, &headers(&["a"])).unwrap_err(),
        ValidationError::InvalidTransformation { .. }
    ));
}

#[test]
fn rejects_unsupported_delimiters() {
    let document = r#"{"version":"1.0","mappings":{},"inputDelimiter":"|"}"#;
    assert!(matches!(
        import(document, &headers(&["a"])).unwrap_err(),
        ValidationError::InvalidDelimiter {
            field: "inputDelimiter",
            ..
        }
    ));
    let separator = r#"{"version":"1.0","mappings":{},"decimalSeparator":";"}"#;
    assert!(matches!(
        import(separator, &headers(&["a"])).unwrap_err(),
        ValidationError::InvalidDecimalSeparator { .. }
    ));
}

#[test]
fn rejects_import_before_any_table_loaded() {
    let document = r#"{"version":"1.0","mappings":{}}"#;
    assert_eq!(
        import(document, &[]).unwrap_err(),
        ValidationError::NoTableLoaded
    );
}

#[test]
fn rejects_unknown_columns_naming_them_all() {
    let document = r#"{"version":"1.0","mappings":{"zipcode":"zip","city":"city"}}"#;
    let error = import(document, &headers(&["name", "city"])).unwrap_err();
    match error {
        ValidationError::UnknownColumns { ref columns } => {
            assert_eq!(columns, &vec!["zipcode".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(error.to_string().contains("zipcode"));
}

#[test]
fn importer_tracks_states() {
    let mut importer = Importer::new();
    assert_eq!(importer.state(), ImportState::Idle);

    let bad = r#"{"version":"1.0","mappings":{"zipcode":"zip"}}"#;
    let table = headers(&["name"]);
    assert!(importer.import(bad, &table).is_err());
    assert_eq!(importer.state(), ImportState::Rejected);
    assert!(importer.last_error().is_some());

    let good = r#"{"version":"1.0","mappings":{"name":"name"}}"#;
    assert!(importer.import(good, &table).is_ok());
    assert_eq!(importer.state(), ImportState::Applied);
    assert!(importer.last_error().is_none());
}

#[test]
fn collection_entry_imports_like_a_bare_document() {
    let collection = r#"{
        "$schema": "https://example.com/mapping-collection.json",
        "schemas": [{"name": "people", "config": {"version": "1.0", "mappings": {"name": "n"}}}]
    }"#;
    let value = select_config(collection, Some("people")).unwrap();
    let outcome = remap_config::import_document(&value, &headers(&["name"])).unwrap();
    assert_eq!(
        outcome.config.mappings.get("name").map(String::as_str),
        Some("n")
    );
}
