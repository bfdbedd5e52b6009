// End-to-end validation workflow: import a file, load a schema, run the
// validator, index the errors, render the report.

use std::fs;

use tempfile::tempdir;

use tearsheet_cli::report::ValidationReport;
use tearsheet_engine::labels::column_label;
use tearsheet_engine::{validate, ErrorIndex};
use tearsheet_io::{csv, schema_file};

const SAMPLE_SCHEMA: &str = r#"[
    { "index": 0, "name": "ID",     "type": "Number",  "required": true },
    { "index": 1, "name": "Name",   "type": "Text",    "required": true },
    { "index": 2, "name": "Age",    "type": "Number",  "required": false },
    { "index": 3, "name": "Active", "type": "Boolean", "required": true },
    { "index": 4, "name": "Join",   "type": "Date",    "required": false }
]"#;

const SAMPLE_DATA: &str = "\
101,Alice,28,true,2023-01-15
102,Bob,InvalidAge,false,2023-02-20
103,,35,true,2023-03-10
";

#[test]
fn validate_sample_file() {
    let dir = tempdir().unwrap();
    let data_path = dir.path().join("people.csv");
    let schema_path = dir.path().join("schema.json");
    fs::write(&data_path, SAMPLE_DATA).unwrap();
    fs::write(&schema_path, SAMPLE_SCHEMA).unwrap();

    let rows = csv::import(&data_path).unwrap();
    let schema = schema_file::load(&schema_path).unwrap();
    let errors = validate(&rows, &schema);

    assert_eq!(errors.len(), 2);

    // Row 1: bad Age
    assert_eq!((errors[0].row, errors[0].col), (1, 2));
    assert!(errors[0].message.contains("Number"));
    assert!(errors[0].message.contains("InvalidAge"));

    // Row 2: missing required Name
    assert_eq!((errors[1].row, errors[1].col), (2, 1));
    assert_eq!(errors[1].message, "Column 'Name' is required but was empty.");
}

#[test]
fn index_matches_validator_output() {
    let rows = csv::import_str(SAMPLE_DATA, b',').unwrap();
    let schema = schema_file::parse(SAMPLE_SCHEMA).unwrap();
    let errors = validate(&rows, &schema);
    let index = ErrorIndex::build(errors.clone());

    for e in &errors {
        assert!(index.has_error_at(e.row, e.col));
        assert_eq!(index.error_at(e.row, e.col).unwrap().message, e.message);
    }

    // Spot-check cells that are clean
    assert!(!index.has_error_at(0, 0));
    assert!(!index.has_error_at(1, 1));
    assert!(!index.has_error_at(2, 2));
}

#[test]
fn report_uses_a1_addresses() {
    let rows = csv::import_str(SAMPLE_DATA, b',').unwrap();
    let schema = schema_file::parse(SAMPLE_SCHEMA).unwrap();
    let report = ValidationReport::build(&validate(&rows, &schema), None);

    let lines = report.human_lines();
    assert_eq!(lines[0], "C2: Expected a Number, got 'InvalidAge'.");
    assert_eq!(lines[1], "B3: Column 'Name' is required but was empty.");
    assert_eq!(lines[2], "2 validation errors.");
}

#[test]
fn semicolon_file_sniffed_and_validated() {
    let dir = tempdir().unwrap();
    let data_path = dir.path().join("export.txt");
    fs::write(&data_path, "104;Carol;;yes;2023-06-01\n105;Dan;41;nope;\n").unwrap();

    let rows = csv::import(&data_path).unwrap();
    let schema = schema_file::parse(SAMPLE_SCHEMA).unwrap();
    let errors = validate(&rows, &schema);

    // Only Dan's Active column fails; Carol's empty optional Age is fine
    assert_eq!(errors.len(), 1);
    assert_eq!((errors[0].row, errors[0].col), (1, 3));
    assert!(errors[0].message.contains("Boolean"));
}

#[test]
fn export_headers_come_from_codec() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("out.csv");

    let rows = csv::import_str("1,x\n2,y\n", b',').unwrap();
    let headers: Vec<String> = (0..2).map(column_label).collect();
    csv::export(&out_path, &rows, &headers).unwrap();

    let content = fs::read_to_string(&out_path).unwrap();
    assert_eq!(content, "A,B\n1,x\n2,y\n");
}

#[test]
fn failed_import_leaves_nothing_to_validate() {
    // An unreadable input surfaces as a single failure signal; there is
    // no partial row set for the validator to run on.
    let dir = tempdir().unwrap();
    assert!(csv::import(&dir.path().join("missing.csv")).is_err());
    assert!(csv::import(dir.path()).is_err()); // directory, not a file
}
