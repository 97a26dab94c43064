//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Dax.
//! The Dax project belongs to the Dunimd project team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use dax::errors::DaxError;
use dax::ingest::{DaxFileFormat, DaxReaderConfig, DaxTableReader};
use dax::table::DaxDataType;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn detect_recognizes_the_three_formats() {
    assert_eq!(
        DaxFileFormat::detect(Path::new("a.csv")).unwrap(),
        DaxFileFormat::Csv
    );
    assert_eq!(
        DaxFileFormat::detect(Path::new("a.json")).unwrap(),
        DaxFileFormat::Json
    );
    assert_eq!(
        DaxFileFormat::detect(Path::new("a.xlsx")).unwrap(),
        DaxFileFormat::Xlsx
    );
}

#[test]
fn unknown_extension_is_unsupported_format() {
    let dir = TempDir::new().expect("tmp");
    let path = write_fixture(&dir, "data.txt", "a,b\n1,2\n");

    let err = DaxTableReader::new()
        .read_path(&path)
        .expect_err("txt must be rejected");
    assert!(matches!(err, DaxError::UnsupportedFormat { .. }));
}

#[test]
fn csv_column_count_matches_field_count() {
    let dir = TempDir::new().expect("tmp");
    let path = write_fixture(&dir, "people.csv", "name,age,score\nAda,36,9.5\nBob,41,7.0\n");

    let table = DaxTableReader::new().read_path(&path).expect("load csv");
    assert_eq!(table.shape(), (2, 3));
    assert_eq!(table.column_names(), &["name", "age", "score"]);
    assert_eq!(
        table.column_by_name("name").unwrap().data_type(),
        DaxDataType::Utf8
    );
    assert_eq!(
        table.column_by_name("age").unwrap().data_type(),
        DaxDataType::Int64
    );
    assert_eq!(
        table.column_by_name("score").unwrap().data_type(),
        DaxDataType::Float64
    );
}

#[test]
fn csv_null_markers_count_as_missing() {
    let dir = TempDir::new().expect("tmp");
    let path = write_fixture(&dir, "gaps.csv", "x,y\n1,a\nNA,b\n3,\n");

    let table = DaxTableReader::new().read_path(&path).expect("load csv");
    let x = table.column_by_name("x").unwrap();
    assert_eq!(x.data_type(), DaxDataType::Int64);
    assert_eq!(x.null_count(), 1);
    assert_eq!(table.column_by_name("y").unwrap().null_count(), 1);
}

#[test]
fn csv_custom_delimiter() {
    let dir = TempDir::new().expect("tmp");
    let path = write_fixture(&dir, "semi.csv", "a;b\n1;2\n3;4\n");

    let config = DaxReaderConfig {
        delimiter: b';',
        ..DaxReaderConfig::default()
    };
    let table = DaxTableReader::new()
        .with_config(config)
        .read_path(&path)
        .expect("load csv");
    assert_eq!(table.shape(), (2, 2));
    assert_eq!(table.column_names(), &["a", "b"]);
}

#[test]
fn malformed_csv_surfaces_parse_error() {
    let dir = TempDir::new().expect("tmp");
    // Second data row has a stray field count.
    let path = write_fixture(&dir, "bad.csv", "a,b\n1,2\n3,4,5\n");

    let err = DaxTableReader::new()
        .read_path(&path)
        .expect_err("ragged row must fail");
    assert!(matches!(err, DaxError::Parse(_)));
}

#[test]
fn json_array_of_objects() {
    let dir = TempDir::new().expect("tmp");
    let path = write_fixture(
        &dir,
        "rows.json",
        r#"[
            {"id": 1, "label": "a", "score": 0.5},
            {"id": 2, "label": "b", "score": 1.5},
            {"id": 3, "label": null}
        ]"#,
    );

    let table = DaxTableReader::new().read_path(&path).expect("load json");
    assert_eq!(table.shape(), (3, 3));
    assert_eq!(
        table.column_by_name("id").unwrap().data_type(),
        DaxDataType::Int64
    );
    assert_eq!(
        table.column_by_name("score").unwrap().data_type(),
        DaxDataType::Float64
    );
    // Explicit null and absent key are both missing.
    assert_eq!(table.column_by_name("label").unwrap().null_count(), 1);
    assert_eq!(table.column_by_name("score").unwrap().null_count(), 1);
}

#[test]
fn json_object_of_arrays() {
    let dir = TempDir::new().expect("tmp");
    let path = write_fixture(
        &dir,
        "cols.json",
        r#"{"x": [1, 2, 3], "tag": ["a", "b", "c"]}"#,
    );

    let table = DaxTableReader::new().read_path(&path).expect("load json");
    assert_eq!(table.shape(), (3, 2));
    assert_eq!(
        table.column_by_name("x").unwrap().data_type(),
        DaxDataType::Int64
    );
    assert_eq!(
        table.column_by_name("tag").unwrap().data_type(),
        DaxDataType::Utf8
    );
}

#[test]
fn json_scalar_document_is_a_parse_error() {
    let dir = TempDir::new().expect("tmp");
    let path = write_fixture(&dir, "scalar.json", "42");

    let err = DaxTableReader::new()
        .read_path(&path)
        .expect_err("scalar json must fail");
    assert!(matches!(err, DaxError::Parse(_)));
}

#[test]
fn json_syntax_error_propagates() {
    let dir = TempDir::new().expect("tmp");
    let path = write_fixture(&dir, "broken.json", "[{\"a\": 1,]");

    let err = DaxTableReader::new()
        .read_path(&path)
        .expect_err("broken json must fail");
    assert!(matches!(err, DaxError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = DaxTableReader::new()
        .read_path(Path::new("/nonexistent/nowhere.csv"))
        .expect_err("missing file");
    assert!(matches!(err, DaxError::Io(_)));
}

#[cfg(feature = "xlsx")]
#[test]
fn xlsx_garbage_bytes_surface_parse_error() {
    let dir = TempDir::new().expect("tmp");
    let path = write_fixture(&dir, "not_really.xlsx", "this is not a zip archive");

    let err = DaxTableReader::new()
        .read_path(&path)
        .expect_err("garbage workbook must fail");
    assert!(matches!(err, DaxError::Parse(_)));
}
