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

use dax::errors::DaxError;
use dax::table::{DaxColumn, DaxDataType, DaxTable};

#[test]
fn empty_table_has_zero_shape() {
    let table = DaxTable::new();
    assert_eq!(table.shape(), (0, 0));
    assert!(table.is_empty());
    assert!(table.column_names().is_empty());
}

#[test]
fn first_column_fixes_row_count() {
    let mut table = DaxTable::new();
    table
        .add_column("a", DaxColumn::Int64(vec![Some(1), Some(2)]))
        .expect("first column");
    assert_eq!(table.row_count(), 2);

    let err = table
        .add_column("b", DaxColumn::Int64(vec![Some(1)]))
        .expect_err("length mismatch");
    assert!(matches!(
        err,
        DaxError::ShapeMismatch {
            expected: 2,
            actual: 1
        }
    ));

    // Failed insert leaves the table untouched.
    assert_eq!(table.shape(), (2, 1));
}

#[test]
fn column_lookup_by_name_and_index() {
    let mut table = DaxTable::new();
    table
        .add_column("x", DaxColumn::Float64(vec![Some(1.0)]))
        .unwrap();
    table
        .add_column("flag", DaxColumn::Bool(vec![None]))
        .unwrap();

    assert_eq!(
        table.column(0).map(|c| c.data_type()),
        Some(DaxDataType::Float64)
    );
    assert_eq!(
        table.column_by_name("flag").map(|c| c.data_type()),
        Some(DaxDataType::Bool)
    );
    assert!(table.column_by_name("missing").is_none());
    assert!(table.column(9).is_none());
}

#[test]
fn numeric_kinds_and_casting() {
    assert!(DaxDataType::Int64.is_numeric());
    assert!(DaxDataType::Float64.is_numeric());
    assert!(!DaxDataType::Bool.is_numeric());
    assert!(!DaxDataType::Utf8.is_numeric());

    let ints = DaxColumn::Int64(vec![Some(2), None, Some(4)]);
    assert_eq!(ints.numeric_values().unwrap(), vec![2.0, 4.0]);
    assert_eq!(ints.numeric_at(0), Some(2.0));
    assert_eq!(ints.numeric_at(1), None);

    let flags = DaxColumn::Bool(vec![Some(true)]);
    assert!(flags.numeric_values().is_none());
    assert_eq!(flags.numeric_at(0), None);
}

#[test]
fn estimated_bytes_grow_with_content() {
    let mut small = DaxTable::new();
    small
        .add_column("s", DaxColumn::Utf8(vec![Some("a".into())]))
        .unwrap();

    let mut large = DaxTable::new();
    large
        .add_column(
            "s",
            DaxColumn::Utf8(vec![Some("a much longer string value".into())]),
        )
        .unwrap();

    assert!(large.estimated_bytes() > small.estimated_bytes());

    let mut fixed = DaxTable::new();
    fixed
        .add_column("n", DaxColumn::Int64(vec![Some(1), Some(2), Some(3)]))
        .unwrap();
    assert_eq!(fixed.estimated_bytes(), 3 * 8);
}
