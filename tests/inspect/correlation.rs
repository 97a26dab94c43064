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

use dax::inspect::DaxCorrelator;
use dax::table::{DaxColumn, DaxTable};

fn table_with_duplicate_series() -> DaxTable {
    let series = vec![Some(2.0), Some(4.0), Some(6.0), Some(9.0)];
    let mut table = DaxTable::new();
    table
        .add_column("left", DaxColumn::Float64(series.clone()))
        .unwrap();
    table
        .add_column("right", DaxColumn::Float64(series))
        .unwrap();
    table
        .add_column(
            "name",
            DaxColumn::Utf8(vec![
                Some("a".into()),
                Some("b".into()),
                Some("c".into()),
                Some("d".into()),
            ]),
        )
        .unwrap();
    table
}

#[test]
fn identical_columns_give_unit_matrix() {
    let matrix = DaxCorrelator::new().compute(&table_with_duplicate_series());
    assert_eq!(matrix.len(), 2);
    assert_eq!(matrix.columns(), &["left", "right"]);
    assert_eq!(matrix.get("left", "left"), Some(1.0));
    assert_eq!(matrix.get("right", "right"), Some(1.0));
    assert_eq!(matrix.get("left", "right"), Some(1.0));
    assert_eq!(matrix.get("right", "left"), Some(1.0));
}

#[test]
fn matrix_is_symmetric() {
    let mut table = DaxTable::new();
    table
        .add_column(
            "x",
            DaxColumn::Float64(vec![Some(1.0), Some(2.0), Some(4.0), Some(3.0)]),
        )
        .unwrap();
    table
        .add_column(
            "y",
            DaxColumn::Float64(vec![Some(2.0), Some(1.0), Some(5.0), Some(2.0)]),
        )
        .unwrap();

    let matrix = DaxCorrelator::new().compute(&table);
    let xy = matrix.get("x", "y").unwrap();
    let yx = matrix.get("y", "x").unwrap();
    assert_eq!(xy, yx);
    assert!(xy > 0.0 && xy <= 1.0);
    assert_eq!(matrix.value_at(0, 1), xy);
}

#[test]
fn nonexistent_request_yields_empty_matrix() {
    let matrix = DaxCorrelator::new()
        .with_columns(["nonexistent"])
        .compute(&table_with_duplicate_series());
    assert!(matrix.is_empty());
    assert_eq!(matrix.len(), 0);
    assert!(matrix.get("nonexistent", "nonexistent").is_none());
}

#[test]
fn selection_keeps_request_order_and_drops_silently() {
    let matrix = DaxCorrelator::new()
        .with_columns(["right", "name", "ghost", "left"])
        .compute(&table_with_duplicate_series());
    // Non-numeric and unknown names are filtered, not errors.
    assert_eq!(matrix.columns(), &["right", "left"]);
}

#[test]
fn int_columns_participate() {
    let mut table = DaxTable::new();
    table
        .add_column("i", DaxColumn::Int64(vec![Some(1), Some(2), Some(3)]))
        .unwrap();
    table
        .add_column(
            "f",
            DaxColumn::Float64(vec![Some(10.0), Some(20.0), Some(30.0)]),
        )
        .unwrap();

    let matrix = DaxCorrelator::new().compute(&table);
    let r = matrix.get("i", "f").unwrap();
    assert!((r - 1.0).abs() < 1e-12);
}

#[test]
fn text_only_table_yields_empty_matrix() {
    let mut table = DaxTable::new();
    table
        .add_column("tag", DaxColumn::Utf8(vec![Some("a".into())]))
        .unwrap();

    let matrix = DaxCorrelator::new().compute(&table);
    assert!(matrix.is_empty());
}
