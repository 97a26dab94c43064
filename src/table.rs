//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Dax.
//! The Dax project belongs to the Dunimd Team.
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

//! # Dax Table Module
//!
//! This module provides the core tabular data structures for Dax. A
//! [`DaxTable`] is the fundamental unit of data: every analysis operation
//! receives a table reference and never mutates it.
//!
//! ## Design Principles
//!
//! - **Column-major**: data is stored per column, matching how the
//!   profiling and correlation passes consume it
//! - **Typed columns**: each column declares a [`DaxDataType`]; `Int64`
//!   and `Float64` are the numeric kinds
//! - **Missing values are first-class**: cells are `Option<T>`, so null
//!   counting is a plain linear scan with no sentinel values
//! - **Immutability-friendly**: tables are built once by the ingest layer
//!   and only read afterwards
//!
//! ## Usage Example
//!
//! ```rust
//! use dax::table::{DaxColumn, DaxTable};
//!
//! let mut table = DaxTable::new();
//! table.add_column("score", DaxColumn::Float64(vec![Some(1.5), None, Some(3.0)]))?;
//! table.add_column("label", DaxColumn::Utf8(vec![
//!     Some("a".into()), Some("b".into()), Some("c".into()),
//! ]))?;
//!
//! assert_eq!(table.shape(), (3, 2));
//! assert_eq!(table.column_by_name("score").unwrap().null_count(), 1);
//! # Ok::<(), dax::errors::DaxError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DaxError, Result};

/// Declared type of a [`DaxColumn`].
///
/// `Int64` and `Float64` are the numeric kinds; every other type is
/// excluded from descriptive statistics and correlation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaxDataType {
    /// 64-bit signed integers.
    Int64,
    /// 64-bit floating point values.
    Float64,
    /// Boolean (true/false) values.
    Bool,
    /// UTF-8 strings.
    Utf8,
}

impl DaxDataType {
    /// Returns `true` for the integer and floating-point kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DaxDataType::Int64 | DaxDataType::Float64)
    }

    /// Stable lowercase name used in reports and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            DaxDataType::Int64 => "int64",
            DaxDataType::Float64 => "float64",
            DaxDataType::Bool => "bool",
            DaxDataType::Utf8 => "utf8",
        }
    }
}

impl std::fmt::Display for DaxDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed column with per-cell missing values.
///
/// Cells are `Option<T>`; `None` is a missing value. All variants keep
/// one entry per table row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DaxColumn {
    /// 64-bit integer cells.
    Int64(Vec<Option<i64>>),
    /// 64-bit float cells.
    Float64(Vec<Option<f64>>),
    /// Boolean cells.
    Bool(Vec<Option<bool>>),
    /// String cells.
    Utf8(Vec<Option<String>>),
}

impl DaxColumn {
    /// Returns the declared type of this column.
    pub fn data_type(&self) -> DaxDataType {
        match self {
            DaxColumn::Int64(_) => DaxDataType::Int64,
            DaxColumn::Float64(_) => DaxDataType::Float64,
            DaxColumn::Bool(_) => DaxDataType::Bool,
            DaxColumn::Utf8(_) => DaxDataType::Utf8,
        }
    }

    /// Returns the number of cells (including missing ones).
    pub fn len(&self) -> usize {
        match self {
            DaxColumn::Int64(cells) => cells.len(),
            DaxColumn::Float64(cells) => cells.len(),
            DaxColumn::Bool(cells) => cells.len(),
            DaxColumn::Utf8(cells) => cells.len(),
        }
    }

    /// Returns `true` if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counts missing cells via a linear scan.
    pub fn null_count(&self) -> usize {
        match self {
            DaxColumn::Int64(cells) => cells.iter().filter(|c| c.is_none()).count(),
            DaxColumn::Float64(cells) => cells.iter().filter(|c| c.is_none()).count(),
            DaxColumn::Bool(cells) => cells.iter().filter(|c| c.is_none()).count(),
            DaxColumn::Utf8(cells) => cells.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Returns `true` for `Int64` and `Float64` columns.
    pub fn is_numeric(&self) -> bool {
        self.data_type().is_numeric()
    }

    /// Returns the cell at `idx` as `f64`, or `None` when the cell is
    /// missing or the column is not numeric.
    pub fn numeric_at(&self, idx: usize) -> Option<f64> {
        match self {
            DaxColumn::Int64(cells) => cells.get(idx).copied().flatten().map(|v| v as f64),
            DaxColumn::Float64(cells) => cells.get(idx).copied().flatten(),
            _ => None,
        }
    }

    /// Collects the non-missing values of a numeric column as `f64`,
    /// preserving row order. Returns `None` for non-numeric columns.
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        match self {
            DaxColumn::Int64(cells) => {
                Some(cells.iter().flatten().map(|v| *v as f64).collect())
            }
            DaxColumn::Float64(cells) => Some(cells.iter().flatten().copied().collect()),
            _ => None,
        }
    }

    /// Estimated in-memory footprint of the column in bytes.
    ///
    /// Fixed-width cells count their value size; strings count their byte
    /// length plus pointer overhead.
    pub fn estimated_bytes(&self) -> usize {
        match self {
            DaxColumn::Int64(cells) => cells.len() * std::mem::size_of::<i64>(),
            DaxColumn::Float64(cells) => cells.len() * std::mem::size_of::<f64>(),
            DaxColumn::Bool(cells) => cells.len(),
            DaxColumn::Utf8(cells) => cells
                .iter()
                .map(|c| {
                    c.as_ref().map(|s| s.len()).unwrap_or(0) + std::mem::size_of::<usize>()
                })
                .sum(),
        }
    }
}

/// In-memory tabular dataset with named, typed columns and ordered rows.
///
/// Tables are built by the ingest layer (or by hand in tests) through
/// [`DaxTable::add_column`], which enforces that every column shares the
/// table's row count. All analysis operations take `&DaxTable` and leave
/// the table untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DaxTable {
    names: Vec<String>,
    columns: Vec<DaxColumn>,
    row_count: usize,
}

impl DaxTable {
    /// Constructs an empty table with no columns or rows.
    pub fn new() -> Self {
        DaxTable {
            names: Vec::new(),
            columns: Vec::new(),
            row_count: 0,
        }
    }

    /// Appends a named column.
    ///
    /// The first column fixes the table's row count; every later column
    /// must match it or the call fails with [`DaxError::ShapeMismatch`].
    pub fn add_column(&mut self, name: impl Into<String>, column: DaxColumn) -> Result<()> {
        let len = column.len();
        if self.columns.is_empty() {
            self.row_count = len;
        } else if len != self.row_count {
            return Err(DaxError::ShapeMismatch {
                expected: self.row_count,
                actual: len,
            });
        }
        self.names.push(name.into());
        self.columns.push(column);
        Ok(())
    }

    /// Returns the `(rows, columns)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in their existing order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Returns the column at `index`, if any.
    pub fn column(&self, index: usize) -> Option<&DaxColumn> {
        self.columns.get(index)
    }

    /// Returns the column with the given name, if any.
    pub fn column_by_name(&self, name: &str) -> Option<&DaxColumn> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    /// Returns the column with the given name or a
    /// [`DaxError::ColumnNotFound`].
    pub fn require_column(&self, name: &str) -> Result<&DaxColumn> {
        self.column_by_name(name)
            .ok_or_else(|| DaxError::column_not_found(name))
    }

    /// Returns an iterator over `(name, column)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DaxColumn)> {
        self.names
            .iter()
            .map(|s| s.as_str())
            .zip(self.columns.iter())
    }

    /// Returns `(name, declared type)` pairs in column order.
    pub fn schema(&self) -> Vec<(&str, DaxDataType)> {
        self.iter().map(|(name, col)| (name, col.data_type())).collect()
    }

    /// Names of the numeric columns, in table order.
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, col)| col.is_numeric())
            .map(|(name, _)| name)
            .collect()
    }

    /// Estimated in-memory footprint of the table in bytes.
    pub fn estimated_bytes(&self) -> usize {
        self.columns.iter().map(DaxColumn::estimated_bytes).sum()
    }
}
