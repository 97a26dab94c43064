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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::inspect::statistics::DaxNumericSummary;
use crate::table::{DaxDataType, DaxTable};

/// Profiling result for one table.
///
/// `numeric_summary` is present only when the table has at least one
/// numeric column; it is `None` (not an empty map) otherwise.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DaxTableSummary {
    /// `(rows, columns)`.
    pub shape: (usize, usize),
    /// Column names in their existing order.
    pub columns: Vec<String>,
    /// Declared type per column.
    pub dtypes: HashMap<String, DaxDataType>,
    /// Missing-value count per column.
    pub missing_values: HashMap<String, usize>,
    /// Descriptive statistics per numeric column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_summary: Option<HashMap<String, DaxNumericSummary>>,
}

/// Computes [`DaxTableSummary`] values from tables.
///
/// Stateless; profiling is a pure read of the table and never fails.
#[derive(Clone, Debug, Default)]
pub struct DaxProfiler;

impl DaxProfiler {
    pub fn new() -> Self {
        Self
    }

    /// Profiles a table: shape, column order, declared types, missing
    /// counts, and (if any numeric column exists) descriptive statistics.
    pub fn profile(&self, table: &DaxTable) -> DaxTableSummary {
        let columns: Vec<String> = table.column_names().to_vec();

        let mut dtypes = HashMap::with_capacity(columns.len());
        let mut missing_values = HashMap::with_capacity(columns.len());
        let mut numeric_summary: HashMap<String, DaxNumericSummary> = HashMap::new();

        for (name, column) in table.iter() {
            dtypes.insert(name.to_string(), column.data_type());
            missing_values.insert(name.to_string(), column.null_count());

            if let Some(values) = column.numeric_values() {
                numeric_summary
                    .insert(name.to_string(), DaxNumericSummary::from_values(&values));
            }
        }

        DaxTableSummary {
            shape: table.shape(),
            columns,
            dtypes,
            missing_values,
            numeric_summary: if numeric_summary.is_empty() {
                None
            } else {
                Some(numeric_summary)
            },
        }
    }
}

impl DaxTableSummary {
    /// Declared type of a column, if profiled.
    pub fn dtype(&self, name: &str) -> Option<DaxDataType> {
        self.dtypes.get(name).copied()
    }

    /// Missing-value count of a column, if profiled.
    pub fn missing(&self, name: &str) -> Option<usize> {
        self.missing_values.get(name).copied()
    }
}
