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

use serde::{Deserialize, Serialize};

use crate::table::{DaxColumn, DaxTable};

/// Square Pearson correlation matrix over numeric columns.
///
/// Indexed by column name on both axes. Values lie in [-1, 1]; a pair
/// with fewer than two complete observations or zero variance is NaN.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DaxCorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl DaxCorrelationMatrix {
    /// Column names backing both axes.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns (the matrix is `len` × `len`).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Correlation between two columns by name, if both are present.
    pub fn get(&self, x: &str, y: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == x)?;
        let j = self.columns.iter().position(|c| c == y)?;
        Some(self.values[i][j])
    }

    /// Correlation by axis indices. Panics if out of range.
    pub fn value_at(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

/// Computes pairwise Pearson correlation over numeric columns.
///
/// Selection mirrors filtering, not validation: with a column subset set,
/// names that are absent from the table or non-numeric are silently
/// dropped instead of raising.
#[derive(Clone, Debug, Default)]
pub struct DaxCorrelator {
    columns: Option<Vec<String>>,
}

impl DaxCorrelator {
    /// Correlator over all numeric columns in table order.
    pub fn new() -> Self {
        Self { columns: None }
    }

    /// Restricts the correlator to the given columns, kept in the given
    /// order.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Computes the correlation matrix for a table.
    ///
    /// An empty selection (no numeric columns, or a subset matching
    /// nothing) yields an empty matrix.
    pub fn compute(&self, table: &DaxTable) -> DaxCorrelationMatrix {
        let selected: Vec<(&str, &DaxColumn)> = match &self.columns {
            Some(requested) => requested
                .iter()
                .filter_map(|name| {
                    table
                        .column_by_name(name)
                        .filter(|col| col.is_numeric())
                        .map(|col| (name.as_str(), col))
                })
                .collect(),
            None => table
                .iter()
                .filter(|(_, col)| col.is_numeric())
                .collect(),
        };

        let columns: Vec<String> = selected.iter().map(|(name, _)| name.to_string()).collect();
        let n = selected.len();
        let mut values = vec![vec![f64::NAN; n]; n];

        for i in 0..n {
            for j in i..n {
                let r = pearson(selected[i].1, selected[j].1, table.row_count());
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        DaxCorrelationMatrix { columns, values }
    }
}

/// Pearson correlation over rows where both columns have values.
fn pearson(x: &DaxColumn, y: &DaxColumn, row_count: usize) -> f64 {
    let mut n = 0usize;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;

    for idx in 0..row_count {
        if let (Some(a), Some(b)) = (x.numeric_at(idx), y.numeric_at(idx)) {
            n += 1;
            sum_x += a;
            sum_y += b;
            sum_xy += a * b;
            sum_x2 += a * a;
            sum_y2 += b * b;
        }
    }

    if n < 2 {
        return f64::NAN;
    }

    let n = n as f64;
    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}
