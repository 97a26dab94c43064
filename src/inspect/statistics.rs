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

use serde::{Deserialize, Serialize};

/// Descriptive statistics for one numeric column, computed over its
/// non-missing values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DaxNumericSummary {
    /// Number of non-missing values.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1); NaN below two values.
    pub std_dev: f64,
    pub min: f64,
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
    pub max: f64,
}

impl DaxNumericSummary {
    /// Computes the summary for a slice of values.
    ///
    /// An empty slice yields the all-zero default (callers skip columns
    /// with no valid values before getting here).
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let count = values.len();
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let sum: f64 = sorted.iter().sum();
        let mean = sum / count as f64;

        let std_dev = if count > 1 {
            let sum_sq: f64 = sorted.iter().map(|x| (x - mean).powi(2)).sum();
            (sum_sq / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        DaxNumericSummary {
            count,
            mean,
            std_dev,
            min: sorted[0],
            q1: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.50),
            q3: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }
}

/// Percentile of a sorted slice with linear interpolation between the two
/// closest ranks. `fraction` is in [0, 1].
pub(crate) fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = fraction * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = rank - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}
