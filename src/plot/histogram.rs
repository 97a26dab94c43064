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

/// One histogram bin over `[start, end)` (the last bin is closed).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DaxHistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    pub percentage: f64,
}

/// Equal-width histogram of a value slice.
///
/// This is the data the plotter renders, kept separate so binning stays
/// testable without a rendering backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DaxHistogram {
    pub bins: Vec<DaxHistogramBin>,
    pub total_count: usize,
    pub bin_count: usize,
}

impl DaxHistogram {
    /// Bins `values` into `bin_count` equal-width bins spanning min..max.
    ///
    /// Constant data collapses into a single full bin; empty input yields
    /// the empty default.
    pub fn from_values(values: &[f64], bin_count: usize) -> Self {
        if values.is_empty() || bin_count == 0 {
            return Self::default();
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        if range == 0.0 {
            return DaxHistogram {
                bins: vec![DaxHistogramBin {
                    start: min,
                    end: max,
                    count: values.len(),
                    percentage: 100.0,
                }],
                total_count: values.len(),
                bin_count: 1,
            };
        }

        let bin_width = range / bin_count as f64;
        let mut bins: Vec<DaxHistogramBin> = (0..bin_count)
            .map(|i| DaxHistogramBin {
                start: min + i as f64 * bin_width,
                end: min + (i + 1) as f64 * bin_width,
                count: 0,
                percentage: 0.0,
            })
            .collect();

        for &value in values {
            let idx = ((value - min) / bin_width).floor() as usize;
            bins[idx.min(bin_count - 1)].count += 1;
        }

        let total = values.len();
        for bin in &mut bins {
            bin.percentage = (bin.count as f64 / total as f64) * 100.0;
        }

        DaxHistogram {
            bins,
            total_count: total,
            bin_count,
        }
    }

    /// Largest bin count, 0 for an empty histogram.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Start of the first bin, NaN when empty.
    pub fn min_edge(&self) -> f64 {
        self.bins.first().map(|b| b.start).unwrap_or(f64::NAN)
    }

    /// End of the last bin, NaN when empty.
    pub fn max_edge(&self) -> f64 {
        self.bins.last().map(|b| b.end).unwrap_or(f64::NAN)
    }
}
