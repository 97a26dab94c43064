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

//! # Histogram Plotting Module
//!
//! Renders a histogram of one table column to a PNG file. Binning
//! ([`DaxHistogram`]) is pure data and always available; the rendering
//! step requires the `plot` cargo feature (on by default), which pulls in
//! the bitmap plotting backend.
//!
//! Charts use a fixed 1000×600 surface: semi-transparent filled bars with
//! black edges, labeled axes, a `Distribution of <column>` title, and
//! light gridlines.

pub mod histogram;

pub use histogram::{DaxHistogram, DaxHistogramBin};

#[cfg(feature = "plot")]
pub use render::{DaxHistogramPlotter, DEFAULT_BINS};

#[cfg(feature = "plot")]
mod render {
    use std::path::Path;

    use plotters::prelude::*;

    use crate::errors::{DaxError, Result};
    use crate::plot::histogram::DaxHistogram;
    use crate::table::DaxTable;

    /// Default number of equal-width bins.
    pub const DEFAULT_BINS: usize = 30;

    const FIGURE_WIDTH: u32 = 1000;
    const FIGURE_HEIGHT: u32 = 600;

    /// Renders column histograms to PNG files.
    ///
    /// Missing values are dropped before binning. Fails with
    /// [`DaxError::ColumnNotFound`] for an unknown column and
    /// [`DaxError::NonNumericColumn`] for a non-numeric one.
    #[derive(Clone, Debug)]
    pub struct DaxHistogramPlotter {
        bins: usize,
    }

    impl Default for DaxHistogramPlotter {
        fn default() -> Self {
            Self { bins: DEFAULT_BINS }
        }
    }

    impl DaxHistogramPlotter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_bins(mut self, bins: usize) -> Self {
            self.bins = bins;
            self
        }

        /// Draws the histogram of `column` and writes it to `output_path`.
        ///
        /// Purely side-effecting: the table is not modified and nothing is
        /// returned beyond success.
        pub fn render(&self, table: &DaxTable, column: &str, output_path: &Path) -> Result<()> {
            let col = table.require_column(column)?;
            let values = col
                .numeric_values()
                .ok_or_else(|| DaxError::non_numeric(column))?;
            let hist = DaxHistogram::from_values(&values, self.bins);

            let root = BitMapBackend::new(output_path, (FIGURE_WIDTH, FIGURE_HEIGHT))
                .into_drawing_area();
            root.fill(&WHITE).map_err(|e| DaxError::plot(e.to_string()))?;

            let (mut x_min, mut x_max) = if hist.bins.is_empty() {
                (0.0, 1.0)
            } else {
                (hist.min_edge(), hist.max_edge())
            };
            if x_min == x_max {
                x_min -= 0.5;
                x_max += 0.5;
            }
            let y_max = (hist.max_count() as f64 * 1.05).max(1.0);

            let mut chart = ChartBuilder::on(&root)
                .caption(format!("Distribution of {column}"), ("sans-serif", 30))
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(60)
                .build_cartesian_2d(x_min..x_max, 0.0..y_max)
                .map_err(|e| DaxError::plot(e.to_string()))?;

            chart
                .configure_mesh()
                .x_desc(column)
                .y_desc("Frequency")
                .bold_line_style(&BLACK.mix(0.15))
                .light_line_style(&BLACK.mix(0.05))
                .draw()
                .map_err(|e| DaxError::plot(e.to_string()))?;

            chart
                .draw_series(hist.bins.iter().map(|bin| {
                    Rectangle::new(
                        [(bin.start, 0.0), (bin.end, bin.count as f64)],
                        BLUE.mix(0.7).filled(),
                    )
                }))
                .map_err(|e| DaxError::plot(e.to_string()))?;

            chart
                .draw_series(hist.bins.iter().map(|bin| {
                    Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], &BLACK)
                }))
                .map_err(|e| DaxError::plot(e.to_string()))?;

            root.present().map_err(|e| DaxError::plot(e.to_string()))?;

            log::debug!(
                "rendered histogram of '{}' ({} bins) to {}",
                column,
                hist.bin_count,
                output_path.display()
            );
            Ok(())
        }
    }
}
