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

//! # Summary Report Module
//!
//! Composes a fixed-template plain-text report from a table: dataset
//! shape, estimated memory footprint, one line per column with type and
//! missing counts, and a descriptive-statistics block when numeric
//! columns exist. The report is a pure function of the table's contents
//! and always succeeds.

use std::fmt::Write as _;

use crate::inspect::statistics::DaxNumericSummary;
use crate::inspect::DaxProfiler;
use crate::table::DaxTable;

/// Statistic rows of the numeric-summary block, in render order.
const STAT_ROWS: &[(&str, fn(&DaxNumericSummary) -> f64)] = &[
    ("count", |s| s.count as f64),
    ("mean", |s| s.mean),
    ("std", |s| s.std_dev),
    ("min", |s| s.min),
    ("25%", |s| s.q1),
    ("50%", |s| s.median),
    ("75%", |s| s.q3),
    ("max", |s| s.max),
];

/// Minimum printed width of a numeric-summary value column.
const MIN_COLUMN_WIDTH: usize = 12;

/// Renders plain-text summary reports.
#[derive(Clone, Debug, Default)]
pub struct DaxReporter;

impl DaxReporter {
    pub fn new() -> Self {
        Self
    }

    /// Composes the report for a table.
    pub fn render(&self, table: &DaxTable) -> String {
        let (rows, cols) = table.shape();
        let memory_mb = table.estimated_bytes() as f64 / (1024.0 * 1024.0);

        let mut report = String::new();
        report.push_str("# Data Summary Report\n");
        report.push_str("\n## Dataset Overview\n");
        let _ = writeln!(report, "- **Shape**: {rows} rows, {cols} columns");
        let _ = writeln!(report, "- **Memory Usage**: {memory_mb:.2} MB");

        report.push_str("\n## Column Information\n");
        for (name, column) in table.iter() {
            let null_count = column.null_count();
            let null_pct = if rows > 0 {
                (null_count as f64 / rows as f64) * 100.0
            } else {
                0.0
            };
            let _ = writeln!(
                report,
                "- **{name}**: {dtype} ({null_count} nulls, {null_pct:.1}%)",
                dtype = column.data_type(),
            );
        }

        let summary = DaxProfiler::new().profile(table);
        if let Some(stats) = &summary.numeric_summary {
            report.push_str("\n## Numeric Summary\n");
            self.render_numeric_block(&mut report, table, stats);
        }

        report
    }

    /// Fixed-width statistics table: one row per statistic, one column
    /// per numeric table column, in table order.
    fn render_numeric_block(
        &self,
        report: &mut String,
        table: &DaxTable,
        stats: &std::collections::HashMap<String, DaxNumericSummary>,
    ) {
        let names = table.numeric_column_names();
        let widths: Vec<usize> = names.iter().map(|n| n.len().max(MIN_COLUMN_WIDTH)).collect();
        let label_width = STAT_ROWS
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);

        let mut header = " ".repeat(label_width);
        for (name, &width) in names.iter().zip(&widths) {
            let _ = write!(header, "  {name:>width$}");
        }
        report.push_str(header.trim_end());
        report.push('\n');

        for (label, value_of) in STAT_ROWS {
            let mut line = format!("{label:<label_width$}");
            for (name, &width) in names.iter().zip(&widths) {
                match stats.get(*name) {
                    Some(summary) => {
                        let _ = write!(line, "  {value:>width$.6}", value = value_of(summary));
                    }
                    None => {
                        let _ = write!(line, "  {:>width$}", "-");
                    }
                }
            }
            report.push_str(line.trim_end());
            report.push('\n');
        }
    }
}
