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

//! # Dax Core Library
//!
//! Dax is a small toolkit for loading tabular datasets and producing
//! quick insights: descriptive statistics, correlation matrices,
//! histograms, and plain-text summary reports. Every operation is a thin
//! layer over a format reader crate or a single linear pass over the
//! loaded table.
//!
//! ## Module Overview
//!
//! - **table**: [`DaxTable`] and typed column structures
//! - **ingest**: format detection and file readers (CSV, JSON, XLSX)
//! - **inspect**: profiling, descriptive statistics, and correlation
//! - **plot**: histogram binning and PNG rendering
//! - **report**: plain-text summary report composition
//! - **errors**: the crate-wide error type
//!
//! ## Feature Flags
//!
//! - `xlsx`: spreadsheet ingestion (calamine backend)
//! - `plot`: histogram rendering (plotters bitmap backend)
//! - `full`: both of the above (default)
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//!
//! use dax::{DaxCorrelator, DaxProfiler, DaxReporter, DaxTableReader};
//!
//! let table = DaxTableReader::new().read_path(Path::new("data.csv"))?;
//!
//! let summary = DaxProfiler::new().profile(&table);
//! println!("shape: {:?}", summary.shape);
//!
//! let matrix = DaxCorrelator::new().compute(&table);
//! println!("numeric columns: {:?}", matrix.columns());
//!
//! println!("{}", DaxReporter::new().render(&table));
//! # Ok::<(), dax::errors::DaxError>(())
//! ```
//!
//! ## Architecture
//!
//! Control flow is caller-driven: load a table once, then pass a
//! reference into any subset of the analysis operations. There is no
//! shared mutable state; every operation is stateless and idempotent
//! given the same table.
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, DaxError>`. Underlying
//! reader and renderer errors are surfaced directly with no retry or
//! partial-result recovery.

pub mod errors;
pub mod ingest;
pub mod inspect;
pub mod plot;
pub mod report;
pub mod table;
pub mod version;

pub use errors::{DaxError, Result};
pub use table::{DaxColumn, DaxDataType, DaxTable};

pub use ingest::{DaxFileFormat, DaxReaderConfig, DaxTableReader};
pub use inspect::{
    DaxCorrelationMatrix, DaxCorrelator, DaxNumericSummary, DaxProfiler, DaxTableSummary,
};
pub use plot::{DaxHistogram, DaxHistogramBin};
#[cfg(feature = "plot")]
pub use plot::DaxHistogramPlotter;
pub use report::DaxReporter;
