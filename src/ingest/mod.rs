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

//! # Data Ingestion Module
//!
//! Reads files into [`DaxTable`](crate::table::DaxTable)s, dispatching on
//! the file extension.
//!
//! ## Supported Input Formats
//!
//! - **CSV**: header row, configurable delimiter, per-column type inference
//! - **JSON**: array of row objects, or object of column arrays
//! - **XLSX**: first sheet of a workbook (cargo feature `xlsx`, on by default)
//!
//! Any other extension fails with
//! [`DaxError::UnsupportedFormat`](crate::errors::DaxError::UnsupportedFormat).
//!
//! ## Usage
//!
//! ```rust
//! use dax::ingest::DaxTableReader;
//!
//! let table = DaxTableReader::new().read_path(std::path::Path::new("data.csv"))?;
//! println!("{:?}", table.shape());
//! # Ok::<(), dax::errors::DaxError>(())
//! ```

pub mod format;
pub mod reader;

pub use format::DaxFileFormat;
pub use reader::{DaxReaderConfig, DaxTableReader};
