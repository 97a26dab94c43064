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

//! # Dax Error Module
//!
//! This module defines the error types and utilities used throughout Dax
//! for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! - **Explicit Error Types**: Each variant represents a specific category
//!   of failure, making it easier to handle errors appropriately
//! - **Context-Rich**: Errors carry the path, column name, or message needed
//!   to understand the failure without a debugger
//! - **No Recovery Policy**: Dax performs no retry or partial-result
//!   recovery; underlying reader and renderer errors are converted into a
//!   `DaxError` variant and surfaced directly to the caller
//! - **Serde Support**: Errors can be serialized/deserialized for logging
//!   and persistence
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors
//! - **UnsupportedFormat**: file extension outside the recognized set
//! - **Parse**: failures raised by the format-specific readers
//! - **ColumnNotFound** / **NonNumericColumn**: column addressing failures
//! - **ShapeMismatch**: table construction invariant violations
//! - **Plot**: failures raised by the rendering backend

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Dax.
pub type Result<T> = std::result::Result<T, DaxError>;

/// Canonical error enumeration for Dax.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum DaxError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// File extension is not one of the recognized kinds (csv, json, xlsx).
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    /// Errors raised by a format-specific reader while parsing a file.
    #[error("parse error: {0}")]
    Parse(String),

    /// A named column is absent from the table.
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    /// A named column exists but does not hold numeric data.
    #[error("column '{name}' is not numeric")]
    NonNumericColumn { name: String },

    /// A column's length does not match the table's row count.
    #[error("column length {actual} does not match table row count {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Errors raised by the plotting backend while rendering.
    #[error("plot error: {0}")]
    Plot(String),
}

impl From<io::Error> for DaxError {
    fn from(err: io::Error) -> Self {
        DaxError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DaxError {
    fn from(err: serde_json::Error) -> Self {
        DaxError::Parse(err.to_string())
    }
}

impl From<csv::Error> for DaxError {
    fn from(err: csv::Error) -> Self {
        DaxError::Parse(err.to_string())
    }
}

#[cfg(feature = "xlsx")]
impl From<calamine::XlsxError> for DaxError {
    fn from(err: calamine::XlsxError) -> Self {
        DaxError::Parse(err.to_string())
    }
}

impl DaxError {
    /// Helper to construct an unsupported-format error from a path.
    pub fn unsupported_format(path: impl Into<String>) -> Self {
        DaxError::UnsupportedFormat { path: path.into() }
    }

    /// Helper to construct a column-not-found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        DaxError::ColumnNotFound { name: name.into() }
    }

    /// Helper to construct a non-numeric-column error.
    pub fn non_numeric(name: impl Into<String>) -> Self {
        DaxError::NonNumericColumn { name: name.into() }
    }

    /// Helper to construct parse errors.
    pub fn parse(message: impl Into<String>) -> Self {
        DaxError::Parse(message.into())
    }

    /// Helper to construct plot errors.
    pub fn plot(message: impl Into<String>) -> Self {
        DaxError::Plot(message.into())
    }
}
