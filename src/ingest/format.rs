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

use std::path::Path;

use crate::errors::{DaxError, Result};

/// File formats recognized by the loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaxFileFormat {
    Csv,
    Json,
    Xlsx,
}

impl DaxFileFormat {
    /// Determines the format from the path's extension (case-insensitive).
    ///
    /// Any extension outside csv/json/xlsx fails with
    /// [`DaxError::UnsupportedFormat`].
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "csv" => Ok(DaxFileFormat::Csv),
            "json" => Ok(DaxFileFormat::Json),
            "xlsx" => Ok(DaxFileFormat::Xlsx),
            _ => Err(DaxError::unsupported_format(path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DaxFileFormat::Csv => "csv",
            DaxFileFormat::Json => "json",
            DaxFileFormat::Xlsx => "xlsx",
        }
    }
}

impl std::fmt::Display for DaxFileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
