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

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::errors::{DaxError, Result};
use crate::ingest::format::DaxFileFormat;
use crate::table::{DaxColumn, DaxTable};

/// Cell values that count as missing during CSV and XLSX parsing.
const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "na", "n/a", "null", "NULL", "None", "none", "NaN", "nan",
];

/// Reader configuration.
///
/// Defaults match the common case: comma delimiter, header row, standard
/// null markers.
#[derive(Clone, Debug)]
pub struct DaxReaderConfig {
    /// CSV field delimiter.
    pub delimiter: u8,
    /// Cell values treated as missing (exact match, CSV and XLSX strings).
    pub null_markers: Vec<String>,
}

impl Default for DaxReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Scalar cell value before column types are inferred.
#[derive(Clone, Debug)]
enum RawCell {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// File reader dispatching on [`DaxFileFormat`].
///
/// One reader instance can load any number of files; it holds only
/// configuration. A malformed file surfaces the underlying parser's error
/// converted into [`DaxError::Parse`], with no retry or partial result.
#[derive(Clone, Debug, Default)]
pub struct DaxTableReader {
    config: DaxReaderConfig,
}

impl DaxTableReader {
    pub fn new() -> Self {
        Self {
            config: DaxReaderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DaxReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the file at `path` into a [`DaxTable`], dispatching on the
    /// file extension.
    pub fn read_path(&self, path: &Path) -> Result<DaxTable> {
        let format = DaxFileFormat::detect(path)?;

        let table = match format {
            DaxFileFormat::Csv => self.read_csv(path),
            DaxFileFormat::Json => self.read_json(path),
            DaxFileFormat::Xlsx => self.read_xlsx(path),
        }?;

        log::debug!(
            "loaded {} ({}): {} rows, {} columns",
            path.display(),
            format,
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    fn read_csv(&self, path: &Path) -> Result<DaxTable> {
        let file = File::open(path)?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .from_reader(BufReader::new(file));

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut raw_columns: Vec<Vec<Option<RawCell>>> = vec![Vec::new(); headers.len()];
        for record in csv_reader.records() {
            let record = record?;
            for (i, field) in record.iter().enumerate() {
                if i < headers.len() {
                    raw_columns[i].push(self.parse_text_cell(field));
                }
            }
        }

        build_table(headers, raw_columns)
    }

    fn read_json(&self, path: &Path) -> Result<DaxTable> {
        let file = File::open(path)?;
        let value: Value = serde_json::from_reader(BufReader::new(file))?;

        match value {
            Value::Array(rows) => Self::json_rows_to_table(rows),
            Value::Object(map) => {
                // Column-oriented: every value must be an array of cells.
                let mut headers = Vec::with_capacity(map.len());
                let mut raw_columns = Vec::with_capacity(map.len());
                for (name, cells) in map {
                    let cells = cells.as_array().ok_or_else(|| {
                        DaxError::parse(format!(
                            "JSON object value for '{name}' must be an array"
                        ))
                    })?;
                    headers.push(name);
                    raw_columns.push(cells.iter().map(json_to_cell).collect());
                }
                build_table(headers, raw_columns)
            }
            _ => Err(DaxError::parse(
                "JSON must be an array of objects or an object of arrays",
            )),
        }
    }

    fn json_rows_to_table(rows: Vec<Value>) -> Result<DaxTable> {
        // Column order is first appearance across rows.
        let mut headers: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for row in &rows {
            let obj = row
                .as_object()
                .ok_or_else(|| DaxError::parse("JSON array elements must be objects"))?;
            for key in obj.keys() {
                if seen.insert(key.clone()) {
                    headers.push(key.clone());
                }
            }
        }

        let mut raw_columns: Vec<Vec<Option<RawCell>>> =
            vec![Vec::with_capacity(rows.len()); headers.len()];
        for row in &rows {
            let obj = row.as_object().expect("validated above");
            for (i, name) in headers.iter().enumerate() {
                raw_columns[i].push(obj.get(name).and_then(json_to_cell));
            }
        }

        build_table(headers, raw_columns)
    }

    #[cfg(feature = "xlsx")]
    fn read_xlsx(&self, path: &Path) -> Result<DaxTable> {
        use calamine::{open_workbook, Data, Reader, Xlsx};

        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DaxError::parse("workbook contains no sheets"))??;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row
                .iter()
                .enumerate()
                .map(|(i, cell)| match cell {
                    Data::Empty => format!("col_{i}"),
                    other => other.to_string(),
                })
                .collect(),
            None => return Ok(DaxTable::new()),
        };

        let mut raw_columns: Vec<Vec<Option<RawCell>>> = vec![Vec::new(); headers.len()];
        for row in rows {
            for (i, raw_column) in raw_columns.iter_mut().enumerate() {
                raw_column.push(row.get(i).and_then(|cell| self.sheet_cell(cell)));
            }
        }

        build_table(headers, raw_columns)
    }

    #[cfg(not(feature = "xlsx"))]
    fn read_xlsx(&self, _path: &Path) -> Result<DaxTable> {
        Err(DaxError::parse("xlsx reading requires the 'xlsx' feature"))
    }

    #[cfg(feature = "xlsx")]
    fn sheet_cell(&self, cell: &calamine::Data) -> Option<RawCell> {
        use calamine::Data;

        match cell {
            Data::Empty => None,
            Data::String(s) => {
                if self.is_null_marker(s) {
                    None
                } else {
                    Some(RawCell::Text(s.clone()))
                }
            }
            // Spreadsheets store most numbers as floats; keep whole values
            // integral so all-whole columns infer as Int64.
            Data::Float(f) => Some(float_cell(*f)),
            Data::Int(i) => Some(RawCell::Int(*i)),
            Data::Bool(b) => Some(RawCell::Bool(*b)),
            Data::DateTime(dt) => Some(float_cell(dt.as_f64())),
            Data::Error(e) => {
                log::warn!("treating spreadsheet error cell {e:?} as missing");
                None
            }
            other => Some(RawCell::Text(other.to_string())),
        }
    }

    /// Classifies one CSV field. Null markers win over type parsing, so
    /// `NaN` counts as missing rather than a float cell.
    fn parse_text_cell(&self, field: &str) -> Option<RawCell> {
        if self.is_null_marker(field) {
            return None;
        }
        if let Ok(i) = field.parse::<i64>() {
            return Some(RawCell::Int(i));
        }
        if let Ok(f) = field.parse::<f64>() {
            return Some(RawCell::Float(f));
        }
        match field {
            "true" | "True" | "TRUE" => Some(RawCell::Bool(true)),
            "false" | "False" | "FALSE" => Some(RawCell::Bool(false)),
            _ => Some(RawCell::Text(field.to_string())),
        }
    }

    fn is_null_marker(&self, field: &str) -> bool {
        self.config.null_markers.iter().any(|m| m == field)
    }
}

#[cfg(feature = "xlsx")]
fn float_cell(f: f64) -> RawCell {
    const WHOLE_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    if f.fract() == 0.0 && f.abs() < WHOLE_LIMIT {
        RawCell::Int(f as i64)
    } else {
        RawCell::Float(f)
    }
}

fn json_to_cell(value: &Value) -> Option<RawCell> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(RawCell::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(RawCell::Int(i))
            } else {
                n.as_f64().map(RawCell::Float)
            }
        }
        Value::String(s) => Some(RawCell::Text(s.clone())),
        // Nested structures are kept as their JSON text.
        other => Some(RawCell::Text(other.to_string())),
    }
}

fn build_table(headers: Vec<String>, raw_columns: Vec<Vec<Option<RawCell>>>) -> Result<DaxTable> {
    let mut table = DaxTable::new();
    for (name, cells) in headers.into_iter().zip(raw_columns) {
        table.add_column(name, build_column(cells))?;
    }
    Ok(table)
}

/// Infers the narrowest column type holding every non-missing cell.
///
/// Priority: Int64 (ints only) → Float64 (ints and floats) → Bool (bools
/// only) → Utf8 (anything mixed or textual). An all-missing column is Utf8.
fn build_column(cells: Vec<Option<RawCell>>) -> DaxColumn {
    let mut has_int = false;
    let mut has_float = false;
    let mut has_bool = false;
    let mut has_text = false;

    for cell in cells.iter().flatten() {
        match cell {
            RawCell::Int(_) => has_int = true,
            RawCell::Float(_) => has_float = true,
            RawCell::Bool(_) => has_bool = true,
            RawCell::Text(_) => has_text = true,
        }
    }

    let numeric = has_int || has_float;
    if has_text || (has_bool && numeric) {
        return DaxColumn::Utf8(
            cells
                .into_iter()
                .map(|c| c.map(cell_to_string))
                .collect(),
        );
    }
    if has_bool {
        return DaxColumn::Bool(
            cells
                .into_iter()
                .map(|c| match c {
                    Some(RawCell::Bool(b)) => Some(b),
                    _ => None,
                })
                .collect(),
        );
    }
    if has_float {
        return DaxColumn::Float64(
            cells
                .into_iter()
                .map(|c| match c {
                    Some(RawCell::Int(i)) => Some(i as f64),
                    Some(RawCell::Float(f)) => Some(f),
                    _ => None,
                })
                .collect(),
        );
    }
    if has_int {
        return DaxColumn::Int64(
            cells
                .into_iter()
                .map(|c| match c {
                    Some(RawCell::Int(i)) => Some(i),
                    _ => None,
                })
                .collect(),
        );
    }

    DaxColumn::Utf8(vec![None; cells.len()])
}

fn cell_to_string(cell: RawCell) -> String {
    match cell {
        RawCell::Int(i) => i.to_string(),
        RawCell::Float(f) => f.to_string(),
        RawCell::Bool(b) => b.to_string(),
        RawCell::Text(s) => s,
    }
}
