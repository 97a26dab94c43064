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

//! # Data Inspection Module
//!
//! Read-only analysis passes over loaded tables: profiling (shape, types,
//! missing counts, descriptive statistics) and Pearson correlation.

pub mod correlation;
pub mod profile;
pub mod statistics;

pub use correlation::{DaxCorrelationMatrix, DaxCorrelator};
pub use profile::{DaxProfiler, DaxTableSummary};
pub use statistics::DaxNumericSummary;
