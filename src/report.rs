//! File-level report of extracted functions.
//!
//! The JSON shape is the contract with downstream tools:
//!
//! ```json
//! {
//!   "file": "/abs/path/linalg.cpp",
//!   "num_functions": 2,
//!   "functions": [ { "name": "...", ... } ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{self, FunctionRecord};
use crate::error::{ExtractError, Result};
use crate::parser::SourceUnit;

/// Extraction results for one translation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Absolute path of the scanned file.
    pub file: String,
    /// Always `functions.len()`.
    pub num_functions: usize,
    pub functions: Vec<FunctionRecord>,
}

impl Report {
    /// Build a report; the count is derived from `functions`.
    pub fn new(file: impl Into<String>, functions: Vec<FunctionRecord>) -> Self {
        Self {
            file: file.into(),
            num_functions: functions.len(),
            functions,
        }
    }

    /// Extract every function in `unit` and report it under the unit's
    /// absolute path.
    pub fn from_unit(unit: &SourceUnit) -> Self {
        let functions = analysis::extract_unit(unit);
        Self::new(absolute_path(&unit.path), functions)
    }

    /// Render as pretty-printed JSON (2-space indent, UTF-8 left unescaped).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a report previously written by [`Report::write`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize fully in memory, then write the file in one go.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| ExtractError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), functions = self.num_functions, "wrote report");
        Ok(())
    }
}

/// Absolute form of `path` without resolving symlinks; falls back to the path
/// as given if the working directory is unavailable.
pub fn absolute_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}
