//! Rate-sheet (CSV) import module.
//!
//! Parses the fixed-column spreadsheets outlets and resellers circulate,
//! coercing loosely-typed cells into publication drafts. Import is row-by-row:
//! one bad row is recorded and counted, the rest of the sheet proceeds.

mod csv;

pub use csv::{parse_flag, parse_score, parse_sheet, SheetParse, SheetRow, SHEET_COLUMNS};

use serde::{Deserialize, Serialize};

/// Outcome of a sheet import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ImportReport {
    /// Data rows seen (header excluded).
    pub total: usize,
    /// Rows upserted into the catalog.
    pub imported: usize,
    /// Rows skipped for a blank publication name.
    pub skipped: usize,
    /// Rows that failed to parse or to upsert.
    pub errors: Vec<RowError>,
}

impl ImportReport {
    /// True when every row either imported or was deliberately skipped.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// A single failed row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowError {
    /// 1-based data row number (header excluded).
    pub row: usize,
    /// Publication name, when the row got far enough to have one.
    pub name: Option<String>,
    pub message: String,
}
