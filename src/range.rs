//! A1-style cell ranges

use crate::error::{RangeDbError, RangeDbResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Last addressable row in an .xlsx worksheet
pub const MAX_ROW: u32 = 1_048_576;
/// Last addressable column (XFD)
pub const MAX_COLUMN: u32 = 16_384;

/// Rectangular block of cells, 1-indexed and inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

fn cell_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\$?([A-Z]{1,3})\$?([0-9]+)(?::\$?([A-Z]{1,3})\$?([0-9]+))?$")
            .expect("hardcoded regex")
    })
}

impl CellRange {
    /// Build a range from two corners in any order
    pub fn new(row_a: u32, col_a: u32, row_b: u32, col_b: u32) -> Self {
        Self {
            start_row: row_a.min(row_b),
            start_col: col_a.min(col_b),
            end_row: row_a.max(row_b),
            end_col: col_a.max(col_b),
        }
    }

    /// Parse `A1:D10`, `$A$1:$D$10` or a single cell such as `B2`
    pub fn parse(text: &str) -> RangeDbResult<Self> {
        let normalized = text.trim().to_ascii_uppercase();
        let captures = cell_pattern()
            .captures(&normalized)
            .ok_or_else(|| RangeDbError::Parse(format!("Invalid range '{}'", text.trim())))?;

        let start_col = column_to_number(&captures[1])?;
        let start_row = parse_row(&captures[2])?;
        let (end_col, end_row) = match (captures.get(3), captures.get(4)) {
            (Some(col), Some(row)) => (column_to_number(col.as_str())?, parse_row(row.as_str())?),
            _ => (start_col, start_row),
        };

        Ok(Self::new(start_row, start_col, end_row, end_col))
    }

    /// Number of rows, header included
    pub fn height(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    /// Number of columns
    pub fn width(&self) -> u32 {
        self.end_col - self.start_col + 1
    }
}

impl FromStr for CellRange {
    type Err = RangeDbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}{}",
            number_to_column(self.start_col),
            self.start_row,
            number_to_column(self.end_col),
            self.end_row
        )
    }
}

fn parse_row(digits: &str) -> RangeDbResult<u32> {
    match digits.parse::<u32>() {
        Ok(row) if (1..=MAX_ROW).contains(&row) => Ok(row),
        _ => Err(RangeDbError::Parse(format!("Row '{}' out of range", digits))),
    }
}

/// Convert column letters to a 1-based number (A→1, Z→26, AA→27)
pub fn column_to_number(letters: &str) -> RangeDbResult<u32> {
    let mut number: u32 = 0;
    for ch in letters.chars() {
        if !ch.is_ascii_uppercase() {
            return Err(RangeDbError::Parse(format!("Invalid column '{}'", letters)));
        }
        number = number * 26 + (ch as u32 - 'A' as u32 + 1);
    }
    if number == 0 || number > MAX_COLUMN {
        return Err(RangeDbError::Parse(format!("Column '{}' out of range", letters)));
    }
    Ok(number)
}

/// Convert a 1-based column number to letters (1→A, 26→Z, 27→AA)
pub fn number_to_column(n: u32) -> String {
    let mut result = String::new();
    let mut num = n;

    while num > 0 {
        let remainder = (num - 1) % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        num = (num - 1) / 26;
    }

    result
}
