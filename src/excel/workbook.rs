//! Source workbook handle - one open worksheet shared by the reader and enricher

use crate::error::{RangeDbError, RangeDbResult};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::NaiveTime;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read access to worksheet cells by 1-indexed (row, column).
///
/// Row or column 0 is treated as outside the sheet.
pub trait CellSource {
    /// Display text of the cell, "" when empty or outside the sheet
    fn text(&self, row: u32, col: u32) -> String {
        self.value(row, col).unwrap_or_default()
    }

    /// Cell contents as a string, `None` when empty or outside the sheet
    fn value(&self, row: u32, col: u32) -> Option<String>;
}

impl CellSource for Range<Data> {
    fn value(&self, row: u32, col: u32) -> Option<String> {
        if row == 0 || col == 0 {
            return None;
        }
        match self.get_value((row - 1, col - 1))? {
            Data::Empty => None,
            cell => Some(display_text(cell)),
        }
    }
}

/// The first (or selected) worksheet of a workbook, loaded once
pub struct SourceWorkbook {
    path: PathBuf,
    sheet_name: String,
    cells: Range<Data>,
}

impl SourceWorkbook {
    /// Open `path` and load worksheet number `sheet` (1-indexed)
    pub fn open<P: AsRef<Path>>(path: P, sheet: usize) -> RangeDbResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut workbook = open_workbook_auto(&path).map_err(|source| RangeDbError::Workbook {
            path: path.clone(),
            source,
        })?;

        let sheet_names = workbook.sheet_names();
        let available = sheet_names.len();
        let sheet_name = sheet
            .checked_sub(1)
            .and_then(|index| sheet_names.get(index).cloned())
            .ok_or(RangeDbError::SheetIndex {
                index: sheet,
                available,
            })?;

        let cells = workbook
            .worksheet_range(&sheet_name)
            .map_err(|source| RangeDbError::Workbook {
                path: path.clone(),
                source,
            })?;

        info!(
            "Opened '{}' sheet '{}' ({} of {})",
            path.display(),
            sheet_name,
            sheet,
            available
        );
        debug!("Used area starts at {:?}, ends at {:?}", cells.start(), cells.end());

        Ok(Self {
            path,
            sheet_name,
            cells,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl CellSource for SourceWorkbook {
    fn value(&self, row: u32, col: u32) -> Option<String> {
        self.cells.value(row, col)
    }
}

/// Render a cell the way a spreadsheet shows it
pub fn display_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::DateTime(dt) => format_excel_datetime(dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// Date-times as ISO text (whole days drop the time part), durations as `[h]:mm:ss`
fn format_excel_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(duration) => {
                let seconds = duration.num_seconds();
                let sign = if seconds < 0 { "-" } else { "" };
                let seconds = seconds.abs();
                format!(
                    "{}{}:{:02}:{:02}",
                    sign,
                    seconds / 3600,
                    seconds % 3600 / 60,
                    seconds % 60
                )
            }
            None => format_float(dt.as_f64()),
        };
    }

    match dt.as_datetime() {
        Some(datetime) if datetime.time() == NaiveTime::MIN => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_float(dt.as_f64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{CellErrorType, ExcelDateTimeType};

    fn date(serial: f64, is_1904: bool) -> Data {
        Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, is_1904))
    }

    fn grid() -> Range<Data> {
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("name".to_string()));
        range.set_value((0, 1), Data::Float(2.0));
        range.set_value((1, 0), Data::Bool(true));
        range
    }

    #[test]
    fn test_display_text_numbers() {
        assert_eq!(display_text(&Data::Float(1.0)), "1");
        assert_eq!(display_text(&Data::Float(-42.0)), "-42");
        assert_eq!(display_text(&Data::Float(2.5)), "2.5");
        assert_eq!(display_text(&Data::Float(0.1)), "0.1");
        assert_eq!(display_text(&Data::Int(7)), "7");
    }

    #[test]
    fn test_display_text_other_kinds() {
        assert_eq!(display_text(&Data::Bool(false)), "FALSE");
        assert_eq!(display_text(&Data::Empty), "");
        assert_eq!(display_text(&Data::Error(CellErrorType::Div0)), "#DIV/0!");
        assert_eq!(
            display_text(&Data::DateTimeIso("2024-01-31T10:00:00".to_string())),
            "2024-01-31T10:00:00"
        );
    }

    #[test]
    fn test_serial_dates() {
        assert_eq!(display_text(&date(45_292.0, false)), "2024-01-01");
        assert_eq!(display_text(&date(45_292.5, false)), "2024-01-01 12:00:00");
    }

    #[test]
    fn test_1904_date_system() {
        assert_eq!(display_text(&date(0.0, true)), "1904-01-01");
        assert_eq!(display_text(&date(43_830.0, true)), "2024-01-01");
    }

    #[test]
    fn test_durations() {
        let duration = |value| {
            Data::DateTime(ExcelDateTime::new(value, ExcelDateTimeType::TimeDelta, false))
        };
        assert_eq!(display_text(&duration(1.5)), "36:00:00");
        assert_eq!(display_text(&duration(0.25)), "6:00:00");
    }

    #[test]
    fn test_range_source_coordinates_are_one_indexed() {
        let cells = grid();
        assert_eq!(cells.value(1, 1), Some("name".to_string()));
        assert_eq!(cells.value(1, 2), Some("2".to_string()));
        assert_eq!(cells.value(2, 1), Some("TRUE".to_string()));
    }

    #[test]
    fn test_range_source_empty_and_off_sheet() {
        let cells = grid();
        assert_eq!(cells.value(2, 2), None);
        assert_eq!(cells.value(0, 1), None);
        assert_eq!(cells.value(1, 0), None);
        assert_eq!(cells.value(50, 50), None);
        assert_eq!(cells.text(50, 50), "");
    }
}
