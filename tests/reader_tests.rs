//! Range reader tests against real .xlsx files

mod common;

use pretty_assertions::assert_eq;
use rangedb::error::{ErrorKind, RangeDbError};
use rangedb::excel::{CellSource, RangeReader, SourceWorkbook};
use rangedb::range::CellRange;
use tempfile::TempDir;

#[test]
fn test_open_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = SourceWorkbook::open(temp_dir.path().join("missing.xlsx"), 1)
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_open_unrecognized_format_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    std::fs::write(&path, "not a workbook").unwrap();
    let err = SourceWorkbook::open(&path, 1).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_sheet_beyond_workbook_is_index_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = common::abc_workbook(&temp_dir);

    let err = SourceWorkbook::open(&path, 2).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Index);
    assert!(matches!(
        err,
        RangeDbError::SheetIndex {
            index: 2,
            available: 1
        }
    ));

    let err = SourceWorkbook::open(&path, 0).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Index);
}

#[test]
fn test_reads_abc_range() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = SourceWorkbook::open(common::abc_workbook(&temp_dir), 1).unwrap();
    assert_eq!(workbook.sheet_name(), "Sheet1");

    let buffer = RangeReader::new(&workbook, CellRange::parse("A1:C3").unwrap()).read();
    assert_eq!(buffer.columns(), ["A", "B", "C"]);
    assert_eq!(buffer.rows()[0].values, vec!["1", "2", "3"]);
    assert_eq!(buffer.rows()[1].values, vec!["4", "5", "6"]);
}

#[test]
fn test_shape_follows_range_dimensions() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = SourceWorkbook::open(common::labelled_workbook(&temp_dir), 1).unwrap();

    for text in ["A1:D4", "B2:C4", "D4", "A1:A4", "C1:F9"] {
        let range = CellRange::parse(text).unwrap();
        let buffer = RangeReader::new(&workbook, range).read();
        assert_eq!(buffer.column_count(), range.width() as usize, "{}", text);
        assert_eq!(buffer.row_count(), range.height() as usize - 1, "{}", text);
    }
}

#[test]
fn test_offset_range_keeps_relative_order() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = SourceWorkbook::open(common::labelled_workbook(&temp_dir), 1).unwrap();

    let buffer = RangeReader::new(&workbook, CellRange::parse("B2:C4").unwrap()).read();
    assert_eq!(buffer.columns(), ["r2c2", "r2c3"]);
    assert_eq!(buffer.rows()[0].values, vec!["r3c2", "r3c3"]);
    assert_eq!(buffer.rows()[1].values, vec!["r4c2", "r4c3"]);
}

#[test]
fn test_cells_outside_used_area_read_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let workbook = SourceWorkbook::open(common::abc_workbook(&temp_dir), 1).unwrap();

    assert_eq!(workbook.value(1, 4), None);
    assert_eq!(workbook.value(4, 1), None);
    assert_eq!(workbook.text(100, 100), "");

    let buffer = RangeReader::new(&workbook, CellRange::parse("B2:D4").unwrap()).read();
    assert_eq!(buffer.columns(), ["2", "3", ""]);
    assert_eq!(buffer.rows()[0].values, vec!["5", "6", ""]);
    assert_eq!(buffer.rows()[1].values, vec!["", "", ""]);
}

#[test]
fn test_selects_requested_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("two.xlsx");
    common::write_sheets(
        &path,
        &[&[&["first"], &["1"]], &[&["second"], &["2"]]],
    );

    let workbook = SourceWorkbook::open(&path, 2).unwrap();
    let buffer = RangeReader::new(&workbook, CellRange::parse("A1:A2").unwrap()).read();
    assert_eq!(buffer.columns(), ["second"]);
    assert_eq!(buffer.rows()[0].values, vec!["2"]);
}
