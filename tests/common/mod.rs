//! Shared fixtures: small workbooks written with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write one worksheet per entry starting at A1. Numeric text becomes a
/// number cell, "" leaves the cell blank, anything else is a string.
pub fn write_sheets(path: &Path, sheets: &[&[&[&str]]]) {
    let mut workbook = Workbook::new();
    for rows in sheets {
        let worksheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                match text.parse::<f64>() {
                    Ok(number) => worksheet.write_number(r as u32, c as u16, number).unwrap(),
                    Err(_) => worksheet.write_string(r as u32, c as u16, *text).unwrap(),
                };
            }
        }
    }
    workbook.save(path).unwrap();
}

pub fn write_sheet(path: &Path, rows: &[&[&str]]) {
    write_sheets(path, &[rows]);
}

/// Header A,B,C with rows (1,2,3) and (4,5,6) at A1:C3
pub fn abc_workbook(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("abc.xlsx");
    write_sheet(&path, &[&["A", "B", "C"], &["1", "2", "3"], &["4", "5", "6"]]);
    path
}

/// 4x4 grid of "r{row}c{col}" labels at A1:D4
pub fn labelled_workbook(dir: &TempDir) -> PathBuf {
    let labels: Vec<Vec<String>> = (1..=4)
        .map(|r| (1..=4).map(|c| format!("r{}c{}", r, c)).collect())
        .collect();
    let rows: Vec<Vec<&str>> = labels
        .iter()
        .map(|row| row.iter().map(String::as_str).collect())
        .collect();
    let rows: Vec<&[&str]> = rows.iter().map(Vec::as_slice).collect();

    let path = dir.path().join("labels.xlsx");
    write_sheet(&path, &rows);
    path
}

/// Column names of table Data, in order
pub fn table_columns(conn: &rusqlite::Connection) -> Vec<String> {
    let stmt = conn.prepare("SELECT * FROM Data").unwrap();
    let names = stmt.column_names().iter().map(|name| name.to_string()).collect();
    names
}

/// Declared types of table Data's columns
pub fn table_types(conn: &rusqlite::Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(Data)").unwrap();
    let types = stmt
        .query_map([], |row| row.get::<_, String>(2))
        .unwrap()
        .map(Result::unwrap)
        .collect();
    types
}

/// All rows of table Data as text, in rowid order
pub fn table_rows(conn: &rusqlite::Connection) -> Vec<Vec<String>> {
    let mut stmt = conn.prepare("SELECT * FROM Data ORDER BY rowid").unwrap();
    let width = stmt.column_count();
    let rows = stmt
        .query_map([], |row| {
            (0..width)
                .map(|i| row.get::<_, String>(i))
                .collect::<Result<Vec<_>, _>>()
        })
        .unwrap()
        .map(Result::unwrap)
        .collect();
    rows
}
