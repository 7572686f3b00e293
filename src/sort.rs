//! Sort expressions over a Buffer
//!
//! Grammar: `key[, key...]` where `key` is a column name, optionally written
//! as `[Column Name]`, optionally followed by `ASC` or `DESC`. An empty
//! expression keeps the input order.

use crate::error::{RangeDbError, RangeDbResult};
use crate::types::{Buffer, Row};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub descending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub keys: Vec<SortKey>,
}

fn bare_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^(.+?)(?:\s+(asc|desc))?$").expect("hardcoded regex"))
}

impl SortSpec {
    pub fn parse(text: &str) -> RangeDbResult<Self> {
        let keys = split_keys(text)?
            .into_iter()
            .map(|key| parse_key(&key))
            .collect::<RangeDbResult<Vec<_>>>()?;
        Ok(Self { keys })
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Return a new buffer with the same columns and rows reordered.
    ///
    /// Fails without producing output if any key names a missing column.
    pub fn apply(&self, buffer: &Buffer) -> RangeDbResult<Buffer> {
        let resolved: Vec<(usize, bool)> = self
            .keys
            .iter()
            .map(|key| {
                buffer
                    .column_index(&key.column)
                    .map(|index| (index, key.descending))
                    .ok_or_else(|| {
                        RangeDbError::Schema(format!(
                            "Cannot find column '{}' (available: {})",
                            key.column,
                            buffer.columns().join(", ")
                        ))
                    })
            })
            .collect::<RangeDbResult<_>>()?;

        let mut rows: Vec<Row> = buffer.rows().to_vec();
        rows.sort_by(|a, b| {
            resolved
                .iter()
                .map(|&(index, descending)| {
                    let ordering = compare_text(&a.values[index], &b.values[index]);
                    if descending {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                })
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        info!("Sorted {} rows by {:?}", rows.len(), self.keys);
        Ok(buffer.with_rows(rows))
    }
}

/// Case-insensitive text order, ordinal on case-only ties
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Split on commas outside of brackets
fn split_keys(text: &str) -> RangeDbResult<Vec<String>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut keys = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;
    for ch in text.chars() {
        match ch {
            '[' if !in_bracket => in_bracket = true,
            ']' if in_bracket => in_bracket = false,
            ',' if !in_bracket => {
                keys.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    if in_bracket {
        return Err(RangeDbError::Parse(format!(
            "Unterminated '[' in sort expression '{}'",
            text
        )));
    }
    keys.push(current);
    Ok(keys)
}

fn parse_key(key: &str) -> RangeDbResult<SortKey> {
    let key = key.trim();
    if key.is_empty() {
        return Err(RangeDbError::Parse("Empty key in sort expression".to_string()));
    }

    if let Some(rest) = key.strip_prefix('[') {
        let (column, tail) = rest
            .split_once(']')
            .ok_or_else(|| RangeDbError::Parse(format!("Unterminated '[' in '{}'", key)))?;
        let descending = parse_direction(tail.trim()).ok_or_else(|| {
            RangeDbError::Parse(format!("Invalid sort direction '{}'", tail.trim()))
        })?;
        return Ok(SortKey {
            column: column.to_string(),
            descending,
        });
    }

    let captures = bare_key_pattern()
        .captures(key)
        .ok_or_else(|| RangeDbError::Parse(format!("Invalid sort key '{}'", key)))?;
    Ok(SortKey {
        column: captures[1].trim().to_string(),
        descending: captures
            .get(2)
            .is_some_and(|direction| direction.as_str().eq_ignore_ascii_case("desc")),
    })
}

fn parse_direction(word: &str) -> Option<bool> {
    match word.to_ascii_uppercase().as_str() {
        "" | "ASC" => Some(false),
        "DESC" => Some(true),
        _ => None,
    }
}
