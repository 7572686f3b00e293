//! DDL/DML text for the `Data` table

use crate::error::{RangeDbError, RangeDbResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const TABLE_NAME: &str = "Data";

/// How row values reach the INSERT statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertMode {
    /// `?N` placeholders with bound parameters
    #[default]
    Bound,
    /// Values pasted between single quotes, unescaped. An embedded `'`
    /// breaks the statement.
    Inline,
}

/// A statement plus the parameters bound to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStatement {
    pub sql: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl fmt::Display for PlannedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.sql)
        } else {
            write!(f, "{}  -- {:?}", self.sql, self.params)
        }
    }
}

/// Bracket-quote a column name. The name is not validated.
pub fn quote_identifier(name: &str) -> String {
    format!("[{}]", name)
}

/// Reject repeated column names (identifiers compare ASCII case-insensitively).
///
/// Anything else, empty names included, goes to the database verbatim.
pub fn check_columns(columns: &[String]) -> RangeDbResult<()> {
    let mut seen = HashSet::new();
    for name in columns {
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(RangeDbError::Schema(format!("Duplicate column name '{}'", name)));
        }
    }
    Ok(())
}

fn column_list(columns: &[String]) -> String {
    columns
        .iter()
        .map(|name| quote_identifier(name))
        .collect::<Vec<_>>()
        .join(",")
}

/// `CREATE TABLE Data ([A] TEXT,[B] TEXT)`
pub fn create_table_sql(columns: &[String]) -> String {
    let definitions = columns
        .iter()
        .map(|name| format!("{} TEXT", quote_identifier(name)))
        .collect::<Vec<_>>()
        .join(",");
    format!("CREATE TABLE {} ({})", TABLE_NAME, definitions)
}

/// `INSERT INTO Data ([A],[B]) VALUES (?1,?2)`
pub fn insert_sql_bound(columns: &[String]) -> String {
    let placeholders = (1..=columns.len())
        .map(|n| format!("?{}", n))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        TABLE_NAME,
        column_list(columns),
        placeholders
    )
}

/// `INSERT INTO Data ([A],[B]) VALUES ('1','2')` with values pasted verbatim
pub fn insert_sql_inline(columns: &[String], values: &[String]) -> String {
    let literals = values
        .iter()
        .map(|value| format!("'{}'", value))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        TABLE_NAME,
        column_list(columns),
        literals
    )
}

/// The INSERT for one row under `mode`
pub fn insert_statement(mode: InsertMode, columns: &[String], values: &[String]) -> PlannedStatement {
    match mode {
        InsertMode::Bound => PlannedStatement {
            sql: insert_sql_bound(columns),
            params: values.to_vec(),
        },
        InsertMode::Inline => PlannedStatement {
            sql: insert_sql_inline(columns, values),
            params: Vec::new(),
        },
    }
}
