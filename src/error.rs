use std::path::PathBuf;
use thiserror::Error;

pub type RangeDbResult<T> = Result<T, RangeDbError>;

#[derive(Error, Debug)]
pub enum RangeDbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open workbook '{}': {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Run file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Worksheet {index} not found (workbook has {available} sheet(s))")]
    SheetIndex { index: usize, available: usize },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Database file already exists: {}", .0.display())]
    DatabaseExists(PathBuf),

    #[error("Output directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Statement failed: {source}\n   SQL: {statement}")]
    Statement {
        statement: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Coarse classification of a failure, independent of the library that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed range, sort expression or run file
    InputParse,
    /// Filesystem, console or workbook access
    Io,
    /// Requested worksheet does not exist
    Index,
    /// Referenced column does not exist
    Schema,
    /// Statement rejected by the database
    Statement,
}

impl RangeDbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RangeDbError::Io(_)
            | RangeDbError::Workbook { .. }
            | RangeDbError::DatabaseExists(_)
            | RangeDbError::DirectoryNotFound(_) => ErrorKind::Io,
            RangeDbError::Yaml(_) | RangeDbError::Json(_) | RangeDbError::Parse(_) => {
                ErrorKind::InputParse
            }
            RangeDbError::SheetIndex { .. } => ErrorKind::Index,
            RangeDbError::Schema(_) => ErrorKind::Schema,
            RangeDbError::Statement { .. } | RangeDbError::Database(_) => ErrorKind::Statement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            RangeDbError::Parse("bad range".to_string()).kind(),
            ErrorKind::InputParse
        );
        assert_eq!(
            RangeDbError::DatabaseExists(PathBuf::from("out.accdb")).kind(),
            ErrorKind::Io
        );
        assert_eq!(
            RangeDbError::SheetIndex {
                index: 2,
                available: 1
            }
            .kind(),
            ErrorKind::Index
        );
        assert_eq!(
            RangeDbError::Schema("no column".to_string()).kind(),
            ErrorKind::Schema
        );
    }

    #[test]
    fn test_statement_error_shows_sql() {
        let err = RangeDbError::Statement {
            statement: "INSERT INTO Data ([A]) VALUES ('O'Brien')".to_string(),
            source: rusqlite::Error::InvalidQuery,
        };
        assert_eq!(err.kind(), ErrorKind::Statement);
        assert!(err.to_string().contains("O'Brien"));
    }
}
