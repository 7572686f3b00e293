//! Database sink - one embedded database file holding table `Data`
//!
//! The file is created fresh (never overwritten), the table is created with
//! one TEXT column per buffer column, and rows are inserted one statement at
//! a time with no enclosing transaction.

mod sql;

pub use sql::{
    check_columns, create_table_sql, insert_sql_bound, insert_sql_inline, insert_statement,
    quote_identifier, InsertMode, PlannedStatement, TABLE_NAME,
};

use crate::error::{RangeDbError, RangeDbResult};
use crate::types::Buffer;
use rusqlite::{params_from_iter, Connection, OpenFlags};
use std::fs::OpenOptions;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_EXTENSION: &str = "accdb";

/// `{directory}/{name}.{extension}`
pub fn database_path(directory: &Path, name: &str, extension: &str) -> PathBuf {
    directory.join(format!("{}.{}", name, extension))
}

/// Every statement the sink would run for `buffer`, in order.
///
/// Fails with a schema error if a column name is repeated.
pub fn plan_statements(
    buffer: &Buffer,
    mode: InsertMode,
) -> RangeDbResult<Vec<PlannedStatement>> {
    let columns = buffer.columns();
    check_columns(columns)?;
    Ok(std::iter::once(PlannedStatement {
        sql: create_table_sql(columns),
        params: Vec::new(),
    })
    .chain(
        buffer
            .rows()
            .iter()
            .map(|row| insert_statement(mode, columns, &row.values)),
    )
    .collect())
}

pub struct DatabaseSink {
    path: PathBuf,
    conn: Connection,
}

impl DatabaseSink {
    /// Create a new, empty database file at `path` and connect to it.
    ///
    /// Fails if the file already exists or its directory is missing.
    pub fn create(path: &Path) -> RangeDbResult<Self> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                IoErrorKind::AlreadyExists => RangeDbError::DatabaseExists(path.to_path_buf()),
                IoErrorKind::NotFound => RangeDbError::DirectoryNotFound(
                    path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
                ),
                _ => RangeDbError::Io(e),
            })?;

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE;
        let conn = Connection::open_with_flags(path, flags)?;
        info!("Created database {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a plan from `plan_statements`: the CREATE TABLE, then one INSERT
    /// per row. Returns the number of rows written.
    ///
    /// A failing insert stops the export; rows already inserted stay.
    pub fn write(&self, statements: &[PlannedStatement]) -> RangeDbResult<usize> {
        let mut written: usize = 0;
        for statement in statements {
            self.execute(statement)?;
            written += 1;
        }
        // first statement is the CREATE TABLE
        let rows = written.saturating_sub(1);
        info!("Inserted {} rows into {}", rows, TABLE_NAME);
        Ok(rows)
    }

    fn execute(&self, statement: &PlannedStatement) -> RangeDbResult<usize> {
        debug!("{}", statement);
        self.conn
            .execute(&statement.sql, params_from_iter(statement.params.iter()))
            .map_err(|source| RangeDbError::Statement {
                statement: statement.sql.clone(),
                source,
            })
    }
}
