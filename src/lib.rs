//! rangedb - copy a spreadsheet range into a single-table embedded database
//!
//! The pipeline reads a cell range from the first worksheet of a workbook,
//! appends the text of each row's neighboring cells, sorts the rows by a
//! text sort expression and writes them to table `Data` of a new database
//! file, all columns `TEXT`.
//!
//! # Example
//!
//! ```no_run
//! use rangedb::config::RunConfig;
//! use rangedb::pipeline;
//!
//! let config = RunConfig::new("sales.xlsx", "A1:C3", "out", "sales", "A DESC");
//! let summary = pipeline::run(&config)?;
//!
//! println!("Rows: {}", summary.rows_written);
//! println!("Database: {}", summary.database_path.display());
//! # Ok::<(), rangedb::error::RangeDbError>(())
//! ```

pub mod cli;
pub mod config;
pub mod enrich;
pub mod error;
pub mod excel;
pub mod pipeline;
pub mod range;
pub mod sink;
pub mod sort;
pub mod types;

// Re-export commonly used types
pub use config::RunConfig;
pub use error::{ErrorKind, RangeDbError, RangeDbResult};
pub use types::{Buffer, Neighbors, Row};
