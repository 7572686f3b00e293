//! Orchestration: read → enrich → sort → sink

use crate::config::RunConfig;
use crate::enrich::NeighborEnricher;
use crate::error::RangeDbResult;
use crate::excel::{RangeReader, SourceWorkbook};
use crate::range::CellRange;
use crate::sink::{plan_statements, DatabaseSink, PlannedStatement};
use crate::sort::SortSpec;
use crate::types::Buffer;
use std::path::PathBuf;
use tracing::info;

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub database_path: PathBuf,
    /// Final (enriched, sorted) buffer
    pub buffer: Buffer,
    /// Statements executed, or that would be executed on a dry run
    pub statements: Vec<PlannedStatement>,
    /// Rows inserted; 0 on a dry run
    pub rows_written: usize,
}

/// Read, enrich and sort the configured range
pub fn build_buffer(config: &RunConfig) -> RangeDbResult<Buffer> {
    let range = CellRange::parse(&config.range)?;

    let buffer = {
        let workbook = SourceWorkbook::open(&config.file, config.sheet)?;
        let mut buffer = RangeReader::new(&workbook, range).read();
        NeighborEnricher::new(&workbook, range, config.neighbor_mode).enrich(&mut buffer);
        buffer
    };

    SortSpec::parse(&config.sort)?.apply(&buffer)
}

/// Run the whole pipeline. Nothing is written when `config.dry_run` is set.
pub fn run(config: &RunConfig) -> RangeDbResult<RunSummary> {
    let buffer = build_buffer(config)?;
    let database_path = config.database_path();
    let statements = plan_statements(&buffer, config.insert_mode)?;

    let rows_written = if config.dry_run {
        info!("Dry run: {} statements planned", statements.len());
        0
    } else {
        let sink = DatabaseSink::create(&database_path)?;
        sink.write(&statements)?
    };

    Ok(RunSummary {
        database_path,
        buffer,
        statements,
        rows_written,
    })
}
