//! Neighbor enrichment - appends LeftCell/RightCell/TopCell/BottomCell
//!
//! Two coordinate modes:
//!
//! - `Sheet` resolves each buffer cell to its real worksheet position and keeps
//!   the neighbors of every cell on the row (`Row::neighbors`). The four fixed
//!   columns describe the row's last source cell.
//! - `Legacy` uses `buffer index + 1` as the sheet coordinates
//!   regardless of where the range starts, and the fixed columns are rewritten
//!   for every column so only the last column's neighbors survive.

use crate::excel::CellSource;
use crate::range::CellRange;
use crate::types::{Buffer, Neighbors, NEIGHBOR_COLUMNS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborMode {
    #[default]
    Sheet,
    Legacy,
}

/// Read the four neighbors of the cell at (row, col), 1-indexed
pub fn neighbors_of<S: CellSource>(source: &S, row: u32, col: u32) -> Neighbors {
    let read = |r: Option<u32>, c: Option<u32>| match (r, c) {
        (Some(r), Some(c)) => source.value(r, c).unwrap_or_default(),
        _ => String::new(),
    };
    Neighbors {
        left: read(Some(row), col.checked_sub(1)),
        right: read(Some(row), col.checked_add(1)),
        top: read(row.checked_sub(1), Some(col)),
        bottom: read(row.checked_add(1), Some(col)),
    }
}

pub struct NeighborEnricher<'a, S: CellSource> {
    source: &'a S,
    range: CellRange,
    mode: NeighborMode,
}

impl<'a, S: CellSource> NeighborEnricher<'a, S> {
    pub fn new(source: &'a S, range: CellRange, mode: NeighborMode) -> Self {
        Self {
            source,
            range,
            mode,
        }
    }

    /// Add the four neighbor columns to `buffer` in place. Row count is unchanged.
    pub fn enrich(&self, buffer: &mut Buffer) {
        let targets: Vec<usize> = NEIGHBOR_COLUMNS
            .iter()
            .map(|name| buffer.ensure_column(name))
            .collect();
        let source_width = buffer.source_width();

        for (row_index, row) in buffer.rows_mut().iter_mut().enumerate() {
            let mut per_cell = Vec::with_capacity(source_width);

            for col_index in 0..source_width {
                let (sheet_row, sheet_col) = self.sheet_position(row_index, col_index);
                let neighbors = neighbors_of(self.source, sheet_row, sheet_col);

                // keyed by row only: each column overwrites the previous one
                for (target, value) in targets.iter().zip(neighbors.clone().into_values()) {
                    row.values[*target] = value;
                }
                per_cell.push(neighbors);
            }

            row.neighbors = match self.mode {
                NeighborMode::Sheet => per_cell,
                NeighborMode::Legacy => Vec::new(),
            };
        }

        info!(
            "Enriched {} rows x {} columns ({:?} coordinates)",
            buffer.row_count(),
            source_width,
            self.mode
        );
        debug!("Columns after enrichment: {:?}", buffer.columns());
    }

    fn sheet_position(&self, row_index: usize, col_index: usize) -> (u32, u32) {
        let row_index = row_index as u32;
        let col_index = col_index as u32;
        match self.mode {
            NeighborMode::Sheet => (
                self.range.start_row + 1 + row_index,
                self.range.start_col + col_index,
            ),
            NeighborMode::Legacy => (row_index + 1, col_index + 1),
        }
    }
}
