//! Range reader - worksheet range → Buffer

use crate::excel::CellSource;
use crate::range::CellRange;
use crate::types::{Buffer, Row};
use tracing::{debug, info};

/// Copies a rectangular range into a text buffer.
///
/// The first range row supplies the column names, verbatim. Every later
/// row becomes one buffer row holding each cell's display text.
pub struct RangeReader<'a, S: CellSource> {
    source: &'a S,
    range: CellRange,
}

impl<'a, S: CellSource> RangeReader<'a, S> {
    pub fn new(source: &'a S, range: CellRange) -> Self {
        Self { source, range }
    }

    pub fn read(&self) -> Buffer {
        let range = self.range;

        let header: Vec<String> = (range.start_col..=range.end_col)
            .map(|col| self.source.text(range.start_row, col))
            .collect();
        debug!("Header row {}: {:?}", range.start_row, header);

        let mut buffer = Buffer::new(header);
        for row in (range.start_row + 1)..=range.end_row {
            let values = (range.start_col..=range.end_col)
                .map(|col| self.source.text(row, col))
                .collect();
            buffer.push_row(Row::new(values));
        }

        info!(
            "Read range {}: {} columns, {} rows",
            range,
            buffer.column_count(),
            buffer.row_count()
        );
        buffer
    }
}
