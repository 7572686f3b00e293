use serde::Serialize;

//==============================================================================
// Neighbor columns
//==============================================================================

pub const LEFT_CELL: &str = "LeftCell";
pub const RIGHT_CELL: &str = "RightCell";
pub const TOP_CELL: &str = "TopCell";
pub const BOTTOM_CELL: &str = "BottomCell";

/// Names of the four columns appended by the enricher, in table order
pub const NEIGHBOR_COLUMNS: [&str; 4] = [LEFT_CELL, RIGHT_CELL, TOP_CELL, BOTTOM_CELL];

/// Text of the four cells adjacent to one sheet cell ("" when empty or off-sheet)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    pub left: String,
    pub right: String,
    pub top: String,
    pub bottom: String,
}

impl Neighbors {
    /// Values in `NEIGHBOR_COLUMNS` order
    pub fn into_values(self) -> [String; 4] {
        [self.left, self.right, self.top, self.bottom]
    }
}

//==============================================================================
// Tabular buffer
//==============================================================================

/// One buffer row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Values aligned with `Buffer::columns`
    pub values: Vec<String>,
    /// Per-source-column neighbors (filled by the sheet-coordinate enricher only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub neighbors: Vec<Neighbors>,
}

impl Row {
    pub fn new(values: Vec<String>) -> Self {
        Self {
            values,
            neighbors: Vec::new(),
        }
    }
}

/// In-memory table flowing through the pipeline.
///
/// Column names are kept exactly as read from the header row, so duplicates
/// and empty names are possible. Name lookups resolve to the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Buffer {
    columns: Vec<String>,
    rows: Vec<Row>,
    #[serde(skip)]
    source_width: usize,
}

impl Buffer {
    /// Create an empty buffer whose columns all came from the source range
    pub fn new(columns: Vec<String>) -> Self {
        let source_width = columns.len();
        Self {
            columns,
            rows: Vec::new(),
            source_width,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of leading columns read from the spreadsheet range
    pub fn source_width(&self) -> usize {
        self.source_width
    }

    /// Index of the first column called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Append a row, padding or truncating it to the declared columns
    pub fn push_row(&mut self, mut row: Row) {
        row.values.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Append a column if no column of that name exists yet; returns its index
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.values.push(String::new());
        }
        self.columns.len() - 1
    }

    /// Value of `column` in row `row`
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows
            .get(row)
            .and_then(|r| r.values.get(index))
            .map(String::as_str)
    }

    /// Same columns, different rows
    pub(crate) fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
            source_width: self.source_width,
        }
    }
}
