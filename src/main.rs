use clap::Parser;
use rangedb::cli::{self, Preview, Prompter};
use rangedb::config::PartialConfig;
use rangedb::enrich::NeighborMode;
use rangedb::error::RangeDbResult;
use rangedb::sink::InsertMode;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rangedb")]
#[command(about = "Copy a spreadsheet range, with neighbor cells, into a new database table")]
#[command(long_about = "rangedb - spreadsheet range → embedded database

Reads a cell range from a workbook (first row = column names), adds the text
of neighboring cells (LeftCell, RightCell, TopCell, BottomCell), sorts the
rows and writes them to table 'Data' of a new database file.

Any of the five inputs not given as a flag or in the --config run file is
asked for interactively, in this order:
  file, range, directory, database name, sort criteria

SORT CRITERIA:
  Name                 ascending by column Name
  Name DESC            descending
  [Unit Price] DESC, Name
  (empty)              keep sheet order

EXAMPLES:
  rangedb -f sales.xlsx -r A1:D10 -d out -n sales -s \"Region DESC\"
  rangedb --config run.yaml --dry-run
  rangedb                                # prompts for everything")]
#[command(version)]
struct Cli {
    /// Path to the workbook (.xlsx, .xlsm, .xlsb, .xls, .ods)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Cell range, e.g. A1:D10
    #[arg(short, long)]
    range: Option<String>,

    /// Directory for the database file
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Database name (file name without extension)
    #[arg(short = 'n', long = "name")]
    database_name: Option<String>,

    /// Sort criteria, e.g. "Name DESC"
    #[arg(short, long)]
    sort: Option<String>,

    /// YAML run file supplying any of the options
    #[arg(short, long, env = "RANGEDB_CONFIG")]
    config: Option<PathBuf>,

    /// Worksheet number, 1 = first sheet
    #[arg(long)]
    sheet: Option<usize>,

    /// Database file extension
    #[arg(long)]
    extension: Option<String>,

    /// Index-based neighbor lookup where the last column wins
    #[arg(long)]
    legacy_neighbors: bool,

    /// Inline values as unescaped SQL literals instead of binding them
    #[arg(long)]
    inline_sql: bool,

    /// Print the statements instead of creating the database
    #[arg(long)]
    dry_run: bool,

    /// Print the final table
    #[arg(long)]
    preview: bool,

    /// Print the final table as JSON
    #[arg(long)]
    json: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn flags(&self) -> PartialConfig {
        PartialConfig {
            file: self.file.clone(),
            range: self.range.clone(),
            directory: self.directory.clone(),
            database_name: self.database_name.clone(),
            sort: self.sort.clone(),
            sheet: self.sheet,
            extension: self.extension.clone(),
            neighbor_mode: self.legacy_neighbors.then_some(NeighborMode::Legacy),
            insert_mode: self.inline_sql.then_some(InsertMode::Inline),
        }
    }

    fn preview(&self) -> Preview {
        if self.json {
            Preview::Json
        } else if self.preview {
            Preview::Table
        } else {
            Preview::Off
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "rangedb=debug" } else { "rangedb=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> RangeDbResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let base = match &cli.config {
        Some(path) => PartialConfig::from_yaml_file(path)?,
        None => PartialConfig::default(),
    };
    let partial = base.overlay(cli.flags());

    let stdin = io::stdin();
    let partial = Prompter::new(stdin.lock(), io::stdout()).complete(partial)?;
    let config = partial.into_config(cli.dry_run)?;

    cli::export(&config, cli.preview())
}
