use crate::config::RunConfig;
use crate::error::RangeDbResult;
use crate::pipeline::{self, RunSummary};
use crate::types::Buffer;
use colored::Colorize;

pub const SUCCESS_MESSAGE: &str = "Data export to Access database completed successfully.";

/// How the final buffer is shown, if at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preview {
    #[default]
    Off,
    Table,
    Json,
}

/// Execute the export: run the pipeline and report
pub fn export(config: &RunConfig, preview: Preview) -> RangeDbResult<()> {
    let summary = pipeline::run(config)?;

    match preview {
        Preview::Off => {}
        Preview::Table => print!("{}", render_table(&summary.buffer)),
        Preview::Json => println!("{}", serde_json::to_string_pretty(&summary.buffer)?),
    }

    if config.dry_run {
        print_plan(&summary);
        return Ok(());
    }

    println!("{}", SUCCESS_MESSAGE.bold().green());
    Ok(())
}

fn print_plan(summary: &RunSummary) {
    println!(
        "{}",
        format!(
            "Dry run - nothing written to {}",
            summary.database_path.display()
        )
        .yellow()
    );
    for statement in &summary.statements {
        println!("{}", statement);
    }
}

/// Plain-text grid: header, rule, one line per row
pub(crate) fn render_table(buffer: &Buffer) -> String {
    let widths: Vec<usize> = buffer
        .columns()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            buffer
                .rows()
                .iter()
                .map(|row| row.values[index].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(buffer.columns()));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in buffer.rows() {
        out.push_str(&line(row.values.as_slice()));
        out.push('\n');
    }
    out
}
