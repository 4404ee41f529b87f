use crate::reports;
use clap::{Args, ValueEnum};
use std::io;
use std::path::PathBuf;
use typepass::config::TableParams;
use typepass::cost::{cache, BigramCostTable};
use typepass::error::{TpResult, TypePassError};

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Letter-by-letter console grid.
    #[default]
    Grid,
    /// Flat array keyed by `(a<<5)+b`.
    Json,
    /// `From,To,Cost` rows.
    Csv,
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    #[command(flatten)]
    pub table: TableParams,

    #[arg(long, value_enum, default_value_t = ExportFormat::Grid)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &TableArgs, params: &TableParams, table: &BigramCostTable) -> TpResult<()> {
    match (args.format, &args.output) {
        (ExportFormat::Grid, None) => {
            reports::print_cost_matrix(table, params.topology);
            Ok(())
        }
        (ExportFormat::Grid, Some(_)) => Err(TypePassError::Config(
            "--output needs --format json or csv".to_string(),
        )),
        (ExportFormat::Json, Some(path)) => cache::save_json(table, path),
        (ExportFormat::Csv, Some(path)) => cache::save_csv(table, path),
        (ExportFormat::Json, None) => {
            println!("{}", serde_json::to_string(table.as_slice())?);
            Ok(())
        }
        (ExportFormat::Csv, None) => cache::write_csv(table, io::stdout().lock()),
    }
}
