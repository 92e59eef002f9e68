use anyhow::Result;

use sdrf_cli::settings::Settings;
use sdrf_cli::workflow::{ColumnInfo, MapReport, column_overview, execute_map, load_registry};

use crate::cli::{ColumnsArgs, MapArgs};

pub fn run_columns(args: &ColumnsArgs, settings: &Settings) -> Result<Vec<ColumnInfo>> {
    let registry = load_registry(args.ontology.as_deref(), settings)?;
    Ok(column_overview(&registry))
}

pub fn run_map(args: MapArgs, settings: &Settings) -> Result<MapReport> {
    let request = args.into_request();
    execute_map(&request, settings)
}
