use clap::Args;
use serde_json::{json, Value};
use std::path::PathBuf;

use compound_interest_core::compute_series;

use super::params::{self, ParamArgs};
use crate::export::{chart, csv};

/// Arguments for exporting the monthly series to CSV
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ExportCsvArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Destination CSV file
    #[arg(long, default_value = "calculadora_juros_result.csv")]
    pub out: PathBuf,
}

/// Arguments for rendering the balance chart
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ChartArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Destination SVG file
    #[arg(long, default_value = "calculadora_juros_result.svg")]
    pub out: PathBuf,

    /// Chart caption
    #[arg(long, default_value = "Balance evolution")]
    pub title: String,
}

pub fn run_export_csv(args: ExportCsvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = params::resolve(&args.params)?;
    let (series, _) = compute_series(&params);
    csv::write_series_file(&args.out, &series)?;
    Ok(json!({
        "path": args.out.display().to_string(),
        "rows": series.len(),
    }))
}

pub fn run_chart(args: ChartArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = params::resolve(&args.params)?;
    let (series, _) = compute_series(&params);
    chart::write_svg_file(&args.out, &args.title, &series)?;
    Ok(json!({
        "path": args.out.display().to_string(),
        "points": series.len(),
    }))
}
