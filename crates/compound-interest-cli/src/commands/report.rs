use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

use crate::commands::scenarios;
use crate::export::report::{self, ReportOptions};

/// Arguments for the multi-scenario report
#[derive(Args)]
pub struct ReportArgs {
    /// Path to a JSON or YAML scenario list (defaults to the built-in set)
    #[arg(long)]
    pub scenarios: Option<String>,

    /// Directory receiving the report, charts and CSV files
    #[arg(long, default_value = "reports")]
    pub out_dir: PathBuf,

    /// Author shown on the cover
    #[arg(long)]
    pub author: Option<String>,
}

pub fn run_report(args: ReportArgs, currency_symbol: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let scenarios = scenarios::load(args.scenarios.as_deref())?;
    let opts = ReportOptions {
        out_dir: &args.out_dir,
        author: args.author.as_deref(),
        date: chrono::Local::now().date_naive(),
        currency_symbol,
    };
    let summary = report::generate(&scenarios, &opts)?;
    Ok(serde_json::to_value(summary)?)
}
