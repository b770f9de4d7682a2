mod commands;
mod export;
mod input;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::calculate::CalculateArgs;
use commands::export::{ChartArgs, ExportCsvArgs};
use commands::report::ReportArgs;
use commands::scenarios::ScenariosArgs;

/// Compound interest projections with monthly contributions
#[derive(Parser)]
#[command(
    name = "juros",
    version,
    about = "Compound interest projections with monthly contributions",
    long_about = "Computes the month-by-month balance of an investment with monthly \
                  capitalization and a fixed contribution added at the end of each month. \
                  Prints the annual summary and totals, exports the monthly series to CSV \
                  or SVG, and builds a comparative report over named scenarios."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,

    /// Currency symbol used in tables and reports
    #[arg(long, default_value = "R$", global = true)]
    currency_symbol: String,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the balance month by month and print totals and the annual summary
    Calculate(CalculateArgs),
    /// Export the monthly series to a CSV file (Month, Balance)
    ExportCsv(ExportCsvArgs),
    /// Render the monthly series as an SVG line chart
    Chart(ChartArgs),
    /// List the named scenarios used by the report
    Scenarios(ScenariosArgs),
    /// Build the multi-scenario report with charts and CSV files
    Report(ReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::calculate::run_calculate(args),
        Commands::ExportCsv(args) => commands::export::run_export_csv(args),
        Commands::Chart(args) => commands::export::run_chart(args),
        Commands::Scenarios(args) => commands::scenarios::run_scenarios(args),
        Commands::Report(args) => commands::report::run_report(args, &cli.currency_symbol),
        Commands::Version => {
            println!("juros {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &cli.currency_symbol, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
