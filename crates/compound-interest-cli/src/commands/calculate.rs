use clap::Args;
use serde_json::Value;

use compound_interest_core::project_with_metadata;

use super::params::{self, ParamArgs};

/// Arguments for a single projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = params::resolve(&args.params)?;
    let output = project_with_metadata(&params)?;
    tracing::info!(
        months = output.result.number_of_months,
        final_balance = %output.result.totals.final_balance,
        "projection computed"
    );
    Ok(serde_json::to_value(output)?)
}
