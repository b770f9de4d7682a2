use clap::Args;

use compound_interest_core::InvestmentParameters;

use crate::input;

/// Investment parameters, as flags or from a file / stdin
#[derive(Args, Debug, Clone)]
pub struct ParamArgs {
    /// Initial capital (e.g. 1000)
    #[arg(long, default_value = "1000")]
    pub capital: String,

    /// Monthly contribution, added at the end of each month
    #[arg(long, alias = "aporte", default_value = "100")]
    pub contribution: String,

    /// Annual interest rate in percent (5 = 5% p.a.)
    #[arg(long, alias = "taxa", default_value = "5")]
    pub rate: String,

    /// Investment period in years; fractions allowed
    #[arg(long, alias = "periodo", default_value = "10")]
    pub years: String,

    /// Path to a JSON or YAML parameters file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Resolve parameters from `--input`, then piped stdin, then the flags,
/// and validate them before any computation.
pub fn resolve(args: &ParamArgs) -> Result<InvestmentParameters, Box<dyn std::error::Error>> {
    let params = if let Some(ref path) = args.input {
        tracing::debug!(path = %path, "parameters from file");
        let params: InvestmentParameters = input::file::read_document(path)?;
        params.validate()?;
        params
    } else if let Some(params) = input::stdin::read_stdin::<InvestmentParameters>()? {
        tracing::debug!("parameters from stdin");
        params.validate()?;
        params
    } else {
        tracing::debug!("parameters from flags");
        InvestmentParameters::parse(&args.capital, &args.contribution, &args.rate, &args.years)?
    };
    Ok(params)
}
